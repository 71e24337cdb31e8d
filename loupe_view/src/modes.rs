// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a single zoom step.
///
/// Consulted by [`crate::TransformEngine::scale_step`]; pinch handling picks
/// the direction with [`ScaleDirection::from_pinch_ratios`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleDirection {
    /// Zoom in by one increment, bounded by the maximum scale.
    Up,
    /// Zoom out by one increment, snapping back to rest at scale `1.0`.
    Down,
}

impl ScaleDirection {
    /// Chooses a direction by comparing two consecutive pinch ratios.
    ///
    /// A shrinking ratio means the fingers are closing, so the image scales
    /// down. Anything else, including an unchanged ratio, scales up.
    #[must_use]
    pub fn from_pinch_ratios(previous: f64, current: f64) -> Self {
        if current < previous { Self::Down } else { Self::Up }
    }
}

/// Coarse zoom state used by the double-tap toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    /// Scale is `1.0`: the image exactly fits the container.
    #[default]
    AtRest,
    /// Scale is above `1.0`.
    Zoomed,
}

/// Progress of the full-resolution image fetch.
///
/// `Requested` is the "intent to load" marker: once a fetch has been issued,
/// further requests are suppressed until the image reports back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Requested,
    /// The image finished loading; gestures now drive the transform.
    Loaded,
}

impl LoadState {
    /// Moves from [`LoadState::Idle`] to [`LoadState::Requested`].
    ///
    /// Returns `true` only on that transition, so callers issue at most one
    /// fetch no matter how often this is called before the load completes.
    pub fn request(&mut self) -> bool {
        if *self == Self::Idle {
            *self = Self::Requested;
            true
        } else {
            false
        }
    }

    /// Returns `true` once the image has loaded.
    #[must_use]
    pub fn is_loaded(self) -> bool {
        self == Self::Loaded
    }
}
