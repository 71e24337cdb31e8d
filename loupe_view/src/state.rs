// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::modes::{LoadState, ZoomPhase};
use crate::request::TransformRequest;

/// Per-widget zoom state.
///
/// A `ViewportState` is a small `Copy` value. [`crate::TransformEngine`]
/// never mutates it in place; each operation returns the next state.
///
/// Invariants maintained by the engine:
/// - `1.0 <= scale <= max_scale` for the current geometry.
/// - Each translate component lies in `[pan_limit, 0]`: the image may only
///   shift up/left, never far enough to reveal space inside the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    scale: f64,
    translate: Vec2,
    load: LoadState,
    pinch_anchor: Point,
    last_pinch_ratio: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportState {
    /// Creates a state at rest with no image requested.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
            load: LoadState::Idle,
            pinch_anchor: Point::ZERO,
            last_pinch_ratio: 0.0,
        }
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current translate offset in container pixels.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Returns the page-space point captured at the last pinch start.
    #[must_use]
    pub fn pinch_anchor(&self) -> Point {
        self.pinch_anchor
    }

    /// Returns the ratio seen on the previous pinch tick.
    #[must_use]
    pub fn last_pinch_ratio(&self) -> f64 {
        self.last_pinch_ratio
    }

    /// Returns the image load progress.
    #[must_use]
    pub fn load(&self) -> LoadState {
        self.load
    }

    /// Returns `true` once the full-resolution image has loaded.
    #[must_use]
    pub fn is_image_loaded(&self) -> bool {
        self.load.is_loaded()
    }

    /// Returns whether the image is at rest or zoomed in.
    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        if self.scale <= 1.0 {
            ZoomPhase::AtRest
        } else {
            ZoomPhase::Zoomed
        }
    }

    /// Records the intent to fetch the full-resolution image.
    ///
    /// Returns `true` only on the transition out of [`LoadState::Idle`], so
    /// callers issue at most one fetch no matter how often this is called
    /// before the load completes.
    pub fn request_load(&mut self) -> bool {
        self.load.request()
    }

    /// Marks the full-resolution image as loaded.
    pub fn mark_loaded(&mut self) {
        self.load = LoadState::Loaded;
    }

    /// Transform to hand to the render sink for this state.
    #[must_use]
    pub fn transform(&self) -> TransformRequest {
        TransformRequest {
            translate: self.translate,
            scale: self.scale,
        }
    }

    pub(crate) fn with_transform(mut self, scale: f64, translate: Vec2) -> Self {
        self.scale = scale;
        self.translate = translate;
        self
    }

    pub(crate) fn with_translate(mut self, translate: Vec2) -> Self {
        self.translate = translate;
        self
    }

    pub(crate) fn with_pinch(mut self, anchor: Point, ratio: f64) -> Self {
        self.pinch_anchor = anchor;
        self.last_pinch_ratio = ratio;
        self
    }
}
