// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Affine, Point, Vec2};

/// Translate + scale pair produced for the render sink.
///
/// The overlay image is transformed with `transform-origin` pinned to the
/// container's top-left corner, so a point `p` of the unscaled overlay ends
/// up at `translate + scale * p` in container space.
///
/// The [`Display`](fmt::Display) impl renders a CSS transform value:
///
/// ```rust
/// use kurbo::Vec2;
/// use loupe_view::TransformRequest;
///
/// let request = TransformRequest { translate: Vec2::new(-12.4, -30.5), scale: 1.5 };
/// assert_eq!(request.to_string(), "translate(-12px, -30px) scale(1.5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformRequest {
    /// Offset in container pixels.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for TransformRequest {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformRequest {
    /// No translation, unit scale.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// Returns the equivalent affine map from overlay to container space.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Maps a point of the unscaled overlay into container space.
    #[must_use]
    pub fn overlay_to_container(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }
}

impl fmt::Display for TransformRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            round_px(self.translate.x),
            round_px(self.translate.y),
            self.scale
        )
    }
}

/// Rounds half up to a whole pixel, folding `-0` into `0`.
fn round_px(value: f64) -> f64 {
    (value + 0.5).floor() + 0.0
}
