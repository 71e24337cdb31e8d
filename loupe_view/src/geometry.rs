// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect, Size, Vec2};

/// Snapshot of the container and image dimensions for one gesture tick.
///
/// Geometry is queried fresh from the host on every event and never cached:
/// responsive layouts may resize the container between ticks, and the image
/// size is only known once the full-resolution image has loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Container rectangle in page coordinates. Its origin is the container
    /// offset used to turn gesture points into container-relative points.
    pub container: Rect,
    /// Natural size of the full-resolution image.
    pub image: Size,
}

impl Geometry {
    /// Builds a snapshot from the container offset, container size and image size.
    #[must_use]
    pub fn new(container_offset: Point, container_size: Size, image: Size) -> Self {
        Self {
            container: Rect::from_origin_size(container_offset, container_size),
            image,
        }
    }

    /// Returns the container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container.size()
    }

    /// Returns the container offset in page coordinates.
    #[must_use]
    pub fn container_offset(&self) -> Point {
        self.container.origin()
    }

    /// Returns `true` when either the container or the image has a zero,
    /// negative or non-finite dimension.
    ///
    /// Every engine operation is a no-op on degenerate geometry.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.container.origin().is_finite()
            || !is_usable(self.container_size())
            || !is_usable(self.image)
    }

    /// Maximum admissible scale, see [`max_scale`].
    #[must_use]
    pub fn max_scale(&self) -> Option<f64> {
        if !self.container.origin().is_finite() {
            return None;
        }
        max_scale(self.container_size(), self.image)
    }

    /// Pan limits at `scale`, see [`pan_limits`].
    #[must_use]
    pub fn pan_limits(&self, scale: f64) -> Option<Vec2> {
        if self.is_degenerate() || !scale.is_finite() {
            return None;
        }
        Some(pan_limits(self.container_size(), self.image, scale))
    }

    /// Converts a page-space point into container-relative coordinates.
    #[must_use]
    pub fn to_container(&self, page: Point) -> Point {
        page - self.container.origin().to_vec2()
    }
}

/// Largest scale at which the image is not upscaled past its native resolution.
///
/// This is `min(image.width / container.width, image.height / container.height)`
/// rounded to two decimal places. Returns `None` for degenerate sizes.
///
/// The result can be below `1.0` when the image is smaller than the
/// container; zooming in is then impossible.
#[must_use]
pub fn max_scale(container: Size, image: Size) -> Option<f64> {
    if !is_usable(container) || !is_usable(image) {
        return None;
    }
    let limit = (image.width / container.width).min(image.height / container.height);
    Some((limit * 100.0).round() / 100.0)
}

/// Most negative admissible translate on each axis at `scale`.
///
/// The admissible range per axis is `[limit, 0]`. When the scaled image is
/// narrower than the container the limit is `0` and no travel is allowed.
#[must_use]
pub fn pan_limits(container: Size, image: Size, scale: f64) -> Vec2 {
    Vec2::new(
        (container.width - image.width * scale).min(0.0),
        (container.height - image.height * scale).min(0.0),
    )
}

/// Clamps `translate` into `[limits, 0]` per axis.
pub(crate) fn clamp_translate(translate: Vec2, limits: Vec2) -> Vec2 {
    Vec2::new(
        translate.x.clamp(limits.x, 0.0),
        translate.y.clamp(limits.y, 0.0),
    )
}

pub(crate) fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
