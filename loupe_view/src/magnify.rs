// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::geometry::is_usable;

/// Position of a hover-magnified image for a pointer inside its container.
///
/// This is a direct proportional mapping, not an accumulator: the pointer is
/// clamped into the container, then each axis is scaled by
/// `(image - container) / container` and negated. The result is the
/// `(left, top)` offset of the full-size image relative to the container.
///
/// Returns `None` for degenerate sizes or a non-finite pointer.
///
/// ```rust
/// use kurbo::{Point, Size, Vec2};
/// use loupe_view::magnify_at;
///
/// let offset = magnify_at(Point::new(50.0, 50.0), Size::new(200.0, 200.0), Size::new(800.0, 800.0));
/// assert_eq!(offset, Some(Vec2::new(-150.0, -150.0)));
/// ```
#[must_use]
pub fn magnify_at(pointer: Point, container: Size, image: Size) -> Option<Vec2> {
    if !is_usable(container) || !is_usable(image) || !pointer.is_finite() {
        return None;
    }
    let x_ratio = (image.width - container.width) / container.width;
    let y_ratio = (image.height - container.height) / container.height;
    let x = pointer.x.clamp(0.0, container.width);
    let y = pointer.y.clamp(0.0, container.height);
    Some(Vec2::new(-x_ratio * x, -y_ratio * y))
}
