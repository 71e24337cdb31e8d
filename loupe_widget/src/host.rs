// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits a widget drives: geometry, rendering and image loading.

use alloc::string::String;

use kurbo::{Point, Size, Vec2};
use loupe_gesture::GestureSource;
use loupe_view::{Geometry, TransformRequest};

use crate::error::WidgetError;

/// Data attribute holding the zoom image url on the container.
pub const ZOOM_SOURCE_ATTRIBUTE: &str = "zoom-src";

/// Data attribute holding the magnified image url on the thumbnail.
pub const MAGNIFY_SOURCE_ATTRIBUTE: &str = "magnify-source";

/// Live container and image measurements.
///
/// Widgets query these on every event and never cache them.
pub trait GeometryProvider {
    /// Container size in pixels.
    fn container_size(&self) -> Size;

    /// Container top-left corner in page coordinates.
    fn container_offset(&self) -> Point;

    /// Natural size of the full-resolution image, `None` until it has loaded.
    fn image_natural_size(&self) -> Option<Size>;

    /// Snapshot of the current geometry.
    fn geometry(&self) -> Geometry {
        Geometry::new(
            self.container_offset(),
            self.container_size(),
            self.image_natural_size().unwrap_or(Size::ZERO),
        )
    }
}

/// How the sink should animate towards a new transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Apply immediately, used while dragging.
    Instant,
    /// Ease towards the new transform, used for pinch steps and double-tap.
    Eased,
}

/// Applies widget output to the overlay image.
///
/// The overlay is an absolutely positioned copy of the full-resolution
/// image layered over the thumbnail, with its transform origin pinned to the
/// container's top-left corner.
pub trait RenderSink {
    /// Inserts the overlay at `size` and clips the container.
    fn insert_overlay(&mut self, size: Size);

    /// Applies a translate + scale transform to the overlay.
    fn apply_transform(&mut self, transform: TransformRequest, transition: Transition);

    /// Positions the overlay's top-left corner at `offset` inside the container.
    fn move_overlay(&mut self, offset: Vec2);

    /// Shows or hides the overlay without removing it.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Removes the overlay and restores the container's overflow.
    fn remove_overlay(&mut self);
}

/// Fetches the full-resolution image.
pub trait ImageLoader {
    /// Reads a `data-*` attribute from the widget's markup.
    fn source_attribute(&self, name: &str) -> Option<String>;

    /// Starts loading `url`. The host reports completion through the
    /// widget's `on_image_loaded`.
    fn fetch(&mut self, url: &str);
}

/// Everything a widget needs from its surroundings.
pub trait Host: GeometryProvider + RenderSink + ImageLoader + GestureSource {}

impl<T: GeometryProvider + RenderSink + ImageLoader + GestureSource> Host for T {}

/// Picks the image url: a non-empty configured url, else a non-empty
/// attribute value.
pub(crate) fn resolve_source(
    configured: Option<&str>,
    loader: &impl ImageLoader,
    attribute: &str,
) -> Result<String, WidgetError> {
    if let Some(url) = configured.filter(|url| !url.is_empty()) {
        return Ok(url.into());
    }
    loader
        .source_attribute(attribute)
        .filter(|url| !url.is_empty())
        .ok_or(WidgetError::MissingSource)
}
