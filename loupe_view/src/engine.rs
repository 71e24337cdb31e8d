// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::geometry::{Geometry, clamp_translate};
use crate::modes::{ScaleDirection, ZoomPhase};
use crate::state::ViewportState;

/// Gesture-to-transform arithmetic for a zoomable image.
///
/// `TransformEngine` holds only the immutable zoom increment. Every
/// operation is a pure function of the current [`ViewportState`], the
/// gesture input and a fresh [`Geometry`] snapshot, and returns the next
/// state. Operations are no-ops until the image has loaded and whenever the
/// geometry is degenerate.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use loupe_view::{Geometry, TransformEngine, ViewportState};
///
/// let engine = TransformEngine::new(0.05);
/// let geometry = Geometry::new(Point::ZERO, Size::new(300.0, 300.0), Size::new(1200.0, 900.0));
///
/// let mut state = ViewportState::new();
/// state.mark_loaded();
///
/// let zoomed = engine.double_tap(state, Point::new(150.0, 150.0), &geometry);
/// assert_eq!(zoomed.scale(), 3.0);
///
/// let rest = engine.double_tap(zoomed, Point::new(150.0, 150.0), &geometry);
/// assert_eq!(rest.scale(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformEngine {
    delta_scale: f64,
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELTA_SCALE)
    }
}

impl TransformEngine {
    /// Scale increment applied per pinch tick by default.
    pub const DEFAULT_DELTA_SCALE: f64 = 0.05;

    /// Creates an engine stepping the scale by `delta_scale` per tick.
    ///
    /// A non-finite or non-positive increment disables [`Self::scale_step`].
    #[must_use]
    pub fn new(delta_scale: f64) -> Self {
        Self { delta_scale }
    }

    /// Returns the per-tick scale increment.
    #[must_use]
    pub fn delta_scale(&self) -> f64 {
        self.delta_scale
    }

    /// Moves the image by `delta`, clamped to the pan limits.
    #[must_use]
    pub fn pan(&self, state: ViewportState, delta: Vec2, geometry: &Geometry) -> ViewportState {
        if !state.is_image_loaded() || !delta.is_finite() {
            return state;
        }
        let Some(limits) = geometry.pan_limits(state.scale()) else {
            return state;
        };
        state.with_translate(clamp_translate(state.translate() + delta, limits))
    }

    /// Freezes the pinch anchor for the gesture that starts at `center`.
    ///
    /// The previous pinch ratio resets to `0.0`, so the first pinch tick of
    /// the new gesture always zooms in.
    #[must_use]
    pub fn pinch_start(&self, state: ViewportState, center: Point) -> ViewportState {
        if !state.is_image_loaded() || !center.is_finite() {
            return state;
        }
        state.with_pinch(center, 0.0)
    }

    /// Applies one pinch tick with the gesture's cumulative scale `ratio`.
    ///
    /// Only the direction of change matters: the ratio is compared with the
    /// previous tick and the image steps up or down by one increment.
    #[must_use]
    pub fn pinch(&self, state: ViewportState, ratio: f64, geometry: &Geometry) -> ViewportState {
        if !state.is_image_loaded() || !ratio.is_finite() {
            return state;
        }
        let direction = ScaleDirection::from_pinch_ratios(state.last_pinch_ratio(), ratio);
        let next = self.scale_step(state, direction, geometry);
        next.with_pinch(next.pinch_anchor(), ratio)
    }

    /// Steps the scale by one increment around the pinch anchor.
    ///
    /// Scaling down at `1.0` does nothing; a step that would land at or
    /// below `1.0` snaps back to rest with no translate. Scaling up past the
    /// maximum scale does nothing.
    #[must_use]
    pub fn scale_step(
        &self,
        state: ViewportState,
        direction: ScaleDirection,
        geometry: &Geometry,
    ) -> ViewportState {
        let delta = self.delta_scale;
        if !state.is_image_loaded() || !delta.is_finite() || delta <= 0.0 {
            return state;
        }
        let Some(max_scale) = geometry.max_scale() else {
            return state;
        };
        let mouse = geometry.to_container(state.pinch_anchor()).to_vec2();
        let translate = state.translate();

        let (scale, offset) = match direction {
            ScaleDirection::Down => {
                if state.scale() <= 1.0 {
                    return state;
                }
                let scale = state.scale() - delta;
                if scale <= 1.0 {
                    return self.zoom_to_minimum(state);
                }
                let offset = mouse * delta + Vec2::new(translate.x.min(0.0), translate.y.min(0.0));
                (scale, offset)
            }
            ScaleDirection::Up => {
                let scale = state.scale() + delta;
                if scale > max_scale {
                    return state;
                }
                let focal = -(mouse * delta);
                let offset = Vec2::new(
                    accumulate_negative(focal.x, translate.x),
                    accumulate_negative(focal.y, translate.y),
                );
                (scale, offset)
            }
        };

        let Some(limits) = geometry.pan_limits(scale) else {
            return state;
        };
        state.with_transform(scale, clamp_translate(offset, limits))
    }

    /// Toggles between rest and maximum zoom around `tap`.
    #[must_use]
    pub fn double_tap(&self, state: ViewportState, tap: Point, geometry: &Geometry) -> ViewportState {
        if !state.is_image_loaded() {
            return state;
        }
        match state.phase() {
            ZoomPhase::AtRest => self.zoom_to_maximum(state, tap, geometry),
            ZoomPhase::Zoomed => self.zoom_to_minimum(state),
        }
    }

    /// Jumps to the maximum scale keeping the point under `focus` in place.
    ///
    /// Does nothing when the maximum scale is not above the current one,
    /// which also covers images smaller than their container.
    #[must_use]
    pub fn zoom_to_maximum(
        &self,
        state: ViewportState,
        focus: Point,
        geometry: &Geometry,
    ) -> ViewportState {
        if !state.is_image_loaded() || !focus.is_finite() {
            return state;
        }
        let Some(max_scale) = geometry.max_scale() else {
            return state;
        };
        if max_scale <= state.scale() {
            return state;
        }
        let mouse = geometry.to_container(focus).to_vec2();
        let mut offset = -(mouse * (max_scale - state.scale()));
        offset.y = offset.y.min(0.0);

        let Some(limits) = geometry.pan_limits(max_scale) else {
            return state;
        };
        state.with_transform(max_scale, clamp_translate(offset, limits))
    }

    /// Resets to scale `1.0` with no translate.
    #[must_use]
    pub fn zoom_to_minimum(&self, state: ViewportState) -> ViewportState {
        state.with_transform(1.0, Vec2::ZERO)
    }
}

/// Carries the existing translate forward only while the focal offset is negative.
fn accumulate_negative(focal: f64, current: f64) -> f64 {
    if focal < 0.0 { focal + current } else { 0.0 }
}
