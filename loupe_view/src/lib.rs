// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_view --heading-base-level=0

//! Loupe View: the transform engine behind pinch-to-zoom image widgets.
//!
//! This crate provides a small, headless model of an image shown inside a
//! fixed-size container and zoomed with touch or mouse gestures. It focuses on:
//! - Bounded zoom: scale stays in `[1, max_scale]`, where `max_scale` stops
//!   the image from being upscaled past its native resolution.
//! - Bounded pan: the image only ever shifts up/left, never far enough to
//!   reveal empty space inside the container.
//! - Focal-point zoom: pinch steps and double-tap keep the point under the
//!   gesture roughly stationary.
//! - Hover magnification: a proportional pointer-to-offset mapping.
//!
//! It does **not** recognize gestures or touch the DOM. Callers are
//! expected to:
//! - Turn raw pointer input into normalized pan/pinch/double-tap events
//!   (see `loupe_gesture`).
//! - Query container and image geometry fresh on every event.
//! - Apply the resulting [`TransformRequest`] to the overlay image.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use loupe_view::{Geometry, TransformEngine, ViewportState};
//!
//! let engine = TransformEngine::new(0.05);
//! let geometry = Geometry::new(Point::ZERO, Size::new(300.0, 300.0), Size::new(1200.0, 900.0));
//! assert_eq!(geometry.max_scale(), Some(3.0));
//!
//! let mut state = ViewportState::new();
//! state.mark_loaded();
//!
//! // Pinch outwards around the container center.
//! let mut state = engine.pinch_start(state, Point::new(150.0, 150.0));
//! for ratio in [1.05, 1.1, 1.15] {
//!     state = engine.pinch(state, ratio, &geometry);
//! }
//! assert!(state.scale() > 1.0);
//!
//! // Drag; the translate is clamped to the pan limits.
//! let state = engine.pan(state, Vec2::new(10_000.0, 0.0), &geometry);
//! assert_eq!(state.translate().x, 0.0);
//!
//! let css = state.transform().to_string();
//! assert!(css.starts_with("translate("));
//! ```
//!
//! ## Design notes
//!
//! - The engine is pure: `(state, event, geometry) -> state`. Side effects
//!   belong to whoever applies the [`TransformRequest`].
//! - Scaling down onto `1.0` snaps straight back to the origin, so repeated
//!   zoom-out always lands exactly at rest.
//! - Degenerate geometry (zero, negative or non-finite sizes) turns every
//!   operation into a no-op rather than producing `NaN`.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod engine;
mod geometry;
mod magnify;
mod modes;
mod request;
mod state;

pub use engine::TransformEngine;
pub use geometry::{Geometry, max_scale, pan_limits};
pub use magnify::magnify_at;
pub use modes::{LoadState, ScaleDirection, ZoomPhase};
pub use request::TransformRequest;
pub use state::ViewportState;
