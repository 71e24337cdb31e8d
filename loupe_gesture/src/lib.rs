// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_gesture --heading-base-level=0

//! Loupe Gesture: the gesture-adapter contract for Loupe zoom widgets.
//!
//! Zoom widgets never see raw pointer input. A gesture recognizer (a
//! hammer-style library in the browser, or anything else) turns touches and
//! clicks into a handful of normalized events, and this crate defines them:
//!
//! - [`GestureEvent`]: tap, pan, directional swipe, pinch start/tick and double tap.
//! - [`PointerEvent`]: enter/move/leave for hover magnifiers.
//! - [`Recognizers`]: the set of recognizers a widget subscribes to.
//! - [`GestureSource`]: subscribe/unsubscribe on one widget's container.
//!
//! It also ships small building blocks for hosts and tests:
//!
//! - [`pan::PanTracker`] converts raw pointer positions into incremental pan events.
//! - [`ScriptedSource`] and [`GestureScript`] replay deterministic event
//!   sequences, honoring subscription filters and unsubscription.
//!
//! ## Scripted gestures
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_gesture::{GestureEvent, GestureScript, GestureSource, Recognizers, ScriptedSource};
//!
//! let script = GestureScript::new().pinch(Point::new(50.0, 50.0), [1.1, 1.2]);
//! let mut source = ScriptedSource::new(script);
//! source.subscribe(Recognizers::ZOOM);
//!
//! let mut ticks = 0;
//! while let Some(event) = source.next_event() {
//!     if matches!(event, GestureEvent::Pinch { .. }) {
//!         ticks += 1;
//!     }
//! }
//! assert_eq!(ticks, 2);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod event;
pub mod pan;
mod recognizers;
mod source;

pub use event::{GestureEvent, PanDirection, PointerEvent, PointerKind, Recognized};
pub use recognizers::Recognizers;
pub use source::{GestureScript, GestureSource, ScriptedSource};
