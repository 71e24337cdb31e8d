// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_widget --heading-base-level=0

//! Loupe Widget: zoom and magnify widgets built on the Loupe engine.
//!
//! Two widgets live here:
//!
//! - [`ZoomWidget`]: pinch to zoom, drag to pan, double tap to toggle
//!   between rest and maximum zoom. The full-resolution image is fetched
//!   lazily on first interaction unless configured otherwise.
//! - [`MagnifyWidget`]: shows the full-resolution image on hover and moves
//!   it proportionally to the pointer.
//!
//! A widget talks to its surroundings only through the [`Host`] traits:
//!
//! - [`GeometryProvider`] reports container and image sizes, read fresh on
//!   every event.
//! - [`RenderSink`] applies overlay insertion, transforms and visibility.
//! - [`ImageLoader`] resolves `data-*` source attributes and starts fetches.
//! - [`GestureSource`](loupe_gesture::GestureSource) subscribes the
//!   recognizers the widget needs.
//!
//! ## Lifecycle
//!
//! 1. Construct the widget with its host and options. It subscribes
//!    immediately.
//! 2. Feed recognized events into `handle`. Before the image has loaded these
//!    only trigger the (idempotent) fetch.
//! 3. Call `on_image_loaded` once the host's fetch completes.
//! 4. Call `destroy` to unsubscribe and remove the overlay.
//!
//! ## Configuration
//!
//! [`ZoomConfig`] and [`MagnifyConfig`] are plain values with documented
//! defaults. With the `serde` feature (on by default) they deserialize from
//! camelCase option objects such as `{ "lazyLoad": false, "pan": 12 }`.
//!
//! ## Logging
//!
//! Widgets log through the [`log`] facade: `debug` for fetches, loads and
//! teardown, `trace` for events they drop, `warn` for host inconsistencies.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod error;
mod host;
mod magnify;
mod zoom;

pub use config::{MagnifyConfig, ZoomConfig};
pub use error::{ConfigError, WidgetError};
pub use host::{
    GeometryProvider, Host, ImageLoader, MAGNIFY_SOURCE_ATTRIBUTE, RenderSink, Transition,
    ZOOM_SOURCE_ATTRIBUTE,
};
pub use magnify::MagnifyWidget;
pub use zoom::ZoomWidget;
