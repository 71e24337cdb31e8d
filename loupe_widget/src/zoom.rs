// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use loupe_gesture::GestureEvent;
use loupe_view::{LoadState, TransformEngine, TransformRequest, ViewportState};

use crate::config::ZoomConfig;
use crate::error::{ConfigError, WidgetError};
use crate::host::{Host, Transition, ZOOM_SOURCE_ATTRIBUTE, resolve_source};

/// Pinch, pan and double-tap zoom over one container.
///
/// The widget owns its [`Host`] and a [`ViewportState`]. Each call to
/// [`ZoomWidget::handle`] reads fresh geometry from the host, runs the
/// [`TransformEngine`], and forwards the transform to the render sink only
/// when it changed.
#[derive(Debug)]
pub struct ZoomWidget<H> {
    host: H,
    config: ZoomConfig,
    engine: TransformEngine,
    state: ViewportState,
    attached: bool,
}

impl<H: Host> ZoomWidget<H> {
    /// Attaches a widget to `host`.
    ///
    /// Subscribes the recognizers `config` asks for and, unless
    /// `lazy_load` is set, starts fetching the full-resolution image.
    pub fn new(mut host: H, config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        host.subscribe(config.recognizers());
        let mut widget = Self {
            host,
            engine: TransformEngine::new(config.delta_scale),
            config,
            state: ViewportState::new(),
            attached: true,
        };
        if !widget.config.lazy_load {
            widget.load_quietly();
        }
        Ok(widget)
    }

    /// Current zoom state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Options this widget was built with.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Shared access to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the host, dropping the widget.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Returns `false` once [`ZoomWidget::destroy`] has run.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Starts fetching the full-resolution image.
    ///
    /// Returns `Ok(true)` when a fetch was issued and `Ok(false)` when one is
    /// already in flight or done. A missing source issues nothing and leaves
    /// the widget free to try again later.
    pub fn request_load(&mut self) -> Result<bool, WidgetError> {
        if !self.attached {
            return Err(WidgetError::Detached);
        }
        if self.state.load() != LoadState::Idle {
            return Ok(false);
        }
        let url = resolve_source(self.config.url.as_deref(), &self.host, ZOOM_SOURCE_ATTRIBUTE)?;
        self.state.request_load();
        log::debug!("zoom: fetching {url}");
        self.host.fetch(&url);
        Ok(true)
    }

    /// Host callback: the full-resolution image finished loading.
    ///
    /// Inserts the overlay at container size with the identity transform.
    /// Ignored after destroy and on repeated notifications.
    pub fn on_image_loaded(&mut self) {
        if !self.attached || self.state.is_image_loaded() {
            log::trace!("zoom: ignoring load notification");
            return;
        }
        self.state.mark_loaded();
        let size = self.host.container_size();
        self.host.insert_overlay(size);
        self.host
            .apply_transform(TransformRequest::IDENTITY, Transition::Eased);
        log::debug!("zoom: image loaded, overlay at {}x{}", size.width, size.height);
    }

    /// Processes one recognized gesture.
    pub fn handle(&mut self, event: GestureEvent) {
        if !self.attached {
            log::trace!("zoom: dropping {event:?} after destroy");
            return;
        }
        if !self.state.is_image_loaded() {
            if self.config.lazy_load {
                self.load_quietly();
            }
            return;
        }

        let geometry = self.host.geometry();
        match event {
            GestureEvent::Tap { .. } => {}
            GestureEvent::Pan { delta } => {
                let delta = -delta / self.config.pan_damping;
                let next = self.engine.pan(self.state, delta, &geometry);
                self.commit(next, Transition::Instant);
            }
            GestureEvent::PanDirectional(direction) => {
                if !self.config.directional_pan_events {
                    log::trace!("zoom: directional pan disabled");
                    return;
                }
                let delta = direction.offset(self.config.pan_step);
                let next = self.engine.pan(self.state, delta, &geometry);
                self.commit(next, Transition::Instant);
            }
            GestureEvent::PinchStart { center } => {
                self.state = self.engine.pinch_start(self.state, center);
            }
            GestureEvent::Pinch { scale, .. } => {
                let next = self.engine.pinch(self.state, scale, &geometry);
                self.commit(next, Transition::Eased);
            }
            GestureEvent::DoubleTap { center } => {
                let next = self.engine.double_tap(self.state, center, &geometry);
                self.commit(next, Transition::Eased);
            }
        }
    }

    /// Zooms all the way in around `focus`, as a double-tap at rest would.
    pub fn zoom_to_maximum(&mut self, focus: Point) {
        if !self.attached {
            return;
        }
        let geometry = self.host.geometry();
        let next = self.engine.zoom_to_maximum(self.state, focus, &geometry);
        self.commit(next, Transition::Eased);
    }

    /// Returns to scale `1.0` with no translate.
    pub fn zoom_to_minimum(&mut self) {
        if !self.attached {
            return;
        }
        let next = self.engine.zoom_to_minimum(self.state);
        self.commit(next, Transition::Eased);
    }

    /// Tears the widget down.
    ///
    /// Unsubscribes every recognizer and removes the overlay. Safe to call
    /// mid-gesture: no event reaches the engine afterwards.
    pub fn destroy(&mut self) -> Result<(), WidgetError> {
        if !self.config.supports_destroy {
            return Err(WidgetError::DestroyUnsupported);
        }
        if !self.attached {
            return Err(WidgetError::Detached);
        }
        self.host.unsubscribe();
        self.host.remove_overlay();
        self.attached = false;
        log::debug!("zoom: destroyed");
        Ok(())
    }

    fn load_quietly(&mut self) {
        match self.request_load() {
            Ok(_) => {}
            Err(WidgetError::MissingSource) => log::warn!("zoom: {}", WidgetError::MissingSource),
            Err(err) => log::debug!("zoom: not loading: {err}"),
        }
    }

    fn commit(&mut self, next: ViewportState, transition: Transition) {
        let transform = next.transform();
        if transform != self.state.transform() {
            self.host.apply_transform(transform, transition);
        }
        self.state = next;
    }
}
