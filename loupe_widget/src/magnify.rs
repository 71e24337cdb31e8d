// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use loupe_gesture::{PointerEvent, PointerKind};
use loupe_view::{LoadState, magnify_at};

use crate::config::MagnifyConfig;
use crate::error::WidgetError;
use crate::host::{Host, MAGNIFY_SOURCE_ATTRIBUTE, resolve_source};

/// Hover magnifier over a thumbnail.
///
/// While the pointer is inside the container the full-resolution image is
/// shown at natural size and shifted so the region under the pointer lines
/// up with it.
#[derive(Debug)]
pub struct MagnifyWidget<H> {
    host: H,
    config: MagnifyConfig,
    load: LoadState,
    visible: bool,
    attached: bool,
}

impl<H: Host> MagnifyWidget<H> {
    /// Attaches a magnifier to `host`. The image is fetched on first hover.
    pub fn new(mut host: H, config: MagnifyConfig) -> Self {
        host.subscribe(config.recognizers());
        Self {
            host,
            config,
            load: LoadState::Idle,
            visible: false,
            attached: true,
        }
    }

    /// Options this widget was built with.
    #[must_use]
    pub fn config(&self) -> &MagnifyConfig {
        &self.config
    }

    /// Image load progress.
    #[must_use]
    pub fn load(&self) -> LoadState {
        self.load
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `false` once [`MagnifyWidget::destroy`] has run.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
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

    /// Starts fetching the full-resolution image.
    ///
    /// Same contract as [`ZoomWidget::request_load`](crate::ZoomWidget::request_load).
    pub fn request_load(&mut self) -> Result<bool, WidgetError> {
        if !self.attached {
            return Err(WidgetError::Detached);
        }
        if self.load != LoadState::Idle {
            return Ok(false);
        }
        let url = resolve_source(
            self.config.source.as_deref(),
            &self.host,
            MAGNIFY_SOURCE_ATTRIBUTE,
        )?;
        self.load.request();
        log::debug!("magnify: fetching {url}");
        self.host.fetch(&url);
        Ok(true)
    }

    /// Host callback: the full-resolution image finished loading.
    pub fn on_image_loaded(&mut self) {
        if !self.attached || self.load.is_loaded() {
            log::trace!("magnify: ignoring load notification");
            return;
        }
        let Some(natural) = self.host.image_natural_size() else {
            log::warn!("magnify: load reported without a natural image size");
            return;
        };
        self.load = LoadState::Loaded;
        self.host.insert_overlay(natural);
        self.host.set_overlay_visible(self.visible);
        log::debug!(
            "magnify: image loaded at {}x{}",
            natural.width,
            natural.height
        );
    }

    /// Processes one pointer event.
    pub fn handle(&mut self, event: PointerEvent) {
        if !self.attached {
            log::trace!("magnify: dropping {event:?} after destroy");
            return;
        }
        if event.kind() == PointerKind::Touch && !self.config.touch_support {
            log::trace!("magnify: touch support disabled");
            return;
        }
        match event {
            PointerEvent::Enter { position, .. } => {
                match self.request_load() {
                    Ok(_) => {}
                    Err(WidgetError::MissingSource) => {
                        log::warn!("magnify: {}", WidgetError::MissingSource);
                    }
                    Err(err) => log::debug!("magnify: not loading: {err}"),
                }
                self.set_visible(true);
                self.track(position);
            }
            PointerEvent::Move { position, .. } => self.track(position),
            PointerEvent::Leave { .. } => self.set_visible(false),
        }
    }

    /// Tears the magnifier down: unsubscribes and removes the overlay.
    pub fn destroy(&mut self) -> Result<(), WidgetError> {
        if !self.attached {
            return Err(WidgetError::Detached);
        }
        self.host.unsubscribe();
        self.host.remove_overlay();
        self.attached = false;
        self.visible = false;
        log::debug!("magnify: destroyed");
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if self.load.is_loaded() {
            self.host.set_overlay_visible(visible);
        }
    }

    fn track(&mut self, page: Point) {
        if !self.load.is_loaded() {
            return;
        }
        let geometry = self.host.geometry();
        let pointer = geometry.to_container(page);
        match magnify_at(pointer, geometry.container_size(), geometry.image) {
            Some(offset) => self.host.move_overlay(offset),
            None => log::trace!("magnify: degenerate geometry, overlay left in place"),
        }
    }
}
