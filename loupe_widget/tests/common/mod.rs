// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host shared by the widget integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]

use std::collections::HashMap;

use kurbo::{Point, Size, Vec2};
use loupe_gesture::{GestureSource, Recognizers, ScriptedSource};
use loupe_view::TransformRequest;
use loupe_widget::{GeometryProvider, ImageLoader, RenderSink, Transition};

/// One call the widget made on the render sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum SinkCall {
    Insert(Size),
    Transform(TransformRequest, Transition),
    Move(Vec2),
    Visible(bool),
    Remove,
}

/// Records everything a widget asks of its host and replays scripted events.
#[derive(Debug)]
pub(crate) struct RecordingHost<E> {
    pub(crate) container_offset: Point,
    pub(crate) container_size: Size,
    pub(crate) natural_size: Option<Size>,
    pub(crate) attributes: HashMap<String, String>,
    pub(crate) fetches: Vec<String>,
    pub(crate) calls: Vec<SinkCall>,
    pub(crate) source: ScriptedSource<E>,
}

impl<E> RecordingHost<E> {
    pub(crate) fn new(container_offset: Point, container_size: Size) -> Self {
        Self {
            container_offset,
            container_size,
            natural_size: None,
            attributes: HashMap::new(),
            fetches: Vec::new(),
            calls: Vec::new(),
            source: ScriptedSource::default(),
        }
    }

    pub(crate) fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Simulates the fetched image arriving with `natural` dimensions.
    pub(crate) fn finish_fetch(&mut self, natural: Size) {
        self.natural_size = Some(natural);
    }

    /// Transforms applied so far, oldest first.
    #[allow(dead_code, reason = "Only the zoom tests inspect transforms.")]
    pub(crate) fn transforms(&self) -> Vec<(TransformRequest, Transition)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Transform(transform, transition) => Some((*transform, *transition)),
                _ => None,
            })
            .collect()
    }
}

impl<E> GeometryProvider for RecordingHost<E> {
    fn container_size(&self) -> Size {
        self.container_size
    }

    fn container_offset(&self) -> Point {
        self.container_offset
    }

    fn image_natural_size(&self) -> Option<Size> {
        self.natural_size
    }
}

impl<E> RenderSink for RecordingHost<E> {
    fn insert_overlay(&mut self, size: Size) {
        self.calls.push(SinkCall::Insert(size));
    }

    fn apply_transform(&mut self, transform: TransformRequest, transition: Transition) {
        self.calls.push(SinkCall::Transform(transform, transition));
    }

    fn move_overlay(&mut self, offset: Vec2) {
        self.calls.push(SinkCall::Move(offset));
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.calls.push(SinkCall::Visible(visible));
    }

    fn remove_overlay(&mut self) {
        self.calls.push(SinkCall::Remove);
    }
}

impl<E> ImageLoader for RecordingHost<E> {
    fn source_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn fetch(&mut self, url: &str) {
        self.fetches.push(url.into());
    }
}

impl<E> GestureSource for RecordingHost<E> {
    fn subscribe(&mut self, recognizers: Recognizers) {
        self.source.subscribe(recognizers);
    }

    fn unsubscribe(&mut self) {
        self.source.unsubscribe();
    }
}

#[allow(dead_code, reason = "Only the zoom tests compare scales.")]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[allow(dead_code, reason = "Only the zoom tests compare vectors.")]
pub(crate) fn assert_vec_close(actual: Vec2, expected: Vec2) {
    assert_close(actual.x, expected.x);
    assert_close(actual.y, expected.y);
}
