// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture-source contract and a deterministic scripted implementation.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::event::{GestureEvent, PanDirection, Recognized};
use crate::recognizers::Recognizers;

/// A gesture recognizer attached to one widget's container.
///
/// Implementations deliver events for one widget instance strictly in
/// arrival order. `unsubscribe` takes effect immediately: once it returns,
/// no further events may reach the widget.
pub trait GestureSource {
    /// Starts delivering events produced by `recognizers`.
    fn subscribe(&mut self, recognizers: Recognizers);

    /// Stops delivering events and detaches all recognizers.
    fn unsubscribe(&mut self);
}

/// A [`GestureSource`] that replays a queued script.
///
/// Events queue up regardless of subscription, but [`ScriptedSource::next_event`]
/// only yields those whose recognizer is subscribed, and yields nothing at
/// all while unsubscribed.
///
/// ```
/// use kurbo::Point;
/// use loupe_gesture::{GestureScript, GestureSource, Recognizers, ScriptedSource};
///
/// let script = GestureScript::new().double_tap(Point::new(10.0, 10.0)).tap(Point::ZERO);
/// let mut source = ScriptedSource::new(script);
/// source.subscribe(Recognizers::DOUBLE_TAP);
///
/// assert!(source.next_event().is_some());
/// // The tap is filtered out: nobody subscribed to `TAP`.
/// assert!(source.next_event().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSource<E> {
    queue: VecDeque<E>,
    subscribed: Option<Recognizers>,
    subscribe_count: usize,
    unsubscribe_count: usize,
}

impl<E> Default for ScriptedSource<E> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            subscribed: None,
            subscribe_count: 0,
            unsubscribe_count: 0,
        }
    }
}

impl<E: Recognized> ScriptedSource<E> {
    /// Creates an unsubscribed source with `events` queued.
    pub fn new(events: impl IntoIterator<Item = E>) -> Self {
        Self {
            queue: events.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queues more events.
    pub fn extend(&mut self, events: impl IntoIterator<Item = E>) {
        self.queue.extend(events);
    }

    /// Pops the next deliverable event, discarding unsubscribed kinds.
    pub fn next_event(&mut self) -> Option<E> {
        let recognizers = self.subscribed?;
        while let Some(event) = self.queue.pop_front() {
            if recognizers.contains(event.recognizer()) {
                return Some(event);
            }
        }
        None
    }

    /// Returns the currently subscribed recognizers.
    #[must_use]
    pub fn subscribed(&self) -> Option<Recognizers> {
        self.subscribed
    }

    /// Returns how many times `subscribe` and `unsubscribe` were called.
    #[must_use]
    pub fn call_counts(&self) -> (usize, usize) {
        (self.subscribe_count, self.unsubscribe_count)
    }

    /// Number of events still queued, deliverable or not.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl<E> GestureSource for ScriptedSource<E> {
    fn subscribe(&mut self, recognizers: Recognizers) {
        self.subscribe_count += 1;
        self.subscribed = Some(recognizers);
    }

    fn unsubscribe(&mut self) {
        self.unsubscribe_count += 1;
        self.subscribed = None;
    }
}

/// Builder for deterministic gesture sequences.
#[derive(Clone, Debug, Default)]
pub struct GestureScript {
    events: Vec<GestureEvent>,
}

impl GestureScript {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single tap.
    #[must_use]
    pub fn tap(mut self, center: Point) -> Self {
        self.events.push(GestureEvent::Tap { center });
        self
    }

    /// Appends a double tap.
    #[must_use]
    pub fn double_tap(mut self, center: Point) -> Self {
        self.events.push(GestureEvent::DoubleTap { center });
        self
    }

    /// Appends one pan movement.
    #[must_use]
    pub fn pan(mut self, delta: Vec2) -> Self {
        self.events.push(GestureEvent::Pan { delta });
        self
    }

    /// Appends a discrete swipe.
    #[must_use]
    pub fn swipe(mut self, direction: PanDirection) -> Self {
        self.events.push(GestureEvent::PanDirectional(direction));
        self
    }

    /// Appends a whole pinch: a start at `center` then one tick per ratio.
    #[must_use]
    pub fn pinch(mut self, center: Point, ratios: impl IntoIterator<Item = f64>) -> Self {
        self.events.push(GestureEvent::PinchStart { center });
        self.events.extend(
            ratios
                .into_iter()
                .map(|scale| GestureEvent::Pinch { scale, center }),
        );
        self
    }

    /// Returns the scripted events.
    #[must_use]
    pub fn into_events(self) -> Vec<GestureEvent> {
        self.events
    }
}

impl IntoIterator for GestureScript {
    type Item = GestureEvent;
    type IntoIter = alloc::vec::IntoIter<GestureEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
