// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan tracking: turn raw pointer positions into incremental [`GestureEvent::Pan`] events.
//!
//! ## Usage
//!
//! 1) Call [`PanTracker::start`] on pointer down.
//! 2) On each pointer move, call [`PanTracker::update`] to get the pan event for
//!    the movement since the last update.
//! 3) Call [`PanTracker::end`] on pointer up or cancel.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_gesture::GestureEvent;
//! use loupe_gesture::pan::PanTracker;
//!
//! let mut pan = PanTracker::default();
//! pan.start(Point::new(10.0, 20.0));
//! assert!(pan.is_panning());
//!
//! let event = pan.update(Point::new(15.0, 25.0));
//! assert_eq!(event, Some(GestureEvent::Pan { delta: Vec2::new(5.0, 5.0) }));
//! assert_eq!(pan.total_offset(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! ```

use kurbo::{Point, Vec2};

use crate::event::GestureEvent;

/// Tracks one pointer drag and reports per-move deltas.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanTracker {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl PanTracker {
    /// Starts tracking a pan from `pos`, discarding any previous pan.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a move to `pos` and returns the pan event for the movement.
    ///
    /// Returns `None` when no pan is active.
    pub fn update(&mut self, pos: Point) -> Option<GestureEvent> {
        self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        Some(GestureEvent::Pan { delta: pos - last })
    }

    /// Offset from the pan start to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Ends the current pan.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.start_pos.is_some()
    }
}
