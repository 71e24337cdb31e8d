// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized events emitted by a gesture recognizer.
//!
//! Points are in page coordinates; consumers subtract the container offset
//! themselves. Calling `preventDefault` on the underlying input is the
//! recognizer's job, not the consumer's.

use kurbo::{Point, Vec2};

use crate::recognizers::Recognizers;

/// A recognized touch or mouse gesture over a zoom container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A single tap or click on the container.
    Tap {
        /// Where the tap landed.
        center: Point,
    },
    /// Continuous drag movement since the previous pan event.
    Pan {
        /// Pointer movement in pixels.
        delta: Vec2,
    },
    /// A discrete directional swipe.
    PanDirectional(PanDirection),
    /// Two fingers touched down.
    PinchStart {
        /// Midpoint between the fingers.
        center: Point,
    },
    /// Pinch movement.
    Pinch {
        /// Current finger distance relative to the distance at pinch start.
        scale: f64,
        /// Midpoint between the fingers.
        center: Point,
    },
    /// Two taps in quick succession.
    DoubleTap {
        /// Where the second tap landed.
        center: Point,
    },
}

/// Direction of a discrete swipe, named after the finger movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    /// Finger moved up.
    Up,
    /// Finger moved down.
    Down,
    /// Finger moved left.
    Left,
    /// Finger moved right.
    Right,
}

impl PanDirection {
    /// Translate offset for a nudge of `step` pixels in this direction.
    #[must_use]
    pub fn offset(self, step: f64) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -step),
            Self::Down => Vec2::new(0.0, step),
            Self::Left => Vec2::new(-step, 0.0),
            Self::Right => Vec2::new(step, 0.0),
        }
    }
}

/// What produced a hover event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// A mouse pointer.
    Mouse,
    /// A finger on a touch screen.
    Touch,
}

/// Hover tracking events for magnifier widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer entered the container (mouse enter or touch start).
    Enter {
        /// Input device.
        kind: PointerKind,
        /// Page position.
        position: Point,
    },
    /// The pointer moved inside the container.
    Move {
        /// Input device.
        kind: PointerKind,
        /// Page position.
        position: Point,
    },
    /// The pointer left the container (mouse leave or touch end).
    Leave {
        /// Input device.
        kind: PointerKind,
    },
}

impl PointerEvent {
    /// Returns the input device that produced this event.
    #[must_use]
    pub fn kind(&self) -> PointerKind {
        match *self {
            Self::Enter { kind, .. } | Self::Move { kind, .. } | Self::Leave { kind } => kind,
        }
    }
}

/// Events that a [`Recognizers`] set can filter.
pub trait Recognized {
    /// The recognizer responsible for producing this event.
    fn recognizer(&self) -> Recognizers;
}

impl Recognized for GestureEvent {
    fn recognizer(&self) -> Recognizers {
        match self {
            Self::Tap { .. } => Recognizers::TAP,
            Self::Pan { .. } => Recognizers::PAN,
            Self::PanDirectional(_) => Recognizers::DIRECTIONAL_PAN,
            Self::PinchStart { .. } | Self::Pinch { .. } => Recognizers::PINCH,
            Self::DoubleTap { .. } => Recognizers::DOUBLE_TAP,
        }
    }
}

impl Recognized for PointerEvent {
    fn recognizer(&self) -> Recognizers {
        match self.kind() {
            PointerKind::Mouse => Recognizers::MOUSE_HOVER,
            PointerKind::Touch => Recognizers::TOUCH_HOVER,
        }
    }
}
