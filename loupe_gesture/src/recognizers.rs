// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Set of gesture recognizers a widget subscribes to.
    ///
    /// A [`GestureSource`](crate::GestureSource) only delivers events whose
    /// recognizer is in the subscribed set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Recognizers: u8 {
        /// Single tap or click.
        const TAP             = 0b0000_0001;
        /// Two-tap recognizer.
        const DOUBLE_TAP      = 0b0000_0010;
        /// Two-finger pinch, including its start event.
        const PINCH           = 0b0000_0100;
        /// Continuous pan with a zero movement threshold.
        const PAN             = 0b0000_1000;
        /// Discrete up/down/left/right swipes.
        const DIRECTIONAL_PAN = 0b0001_0000;
        /// Mouse enter/move/leave.
        const MOUSE_HOVER     = 0b0010_0000;
        /// Touch start/move/end treated as hover.
        const TOUCH_HOVER     = 0b0100_0000;
    }
}

impl Recognizers {
    /// The recognizers every zoom widget needs.
    pub const ZOOM: Self = Self::DOUBLE_TAP.union(Self::PINCH).union(Self::PAN);
}

impl Default for Recognizers {
    fn default() -> Self {
        Self::ZOOM
    }
}
