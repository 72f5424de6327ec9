// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events, as delivered by the host's event source.
//!
//! Positions are in client space; the controller subtracts the surface origin.
//! Timestamps are caller-supplied milliseconds on any monotonic clock.

use alloc::string::String;

use kurbo::Point;
use smallvec::SmallVec;

use crate::wheel::DeltaMode;

bitflags::bitflags! {
    /// Pointer buttons held during an event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Buttons: u8 {
        /// Primary button.
        const LEFT  = 0b001;
        /// Secondary button.
        const RIGHT = 0b010;
        /// Middle button / wheel press.
        const WHEEL = 0b100;
    }
}

/// A mouse or pen event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Client-space position.
    pub position: Point,
    /// Buttons held.
    pub buttons: Buttons,
    /// Event time in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates a pointer event.
    #[must_use]
    pub fn new(position: Point, buttons: Buttons, time_ms: u64) -> Self {
        Self {
            position,
            buttons,
            time_ms,
        }
    }
}

/// Platform identifier of a touch contact, stable for the contact's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TouchId(pub u64);

/// One touch contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Contact id.
    pub id: TouchId,
    /// Client-space position.
    pub position: Point,
}

impl TouchPoint {
    /// Creates a touch point.
    #[must_use]
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id: TouchId(id),
            position: Point::new(x, y),
        }
    }
}

/// A touch start, move, end or cancel event.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Contacts that changed in this event.
    pub changed: SmallVec<[TouchPoint; 4]>,
    /// Event time in milliseconds.
    pub time_ms: u64,
}

impl TouchEvent {
    /// Creates a touch event from the changed contacts.
    pub fn new(time_ms: u64, changed: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            changed: changed.into_iter().collect(),
            time_ms,
        }
    }
}

/// A wheel event. Negative `delta_y` zooms in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Client-space cursor position.
    pub position: Point,
    /// Vertical scroll amount in `mode` units.
    pub delta_y: f64,
    /// Unit of `delta_y`.
    pub mode: DeltaMode,
}

impl WheelEvent {
    /// Creates a pixel-mode wheel event.
    #[must_use]
    pub fn pixels(position: Point, delta_y: f64) -> Self {
        Self {
            position,
            delta_y,
            mode: DeltaMode::Pixel,
        }
    }
}

/// A keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key code, e.g. `"ArrowLeft"` or `"KeyA"`.
    pub code: String,
    /// Auto-repeat from a held key.
    pub repeat: bool,
}

impl KeyEvent {
    /// Creates a non-repeating key event.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            repeat: false,
        }
    }
}
