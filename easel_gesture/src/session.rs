// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session: the state that lives from first contact to release.
//!
//! ## Usage
//!
//! 1) Start a session with [`GestureSession::start`] at the press position.
//! 2) On each move, [`GestureSession::update`] returns the delta since the
//!    previous position.
//! 3) While two or more touches are live, [`GestureSession::arm_pinch`] picks
//!    the pair a pinch is measured on.
//! 4) End the session with [`GestureSession::end`].
//!
//! ## Minimal example
//!
//! ```
//! use easel_gesture::GestureSession;
//! use kurbo::{Point, Vec2};
//!
//! let mut session = GestureSession::default();
//! session.start(Point::new(10.0, 20.0), 1_000);
//! assert!(session.is_pressed());
//!
//! let delta = session.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//! assert_eq!(session.elapsed(1_250), 250);
//! ```

use hashbrown::HashMap;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::event::TouchId;

/// The touch pair a pinch is measured on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchPair {
    /// Tracked touches, lower id first.
    pub ids: [TouchId; 2],
    /// Positions the next pinch ratio is measured against.
    pub baseline: [Point; 2],
}

/// Tracks one press/touch session.
#[derive(Clone, Debug, Default)]
pub struct GestureSession {
    /// A pointer button or at least one touch is down.
    pub pressed: bool,
    /// Time of the press that started the session.
    pub press_time_ms: u64,
    /// Last surface position of the single active pointer.
    pub last: Option<Point>,
    /// Release may still count as a click.
    pub clickable: bool,
    /// Live touches in surface space, keyed by platform id.
    pub touches: HashMap<TouchId, Point>,
    /// Active pinch pair, while two or more touches are live.
    pub pinch: Option<PinchPair>,
}

impl GestureSession {
    /// Starts a session at `pos`.
    pub fn start(&mut self, pos: Point, time_ms: u64) {
        self.pressed = true;
        self.press_time_ms = time_ms;
        self.last = Some(pos);
        self.clickable = true;
        self.pinch = None;
    }

    /// Records a new position and returns the movement since the last one.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if !self.pressed {
            return None;
        }
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Continues the session from `pos` without producing a delta.
    ///
    /// Used when a pinch degrades to a single finger; the session can no
    /// longer end in a click.
    pub fn reseed(&mut self, pos: Point) {
        self.last = Some(pos);
        self.pinch = None;
        self.clickable = false;
    }

    /// Picks the two lowest touch ids as the pinch pair, with their current
    /// positions as baseline. Clears the pair when fewer than two touches
    /// are live.
    pub fn arm_pinch(&mut self) -> Option<PinchPair> {
        let mut ids: SmallVec<[TouchId; 4]> = self.touches.keys().copied().collect();
        ids.sort_unstable();
        self.pinch = match ids.as_slice() {
            [a, b, ..] => Some(PinchPair {
                ids: [*a, *b],
                baseline: [self.touches[a], self.touches[b]],
            }),
            _ => None,
        };
        if self.pinch.is_some() {
            self.clickable = false;
        }
        self.pinch
    }

    /// Current positions of the pinch pair.
    #[must_use]
    pub fn pinch_positions(&self) -> Option<[Point; 2]> {
        let pair = self.pinch?;
        Some([
            *self.touches.get(&pair.ids[0])?,
            *self.touches.get(&pair.ids[1])?,
        ])
    }

    /// Milliseconds since the press, saturating at zero.
    #[must_use]
    pub fn elapsed(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.press_time_ms)
    }

    /// Ends the session and forgets all touches.
    pub fn end(&mut self) {
        self.pressed = false;
        self.last = None;
        self.clickable = false;
        self.touches.clear();
        self.pinch = None;
    }

    /// Returns `true` while the session is active.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
