// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard bindings with per-phase dispatch and arrow-key panning.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use easel_view::{Motion, TransformState};
use kurbo::Vec2;

use crate::error::{Error, Result};
use crate::event::KeyEvent;

/// Key event phase a binding listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    /// Character-producing key press.
    Press,
    /// Key went down (repeats while held).
    Down,
    /// Key went up.
    Up,
}

/// Something the arrow keys can pan.
pub trait Pan {
    /// Pans by `delta` surface pixels.
    fn pan(&mut self, delta: Vec2);
}

impl Pan for TransformState {
    fn pan(&mut self, delta: Vec2) {
        self.translate(delta, Motion::Relative);
    }
}

/// Handle returned by [`KeyBind::bind`], usable with [`KeyBind::unbind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

/// A key callback. Returning `true` means the event was consumed and the
/// host should skip its default action.
pub type KeyCallback<C> = Box<dyn FnMut(&KeyEvent, &mut C) -> bool>;

/// Arrow-key speed ramp, in surface pixels per key-down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowRamp {
    /// Speed of the first key-down, and after every key-up.
    pub base: f64,
    /// Added after each key-down.
    pub step: f64,
    /// Ceiling.
    pub max: f64,
}

impl Default for ArrowRamp {
    fn default() -> Self {
        Self {
            base: 5.0,
            step: 1.0,
            max: 20.0,
        }
    }
}

const ARROWS: [(&str, Vec2); 4] = [
    ("ArrowLeft", Vec2::new(-1.0, 0.0)),
    ("ArrowRight", Vec2::new(1.0, 0.0)),
    ("ArrowUp", Vec2::new(0.0, -1.0)),
    ("ArrowDown", Vec2::new(0.0, 1.0)),
];

enum Action<C> {
    Callback(KeyCallback<C>),
    Arrow { direction: Vec2, pan: fn(&mut C, Vec2) },
    ArrowRelease,
}

struct Binding<C> {
    id: BindingId,
    key: String,
    action: Action<C>,
}

/// Per-phase key bindings dispatching into a context `C`.
///
/// Every binding whose key matches runs, in binding order.
/// [`handle`](Self::handle) reports whether the host should still run its
/// default action: `true` unless some binding consumed the event.
pub struct KeyBind<C> {
    press: Vec<Binding<C>>,
    down: Vec<Binding<C>>,
    up: Vec<Binding<C>>,
    next_id: u64,
    managed: bool,
    arrows_bound: bool,
    ramp: ArrowRamp,
    speed: f64,
}

impl<C> fmt::Debug for KeyBind<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBind")
            .field("press", &self.press.len())
            .field("down", &self.down.len())
            .field("up", &self.up.len())
            .field("managed", &self.managed)
            .field("ramp", &self.ramp)
            .field("speed", &self.speed)
            .finish_non_exhaustive()
    }
}

impl<C> Default for KeyBind<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> KeyBind<C> {
    /// Creates an empty, standalone key binding.
    #[must_use]
    pub fn new() -> Self {
        let ramp = ArrowRamp::default();
        Self {
            press: Vec::new(),
            down: Vec::new(),
            up: Vec::new(),
            next_id: 0,
            managed: false,
            arrows_bound: false,
            ramp,
            speed: ramp.base,
        }
    }

    pub(crate) fn managed() -> Self {
        Self {
            managed: true,
            ..Self::new()
        }
    }

    /// Returns `true` if this binding is owned by a controller.
    #[must_use]
    pub fn is_managed(&self) -> bool {
        self.managed
    }

    /// Adds a callback for `key` in `phase`.
    pub fn bind(
        &mut self,
        phase: KeyPhase,
        key: impl Into<String>,
        callback: impl FnMut(&KeyEvent, &mut C) -> bool + 'static,
    ) -> BindingId {
        self.push(phase, key.into(), Action::Callback(Box::new(callback)))
    }

    /// Removes a binding; returns `false` if the id is unknown.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        for list in [&mut self.press, &mut self.down, &mut self.up] {
            if let Some(index) = list.iter().position(|b| b.id == id) {
                list.remove(index);
                return true;
            }
        }
        false
    }

    /// Removes every binding for `key` in `phase` and returns how many went.
    pub fn unbind_key(&mut self, phase: KeyPhase, key: &str) -> usize {
        let list = self.list_mut(phase);
        let before = list.len();
        list.retain(|b| b.key != key);
        before - list.len()
    }

    /// Number of bindings in `phase`.
    #[must_use]
    pub fn len(&self, phase: KeyPhase) -> usize {
        match phase {
            KeyPhase::Press => self.press.len(),
            KeyPhase::Down => self.down.len(),
            KeyPhase::Up => self.up.len(),
        }
    }

    /// Arrow-key speed ramp.
    #[must_use]
    pub fn ramp(&self) -> ArrowRamp {
        self.ramp
    }

    /// Replaces the ramp and resets the speed to its base.
    pub fn set_ramp(&mut self, ramp: ArrowRamp) {
        self.ramp = ramp;
        self.speed = ramp.base;
    }

    /// Speed the next arrow key-down will pan by.
    #[must_use]
    pub fn arrow_speed(&self) -> f64 {
        self.speed
    }

    /// Dispatches a key event.
    ///
    /// Returns `true` when no matching binding consumed the event.
    pub fn handle(&mut self, phase: KeyPhase, event: &KeyEvent, ctx: &mut C) -> bool {
        let Self {
            press,
            down,
            up,
            ramp,
            speed,
            ..
        } = self;
        let list = match phase {
            KeyPhase::Press => press,
            KeyPhase::Down => down,
            KeyPhase::Up => up,
        };
        let mut run_default = true;
        for binding in list.iter_mut().filter(|b| b.key == event.code) {
            let consumed = match &mut binding.action {
                Action::Callback(callback) => callback(event, ctx),
                Action::Arrow { direction, pan } => {
                    pan(ctx, *direction * *speed);
                    *speed = (*speed + ramp.step).min(ramp.max);
                    true
                }
                Action::ArrowRelease => {
                    *speed = ramp.base;
                    true
                }
            };
            run_default &= !consumed;
        }
        run_default
    }

    fn push(&mut self, phase: KeyPhase, key: String, action: Action<C>) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.list_mut(phase).push(Binding { id, key, action });
        id
    }

    fn list_mut(&mut self, phase: KeyPhase) -> &mut Vec<Binding<C>> {
        match phase {
            KeyPhase::Press => &mut self.press,
            KeyPhase::Down => &mut self.down,
            KeyPhase::Up => &mut self.up,
        }
    }
}

impl<C: Pan> KeyBind<C> {
    /// Installs arrow-key panning.
    ///
    /// Each key-down pans by the current ramp speed and then raises it by
    /// `step`, up to `max`; any arrow key-up drops it back to `base`.
    /// Binding twice is a no-op. Fails with [`Error::NotManagedSurface`]
    /// unless this binding belongs to a controller.
    pub fn bind_arrows(&mut self) -> Result<()> {
        if !self.managed {
            return Err(Error::NotManagedSurface);
        }
        if self.arrows_bound {
            return Ok(());
        }
        for (key, direction) in ARROWS {
            self.push(
                KeyPhase::Down,
                key.into(),
                Action::Arrow {
                    direction,
                    pan: C::pan,
                },
            );
            self.push(KeyPhase::Up, key.into(), Action::ArrowRelease);
        }
        self.arrows_bound = true;
        tracing::debug!("arrow keys bound");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Vec2;

    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<Vec2>);

    impl Pan for Recorder {
        fn pan(&mut self, delta: Vec2) {
            self.0.push(delta);
        }
    }

    #[test]
    fn no_binding_runs_default() {
        let mut keys = KeyBind::<Recorder>::new();
        assert!(keys.handle(KeyPhase::Down, &KeyEvent::new("KeyA"), &mut Recorder::default()));
    }

    #[test]
    fn every_matching_binding_runs() {
        let mut keys = KeyBind::<u32>::new();
        keys.bind(KeyPhase::Down, "KeyA", |_, n| {
            *n += 1;
            false
        });
        keys.bind(KeyPhase::Down, "KeyA", |_, n| {
            *n += 10;
            true
        });
        keys.bind(KeyPhase::Up, "KeyA", |_, n| {
            *n += 100;
            true
        });
        let mut n = 0;
        assert!(!keys.handle(KeyPhase::Down, &KeyEvent::new("KeyA"), &mut n));
        assert_eq!(n, 11);
    }

    #[test]
    fn default_runs_when_nobody_consumes() {
        let mut keys = KeyBind::<u32>::new();
        keys.bind(KeyPhase::Press, "KeyB", |_, _| false);
        assert!(keys.handle(KeyPhase::Press, &KeyEvent::new("KeyB"), &mut 0));
    }

    #[test]
    fn unbind_by_id_and_key() {
        let mut keys = KeyBind::<u32>::new();
        let a = keys.bind(KeyPhase::Down, "KeyA", |_, _| true);
        keys.bind(KeyPhase::Down, "KeyB", |_, _| true);
        keys.bind(KeyPhase::Down, "KeyB", |_, _| true);
        assert!(keys.unbind(a));
        assert!(!keys.unbind(a));
        assert_eq!(keys.unbind_key(KeyPhase::Down, "KeyB"), 2);
        assert_eq!(keys.len(KeyPhase::Down), 0);
    }

    #[test]
    fn standalone_binding_rejects_arrows() {
        let mut keys = KeyBind::<Recorder>::new();
        assert_eq!(keys.bind_arrows(), Err(Error::NotManagedSurface));
    }

    #[test]
    fn arrow_ramp_grows_and_resets() {
        let mut keys = KeyBind::<Recorder>::managed();
        keys.bind_arrows().unwrap();
        keys.bind_arrows().unwrap();
        assert_eq!(keys.len(KeyPhase::Down), 4);

        let mut view = Recorder::default();
        let left = KeyEvent::new("ArrowLeft");
        for _ in 0..3 {
            assert!(!keys.handle(KeyPhase::Down, &left, &mut view));
        }
        keys.handle(KeyPhase::Up, &left, &mut view);
        keys.handle(KeyPhase::Down, &KeyEvent::new("ArrowDown"), &mut view);
        assert_eq!(
            view.0,
            [
                Vec2::new(-5.0, 0.0),
                Vec2::new(-6.0, 0.0),
                Vec2::new(-7.0, 0.0),
                Vec2::new(0.0, 5.0),
            ]
        );
    }

    #[test]
    fn arrow_ramp_is_capped() {
        let mut keys = KeyBind::<Recorder>::managed();
        keys.set_ramp(ArrowRamp {
            base: 1.0,
            step: 10.0,
            max: 15.0,
        });
        keys.bind_arrows().unwrap();
        let mut view = Recorder::default();
        for _ in 0..4 {
            keys.handle(KeyPhase::Down, &KeyEvent::new("ArrowRight"), &mut view);
        }
        assert_eq!(keys.arrow_speed(), 15.0);
        assert_eq!(view.0.last(), Some(&Vec2::new(15.0, 0.0)));
    }
}
