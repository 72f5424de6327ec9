// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use kurbo::{Point, Vec2};

use crate::types::ClickContext;

/// Callbacks a widget receives from the dispatch sweeps.
///
/// Every callback returns a "consumed" flag. A consumed `focus`, `click` or
/// press-time `drag` stops the sweep from reaching lower-priority widgets.
///
/// The defaults describe a plain button: hovering never consumes, while
/// clicks, drags and blurs do.
pub trait WidgetHandler {
    /// The pointer entered the widget at `at` (world space).
    fn focus(&mut self, at: Point) -> bool {
        let _ = at;
        false
    }

    /// The pointer left the widget.
    ///
    /// Every hovered widget that is no longer hit receives its own blur; the
    /// return value does not stop other widgets from being blurred.
    fn blur(&mut self) -> bool {
        true
    }

    /// A press and release completed on the widget quickly enough to count as
    /// a click.
    fn click(&mut self, click: &ClickContext) -> bool {
        let _ = click;
        true
    }

    /// Drag movement in world units.
    ///
    /// A zero delta is sent once when the drag is armed by a press and once
    /// more as a release pulse.
    fn drag(&mut self, delta: Vec2) -> bool {
        let _ = delta;
        true
    }
}

/// Handler with all default behaviors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultHandler;

impl WidgetHandler for DefaultHandler {}

impl<T: WidgetHandler + ?Sized> WidgetHandler for Box<T> {
    fn focus(&mut self, at: Point) -> bool {
        (**self).focus(at)
    }

    fn blur(&mut self) -> bool {
        (**self).blur()
    }

    fn click(&mut self, click: &ClickContext) -> bool {
        (**self).click(click)
    }

    fn drag(&mut self, delta: Vec2) -> bool {
        (**self).drag(delta)
    }
}
