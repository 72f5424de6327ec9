// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture routing: turns surface-space input into bounded view mutations
//! and widget dispatch.

use easel_view::{AxisMask, Motion, ScaleOutcome, TransformState};
use easel_widgets::{ClickContext, WidgetHandler, WidgetLayer};
use kurbo::{Point, Size, Vec2};

use crate::adapters::InputChannels;
use crate::config::{ButtonPolicy, ControllerConfig, ScaleMode};
use crate::event::{Buttons, TouchPoint};
use crate::pinch;
use crate::session::GestureSession;
use crate::wheel::{DeltaMode, normalize_delta, wheel_zoom_factor};

/// Everything a routed event may touch.
#[derive(Debug)]
pub struct Route<'a, H> {
    /// The view to pan and zoom.
    pub view: &'a mut TransformState,
    /// Widgets receiving dispatch.
    pub widgets: &'a mut WidgetLayer<H>,
    /// Bound input channels.
    pub channels: InputChannels,
    /// Surface size in pixels.
    pub viewport: Size,
}

/// Routes pointer, touch and wheel input.
///
/// All positions are surface pixels. Every entry point returns `true` when
/// the view transform changed.
///
/// A press (pointer button accepted by the [`ButtonPolicy`], or the first
/// touch) starts a session and runs the widget press sweep. Moves pan the
/// view unless a widget armed a drag, in which case the widget receives
/// the movement in world units instead. Two live touches form a pinch.
/// Release may click, then sends the release pulse to dragged widgets.
#[derive(Clone, Debug)]
pub struct GestureRouter {
    session: GestureSession,
    pointer: Option<Point>,
    button_policy: ButtonPolicy,
    scale_mode: ScaleMode,
    touch_sensitivity: f64,
    click_sensitivity_ms: u64,
    pixels_per_line: f64,
}

impl GestureRouter {
    /// Creates an idle router using the tuning values of `config`.
    #[must_use]
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            session: GestureSession::default(),
            pointer: None,
            button_policy: config.button_policy,
            scale_mode: config.scale_mode,
            touch_sensitivity: config.touch_sensitivity,
            click_sensitivity_ms: config.click_sensitivity_ms,
            pixels_per_line: config.pixels_per_line,
        }
    }

    /// The current session.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Last surface position seen from any pointer, touch or wheel event.
    #[must_use]
    pub fn last_pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Pinch mode.
    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    /// Sets the pinch mode.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.scale_mode = mode;
    }

    /// Pointer button pressed.
    pub fn pointer_down<H: WidgetHandler>(
        &mut self,
        route: &mut Route<'_, H>,
        pos: Point,
        buttons: Buttons,
        time_ms: u64,
    ) -> bool {
        self.pointer = Some(pos);
        if !self.button_policy.accepts(buttons) {
            return false;
        }
        self.press(route, pos, time_ms);
        false
    }

    /// Pointer moved, with or without buttons held.
    pub fn pointer_move<H: WidgetHandler>(
        &mut self,
        route: &mut Route<'_, H>,
        pos: Point,
        buttons: Buttons,
    ) -> bool {
        self.pointer = Some(pos);
        let changed = if self.button_policy.accepts(buttons) {
            let pan = route.channels.contains(InputChannels::DRAG);
            self.drag_to(route, pos, pan)
        } else {
            false
        };
        hover(route, pos);
        changed
    }

    /// Pointer button released.
    pub fn pointer_up<H: WidgetHandler>(
        &mut self,
        route: &mut Route<'_, H>,
        pos: Point,
        time_ms: u64,
    ) -> bool {
        self.pointer = Some(pos);
        if self.session.is_pressed() {
            self.release(route, pos, time_ms);
        }
        false
    }

    /// New touch contacts.
    pub fn touch_start<H: WidgetHandler>(
        &mut self,
        route: &mut Route<'_, H>,
        touches: &[TouchPoint],
        time_ms: u64,
    ) -> bool {
        for touch in touches {
            self.pointer = Some(touch.position);
            let first = self.session.touches.is_empty();
            self.session.touches.insert(touch.id, touch.position);
            if first && !self.session.is_pressed() {
                self.press(route, touch.position, time_ms);
            }
        }
        if self.session.touches.len() >= 2 && self.session.pinch.is_none() {
            self.session.arm_pinch();
            tracing::trace!(touches = self.session.touches.len(), "pinch armed");
        }
        false
    }

    /// Touch contacts moved.
    pub fn touch_move<H: WidgetHandler>(
        &mut self,
        route: &mut Route<'_, H>,
        touches: &[TouchPoint],
    ) -> bool {
        for touch in touches {
            if let Some(pos) = self.session.touches.get_mut(&touch.id) {
                *pos = touch.position;
            }
        }
        match self.session.touches.len() {
            1 => {
                let Some(&pos) = self.session.touches.values().next() else {
                    return false;
                };
                self.pointer = Some(pos);
                let pan = route.channels.contains(InputChannels::PAN);
                let changed = self.drag_to(route, pos, pan);
                hover(route, pos);
                changed
            }
            0 => false,
            _ => self.pinch_step(route),
        }
    }

    /// Touch contacts lifted or cancelled.
    ///
    /// When the last touch goes, the session is released. When one touch
    /// remains, panning continues from it. When two or more remain, the pinch
    /// is re-armed on the lowest two ids.
    pub fn touch_end<H: WidgetHandler>(
        &mut self,
        route: &mut Route<'_, H>,
        touches: &[TouchPoint],
        time_ms: u64,
    ) -> bool {
        let mut lifted = None;
        for touch in touches {
            if self.session.touches.remove(&touch.id).is_some() {
                lifted = Some(touch.position);
            }
        }
        let Some(lifted) = lifted else {
            return false;
        };
        match self.session.touches.len() {
            0 => {
                self.pointer = Some(lifted);
                if self.session.is_pressed() {
                    self.release(route, lifted, time_ms);
                }
            }
            1 => {
                if let Some(&pos) = self.session.touches.values().next() {
                    tracing::trace!(?pos, "pinch degraded to pan");
                    self.session.reseed(pos);
                    self.pointer = Some(pos);
                }
            }
            _ => {
                let pair_intact = self.session.pinch_positions().is_some();
                if !pair_intact {
                    self.session.arm_pinch();
                    tracing::trace!("pinch re-armed");
                }
            }
        }
        false
    }

    /// Wheel zoom anchored at the cursor.
    pub fn wheel<H: WidgetHandler>(
        &mut self,
        route: &mut Route<'_, H>,
        pos: Point,
        delta_y: f64,
        mode: DeltaMode,
    ) -> bool {
        self.pointer = Some(pos);
        if !route.channels.contains(InputChannels::WHEEL) {
            return false;
        }
        let normalized = normalize_delta(delta_y, mode, self.pixels_per_line, route.viewport.height);
        let factor = wheel_zoom_factor(normalized, route.view.speed().scale, route.viewport);
        zoom_uniform_at(route.view, pos, factor)
    }

    fn press<H: WidgetHandler>(&mut self, route: &mut Route<'_, H>, pos: Point, time_ms: u64) {
        self.session.start(pos, time_ms);
        let world = route.view.view_to_world(pos);
        route.widgets.press(world, route.view);
    }

    fn drag_to<H: WidgetHandler>(&mut self, route: &mut Route<'_, H>, pos: Point, pan: bool) -> bool {
        let Some(delta) = self.session.update(pos) else {
            return false;
        };
        if route.widgets.is_dragging() {
            let s = route.view.scale_factors();
            route.widgets.drag(Vec2::new(delta.x / s.x, delta.y / s.y));
            return false;
        }
        if !pan || delta == Vec2::ZERO {
            return false;
        }
        let before = route.view.translation();
        let speed = route.view.speed().translation;
        route.view.translate(delta * speed, Motion::Relative) != before
    }

    fn pinch_step<H: WidgetHandler>(&mut self, route: &mut Route<'_, H>) -> bool {
        let (Some(pair), Some(current)) = (self.session.pinch, self.session.pinch_positions()) else {
            return false;
        };
        if !pinch::both_moved(pair.baseline, current, self.touch_sensitivity) {
            return false;
        }
        let baseline = pair.baseline;
        if let Some(p) = self.session.pinch.as_mut() {
            p.baseline = current;
        }
        if !route.channels.contains(InputChannels::PINCH) {
            return false;
        }

        let speed = route.view.speed().scale;
        let focal = pinch::centroid(current);
        match self.scale_mode {
            ScaleMode::FreeScale => {
                let ratio = pinch::freescale_ratio(baseline, current, self.touch_sensitivity);
                let factor = Vec2::new(pinch::ease(ratio.x, speed), pinch::ease(ratio.y, speed));
                tracing::trace!(?factor, "freescale pinch");
                let outcome = route.view.scale(factor, Motion::Relative);
                compensate(route.view, focal, &outcome, outcome.changed);
                outcome.changed.any()
            }
            ScaleMode::Normal => {
                let factor = pinch::ease(
                    pinch::uniform_ratio(baseline, current, self.touch_sensitivity),
                    speed,
                );
                tracing::trace!(factor, "uniform pinch");
                zoom_uniform_at(route.view, focal, factor)
            }
        }
    }

    fn release<H: WidgetHandler>(&mut self, route: &mut Route<'_, H>, pos: Point, time_ms: u64) {
        let elapsed_ms = self.session.elapsed(time_ms);
        let eligible = self.session.clickable
            && elapsed_ms <= self.click_sensitivity_ms
            && !route.widgets.is_dragging()
            && route.channels.contains(InputChannels::CLICK);
        let click = eligible.then(|| ClickContext {
            world: route.view.view_to_world(pos),
            view: pos,
            elapsed_ms,
        });
        route.widgets.release(click.as_ref(), route.view);
        self.session.end();
    }
}

/// Blur/focus sweep at a surface position.
fn hover<H: WidgetHandler>(route: &mut Route<'_, H>, pos: Point) {
    let world = route.view.view_to_world(pos);
    route.widgets.hover(world, route.view);
}

/// Uniform relative zoom that keeps `focal` fixed on screen.
///
/// Compensation is applied only when both axes moved.
pub(crate) fn zoom_uniform_at(view: &mut TransformState, focal: Point, factor: f64) -> bool {
    let outcome = view.scale_uniform(factor, Motion::Relative);
    let mask = if outcome.changed.all() {
        AxisMask::BOTH
    } else {
        AxisMask::NONE
    };
    compensate(view, focal, &outcome, mask);
    outcome.changed.any()
}

/// Translates so the world point under `focal` stays under it after a zoom.
fn compensate(view: &mut TransformState, focal: Point, outcome: &ScaleOutcome, mask: AxisMask) {
    if !mask.any() {
        return;
    }
    let offset = focal.to_vec2() - view.translation();
    let axis = |on: bool, offset: f64, ratio: f64| if on { offset * (1.0 - ratio) } else { 0.0 };
    view.compensate(Vec2::new(
        axis(mask.x, offset.x, outcome.ratio.x),
        axis(mask.y, offset.y, outcome.ratio.y),
    ));
}
