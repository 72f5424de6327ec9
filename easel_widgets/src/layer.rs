// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget collection and the focus/blur/click/drag dispatch protocol.

use alloc::vec::Vec;

use easel_view::TransformState;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::error::WidgetError;
use crate::handler::{DefaultHandler, WidgetHandler};
use crate::types::{ClickContext, LayerId, WidgetId, WidgetOptions};
use crate::widget::Widget;

/// Default hit-test tolerance, in world units.
pub const DEFAULT_HIT_TOLERANCE: f64 = 1.0;

/// Order in which sweeps visit widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchOrder {
    /// Highest `z_index` first; equal z-indices go newest first.
    #[default]
    ZIndex,
    /// Newest widget first, ignoring `z_index`.
    CreationOrder,
}

type SweepOrder = SmallVec<[usize; 16]>;

/// An ordered set of widgets sharing one view transform.
///
/// All sweeps take a snapshot of the dispatch order first and visit widgets
/// in that order:
///
/// - [`press`](Self::press): arms the first enabled, draggable widget under the
///   pointer whose `drag(0, 0)` consumes.
/// - [`drag`](Self::drag): forwards movement to every armed widget.
/// - [`hover`](Self::hover): blurs hovered widgets that lost the pointer, then
///   focuses newly entered widgets until one consumes.
/// - [`release`](Self::release): optionally clicks the first consuming widget
///   under the pointer, then sends a `drag(0, 0)` release pulse to every armed
///   widget and disarms it.
#[derive(Debug)]
pub struct WidgetLayer<H = DefaultHandler> {
    id: LayerId,
    widgets: Vec<Widget<H>>,
    order: DispatchOrder,
    tolerance: f64,
}

impl<H: WidgetHandler> Default for WidgetLayer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: WidgetHandler> WidgetLayer<H> {
    /// Creates an empty layer with [`DispatchOrder::ZIndex`] ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::with_order(DispatchOrder::default())
    }

    /// Creates an empty layer with the given dispatch order.
    #[must_use]
    pub fn with_order(order: DispatchOrder) -> Self {
        Self {
            id: LayerId::next(),
            widgets: Vec::new(),
            order,
            tolerance: DEFAULT_HIT_TOLERANCE,
        }
    }

    /// This layer's id, recorded as the parent of attached widgets.
    #[must_use]
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Current dispatch order.
    #[must_use]
    pub fn order(&self) -> DispatchOrder {
        self.order
    }

    /// Sets the dispatch order.
    pub fn set_order(&mut self, order: DispatchOrder) {
        self.order = order;
    }

    /// Hit-test tolerance in world units.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Sets the hit-test tolerance.
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    /// Number of attached widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns `true` if no widgets are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Iterates attached widgets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Widget<H>> {
        self.widgets.iter()
    }

    /// Returns `true` if a widget with this id is attached.
    #[must_use]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.iter().any(|w| w.id() == id)
    }

    /// Looks up an attached widget.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&Widget<H>> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    /// Looks up an attached widget mutably.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget<H>> {
        self.widgets.iter_mut().find(|w| w.id() == id)
    }

    /// Attaches a widget.
    ///
    /// Fails with [`WidgetError::AlreadyRegistered`] if the widget already has
    /// a parent or a widget with the same id is attached here.
    pub fn add_widget(&mut self, mut widget: Widget<H>) -> Result<WidgetId, WidgetError> {
        let id = widget.id();
        if widget.parent.is_some() || self.contains(id) {
            return Err(WidgetError::AlreadyRegistered(id));
        }
        widget.parent = Some(self.id);
        self.widgets.push(widget);
        tracing::debug!(%id, layer = ?self.id, "widget attached");
        Ok(id)
    }

    /// Creates a widget from options and attaches it.
    pub fn create_widget(
        &mut self,
        options: WidgetOptions,
        handler: H,
    ) -> Result<WidgetId, WidgetError> {
        let widget = Widget::new(options, handler)?;
        self.add_widget(widget)
    }

    /// Detaches a widget and returns it with its parent cleared.
    pub fn remove_widget(&mut self, id: WidgetId) -> Option<Widget<H>> {
        let index = self.widgets.iter().position(|w| w.id() == id)?;
        let mut widget = self.widgets.remove(index);
        widget.parent = None;
        widget.hovered = false;
        widget.drag_armed = false;
        tracing::debug!(%id, layer = ?self.id, "widget detached");
        Some(widget)
    }

    /// Returns `true` while any widget has an armed drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.widgets.iter().any(|w| w.drag_armed)
    }

    /// Ids in the order the next sweep will visit them.
    #[must_use]
    pub fn dispatch_order(&self) -> Vec<WidgetId> {
        self.sweep_order()
            .into_iter()
            .map(|i| self.widgets[i].id())
            .collect()
    }

    /// Press sweep at a world-space position.
    ///
    /// Returns the widget whose drag consumed the press, if any.
    pub fn press(&mut self, world: Point, transform: &TransformState) -> Option<WidgetId> {
        let tolerance = self.tolerance;
        for i in self.sweep_order() {
            let w = &mut self.widgets[i];
            if !w.is_enabled() || !w.is_draggable() || !w.hit_test(world, transform, tolerance) {
                continue;
            }
            w.drag_armed = true;
            if w.handler.drag(Vec2::ZERO) {
                tracing::trace!(id = %w.id(), "press consumed");
                return Some(w.id());
            }
        }
        None
    }

    /// Forwards a world-space movement to every armed widget.
    ///
    /// Returns the number of widgets that received it.
    pub fn drag(&mut self, delta: Vec2) -> usize {
        let mut count = 0;
        for i in self.sweep_order() {
            let w = &mut self.widgets[i];
            if w.drag_armed {
                w.handler.drag(delta);
                count += 1;
            }
        }
        count
    }

    /// Focus/blur sweep at a world-space position.
    ///
    /// Every hovered widget that is no longer hit receives `blur`. Widgets
    /// newly under the pointer receive `focus` in dispatch order until one
    /// consumes; the consumer is returned.
    pub fn hover(&mut self, world: Point, transform: &TransformState) -> Option<WidgetId> {
        let tolerance = self.tolerance;
        let mut consumer = None;
        for i in self.sweep_order() {
            let w = &mut self.widgets[i];
            if !w.is_enabled() {
                continue;
            }
            if !w.hit_test(world, transform, tolerance) {
                if w.hovered {
                    w.hovered = false;
                    w.handler.blur();
                }
                continue;
            }
            if w.hovered || consumer.is_some() {
                continue;
            }
            w.hovered = true;
            if w.handler.focus(world) {
                consumer = Some(w.id());
            }
        }
        consumer
    }

    /// Release sweep.
    ///
    /// When `click` is given, enabled widgets under `click.world` receive
    /// `click` in dispatch order until one consumes. Afterwards every armed
    /// widget receives a zero-delta release pulse and is disarmed.
    pub fn release(
        &mut self,
        click: Option<&ClickContext>,
        transform: &TransformState,
    ) -> Option<WidgetId> {
        let tolerance = self.tolerance;
        let order = self.sweep_order();
        let mut clicked = None;
        if let Some(ctx) = click {
            for &i in &order {
                let w = &mut self.widgets[i];
                if w.is_enabled() && w.hit_test(ctx.world, transform, tolerance) && w.handler.click(ctx) {
                    tracing::trace!(id = %w.id(), "click consumed");
                    clicked = Some(w.id());
                    break;
                }
            }
        }
        for &i in &order {
            let w = &mut self.widgets[i];
            if w.drag_armed {
                w.handler.drag(Vec2::ZERO);
                w.drag_armed = false;
            }
        }
        clicked
    }

    fn sweep_order(&self) -> SweepOrder {
        let mut order: SweepOrder = (0..self.widgets.len()).collect();
        let widgets = &self.widgets;
        match self.order {
            DispatchOrder::ZIndex => order.sort_unstable_by(|&a, &b| {
                let (wa, wb) = (&widgets[a], &widgets[b]);
                wb.z_index()
                    .cmp(&wa.z_index())
                    .then_with(|| wb.id().cmp(&wa.id()))
            }),
            DispatchOrder::CreationOrder => {
                order.sort_unstable_by(|&a, &b| widgets[b].id().cmp(&widgets[a].id()));
            }
        }
        order
    }
}
