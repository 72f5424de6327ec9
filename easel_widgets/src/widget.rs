// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_view::TransformState;
use easel_view::bounds::contains_point;
use kurbo::{Point, Rect, Vec2};

use crate::error::WidgetError;
use crate::handler::{DefaultHandler, WidgetHandler};
use crate::types::{LayerId, Position, WidgetId, WidgetOptions};

/// A hit-testable rectangle with interaction state and a handler.
///
/// Widgets are created detached (`parent() == None`) and become part of a
/// [`WidgetLayer`](crate::WidgetLayer) through
/// [`WidgetLayer::add_widget`](crate::WidgetLayer::add_widget).
#[derive(Clone, Debug)]
pub struct Widget<H = DefaultHandler> {
    id: WidgetId,
    origin: Point,
    extent: Vec2,
    z_index: i32,
    position: Position,
    enabled: bool,
    draggable: bool,
    pub(crate) hovered: bool,
    pub(crate) drag_armed: bool,
    pub(crate) parent: Option<LayerId>,
    pub(crate) handler: H,
}

impl<H: WidgetHandler> Widget<H> {
    /// Creates a detached widget and allocates its id.
    ///
    /// Fails with [`WidgetError::NotANumber`] if any geometry value is not
    /// finite.
    pub fn new(options: WidgetOptions, handler: H) -> Result<Self, WidgetError> {
        check_geometry(&options)?;
        Ok(Self {
            id: WidgetId::next(),
            origin: Point::new(options.x, options.y),
            extent: Vec2::new(options.dx, options.dy),
            z_index: options.z_index,
            position: options.position,
            enabled: options.enabled,
            draggable: options.draggable,
            hovered: false,
            drag_armed: false,
            parent: None,
            handler,
        })
    }

    /// Enables or disables the widget.
    ///
    /// Disabling drops drag state and blurs the widget if it was hovered.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            if self.hovered {
                self.hovered = false;
                self.handler.blur();
            }
            self.drag_armed = false;
        }
    }
}

impl<H> Widget<H> {
    /// Creation-order id.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Layer the widget is attached to, if any.
    #[must_use]
    pub fn parent(&self) -> Option<LayerId> {
        self.parent
    }

    /// Position as given at creation, in the widget's anchoring space.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Extents as given at creation.
    #[must_use]
    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    /// Replaces the widget geometry.
    pub fn set_geometry(&mut self, x: f64, y: f64, dx: f64, dy: f64) -> Result<(), WidgetError> {
        check_geometry(&WidgetOptions::new(x, y, dx, dy))?;
        self.origin = Point::new(x, y);
        self.extent = Vec2::new(dx, dy);
        Ok(())
    }

    /// Dispatch priority.
    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Sets the dispatch priority.
    pub fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }

    /// Anchoring and scaling flags.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Sets the anchoring and scaling flags.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Whether the widget takes part in dispatch.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a press arms a drag.
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Sets whether a press arms a drag.
    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    /// Whether the pointer is currently inside the widget.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a drag gesture currently targets this widget.
    #[must_use]
    pub fn is_drag_armed(&self) -> bool {
        self.drag_armed
    }

    /// The widget's handler.
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the widget's handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Resolves the widget rectangle into world space under `transform`.
    ///
    /// - `FIXED`: the origin is a surface position and is mapped through the
    ///   inverse transform, so the widget ignores pan.
    /// - `UNSCALABLE`: extents are surface pixels and are divided by the scale,
    ///   so the on-screen size ignores zoom.
    #[must_use]
    pub fn resolve(&self, transform: &TransformState) -> Rect {
        let origin = if self.position.is_fixed() {
            transform.view_to_world(self.origin)
        } else {
            self.origin
        };
        let extent = if self.position.is_scalable() {
            self.extent
        } else {
            let s = transform.scale_factors();
            Vec2::new(self.extent.x / s.x, self.extent.y / s.y)
        };
        Rect::from_origin_size(origin, extent.to_size())
    }

    /// Returns `true` if the world-space point hits the resolved rectangle.
    #[must_use]
    pub fn hit_test(&self, world: Point, transform: &TransformState, tolerance: f64) -> bool {
        contains_point(self.resolve(transform), world, tolerance)
    }
}

fn check_geometry(options: &WidgetOptions) -> Result<(), WidgetError> {
    for (field, value) in [
        ("x", options.x),
        ("y", options.y),
        ("dx", options.dx),
        ("dy", options.dy),
    ] {
        if !value.is_finite() {
            return Err(WidgetError::NotANumber { field });
        }
    }
    Ok(())
}
