// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_view::{Motion, TransformState};
use easel_widgets::{DefaultHandler, Widget, WidgetHandler, WidgetId, WidgetLayer, WidgetOptions};
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::adapters::{InputAdapterSet, InputChannels};
use crate::config::{ControllerConfig, ControllerOptions};
use crate::error::{Error, Result};
use crate::event::{KeyEvent, PointerEvent, TouchEvent, TouchPoint, WheelEvent};
use crate::keybind::{KeyBind, KeyPhase};
use crate::router::{GestureRouter, Route, zoom_uniform_at};
use crate::surface::Surface;

/// Owns the view of one surface and routes input into it.
///
/// Events are ignored until [`enable_handling`](Self::enable_handling) binds
/// the input channels. Whenever an event changes the view, the new transform
/// is pushed to the surface.
#[derive(Debug)]
pub struct Controller<S, H = DefaultHandler> {
    surface: S,
    config: ControllerConfig,
    view: TransformState,
    widgets: WidgetLayer<H>,
    router: GestureRouter,
    adapters: InputAdapterSet,
    keys: KeyBind<TransformState>,
}

impl<S: Surface, H: WidgetHandler> Controller<S, H> {
    /// Creates a controller for `surface`.
    ///
    /// Fails with [`Error::NotASurface`] if the surface size is negative or
    /// not finite, and with [`Error::NotNumericArray`] for malformed options.
    pub fn new(surface: S, options: &ControllerOptions) -> Result<Self> {
        let size = surface.size();
        if !(size.is_finite() && size.width >= 0.0 && size.height >= 0.0) {
            return Err(Error::NotASurface {
                width: size.width,
                height: size.height,
            });
        }
        let config = ControllerConfig::from_options(options, size)?;

        let mut view = TransformState::new();
        view.set_scale_bounds(config.scale_bounds);
        view.scale(config.scale, Motion::Absolute);
        view.set_dynamic_bounds(config.dynamic_translation_bounds);
        view.set_translation_bounds(config.translation_bounds);
        view.translate(config.translation, Motion::Absolute);
        view.set_speed(config.speed);
        view.set_reversed(config.events_reversed);

        tracing::debug!(
            translation = ?view.translation(),
            scale = ?view.scale_factors(),
            device = ?config.device_class,
            "controller configured"
        );

        Ok(Self {
            surface,
            widgets: WidgetLayer::with_order(config.dispatch_order),
            router: GestureRouter::new(&config),
            adapters: InputAdapterSet::new(),
            keys: KeyBind::managed(),
            view,
            config,
        })
    }

    /// Binds the input channels the configuration asks for and returns the
    /// newly bound ones. Also installs arrow-key panning when keys are
    /// enabled. Calling it again binds nothing new.
    pub fn enable_handling(&mut self) -> Result<InputChannels> {
        let fresh = self.adapters.bind(InputAdapterSet::requested(&self.config));
        if self.config.keys_enabled {
            self.keys.bind_arrows()?;
        }
        Ok(fresh)
    }

    /// Validated configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The view transform.
    #[must_use]
    pub fn view(&self) -> &TransformState {
        &self.view
    }

    /// Mutable view access. Call [`reapply_transform`](Self::reapply_transform)
    /// afterwards.
    pub fn view_mut(&mut self) -> &mut TransformState {
        &mut self.view
    }

    /// The widget layer.
    #[must_use]
    pub fn widgets(&self) -> &WidgetLayer<H> {
        &self.widgets
    }

    /// Mutable widget layer access.
    pub fn widgets_mut(&mut self) -> &mut WidgetLayer<H> {
        &mut self.widgets
    }

    /// The gesture router.
    #[must_use]
    pub fn router(&self) -> &GestureRouter {
        &self.router
    }

    /// Bound input channels.
    #[must_use]
    pub fn adapters(&self) -> &InputAdapterSet {
        &self.adapters
    }

    /// Key bindings, for adding custom bindings.
    pub fn keys_mut(&mut self) -> &mut KeyBind<TransformState> {
        &mut self.keys
    }

    /// The surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Attaches a widget.
    pub fn add_widget(&mut self, widget: Widget<H>) -> Result<WidgetId> {
        Ok(self.widgets.add_widget(widget)?)
    }

    /// Creates a widget from options and attaches it.
    pub fn create_widget(&mut self, options: WidgetOptions, handler: H) -> Result<WidgetId> {
        Ok(self.widgets.create_widget(options, handler)?)
    }

    /// Detaches a widget.
    pub fn remove_widget(&mut self, id: WidgetId) -> Option<Widget<H>> {
        self.widgets.remove_widget(id)
    }

    /// Pans the view and returns the new translation.
    pub fn translate(&mut self, delta: Vec2, motion: Motion) -> Vec2 {
        let translation = self.view.translate(delta, motion);
        self.reapply_transform();
        translation
    }

    /// Zooms the view without focal compensation and returns the new scale.
    pub fn scale(&mut self, factor: Vec2, motion: Motion) -> Vec2 {
        let outcome = self.view.scale(factor, motion);
        self.reapply_transform();
        outcome.scale
    }

    /// Zooms uniformly about the configured pin and returns the new scale.
    pub fn zoom_about_pin(&mut self, factor: f64) -> Vec2 {
        zoom_uniform_at(&mut self.view, self.config.pin, factor);
        self.reapply_transform();
        self.view.scale_factors()
    }

    /// Pushes the current view transform to the surface.
    pub fn reapply_transform(&mut self) {
        self.surface.set_transform(self.view.affine());
    }

    /// Last known pointer position in world space.
    #[must_use]
    pub fn pointer_in_world(&self) -> Option<Point> {
        self.router.last_pointer().map(|p| self.view.view_to_world(p))
    }

    /// Pointer button pressed.
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        if !self.adapters.bound().intersects(InputChannels::POINTER) {
            return;
        }
        let pos = self.to_surface(event.position);
        self.route(|router, route| router.pointer_down(route, pos, event.buttons, event.time_ms));
    }

    /// Pointer moved.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        if !self.adapters.bound().intersects(InputChannels::POINTER) {
            return;
        }
        let pos = self.to_surface(event.position);
        self.route(|router, route| router.pointer_move(route, pos, event.buttons));
    }

    /// Pointer button released.
    pub fn pointer_up(&mut self, event: &PointerEvent) {
        if !self.adapters.bound().intersects(InputChannels::POINTER) {
            return;
        }
        let pos = self.to_surface(event.position);
        self.route(|router, route| router.pointer_up(route, pos, event.time_ms));
    }

    /// Touches started.
    pub fn touch_start(&mut self, event: &TouchEvent) {
        if let Some(touches) = self.touches(event) {
            self.route(|router, route| router.touch_start(route, &touches, event.time_ms));
        }
    }

    /// Touches moved.
    pub fn touch_move(&mut self, event: &TouchEvent) {
        if let Some(touches) = self.touches(event) {
            self.route(|router, route| router.touch_move(route, &touches));
        }
    }

    /// Touches ended.
    pub fn touch_end(&mut self, event: &TouchEvent) {
        if let Some(touches) = self.touches(event) {
            self.route(|router, route| router.touch_end(route, &touches, event.time_ms));
        }
    }

    /// Touches cancelled; handled like [`touch_end`](Self::touch_end).
    pub fn touch_cancel(&mut self, event: &TouchEvent) {
        self.touch_end(event);
    }

    /// Wheel scrolled.
    pub fn wheel(&mut self, event: &WheelEvent) {
        let pos = self.to_surface(event.position);
        self.route(|router, route| router.wheel(route, pos, event.delta_y, event.mode));
    }

    /// Dispatches a key event to the key bindings.
    ///
    /// Returns `true` when the host should run its default action.
    pub fn key(&mut self, phase: KeyPhase, event: &KeyEvent) -> bool {
        let before = self.view.translation();
        let run_default = self.keys.handle(phase, event, &mut self.view);
        if self.view.translation() != before {
            self.reapply_transform();
        }
        run_default
    }

    fn to_surface(&self, client: Point) -> Point {
        client - self.surface.origin().to_vec2()
    }

    fn touches(&self, event: &TouchEvent) -> Option<SmallVec<[TouchPoint; 4]>> {
        if !self.adapters.bound().intersects(InputChannels::TOUCH) {
            return None;
        }
        let offset = self.surface.origin().to_vec2();
        Some(
            event
                .changed
                .iter()
                .map(|t| TouchPoint {
                    id: t.id,
                    position: t.position - offset,
                })
                .collect(),
        )
    }

    fn route(&mut self, f: impl FnOnce(&mut GestureRouter, &mut Route<'_, H>) -> bool) {
        let mut route = Route {
            view: &mut self.view,
            widgets: &mut self.widgets,
            channels: self.adapters.bound(),
            viewport: self.surface.size(),
        };
        if f(&mut self.router, &mut route) {
            self.reapply_transform();
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Size};

    use super::*;
    use crate::event::Buttons;

    #[derive(Debug, Default)]
    struct Canvas {
        transform: Option<Affine>,
        origin: Point,
    }

    impl Surface for Canvas {
        fn size(&self) -> Size {
            Size::new(200.0, 100.0)
        }

        fn origin(&self) -> Point {
            self.origin
        }

        fn set_transform(&mut self, transform: Affine) {
            self.transform = Some(transform);
        }
    }

    #[test]
    fn events_are_ignored_until_enabled() {
        let mut c: Controller<Canvas> = Controller::new(Canvas::default(), &ControllerOptions::default()).unwrap();
        c.pointer_down(&PointerEvent::new(Point::ZERO, Buttons::LEFT, 0));
        c.pointer_move(&PointerEvent::new(Point::new(10.0, 0.0), Buttons::LEFT, 5));
        assert_eq!(c.view().translation(), Vec2::ZERO);
        assert!(c.surface().transform.is_none());

        c.enable_handling().unwrap();
        c.pointer_down(&PointerEvent::new(Point::ZERO, Buttons::LEFT, 10));
        c.pointer_move(&PointerEvent::new(Point::new(10.0, 0.0), Buttons::LEFT, 15));
        assert_eq!(c.view().translation(), Vec2::new(10.0, 0.0));
        assert_eq!(c.surface().transform, Some(c.view().affine()));
    }

    #[test]
    fn client_positions_are_made_surface_relative() {
        let canvas = Canvas {
            origin: Point::new(50.0, 20.0),
            ..Canvas::default()
        };
        let mut c: Controller<Canvas> = Controller::new(canvas, &ControllerOptions::default()).unwrap();
        c.enable_handling().unwrap();
        c.pointer_move(&PointerEvent::new(Point::new(60.0, 25.0), Buttons::empty(), 0));
        assert_eq!(c.pointer_in_world(), Some(Point::new(10.0, 5.0)));
    }

    #[test]
    fn zoom_about_pin_keeps_pin_fixed() {
        let mut c: Controller<Canvas> = Controller::new(Canvas::default(), &ControllerOptions::default()).unwrap();
        let pin = c.config().pin;
        assert_eq!(pin, Point::new(100.0, 50.0));
        let world = c.view().view_to_world(pin);
        assert_eq!(c.zoom_about_pin(2.0), Vec2::new(2.0, 2.0));
        assert_eq!(c.view().world_to_view(world), pin);
    }

    #[test]
    fn enable_handling_twice_binds_nothing_new() {
        let mut c: Controller<Canvas> = Controller::new(Canvas::default(), &ControllerOptions::default()).unwrap();
        assert!(!c.enable_handling().unwrap().is_empty());
        assert!(c.enable_handling().unwrap().is_empty());
    }
}
