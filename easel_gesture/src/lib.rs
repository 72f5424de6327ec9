// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_gesture --heading-base-level=0

//! Easel Gesture: pointer, touch, wheel and keyboard input for a pan/zoom view.
//!
//! A [`Controller`] owns the view transform of one [`Surface`], the widgets
//! drawn on it, and the state machines that turn raw input into bounded pan
//! and zoom:
//!
//! - [`InputAdapterSet`]: which input channels are bound. The host picks a
//!   [`DeviceClass`]; pointer-primary surfaces get click, drag and wheel,
//!   touch-primary surfaces get click, one-finger pan and pinch.
//! - [`GestureRouter`]: press, drag, pinch (uniform or [`ScaleMode::FreeScale`])
//!   and wheel zoom, with the zoom focal point kept fixed on screen.
//! - [`KeyBind`]: per-phase key bindings, including ramping arrow-key pans.
//!
//! Widgets come from [`easel_widgets`] and the view from [`easel_view`].
//!
//! ## Coordinates
//!
//! Events carry client positions; the controller subtracts
//! [`Surface::origin`] to get surface pixels. The view maps world points to
//! surface pixels as `world * scale + translation`.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_gesture::{Buttons, Controller, ControllerOptions, PointerEvent, Surface, WheelEvent};
//! use kurbo::{Affine, Point, Size, Vec2};
//!
//! #[derive(Debug, Default)]
//! struct Canvas(Affine);
//!
//! impl Surface for Canvas {
//!     fn size(&self) -> Size {
//!         Size::new(400.0, 400.0)
//!     }
//!     fn set_transform(&mut self, transform: Affine) {
//!         self.0 = transform;
//!     }
//! }
//!
//! let mut controller: Controller<Canvas> =
//!     Controller::new(Canvas::default(), &ControllerOptions::default()).unwrap();
//! controller.enable_handling().unwrap();
//!
//! // Drag with the primary button.
//! controller.pointer_down(&PointerEvent::new(Point::new(10.0, 10.0), Buttons::LEFT, 0));
//! controller.pointer_move(&PointerEvent::new(Point::new(30.0, 20.0), Buttons::LEFT, 16));
//! controller.pointer_up(&PointerEvent::new(Point::new(30.0, 20.0), Buttons::empty(), 32));
//! assert_eq!(controller.view().translation(), Vec2::new(20.0, 10.0));
//!
//! // Scroll up to zoom in around the cursor.
//! controller.wheel(&WheelEvent::pixels(Point::new(20.0, 10.0), -100.0));
//! assert_eq!(controller.view().scale_factors(), Vec2::new(1.25, 1.25));
//! assert_eq!(controller.surface().0, controller.view().affine());
//! ```
//!
//! ## Features
//!
//! - `serde`: deserialize [`ControllerOptions`] from host configuration.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapters;
mod config;
mod controller;
mod error;
mod event;
mod keybind;
mod pinch;
mod router;
mod session;
mod surface;
mod wheel;

pub use adapters::{DeviceClass, InputAdapterSet, InputChannels};
pub use config::{
    ButtonPolicy, ControllerConfig, ControllerOptions, DEFAULT_CLICK_SENSITIVITY_MS,
    DEFAULT_TOUCH_SENSITIVITY, ScaleMode,
};
pub use controller::Controller;
pub use error::{Error, Result};
pub use event::{Buttons, KeyEvent, PointerEvent, TouchEvent, TouchId, TouchPoint, WheelEvent};
pub use keybind::{ArrowRamp, BindingId, KeyBind, KeyCallback, KeyPhase, Pan};
pub use router::{GestureRouter, Route};
pub use session::{GestureSession, PinchPair};
pub use surface::Surface;
pub use wheel::{
    DEFAULT_PIXELS_PER_LINE, DeltaMode, MIN_WHEEL_FACTOR, normalize_delta, wheel_zoom_factor,
};

pub use easel_view;
pub use easel_widgets;
