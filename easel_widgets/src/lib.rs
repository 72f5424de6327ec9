// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_widgets --heading-base-level=0

//! Easel Widgets: hit-testable rectangles that live inside a pan/zoom view.
//!
//! A [`Widget`] is a rectangle plus interaction state (hovered, drag armed)
//! and a [`WidgetHandler`] that receives `focus`, `blur`, `click` and `drag`.
//! A [`WidgetLayer`] owns widgets and runs the dispatch sweeps that an input
//! router calls on press, move and release.
//!
//! ## Coordinate spaces
//!
//! Sweeps take pointer positions in world space (after undoing the view
//! transform). Each widget resolves its own rectangle into world space first,
//! according to its [`Position`] flags:
//!
//! - `ABSOLUTE` widgets are world-space rectangles and move with pan/zoom.
//! - `FIXED` widgets are anchored at a surface position and ignore pan.
//! - `UNSCALABLE` widgets keep their on-screen size regardless of zoom.
//!
//! ## Priority
//!
//! Sweeps visit widgets by [`DispatchOrder`]: by default highest `z_index`
//! first with newer widgets winning ties; [`DispatchOrder::CreationOrder`]
//! visits newest first and ignores `z_index`. Returning `true` from a handler
//! ("consumed") stops the sweep from reaching lower widgets.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_view::TransformState;
//! use easel_widgets::{ClickContext, WidgetHandler, WidgetLayer, WidgetOptions};
//! use kurbo::Point;
//!
//! #[derive(Default)]
//! struct Button {
//!     clicks: u32,
//! }
//!
//! impl WidgetHandler for Button {
//!     fn click(&mut self, _click: &ClickContext) -> bool {
//!         self.clicks += 1;
//!         true
//!     }
//! }
//!
//! let view = TransformState::new();
//! let mut layer = WidgetLayer::new();
//! let id = layer
//!     .create_widget(WidgetOptions::new(10.0, 10.0, 80.0, 24.0), Button::default())
//!     .unwrap();
//!
//! let at = Point::new(20.0, 20.0);
//! let click = ClickContext { world: at, view: at, elapsed_ms: 40 };
//! assert_eq!(layer.release(Some(&click), &view), Some(id));
//! assert_eq!(layer.get(id).unwrap().handler().clicks, 1);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`WidgetOptions`],
//!   [`Position`] and [`DispatchOrder`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod handler;
mod layer;
mod types;
mod widget;

pub use error::WidgetError;
pub use handler::{DefaultHandler, WidgetHandler};
pub use layer::{DEFAULT_HIT_TOLERANCE, DispatchOrder, WidgetLayer};
pub use types::{ClickContext, LayerId, Position, WidgetId, WidgetOptions};
pub use widget::Widget;
