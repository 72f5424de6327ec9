// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_view --heading-base-level=0

//! Easel View: bounded pan/zoom state for a 2D drawing surface.
//!
//! This crate provides the headless transform model that Easel controllers
//! drive from input events. It focuses on:
//! - [`TransformState`]: translation + per‑axis scale, with hard translation
//!   bounds, soft scale bounds, optional zoom‑relative ("dynamic") translation
//!   bounds, speed multipliers and an inverted‑gesture mode.
//! - [`bounds`]: the small numeric helpers the transform and hit testing are
//!   built from (tolerant clamp, soft‑wall step, distance, containment).
//!
//! It does **not** interpret input events or paint anything. Callers are
//! expected to:
//! - Feed pan/zoom deltas into [`TransformState::translate`] and
//!   [`TransformState::scale`].
//! - Push [`TransformState::affine`] into their painter before drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use easel_view::{Motion, TransformState};
//!
//! let mut view = TransformState::new();
//! view.set_scale_bounds(Rect::new(0.5, 0.5, 4.0, 4.0));
//!
//! view.translate(Vec2::new(40.0, 20.0), Motion::Relative);
//! let outcome = view.scale_uniform(2.0, Motion::Relative);
//! assert!(outcome.changed.all());
//!
//! // Surface pixel (40, 20) is the world origin.
//! assert_eq!(view.view_to_world(Point::new(40.0, 20.0)), Point::ZERO);
//! ```
//!
//! ## Soft walls
//!
//! Relative zoom that would cross a scale bound stops at the bound; zooming
//! further in the same direction is then inert, while zooming back is always
//! applied:
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use easel_view::{Motion, TransformState};
//!
//! let mut view = TransformState::new();
//! view.set_scale_bounds(Rect::new(0.5, 0.5, 2.0, 2.0));
//! for _ in 0..10 {
//!     view.scale_uniform(1.1, Motion::Relative);
//! }
//! assert_eq!(view.scale_factors(), Vec2::new(2.0, 2.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod bounds;
mod transform;

pub use transform::{
    AxisMask, DEFAULT_SCALE_BOUNDS, Motion, ScaleOutcome, Speed, TransformState, UNBOUNDED,
};
