// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for widgets: identifiers, position flags, and options.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use kurbo::Point;

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier for a widget.
///
/// Ids are allocated from a process-wide counter when a
/// [`Widget`](crate::Widget) is created, so a larger id always means a more
/// recently created widget. This total order is the tie-break used by the
/// dispatch sweeps of [`WidgetLayer`](crate::WidgetLayer).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    pub(crate) fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw creation-order value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

/// Identifier for a [`WidgetLayer`](crate::WidgetLayer); recorded as the
/// parent of every widget attached to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u64);

impl LayerId {
    pub(crate) fn next() -> Self {
        Self(NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

bitflags::bitflags! {
    /// How a widget's geometry relates to the view transform.
    ///
    /// `FIXED` and `ABSOLUTE` pick the anchoring space; `UNSCALABLE` locks the
    /// on-screen size. A widget without `UNSCALABLE` is scalable. When neither
    /// anchoring bit is set the widget is treated as `ABSOLUTE`; `FIXED` wins
    /// if both are set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Position: u8 {
        /// Anchored in surface (screen) space; unaffected by pan.
        const FIXED      = 0b0000_0001;
        /// Anchored in world space; moves with pan and zoom.
        const ABSOLUTE   = 0b0000_0010;
        /// Constant on-screen size regardless of zoom.
        const UNSCALABLE = 0b0000_0100;
    }
}

impl Position {
    /// Returns `true` when the widget is anchored in surface space.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        self.contains(Self::FIXED)
    }

    /// Returns `true` when the widget's size follows the zoom.
    #[must_use]
    pub const fn is_scalable(self) -> bool {
        !self.contains(Self::UNSCALABLE)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ABSOLUTE
    }
}

/// Construction options for a [`Widget`](crate::Widget).
///
/// Geometry is required; everything else has a default.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetOptions {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub dx: f64,
    /// Height.
    pub dy: f64,
    /// Dispatch priority; higher goes first. Defaults to `0`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub z_index: i32,
    /// Disabled widgets are skipped by every sweep. Defaults to `true`.
    #[cfg_attr(feature = "serde", serde(default = "enabled_default"))]
    pub enabled: bool,
    /// Whether a press on the widget arms a drag. Defaults to `false`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub draggable: bool,
    /// Anchoring and scaling behavior. Defaults to [`Position::ABSOLUTE`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Position,
}

#[cfg(feature = "serde")]
fn enabled_default() -> bool {
    true
}

impl WidgetOptions {
    /// Options for a widget at `(x, y)` with extents `(dx, dy)`.
    #[must_use]
    pub const fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            z_index: 0,
            enabled: true,
            draggable: false,
            position: Position::ABSOLUTE,
        }
    }

    /// Sets the dispatch priority.
    #[must_use]
    pub const fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets whether the widget takes part in dispatch.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets whether a press arms a drag.
    #[must_use]
    pub const fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Sets the anchoring and scaling behavior.
    #[must_use]
    pub const fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// Details passed to [`WidgetHandler::click`](crate::WidgetHandler::click).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickContext {
    /// Release position in world space.
    pub world: Point,
    /// Release position in surface pixels.
    pub view: Point,
    /// Milliseconds between press and release.
    pub elapsed_ms: u64,
}
