// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel delta normalization and the zoom factor derived from it.

use kurbo::Size;

/// Pixels per line used when the host reports line-based wheel deltas.
pub const DEFAULT_PIXELS_PER_LINE: f64 = 16.0;

/// Smallest zoom factor a single wheel event can produce.
pub const MIN_WHEEL_FACTOR: f64 = 0.1;

/// Unit of a wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaMode {
    /// Already in pixels.
    #[default]
    Pixel,
    /// Text lines.
    Line,
    /// Whole pages (one viewport height each, keeping the scroll direction).
    Page,
}

/// Converts a wheel delta into pixels.
#[must_use]
pub fn normalize_delta(delta: f64, mode: DeltaMode, pixels_per_line: f64, viewport_height: f64) -> f64 {
    match mode {
        DeltaMode::Pixel => delta,
        DeltaMode::Line => delta * pixels_per_line,
        DeltaMode::Page => delta * viewport_height,
    }
}

/// Zoom factor for a normalized wheel delta on a viewport.
///
/// `1 - speed * delta / min(width, height)`, floored at [`MIN_WHEEL_FACTOR`]
/// so a large zoom-out fling still steps toward the scale floor. An empty
/// viewport yields `1.0`.
#[must_use]
pub fn wheel_zoom_factor(normalized: f64, scale_speed: f64, viewport: Size) -> f64 {
    let side = viewport.min_side();
    if side <= 0.0 || !side.is_finite() {
        return 1.0;
    }
    (1.0 - scale_speed * normalized / side).max(MIN_WHEEL_FACTOR)
}
