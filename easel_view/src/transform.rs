// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::bounds::{clamp, rate_limited_step};

/// Translation bounds that never clamp.
pub const UNBOUNDED: Rect = Rect::new(
    f64::NEG_INFINITY,
    f64::NEG_INFINITY,
    f64::INFINITY,
    f64::INFINITY,
);

/// Default scale bounds: a floor of zero and no ceiling on either axis.
pub const DEFAULT_SCALE_BOUNDS: Rect = Rect::new(0.0, 0.0, f64::INFINITY, f64::INFINITY);

/// Whether a mutation is expressed relative to the current value or as a
/// replacement for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Motion {
    /// Offsets (for translation) or multiplies (for scale) the current value.
    #[default]
    Relative,
    /// Replaces the current value.
    Absolute,
}

/// Multipliers applied to raw gesture deltas before they reach
/// [`TransformState::translate`] and [`TransformState::scale`].
///
/// The transform itself does not apply these; input routers read them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speed {
    /// Multiplier for pan deltas.
    pub translation: f64,
    /// Multiplier for zoom deltas.
    pub scale: f64,
}

impl Default for Speed {
    fn default() -> Self {
        Self {
            translation: 1.0,
            scale: 1.0,
        }
    }
}

/// A per-axis boolean pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AxisMask {
    /// The X axis.
    pub x: bool,
    /// The Y axis.
    pub y: bool,
}

impl AxisMask {
    /// Neither axis.
    pub const NONE: Self = Self { x: false, y: false };
    /// Both axes.
    pub const BOTH: Self = Self { x: true, y: true };

    /// Returns `true` if either axis is set.
    #[must_use]
    pub const fn any(self) -> bool {
        self.x || self.y
    }

    /// Returns `true` if both axes are set.
    #[must_use]
    pub const fn all(self) -> bool {
        self.x && self.y
    }
}

/// Result of [`TransformState::scale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleOutcome {
    /// Scale after the mutation.
    pub scale: Vec2,
    /// Actual per-axis ratio `new / old`; `1.0` on an axis that did not move.
    pub ratio: Vec2,
    /// Axes whose scale value actually moved.
    ///
    /// Focal-point compensation must be gated on this mask: an axis frozen
    /// against a soft wall has `ratio == 1.0` and needs no correction.
    pub changed: AxisMask,
    /// Axes where the bounds altered the naive (unbounded) target.
    pub limited: AxisMask,
}

/// Pan + per-axis zoom state with soft bounds.
///
/// The view maps a world point `w` to the surface pixel
/// `w * scale + translation`. `translate` and `scale` are the only mutators of
/// the view; both keep the state inside the configured bounds:
///
/// - Translation is hard-clamped per axis against `translation_bounds`
///   (`x0`/`y0` are the minima, `x1`/`y1` the maxima). With dynamic bounds
///   the effective limits are multiplied by the current scale of that axis.
/// - Relative scaling goes through [`rate_limited_step`], so a zoom gesture
///   that overshoots a limit freezes at the wall instead of jittering.
#[derive(Clone, Debug)]
pub struct TransformState {
    translation: Vec2,
    scale: Vec2,
    translation_bounds: Rect,
    scale_bounds: Rect,
    dynamic_bounds: bool,
    speed: Speed,
    reversed: bool,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformState {
    /// Creates an identity transform with unbounded translation and the
    /// default scale bounds `[0, 0, ∞, ∞]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: Vec2::new(1.0, 1.0),
            translation_bounds: UNBOUNDED,
            scale_bounds: DEFAULT_SCALE_BOUNDS,
            dynamic_bounds: false,
            speed: Speed::default(),
            reversed: false,
        }
    }

    /// Current pan offset in surface pixels.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Current per-axis zoom factor.
    #[must_use]
    pub fn scale_factors(&self) -> Vec2 {
        self.scale
    }

    /// Configured translation bounds (before any dynamic scaling).
    #[must_use]
    pub fn translation_bounds(&self) -> Rect {
        self.translation_bounds
    }

    /// Sets the translation bounds and clamps the current translation into them.
    pub fn set_translation_bounds(&mut self, bounds: Rect) {
        self.translation_bounds = bounds;
        self.clamp_translation(self.translation);
    }

    /// Configured scale bounds.
    #[must_use]
    pub fn scale_bounds(&self) -> Rect {
        self.scale_bounds
    }

    /// Sets the scale bounds and clamps the current scale into them.
    pub fn set_scale_bounds(&mut self, bounds: Rect) {
        self.scale_bounds = bounds;
        self.scale = Vec2::new(
            clamp(self.scale.x, bounds.x0, bounds.x1, 0.0),
            clamp(self.scale.y, bounds.y0, bounds.y1, 0.0),
        );
    }

    /// Returns `true` if translation bounds follow the current scale.
    #[must_use]
    pub fn dynamic_bounds(&self) -> bool {
        self.dynamic_bounds
    }

    /// Makes translation bounds follow (or stop following) the current scale.
    pub fn set_dynamic_bounds(&mut self, dynamic: bool) {
        self.dynamic_bounds = dynamic;
    }

    /// Gesture speed multipliers.
    #[must_use]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Sets the gesture speed multipliers.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Returns `true` when incoming deltas are inverted.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Enables or disables inverted-gesture mode.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Translation bounds in effect right now.
    ///
    /// Equal to [`TransformState::translation_bounds`] unless dynamic bounds
    /// are enabled, in which case each finite limit is multiplied by the scale
    /// of its axis.
    #[must_use]
    pub fn effective_translation_bounds(&self) -> Rect {
        let b = self.translation_bounds;
        if !self.dynamic_bounds {
            return b;
        }
        let (sx, sy) = (self.scale.x, self.scale.y);
        Rect::new(
            scaled_limit(b.x0, sx),
            scaled_limit(b.y0, sy),
            scaled_limit(b.x1, sx),
            scaled_limit(b.y1, sy),
        )
    }

    /// Pans the view and returns the new translation.
    ///
    /// In reversed mode the input is negated first. [`Motion::Relative`] adds
    /// the input to the current translation, [`Motion::Absolute`] uses it as the
    /// target. Each axis is then clamped against the effective bounds.
    /// Non-finite input leaves the translation unchanged.
    pub fn translate(&mut self, delta: Vec2, motion: Motion) -> Vec2 {
        let input = if self.reversed { -delta } else { delta };
        let target = match motion {
            Motion::Relative => self.translation + input,
            Motion::Absolute => input,
        };
        self.clamp_translation(target)
    }

    /// Applies a relative focal-point correction, ignoring reversed mode.
    ///
    /// Zoom gestures use this to keep the point under the cursor (or between
    /// the fingers) stationary. The correction is derived from the scale that
    /// was actually applied, so it must not be inverted a second time.
    pub fn compensate(&mut self, delta: Vec2) -> Vec2 {
        self.clamp_translation(self.translation + delta)
    }

    /// Zooms the view and reports what happened on each axis.
    ///
    /// [`Motion::Relative`] multiplies the current scale by `factor` and
    /// applies the difference through [`rate_limited_step`]; in reversed mode
    /// the reciprocal factor is used. [`Motion::Absolute`] clamps `factor`
    /// directly into the scale bounds and ignores reversed mode.
    ///
    /// Factors that are not finite or not strictly positive leave that axis
    /// untouched.
    pub fn scale(&mut self, factor: Vec2, motion: Motion) -> ScaleOutcome {
        let previous = self.scale;
        let b = self.scale_bounds;
        let (x, limited_x) = self.scale_axis(previous.x, factor.x, b.x0, b.x1, motion);
        let (y, limited_y) = self.scale_axis(previous.y, factor.y, b.y0, b.y1, motion);
        self.scale = Vec2::new(x, y);

        let changed = AxisMask {
            x: x != previous.x,
            y: y != previous.y,
        };
        if !changed.all() && (limited_x || limited_y) {
            tracing::trace!(scale = ?self.scale, "scale held at bounds");
        }
        ScaleOutcome {
            scale: self.scale,
            ratio: Vec2::new(axis_ratio(x, previous.x), axis_ratio(y, previous.y)),
            changed,
            limited: AxisMask {
                x: limited_x,
                y: limited_y,
            },
        }
    }

    /// Uniform variant of [`TransformState::scale`].
    pub fn scale_uniform(&mut self, factor: f64, motion: Motion) -> ScaleOutcome {
        self.scale(Vec2::new(factor, factor), motion)
    }

    /// Converts a surface pixel position into world space.
    #[must_use]
    pub fn view_to_world(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.translation.x) / self.scale.x,
            (pt.y - self.translation.y) / self.scale.y,
        )
    }

    /// Converts a world-space position into surface pixels.
    #[must_use]
    pub fn world_to_view(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale.x + self.translation.x,
            pt.y * self.scale.y + self.translation.y,
        )
    }

    /// The world → surface transform, suitable for a painter's `set_transform`.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }

    fn clamp_translation(&mut self, target: Vec2) -> Vec2 {
        if !target.is_finite() {
            return self.translation;
        }
        let b = self.effective_translation_bounds();
        self.translation = Vec2::new(
            clamp(target.x, b.x0, b.x1, 0.0),
            clamp(target.y, b.y0, b.y1, 0.0),
        );
        self.translation
    }

    fn scale_axis(&self, current: f64, factor: f64, lo: f64, hi: f64, motion: Motion) -> (f64, bool) {
        if !factor.is_finite() || factor <= 0.0 {
            return (current, false);
        }
        match motion {
            Motion::Relative => {
                let factor = if self.reversed { 1.0 / factor } else { factor };
                let naive = current * factor;
                let next = rate_limited_step(current, lo, hi, naive - current);
                (next, next != naive)
            }
            Motion::Absolute => {
                let next = clamp(factor, lo, hi, 0.0);
                (next, next != factor)
            }
        }
    }
}

fn scaled_limit(limit: f64, scale: f64) -> f64 {
    // ∞ * 0 would be NaN; an infinite limit stays infinite.
    if limit.is_infinite() {
        limit
    } else {
        limit * scale
    }
}

fn axis_ratio(new: f64, old: f64) -> f64 {
    if old == 0.0 { 1.0 } else { new / old }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{Motion, TransformState};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn relative_and_absolute_translation() {
        let mut t = TransformState::new();
        assert_eq!(t.translate(Vec2::new(10.0, -5.0), Motion::Relative), Vec2::new(10.0, -5.0));
        assert_eq!(t.translate(Vec2::new(1.0, 1.0), Motion::Relative), Vec2::new(11.0, -4.0));
        assert_eq!(t.translate(Vec2::new(3.0, 4.0), Motion::Absolute), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn translation_is_clamped_per_axis() {
        let mut t = TransformState::new();
        t.set_translation_bounds(Rect::new(-100.0, -50.0, 100.0, 50.0));
        let out = t.translate(Vec2::new(500.0, -500.0), Motion::Relative);
        assert_eq!(out, Vec2::new(100.0, -50.0));
    }

    #[test]
    fn dynamic_bounds_follow_scale() {
        let mut t = TransformState::new();
        t.set_translation_bounds(Rect::new(-100.0, -100.0, 100.0, 100.0));
        t.set_dynamic_bounds(true);
        t.scale(Vec2::new(2.0, 0.5), Motion::Absolute);
        let out = t.translate(Vec2::new(1000.0, 1000.0), Motion::Absolute);
        assert_eq!(out, Vec2::new(200.0, 50.0));
    }

    #[test]
    fn reversed_translation_negates_input() {
        let mut t = TransformState::new();
        t.set_reversed(true);
        assert_eq!(t.translate(Vec2::new(4.0, -2.0), Motion::Relative), Vec2::new(-4.0, 2.0));
        // Compensation is not inverted.
        assert_eq!(t.compensate(Vec2::new(4.0, -2.0)), Vec2::ZERO);
    }

    #[test]
    fn non_finite_translation_is_ignored() {
        let mut t = TransformState::new();
        t.translate(Vec2::new(1.0, 2.0), Motion::Absolute);
        t.translate(Vec2::new(f64::NAN, 0.0), Motion::Relative);
        assert_eq!(t.translation(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn relative_scale_multiplies() {
        let mut t = TransformState::new();
        let out = t.scale(Vec2::new(2.0, 3.0), Motion::Relative);
        assert_eq!(out.scale, Vec2::new(2.0, 3.0));
        assert!(out.changed.all());
        assert!(!out.limited.any());
        assert!(approx(out.ratio.x, 2.0) && approx(out.ratio.y, 3.0));
    }

    #[test]
    fn relative_scale_soft_wall() {
        let mut t = TransformState::new();
        t.set_scale_bounds(Rect::new(0.5, 0.5, 2.0, 2.0));
        let first = t.scale_uniform(1.5, Motion::Relative);
        assert_eq!(first.scale, Vec2::new(1.5, 1.5));
        let second = t.scale_uniform(1.5, Motion::Relative);
        assert_eq!(second.scale, Vec2::new(2.0, 2.0));
        assert!(second.limited.all());
        assert!(second.changed.all());
        // Already at the ceiling: further zooming in is inert.
        let third = t.scale_uniform(1.1, Motion::Relative);
        assert_eq!(third.scale, Vec2::new(2.0, 2.0));
        assert!(!third.changed.any());
        assert_eq!(third.ratio, Vec2::new(1.0, 1.0));
        // Zooming back out is applied.
        let fourth = t.scale_uniform(0.5, Motion::Relative);
        assert_eq!(fourth.scale, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn freescale_can_hit_one_wall_only() {
        let mut t = TransformState::new();
        t.set_scale_bounds(Rect::new(0.5, 0.5, 1.2, 4.0));
        let out = t.scale(Vec2::new(2.0, 2.0), Motion::Relative);
        assert_eq!(out.scale, Vec2::new(1.2, 2.0));
        assert!(out.limited.x && !out.limited.y);
        let out = t.scale(Vec2::new(2.0, 2.0), Motion::Relative);
        assert!(!out.changed.x && out.changed.y);
    }

    #[test]
    fn absolute_scale_clamps() {
        let mut t = TransformState::new();
        t.set_scale_bounds(Rect::new(0.25, 0.25, 4.0, 4.0));
        let out = t.scale(Vec2::new(10.0, 0.1), Motion::Absolute);
        assert_eq!(out.scale, Vec2::new(4.0, 0.25));
        assert!(out.limited.all());
    }

    #[test]
    fn non_positive_scale_factors_are_ignored() {
        let mut t = TransformState::new();
        let out = t.scale(Vec2::new(0.0, -2.0), Motion::Relative);
        assert_eq!(out.scale, Vec2::new(1.0, 1.0));
        assert!(!out.changed.any());
        let out = t.scale(Vec2::new(0.0, f64::NAN), Motion::Absolute);
        assert_eq!(out.scale, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn reversed_scale_uses_reciprocal() {
        let mut t = TransformState::new();
        t.set_reversed(true);
        let out = t.scale_uniform(2.0, Motion::Relative);
        assert_eq!(out.scale, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn view_world_roundtrip() {
        let mut t = TransformState::new();
        t.translate(Vec2::new(30.0, -20.0), Motion::Absolute);
        t.scale(Vec2::new(2.0, 4.0), Motion::Absolute);
        let world = Point::new(5.0, 6.0);
        let view = t.world_to_view(world);
        assert_eq!(view, Point::new(40.0, 4.0));
        let back = t.view_to_world(view);
        assert!(approx(back.x, world.x) && approx(back.y, world.y));
        assert_eq!(t.affine() * world, view);
    }
}
