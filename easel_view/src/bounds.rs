// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded numeric helpers shared by the transform and widget layers.

use kurbo::{Point, Rect};

/// Clamps `n` into `[lo, hi]`, letting values within `tolerance` of either
/// bound through unchanged.
///
/// Returns `hi` when `n > hi + tolerance`, `lo` when `n < lo - tolerance`,
/// and `n` otherwise. With a zero tolerance this is an ordinary clamp that
/// does not panic when `lo > hi`.
#[must_use]
pub fn clamp(n: f64, lo: f64, hi: f64, tolerance: f64) -> f64 {
    if n > hi + tolerance {
        hi
    } else if n < lo - tolerance {
        lo
    } else {
        n
    }
}

/// Applies `delta` to `n` with "soft wall" semantics at `lo` and `hi`.
///
/// - When `n` is at or beyond `hi` and `delta` points further up, `n` is
///   returned unchanged. The same holds at `lo` for negative deltas.
/// - Motion back toward the valid range is always applied.
/// - A step that starts inside the range is clamped into it, so a value that
///   starts in range never leaves it.
#[must_use]
pub fn rate_limited_step(n: f64, lo: f64, hi: f64, delta: f64) -> f64 {
    if (n >= hi && delta > 0.0) || (n <= lo && delta < 0.0) {
        return n;
    }
    let next = n + delta;
    if n > hi || n < lo {
        // Already outside (for example after the bounds were tightened):
        // only inward motion reaches this point.
        return next;
    }
    clamp(next, lo, hi, 0.0)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Returns `true` if `point` lies in `rect` grown by `tolerance` on every side.
///
/// Edges are inclusive.
#[must_use]
pub fn contains_point(rect: Rect, point: Point, tolerance: f64) -> bool {
    let rect = rect.abs();
    point.x >= rect.x0 - tolerance
        && point.x <= rect.x1 + tolerance
        && point.y >= rect.y0 - tolerance
        && point.y <= rect.y1 + tolerance
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{clamp, contains_point, distance, rate_limited_step};

    #[test]
    fn clamp_respects_tolerance() {
        assert_eq!(clamp(5.0, 0.0, 10.0, 0.0), 5.0);
        assert_eq!(clamp(11.0, 0.0, 10.0, 0.0), 10.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0, 0.0), 0.0);
        // Within tolerance the value passes through.
        assert_eq!(clamp(10.5, 0.0, 10.0, 1.0), 10.5);
        assert_eq!(clamp(-0.5, 0.0, 10.0, 1.0), -0.5);
        // Beyond tolerance it snaps to the bound, not bound + tolerance.
        assert_eq!(clamp(12.0, 0.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn clamp_with_infinite_bounds_is_identity() {
        assert_eq!(
            clamp(1.0e12, f64::NEG_INFINITY, f64::INFINITY, 0.0),
            1.0e12
        );
    }

    #[test]
    fn step_inside_range_is_clamped() {
        assert_eq!(rate_limited_step(1.0, 0.5, 2.0, 0.5), 1.5);
        assert_eq!(rate_limited_step(1.8, 0.5, 2.0, 0.5), 2.0);
        assert_eq!(rate_limited_step(0.6, 0.5, 2.0, -0.5), 0.5);
    }

    #[test]
    fn step_at_wall_freezes_outward_motion() {
        assert_eq!(rate_limited_step(2.0, 0.5, 2.0, 0.2), 2.0);
        assert_eq!(rate_limited_step(0.5, 0.5, 2.0, -0.2), 0.5);
        // Moving back in is allowed.
        assert_eq!(rate_limited_step(2.0, 0.5, 2.0, -0.25), 1.75);
    }

    #[test]
    fn step_outside_range_only_moves_inward() {
        // Bounds were tightened below the current value.
        assert_eq!(rate_limited_step(3.0, 0.5, 2.0, 0.5), 3.0);
        assert_eq!(rate_limited_step(3.0, 0.5, 2.0, -0.5), 2.5);
        assert_eq!(rate_limited_step(0.1, 0.5, 2.0, 0.1), 0.2);
    }

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn contains_point_with_tolerance() {
        let rect = Rect::new(10.0, 10.0, 20.0, 30.0);
        assert!(contains_point(rect, Point::new(15.0, 20.0), 0.0));
        assert!(contains_point(rect, Point::new(10.0, 30.0), 0.0));
        assert!(!contains_point(rect, Point::new(9.0, 20.0), 0.0));
        assert!(contains_point(rect, Point::new(9.0, 20.0), 1.0));
        assert!(!contains_point(rect, Point::new(15.0, 32.0), 1.0));
    }
}
