// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch classification math.

use easel_view::bounds::distance;
use kurbo::{Point, Vec2};

/// Separations below this are always treated as coincident touches.
const MIN_SEPARATION: f64 = 1e-9;

/// Both touches moved further than `sensitivity` from their baseline.
pub(crate) fn both_moved(baseline: [Point; 2], current: [Point; 2], sensitivity: f64) -> bool {
    distance(baseline[0], current[0]) > sensitivity && distance(baseline[1], current[1]) > sensitivity
}

/// Per-axis separation ratio `current / baseline`.
///
/// An axis on which the baseline touches are closer than `min_separation`
/// pixels reports `1.0`.
pub(crate) fn freescale_ratio(
    baseline: [Point; 2],
    current: [Point; 2],
    min_separation: f64,
) -> Vec2 {
    let before = baseline[1] - baseline[0];
    let after = current[1] - current[0];
    Vec2::new(
        axis_ratio(after.x.abs(), before.x.abs(), min_separation),
        axis_ratio(after.y.abs(), before.y.abs(), min_separation),
    )
}

/// Euclidean separation ratio `current / baseline`, `1.0` when the baseline
/// touches are closer than `min_separation` pixels.
pub(crate) fn uniform_ratio(
    baseline: [Point; 2],
    current: [Point; 2],
    min_separation: f64,
) -> f64 {
    axis_ratio(
        distance(current[0], current[1]),
        distance(baseline[0], baseline[1]),
        min_separation,
    )
}

/// Midpoint of the pair.
pub(crate) fn centroid(points: [Point; 2]) -> Point {
    points[0].midpoint(points[1])
}

/// Damps (or amplifies) a ratio around `1.0` by the zoom speed.
pub(crate) fn ease(ratio: f64, speed: f64) -> f64 {
    1.0 + (ratio - 1.0) * speed
}

fn axis_ratio(after: f64, before: f64, min_separation: f64) -> f64 {
    if before < min_separation.max(MIN_SEPARATION) {
        1.0
    } else {
        after / before
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::*;

    const BASE: [Point; 2] = [Point::new(100.0, 100.0), Point::new(200.0, 150.0)];

    #[test]
    fn small_jitter_is_not_movement() {
        let jitter = [Point::new(100.5, 100.0), Point::new(230.0, 150.0)];
        assert!(!both_moved(BASE, jitter, 1.0));
        let spread = [Point::new(90.0, 95.0), Point::new(230.0, 150.0)];
        assert!(both_moved(BASE, spread, 1.0));
    }

    #[test]
    fn freescale_axes_are_independent() {
        let spread = [Point::new(50.0, 90.0), Point::new(250.0, 160.0)];
        assert_eq!(freescale_ratio(BASE, spread, 1.0), Vec2::new(2.0, 1.4));
    }

    #[test]
    fn coincident_axis_reports_unit_ratio() {
        let base = [Point::new(0.0, 10.0), Point::new(0.0, 20.0)];
        let cur = [Point::new(-5.0, 0.0), Point::new(5.0, 30.0)];
        assert_eq!(freescale_ratio(base, cur, 1.0), Vec2::new(1.0, 3.0));
    }

    #[test]
    fn nearly_level_axis_reports_unit_ratio() {
        let base = [Point::new(0.0, 100.0), Point::new(100.0, 100.5)];
        let cur = [Point::new(-10.0, 95.0), Point::new(110.0, 105.5)];
        let ratio = freescale_ratio(base, cur, 1.0);
        assert_eq!(ratio.y, 1.0, "a half-pixel gap is not a usable baseline");
        assert_eq!(ratio.x, 1.2);
        assert_eq!(freescale_ratio(base, cur, 0.0).y, 21.0);
    }

    #[test]
    fn uniform_ratio_uses_distance() {
        let base = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let cur = [Point::new(0.0, 0.0), Point::new(6.0, 8.0)];
        assert_eq!(uniform_ratio(base, cur, 1.0), 2.0);
    }

    #[test]
    fn ease_scales_around_one() {
        assert_eq!(ease(2.0, 0.5), 1.5);
        assert_eq!(ease(0.5, 1.0), 0.5);
        assert_eq!(centroid(BASE), Point::new(150.0, 125.0));
    }
}
