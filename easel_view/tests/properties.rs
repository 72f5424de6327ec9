// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `TransformState`.
//!
//! These check the bounds, soft-wall, and reversal guarantees over arbitrary
//! sequences of pan and zoom calls.

use easel_view::{Motion, TransformState};
use kurbo::{Rect, Vec2};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Translate(Vec2, Motion),
    Scale(Vec2, Motion),
}

fn motion() -> impl Strategy<Value = Motion> {
    prop_oneof![Just(Motion::Relative), Just(Motion::Absolute)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-500.0..500.0_f64, -500.0..500.0_f64, motion())
            .prop_map(|(x, y, m)| Op::Translate(Vec2::new(x, y), m)),
        (0.05..5.0_f64, 0.05..5.0_f64, motion())
            .prop_map(|(x, y, m)| Op::Scale(Vec2::new(x, y), m)),
    ]
}

fn apply(t: &mut TransformState, op: &Op) {
    match *op {
        Op::Translate(d, m) => {
            t.translate(d, m);
        }
        Op::Scale(f, m) => {
            t.scale(f, m);
        }
    }
}

proptest! {
    #[test]
    fn translation_stays_in_bounds(
        ops in prop::collection::vec(op(), 1..64),
        dynamic in any::<bool>(),
        reversed in any::<bool>(),
    ) {
        let mut t = TransformState::new();
        t.set_translation_bounds(Rect::new(-200.0, -100.0, 300.0, 150.0));
        t.set_scale_bounds(Rect::new(0.25, 0.25, 8.0, 8.0));
        t.set_dynamic_bounds(dynamic);
        t.set_reversed(reversed);
        for op in &ops {
            apply(&mut t, op);
            if let Op::Translate(..) = op {
                let b = t.effective_translation_bounds();
                let tr = t.translation();
                prop_assert!(tr.x >= b.x0 && tr.x <= b.x1, "x {} outside {:?}", tr.x, b);
                prop_assert!(tr.y >= b.y0 && tr.y <= b.y1, "y {} outside {:?}", tr.y, b);
                prop_assert!(tr.is_finite(), "translation must stay finite");
            }
        }
    }

    #[test]
    fn scale_stays_in_bounds(ops in prop::collection::vec(op(), 1..64)) {
        let mut t = TransformState::new();
        let bounds = Rect::new(0.5, 0.25, 3.0, 6.0);
        t.set_scale_bounds(bounds);
        for op in &ops {
            apply(&mut t, op);
            let s = t.scale_factors();
            prop_assert!(s.x >= bounds.x0 && s.x <= bounds.x1, "sx {} out of bounds", s.x);
            prop_assert!(s.y >= bounds.y0 && s.y <= bounds.y1, "sy {} out of bounds", s.y);
        }
    }

    #[test]
    fn default_bounds_keep_scale_positive(ops in prop::collection::vec(op(), 1..64)) {
        let mut t = TransformState::new();
        for op in &ops {
            apply(&mut t, op);
            let s = t.scale_factors();
            prop_assert!(s.x > 0.0 && s.y > 0.0, "scale must stay positive: {:?}", s);
        }
    }

    #[test]
    fn zooming_past_the_ceiling_is_inert(factor in 1.0001..3.0_f64, repeats in 1_usize..20) {
        let mut t = TransformState::new();
        t.set_scale_bounds(Rect::new(0.5, 0.5, 2.0, 2.0));
        t.scale_uniform(2.0, Motion::Absolute);
        for _ in 0..repeats {
            let out = t.scale_uniform(factor, Motion::Relative);
            prop_assert_eq!(out.scale, Vec2::new(2.0, 2.0));
            prop_assert!(!out.changed.any(), "scale must not move at the wall");
        }
    }

    #[test]
    fn reversal_is_symmetric(
        start in (-50.0..50.0_f64, -50.0..50.0_f64),
        delta in (-80.0..80.0_f64, -80.0..80.0_f64),
        absolute in any::<bool>(),
    ) {
        let motion = if absolute { Motion::Absolute } else { Motion::Relative };
        let bounds = Rect::new(-60.0, -60.0, 60.0, 60.0);
        let start = Vec2::new(start.0, start.1);
        let delta = Vec2::new(delta.0, delta.1);

        let mut reversed = TransformState::new();
        reversed.set_translation_bounds(bounds);
        reversed.translate(start, Motion::Absolute);
        reversed.set_reversed(true);

        let mut plain = TransformState::new();
        plain.set_translation_bounds(bounds);
        plain.translate(start, Motion::Absolute);

        prop_assert_eq!(reversed.translate(delta, motion), plain.translate(-delta, motion));
    }
}
