//! Property tests for the distance queries and rectangle primitives

use boomwalk::geom::{Point, Rect};
use boomwalk::model::Configuration;
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = Point> {
    (-2.0..2.0f64, -2.0..2.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_configuration(len: usize) -> impl Strategy<Value = Configuration> {
    prop::collection::vec(arb_point(), len).prop_map(Configuration::new)
}

proptest! {
    #[test]
    fn self_distance_is_zero(cfg in (1usize..8).prop_flat_map(arb_configuration)) {
        prop_assert_eq!(cfg.max_distance(&cfg), Some(0.0));
        prop_assert_eq!(cfg.total_distance(&cfg), Some(0.0));
    }

    #[test]
    fn total_dominates_max(
        (a, b) in (1usize..8).prop_flat_map(|n| (arb_configuration(n), arb_configuration(n)))
    ) {
        let max = a.max_distance(&b).unwrap();
        let total = a.total_distance(&b).unwrap();
        prop_assert!(total >= max);
        prop_assert!(max >= 0.0);
    }

    #[test]
    fn mismatched_lengths_are_sentinels(
        a in arb_configuration(3),
        b in arb_configuration(5),
    ) {
        prop_assert_eq!(a.max_distance(&b), None);
        prop_assert_eq!(b.total_distance(&a), None);
    }

    #[test]
    fn rect_distance_zero_iff_touching_or_inside(
        p in arb_point(),
        (x, y) in (-1.0..1.0f64, -1.0..1.0f64),
        (w, h) in (0.1..1.0f64, 0.1..1.0f64),
    ) {
        let rect = Rect::new(x, y, w, h);
        let d = rect.distance(&p);
        prop_assert!(d >= 0.0);
        if rect.contains(&p) {
            prop_assert_eq!(d, 0.0);
        }
    }

    #[test]
    fn outcode_offset_has_rect_distance_magnitude(
        p in arb_point(),
        (x, y) in (-1.0..1.0f64, -1.0..1.0f64),
        (w, h) in (0.1..1.0f64, 0.1..1.0f64),
    ) {
        let rect = Rect::new(x, y, w, h);
        if let Some(oc) = rect.outcode(&p) {
            let offset_len = (oc.dx * oc.dx + oc.dy * oc.dy).sqrt();
            prop_assert!((offset_len - rect.distance(&p)).abs() < 1e-9);
            // The anchor really is on the boundary
            prop_assert!(!rect.contains(&oc.anchor));
            prop_assert!(rect.distance(&oc.anchor) < 1e-9);
        }
    }

    #[test]
    fn grow_then_shrink_is_identity(
        (x, y) in (-1.0..1.0f64, -1.0..1.0f64),
        (w, h) in (0.5..1.0f64, 0.5..1.0f64),
        delta in 0.0..0.2f64,
    ) {
        let rect = Rect::new(x, y, w, h);
        let back = rect.grow(delta).grow(-delta);
        prop_assert!((back.x - rect.x).abs() < 1e-12);
        prop_assert!((back.y - rect.y).abs() < 1e-12);
        prop_assert!((back.w - rect.w).abs() < 1e-12);
        prop_assert!((back.h - rect.h).abs() < 1e-12);
    }
}
