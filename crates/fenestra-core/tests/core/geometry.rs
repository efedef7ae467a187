use fenestra_core::{Arc, Bounds, Edge, Line, Point, Segment, Vector};
use proptest::prelude::*;
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_bounds_from_points() {
    let pts = [
        Point::new(1.0, 5.0),
        Point::new(-2.0, 3.0),
        Point::new(4.0, -1.0),
    ];
    let b = Bounds::from_points(&pts).unwrap();
    assert_eq!(b, Bounds::new(-2.0, -1.0, 4.0, 5.0));
    assert_eq!(b.center(), Point::new(1.0, 2.0));
    assert!(Bounds::from_points(std::iter::empty()).is_none());
}

#[test]
fn test_arc_edge_tangent_follows_travel() {
    // Quarter circle from (1,0) to (0,1) counter-clockwise around the origin.
    let edge = Edge::Arc(Arc::new(Point::new(0.0, 0.0), 1.0, 0.0, FRAC_PI_2));
    let t0 = edge.tangent_at(0.0);
    assert!(t0.equal_to(&Vector::new(0.0, 1.0)));
    assert!(edge.end().equal_to(&Point::new(0.0, 1.0)));
    assert!((edge.length() - FRAC_PI_2).abs() < 1e-9);
}

#[test]
fn test_segment_crosses_vertical_line() {
    let seg = Segment::new(Point::new(-5.0, 2.0), Point::new(5.0, 2.0));
    let hit = seg.intersect_line(&Line::vertical(1.5)).unwrap();
    assert!(hit.equal_to(&Point::new(1.5, 2.0)));
}

proptest! {
    #[test]
    fn prop_bulge_round_trip(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
        len in 1.0f64..50.0,
        bulge in prop_oneof![-3.0f64..-0.05, 0.05f64..3.0],
    ) {
        let start = Point::new(x, y);
        let end = Point::new(x + len, y + len / 2.0);
        let arc = Arc::from_bulge(start, end, bulge).unwrap();
        prop_assert!(arc.start().distance_to(&start) < 1e-6);
        prop_assert!(arc.end().distance_to(&end) < 1e-6);
        prop_assert!((arc.bulge() - bulge).abs() < 1e-9);
    }

    #[test]
    fn prop_rotation_preserves_distance(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
        angle in -6.3f64..6.3,
    ) {
        let center = Point::new(3.0, -7.0);
        let p = Point::new(x, y);
        let r = p.rotate(angle, center);
        prop_assert!((r.distance_to(&center) - p.distance_to(&center)).abs() < 1e-9);
    }
}
