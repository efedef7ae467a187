use fenestra_core::{Error, Point, ShapeError, Vector};
use fenestra_designer::{IsoscelesTrianglePoly, ParametricShape, PolyId, PolyShape};
use proptest::prelude::*;

fn gable() -> IsoscelesTrianglePoly {
    IsoscelesTrianglePoly::new(PolyId::new(1), Point::new(0.0, 0.0), 100.0, 60.0).unwrap()
}

#[test]
fn test_edits_leave_source_untouched() {
    let t = gable();
    let before = t.clone();
    let _ = t.drag_edge(1, Vector::new(0.0, -20.0), None).unwrap();
    let _ = t.drag_vertex(2, Vector::new(10.0, 0.0), true, None).unwrap();
    let _ = t.edit_dim(2, 1.5, Vector::new(1.0, 0.0)).unwrap();
    let _ = t.scale(2.0).unwrap();
    let _ = t.translate(Vector::new(5.0, 5.0));
    assert_eq!(t, before);
}

#[test]
fn test_json_round_trip() {
    let shape = PolyShape::IsoscelesTriangle(gable());
    let value = shape.to_json().unwrap();
    assert_eq!(value["type"], "IsoscelesTriangle");
    assert_eq!(value["width"], 100.0);
    assert_eq!(value["height"], 60.0);
    assert_eq!(value["cpt"]["x"], 0.0);

    let back = PolyShape::from_json(&value).unwrap();
    assert_eq!(back, shape);
    assert_eq!(back.type_name(), "IsoscelesTriangle");
}

#[test]
fn test_unknown_type_rejected() {
    let value = serde_json::json!({ "type": "Hexagon", "sides": 6 });
    let err = PolyShape::from_json(&value).unwrap_err();
    assert!(matches!(
        err,
        Error::Shape(ShapeError::UnknownShapeType { ref type_name }) if type_name == "Hexagon"
    ));
}

#[test]
fn test_height_to_grows_upward() {
    let t = gable().height_to(90.0).unwrap();
    assert!((t.height - 90.0).abs() < 1e-9);
    assert!((t.base_left().y + 30.0).abs() < 1e-9);
    assert!((t.apex().y - 60.0).abs() < 1e-9);
}

#[test]
fn test_scale_rejects_non_positive() {
    assert!(gable().scale(0.0).is_err());
    assert!(gable().scale(-1.0).is_err());
}

proptest! {
    #[test]
    fn prop_symmetric_base_drag_keeps_axis(
        dx in -40.0f64..40.0,
        dy in -20.0f64..20.0,
        use_right in any::<bool>(),
    ) {
        let t = gable();
        let index = if use_right { 2 } else { 1 };
        let moved = t.drag_vertex(index, Vector::new(dx, dy), true, None).unwrap();

        prop_assert!(moved.cpt.x.abs() < 1e-9);
        prop_assert!((moved.apex().x - moved.cpt.x).abs() < 1e-9);
        let left = moved.base_left();
        let right = moved.base_right();
        prop_assert!((left.x + right.x - 2.0 * moved.cpt.x).abs() < 1e-9);
        prop_assert!((left.y - right.y).abs() < 1e-9);
        let expected = if use_right { 100.0 + 2.0 * dx } else { 100.0 - 2.0 * dx };
        prop_assert!((moved.width - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_translate_moves_every_vertex(vx in -500.0f64..500.0, vy in -500.0f64..500.0) {
        let t = gable();
        let moved = t.translate(Vector::new(vx, vy));
        for (a, b) in t.vertices().iter().zip(moved.vertices().iter()) {
            prop_assert!((b.x - a.x - vx).abs() < 1e-9);
            prop_assert!((b.y - a.y - vy).abs() < 1e-9);
        }
    }
}
