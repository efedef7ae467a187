use fenestra_core::{Line, Point, Vector};
use fenestra_designer::{PolyId, PolyShape, RectanglePoly, WinPolygon};

fn house() -> WinPolygon {
    WinPolygon::from_points(
        PolyId::new(3),
        &[
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(50.0, 150.0),
            Point::new(0.0, 100.0),
        ],
    )
    .unwrap()
}

#[test]
fn test_polygon_edits_return_new_values() {
    let poly = house();
    let before = poly.clone();
    let dragged = poly.drag_edge(0, Vector::new(0.0, -20.0)).unwrap();
    let moved = poly.translate(Vector::new(10.0, 0.0));
    assert_eq!(poly, before);
    assert!((dragged.bounds().min_y + 20.0).abs() < 1e-9);
    assert!((moved.bounds().min_x - 10.0).abs() < 1e-9);
}

#[test]
fn test_free_polygon_symmetric_vertex_drag() {
    let shape = PolyShape::Polygon(house());
    let moved = shape
        .drag_vertex(2, Vector::new(10.0, 5.0), true, None)
        .unwrap();
    let PolyShape::Polygon(poly) = moved else {
        panic!("shape kind changed");
    };
    let vs = poly.vertices();
    assert!(vs.iter().any(|v| v.equal_to(&Point::new(110.0, 105.0))));
    assert!(vs.iter().any(|v| v.equal_to(&Point::new(-10.0, 105.0))));
    assert!(vs.iter().any(|v| v.equal_to(&Point::new(50.0, 150.0))));
}

#[test]
fn test_free_polygon_width_edit_keeps_min_side() {
    let shape = PolyShape::Polygon(house());
    let wider = shape.edit_dim(2, 2.0, Vector::new(1.0, 0.0)).unwrap();
    let b = wider.polygon().unwrap().bounds();
    assert!(b.min_x.abs() < 1e-9);
    assert!((b.max_x - 200.0).abs() < 1e-9);
    assert!((b.max_y - 150.0).abs() < 1e-9);
}

#[test]
fn test_unsupported_dimension_rejected() {
    let shape = PolyShape::Polygon(house());
    assert!(shape.edit_dim(1, 2.0, Vector::new(0.0, 0.0)).is_err());
}

#[test]
fn test_rectangle_through_shape_union() {
    let rect = RectanglePoly::new(PolyId::new(0), Point::new(0.0, 0.0), 100.0, 200.0).unwrap();
    let shape = PolyShape::Rectangle(rect.clone());
    let dragged = shape.drag_edge(1, Vector::new(20.0, 0.0), None).unwrap();
    assert_eq!(dragged.type_name(), "Rectangle");
    assert!((dragged.polygon().unwrap().width() - 120.0).abs() < 1e-9);
    assert_eq!(shape, PolyShape::Rectangle(rect));
}

#[test]
fn test_split_keeps_tree_ids() {
    let poly = house();
    let (left, right) = poly.split_by_line(&Line::vertical(30.0)).unwrap();
    assert_eq!(left.id, PolyId::with_pos(3, vec![0]));
    assert_eq!(right.id, PolyId::with_pos(3, vec![1]));
    assert!(left.id.is_descendant_of(&poly.id));
    // left of an upward line is the smaller-x side
    assert!(left.center().x < right.center().x);
    assert!((left.area() + right.area() - poly.area()).abs() < 1e-6);
}
