use fenestra_core::Point;
use fenestra_designer::{
    Direction, EdgeFinder, IsoscelesTrianglePoly, ParametricShape, PolyId, WinPolygon,
};

fn gable() -> WinPolygon {
    IsoscelesTrianglePoly::new(PolyId::new(0), Point::new(0.0, 0.0), 100.0, 60.0)
        .unwrap()
        .to_polygon()
        .unwrap()
}

#[test]
fn test_triangle_sides() {
    let poly = gable();
    assert_eq!(EdgeFinder::find_index(Direction::Down, &poly), Some(1));
    assert_eq!(EdgeFinder::find_index(Direction::Left, &poly), Some(0));
    assert_eq!(EdgeFinder::find_index(Direction::Right, &poly), Some(2));
}

#[test]
fn test_screen_coordinates_swap_up_and_down() {
    let poly = WinPolygon::rectangle(PolyId::new(0), Point::new(0.0, 0.0), 40.0, 20.0).unwrap();
    assert_eq!(EdgeFinder::find_index2(Direction::Up, &poly), Some(0));
    assert_eq!(EdgeFinder::find_index2(Direction::Down, &poly), Some(2));
    assert_eq!(
        EdgeFinder::find_direction(&poly, 2, true),
        Some(Direction::Down)
    );
}

#[test]
fn test_neighbouring_panes_are_connected() {
    let a = WinPolygon::rectangle(PolyId::new(0), Point::new(0.0, 0.0), 100.0, 100.0).unwrap();
    let b = WinPolygon::rectangle(PolyId::new(1), Point::new(100.0, 20.0), 100.0, 100.0).unwrap();
    let far = WinPolygon::rectangle(PolyId::new(2), Point::new(500.0, 0.0), 100.0, 100.0).unwrap();
    assert_eq!(EdgeFinder::connected_edge_index(&a, &b), Some(1));
    assert!(!EdgeFinder::is_polygon_connected(&a, &far));
}
