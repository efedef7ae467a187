//! Direction based edge lookup on polygons.
//!
//! Edges of a counter-clockwise loop point right along the bottom, up along
//! the right side, left along the top and down along the left side. The edge
//! facing a direction is the one whose slope is closest to that heading; ties
//! go to the edge lying furthest out in that direction.

use fenestra_core::constants::EPS_LEN;
use fenestra_core::{Edge, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::polygon::WinPolygon;

const SLOPE_EPS: f64 = 1e-10;

/// One of the four sides of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Up and Down swap, Left and Right stay.
    pub fn invert_vertical(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            other => other,
        }
    }

    /// Heading of the edge on this side of a counter-clockwise loop.
    fn ccw_slope(self) -> f64 {
        match self {
            Direction::Down => 0.0,
            Direction::Right => FRAC_PI_2,
            Direction::Up => PI,
            Direction::Left => 3.0 * FRAC_PI_2,
        }
    }
}

/// Stateless lookups over polygon edges.
pub struct EdgeFinder;

impl EdgeFinder {
    /// The edge of `edges` (of a counter-clockwise loop) facing `direction`.
    pub fn find(direction: Direction, edges: &[Edge]) -> Option<&Edge> {
        let target = direction.ccw_slope();
        edges.iter().min_by(|a, b| {
            let da = (normalized_slope(a) - target).abs();
            let db = (normalized_slope(b) - target).abs();
            if (da - db).abs() < SLOPE_EPS {
                by_position(direction, a.start(), b.start())
            } else {
                da.total_cmp(&db)
            }
        })
    }

    /// Index of the edge of `polygon` facing `direction`.
    pub fn find_index(direction: Direction, polygon: &WinPolygon) -> Option<usize> {
        let edge = Self::find(direction, polygon.edges())?;
        polygon.find_edge_index(edge)
    }

    /// Like [`EdgeFinder::find_index`] with Up and Down swapped, for callers
    /// working in screen coordinates.
    pub fn find_index2(direction: Direction, polygon: &WinPolygon) -> Option<usize> {
        Self::find_index(direction.invert_vertical(), polygon)
    }

    /// The side of `polygon` that edge `edge_index` faces, if any.
    pub fn find_direction(
        polygon: &WinPolygon,
        edge_index: usize,
        invert_vertical: bool,
    ) -> Option<Direction> {
        let found = Direction::ALL
            .into_iter()
            .find(|d| Self::find_index(*d, polygon) == Some(edge_index))?;
        Some(if invert_vertical {
            found.invert_vertical()
        } else {
            found
        })
    }

    /// Index of the first edge of `a` that overlaps an edge of `b` along a
    /// stretch of positive length.
    pub fn connected_edge_index(a: &WinPolygon, b: &WinPolygon) -> Option<usize> {
        a.edges()
            .iter()
            .position(|ea| b.edges().iter().any(|eb| edges_overlap(ea, eb)))
    }

    pub fn is_polygon_connected(a: &WinPolygon, b: &WinPolygon) -> bool {
        Self::connected_edge_index(a, b).is_some()
    }
}

fn normalized_slope(edge: &Edge) -> f64 {
    let slope = (edge.end() - edge.start()).slope();
    if (slope - TAU).abs() < SLOPE_EPS {
        0.0
    } else {
        slope
    }
}

fn by_position(direction: Direction, a: Point, b: Point) -> std::cmp::Ordering {
    match direction {
        Direction::Up => b.y.total_cmp(&a.y),
        Direction::Down => a.y.total_cmp(&b.y),
        Direction::Left => a.x.total_cmp(&b.x),
        Direction::Right => b.x.total_cmp(&a.x),
    }
}

/// Straight edges lying on the same line and sharing more than a point.
fn edges_overlap(a: &Edge, b: &Edge) -> bool {
    let (Edge::Segment(sa), Edge::Segment(sb)) = (a, b) else {
        return false;
    };
    let len = sa.length();
    if len <= EPS_LEN || sb.length() <= EPS_LEN {
        return false;
    }
    if !on_line(sa.start, sa.end, sb.start) || !on_line(sa.start, sa.end, sb.end) {
        return false;
    }
    let dir = sa.tangent();
    let t0 = (sb.start - sa.start).dot(&dir);
    let t1 = (sb.end - sa.start).dot(&dir);
    let (lo, hi) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
    hi.min(len) - lo.max(0.0) > EPS_LEN
}

fn on_line(a: Point, b: Point, p: Point) -> bool {
    let d = (b - a).normalize();
    (p - a).cross(&d).abs() <= EPS_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly_id::PolyId;

    fn square() -> WinPolygon {
        WinPolygon::rectangle(PolyId::new(0), Point::new(0.0, 0.0), 10.0, 10.0).unwrap()
    }

    #[test]
    fn test_find_sides_of_rectangle() {
        let poly = square();
        let down = EdgeFinder::find_index(Direction::Down, &poly).unwrap();
        let edge = poly.edge(down).unwrap();
        assert_eq!(edge.start().y, -5.0);
        assert_eq!(edge.end().y, -5.0);

        let right = EdgeFinder::find_index(Direction::Right, &poly).unwrap();
        assert_eq!(poly.edge(right).unwrap().start().x, 5.0);

        let up = EdgeFinder::find_index(Direction::Up, &poly).unwrap();
        assert_eq!(poly.edge(up).unwrap().start().y, 5.0);

        let left = EdgeFinder::find_index(Direction::Left, &poly).unwrap();
        assert_eq!(poly.edge(left).unwrap().start().x, -5.0);
    }

    #[test]
    fn test_find_index2_swaps_vertical() {
        let poly = square();
        assert_eq!(
            EdgeFinder::find_index2(Direction::Up, &poly),
            EdgeFinder::find_index(Direction::Down, &poly)
        );
        assert_eq!(
            EdgeFinder::find_index2(Direction::Left, &poly),
            EdgeFinder::find_index(Direction::Left, &poly)
        );
    }

    #[test]
    fn test_find_direction_round_trip() {
        let poly = square();
        for d in Direction::ALL {
            let index = EdgeFinder::find_index(d, &poly).unwrap();
            assert_eq!(EdgeFinder::find_direction(&poly, index, false), Some(d));
            assert_eq!(
                EdgeFinder::find_direction(&poly, index, true),
                Some(d.invert_vertical())
            );
        }
    }

    #[test]
    fn test_tie_goes_to_outermost_edge() {
        // an L shape has two edges heading left along its top
        let poly = WinPolygon::from_points(
            PolyId::new(0),
            &[
                Point::new(0.0, 0.0),
                Point::new(20.0, 0.0),
                Point::new(20.0, 10.0),
                Point::new(10.0, 10.0),
                Point::new(10.0, 20.0),
                Point::new(0.0, 20.0),
            ],
        )
        .unwrap();
        let up = EdgeFinder::find_index(Direction::Up, &poly).unwrap();
        assert_eq!(poly.edge(up).unwrap().start().y, 20.0);
    }

    #[test]
    fn test_connected_polygons() {
        let a = square();
        let b = a.translate(fenestra_core::Vector::new(10.0, 0.0));
        let c = a.translate(fenestra_core::Vector::new(30.0, 0.0));
        let index = EdgeFinder::connected_edge_index(&a, &b).unwrap();
        assert_eq!(poly_side(&a, index), Some(Direction::Right));
        assert!(!EdgeFinder::is_polygon_connected(&a, &c));
    }

    fn poly_side(poly: &WinPolygon, index: usize) -> Option<Direction> {
        EdgeFinder::find_direction(poly, index, false)
    }

    #[test]
    fn test_opposites() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }
}
