//! Window polygons.
//!
//! [`WinPolygon`] is one planar region of a frame or sash: a closed,
//! counter-clockwise loop of segments and arcs tagged with a [`PolyId`].
//! All transforms return a new polygon and leave the receiver untouched.
//! Area, containment and insetting go through `cavalier_contours`.

pub mod isosceles_triangle;
pub mod rectangle;
pub mod shape;

use cavalier_contours::core::math::Vector2;
use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use fenestra_core::constants::{EPS_AREA, EPS_LEN};
use fenestra_core::{Arc, Bounds, Edge, GeometryError, Line, Point, Segment, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::poly_id::PolyId;

pub use isosceles_triangle::IsoscelesTrianglePoly;
pub use rectangle::RectanglePoly;
pub use shape::{DimType, ParametricShape, PolyShape};

type EdgeList = SmallVec<[Edge; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Ccw,
    Cw,
}

#[derive(Serialize, Deserialize)]
struct PolygonData {
    id: PolyId,
    edges: Vec<Edge>,
}

/// A closed loop of edges identified by a [`PolyId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonData", into = "PolygonData")]
pub struct WinPolygon {
    pub id: PolyId,
    edges: EdgeList,
}

impl TryFrom<PolygonData> for WinPolygon {
    type Error = GeometryError;

    fn try_from(data: PolygonData) -> Result<Self, Self::Error> {
        WinPolygon::new(data.id, data.edges)
    }
}

impl From<WinPolygon> for PolygonData {
    fn from(poly: WinPolygon) -> Self {
        PolygonData {
            id: poly.id,
            edges: poly.edges.into_vec(),
        }
    }
}

impl WinPolygon {
    /// Builds a polygon from a closed edge loop, reordering it counter-clockwise.
    pub fn new(id: PolyId, edges: impl IntoIterator<Item = Edge>) -> Result<Self, GeometryError> {
        let edges: EdgeList = edges.into_iter().collect();
        let straight = edges.iter().all(|e| !e.is_arc());
        if edges.len() < 2 || (straight && edges.len() < 3) {
            return Err(GeometryError::DegeneratePolygon {
                vertices: edges.len(),
            });
        }
        for (index, edge) in edges.iter().enumerate() {
            let next = &edges[(index + 1) % edges.len()];
            if !edge.end().equal_to(&next.start()) {
                return Err(GeometryError::NotClosed { index });
            }
        }

        let mut poly = Self { id, edges };
        let area = poly.signed_area();
        if area.abs() <= EPS_AREA {
            return Err(GeometryError::DegeneratePolygon {
                vertices: poly.edges.len(),
            });
        }
        if area < 0.0 {
            poly.edges = poly.edges.iter().rev().map(Edge::reverse).collect();
        }
        Ok(poly)
    }

    pub fn from_points(id: PolyId, points: &[Point]) -> Result<Self, GeometryError> {
        let n = points.len();
        Self::new(
            id,
            (0..n).map(|i| Edge::Segment(Segment::new(points[i], points[(i + 1) % n]))),
        )
    }

    /// Builds a polygon from polyline vertices; each bulge describes the edge
    /// leaving that vertex.
    pub fn from_bulge_vertices(id: PolyId, vertices: &[(Point, f64)]) -> Result<Self, GeometryError> {
        let n = vertices.len();
        Self::new(
            id,
            (0..n).map(|i| {
                let (start, bulge) = vertices[i];
                let end = vertices[(i + 1) % n].0;
                match Arc::from_bulge(start, end, bulge) {
                    Some(arc) => Edge::Arc(arc),
                    None => Edge::Segment(Segment::new(start, end)),
                }
            }),
        )
    }

    /// Axis-aligned rectangle centered on `center`.
    pub fn rectangle(id: PolyId, center: Point, width: f64, height: f64) -> Result<Self, GeometryError> {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::from_points(
            id,
            &[
                Point::new(center.x - hw, center.y - hh),
                Point::new(center.x + hw, center.y - hh),
                Point::new(center.x + hw, center.y + hh),
                Point::new(center.x - hw, center.y + hh),
            ],
        )
    }

    pub fn from_polyline(id: PolyId, pline: &Polyline<f64>) -> Result<Self, GeometryError> {
        let vertices: Vec<(Point, f64)> = pline
            .vertex_data
            .iter()
            .map(|v| (Point::new(v.x, v.y), v.bulge))
            .collect();
        Self::from_bulge_vertices(id, &vertices)
    }

    pub fn to_polyline(&self) -> Polyline<f64> {
        let mut pline = Polyline::new();
        for edge in &self.edges {
            let p = edge.start();
            pline.add_vertex(PlineVertex::new(p.x, p.y, edge.bulge()));
        }
        pline.set_is_closed(true);
        pline
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn find_edge_index(&self, edge: &Edge) -> Option<usize> {
        self.edges.iter().position(|e| e == edge)
    }

    pub fn vertices(&self) -> Vec<Point> {
        self.edges.iter().map(Edge::start).collect()
    }

    pub fn vertices_with_bulge(&self) -> Vec<(Point, f64)> {
        self.edges.iter().map(|e| (e.start(), e.bulge())).collect()
    }

    pub fn with_id(&self, id: PolyId) -> WinPolygon {
        WinPolygon {
            id,
            edges: self.edges.clone(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        let mut points = self.vertices();
        for edge in &self.edges {
            if let Edge::Arc(arc) = edge {
                points.extend(arc_extremes(arc));
            }
        }
        // a valid polygon always has vertices
        Bounds::from_points(&points).unwrap_or(Bounds::new(0.0, 0.0, 0.0, 0.0))
    }

    pub fn width(&self) -> f64 {
        self.bounds().width()
    }

    pub fn height(&self) -> f64 {
        self.bounds().height()
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    pub fn signed_area(&self) -> f64 {
        self.to_polyline().area()
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn orientation(&self) -> Orientation {
        if self.signed_area() >= 0.0 {
            Orientation::Ccw
        } else {
            Orientation::Cw
        }
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.to_polyline().winding_number(Vector2::new(p.x, p.y)) != 0
    }

    pub fn is_rectangle(&self) -> bool {
        if self.edges.len() != 4 || self.edges.iter().any(Edge::is_arc) {
            return false;
        }
        (0..4).all(|i| {
            let a = self.edges[i].tangent_at(0.0);
            let b = self.edges[(i + 1) % 4].tangent_at(0.0);
            a.dot(&b).abs() <= 1e-9
        })
    }

    pub fn translate(&self, v: Vector) -> WinPolygon {
        self.map_edges(|e| e.translate(v))
    }

    pub fn rotate(&self, angle: f64, center: Point) -> WinPolygon {
        self.map_edges(|e| e.rotate(angle, center))
    }

    /// Uniform scale about `center`; `factor` must be positive.
    pub fn scale(&self, factor: f64, center: Point) -> WinPolygon {
        self.map_edges(|e| e.scale(factor, center))
    }

    fn map_edges(&self, f: impl Fn(&Edge) -> Edge) -> WinPolygon {
        WinPolygon {
            id: self.id.clone(),
            edges: self.edges.iter().map(f).collect(),
        }
    }

    /// Mirror image across the x axis.
    pub fn flip_y(&self) -> WinPolygon {
        self.mirror_vertical(0.0)
    }

    /// Mirror image across the horizontal line `y = axis_y`.
    pub fn mirror_vertical(&self, axis_y: f64) -> WinPolygon {
        self.mirror_with(|p| Point::new(p.x, 2.0 * axis_y - p.y))
    }

    /// Mirror image across the vertical line `x = axis_x`.
    pub fn mirror_horizontal(&self, axis_x: f64) -> WinPolygon {
        self.mirror_with(|p| Point::new(2.0 * axis_x - p.x, p.y))
    }

    fn mirror_with(&self, f: impl Fn(Point) -> Point) -> WinPolygon {
        // Mirroring reverses the winding; walk the loop backwards to keep it CCW.
        let src = self.vertices_with_bulge();
        let n = src.len();
        let mirrored: Vec<(Point, f64)> = (0..n)
            .map(|k| {
                let i = (n - k) % n;
                let bulge = src[(i + n - 1) % n].1;
                (f(src[i].0), bulge)
            })
            .collect();
        match Self::from_bulge_vertices(self.id.clone(), &mirrored) {
            Ok(poly) => poly,
            Err(_) => self.clone(),
        }
    }

    /// Shrinks the polygon by `distance`. `None` when nothing is left.
    pub fn inset(&self, distance: f64) -> Option<WinPolygon> {
        if distance.abs() <= EPS_LEN {
            return Some(self.clone());
        }
        self.to_polyline()
            .parallel_offset(distance)
            .into_iter()
            .filter(|pl| pl.area().abs() > EPS_AREA)
            .max_by(|a, b| a.area().abs().total_cmp(&b.area().abs()))
            .and_then(|pl| WinPolygon::from_polyline(self.id.clone(), &pl).ok())
    }

    /// Moves one vertex by `drag`.
    pub fn drag_vertex(&self, index: usize, drag: Vector) -> Result<WinPolygon, GeometryError> {
        let mut vertices = self.vertices_with_bulge();
        let count = vertices.len();
        let v = vertices
            .get_mut(index)
            .ok_or(GeometryError::VertexIndexOutOfRange { index, count })?;
        v.0 = v.0 + drag;
        Self::from_bulge_vertices(self.id.clone(), &vertices)
    }

    /// Moves both endpoints of one edge by `drag`.
    pub fn drag_edge(&self, index: usize, drag: Vector) -> Result<WinPolygon, GeometryError> {
        let mut vertices = self.vertices_with_bulge();
        let count = vertices.len();
        if index >= count {
            return Err(GeometryError::EdgeIndexOutOfRange { index, count });
        }
        vertices[index].0 = vertices[index].0 + drag;
        let next = (index + 1) % count;
        vertices[next].0 = vertices[next].0 + drag;
        Self::from_bulge_vertices(self.id.clone(), &vertices)
    }

    /// Bends edge `index` so that its midpoint follows `drag`. A straight
    /// edge becomes an arc; dragging an arc back onto its chord straightens it.
    pub fn drag_arc(&self, index: usize, drag: Vector) -> Result<WinPolygon, GeometryError> {
        let count = self.edges.len();
        let edge = self
            .edges
            .get(index)
            .ok_or(GeometryError::EdgeIndexOutOfRange { index, count })?;
        let chord = edge.chord();
        let c = chord.length();
        if c <= EPS_LEN {
            return Err(GeometryError::DegeneratePolygon { vertices: count });
        }
        let right = chord.tangent().rotate90_cw();
        let sagitta = (edge.midpoint() + drag - chord.midpoint()).dot(&right);
        let mut vertices = self.vertices_with_bulge();
        vertices[index].1 = 2.0 * sagitta / c;
        Self::from_bulge_vertices(self.id.clone(), &vertices)
    }

    /// Parameters along `edge` where it meets `line`.
    fn edge_hits(edge: &Edge, line: &Line) -> SmallVec<[f64; 2]> {
        let mut hits = SmallVec::new();
        match edge {
            Edge::Segment(s) => {
                let d = s.end - s.start;
                let denom = line.dir.cross(&d);
                if denom.abs() > f64::EPSILON {
                    let t = (line.pt - s.start).cross(&line.dir) / -denom;
                    if (-1e-9..=1.0 + 1e-9).contains(&t) {
                        hits.push(t.clamp(0.0, 1.0));
                    }
                }
            }
            Edge::Arc(a) => {
                let foot = line.pt + line.dir * (a.center - line.pt).dot(&line.dir);
                let dist = a.center.distance_to(&foot);
                if dist >= a.radius {
                    return hits;
                }
                let h = (a.radius * a.radius - dist * dist).sqrt();
                for p in [foot - line.dir * h, foot + line.dir * h] {
                    let angle = (p - a.center).slope();
                    let mut delta = if a.sweep > 0.0 {
                        (angle - a.start_angle).rem_euclid(TAU)
                    } else {
                        (a.start_angle - angle).rem_euclid(TAU)
                    };
                    if delta > TAU - 1e-9 {
                        delta = 0.0;
                    }
                    let t = delta / a.sweep.abs();
                    if t <= 1.0 + 1e-9 {
                        hits.push(t.min(1.0));
                    }
                }
            }
        }
        hits
    }

    /// Pieces of `line` that lie inside the polygon.
    pub fn clip_line(&self, line: &Line) -> Vec<Segment> {
        let mut ts: Vec<f64> = self
            .edges
            .iter()
            .flat_map(|e| {
                Self::edge_hits(e, line)
                    .into_iter()
                    .map(|t| (e.point_at(t) - line.pt).dot(&line.dir))
                    .collect::<SmallVec<[f64; 2]>>()
            })
            .collect();
        ts.sort_by(f64::total_cmp);
        ts.dedup_by(|a, b| (*a - *b).abs() <= EPS_LEN);

        ts.windows(2)
            .filter_map(|w| {
                let a = line.pt + line.dir * w[0];
                let b = line.pt + line.dir * w[1];
                if self.contains(&a.midpoint(&b)) {
                    Some(Segment::new(a, b))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Cuts the polygon in two along `line`. The piece left of the line gets
    /// `id.child(0)`, the other `id.child(1)`. `None` unless the line
    /// crosses the boundary at exactly two points.
    pub fn split_by_line(&self, line: &Line) -> Option<(WinPolygon, WinPolygon)> {
        let mut cuts: Vec<(usize, f64, Point)> = Vec::new();
        for (i, edge) in self.edges.iter().enumerate() {
            for t in Self::edge_hits(edge, line) {
                // a vertex hit is recorded once, as t = 0 of the next edge
                if t >= 1.0 - 1e-9 {
                    continue;
                }
                let p = edge.point_at(t);
                if !cuts.iter().any(|(_, _, q)| q.equal_to(&p)) {
                    cuts.push((i, t, p));
                }
            }
        }
        if cuts.len() != 2 {
            return None;
        }
        cuts.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
        let (a, b) = (cuts[0], cuts[1]);

        let first = WinPolygon::new(self.id.clone(), self.walk(a, b)).ok()?;
        let second = WinPolygon::new(self.id.clone(), self.walk(b, a)).ok()?;

        let left_of = |p: &WinPolygon| {
            let vs = p.vertices();
            let k = vs.len() as f64;
            let c = vs.iter().fold(Point::new(0.0, 0.0), |acc, v| {
                Point::new(acc.x + v.x / k, acc.y + v.y / k)
            });
            line.signed_distance(&c) > 0.0
        };
        let (left, right) = if left_of(&first) {
            (first, second)
        } else {
            (second, first)
        };
        Some((left.with_id(self.id.child(0)), right.with_id(self.id.child(1))))
    }

    /// Boundary from cut `from` to cut `to`, closed by the chord back to `from`.
    fn walk(&self, from: (usize, f64, Point), to: (usize, f64, Point)) -> Vec<Edge> {
        let n = self.edges.len();
        let mut out = Vec::new();
        if from.0 == to.0 && from.1 < to.1 {
            out.extend(sub_edge(&self.edges[from.0], from.1, to.1));
        } else {
            out.extend(sub_edge(&self.edges[from.0], from.1, 1.0));
            let mut i = (from.0 + 1) % n;
            while i != to.0 {
                out.push(self.edges[i]);
                i = (i + 1) % n;
            }
            out.extend(sub_edge(&self.edges[to.0], 0.0, to.1));
        }
        out.push(Edge::Segment(Segment::new(to.2, from.2)));
        out
    }
}

/// The part of `edge` between parameters `t0` and `t1`.
fn sub_edge(edge: &Edge, t0: f64, t1: f64) -> Option<Edge> {
    if t1 - t0 <= 1e-12 {
        return None;
    }
    let piece = match edge {
        Edge::Segment(s) => Edge::Segment(Segment::new(s.point_at(t0), s.point_at(t1))),
        Edge::Arc(a) => Edge::Arc(Arc::new(
            a.center,
            a.radius,
            a.start_angle + a.sweep * t0,
            a.sweep * (t1 - t0),
        )),
    };
    if piece.length() <= EPS_LEN {
        None
    } else {
        Some(piece)
    }
}

/// Axis-extreme points reached inside the sweep of `arc`.
fn arc_extremes(arc: &Arc) -> Vec<Point> {
    (0..4)
        .map(|k| k as f64 * FRAC_PI_2)
        .filter(|angle| {
            let delta = if arc.sweep > 0.0 {
                (angle - arc.start_angle).rem_euclid(TAU)
            } else {
                (arc.start_angle - angle).rem_euclid(TAU)
            };
            delta <= arc.sweep.abs()
        })
        .map(|angle| arc.point_at_angle(angle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> WinPolygon {
        WinPolygon::rectangle(PolyId::new(0), Point::new(0.0, 0.0), 10.0, 10.0).unwrap()
    }

    #[test]
    fn test_clockwise_input_is_normalized() {
        let cw = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let poly = WinPolygon::from_points(PolyId::new(0), &cw).unwrap();
        assert_eq!(poly.orientation(), Orientation::Ccw);
        assert!((poly.area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_open_loop_rejected() {
        let edges = vec![
            Edge::Segment(Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0))),
            Edge::Segment(Segment::new(Point::new(1.0, 0.0), Point::new(1.0, 1.0))),
            Edge::Segment(Segment::new(Point::new(1.0, 1.0), Point::new(0.5, 2.0))),
        ];
        assert_eq!(
            WinPolygon::new(PolyId::new(0), edges),
            Err(GeometryError::NotClosed { index: 2 })
        );
    }

    #[test]
    fn test_inset_square() {
        let inner = square().inset(2.0).unwrap();
        assert!((inner.width() - 6.0).abs() < 1e-9);
        assert!((inner.height() - 6.0).abs() < 1e-9);
        assert!(square().inset(6.0).is_none());
    }

    #[test]
    fn test_split_by_horizontal_line() {
        let (left, right) = square().split_by_line(&Line::horizontal(2.0)).unwrap();
        // direction +x: the upper piece is on the left
        assert!((left.bounds().min_y - 2.0).abs() < 1e-9);
        assert!((right.bounds().max_y - 2.0).abs() < 1e-9);
        assert_eq!(left.id, PolyId::with_pos(0, vec![0]));
        assert_eq!(right.id, PolyId::with_pos(0, vec![1]));
        assert!((left.area() + right.area() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_split_misses() {
        assert!(square().split_by_line(&Line::horizontal(20.0)).is_none());
    }

    #[test]
    fn test_drag_arc_bulges_edge() {
        // bottom edge runs +x; pulling its middle down bends it outward
        let bent = square().drag_arc(0, Vector::new(0.0, -5.0)).unwrap();
        assert!(bent.edge(0).unwrap().is_arc());
        assert!((bent.bounds().min_y + 10.0).abs() < 1e-9);
        assert!(bent.area() > 100.0);
    }

    #[test]
    fn test_clip_line() {
        let pieces = square().clip_line(&Line::vertical(1.0));
        assert_eq!(pieces.len(), 1);
        assert!((pieces[0].length() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_mirror_keeps_ccw() {
        let tri = WinPolygon::from_points(
            PolyId::new(1),
            &[Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)],
        )
        .unwrap();
        let flipped = tri.flip_y();
        assert_eq!(flipped.orientation(), Orientation::Ccw);
        assert!((flipped.bounds().min_y + 3.0).abs() < 1e-9);
        assert!((flipped.area() - 6.0).abs() < 1e-9);
    }
}
