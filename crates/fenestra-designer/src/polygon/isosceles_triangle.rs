//! Isosceles triangle pane, such as a gable.

use fenestra_core::constants::EPS_LEN;
use fenestra_core::{Bounds, GeometryError, Point, ShapeError, Vector};
use serde::{Deserialize, Serialize};

use super::shape::{check_ratio, resize_interval, snapped_drag, DimType, ParametricShape};
use super::WinPolygon;
use crate::poly_id::PolyId;

/// Triangle with its apex on the vertical axis through `cpt`.
///
/// Vertices are numbered apex (0), base-left (1), base-right (2). Edge 0
/// runs apex to base-left, edge 1 is the base and edge 2 closes back to the
/// apex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsoscelesTrianglePoly {
    pub id: PolyId,
    pub cpt: Point,
    pub width: f64,
    pub height: f64,
}

impl IsoscelesTrianglePoly {
    pub fn new(id: PolyId, cpt: Point, width: f64, height: f64) -> Result<Self, ShapeError> {
        if !(width > EPS_LEN && height > EPS_LEN) {
            return Err(ShapeError::InvalidParameter {
                name: "size".to_string(),
                reason: format!("{} x {} is degenerate", width, height),
            });
        }
        Ok(Self {
            id,
            cpt,
            width,
            height,
        })
    }

    /// Rebuilds the triangle from three moved vertices using their bounding box.
    pub fn compute(id: PolyId, vertices: &[Point; 3]) -> Result<Self, ShapeError> {
        let b = Bounds::from_points(vertices.iter())
            .ok_or(GeometryError::DegeneratePolygon { vertices: 0 })?;
        if b.width() <= EPS_LEN || b.height() <= EPS_LEN {
            return Err(GeometryError::DegeneratePolygon { vertices: 3 }.into());
        }
        Self::new(id, b.center(), b.width(), b.height())
    }

    pub fn apex(&self) -> Point {
        Point::new(self.cpt.x, self.cpt.y + self.height / 2.0)
    }

    pub fn base_left(&self) -> Point {
        Point::new(self.cpt.x - self.width / 2.0, self.cpt.y - self.height / 2.0)
    }

    pub fn base_right(&self) -> Point {
        Point::new(self.cpt.x + self.width / 2.0, self.cpt.y - self.height / 2.0)
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.apex(), self.base_left(), self.base_right()]
    }

    fn edge_out_of_range(index: usize) -> ShapeError {
        GeometryError::EdgeIndexOutOfRange { index, count: 3 }.into()
    }
}

impl ParametricShape for IsoscelesTrianglePoly {
    const TYPE_NAME: &'static str = "IsoscelesTriangle";

    fn id(&self) -> &PolyId {
        &self.id
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn center(&self) -> Point {
        self.cpt
    }

    fn to_polygon(&self) -> Result<WinPolygon, GeometryError> {
        WinPolygon::from_points(self.id.clone(), &self.vertices())
    }

    /// The base moves vertically and a leg moves its base vertex sideways.
    fn drag_edge(
        &self,
        edge_index: usize,
        drag: Vector,
        snap: Option<Point>,
    ) -> Result<Self, ShapeError> {
        let mut vs = self.vertices();
        match edge_index {
            0 => {
                let d = snapped_drag(&vs[1..2], drag, snap);
                vs[1].x += d.x;
            }
            1 => {
                let d = snapped_drag(&vs[1..3], drag, snap);
                vs[1].y += d.y;
                vs[2].y += d.y;
            }
            2 => {
                let d = snapped_drag(&vs[2..3], drag, snap);
                vs[2].x += d.x;
            }
            other => return Err(Self::edge_out_of_range(other)),
        }
        Self::compute(self.id.clone(), &vs)
    }

    fn drag_vertex(
        &self,
        vertex_index: usize,
        drag: Vector,
        constrain_symmetry: bool,
        snap: Option<Point>,
    ) -> Result<Self, ShapeError> {
        let mut vs = self.vertices();
        let vertex = *vs
            .get(vertex_index)
            .ok_or(GeometryError::VertexIndexOutOfRange {
                index: vertex_index,
                count: 3,
            })?;
        let d = snapped_drag(&[vertex], drag, snap);

        if !constrain_symmetry {
            vs[vertex_index] = vertex + d;
            return Self::compute(self.id.clone(), &vs);
        }

        match vertex_index {
            0 => vs[0].y += d.y,
            _ => {
                let other = if vertex_index == 1 { 2 } else { 1 };
                vs[vertex_index] = vertex + d;
                vs[other] = vs[other] + Vector::new(-d.x, d.y);
            }
        }
        Self::compute(self.id.clone(), &vs)
    }

    fn edit_dim(&self, dim_type: i32, ratio: f64, adjust: Vector) -> Result<Self, ShapeError> {
        let dim = DimType::try_from(dim_type)?;
        check_ratio(ratio)?;
        let mut next = self.clone();
        match dim {
            DimType::Height => {
                let half = self.height / 2.0;
                let (lo, hi) = resize_interval(self.cpt.y - half, self.cpt.y + half, ratio, adjust.y);
                next.cpt.y = (lo + hi) / 2.0;
                next.height = hi - lo;
            }
            DimType::Width => {
                let half = self.width / 2.0;
                let (lo, hi) = resize_interval(self.cpt.x - half, self.cpt.x + half, ratio, adjust.x);
                next.cpt.x = (lo + hi) / 2.0;
                next.width = hi - lo;
            }
        }
        Self::new(next.id, next.cpt, next.width, next.height)
    }

    fn translate(&self, v: Vector) -> Self {
        Self {
            cpt: self.cpt + v,
            ..self.clone()
        }
    }

    fn scale(&self, factor: f64) -> Result<Self, ShapeError> {
        check_ratio(factor)?;
        Self::new(
            self.id.clone(),
            self.cpt,
            self.width * factor,
            self.height * factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gable() -> IsoscelesTrianglePoly {
        IsoscelesTrianglePoly::new(PolyId::new(0), Point::new(0.0, 0.0), 100.0, 60.0).unwrap()
    }

    #[test]
    fn test_vertices() {
        let t = gable();
        assert_eq!(t.apex(), Point::new(0.0, 30.0));
        assert_eq!(t.base_left(), Point::new(-50.0, -30.0));
        assert_eq!(t.base_right(), Point::new(50.0, -30.0));
        let poly = t.to_polygon().unwrap();
        assert!((poly.area() - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_base_down() {
        let t = gable();
        let moved = t.drag_edge(1, Vector::new(0.0, -10.0), None).unwrap();
        assert_eq!(moved.height, 70.0);
        assert_eq!(moved.width, 100.0);
        assert_eq!(moved.apex(), t.apex());
        // the original is untouched
        assert_eq!(t.height, 60.0);
    }

    #[test]
    fn test_drag_base_snaps() {
        let t = gable();
        let moved = t
            .drag_edge(1, Vector::new(0.0, -9.0), Some(Point::new(50.0, -40.0)))
            .unwrap();
        assert!((moved.base_right().y + 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_edge_out_of_range() {
        let err = gable().drag_edge(3, Vector::new(1.0, 0.0), None).unwrap_err();
        assert_eq!(
            err,
            ShapeError::Geometry(GeometryError::EdgeIndexOutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn test_symmetric_vertex_drag() {
        let t = gable();
        let moved = t
            .drag_vertex(2, Vector::new(10.0, -5.0), true, None)
            .unwrap();
        assert_eq!(moved.width, 120.0);
        assert_eq!(moved.height, 65.0);
        assert_eq!(moved.cpt.x, 0.0);
    }

    #[test]
    fn test_apex_moves_vertically_with_symmetry() {
        let moved = gable()
            .drag_vertex(0, Vector::new(25.0, 10.0), true, None)
            .unwrap();
        assert_eq!(moved.apex(), Point::new(0.0, 40.0));
        assert_eq!(moved.base_left(), Point::new(-50.0, -30.0));
    }

    #[test]
    fn test_edit_dim_rejects_unknown_dimension() {
        let err = gable().edit_dim(1, 2.0, Vector::new(0.0, 0.0)).unwrap_err();
        assert_eq!(err, ShapeError::UnsupportedDimension { dim_type: 1 });
    }

    #[test]
    fn test_edit_dim_anchor() {
        let t = gable();
        let wider = t.edit_dim(2, 1.5, Vector::new(1.0, 0.0)).unwrap();
        assert_eq!(wider.base_left().x, -50.0);
        assert_eq!(wider.width, 150.0);

        let centered = t.edit_dim(2, 0.5, Vector::new(0.0, 0.0)).unwrap();
        assert_eq!(centered.cpt, t.cpt);
        assert_eq!(centered.width, 50.0);
    }

    #[test]
    fn test_height_to_keeps_base() {
        let t = gable();
        let taller = t.height_to(90.0).unwrap();
        assert!((taller.height - 90.0).abs() < 1e-9);
        assert!((taller.base_left().y + 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_rejected() {
        assert!(gable().scale(0.0).is_err());
        assert!(gable().edit_dim(0, -1.0, Vector::new(0.0, 0.0)).is_err());
    }
}
