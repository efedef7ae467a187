//! Axis aligned rectangular pane.

use fenestra_core::constants::EPS_LEN;
use fenestra_core::{Bounds, GeometryError, Point, ShapeError, Vector};
use serde::{Deserialize, Serialize};

use super::shape::{check_ratio, resize_interval, snapped_drag, DimType, ParametricShape};
use super::WinPolygon;
use crate::poly_id::PolyId;

/// Rectangle given by center and size.
///
/// Vertices run counter-clockwise from the bottom-left corner; edge `i`
/// starts at vertex `i`, so the edges are bottom, right, top, left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectanglePoly {
    pub id: PolyId,
    pub cpt: Point,
    pub width: f64,
    pub height: f64,
}

impl RectanglePoly {
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

    fn from_bounds(id: PolyId, b: Bounds) -> Result<Self, ShapeError> {
        if b.width() <= EPS_LEN || b.height() <= EPS_LEN {
            return Err(GeometryError::DegeneratePolygon { vertices: 4 }.into());
        }
        Self::new(id, b.center(), b.width(), b.height())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.cpt.x - self.width / 2.0,
            min_y: self.cpt.y - self.height / 2.0,
            max_x: self.cpt.x + self.width / 2.0,
            max_y: self.cpt.y + self.height / 2.0,
        }
    }

    pub fn vertices(&self) -> [Point; 4] {
        let b = self.bounds();
        [
            Point::new(b.min_x, b.min_y),
            Point::new(b.max_x, b.min_y),
            Point::new(b.max_x, b.max_y),
            Point::new(b.min_x, b.max_y),
        ]
    }
}

impl ParametricShape for RectanglePoly {
    const TYPE_NAME: &'static str = "Rectangle";

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

    fn drag_edge(
        &self,
        edge_index: usize,
        drag: Vector,
        snap: Option<Point>,
    ) -> Result<Self, ShapeError> {
        if edge_index > 3 {
            return Err(GeometryError::EdgeIndexOutOfRange {
                index: edge_index,
                count: 4,
            }
            .into());
        }
        let vs = self.vertices();
        let ends = [vs[edge_index], vs[(edge_index + 1) % 4]];
        let d = snapped_drag(&ends, drag, snap);
        let mut b = self.bounds();
        match edge_index {
            0 => b.min_y += d.y,
            1 => b.max_x += d.x,
            2 => b.max_y += d.y,
            _ => b.min_x += d.x,
        }
        Self::from_bounds(self.id.clone(), b)
    }

    /// Moves a corner. With symmetry the opposite sides move the other way
    /// so the center stays put.
    fn drag_vertex(
        &self,
        vertex_index: usize,
        drag: Vector,
        constrain_symmetry: bool,
        snap: Option<Point>,
    ) -> Result<Self, ShapeError> {
        let vs = self.vertices();
        let vertex = *vs
            .get(vertex_index)
            .ok_or(GeometryError::VertexIndexOutOfRange {
                index: vertex_index,
                count: 4,
            })?;
        let d = snapped_drag(&[vertex], drag, snap);
        let mut b = self.bounds();
        let (moves_max_x, moves_max_y) = match vertex_index {
            0 => (false, false),
            1 => (true, false),
            2 => (true, true),
            _ => (false, true),
        };

        if moves_max_x {
            b.max_x += d.x;
            if constrain_symmetry {
                b.min_x -= d.x;
            }
        } else {
            b.min_x += d.x;
            if constrain_symmetry {
                b.max_x -= d.x;
            }
        }
        if moves_max_y {
            b.max_y += d.y;
            if constrain_symmetry {
                b.min_y -= d.y;
            }
        } else {
            b.min_y += d.y;
            if constrain_symmetry {
                b.max_y -= d.y;
            }
        }
        Self::from_bounds(self.id.clone(), b)
    }

    fn edit_dim(&self, dim_type: i32, ratio: f64, adjust: Vector) -> Result<Self, ShapeError> {
        let dim = DimType::try_from(dim_type)?;
        check_ratio(ratio)?;
        let mut b = self.bounds();
        match dim {
            DimType::Height => {
                (b.min_y, b.max_y) = resize_interval(b.min_y, b.max_y, ratio, adjust.y);
            }
            DimType::Width => {
                (b.min_x, b.max_x) = resize_interval(b.min_x, b.max_x, ratio, adjust.x);
            }
        }
        Self::from_bounds(self.id.clone(), b)
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

    fn pane() -> RectanglePoly {
        RectanglePoly::new(PolyId::new(1), Point::new(0.0, 0.0), 100.0, 200.0).unwrap()
    }

    #[test]
    fn test_drag_right_edge() {
        let r = pane().drag_edge(1, Vector::new(20.0, 7.0), None).unwrap();
        assert_eq!(r.width, 120.0);
        assert_eq!(r.height, 200.0);
        assert_eq!(r.bounds().min_x, -50.0);
    }

    #[test]
    fn test_symmetric_corner_keeps_center() {
        let r = pane()
            .drag_vertex(2, Vector::new(10.0, 10.0), true, None)
            .unwrap();
        assert_eq!(r.cpt, Point::new(0.0, 0.0));
        assert_eq!(r.width, 120.0);
        assert_eq!(r.height, 220.0);
    }

    #[test]
    fn test_collapse_is_error() {
        assert!(pane().drag_edge(3, Vector::new(100.0, 0.0), None).is_err());
    }

    #[test]
    fn test_to_polygon_is_rectangle() {
        let poly = pane().to_polygon().unwrap();
        assert!(poly.is_rectangle());
        assert!((poly.area() - 20_000.0).abs() < 1e-9);
    }
}
