//! Parametric shapes and the tagged union used to persist them.

use fenestra_core::constants::EPS_LEN;
use fenestra_core::event_bus::{AppEvent, ShapeEvent};
use fenestra_core::{Error, GeometryError, Point, ShapeError, Vector};
use serde::{Deserialize, Serialize};

use super::{IsoscelesTrianglePoly, RectanglePoly, WinPolygon};
use crate::host::View;
use crate::poly_id::PolyId;

/// Dimension a numeric edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimType {
    Height = 0,
    Width = 2,
}

impl TryFrom<i32> for DimType {
    type Error = ShapeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DimType::Height),
            2 => Ok(DimType::Width),
            other => Err(ShapeError::UnsupportedDimension { dim_type: other }),
        }
    }
}

/// New `(min, max)` of an interval resized by `ratio`. A positive `adjust`
/// moves the max side, a negative one the min side, zero keeps the middle.
pub(crate) fn resize_interval(min: f64, max: f64, ratio: f64, adjust: f64) -> (f64, f64) {
    let size = (max - min) * ratio;
    if adjust > EPS_LEN {
        (min, min + size)
    } else if adjust < -EPS_LEN {
        (max - size, max)
    } else {
        let mid = (min + max) / 2.0;
        (mid - size / 2.0, mid + size / 2.0)
    }
}

pub(crate) fn check_ratio(ratio: f64) -> Result<(), ShapeError> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidParameter {
            name: "ratio".to_string(),
            reason: format!("must be positive, got {}", ratio),
        })
    }
}

/// Drag vector that makes the moved point closest to `snap` land on it.
pub(crate) fn snapped_drag(moved: &[Point], drag: Vector, snap: Option<Point>) -> Vector {
    let Some(snap) = snap else {
        return drag;
    };
    moved
        .iter()
        .map(|p| *p + drag)
        .min_by(|a, b| a.distance_to(&snap).total_cmp(&b.distance_to(&snap)))
        .map(|nearest| drag + (snap - nearest))
        .unwrap_or(drag)
}

/// Editing surface shared by the parametric window shapes.
///
/// Every operation is pure: it returns a new shape and leaves `self` as it was.
pub trait ParametricShape: Sized {
    const TYPE_NAME: &'static str;

    fn id(&self) -> &PolyId;

    fn width(&self) -> f64;

    fn height(&self) -> f64;

    fn center(&self) -> Point;

    fn to_polygon(&self) -> Result<WinPolygon, GeometryError>;

    fn drag_edge(&self, edge_index: usize, drag: Vector, snap: Option<Point>)
        -> Result<Self, ShapeError>;

    fn drag_vertex(
        &self,
        vertex_index: usize,
        drag: Vector,
        constrain_symmetry: bool,
        snap: Option<Point>,
    ) -> Result<Self, ShapeError>;

    /// Resizes along `dim_type` (0 height, 2 width) by `ratio`; the sign of
    /// the matching `adjust` component picks the side that moves.
    fn edit_dim(&self, dim_type: i32, ratio: f64, adjust: Vector) -> Result<Self, ShapeError>;

    fn translate(&self, v: Vector) -> Self;

    fn scale(&self, factor: f64) -> Result<Self, ShapeError>;

    /// New height with the base kept in place.
    fn height_to(&self, height: f64) -> Result<Self, ShapeError> {
        let current = self.height();
        if current <= EPS_LEN {
            return Err(GeometryError::DegeneratePolygon { vertices: 0 }.into());
        }
        self.edit_dim(DimType::Height as i32, height / current, Vector::new(0.0, 1.0))
    }

    /// Asks the view to open the settings panel for this shape.
    fn raise_frame_event(&self, view: &dyn View) {
        if let Some(bus) = view.event_bus() {
            bus.notify(AppEvent::Shape(ShapeEvent::OpenSettings {
                view: view.id().to_string(),
                shape: Self::TYPE_NAME.to_string(),
            }));
        }
    }
}

/// Any polygon a frame or sash can be built from, tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PolyShape {
    IsoscelesTriangle(IsoscelesTrianglePoly),
    Rectangle(RectanglePoly),
    Polygon(WinPolygon),
}

const KNOWN_TYPES: [&str; 3] = ["IsoscelesTriangle", "Rectangle", "Polygon"];

impl PolyShape {
    pub fn type_name(&self) -> &'static str {
        match self {
            PolyShape::IsoscelesTriangle(_) => IsoscelesTrianglePoly::TYPE_NAME,
            PolyShape::Rectangle(_) => RectanglePoly::TYPE_NAME,
            PolyShape::Polygon(_) => "Polygon",
        }
    }

    pub fn id(&self) -> &PolyId {
        match self {
            PolyShape::IsoscelesTriangle(t) => t.id(),
            PolyShape::Rectangle(r) => r.id(),
            PolyShape::Polygon(p) => &p.id,
        }
    }

    pub fn polygon(&self) -> Result<WinPolygon, GeometryError> {
        match self {
            PolyShape::IsoscelesTriangle(t) => t.to_polygon(),
            PolyShape::Rectangle(r) => r.to_polygon(),
            PolyShape::Polygon(p) => Ok(p.clone()),
        }
    }

    pub fn drag_edge(
        &self,
        edge_index: usize,
        drag: Vector,
        snap: Option<Point>,
    ) -> Result<PolyShape, ShapeError> {
        Ok(match self {
            PolyShape::IsoscelesTriangle(t) => {
                PolyShape::IsoscelesTriangle(t.drag_edge(edge_index, drag, snap)?)
            }
            PolyShape::Rectangle(r) => PolyShape::Rectangle(r.drag_edge(edge_index, drag, snap)?),
            PolyShape::Polygon(p) => {
                let count = p.edge_count();
                if edge_index >= count {
                    return Err(GeometryError::EdgeIndexOutOfRange {
                        index: edge_index,
                        count,
                    }
                    .into());
                }
                let vs = p.vertices();
                let ends = [vs[edge_index], vs[(edge_index + 1) % count]];
                PolyShape::Polygon(p.drag_edge(edge_index, snapped_drag(&ends, drag, snap))?)
            }
        })
    }

    pub fn drag_vertex(
        &self,
        vertex_index: usize,
        drag: Vector,
        constrain_symmetry: bool,
        snap: Option<Point>,
    ) -> Result<PolyShape, ShapeError> {
        Ok(match self {
            PolyShape::IsoscelesTriangle(t) => PolyShape::IsoscelesTriangle(t.drag_vertex(
                vertex_index,
                drag,
                constrain_symmetry,
                snap,
            )?),
            PolyShape::Rectangle(r) => PolyShape::Rectangle(r.drag_vertex(
                vertex_index,
                drag,
                constrain_symmetry,
                snap,
            )?),
            PolyShape::Polygon(p) => {
                PolyShape::Polygon(drag_free_vertex(p, vertex_index, drag, constrain_symmetry, snap)?)
            }
        })
    }

    pub fn edit_dim(&self, dim_type: i32, ratio: f64, adjust: Vector) -> Result<PolyShape, ShapeError> {
        Ok(match self {
            PolyShape::IsoscelesTriangle(t) => {
                PolyShape::IsoscelesTriangle(t.edit_dim(dim_type, ratio, adjust)?)
            }
            PolyShape::Rectangle(r) => PolyShape::Rectangle(r.edit_dim(dim_type, ratio, adjust)?),
            PolyShape::Polygon(p) => {
                let dim = DimType::try_from(dim_type)?;
                check_ratio(ratio)?;
                let b = p.bounds();
                let moved: Vec<(Point, f64)> = match dim {
                    DimType::Height => {
                        let (lo, hi) = resize_interval(b.min_y, b.max_y, ratio, adjust.y);
                        let k = (hi - lo) / b.height();
                        p.vertices_with_bulge()
                            .into_iter()
                            .map(|(v, bulge)| (Point::new(v.x, lo + (v.y - b.min_y) * k), bulge))
                            .collect()
                    }
                    DimType::Width => {
                        let (lo, hi) = resize_interval(b.min_x, b.max_x, ratio, adjust.x);
                        let k = (hi - lo) / b.width();
                        p.vertices_with_bulge()
                            .into_iter()
                            .map(|(v, bulge)| (Point::new(lo + (v.x - b.min_x) * k, v.y), bulge))
                            .collect()
                    }
                };
                PolyShape::Polygon(WinPolygon::from_bulge_vertices(p.id.clone(), &moved)?)
            }
        })
    }

    pub fn translate(&self, v: Vector) -> PolyShape {
        match self {
            PolyShape::IsoscelesTriangle(t) => PolyShape::IsoscelesTriangle(t.translate(v)),
            PolyShape::Rectangle(r) => PolyShape::Rectangle(r.translate(v)),
            PolyShape::Polygon(p) => PolyShape::Polygon(p.translate(v)),
        }
    }

    pub fn scale(&self, factor: f64) -> Result<PolyShape, ShapeError> {
        Ok(match self {
            PolyShape::IsoscelesTriangle(t) => PolyShape::IsoscelesTriangle(t.scale(factor)?),
            PolyShape::Rectangle(r) => PolyShape::Rectangle(r.scale(factor)?),
            PolyShape::Polygon(p) => {
                check_ratio(factor)?;
                PolyShape::Polygon(p.scale(factor, p.center()))
            }
        })
    }

    pub fn to_json(&self) -> Result<serde_json::Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json(value: &serde_json::Value) -> Result<PolyShape, Error> {
        let type_name = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        if !KNOWN_TYPES.contains(&type_name) {
            return Err(ShapeError::UnknownShapeType {
                type_name: type_name.to_string(),
            }
            .into());
        }
        Ok(serde_json::from_value(value.clone())?)
    }
}

/// Vertex drag on a free-form polygon. With symmetry, the vertex mirrored
/// about the vertical center line follows with the horizontal part reversed.
fn drag_free_vertex(
    poly: &WinPolygon,
    index: usize,
    drag: Vector,
    constrain_symmetry: bool,
    snap: Option<Point>,
) -> Result<WinPolygon, ShapeError> {
    let vs = poly.vertices();
    let count = vs.len();
    let vertex = *vs
        .get(index)
        .ok_or(GeometryError::VertexIndexOutOfRange { index, count })?;
    let drag = snapped_drag(&[vertex], drag, snap);
    if !constrain_symmetry {
        return Ok(poly.drag_vertex(index, drag)?);
    }

    let axis = poly.center().x;
    let mirror = Point::new(2.0 * axis - vertex.x, vertex.y);
    let partner = vs
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .find(|(_, p)| p.distance_to(&mirror) <= 1e-6)
        .map(|(j, _)| j);

    let moved = poly.drag_vertex(index, drag)?;
    match partner {
        Some(j) => Ok(moved.drag_vertex(j, Vector::new(-drag.x, drag.y))?),
        None => Ok(moved),
    }
}
