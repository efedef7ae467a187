//! User placed dimensions that follow frame geometry.
//!
//! An [`ExtraDim`] measures between a start and an end point. Either end may
//! be pinned to a point on a frame edge through a [`FrameRelation`]; pinned
//! ends are recomputed from the frame whenever its polygon changes.

use fenestra_core::{Error, Point, Segment, Vector};
use serde::{Deserialize, Serialize};

use crate::host::{Frame, Host};

/// Axis the dimension measures along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimKind {
    #[default]
    Aligned,
    Horizontal,
    Vertical,
}

/// Which end of the dimension a relation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimEnd {
    Start,
    End,
}

/// Pins one end of a dimension to `ratio` along edge `edge_index` of a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRelation {
    pub frame_id: String,
    pub edge_index: usize,
    pub ratio: f64,
    pub end: DimEnd,
}

/// Saved as `{ st, et, ov, dt, fr, name }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraDim {
    pub st: Point,
    pub et: Point,
    /// Offset of the dimension line from the measured points.
    pub ov: Vector,
    pub dt: DimKind,
    pub fr: Vec<FrameRelation>,
    pub name: String,
    #[serde(skip)]
    shapes: Vec<Segment>,
    #[serde(skip)]
    recycled: bool,
}

impl ExtraDim {
    pub fn new(name: impl Into<String>, st: Point, et: Point, ov: Vector, dt: DimKind) -> Self {
        let mut dim = Self {
            st,
            et,
            ov,
            dt,
            fr: Vec::new(),
            name: name.into(),
            shapes: Vec::new(),
            recycled: false,
        };
        dim.draw();
        dim
    }

    pub fn with_relation(mut self, relation: FrameRelation) -> Self {
        self.fr.push(relation);
        self
    }

    /// Measured length along the dimension's axis.
    pub fn value(&self) -> f64 {
        match self.dt {
            DimKind::Aligned => self.st.distance_to(&self.et),
            DimKind::Horizontal => (self.et.x - self.st.x).abs(),
            DimKind::Vertical => (self.et.y - self.st.y).abs(),
        }
    }

    /// Dimension line plus the two extension lines.
    pub fn shapes(&self) -> &[Segment] {
        &self.shapes
    }

    pub fn is_recycled(&self) -> bool {
        self.recycled
    }

    fn draw(&mut self) {
        let (a, b) = (self.st + self.ov, self.et + self.ov);
        self.shapes = vec![
            Segment::new(a, b),
            Segment::new(self.st, a),
            Segment::new(self.et, b),
        ];
    }

    /// Recomputes pinned ends from `frames`. Returns false when a relation
    /// points at a missing frame or edge; that end keeps its last position.
    pub fn update_pt_from_relation(&mut self, frames: &[Frame]) -> bool {
        let mut resolved = true;
        for relation in &self.fr {
            let pt = frames
                .iter()
                .find(|f| f.id() == relation.frame_id)
                .and_then(|f| f.polygon().edge(relation.edge_index))
                .map(|edge| edge.point_at(relation.ratio));
            match (pt, relation.end) {
                (Some(p), DimEnd::Start) => self.st = p,
                (Some(p), DimEnd::End) => self.et = p,
                (None, _) => {
                    tracing::debug!(
                        "Dimension {} lost frame {} edge {}",
                        self.name,
                        relation.frame_id,
                        relation.edge_index
                    );
                    resolved = false;
                }
            }
        }
        if !self.recycled {
            self.draw();
        }
        resolved
    }

    /// Detaches the visuals; the dimension can be drawn again later.
    pub fn recycle(&mut self) {
        self.shapes.clear();
        self.recycled = true;
    }

    pub fn translate(&mut self, offset: Vector) {
        self.st = self.st + offset;
        self.et = self.et + offset;
        if !self.recycled {
            self.draw();
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json(value: &serde_json::Value) -> Result<ExtraDim, Error> {
        let mut dim: ExtraDim = serde_json::from_value(value.clone())?;
        dim.draw();
        Ok(dim)
    }
}

/// Extra dimensions of one view, by name.
#[derive(Debug, Clone, Default)]
pub struct ExtraDimManager {
    dims: Vec<ExtraDim>,
}

impl ExtraDimManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, dim: ExtraDim) {
        self.dims.retain(|d| d.name != dim.name);
        self.dims.push(dim);
    }

    pub fn get(&self, name: &str) -> Option<&ExtraDim> {
        self.dims.iter().find(|d| d.name == name)
    }

    pub fn dims(&self) -> &[ExtraDim] {
        &self.dims
    }

    /// Recycles and drops the named dimension.
    pub fn delete(&mut self, name: &str) -> Option<ExtraDim> {
        let index = self.dims.iter().position(|d| d.name == name)?;
        let mut dim = self.dims.remove(index);
        dim.recycle();
        Some(dim)
    }

    /// Refreshes every dimension after frame geometry changed.
    pub fn update_from_frames(&mut self, frames: &[Frame]) {
        for dim in &mut self.dims {
            dim.update_pt_from_relation(frames);
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, Error> {
        Ok(serde_json::to_value(&self.dims)?)
    }

    pub fn deserialize(&mut self, value: &serde_json::Value) -> Result<(), Error> {
        let raw: Vec<serde_json::Value> = serde_json::from_value(value.clone())?;
        self.dims = raw
            .iter()
            .map(ExtraDim::from_json)
            .collect::<Result<_, _>>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_by_kind() {
        let st = Point::new(0.0, 0.0);
        let et = Point::new(30.0, 40.0);
        let ov = Vector::new(0.0, -10.0);
        assert_eq!(ExtraDim::new("a", st, et, ov, DimKind::Aligned).value(), 50.0);
        assert_eq!(ExtraDim::new("h", st, et, ov, DimKind::Horizontal).value(), 30.0);
        assert_eq!(ExtraDim::new("v", st, et, ov, DimKind::Vertical).value(), 40.0);
    }

    #[test]
    fn test_json_field_names() {
        let dim = ExtraDim::new(
            "w",
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Vector::new(0.0, 5.0),
            DimKind::Horizontal,
        );
        let json = dim.to_json().unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["st", "et", "ov", "dt", "fr", "name"] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(keys.len(), 6);

        let back = ExtraDim::from_json(&json).unwrap();
        assert_eq!(back.shapes().len(), 3);
        assert_eq!(back.st, dim.st);
    }

    #[test]
    fn test_recycle_and_delete() {
        let mut manager = ExtraDimManager::new();
        manager.add(ExtraDim::new(
            "w",
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Vector::new(0.0, 5.0),
            DimKind::Aligned,
        ));
        let removed = manager.delete("w").unwrap();
        assert!(removed.is_recycled());
        assert!(removed.shapes().is_empty());
        assert!(manager.get("w").is_none());
        assert!(manager.delete("w").is_none());
    }
}
