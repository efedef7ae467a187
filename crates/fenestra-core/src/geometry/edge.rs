use serde::{Deserialize, Serialize};

use super::{Arc, Point, Segment, Vector};

/// One boundary edge of a polygon loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Edge {
    Segment(Segment),
    Arc(Arc),
}

impl Edge {
    pub fn start(&self) -> Point {
        match self {
            Edge::Segment(s) => s.start,
            Edge::Arc(a) => a.start(),
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Edge::Segment(s) => s.end,
            Edge::Arc(a) => a.end(),
        }
    }

    pub fn length(&self) -> f64 {
        match self {
            Edge::Segment(s) => s.length(),
            Edge::Arc(a) => a.length(),
        }
    }

    pub fn midpoint(&self) -> Point {
        self.point_at(0.5)
    }

    pub fn point_at(&self, t: f64) -> Point {
        match self {
            Edge::Segment(s) => s.point_at(t),
            Edge::Arc(a) => a.point_at(t),
        }
    }

    /// Unit tangent in the direction of travel at parameter `t`.
    pub fn tangent_at(&self, t: f64) -> Vector {
        match self {
            Edge::Segment(s) => s.tangent(),
            Edge::Arc(a) => a.tangent_at(t),
        }
    }

    /// Polyline bulge of the edge (zero for straight edges).
    pub fn bulge(&self) -> f64 {
        match self {
            Edge::Segment(_) => 0.0,
            Edge::Arc(a) => a.bulge(),
        }
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, Edge::Arc(_))
    }

    pub fn reverse(&self) -> Edge {
        match self {
            Edge::Segment(s) => Edge::Segment(s.reverse()),
            Edge::Arc(a) => Edge::Arc(a.reverse()),
        }
    }

    pub fn translate(&self, v: Vector) -> Edge {
        match self {
            Edge::Segment(s) => Edge::Segment(s.translate(v)),
            Edge::Arc(a) => Edge::Arc(a.translate(v)),
        }
    }

    pub fn rotate(&self, angle: f64, center: Point) -> Edge {
        match self {
            Edge::Segment(s) => Edge::Segment(s.rotate(angle, center)),
            Edge::Arc(a) => Edge::Arc(a.rotate(angle, center)),
        }
    }

    pub fn scale(&self, factor: f64, center: Point) -> Edge {
        match self {
            Edge::Segment(s) => Edge::Segment(s.scale(factor, center)),
            Edge::Arc(a) => Edge::Arc(a.scale(factor, center)),
        }
    }

    /// Straight chord between the edge endpoints.
    pub fn chord(&self) -> Segment {
        Segment::new(self.start(), self.end())
    }
}

impl From<Segment> for Edge {
    fn from(s: Segment) -> Self {
        Edge::Segment(s)
    }
}

impl From<Arc> for Edge {
    fn from(a: Arc) -> Self {
        Edge::Arc(a)
    }
}
