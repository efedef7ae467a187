use serde::{Deserialize, Serialize};

use super::{Point, Vector};
use crate::constants::{EPS_ANG, EPS_LEN};

/// An infinite line through `pt` along the unit direction `dir`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub pt: Point,
    pub dir: Vector,
}

impl Line {
    pub fn new(pt: Point, dir: Vector) -> Self {
        Self {
            pt,
            dir: dir.normalize(),
        }
    }

    pub fn through(a: Point, b: Point) -> Self {
        Self::new(a, b - a)
    }

    pub fn horizontal(y: f64) -> Self {
        Self::new(Point::new(0.0, y), Vector::new(1.0, 0.0))
    }

    pub fn vertical(x: f64) -> Self {
        Self::new(Point::new(x, 0.0), Vector::new(0.0, 1.0))
    }

    pub fn is_horizontal(&self) -> bool {
        self.dir.y.abs() <= EPS_ANG
    }

    pub fn is_vertical(&self) -> bool {
        self.dir.x.abs() <= EPS_ANG
    }

    pub fn normal(&self) -> Vector {
        self.dir.rotate90_ccw()
    }

    /// Signed distance of `p` from the line; positive on the left of `dir`.
    pub fn signed_distance(&self, p: &Point) -> f64 {
        (*p - self.pt).dot(&self.normal())
    }

    pub fn distance_to(&self, p: &Point) -> f64 {
        self.signed_distance(p).abs()
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.distance_to(p) <= EPS_LEN
    }

    pub fn is_parallel(&self, other: &Line) -> bool {
        self.dir.cross(&other.dir).abs() <= EPS_ANG
    }

    /// Same infinite line, regardless of direction sense or anchor point.
    pub fn collinear_with(&self, other: &Line) -> bool {
        self.is_parallel(other) && self.contains(&other.pt)
    }

    pub fn translate(&self, v: Vector) -> Line {
        Line::new(self.pt + v, self.dir)
    }

    /// Mirrors the line across the horizontal axis.
    pub fn flip_y(&self) -> Line {
        Line::new(self.pt.flip_y(), Vector::new(self.dir.x, -self.dir.y))
    }
}
