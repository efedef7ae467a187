use serde::{Deserialize, Serialize};

use super::{Line, Point, Vector};
use crate::constants::EPS_LEN;

/// A straight edge between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    /// Unit direction from start to end.
    pub fn tangent(&self) -> Vector {
        (self.end - self.start).normalize()
    }

    pub fn point_at(&self, t: f64) -> Point {
        self.start + (self.end - self.start) * t
    }

    pub fn reverse(&self) -> Segment {
        Segment::new(self.end, self.start)
    }

    pub fn translate(&self, v: Vector) -> Segment {
        Segment::new(self.start + v, self.end + v)
    }

    pub fn rotate(&self, angle: f64, center: Point) -> Segment {
        Segment::new(self.start.rotate(angle, center), self.end.rotate(angle, center))
    }

    pub fn scale(&self, factor: f64, center: Point) -> Segment {
        Segment::new(self.start.scale(factor, center), self.end.scale(factor, center))
    }

    pub fn is_horizontal(&self) -> bool {
        (self.end.y - self.start.y).abs() <= EPS_LEN
    }

    pub fn is_vertical(&self) -> bool {
        (self.end.x - self.start.x).abs() <= EPS_LEN
    }

    /// Parameter of the closest point on the segment to `p`, clamped to `[0, 1]`.
    pub fn project(&self, p: &Point) -> f64 {
        let d = self.end - self.start;
        let len2 = d.dot(&d);
        if len2 <= EPS_LEN * EPS_LEN {
            return 0.0;
        }
        ((*p - self.start).dot(&d) / len2).clamp(0.0, 1.0)
    }

    pub fn distance_to(&self, p: &Point) -> f64 {
        self.point_at(self.project(p)).distance_to(p)
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.distance_to(p) <= EPS_LEN
    }

    /// Intersection with an infinite line, if the line crosses this segment.
    pub fn intersect_line(&self, line: &Line) -> Option<Point> {
        let d = self.end - self.start;
        let denom = line.dir.cross(&d);
        if denom.abs() <= f64::EPSILON {
            return None;
        }
        // start + d * t lies on the line when (p - line.pt) x dir == 0
        let t = (line.pt - self.start).cross(&line.dir) / -denom;
        if (-EPS_LEN..=1.0 + EPS_LEN).contains(&t) {
            Some(self.point_at(t.clamp(0.0, 1.0)))
        } else {
            None
        }
    }

    pub fn equal_to(&self, other: &Segment) -> bool {
        self.start.equal_to(&other.start) && self.end.equal_to(&other.end)
    }
}
