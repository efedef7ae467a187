use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{Point, Vector};
use crate::constants::EPS_LEN;

/// A circular arc. `sweep` is signed: positive sweeps counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl Arc {
    pub const fn new(center: Point, radius: f64, start_angle: f64, sweep: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    /// Builds the arc between `start` and `end` described by a polyline bulge
    /// (`tan(sweep / 4)`). Returns `None` for a zero bulge or coincident points.
    pub fn from_bulge(start: Point, end: Point, bulge: f64) -> Option<Arc> {
        let chord = end - start;
        let c = chord.length();
        if bulge.abs() <= f64::EPSILON || c <= EPS_LEN {
            return None;
        }
        let sweep = 4.0 * bulge.atan();
        let radius = c / (2.0 * (sweep / 2.0).sin().abs());
        // signed distance from chord midpoint to center, along the chord's left normal
        let offset = (c / 2.0) / (sweep / 2.0).tan();
        let center = start.midpoint(&end) + chord.normalize().rotate90_ccw() * offset;
        let start_angle = (start - center).slope();
        Some(Arc::new(center, radius, start_angle, sweep))
    }

    pub fn bulge(&self) -> f64 {
        (self.sweep / 4.0).tan()
    }

    pub fn is_ccw(&self) -> bool {
        self.sweep > 0.0
    }

    pub fn point_at_angle(&self, angle: f64) -> Point {
        self.center + Vector::new(angle.cos(), angle.sin()) * self.radius
    }

    pub fn start(&self) -> Point {
        self.point_at_angle(self.start_angle)
    }

    pub fn end(&self) -> Point {
        self.point_at_angle(self.start_angle + self.sweep)
    }

    pub fn point_at(&self, t: f64) -> Point {
        self.point_at_angle(self.start_angle + self.sweep * t)
    }

    pub fn midpoint(&self) -> Point {
        self.point_at(0.5)
    }

    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// Unit tangent in the direction of travel at parameter `t`.
    pub fn tangent_at(&self, t: f64) -> Vector {
        let radial = self.point_at(t) - self.center;
        if self.is_ccw() {
            radial.normalize().rotate90_ccw()
        } else {
            radial.normalize().rotate90_cw()
        }
    }

    pub fn reverse(&self) -> Arc {
        Arc::new(
            self.center,
            self.radius,
            self.start_angle + self.sweep,
            -self.sweep,
        )
    }

    pub fn translate(&self, v: Vector) -> Arc {
        Arc::new(self.center + v, self.radius, self.start_angle, self.sweep)
    }

    pub fn rotate(&self, angle: f64, center: Point) -> Arc {
        Arc::new(
            self.center.rotate(angle, center),
            self.radius,
            self.start_angle + angle,
            self.sweep,
        )
    }

    pub fn scale(&self, factor: f64, center: Point) -> Arc {
        Arc::new(
            self.center.scale(factor, center),
            self.radius * factor.abs(),
            self.start_angle,
            self.sweep,
        )
    }

    /// Whether the arc covers a half circle or more.
    pub fn is_major(&self) -> bool {
        self.sweep.abs() >= PI
    }
}
