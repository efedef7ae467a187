use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::constants::EPS_LEN;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (*other - *self).length()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn translate(&self, v: Vector) -> Point {
        *self + v
    }

    /// Rotates this point by `angle` radians (counter-clockwise) around `center`.
    pub fn rotate(&self, angle: f64, center: Point) -> Point {
        let rotated = Rotation2::new(angle) * Vector2::new(self.x - center.x, self.y - center.y);
        Point::new(center.x + rotated.x, center.y + rotated.y)
    }

    /// Scales the distance from `center` by `factor`.
    pub fn scale(&self, factor: f64, center: Point) -> Point {
        Point::new(
            center.x + (self.x - center.x) * factor,
            center.y + (self.y - center.y) * factor,
        )
    }

    /// Mirrors the point across the horizontal axis.
    pub fn flip_y(&self) -> Point {
        Point::new(self.x, -self.y)
    }

    pub fn equal_to(&self, other: &Point) -> bool {
        self.distance_to(other) <= EPS_LEN
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, v: Vector) -> Point {
        Point::new(self.x - v.x, self.y - v.y)
    }
}

impl Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

/// A 2D direction or displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_zero(&self) -> bool {
        self.length() <= EPS_LEN
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalize(&self) -> Vector {
        let len = self.length();
        if len <= EPS_LEN {
            return Vector::zero();
        }
        Vector::new(self.x / len, self.y / len)
    }

    pub fn multiply(&self, scalar: f64) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar)
    }

    pub fn invert(&self) -> Vector {
        Vector::new(-self.x, -self.y)
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: &Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn rotate(&self, angle: f64) -> Vector {
        let rotated = Rotation2::new(angle) * Vector2::new(self.x, self.y);
        Vector::new(rotated.x, rotated.y)
    }

    pub fn rotate90_ccw(&self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    pub fn rotate90_cw(&self) -> Vector {
        Vector::new(self.y, -self.x)
    }

    /// Direction angle in `[0, 2π)`.
    pub fn slope(&self) -> f64 {
        let angle = self.y.atan2(self.x);
        if angle < 0.0 {
            angle + TAU
        } else {
            angle
        }
    }

    pub fn equal_to(&self, other: &Vector) -> bool {
        (*self - *other).length() <= EPS_LEN
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.invert()
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.multiply(scalar)
    }
}
