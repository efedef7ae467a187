//! Strokes as fixed-thickness planks.

use fenestra_core::constants::EPS_LEN;
use fenestra_core::{Line, Point};

/// A hand-drawn rectangle in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Stroke {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Axis-aligned box in model coordinates, tagged with its stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plank {
    pub min: Point,
    pub max: Point,
    pub stroke: usize,
}

impl Plank {
    fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64, stroke: usize) -> Self {
        Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
            stroke,
        }
    }

    /// Shares area with `other`; meeting along a side or at a corner does not count.
    pub fn overlaps(&self, other: &Plank) -> bool {
        let dx = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let dy = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        dx > EPS_LEN && dy > EPS_LEN
    }

    /// Whether `line` (axis-aligned) passes strictly through the plank.
    pub fn straddles(&self, line: &Line) -> bool {
        if line.is_horizontal() {
            self.min.y < line.pt.y && self.max.y > line.pt.y
        } else {
            self.min.x < line.pt.x && self.max.x > line.pt.x
        }
    }

    /// Extent along `line`'s direction.
    pub fn span_along(&self, line: &Line) -> (f64, f64) {
        if line.is_horizontal() {
            (self.min.x, self.max.x)
        } else {
            (self.min.y, self.max.y)
        }
    }
}

/// Screen box to model box: `y` in `[-(y + h), -y]`.
pub fn flip_y_for_poly(stroke: &Stroke) -> (Point, Point) {
    (
        Point::new(stroke.x, -(stroke.y + stroke.height)),
        Point::new(stroke.x + stroke.width, -stroke.y),
    )
}

pub fn flip_y_for_line(line: &Line) -> Line {
    line.flip_y()
}

/// Turns strokes into planks of thickness `t`.
///
/// A stroke thicker than `t` both ways is an outline and yields one plank
/// per side, centred on the side and running `t / 2` past each corner so
/// neighbouring sides overlap. Anything else is a bar: one plank along its
/// long centreline. Strokes with no extent are skipped.
pub fn to_gui_planks(strokes: &[Stroke], t: f64) -> Vec<Plank> {
    let h = t / 2.0;
    let mut planks = Vec::with_capacity(strokes.len() * 4);
    for (i, stroke) in strokes.iter().enumerate() {
        let w = stroke.width.abs();
        let ht = stroke.height.abs();
        if w.max(ht) <= EPS_LEN {
            tracing::debug!("Stroke {} has no extent", i);
            continue;
        }
        let (a, b) = flip_y_for_poly(stroke);
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
        if w > t && ht > t {
            planks.push(Plank::new(x0 - h, y0 - h, x1 + h, y0 + h, i));
            planks.push(Plank::new(x1 - h, y0 - h, x1 + h, y1 + h, i));
            planks.push(Plank::new(x0 - h, y1 - h, x1 + h, y1 + h, i));
            planks.push(Plank::new(x0 - h, y0 - h, x0 + h, y1 + h, i));
        } else if w >= ht {
            let cy = (y0 + y1) / 2.0;
            planks.push(Plank::new(x0, cy - h, x1, cy + h, i));
        } else {
            let cx = (x0 + x1) / 2.0;
            planks.push(Plank::new(cx - h, y0, cx + h, y1, i));
        }
    }
    planks
}
