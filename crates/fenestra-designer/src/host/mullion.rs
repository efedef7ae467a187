//! Mullions and the glass panes they leave.

use fenestra_core::constants::EPS_LEN;
use fenestra_core::{Line, Segment, Vector};
use serde::{Deserialize, Serialize};

use crate::polygon::WinPolygon;

/// A mullion line, optionally cut down to the stretch a bar actually covers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mullion {
    pub line: Line,
    /// Offsets from `line.pt` along `line.dir`. `None` spans the whole opening.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<(f64, f64)>,
}

impl Mullion {
    pub fn full(line: Line) -> Self {
        Self { line, reach: None }
    }

    /// Mullion covering `segment` only.
    pub fn bounded(segment: Segment) -> Self {
        Self {
            line: Line::through(segment.start, segment.end),
            reach: Some((0.0, segment.length())),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.line.is_horizontal()
    }

    pub fn is_vertical(&self) -> bool {
        self.line.is_vertical()
    }

    /// Covered length; infinite when unbounded.
    pub fn length(&self) -> f64 {
        self.reach.map_or(f64::INFINITY, |(a, b)| (b - a).abs())
    }

    pub fn segment(&self) -> Option<Segment> {
        let (a, b) = self.reach?;
        Some(Segment::new(
            self.line.pt + self.line.dir * a,
            self.line.pt + self.line.dir * b,
        ))
    }

    /// Reach as ordered offsets along `line`.
    fn span(&self, line: &Line) -> Option<(f64, f64)> {
        let s = self.segment()?;
        let a = (s.start - line.pt).dot(&line.dir);
        let b = (s.end - line.pt).dot(&line.dir);
        Some((a.min(b), a.max(b)))
    }

    /// Whether the mullion covers more than a point of `chord`, a piece of its line.
    pub fn covers(&self, chord: &Segment) -> bool {
        let Some((lo, hi)) = self.span(&self.line) else {
            return true;
        };
        let a = (chord.start - self.line.pt).dot(&self.line.dir);
        let b = (chord.end - self.line.pt).dot(&self.line.dir);
        hi.min(a.max(b)) - lo.max(a.min(b)) > EPS_LEN
    }

    /// Collinear with `other` and sharing more than a point of it.
    pub fn overlaps(&self, other: &Mullion) -> bool {
        if !self.line.collinear_with(&other.line) {
            return false;
        }
        match (self.span(&self.line), other.span(&self.line)) {
            (Some((a, b)), Some((c, d))) => b.min(d) - a.max(c) > EPS_LEN,
            _ => true,
        }
    }

    pub fn translate(&self, offset: Vector) -> Mullion {
        Mullion {
            line: self.line.translate(offset),
            reach: self.reach,
        }
    }
}

impl From<Line> for Mullion {
    fn from(line: Line) -> Self {
        Self::full(line)
    }
}

/// Glazing bead; the visible glass sits inside `inner_poly`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bead {
    pub inner_poly: WinPolygon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Glass {
    pub polygon: WinPolygon,
    pub bead: Option<Bead>,
}

impl Glass {
    /// Pane with a bead of `bead_width`, when the pane is large enough for one.
    pub fn new(polygon: WinPolygon, bead_width: f64) -> Self {
        let bead = if bead_width > 0.0 {
            polygon.inset(bead_width).map(|inner| Bead {
                inner_poly: inner.with_id(polygon.id.clone()),
            })
        } else {
            None
        };
        Self { polygon, bead }
    }

    /// The polygon pane decorations attach to: inside the bead if present.
    pub fn live_polygon(&self) -> &WinPolygon {
        self.bead
            .as_ref()
            .map_or(&self.polygon, |bead| &bead.inner_poly)
    }
}

/// Splits a host's opening into panes with mullions.
#[derive(Debug, Clone, PartialEq)]
pub struct MulManager {
    area: WinPolygon,
    bead_width: f64,
    glasses: Vec<Glass>,
    mullions: Vec<Mullion>,
}

impl MulManager {
    pub fn new(area: WinPolygon, bead_width: f64) -> Self {
        let glasses = vec![Glass::new(area.clone(), bead_width)];
        Self {
            area,
            bead_width,
            glasses,
            mullions: Vec::new(),
        }
    }

    pub fn area(&self) -> &WinPolygon {
        &self.area
    }

    pub fn glasses(&self) -> &[Glass] {
        &self.glasses
    }

    pub fn mullions(&self) -> &[Mullion] {
        &self.mullions
    }

    /// Splits every pane the mullion crosses. Returns false, and keeps
    /// nothing, when it misses all panes or overlaps an existing mullion.
    pub fn add_mullion(&mut self, mullion: impl Into<Mullion>) -> bool {
        let mullion = mullion.into();
        if self.mullions.iter().any(|m| m.overlaps(&mullion)) {
            return false;
        }
        let mut split_any = false;
        let mut next = Vec::with_capacity(self.glasses.len() + 1);
        for glass in self.glasses.drain(..) {
            let crossed = glass
                .polygon
                .clip_line(&mullion.line)
                .iter()
                .any(|chord| mullion.covers(chord));
            let halves = if crossed {
                glass.polygon.split_by_line(&mullion.line)
            } else {
                None
            };
            match halves {
                Some((left, right)) => {
                    split_any = true;
                    next.push(Glass::new(left, self.bead_width));
                    next.push(Glass::new(right, self.bead_width));
                }
                None => next.push(glass),
            }
        }
        self.glasses = next;
        if split_any {
            self.mullions.push(mullion);
        }
        split_any
    }

    pub fn clear_mullions(&mut self) {
        self.mullions.clear();
        self.glasses = vec![Glass::new(self.area.clone(), self.bead_width)];
    }

    /// Starts over from `area` and re-applies the mullions that still cut it.
    pub fn rebuild(&mut self, area: WinPolygon) {
        self.area = area;
        let mullions = std::mem::take(&mut self.mullions);
        self.glasses = vec![Glass::new(self.area.clone(), self.bead_width)];
        for mullion in mullions {
            if !self.add_mullion(mullion) {
                tracing::debug!("Mullion {:?} no longer crosses the opening", mullion);
            }
        }
    }

    pub fn translate(&mut self, offset: Vector) {
        self.area = self.area.translate(offset);
        for glass in &mut self.glasses {
            glass.polygon = glass.polygon.translate(offset);
            if let Some(bead) = &mut glass.bead {
                bead.inner_poly = bead.inner_poly.translate(offset);
            }
        }
        for mullion in &mut self.mullions {
            *mullion = mullion.translate(offset);
        }
    }
}
