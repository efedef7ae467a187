//! Turns hand-drawn rectangles into a frame with mullions.
//!
//! Each stroke becomes one or more planks of a fixed thickness. The planks
//! are merged, and the faces of the merged shape are traced. The largest
//! outer face of a piece built from at least two strokes becomes the
//! frame; pairs of holes separated by a single plank width give the
//! mullions, each cut to the bar material it runs through.

pub mod faces;
pub mod planks;

pub use faces::{fetch_faces, unify_polys, Face, Union};
pub use planks::{flip_y_for_line, flip_y_for_poly, to_gui_planks, Plank, Stroke};

use fenestra_core::constants::EPS_LEN;
use fenestra_core::{AppEvent, EventBus, Line, Point, RecognitionError, Segment, ShapeEvent, Vector};
use fenestra_settings::RecognitionSettings;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::host::{Mullion, ShapeManager};
use crate::poly_id::PolyId;
use crate::polygon::WinPolygon;

/// A number that may arrive as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coord {
    Num(f64),
    Str(String),
}

impl Coord {
    fn value(&self, index: usize, field: &str) -> Result<f64, RecognitionError> {
        let v = match self {
            Coord::Num(v) => *v,
            Coord::Str(s) => s.trim().parse::<f64>().map_err(|_| RecognitionError::InvalidStroke {
                index,
                reason: format!("{} '{}' is not a number", field, s),
            })?,
        };
        if v.is_finite() {
            Ok(v)
        } else {
            Err(RecognitionError::InvalidStroke {
                index,
                reason: format!("{} is not finite", field),
            })
        }
    }
}

impl From<f64> for Coord {
    fn from(v: f64) -> Self {
        Coord::Num(v)
    }
}

/// Stroke as received from the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRect {
    pub x: Coord,
    pub y: Coord,
    pub width: Coord,
    pub height: Coord,
}

impl RawRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    fn to_stroke(&self, index: usize) -> Result<Stroke, RecognitionError> {
        Ok(Stroke::new(
            self.x.value(index, "x")?,
            self.y.value(index, "y")?,
            self.width.value(index, "width")?,
            self.height.value(index, "height")?,
        ))
    }
}

/// What a recognition run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionOutcome {
    pub frame_id: String,
    /// Mullions as added to the frame, after centring.
    pub splitters: Vec<Mullion>,
    /// Strokes that did not end up in the frame.
    pub dropped: Vec<usize>,
    /// Translation applied when centring the design.
    pub offset: Vector,
}

#[derive(Debug, Default)]
pub struct HandDrawnRecognition {
    settings: RecognitionSettings,
    bus: Option<Arc<EventBus>>,
}

impl HandDrawnRecognition {
    pub fn new(settings: RecognitionSettings) -> Self {
        Self {
            settings,
            bus: None,
        }
    }

    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn settings(&self) -> &RecognitionSettings {
        &self.settings
    }

    /// Parses a JSON array of strokes.
    pub fn parse(json: &str) -> Result<Vec<RawRect>, fenestra_core::Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Recognizes `rects` and adds the frame and its mullions to `shapes`.
    pub fn recognize(
        &self,
        rects: &[RawRect],
        shapes: &mut ShapeManager,
    ) -> Result<RecognitionOutcome, RecognitionError> {
        if rects.is_empty() {
            return Err(RecognitionError::EmptyInput);
        }
        let strokes = rects
            .iter()
            .enumerate()
            .map(|(i, r)| r.to_stroke(i))
            .collect::<Result<Vec<_>, _>>()?;

        let t = self.settings.plank_thickness;
        let planks = to_gui_planks(&strokes, t);
        let union = unify_polys(&planks);
        let faces = fetch_faces(&union, self.settings.min_face_area);

        let frame_face = self.find_frame_face(&union, &faces)?;
        let frame_poly = self
            .find_frame_poly(frame_face)
            .ok_or(RecognitionError::NotEnoughShapes {
                found: union.max_strokes(),
            })?;
        let component = frame_face.component;

        let holes: Vec<&Face> = faces
            .iter()
            .filter(|f| f.is_hole && f.component == component)
            .collect();
        let mut found = self.find_splitters(&holes, &planks, &frame_poly);
        // longer bars first, so shorter ones find the panes they end on
        found.sort_by(|a, b| b.length().total_cmp(&a.length()));

        let frame_id = shapes.add(frame_poly.flip_y());
        let mut added = Vec::new();
        // offsets along a line are unchanged by the flip
        let flipped = found.iter().map(|m| Mullion {
            line: flip_y_for_line(&m.line),
            reach: m.reach,
        });
        for mullion in flipped {
            if shapes.add_mullion_to(&frame_id, mullion) {
                added.push(mullion);
            } else {
                tracing::warn!("Recognized splitter {:?} does not cross the opening", mullion);
            }
        }
        let offset = shapes.move_shape_to_center();
        let splitters: Vec<Mullion> = added.iter().map(|m| m.translate(offset)).collect();

        let dropped: Vec<usize> = (0..strokes.len())
            .filter(|i| !union.components[component].contains(i))
            .collect();
        if !dropped.is_empty() {
            tracing::info!("Dropped {} stroke(s) outside the frame", dropped.len());
        }
        tracing::info!(
            "Recognized frame {} with {} splitter(s)",
            frame_id,
            splitters.len()
        );
        if let Some(bus) = &self.bus {
            bus.notify(AppEvent::Shape(ShapeEvent::Recognized {
                splitters: splitters.len(),
            }));
        }

        Ok(RecognitionOutcome {
            frame_id,
            splitters,
            dropped,
            offset,
        })
    }

    /// Largest outer face of a piece drawn with at least two strokes.
    fn find_frame_face<'f>(
        &self,
        union: &Union,
        faces: &'f [Face],
    ) -> Result<&'f Face, RecognitionError> {
        faces
            .iter()
            .filter(|f| !f.is_hole && union.components[f.component].len() >= 2)
            .max_by(|a, b| a.area.total_cmp(&b.area))
            .ok_or(RecognitionError::NotEnoughShapes {
                found: union.max_strokes(),
            })
    }

    /// Frame outline: the face pulled in to the stroke centrelines, or the
    /// face itself when nothing usable is left after pulling in.
    fn find_frame_poly(&self, face: &Face) -> Option<WinPolygon> {
        let outline = match WinPolygon::from_points(PolyId::new(0), &face.points) {
            Ok(outline) => outline,
            Err(e) => {
                tracing::warn!("Frame face is not a polygon: {}", e);
                return None;
            }
        };
        Some(
            outline
                .inset(self.settings.plank_thickness / 2.0)
                .filter(|p| p.area() >= self.settings.min_face_area)
                .unwrap_or(outline),
        )
    }

    /// Holes are taken smallest first; each is compared with those already
    /// seen, so every facing pair is tried once.
    fn find_splitters(
        &self,
        holes: &[&Face],
        planks: &[Plank],
        frame: &WinPolygon,
    ) -> Vec<Mullion> {
        let max_gap = self.settings.mullion_gap_factor * self.settings.plank_thickness;
        let mut confirmed: Vec<&Face> = Vec::new();
        let mut found: Vec<Mullion> = Vec::new();
        for hole in holes {
            for other in &confirmed {
                for (a, b) in hole.sides() {
                    for (c, d) in other.sides() {
                        let Some(line) = make_splitter_line((a, b), (c, d), max_gap) else {
                            continue;
                        };
                        let Some(reach) = self.find_valid_mullion(&line, planks, frame) else {
                            continue;
                        };
                        let mullion = Mullion::bounded(reach);
                        if found.iter().any(|m| m.overlaps(&mullion)) {
                            continue;
                        }
                        tracing::debug!("Splitter found from {:?} to {:?}", reach.start, reach.end);
                        found.push(mullion);
                    }
                }
            }
            confirmed.push(hole);
        }
        found
    }

    /// Stretch of `line` a bar covers: the run of plank material through
    /// `line.pt`, pulled in by half a plank at both ends so it stops on the
    /// centrelines of the strokes it meets. `None` when the run is no
    /// longer than a plank is thick or `line.pt` is outside the frame.
    fn find_valid_mullion(
        &self,
        line: &Line,
        planks: &[Plank],
        frame: &WinPolygon,
    ) -> Option<Segment> {
        if !frame.contains(&line.pt) {
            return None;
        }
        let mut spans: Vec<(f64, f64)> = planks
            .iter()
            .filter(|p| p.straddles(line))
            .map(|p| p.span_along(line))
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut merged: Vec<(f64, f64)> = Vec::new();
        for (lo, hi) in spans {
            match merged.last_mut() {
                Some(last) if lo <= last.1 + EPS_LEN => last.1 = last.1.max(hi),
                _ => merged.push((lo, hi)),
            }
        }
        let at = if line.is_horizontal() {
            line.pt.x
        } else {
            line.pt.y
        };
        let half = self.settings.plank_thickness / 2.0;
        let (lo, hi) = merged.iter().find(|(lo, hi)| *lo <= at && at <= *hi)?;
        let (from, to) = (lo + half, hi - half);
        if to - from <= EPS_LEN {
            return None;
        }
        let end = |v: f64| {
            if line.is_horizontal() {
                Point::new(v, line.pt.y)
            } else {
                Point::new(line.pt.x, v)
            }
        };
        Some(Segment::new(end(from), end(to)))
    }
}

/// Line between two facing, parallel, axis-aligned sides that are at most
/// `max_gap` apart and overlap along their common axis.
pub fn make_splitter_line(
    first: (Point, Point),
    second: (Point, Point),
    max_gap: f64,
) -> Option<Line> {
    let (a, b) = first;
    let (c, d) = second;
    let horizontal = |p: Point, q: Point| (p.y - q.y).abs() <= EPS_LEN;
    let vertical = |p: Point, q: Point| (p.x - q.x).abs() <= EPS_LEN;
    if (b - a).dot(&(d - c)) >= 0.0 {
        return None;
    }

    let is_horizontal = if horizontal(a, b) && horizontal(c, d) {
        true
    } else if vertical(a, b) && vertical(c, d) {
        false
    } else {
        return None;
    };
    // (position along the sides, position across them)
    let split = |p: Point| if is_horizontal { (p.x, p.y) } else { (p.y, p.x) };
    let (a, b, c, d) = (split(a), split(b), split(c), split(d));

    let gap = (a.1 - c.1).abs();
    if gap <= EPS_LEN || gap > max_gap + EPS_LEN {
        return None;
    }
    let lo = a.0.min(b.0).max(c.0.min(d.0));
    let hi = a.0.max(b.0).min(c.0.max(d.0));
    if hi - lo <= EPS_LEN {
        return None;
    }

    let along = (lo + hi) / 2.0;
    let across = (a.1 + c.1) / 2.0;
    let (pt, dir) = if is_horizontal {
        (Point::new(along, across), Vector::new(1.0, 0.0))
    } else {
        (Point::new(across, along), Vector::new(0.0, 1.0))
    };
    Some(Line::new(pt, dir))
}
