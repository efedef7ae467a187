//! Frame-level properties: profile, split ratios, opening side, copy.

use fenestra_core::{Line, Vector};
use fenestra_settings::EditSettings;

use super::{changed_enough, commit};
use crate::host::{Frame, Host, OpenToward, ShapeManager, View};

/// Horizontal gap between the rightmost frame and a pasted copy.
const PASTE_GAP: f64 = 300.0;

/// Parses `"1-2-1"` into weights. `None` for fewer than two parts or any
/// part that is not a positive number.
pub fn parse_split_ratios(ratios: &str) -> Option<Vec<f64>> {
    let weights = ratios
        .split('-')
        .map(|part| part.trim().parse::<f64>().ok().filter(|w| *w > 0.0 && w.is_finite()))
        .collect::<Option<Vec<f64>>>()?;
    (weights.len() >= 2).then_some(weights)
}

/// Edits one frame of a [`ShapeManager`]. Setters on a missing frame do nothing.
pub struct FrameSettings<'a> {
    shapes: &'a mut ShapeManager,
    frame_id: String,
    view: &'a mut dyn View,
    min_delta: f64,
    min_profile_size: f64,
}

impl<'a> FrameSettings<'a> {
    pub fn new(shapes: &'a mut ShapeManager, frame_id: &str, view: &'a mut dyn View) -> Self {
        let min_profile_size = shapes.profile().min_profile_size;
        Self {
            shapes,
            frame_id: frame_id.to_string(),
            view,
            min_delta: EditSettings::default().min_delta,
            min_profile_size,
        }
    }

    pub fn with_edit(mut self, edit: &EditSettings) -> Self {
        self.min_delta = edit.min_delta;
        self
    }

    fn frame(&self) -> Option<&Frame> {
        self.shapes.frame(&self.frame_id)
    }

    pub fn profile_width(&self) -> Option<f64> {
        self.frame().map(|f| f.frame_manager.profile_width())
    }

    pub fn set_profile_width(&mut self, width: f64) {
        let (min_delta, min_size) = (self.min_delta, self.min_profile_size);
        let Some(frame) = self.shapes.frame_mut(&self.frame_id) else {
            return;
        };
        let current = frame.frame_manager.profile_width();
        if !changed_enough(current, width, min_delta) || width < min_size {
            return;
        }
        frame.frame_manager.set_profile_width(width);
        commit(frame, &mut *self.view, "FrameSettings", "profileWidth", |f| {
            f.recreate()
        });
    }

    pub fn lock_drag_size(&self) -> Option<bool> {
        self.frame().map(|f| f.lock_drag_size)
    }

    /// Freezes the frame size against drags. Geometry is unaffected.
    pub fn set_lock_drag_size(&mut self, locked: bool) {
        let Some(frame) = self.shapes.frame_mut(&self.frame_id) else {
            return;
        };
        if frame.lock_drag_size == locked {
            return;
        }
        frame.lock_drag_size = locked;
        commit(frame, &mut *self.view, "FrameSettings", "lockDragSize", |_| {});
    }

    pub fn open_toward(&self) -> Option<OpenToward> {
        self.frame().map(|f| f.open_toward)
    }

    pub fn set_open_toward(&mut self, toward: OpenToward) {
        let Some(frame) = self.shapes.frame_mut(&self.frame_id) else {
            return;
        };
        if frame.open_toward == toward {
            return;
        }
        frame.open_toward = toward;
        commit(frame, &mut *self.view, "FrameSettings", "openToward", |f| {
            f.update_poly()
        });
    }

    /// Replaces the frame's mullions with vertical ones dividing the opening
    /// width by `ratios`, e.g. `"1-2-1"`.
    pub fn equal_split_ratios(&mut self, ratios: &str) {
        let Some(weights) = parse_split_ratios(ratios) else {
            tracing::debug!("Split ratios '{}' ignored", ratios);
            return;
        };
        let Some(frame) = self.shapes.frame_mut(&self.frame_id) else {
            return;
        };
        frame.mul_manager.clear_mullions();
        let bounds = frame.mul_manager.area().bounds();
        let total: f64 = weights.iter().sum();
        let mut x = bounds.min_x;
        for weight in &weights[..weights.len() - 1] {
            x += bounds.width() * weight / total;
            frame.mul_manager.add_mullion(Line::vertical(x));
        }
        commit(frame, &mut *self.view, "FrameSettings", "splitRatios", |f| {
            f.update_poly()
        });
    }

    /// Pastes a copy of the frame to the right of every frame on the board.
    /// Returns the copy's id.
    pub fn copy_and_paste(&mut self) -> Option<String> {
        let source = self.frame()?;
        let right = self.shapes.bounds()?.max_x;
        let offset = right - source.polygon().bounds().min_x + PASTE_GAP;
        let copy = source.duplicate(Vector::new(offset, 0.0));
        let id = self.shapes.insert(copy);
        self.view.active_layer().batch_draw();
        self.view.momento_manager().check_point();
        Some(id)
    }
}
