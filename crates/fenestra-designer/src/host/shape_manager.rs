//! Frames on the drawing board.

use fenestra_core::{AppEvent, Bounds, EventBus, Point, ShapeEvent, Vector};
use fenestra_settings::ProfileSettings;
use std::sync::Arc;

use super::{Frame, FrameData, Host, Mullion};
use crate::polygon::WinPolygon;

/// Owns every frame in a design, in insertion order.
#[derive(Debug, Default)]
pub struct ShapeManager {
    pub shapem: Vec<Frame>,
    profile: ProfileSettings,
    bus: Option<Arc<EventBus>>,
}

impl ShapeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: ProfileSettings) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn profile(&self) -> &ProfileSettings {
        &self.profile
    }

    fn publish(&self, event: ShapeEvent) {
        if let Some(bus) = &self.bus {
            bus.notify(AppEvent::Shape(event));
        }
    }

    /// Adds a frame around `polygon` and returns its id.
    pub fn add(&mut self, polygon: WinPolygon) -> String {
        let frame = Frame::with_profile(polygon, &self.profile);
        let id = frame.id().to_string();
        tracing::debug!("Frame {} added", id);
        self.shapem.push(frame);
        self.publish(ShapeEvent::FrameAdded {
            frame_id: id.clone(),
        });
        id
    }

    /// Inserts an existing frame, e.g. a pasted copy.
    pub fn insert(&mut self, frame: Frame) -> String {
        let id = frame.id().to_string();
        self.shapem.push(frame);
        self.publish(ShapeEvent::FrameAdded {
            frame_id: id.clone(),
        });
        id
    }

    /// Adds a mullion to the most recently added frame.
    pub fn add_mullion(&mut self, mullion: impl Into<Mullion>) -> bool {
        match self.shapem.last() {
            Some(frame) => {
                let id = frame.id().to_string();
                self.add_mullion_to(&id, mullion)
            }
            None => false,
        }
    }

    pub fn add_mullion_to(&mut self, frame_id: &str, mullion: impl Into<Mullion>) -> bool {
        let mullion = mullion.into();
        let Some(frame) = self.frame_mut(frame_id) else {
            return false;
        };
        if !frame.add_mullion(mullion) {
            tracing::debug!("Mullion {:?} rejected by frame {}", mullion, frame_id);
            return false;
        }
        self.publish(ShapeEvent::MullionAdded {
            frame_id: frame_id.to_string(),
        });
        true
    }

    /// Union bounds of all frames.
    pub fn bounds(&self) -> Option<Bounds> {
        self.shapem
            .iter()
            .map(|f| f.polygon().bounds())
            .reduce(|a, b| a.union(&b))
    }

    /// Moves all frames so their union bounds are centred on the origin.
    /// Returns the applied offset.
    pub fn move_shape_to_center(&mut self) -> Vector {
        let Some(bounds) = self.bounds() else {
            return Vector::new(0.0, 0.0);
        };
        let offset = Point::new(0.0, 0.0) - bounds.center();
        if !offset.is_zero() {
            for frame in &mut self.shapem {
                frame.translate(offset);
            }
        }
        offset
    }

    pub fn frames(&self) -> &[Frame] {
        &self.shapem
    }

    pub fn frame(&self, id: &str) -> Option<&Frame> {
        self.shapem.iter().find(|f| f.id() == id)
    }

    pub fn frame_mut(&mut self, id: &str) -> Option<&mut Frame> {
        self.shapem.iter_mut().find(|f| f.id() == id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Frame> {
        let index = self.shapem.iter().position(|f| f.id() == id)?;
        Some(self.shapem.remove(index))
    }

    pub fn len(&self) -> usize {
        self.shapem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapem.is_empty()
    }

    pub fn to_data(&self) -> Vec<FrameData> {
        self.shapem.iter().map(Frame::to_data).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_data())
    }
}
