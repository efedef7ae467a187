//! Ear frames: side pieces attached to a main frame.

use fenestra_core::Vector;
use fenestra_settings::ProfileSettings;
use uuid::Uuid;

use super::{AssistHost, FrameManager};
use crate::edge_finder::{Direction, EdgeFinder};
use crate::polygon::WinPolygon;
use crate::settings::Ear2FrameHost;

/// A frame piece that can be flipped to the other side of the main frame
/// and, without a base, pulled down past its outline.
#[derive(Debug, Clone, PartialEq)]
pub struct EarFrame {
    id: String,
    base: WinPolygon,
    polygon: WinPolygon,
    flip: bool,
    has_base: bool,
    pulling_height: f64,
    pub frame_manager: FrameManager,
    assist_visible: bool,
}

impl EarFrame {
    pub fn new(base: WinPolygon, profile: &ProfileSettings) -> Self {
        let mut ear = Self {
            id: Uuid::new_v4().to_string(),
            polygon: base.clone(),
            base,
            flip: false,
            has_base: true,
            pulling_height: 0.0,
            frame_manager: FrameManager::new(profile.frame_width),
            assist_visible: false,
        };
        ear.rebuild();
        ear
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Outline as last rebuilt.
    pub fn polygon(&self) -> &WinPolygon {
        &self.polygon
    }

    /// Outline before pulling and flipping.
    pub fn base(&self) -> &WinPolygon {
        &self.base
    }

    pub fn show_assist(&mut self) {
        self.assist_visible = true;
    }

    pub fn assist_visible(&self) -> bool {
        self.assist_visible
    }

    fn rebuild(&mut self) {
        let mut polygon = self.base.clone();
        if !self.has_base && self.pulling_height > 0.0 {
            let pulled = EdgeFinder::find_index(Direction::Down, &polygon)
                .map(|bottom| polygon.drag_edge(bottom, Vector::new(0.0, -self.pulling_height)));
            match pulled {
                Some(Ok(p)) => polygon = p,
                Some(Err(e)) => tracing::warn!("Cannot pull ear frame {}: {}", self.id, e),
                None => tracing::warn!("Ear frame {} has no bottom edge", self.id),
            }
        }
        if self.flip {
            let center = self.base.center();
            polygon = if self.is_vertical() {
                polygon.mirror_horizontal(center.x)
            } else {
                polygon.mirror_vertical(center.y)
            };
        }
        self.polygon = polygon;
        self.frame_manager.recreated(&self.polygon);
    }
}

impl AssistHost for EarFrame {
    fn hide_assist(&mut self) {
        self.assist_visible = false;
    }
}

impl Ear2FrameHost for EarFrame {
    fn flip(&self) -> bool {
        self.flip
    }

    fn set_flip(&mut self, flip: bool) {
        self.flip = flip;
    }

    fn has_base(&self) -> bool {
        self.has_base
    }

    fn set_has_base(&mut self, has_base: bool) {
        self.has_base = has_base;
    }

    fn pulling_height(&self) -> f64 {
        self.pulling_height
    }

    fn set_pulling_height(&mut self, height: f64) {
        self.pulling_height = height;
    }

    /// Taller than wide.
    fn is_vertical(&self) -> bool {
        self.base.height() > self.base.width()
    }

    fn recreated(&mut self) {
        self.rebuild();
    }
}
