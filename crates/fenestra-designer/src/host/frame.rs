//! Outer frames.

use fenestra_core::Vector;
use fenestra_settings::ProfileSettings;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AntiTheft, AssistHost, Host, MulManager, Mullion, SashManager};
use crate::managers::{
    ColorData, ColorManager, DecorationBarManager, DecorationBarManagerData, FillerManager,
};
use crate::polygon::WinPolygon;

/// Whether sashes open into the room or out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenToward {
    #[default]
    Inward,
    Outward,
}

/// Frame profile and the opening it leaves.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameManager {
    profile_width: f64,
    inner: Option<WinPolygon>,
    generation: u64,
}

impl FrameManager {
    pub fn new(profile_width: f64) -> Self {
        Self {
            profile_width,
            inner: None,
            generation: 0,
        }
    }

    pub fn profile_width(&self) -> f64 {
        self.profile_width
    }

    pub fn set_profile_width(&mut self, width: f64) {
        self.profile_width = width;
    }

    /// Opening inside the profile, from the last rebuild.
    pub fn inner(&self) -> Option<&WinPolygon> {
        self.inner.as_ref()
    }

    /// How many times the profile has been rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rebuilds the profile around `polygon`.
    pub fn recreated(&mut self, polygon: &WinPolygon) {
        self.inner = polygon.inset(self.profile_width);
        self.generation += 1;
        if self.inner.is_none() {
            tracing::warn!(
                "Profile width {} leaves no opening in frame polygon {}",
                self.profile_width,
                polygon.id
            );
        }
    }
}

#[derive(Debug, Clone)]
pub struct Frame {
    id: String,
    polygon: WinPolygon,
    bead_width: f64,
    pub frame_manager: FrameManager,
    pub mul_manager: MulManager,
    pub filler_manager: FillerManager,
    pub decoration: DecorationBarManager,
    pub colors: ColorManager,
    pub sash_manager: SashManager,
    pub anti_theft: Option<AntiTheft>,
    pub lock_drag_size: bool,
    pub open_toward: OpenToward,
    assist_visible: bool,
}

impl Frame {
    pub fn new(polygon: WinPolygon) -> Self {
        Self::with_profile(polygon, &ProfileSettings::default())
    }

    pub fn with_profile(polygon: WinPolygon, profile: &ProfileSettings) -> Self {
        let mut frame_manager = FrameManager::new(profile.frame_width);
        frame_manager.recreated(&polygon);
        let area = opening(&frame_manager, &polygon);
        Self {
            id: Uuid::new_v4().to_string(),
            bead_width: profile.bead_width,
            mul_manager: MulManager::new(area, profile.bead_width),
            frame_manager,
            polygon,
            filler_manager: FillerManager::new(),
            decoration: DecorationBarManager::new(),
            colors: ColorManager::default(),
            sash_manager: SashManager::new(),
            anti_theft: None,
            lock_drag_size: false,
            open_toward: OpenToward::default(),
            assist_visible: false,
        }
    }

    /// Replaces the outline and rebuilds everything that hangs off it.
    pub fn set_polygon(&mut self, polygon: WinPolygon) {
        self.polygon = polygon;
        self.recreate();
    }

    /// Rebuilds profile, panes and pane managers from the current outline.
    pub fn recreate(&mut self) {
        self.frame_manager.recreated(&self.polygon);
        let area = opening(&self.frame_manager, &self.polygon);
        self.mul_manager.rebuild(area.clone());
        if let Some(anti_theft) = &mut self.anti_theft {
            anti_theft.set_polygon(area);
        }
        self.update_poly();
    }

    pub fn add_mullion(&mut self, mullion: impl Into<Mullion>) -> bool {
        let added = self.mul_manager.add_mullion(mullion);
        if added {
            self.update_poly();
        }
        added
    }

    pub fn bead_width(&self) -> f64 {
        self.bead_width
    }

    pub fn show_assist(&mut self) {
        self.assist_visible = true;
    }

    pub fn assist_visible(&self) -> bool {
        self.assist_visible
    }

    pub fn translate(&mut self, offset: Vector) {
        self.polygon = self.polygon.translate(offset);
        self.frame_manager.recreated(&self.polygon);
        self.mul_manager.translate(offset);
        self.filler_manager.translate(offset);
        self.decoration.translate(offset);
        self.sash_manager.translate(offset);
        if let Some(anti_theft) = &mut self.anti_theft {
            let moved = anti_theft.polygon().translate(offset);
            anti_theft.set_polygon(moved);
        }
    }

    /// Copy under a new id with the same outline, mullions and settings.
    pub fn duplicate(&self, offset: Vector) -> Frame {
        let mut copy = self.clone();
        copy.id = Uuid::new_v4().to_string();
        copy.colors = self.colors.detached();
        copy.translate(offset);
        copy
    }

    pub fn to_data(&self) -> FrameData {
        FrameData {
            id: self.id.clone(),
            polygon: self.polygon.clone(),
            profile_width: self.frame_manager.profile_width(),
            mullions: self.mul_manager.mullions().to_vec(),
            sashes: self.sash_manager.all_sashes().len(),
            decoration: self.decoration.to_data(),
            colors: self.colors.to_data(),
            lock_drag_size: self.lock_drag_size,
            open_toward: self.open_toward,
        }
    }
}

fn opening(frame_manager: &FrameManager, polygon: &WinPolygon) -> WinPolygon {
    frame_manager
        .inner()
        .cloned()
        .unwrap_or_else(|| polygon.clone())
}

impl AssistHost for Frame {
    fn hide_assist(&mut self) {
        self.assist_visible = false;
    }
}

impl Host for Frame {
    fn id(&self) -> &str {
        &self.id
    }

    fn polygon(&self) -> &WinPolygon {
        &self.polygon
    }

    fn mul_manager(&self) -> &MulManager {
        &self.mul_manager
    }

    fn filler_manager(&self) -> &FillerManager {
        &self.filler_manager
    }

    fn filler_manager_mut(&mut self) -> &mut FillerManager {
        &mut self.filler_manager
    }

    fn decoration(&self) -> &DecorationBarManager {
        &self.decoration
    }

    fn decoration_mut(&mut self) -> &mut DecorationBarManager {
        &mut self.decoration
    }

    fn update_poly(&mut self) {
        let glasses = self.mul_manager.glasses();
        self.filler_manager.update_poly(glasses);
        self.decoration.update_poly(glasses);
    }
}

/// Snapshot of a frame for saving and history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameData {
    pub id: String,
    pub polygon: WinPolygon,
    pub profile_width: f64,
    pub mullions: Vec<Mullion>,
    pub sashes: usize,
    pub decoration: DecorationBarManagerData,
    pub colors: ColorData,
    pub lock_drag_size: bool,
    pub open_toward: OpenToward,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::{DecorationBarChinese, DecorationShape};
    use crate::poly_id::PolyId;
    use fenestra_core::{Line, Point};

    fn frame() -> Frame {
        let outline =
            WinPolygon::rectangle(PolyId::new(0), Point::new(0.0, 0.0), 1000.0, 1000.0).unwrap();
        Frame::new(outline)
    }

    #[test]
    fn test_opening_inside_profile() {
        let f = frame();
        let inner = f.frame_manager.inner().unwrap();
        assert!((inner.width() - 880.0).abs() < 1e-6);
        assert_eq!(f.mul_manager.glasses().len(), 1);
    }

    #[test]
    fn test_mullion_prunes_decoration_of_split_pane() {
        let mut f = frame();
        let pane = f.mul_manager.glasses()[0].live_polygon().clone();
        f.decoration
            .add_decoration_bar(DecorationShape::new(pane, DecorationBarChinese::default()));
        assert!(f.add_mullion(Line::vertical(0.0)));
        assert!(f.decoration.get_decoration_bar(&PolyId::new(0)).is_none());
        assert_eq!(f.mul_manager.glasses().len(), 2);
    }

    #[test]
    fn test_duplicate_gets_new_id() {
        let f = frame();
        let copy = f.duplicate(Vector::new(1300.0, 0.0));
        assert_ne!(copy.id(), f.id());
        assert_eq!(copy.polygon().center(), Point::new(1300.0, 0.0));
        assert_eq!(f.polygon().center(), Point::new(0.0, 0.0));
    }
}
