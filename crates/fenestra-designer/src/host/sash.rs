//! Openable panels and their nesting.

use fenestra_core::{Point, Vector};
use fenestra_settings::ProfileSettings;
use uuid::Uuid;

use super::{AssistHost, Host, MulManager};
use crate::hardware::{Handle, OpenDirection};
use crate::managers::{DecorationBarManager, FillerManager};
use crate::polygon::WinPolygon;

#[derive(Debug, Clone)]
pub struct Sash {
    id: String,
    polygon: WinPolygon,
    pub open_direction: OpenDirection,
    pub handle: Option<Handle>,
    pub mul_manager: MulManager,
    pub filler_manager: FillerManager,
    pub decoration: DecorationBarManager,
    pub sash_manager: SashManager,
    assist_visible: bool,
}

impl Sash {
    pub fn new(polygon: WinPolygon, open_direction: OpenDirection) -> Self {
        Self::with_profile(polygon, open_direction, &ProfileSettings::default())
    }

    pub fn with_profile(
        polygon: WinPolygon,
        open_direction: OpenDirection,
        profile: &ProfileSettings,
    ) -> Self {
        let area = polygon
            .inset(profile.frame_width)
            .unwrap_or_else(|| polygon.clone());
        Self {
            id: Uuid::new_v4().to_string(),
            mul_manager: MulManager::new(area, profile.bead_width),
            polygon,
            open_direction,
            handle: Some(Handle::new()),
            filler_manager: FillerManager::new(),
            decoration: DecorationBarManager::new(),
            sash_manager: SashManager::new(),
            assist_visible: false,
        }
    }

    pub fn with_handle(mut self, handle: Option<Handle>) -> Self {
        self.handle = handle;
        self
    }

    /// Where the handle sits and where it points, from the current outline.
    pub fn handle_placement(&self) -> Option<(Point, Vector)> {
        let handle = self.handle.as_ref()?;
        Some((
            handle.position(&self.polygon, self.open_direction)?,
            handle.hardware_shape_direction(&self.polygon, self.open_direction)?,
        ))
    }

    pub fn show_assist(&mut self) {
        self.assist_visible = true;
    }

    pub fn assist_visible(&self) -> bool {
        self.assist_visible
    }

    pub fn translate(&mut self, offset: Vector) {
        self.polygon = self.polygon.translate(offset);
        self.mul_manager.translate(offset);
        self.filler_manager.translate(offset);
        self.decoration.translate(offset);
        self.sash_manager.translate(offset);
    }
}

impl AssistHost for Sash {
    fn hide_assist(&mut self) {
        self.assist_visible = false;
    }
}

impl Host for Sash {
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

/// Sashes mounted in a frame or, for nested sashes, in another sash.
#[derive(Debug, Clone, Default)]
pub struct SashManager {
    sashes: Vec<Sash>,
}

impl SashManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `sash` and returns its id.
    pub fn add_sash(&mut self, sash: Sash) -> String {
        let id = sash.id.clone();
        self.sashes.push(sash);
        id
    }

    pub fn sashes(&self) -> &[Sash] {
        &self.sashes
    }

    /// Every sash at any depth, parents before children.
    pub fn all_sashes(&self) -> Vec<&Sash> {
        let mut out = Vec::new();
        for sash in &self.sashes {
            out.push(sash);
            out.extend(sash.sash_manager.all_sashes());
        }
        out
    }

    pub fn find_sash(&self, id: &str) -> Option<&Sash> {
        self.sashes.iter().find_map(|sash| {
            if sash.id == id {
                Some(sash)
            } else {
                sash.sash_manager.find_sash(id)
            }
        })
    }

    pub fn find_sash_mut(&mut self, id: &str) -> Option<&mut Sash> {
        self.sashes.iter_mut().find_map(|sash| {
            if sash.id == id {
                Some(sash)
            } else {
                sash.sash_manager.find_sash_mut(id)
            }
        })
    }

    pub fn translate(&mut self, offset: Vector) {
        for sash in &mut self.sashes {
            sash.translate(offset);
        }
    }
}
