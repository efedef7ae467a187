//! Shade fillers: evenly spaced slats inside a pane.

use fenestra_core::{Line, Segment, Vector};
use std::collections::HashMap;

use crate::host::Glass;
use crate::poly_id::PolyId;
use crate::polygon::WinPolygon;

#[derive(Debug, Clone, PartialEq)]
pub struct Filler {
    polygon: WinPolygon,
    count: u32,
    slats: Vec<Segment>,
}

impl Filler {
    pub fn new(polygon: WinPolygon, count: u32) -> Self {
        let slats = layout_slats(&polygon, count);
        Self {
            polygon,
            count,
            slats,
        }
    }

    pub fn poly_id(&self) -> &PolyId {
        &self.polygon.id
    }

    pub fn polygon(&self) -> &WinPolygon {
        &self.polygon
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn slats(&self) -> &[Segment] {
        &self.slats
    }

    fn set_count(&mut self, count: u32) {
        self.count = count;
        self.slats = layout_slats(&self.polygon, count);
    }

    fn set_polygon(&mut self, polygon: WinPolygon) {
        self.slats = layout_slats(&polygon, self.count);
        self.polygon = polygon;
    }
}

/// `count` horizontal slats splitting the pane into `count + 1` bands.
fn layout_slats(polygon: &WinPolygon, count: u32) -> Vec<Segment> {
    let b = polygon.bounds();
    let step = b.height() / f64::from(count + 1);
    (1..=count)
        .flat_map(|i| polygon.clip_line(&Line::horizontal(b.min_y + step * f64::from(i))))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct FillerManager {
    fillers: HashMap<PolyId, Filler>,
}

impl FillerManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filler(&mut self, polygon: WinPolygon, count: u32) {
        self.fillers.insert(polygon.id.clone(), Filler::new(polygon, count));
    }

    pub fn get_filler(&self, poly_id: &PolyId) -> Option<&Filler> {
        self.fillers.get(poly_id)
    }

    pub fn fillers(&self) -> impl Iterator<Item = &Filler> {
        self.fillers.values()
    }

    /// Changes the slat count of the filler on `poly_id`. `None` when the
    /// pane has no filler.
    pub fn change_shade_filler_count(&mut self, poly_id: &PolyId, count: u32) -> Option<&Filler> {
        let filler = self.fillers.get_mut(poly_id)?;
        filler.set_count(count);
        Some(filler)
    }

    /// Refreshes fillers to the host's current panes, dropping orphans.
    pub fn update_poly(&mut self, glasses: &[Glass]) {
        self.fillers.retain(|id, filler| {
            match glasses.iter().find(|g| &g.polygon.id == id) {
                Some(glass) => {
                    filler.set_polygon(glass.live_polygon().clone());
                    true
                }
                None => false,
            }
        });
    }

    pub fn translate(&mut self, offset: Vector) {
        for filler in self.fillers.values_mut() {
            let moved = filler.polygon.translate(offset);
            filler.set_polygon(moved);
        }
    }
}
