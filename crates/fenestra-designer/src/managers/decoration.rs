//! Decorative glazing bars per pane.
//!
//! Each entry is keyed by the [`PolyId`] of the pane it decorates and holds
//! the bar definition plus the bars generated inside the pane. Entries follow
//! the host's glass set: `update_poly` swaps in the current polygons and
//! prunes panes that no longer exist.

use fenestra_core::{Error, Line, PersistenceError, Point, Segment, Vector};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::host::Glass;
use crate::poly_id::PolyId;
use crate::polygon::WinPolygon;

/// Grid of bars, `rows` x `cols` panes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationBarChinese {
    pub rows: u32,
    pub cols: u32,
    pub bar_width: f64,
}

impl Default for DecorationBarChinese {
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 2,
            bar_width: 20.0,
        }
    }
}

impl DecorationBarChinese {
    /// Center lines of the bars inside `polygon`, clipped to it.
    pub fn layout(&self, polygon: &WinPolygon) -> Vec<Segment> {
        let b = polygon.bounds();
        let mut bars = Vec::new();
        for i in 1..self.cols {
            let x = b.min_x + b.width() * f64::from(i) / f64::from(self.cols);
            bars.extend(polygon.clip_line(&Line::vertical(x)));
        }
        for j in 1..self.rows {
            let y = b.min_y + b.height() * f64::from(j) / f64::from(self.rows);
            bars.extend(polygon.clip_line(&Line::horizontal(y)));
        }
        bars
    }
}

/// Decoration attached to one pane.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationShape {
    poly_id: PolyId,
    polygon: WinPolygon,
    definition: DecorationBarChinese,
    bars: Vec<Segment>,
}

impl DecorationShape {
    pub fn new(polygon: WinPolygon, definition: DecorationBarChinese) -> Self {
        let bars = definition.layout(&polygon);
        Self {
            poly_id: polygon.id.clone(),
            polygon,
            definition,
            bars,
        }
    }

    pub fn poly_id(&self) -> &PolyId {
        &self.poly_id
    }

    pub fn polygon(&self) -> &WinPolygon {
        &self.polygon
    }

    pub fn definition(&self) -> &DecorationBarChinese {
        &self.definition
    }

    pub fn bars(&self) -> &[Segment] {
        &self.bars
    }

    /// Replaces the pane outline and lays the bars out again.
    pub fn set_polygon(&mut self, polygon: WinPolygon) {
        self.bars = self.definition.layout(&polygon);
        self.polygon = polygon;
    }

    pub fn set_definition(&mut self, definition: DecorationBarChinese) {
        self.definition = definition;
        self.bars = definition.layout(&self.polygon);
    }

    /// Drops the generated bars, keeping the definition.
    pub fn clear_bar(&mut self) {
        self.bars.clear();
    }

    pub fn translate(&mut self, offset: Vector) {
        self.polygon = self.polygon.translate(offset);
        for bar in &mut self.bars {
            *bar = bar.translate(offset);
        }
    }

    fn to_data(&self) -> DecorationShapeData {
        DecorationShapeData {
            definition: self.definition,
            polygon: self.polygon.clone(),
        }
    }
}

/// Saved form of a [`DecorationShape`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorationShapeData {
    pub definition: DecorationBarChinese,
    pub polygon: WinPolygon,
}

/// Saved form of a [`DecorationBarManager`]: `{ "bars": [[polyIdJson, shape], ..] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorationBarManagerData {
    pub bars: Vec<(String, DecorationShapeData)>,
}

#[derive(Debug, Clone, Default)]
pub struct DecorationBarManager {
    decoration_bars: HashMap<PolyId, DecorationShape>,
}

impl DecorationBarManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the decoration of `shape.poly_id()`.
    pub fn add_decoration_bar(&mut self, shape: DecorationShape) {
        tracing::debug!("Decoration attached to {}", shape.poly_id);
        self.decoration_bars.insert(shape.poly_id.clone(), shape);
    }

    pub fn get_decoration_bar(&self, poly_id: &PolyId) -> Option<&DecorationShape> {
        self.decoration_bars.get(poly_id)
    }

    pub fn get_decoration_bar_mut(&mut self, poly_id: &PolyId) -> Option<&mut DecorationShape> {
        self.decoration_bars.get_mut(poly_id)
    }

    pub fn len(&self) -> usize {
        self.decoration_bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoration_bars.is_empty()
    }

    /// Follows the host's current panes. A pane with a bead is decorated
    /// inside the bead.
    pub fn update_poly(&mut self, glasses: &[Glass]) {
        let live: HashMap<&PolyId, &WinPolygon> = glasses
            .iter()
            .map(|g| (&g.polygon.id, g.live_polygon()))
            .collect();

        let mut stale = Vec::new();
        for (id, shape) in self.decoration_bars.iter_mut() {
            match live.get(id) {
                Some(polygon) => shape.set_polygon((*polygon).clone()),
                None => stale.push(id.clone()),
            }
        }
        for id in stale {
            self.remove_bar(&id, true);
        }
    }

    /// Clears the bars of `poly_id`; the entry itself is only dropped when
    /// `delete_from_map` is set.
    pub fn remove_bar(&mut self, poly_id: &PolyId, delete_from_map: bool) {
        if let Some(shape) = self.decoration_bars.get_mut(poly_id) {
            shape.clear_bar();
        }
        if delete_from_map && self.decoration_bars.remove(poly_id).is_some() {
            tracing::debug!("Decoration removed from {}", poly_id);
        }
    }

    pub fn translate(&mut self, offset: Vector) {
        for shape in self.decoration_bars.values_mut() {
            shape.translate(offset);
        }
    }

    pub fn to_data(&self) -> DecorationBarManagerData {
        let mut bars: Vec<(String, DecorationShapeData)> = self
            .decoration_bars
            .iter()
            .map(|(id, shape)| (id.to_json(), shape.to_data()))
            .collect();
        bars.sort_by(|a, b| a.0.cmp(&b.0));
        DecorationBarManagerData { bars }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, Error> {
        Ok(serde_json::to_value(self.to_data())?)
    }

    /// Loads saved decorations and wires each one to the live pane with the
    /// same id. Entries whose pane is gone are skipped.
    pub fn deserialize(
        &mut self,
        json: &serde_json::Value,
        glasses: &[Glass],
    ) -> Result<(), Error> {
        let data: DecorationBarManagerData = serde_json::from_value(json.clone())
            .map_err(|e| PersistenceError::Malformed(e.to_string()))?;

        self.decoration_bars.clear();
        for (key, saved) in data.bars {
            let id = PolyId::deserialize(&key)?;
            match glasses.iter().find(|g| g.polygon.id == id) {
                Some(glass) => {
                    let shape = DecorationShape::new(glass.live_polygon().clone(), saved.definition);
                    self.decoration_bars.insert(id, shape);
                }
                None => tracing::debug!("No pane {} for saved decoration", id),
            }
        }
        Ok(())
    }

    /// Whether `p` lies on any bar of any decorated pane.
    pub fn hit_test(&self, p: &Point) -> Option<&PolyId> {
        self.decoration_bars
            .iter()
            .find(|(_, shape)| shape.bars.iter().any(|bar| bar.contains(p)))
            .map(|(id, _)| id)
    }
}
