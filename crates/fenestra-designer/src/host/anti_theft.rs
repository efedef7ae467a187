//! Anti-theft bars across an opening.

use fenestra_core::constants::EPS_LEN;
use fenestra_core::{Line, Segment};
use fenestra_settings::ProfileSettings;

use super::AssistHost;
use crate::polygon::WinPolygon;
use crate::settings::AntiTheftHost;

/// Vertical security bars laid over a host's opening.
///
/// The first bar sits `handle_width` in from the left so the handle stays
/// reachable; the rest follow every `gap` until the right side.
#[derive(Debug, Clone, PartialEq)]
pub struct AntiTheft {
    polygon: WinPolygon,
    gap: f64,
    handle_width: f64,
    min_profile_size: f64,
    bars: Vec<Segment>,
    rebuilds: usize,
    assist_visible: bool,
}

impl AntiTheft {
    pub fn new(polygon: WinPolygon, gap: f64, handle_width: f64, profile: &ProfileSettings) -> Self {
        let mut anti_theft = Self {
            polygon,
            gap,
            handle_width,
            min_profile_size: profile.min_profile_size,
            bars: Vec::new(),
            rebuilds: 0,
            assist_visible: false,
        };
        anti_theft.rebuild_bars();
        anti_theft
    }

    pub fn polygon(&self) -> &WinPolygon {
        &self.polygon
    }

    pub fn set_polygon(&mut self, polygon: WinPolygon) {
        self.polygon = polygon;
        self.rebuild_bars();
    }

    pub fn bars(&self) -> &[Segment] {
        &self.bars
    }

    /// How many times the bars were laid out.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    pub fn show_assist(&mut self) {
        self.assist_visible = true;
    }

    pub fn assist_visible(&self) -> bool {
        self.assist_visible
    }

    fn rebuild_bars(&mut self) {
        self.rebuilds += 1;
        self.bars.clear();
        if self.gap <= EPS_LEN {
            return;
        }
        let bounds = self.polygon.bounds();
        let mut x = bounds.min_x + self.handle_width;
        while x < bounds.max_x - EPS_LEN {
            self.bars.extend(self.polygon.clip_line(&Line::vertical(x)));
            x += self.gap;
        }
        tracing::trace!("Anti-theft laid out {} bar(s)", self.bars.len());
    }
}

impl AssistHost for AntiTheft {
    fn hide_assist(&mut self) {
        self.assist_visible = false;
    }
}

impl AntiTheftHost for AntiTheft {
    fn gap(&self) -> f64 {
        self.gap
    }

    fn set_gap(&mut self, gap: f64) {
        self.gap = gap;
    }

    fn handle_width(&self) -> f64 {
        self.handle_width
    }

    fn set_handle_width(&mut self, width: f64) {
        self.handle_width = width;
    }

    fn min_profile_size(&self) -> f64 {
        self.min_profile_size
    }

    fn update_poly(&mut self) {
        self.rebuild_bars();
    }
}
