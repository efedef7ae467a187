//! Sliding units split into side-by-side or stacked columns.

use fenestra_core::constants::EPS_LEN;
use fenestra_core::Line;
use fenestra_settings::ProfileSettings;
use uuid::Uuid;

use super::AssistHost;
use crate::polygon::WinPolygon;
use crate::settings::SlideHost;

/// A sliding unit. Columns run left to right when the slide expands
/// horizontally and top to bottom otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    id: String,
    polygon: WinPolygon,
    expand_horizontally: bool,
    sizes: Vec<f64>,
    columns: Vec<WinPolygon>,
    min_size: f64,
    assist_visible: bool,
}

impl Slide {
    /// `count` equal columns across `polygon`.
    pub fn new(
        polygon: WinPolygon,
        count: usize,
        expand_horizontally: bool,
        profile: &ProfileSettings,
    ) -> Self {
        let count = count.max(1);
        let extent = if expand_horizontally {
            polygon.width()
        } else {
            polygon.height()
        };
        let mut slide = Self {
            id: Uuid::new_v4().to_string(),
            polygon,
            expand_horizontally,
            sizes: vec![extent / count as f64; count],
            columns: Vec::new(),
            min_size: profile.min_profile_size,
            assist_visible: false,
        };
        slide.rebuild_columns();
        slide
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn polygon(&self) -> &WinPolygon {
        &self.polygon
    }

    pub fn columns(&self) -> &[WinPolygon] {
        &self.columns
    }

    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    pub fn show_assist(&mut self) {
        self.assist_visible = true;
    }

    pub fn assist_visible(&self) -> bool {
        self.assist_visible
    }

    fn rebuild_columns(&mut self) {
        let bounds = self.polygon.bounds();
        let mut rest = self.polygon.clone();
        let mut columns = Vec::with_capacity(self.sizes.len());
        let mut cursor = if self.expand_horizontally {
            bounds.min_x
        } else {
            bounds.max_y
        };
        for size in &self.sizes[..self.sizes.len().saturating_sub(1)] {
            let line = if self.expand_horizontally {
                cursor += size;
                Line::vertical(cursor)
            } else {
                cursor -= size;
                Line::horizontal(cursor)
            };
            // left of a vertical cut is the near side, left of a horizontal cut the upper one
            match rest.split_by_line(&line) {
                Some((column, remainder)) => {
                    columns.push(column);
                    rest = remainder;
                }
                None => {
                    tracing::warn!("Slide {} column cut at {} misses the outline", self.id, cursor);
                    break;
                }
            }
        }
        columns.push(rest);
        self.columns = columns;
    }
}

impl AssistHost for Slide {
    fn hide_assist(&mut self) {
        self.assist_visible = false;
    }
}

impl SlideHost for Slide {
    fn column_count(&self) -> usize {
        self.sizes.len()
    }

    fn column_polygon(&self, index: usize) -> Option<&WinPolygon> {
        self.columns.get(index)
    }

    fn expand_horizontally(&self) -> bool {
        self.expand_horizontally
    }

    fn column_size(&self, index: usize) -> Option<f64> {
        self.sizes.get(index).copied()
    }

    /// Resizes a column against its next neighbour, or the previous one for
    /// the last column. Both must stay above the profile minimum.
    fn set_column_size(&mut self, index: usize, size: f64) -> bool {
        let Some(current) = self.column_size(index) else {
            return false;
        };
        let neighbour = if index + 1 < self.sizes.len() {
            index + 1
        } else if index > 0 {
            index - 1
        } else {
            return false;
        };
        let total = current + self.sizes[neighbour];
        if size < self.min_size || total - size < self.min_size - EPS_LEN {
            return false;
        }
        self.sizes[index] = size;
        self.sizes[neighbour] = total - size;
        true
    }

    fn recompute(&mut self) {
        self.rebuild_columns();
    }
}
