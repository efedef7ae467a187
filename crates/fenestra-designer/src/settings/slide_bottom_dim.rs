//! Column size dimension of a sliding unit.

use fenestra_core::constants::EPS_LEN;
use fenestra_core::Edge;

use super::commit;
use crate::edge_finder::{Direction, EdgeFinder};
use crate::host::{AssistHost, View};
use crate::polygon::WinPolygon;

/// What [`SlideBottomDim`] edits.
pub trait SlideHost: AssistHost {
    fn column_count(&self) -> usize;

    fn column_polygon(&self, index: usize) -> Option<&WinPolygon>;

    /// Columns sit side by side when true, stacked otherwise.
    fn expand_horizontally(&self) -> bool;

    fn column_size(&self, index: usize) -> Option<f64>;

    /// Returns false when the size cannot be applied.
    fn set_column_size(&mut self, index: usize, size: f64) -> bool;

    fn recompute(&mut self);
}

/// Dimension line under (or beside) one slide column.
pub struct SlideBottomDim<'a> {
    host: &'a mut dyn SlideHost,
    view: &'a mut dyn View,
    index: usize,
}

impl<'a> SlideBottomDim<'a> {
    pub fn new(host: &'a mut dyn SlideHost, view: &'a mut dyn View, index: usize) -> Self {
        Self { host, view, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> Option<f64> {
        self.host.column_size(self.index)
    }

    pub fn set_value(&mut self, value: f64) {
        let Some(current) = self.value() else {
            return;
        };
        if !value.is_finite() || (value - current).abs() <= EPS_LEN {
            return;
        }
        if !self.host.set_column_size(self.index, value) {
            tracing::debug!("Slide column {} cannot take size {}", self.index, value);
            return;
        }
        commit(
            &mut *self.host,
            &mut *self.view,
            "SlideBottomDim",
            "value",
            |h| h.recompute(),
        );
    }

    /// Edge the dimension is drawn along: the column's bottom edge when the
    /// slide expands horizontally, its right edge when it expands vertically.
    pub fn locate(&self) -> Option<Edge> {
        let polygon = self.host.column_polygon(self.index)?;
        let direction = if self.host.expand_horizontally() {
            Direction::Down
        } else {
            Direction::Right
        };
        EdgeFinder::find(direction, polygon.edges()).copied()
    }
}
