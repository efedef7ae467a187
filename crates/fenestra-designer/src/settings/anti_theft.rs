//! Gap and handle width of anti-theft bars.

use fenestra_settings::EditSettings;

use super::{changed_enough, commit};
use crate::host::{AssistHost, View};

/// What [`AntiTheftSettings`] edits.
pub trait AntiTheftHost: AssistHost {
    fn gap(&self) -> f64;

    fn set_gap(&mut self, gap: f64);

    fn handle_width(&self) -> f64;

    fn set_handle_width(&mut self, width: f64);

    /// Neither value may drop below this.
    fn min_profile_size(&self) -> f64;

    /// Lays the bars out again from the current values.
    fn update_poly(&mut self);
}

pub struct AntiTheftSettings<'a> {
    host: &'a mut dyn AntiTheftHost,
    view: &'a mut dyn View,
    min_delta: f64,
}

impl<'a> AntiTheftSettings<'a> {
    pub fn new(host: &'a mut dyn AntiTheftHost, view: &'a mut dyn View) -> Self {
        Self::with_edit(host, view, &EditSettings::default())
    }

    pub fn with_edit(
        host: &'a mut dyn AntiTheftHost,
        view: &'a mut dyn View,
        edit: &EditSettings,
    ) -> Self {
        Self {
            host,
            view,
            min_delta: edit.min_delta,
        }
    }

    pub fn gap(&self) -> f64 {
        self.host.gap()
    }

    pub fn set_gap(&mut self, gap: f64) {
        if !self.accepts(self.host.gap(), gap) {
            tracing::debug!("Anti-theft gap {} ignored", gap);
            return;
        }
        self.host.set_gap(gap);
        commit(&mut *self.host, &mut *self.view, "AntiTheftSettings", "gap", |h| {
            h.update_poly()
        });
    }

    pub fn handle_width(&self) -> f64 {
        self.host.handle_width()
    }

    pub fn set_handle_width(&mut self, width: f64) {
        if !self.accepts(self.host.handle_width(), width) {
            tracing::debug!("Anti-theft handle width {} ignored", width);
            return;
        }
        self.host.set_handle_width(width);
        commit(&mut *self.host, &mut *self.view, "AntiTheftSettings", "handleW", |h| {
            h.update_poly()
        });
    }

    fn accepts(&self, current: f64, value: f64) -> bool {
        changed_enough(current, value, self.min_delta) && value >= self.host.min_profile_size()
    }
}
