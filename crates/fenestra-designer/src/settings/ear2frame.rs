//! Flip, base and pulling height of an ear frame.

use super::commit;
use crate::host::{AssistHost, View};

/// What [`Ear2FrameSettings`] edits.
pub trait Ear2FrameHost: AssistHost {
    fn flip(&self) -> bool;

    fn set_flip(&mut self, flip: bool);

    fn has_base(&self) -> bool;

    fn set_has_base(&mut self, has_base: bool);

    fn pulling_height(&self) -> f64;

    fn set_pulling_height(&mut self, height: f64);

    fn is_vertical(&self) -> bool;

    /// Rebuilds the outline and profile from the current values.
    fn recreated(&mut self);
}

pub struct Ear2FrameSettings<'a> {
    host: &'a mut dyn Ear2FrameHost,
    view: &'a mut dyn View,
}

impl<'a> Ear2FrameSettings<'a> {
    pub fn new(host: &'a mut dyn Ear2FrameHost, view: &'a mut dyn View) -> Self {
        Self { host, view }
    }

    pub fn flip(&self) -> bool {
        self.host.flip()
    }

    pub fn set_flip(&mut self, flip: bool) {
        if self.host.flip() == flip {
            return;
        }
        self.host.set_flip(flip);
        commit(&mut *self.host, &mut *self.view, "Ear2FrameSettings", "flip", |h| {
            h.recreated()
        });
    }

    pub fn has_base(&self) -> bool {
        self.host.has_base()
    }

    pub fn set_has_base(&mut self, has_base: bool) {
        if self.host.has_base() == has_base {
            return;
        }
        self.host.set_has_base(has_base);
        commit(&mut *self.host, &mut *self.view, "Ear2FrameSettings", "hasBase", |h| {
            h.recreated()
        });
    }

    pub fn pulling_height(&self) -> f64 {
        self.host.pulling_height()
    }

    /// Only a vertical ear without a base can be pulled.
    pub fn set_pulling_height(&mut self, height: f64) {
        let allowed = !self.host.has_base() && self.host.is_vertical() && height >= 0.0;
        if !allowed || height == self.host.pulling_height() {
            tracing::debug!("Pulling height {} ignored", height);
            return;
        }
        self.host.set_pulling_height(height);
        commit(
            &mut *self.host,
            &mut *self.view,
            "Ear2FrameSettings",
            "pullingHeight",
            |h| h.recreated(),
        );
    }
}
