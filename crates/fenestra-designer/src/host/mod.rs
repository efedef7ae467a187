//! Hosts and the collaborators editors talk to.
//!
//! Editors never reach for globals. They receive a [`View`] (draw layer,
//! checkpoint history, optional event bus) and the host object they edit,
//! both as trait objects so they can be swapped for recording doubles.

pub mod anti_theft;
pub mod ear_frame;
pub mod frame;
pub mod mullion;
pub mod sash;
pub mod shape_manager;
pub mod slide;
pub mod view;

pub use anti_theft::AntiTheft;
pub use ear_frame::EarFrame;
pub use frame::{Frame, FrameData, FrameManager, OpenToward};
pub use mullion::{Bead, Glass, MulManager, Mullion};
pub use sash::{Sash, SashManager};
pub use shape_manager::ShapeManager;
pub use slide::Slide;
pub use view::{DesignView, DrawLayer};

use fenestra_core::{EventBus, Momento};

use crate::managers::{DecorationBarManager, FillerManager};
use crate::polygon::WinPolygon;

/// A drawable layer that batches redraws.
pub trait Layer {
    fn batch_draw(&mut self);
}

/// What an editor needs from the view it edits in.
pub trait View {
    fn id(&self) -> &str;

    fn active_layer(&mut self) -> &mut dyn Layer;

    fn momento_manager(&mut self) -> &mut dyn Momento;

    fn refresh(&mut self) {}

    fn event_bus(&self) -> Option<&EventBus> {
        None
    }
}

/// Anything showing an interactive drag assist.
pub trait AssistHost {
    fn hide_assist(&mut self);
}

/// Frames and sashes: a polygon with panes and pane-level managers.
pub trait Host: AssistHost {
    fn id(&self) -> &str;

    fn polygon(&self) -> &WinPolygon;

    fn mul_manager(&self) -> &MulManager;

    fn filler_manager(&self) -> &FillerManager;

    fn filler_manager_mut(&mut self) -> &mut FillerManager;

    fn decoration(&self) -> &DecorationBarManager;

    fn decoration_mut(&mut self) -> &mut DecorationBarManager;

    /// Brings pane-level managers in line with the current glass set.
    fn update_poly(&mut self);
}
