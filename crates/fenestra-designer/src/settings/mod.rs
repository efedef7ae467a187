//! Property editors for hosts.
//!
//! Every setter runs the same sequence: guard, mutate, recompute, hide the
//! drag assist, redraw, checkpoint. A write that fails its guard leaves the
//! host, the layer and the history untouched. [`commit`] runs everything
//! after the mutation so the order cannot drift between editors.

pub mod anti_theft;
pub mod ear2frame;
pub mod frame_settings;
pub mod slide_bottom_dim;

pub use anti_theft::{AntiTheftHost, AntiTheftSettings};
pub use ear2frame::{Ear2FrameHost, Ear2FrameSettings};
pub use frame_settings::FrameSettings;
pub use slide_bottom_dim::{SlideBottomDim, SlideHost};

use fenestra_core::{AppEvent, EditEvent};

use crate::host::{AssistHost, View};

/// Finishes an edit whose state change has already been applied.
pub fn commit<H: AssistHost + ?Sized>(
    host: &mut H,
    view: &mut dyn View,
    source: &str,
    property: &str,
    recompute: impl FnOnce(&mut H),
) {
    recompute(host);
    host.hide_assist();
    view.active_layer().batch_draw();
    view.momento_manager().check_point();
    tracing::debug!("{}.{} committed", source, property);
    if let Some(bus) = view.event_bus() {
        bus.notify(AppEvent::Edit(EditEvent::Committed {
            source: source.to_string(),
            property: property.to_string(),
        }));
    }
}

/// Whether `value` moves far enough from `current` to count as an edit.
pub(crate) fn changed_enough(current: f64, value: f64, min_delta: f64) -> bool {
    value.is_finite() && (value - current).abs() >= min_delta
}
