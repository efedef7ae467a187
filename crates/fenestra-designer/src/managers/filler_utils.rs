//! Routing of shade filler edits to the frame or sash that owns the pane.

use crate::host::{Frame, Host};
use crate::managers::Filler;
use crate::poly_id::PolyId;

pub struct FillerUtils;

impl FillerUtils {
    /// The frame with `id`, or a sash with `id` nested anywhere inside one.
    pub fn get_host_frame<'a>(frames: &'a mut [Frame], id: &str) -> Option<&'a mut dyn Host> {
        frames.iter_mut().find_map(|frame| {
            if frame.id() == id {
                Some(frame as &mut dyn Host)
            } else {
                frame
                    .sash_manager
                    .find_sash_mut(id)
                    .map(|sash| sash as &mut dyn Host)
            }
        })
    }

    /// Sets the slat count of the filler on `serialized_poly_id` in host
    /// `frame_id`. Unknown hosts, unreadable ids and panes without a
    /// filler leave everything as it was and return `None`.
    pub fn change_shade_count<'a>(
        frames: &'a mut [Frame],
        frame_id: &str,
        serialized_poly_id: &str,
        shade_count: u32,
    ) -> Option<&'a Filler> {
        let Some(host) = Self::get_host_frame(frames, frame_id) else {
            tracing::debug!("No host {} for shade count change", frame_id);
            return None;
        };
        let poly_id = PolyId::deserialize(serialized_poly_id).ok()?;
        host.filler_manager_mut()
            .change_shade_filler_count(&poly_id, shade_count)
    }
}
