//! A headless view: counts draws and records checkpoints.

use fenestra_core::{EventBus, Momento, MomentoManager};
use std::sync::Arc;

use super::{Layer, View};

#[derive(Debug, Default)]
pub struct DrawLayer {
    draws: usize,
}

impl DrawLayer {
    pub fn draw_count(&self) -> usize {
        self.draws
    }
}

impl Layer for DrawLayer {
    fn batch_draw(&mut self) {
        self.draws += 1;
        tracing::trace!("Batch draw #{}", self.draws);
    }
}

#[derive(Debug)]
pub struct DesignView {
    id: String,
    layer: DrawLayer,
    momento: MomentoManager,
    event_bus: Option<Arc<EventBus>>,
    refreshes: usize,
}

impl DesignView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layer: DrawLayer::default(),
            momento: MomentoManager::new(),
            event_bus: None,
            refreshes: 0,
        }
    }

    pub fn with_momento(mut self, momento: MomentoManager) -> Self {
        self.momento = momento;
        self
    }

    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn draw_count(&self) -> usize {
        self.layer.draw_count()
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    pub fn momento(&self) -> &MomentoManager {
        &self.momento
    }

    pub fn momento_mut(&mut self) -> &mut MomentoManager {
        &mut self.momento
    }
}

impl View for DesignView {
    fn id(&self) -> &str {
        &self.id
    }

    fn active_layer(&mut self) -> &mut dyn Layer {
        &mut self.layer
    }

    fn momento_manager(&mut self) -> &mut dyn Momento {
        &mut self.momento
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }

    fn event_bus(&self) -> Option<&EventBus> {
        self.event_bus.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_counts() {
        let mut view = DesignView::new("main");
        view.active_layer().batch_draw();
        view.momento_manager().check_point();
        view.refresh();
        assert_eq!(view.draw_count(), 1);
        assert_eq!(view.momento().checkpoint_count(), 1);
        assert_eq!(view.refresh_count(), 1);
        assert!(view.event_bus().is_none());
    }
}
