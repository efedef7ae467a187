//! Checkpoint history for undo/redo.
//!
//! Editors record a checkpoint after every committed change. The newest
//! checkpoint on the undo stack is the current state; undo moves it to the
//! redo stack and hands back the one below it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::event_bus::{AppEvent, EventBus, HistoryEvent};

/// Anything that can record an undo checkpoint.
pub trait Momento {
    fn check_point(&mut self);
}

/// One recorded state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub seq: u64,
    pub taken_at: DateTime<Utc>,
    /// Serialized document state, when a snapshot source is attached.
    pub snapshot: Option<serde_json::Value>,
}

type SnapshotSource = Box<dyn Fn() -> serde_json::Value>;

/// Undo/redo stacks of checkpoints with a bounded depth.
pub struct MomentoManager {
    undo_stack: Vec<Checkpoint>,
    redo_stack: Vec<Checkpoint>,
    max_depth: usize,
    next_seq: u64,
    source: Option<SnapshotSource>,
    event_bus: Option<Arc<EventBus>>,
}

impl MomentoManager {
    pub fn new() -> Self {
        Self::with_depth(100)
    }

    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
            next_seq: 1,
            source: None,
            event_bus: None,
        }
    }

    /// Capture a snapshot with `source` at every checkpoint.
    pub fn with_snapshot_source<F>(mut self, source: F) -> Self
    where
        F: Fn() -> serde_json::Value + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Step back one checkpoint. Returns the checkpoint that is now current.
    pub fn undo(&mut self) -> Option<&Checkpoint> {
        if self.undo_stack.len() < 2 {
            return None;
        }
        let top = self.undo_stack.pop()?;
        self.redo_stack.push(top);
        let current = self.undo_stack.last()?;
        tracing::debug!("Undo to checkpoint #{}", current.seq);
        if let Some(bus) = &self.event_bus {
            bus.notify(AppEvent::History(HistoryEvent::Undone { seq: current.seq }));
        }
        Some(current)
    }

    /// Re-apply the last undone checkpoint.
    pub fn redo(&mut self) -> Option<&Checkpoint> {
        let next = self.redo_stack.pop()?;
        tracing::debug!("Redo to checkpoint #{}", next.seq);
        if let Some(bus) = &self.event_bus {
            bus.notify(AppEvent::History(HistoryEvent::Redone { seq: next.seq }));
        }
        self.undo_stack.push(next);
        self.undo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn current(&self) -> Option<&Checkpoint> {
        self.undo_stack.last()
    }

    pub fn checkpoint_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Momento for MomentoManager {
    fn check_point(&mut self) {
        let checkpoint = Checkpoint {
            seq: self.next_seq,
            taken_at: Utc::now(),
            snapshot: self.source.as_ref().map(|source| source()),
        };
        self.next_seq += 1;

        self.redo_stack.clear();
        self.undo_stack.push(checkpoint);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }

        let seq = self.next_seq - 1;
        tracing::debug!("Checkpoint #{} recorded", seq);
        if let Some(bus) = &self.event_bus {
            bus.notify(AppEvent::History(HistoryEvent::CheckpointRecorded { seq }));
        }
    }
}

impl Default for MomentoManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MomentoManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MomentoManager")
            .field("undo", &self.undo_stack.len())
            .field("redo", &self.redo_stack.len())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
