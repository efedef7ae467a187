//! # Fenestra Core
//!
//! Core types shared by the Fenestra crates.
//! Provides the 2D geometry primitives, the error taxonomy, the event bus,
//! common type aliases and the checkpoint history used for undo/redo.

pub mod constants;
pub mod error;
pub mod event_bus;
pub mod geometry;
pub mod history;
pub mod types;

pub use error::{
    Error, GeometryError, PersistenceError, RecognitionError, Result, ShapeError,
};

pub use event_bus::{
    AppEvent, EditEvent, ErrorEvent, EventBus, EventBusConfig, EventBusError, EventCategory,
    EventFilter,
    HistoryEvent, ShapeEvent, SubscriptionId,
};

pub use geometry::{Arc, Bounds, Edge, Line, Point, Segment, Vector};

pub use history::{Checkpoint, Momento, MomentoManager};

pub use types::{thread_safe_rw, DataCallback, ThreadSafeRw};
