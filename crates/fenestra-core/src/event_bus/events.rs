//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};

/// Root event enum for all engine events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Shape lifecycle and settings requests
    Shape(ShapeEvent),
    /// Committed property edits
    Edit(EditEvent),
    /// Undo/redo checkpoints
    History(HistoryEvent),
    /// Error and diagnostic events
    Error(ErrorEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Shape(_) => EventCategory::Shape,
            AppEvent::Edit(_) => EventCategory::Edit,
            AppEvent::History(_) => EventCategory::History,
            AppEvent::Error(_) => EventCategory::Error,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Shape(e) => e.description(),
            AppEvent::Edit(e) => e.description(),
            AppEvent::History(e) => e.description(),
            AppEvent::Error(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Shape events.
    Shape,
    /// Edit events.
    Edit,
    /// History events.
    History,
    /// Error events.
    Error,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Shape => write!(f, "Shape"),
            EventCategory::Edit => write!(f, "Edit"),
            EventCategory::History => write!(f, "History"),
            EventCategory::Error => write!(f, "Error"),
        }
    }
}

/// Shape-related events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeEvent {
    /// A shape asks its view to open the settings panel.
    OpenSettings {
        /// Id of the view that should show the panel.
        view: String,
        /// Shape type discriminator, e.g. `IsoscelesTriangle`.
        shape: String,
    },
    /// A frame was added to the shape manager.
    FrameAdded {
        /// Frame id.
        frame_id: String,
    },
    /// A mullion line was added to a frame.
    MullionAdded {
        /// Frame id.
        frame_id: String,
    },
    /// Hand-drawn input was turned into a frame.
    Recognized {
        /// Number of splitter lines found.
        splitters: usize,
    },
}

impl ShapeEvent {
    fn description(&self) -> String {
        match self {
            ShapeEvent::OpenSettings { view, shape } => {
                format!("Open settings for {} in view {}", shape, view)
            }
            ShapeEvent::FrameAdded { frame_id } => format!("Frame {} added", frame_id),
            ShapeEvent::MullionAdded { frame_id } => format!("Mullion added to {}", frame_id),
            ShapeEvent::Recognized { splitters } => {
                format!("Recognized frame with {} splitter(s)", splitters)
            }
        }
    }
}

/// Property edit events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditEvent {
    /// A setter passed its guard and ran the full edit sequence.
    Committed {
        /// Settings object that produced the edit.
        source: String,
        /// Property name.
        property: String,
    },
}

impl EditEvent {
    fn description(&self) -> String {
        match self {
            EditEvent::Committed { source, property } => {
                format!("{}.{} committed", source, property)
            }
        }
    }
}

/// History events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// A checkpoint was recorded.
    CheckpointRecorded {
        /// Sequence number of the checkpoint.
        seq: u64,
    },
    /// The cursor moved back one checkpoint.
    Undone {
        /// Sequence number now current.
        seq: u64,
    },
    /// The cursor moved forward one checkpoint.
    Redone {
        /// Sequence number now current.
        seq: u64,
    },
}

impl HistoryEvent {
    fn description(&self) -> String {
        match self {
            HistoryEvent::CheckpointRecorded { seq } => format!("Checkpoint #{}", seq),
            HistoryEvent::Undone { seq } => format!("Undo to #{}", seq),
            HistoryEvent::Redone { seq } => format!("Redo to #{}", seq),
        }
    }
}

/// Error and diagnostic events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ErrorEvent {
    /// Warning (non-blocking).
    Warning {
        /// Warning code identifier.
        code: String,
        /// Human-readable warning message.
        message: String,
    },
    /// Error (may be recoverable).
    Error {
        /// Error code identifier.
        code: String,
        /// Human-readable error message.
        message: String,
    },
}

impl ErrorEvent {
    fn description(&self) -> String {
        match self {
            ErrorEvent::Warning { code, message } => {
                format!("Warning [{}]: {}", code, message)
            }
            ErrorEvent::Error { code, message } => {
                format!("Error [{}]: {}", code, message)
            }
        }
    }
}
