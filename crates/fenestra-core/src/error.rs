//! Error handling for Fenestra
//!
//! Provides error types for every layer of the engine:
//! - Geometry errors (degenerate loops, bad indices)
//! - Shape errors (parametric edits, unknown shape types)
//! - Recognition errors (hand-drawn input that cannot form a frame)
//! - Persistence errors (saved JSON that cannot be wired back into a host)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a polygon loop cannot be built or indexed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Not enough vertices to form a closed loop
    #[error("Degenerate polygon: {vertices} vertices")]
    DegeneratePolygon {
        /// The number of vertices that were supplied.
        vertices: usize,
    },

    /// Consecutive edges do not share endpoints
    #[error("Polygon loop is not closed at edge {index}")]
    NotClosed {
        /// Index of the edge whose end does not meet the next start.
        index: usize,
    },

    /// Edge index outside of the polygon
    #[error("Edge index {index} out of range (polygon has {count} edges)")]
    EdgeIndexOutOfRange {
        /// The requested edge index.
        index: usize,
        /// The number of edges in the polygon.
        count: usize,
    },

    /// Vertex index outside of the polygon
    #[error("Vertex index {index} out of range (polygon has {count} vertices)")]
    VertexIndexOutOfRange {
        /// The requested vertex index.
        index: usize,
        /// The number of vertices in the polygon.
        count: usize,
    },
}

/// Shape error type
///
/// Represents errors raised by parametric polygon edits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Dimension type that the shape does not know how to edit
    #[error("Unsupported dimension type: {dim_type}")]
    UnsupportedDimension {
        /// The raw dimension type value.
        dim_type: i32,
    },

    /// Parameter outside of its valid range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Shape discriminator that is not registered
    #[error("Unknown shape type: {type_name}")]
    UnknownShapeType {
        /// The unknown `type` value.
        type_name: String,
    },

    /// Underlying geometry problem
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Recognition error type
///
/// Raised when a hand-drawn stroke set cannot be turned into a frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecognitionError {
    /// No input strokes at all
    #[error("No strokes to recognize")]
    EmptyInput,

    /// A stroke field could not be read as a number
    #[error("Invalid stroke {index}: {reason}")]
    InvalidStroke {
        /// Index of the stroke in the input list.
        index: usize,
        /// Why the stroke was rejected.
        reason: String,
    },

    /// Unification produced fewer than two closed shapes
    #[error("Could not recognize a valid frame: {found} closed shape(s), at least 2 required")]
    NotEnoughShapes {
        /// The largest number of strokes merged into one shape.
        found: usize,
    },
}

/// Persistence error type
///
/// Represents failures while loading saved manager state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// A serialized polygon id could not be parsed
    #[error("Invalid polygon id '{json}': {reason}")]
    InvalidPolyId {
        /// The raw JSON string.
        json: String,
        /// The parse failure.
        reason: String,
    },

    /// Malformed manager JSON
    #[error("Malformed data: {0}")]
    Malformed(String),
}

/// Main error type for Fenestra
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Shape error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Recognition error
    #[error(transparent)]
    Recognition(#[from] RecognitionError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a recognition error
    pub fn is_recognition_error(&self) -> bool {
        matches!(self, Error::Recognition(_))
    }

    /// Check if this is a shape or geometry error
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Error::Shape(_) | Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognition_error_display() {
        let err = RecognitionError::NotEnoughShapes { found: 1 };
        assert_eq!(
            err.to_string(),
            "Could not recognize a valid frame: 1 closed shape(s), at least 2 required"
        );
    }

    #[test]
    fn test_shape_error_from_geometry() {
        let err: ShapeError = GeometryError::EdgeIndexOutOfRange { index: 5, count: 3 }.into();
        assert_eq!(err.to_string(), "Edge index 5 out of range (polygon has 3 edges)");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = RecognitionError::EmptyInput.into();
        assert!(err.is_recognition_error());
        assert!(!err.is_shape_error());

        let err: Error = ShapeError::UnsupportedDimension { dim_type: 1 }.into();
        assert!(err.is_shape_error());

        let err = Error::other("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
