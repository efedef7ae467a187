//! 2D geometry primitives
//!
//! Immutable value types: every transform returns a new value.

mod arc;
mod bounds;
mod edge;
mod line;
mod point;
mod segment;

pub use arc::Arc;
pub use bounds::Bounds;
pub use edge::Edge;
pub use line::Line;
pub use point::{Point, Vector};
pub use segment::Segment;
