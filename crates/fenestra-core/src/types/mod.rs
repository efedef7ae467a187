//! Aliases for state shared with background loaders.

pub mod aliases;

pub use aliases::*;
