//! Numeric tolerances shared across the engine.

/// Distance under which two points are considered coincident.
pub const EPS_LEN: f64 = 1e-6;

/// Angular tolerance in radians.
pub const EPS_ANG: f64 = 1e-9;

/// Area under which a face is treated as degenerate.
pub const EPS_AREA: f64 = 1e-6;
