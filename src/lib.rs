//! # Fenestra
//!
//! Parametric window and door configuration engine:
//! - Polygons with stable pane identities, split by mullions
//! - Isosceles triangle and rectangle shapes with drag and dimension edits
//! - Handles and locks positioned from their hosting edge
//! - Decoration bars, shade fillers, extra dimensions and colors per pane
//! - Property editors that redraw and checkpoint on every accepted change
//! - Recognition of hand-drawn sketches into frames and mullions
//!
//! ## Architecture
//!
//! Fenestra is organized as a workspace with multiple crates:
//!
//! 1. **fenestra-core** - Geometry, errors, events, checkpoint history
//! 2. **fenestra-settings** - Engine configuration and validation
//! 3. **fenestra-designer** - Shapes, hosts, hardware, managers, editors, recognition
//! 4. **fenestra** - This facade, re-exporting the crates above

pub use fenestra_core as core;
pub use fenestra_designer as designer;
pub use fenestra_settings as settings;

pub use fenestra_core::{
    AppEvent, Bounds, EditEvent, Error, EventBus, EventBusConfig, GeometryError, Line, Momento,
    MomentoManager, Point, RecognitionError, Result, Segment, ShapeError, ShapeEvent, Vector,
};

pub use fenestra_designer::{
    AntiTheft, AntiTheftSettings, ColorManager, DecorationBarManager, DesignView, Direction,
    EarFrame, Ear2FrameSettings, EdgeFinder, ExtraDim, ExtraDimManager, FillerUtils, Frame,
    FrameSettings, HandDrawnRecognition, Handle, HandleOnCircle, IsoscelesTrianglePoly,
    ParametricShape, PolyId, PolyShape, RawRect, RecognitionOutcome, RectanglePoly, ShapeManager,
    Slide, SlideBottomDim, View, WinPolygon,
};

pub use fenestra_settings::{Config, ProfileSettings, RecognitionSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, INFO when unset
///
/// Fails when a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Fenestra {} logging initialized", VERSION);
    Ok(())
}
