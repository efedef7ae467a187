//! # Fenestra Designer
//!
//! Parametric window and door modelling: polygons with stable identities,
//! the hosts that own them, hardware placement, pane-level managers,
//! property editors and recognition of hand-drawn sketches.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **WinPolygon**: closed loop of segments and arcs, edited by returning new values
//! - **Parametric shapes**: isosceles triangle and rectangle with drag and dimension edits
//! - **EdgeFinder**: which edge of a polygon faces a given side
//!
//! ### Hosts
//! - **Frame / Sash**: outline, mullions, glass panes, fillers, decoration bars, colors
//! - **ShapeManager**: every frame on the board
//! - **AntiTheft / EarFrame / Slide**: special-purpose hosts edited through settings
//!
//! ### Editors
//! - **Settings**: guard, mutate, recompute, hide assist, redraw, checkpoint
//! - **HandDrawnRecognition**: strokes to frame and mullions
//!
//! ## Architecture
//!
//! ```text
//! ShapeManager
//!   └── Frame (outline, profile)
//!         ├── MulManager (mullions → glasses → beads)
//!         ├── FillerManager / DecorationBarManager (per glass)
//!         ├── ColorManager (shared slots, async textures)
//!         └── SashManager
//!               └── Sash (handle, nested panes)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fenestra_designer::{HandDrawnRecognition, RawRect, ShapeManager};
//!
//! let mut shapes = ShapeManager::new();
//! let outcome = HandDrawnRecognition::default().recognize(
//!     &[
//!         RawRect::new(0.0, 0.0, 200.0, 200.0),
//!         RawRect::new(0.0, 100.0, 200.0, 1.0),
//!     ],
//!     &mut shapes,
//! )?;
//! assert_eq!(outcome.splitters.len(), 1);
//! ```

pub mod edge_finder;
pub mod hardware;
pub mod host;
pub mod managers;
pub mod poly_id;
pub mod polygon;
pub mod recognition;
pub mod settings;

pub use edge_finder::{Direction, EdgeFinder};
pub use hardware::{
    fix_data, DockSide, Handle, HandleOnCircle, HardwareConfig, HardwareData, HardwareShape,
    OpenDirection,
};
pub use host::{
    AntiTheft, AssistHost, Bead, DesignView, DrawLayer, EarFrame, Frame, FrameData, FrameManager,
    Glass, Host, Layer, MulManager, Mullion, OpenToward, Sash, SashManager, ShapeManager, Slide, View,
};
pub use managers::{
    ColorData, ColorManager, ColorSlot, ColorValue, DecorationBarChinese, DecorationBarManager,
    DecorationShape, ExtraDim, ExtraDimManager, FileTextureLoader, Filler, FillerManager,
    FillerUtils, FrameRelation, LoadOutcome, Texture, TextureError, TextureLoader,
    TokioTextureLoader,
};
pub use poly_id::PolyId;
pub use polygon::{
    DimType, IsoscelesTrianglePoly, ParametricShape, PolyShape, RectanglePoly, WinPolygon,
};
pub use recognition::{HandDrawnRecognition, RawRect, RecognitionOutcome};
pub use settings::{
    commit, AntiTheftHost, AntiTheftSettings, Ear2FrameHost, Ear2FrameSettings, FrameSettings,
    SlideBottomDim, SlideHost,
};
