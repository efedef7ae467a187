//! Per-feature managers owned by frames and sashes.

pub mod color;
pub mod decoration;
pub mod extra_dim;
pub mod filler;
pub mod filler_utils;

pub use color::{
    strip_query, ColorData, ColorManager, ColorSlot, ColorValue, FileTextureLoader, LoadOutcome,
    Texture, TextureError, TextureLoader, TokioTextureLoader,
};
pub use decoration::{
    DecorationBarChinese, DecorationBarManager, DecorationBarManagerData, DecorationShape,
    DecorationShapeData,
};
pub use extra_dim::{DimEnd, DimKind, ExtraDim, ExtraDimManager, FrameRelation};
pub use filler::{Filler, FillerManager};
pub use filler_utils::FillerUtils;
