//! Foundation types for Tessera.
//!
//! Shared by the text and layout crates: geometry, sizing and alignment
//! enums, the font metrics trait, configuration and error types.

pub mod config;
pub mod error;
pub mod font;
pub mod geometry;
pub mod sizing;

pub use config::{LayoutConfig, ScrollConfig};
pub use error::{Result, TesseraError};
pub use font::{FontMetrics, MonospaceFont};
pub use geometry::{AbsoluteOffsets, Dir, Point, Quadrant, Rect, Size};
pub use sizing::{CrossAlign, MainAlign, SizeKind, SizeSpec, TextAlign};
