//! Two-pass box layout for Tessera.
//!
//! A [`LayoutTree`] of boxes is laid out by [`LayoutEngine::compute`]:
//! sizes are resolved top-down (percentages pooled against what pixel and
//! shrink siblings leave over), then children are aligned along the main
//! and cross axes of their container. Absolute boxes, camera boxes and
//! smoothly scrolled containers are handled in the same walk.

pub mod absolute;
pub mod camera;
pub mod engine;
pub mod intrinsic;
pub mod position;
pub mod scroll;
pub mod size;
pub mod snapshot;
pub mod tree;

pub use camera::CameraInfo;
pub use engine::{FrameInput, LayoutEngine};
pub use position::Placement;
pub use scroll::{ScrollRegistry, ScrollState};
pub use size::{ChildSizing, resolve_sizes};
pub use snapshot::{LayoutSnapshot, SnapshotEntry};
pub use tree::{BoxContent, BoxId, BoxNode, BoxStyle, ElementKey, LayoutTree, TextContent};
