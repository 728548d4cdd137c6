//! Text layout for Tessera.
//!
//! Wraps text into lines with fixed per-character advances supplied by a
//! [`FontMetrics`](tessera_types::FontMetrics) implementation, and answers
//! the horizontal hit-testing queries used by interactive text elements.

pub mod measure;
pub mod wrap;

pub use measure::{CharSpan, hit_test, measure_text, position_of_char};
pub use wrap::{Line, TextLayoutInfo, TextPos, layout_text};
