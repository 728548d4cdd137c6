//! Sizing and alignment vocabulary shared by text and box layout.

use serde::{Deserialize, Serialize};

/// How a box's configured length along one axis is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeKind {
    /// Percentage of the space available in the parent.
    #[default]
    Percentage,
    /// Fixed length in logical pixels, scaled by the display scale.
    Pixel,
    /// Size of the box's own content.
    Shrink,
}

/// A configured length: a value plus the kind that gives it meaning.
///
/// The value is ignored for [`SizeKind::Shrink`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSpec {
    pub value: f32,
    pub kind: SizeKind,
}

impl Default for SizeSpec {
    /// Boxes expand to fill their parent unless told otherwise.
    fn default() -> Self {
        Self::percent(100.0)
    }
}

impl SizeSpec {
    pub fn percent(value: f32) -> Self {
        Self {
            value,
            kind: SizeKind::Percentage,
        }
    }

    pub fn px(value: f32) -> Self {
        Self {
            value,
            kind: SizeKind::Pixel,
        }
    }

    pub fn shrink() -> Self {
        Self {
            value: 0.0,
            kind: SizeKind::Shrink,
        }
    }

    /// Value with NaN and infinities mapped to zero and negatives clamped.
    pub fn sanitized_value(&self) -> f32 {
        if self.value.is_finite() {
            self.value.max(0.0)
        } else {
            log::warn!("non-finite size value {} treated as 0", self.value);
            0.0
        }
    }
}

/// Main-axis distribution policy of a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainAlign {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Cross-axis alignment of a container's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossAlign {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
}

/// Horizontal alignment of text lines within the wrap width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}
