//! Font metrics consumed by text layout.

/// Per-character metrics of a scaled font.
///
/// Backends supply concrete implementations backed by their glyph atlas.
/// Text layout queries [`char_width`](FontMetrics::char_width) once per
/// character, so implementations with expensive lookups should cache.
pub trait FontMetrics {
    /// Horizontal advance of `c` in pixels.
    fn char_width(&self, c: char) -> f32;

    /// Height of one line of text in pixels.
    fn line_height(&self) -> f32;

    /// Extra vertical space inserted between consecutive lines.
    fn line_gap(&self) -> f32;
}

impl<F: FontMetrics + ?Sized> FontMetrics for &F {
    fn char_width(&self, c: char) -> f32 {
        (**self).char_width(c)
    }

    fn line_height(&self) -> f32 {
        (**self).line_height()
    }

    fn line_gap(&self) -> f32 {
        (**self).line_gap()
    }
}

/// A fixed-advance font: every character has the same width.
///
/// Line breaks (`\n`, `\r`) still report the fixed advance; text layout
/// decides whether they are measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceFont {
    pub advance: f32,
    pub line_height: f32,
    pub line_gap: f32,
}

impl MonospaceFont {
    pub fn new(advance: f32, line_height: f32, line_gap: f32) -> Self {
        Self {
            advance,
            line_height,
            line_gap,
        }
    }
}

impl FontMetrics for MonospaceFont {
    fn char_width(&self, _c: char) -> f32 {
        self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn line_gap(&self) -> f32 {
        self.line_gap
    }
}
