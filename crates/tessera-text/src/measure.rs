//! Single-line measurement and horizontal hit-testing.
//!
//! All functions here treat their input as one visual line: newlines are
//! measured like any other character. Indices are character indices, not
//! byte offsets.

use serde::Serialize;
use tessera_types::FontMetrics;

/// Horizontal extent of one character, relative to the line start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CharSpan {
    pub start: f32,
    pub end: f32,
}

impl CharSpan {
    pub fn width(&self) -> f32 {
        self.end - self.start
    }
}

/// Sum of the advances of every character in `span`.
pub fn measure_text(font: &dyn FontMetrics, span: &str) -> f32 {
    span.chars().map(|c| font.char_width(c)).sum()
}

/// Index of the character under `x`, measured from the left of the line.
///
/// Returns the first character whose trailing edge lies past `x`, or
/// `None` when `x` is negative or beyond the last character.
pub fn hit_test(font: &dyn FontMetrics, single_line: &str, x: f32) -> Option<usize> {
    if x < 0.0 {
        return None;
    }
    let mut edge = 0.0;
    for (i, c) in single_line.chars().enumerate() {
        edge += font.char_width(c);
        if x < edge {
            return Some(i);
        }
    }
    None
}

/// Horizontal span of the character at `index`.
///
/// `index == len` yields the zero-width caret position after the last
/// character. Indices past that yield a zero span at the origin.
pub fn position_of_char(font: &dyn FontMetrics, single_line: &str, index: usize) -> CharSpan {
    let mut x = 0.0;
    for (i, c) in single_line.chars().enumerate() {
        let end = x + font.char_width(c);
        if i == index {
            return CharSpan { start: x, end };
        }
        x = end;
    }
    if index == single_line.chars().count() {
        return CharSpan { start: x, end: x };
    }
    CharSpan::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_types::MonospaceFont;

    /// Narrow `i`, wide `m`, everything else 10.
    struct Proportional;

    impl FontMetrics for Proportional {
        fn char_width(&self, c: char) -> f32 {
            match c {
                'i' => 4.0,
                'm' => 16.0,
                _ => 10.0,
            }
        }

        fn line_height(&self) -> f32 {
            20.0
        }

        fn line_gap(&self) -> f32 {
            0.0
        }
    }

    fn mono() -> MonospaceFont {
        MonospaceFont::new(10.0, 20.0, 0.0)
    }

    #[test]
    fn measure_sums_advances() {
        assert_eq!(measure_text(&mono(), "hello"), 50.0);
        assert_eq!(measure_text(&Proportional, "mix"), 30.0);
        assert_eq!(measure_text(&mono(), ""), 0.0);
    }

    #[test]
    fn hit_test_inside_characters() {
        assert_eq!(hit_test(&mono(), "abc", 0.0), Some(0));
        assert_eq!(hit_test(&mono(), "abc", 9.9), Some(0));
        assert_eq!(hit_test(&mono(), "abc", 10.0), Some(1));
        assert_eq!(hit_test(&Proportional, "mix", 17.0), Some(1));
        assert_eq!(hit_test(&Proportional, "mix", 20.0), Some(2));
    }

    #[test]
    fn hit_test_misses() {
        assert_eq!(hit_test(&mono(), "abc", -0.5), None);
        assert_eq!(hit_test(&mono(), "abc", 30.0), None);
        assert_eq!(hit_test(&mono(), "", 0.0), None);
    }

    #[test]
    fn position_of_char_spans() {
        let span = position_of_char(&Proportional, "mix", 1);
        assert_eq!(span, CharSpan { start: 16.0, end: 20.0 });
        assert_eq!(span.width(), 4.0);
    }

    #[test]
    fn position_of_char_caret_after_end() {
        let span = position_of_char(&mono(), "abc", 3);
        assert_eq!(span, CharSpan { start: 30.0, end: 30.0 });
    }

    #[test]
    fn position_of_char_out_of_range() {
        assert_eq!(position_of_char(&mono(), "abc", 4), CharSpan::default());
        assert_eq!(position_of_char(&mono(), "", 1), CharSpan::default());
    }

    #[test]
    fn multibyte_characters_index_by_char() {
        assert_eq!(hit_test(&mono(), "héllo", 15.0), Some(1));
        let span = position_of_char(&mono(), "héllo", 2);
        assert_eq!(span.start, 20.0);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hit_test_inverts_position_of_char(
                text in "[a-zA-Z imx]{1,40}",
                pick in any::<proptest::sample::Index>(),
                eps in 0.01f32..0.9,
            ) {
                let index = pick.index(text.chars().count());
                let span = position_of_char(&Proportional, &text, index);
                prop_assert_eq!(hit_test(&Proportional, &text, span.start + eps), Some(index));
            }

            #[test]
            fn measure_equals_caret_at_end(text in "\\PC{0,40}") {
                let len = text.chars().count();
                let caret = position_of_char(&mono(), &text, len);
                prop_assert!((caret.start - measure_text(&mono(), &text)).abs() < 0.001);
            }
        }
    }
}
