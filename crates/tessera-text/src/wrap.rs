//! Greedy line breaking.
//!
//! Text is scanned once, left to right. Preferably only the start of a word
//! moves to the next line: a line is closed as soon as the current word
//! (plus any whitespace already measured after it) no longer fits. When not
//! even a single word fits, the word is split at the overflowing character.

use std::ops::Range;

use serde::Serialize;
use tessera_types::{FontMetrics, Rect, TextAlign};

use crate::measure::measure_text;

/// One laid-out line of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    /// Byte range of the line within the source text, excluding the line
    /// break itself.
    pub range: Range<usize>,
    pub text: String,
    /// X from alignment, Y from stacking, width measured, height = line
    /// height.
    pub bounds: Rect,
    /// X start of every character, relative to the line start.
    pub char_offsets: Vec<f32>,
}

impl Line {
    pub fn char_count(&self) -> usize {
        self.char_offsets.len()
    }
}

/// Position of a character inside a [`TextLayoutInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextPos {
    pub line: usize,
    pub char: usize,
}

/// Result of one [`layout_text`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLayoutInfo {
    pub lines: Vec<Line>,
    /// Width of the widest line.
    pub max_width: f32,
    /// Line count × line height plus the gaps between lines.
    pub total_height: f32,
    line_stride: f32,
}

impl TextLayoutInfo {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the line whose vertical band contains `y`.
    ///
    /// Each band covers the line plus the gap below it.
    pub fn line_at(&self, y: f32) -> Option<usize> {
        if y < 0.0 || self.line_stride <= 0.0 {
            return None;
        }
        let index = (y / self.line_stride) as usize;
        (index < self.lines.len()).then_some(index)
    }

    /// Character under a point given in the text's own coordinate space.
    pub fn char_at(&self, x: f32, y: f32) -> Option<TextPos> {
        let line_index = self.line_at(y)?;
        let line = &self.lines[line_index];
        let local = x - line.bounds.x;
        if local < 0.0 || local >= line.bounds.width {
            return None;
        }
        // Offsets are ascending; the hit is the last one not past `local`.
        let char = line.char_offsets.partition_point(|&start| start <= local);
        Some(TextPos {
            line: line_index,
            char: char.saturating_sub(1),
        })
    }
}

/// Break `text` into lines no wider than `max_width`.
///
/// With `multiline == false` the whole input is a single line and newlines
/// are measured as ordinary characters. An infinite `max_width` never wraps
/// and aligns every line to the start.
pub fn layout_text(
    font: &dyn FontMetrics,
    text: &str,
    max_width: f32,
    align: TextAlign,
    multiline: bool,
) -> TextLayoutInfo {
    let line_height = font.line_height();
    let line_stride = line_height + font.line_gap();

    if text.is_empty() {
        return TextLayoutInfo {
            lines: vec![Line {
                range: 0..0,
                text: String::new(),
                bounds: Rect::default(),
                char_offsets: Vec::new(),
            }],
            max_width: 0.0,
            total_height: 0.0,
            line_stride,
        };
    }

    let mut breaker = Breaker {
        font,
        text,
        lines: Vec::new(),
        line_start: 0,
    };

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut line_width = 0.0_f32;
    let mut block_start = 0;
    let mut block_width = 0.0_f32;

    let mut i = 0;
    while i < chars.len() {
        let (pos, c) = chars[i];

        if i > 0 && chars[i - 1].1.is_whitespace() && !c.is_whitespace() {
            block_start = pos;
            block_width = 0.0;
        }

        if multiline && (c == '\n' || c == '\r') {
            breaker.close_line(pos);
            let mut next = i + 1;
            if c == '\r' && chars.get(next).is_some_and(|&(_, n)| n == '\n') {
                next += 1;
            }
            let resume = chars.get(next).map_or(text.len(), |&(p, _)| p);
            breaker.line_start = resume;
            block_start = resume;
            line_width = 0.0;
            block_width = 0.0;
            i = next;
            continue;
        }

        let w = font.char_width(c);
        line_width += w;
        block_width += w;

        if multiline && line_width > max_width {
            if breaker.line_start == block_start {
                // Not even one word fits: split mid-word. A character that
                // overflows an empty line stays on it.
                if pos != breaker.line_start {
                    breaker.close_line(pos);
                    breaker.line_start = pos;
                    block_start = pos;
                    line_width = w;
                    block_width = w;
                }
            } else {
                breaker.close_line(block_start);
                breaker.line_start = block_start;
                line_width = block_width;
            }
        }

        i += 1;
    }
    breaker.close_line(text.len());

    let mut lines = breaker.lines;
    let mut widest = 0.0_f32;
    for (n, line) in lines.iter_mut().enumerate() {
        widest = widest.max(line.bounds.width);
        line.bounds.x = align_offset(align, max_width, line.bounds.width);
        line.bounds.y = n as f32 * line_stride;
    }

    let count = lines.len() as f32;
    let total_height = count * line_height + (count - 1.0) * font.line_gap();
    log::trace!(
        "layout_text: {} chars -> {} lines (max_width {max_width})",
        chars.len(),
        lines.len()
    );

    TextLayoutInfo {
        lines,
        max_width: widest,
        total_height,
        line_stride,
    }
}

fn align_offset(align: TextAlign, max_width: f32, line_width: f32) -> f32 {
    if !max_width.is_finite() {
        return 0.0;
    }
    match align {
        TextAlign::Start => 0.0,
        TextAlign::Center => (max_width - line_width) / 2.0,
        TextAlign::End => max_width - line_width,
    }
}

struct Breaker<'a> {
    font: &'a dyn FontMetrics,
    text: &'a str,
    lines: Vec<Line>,
    line_start: usize,
}

impl Breaker<'_> {
    /// Emit `[line_start, end)` as a line. Positions are filled in later.
    fn close_line(&mut self, end: usize) {
        let slice = &self.text[self.line_start..end];
        let mut x = 0.0;
        let char_offsets = slice
            .chars()
            .map(|c| {
                let start = x;
                x += self.font.char_width(c);
                start
            })
            .collect();
        self.lines.push(Line {
            range: self.line_start..end,
            text: slice.to_string(),
            bounds: Rect::new(0.0, 0.0, measure_text(self.font, slice), self.font.line_height()),
            char_offsets,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_types::MonospaceFont;

    fn font() -> MonospaceFont {
        MonospaceFont::new(10.0, 20.0, 0.0)
    }

    fn texts(info: &TextLayoutInfo) -> Vec<&str> {
        info.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn quick_fox_wraps_into_two_lines() {
        let info = layout_text(&font(), "The quick fox", 95.0, TextAlign::Start, true);
        assert_eq!(info.line_count(), 2);
        assert_eq!(texts(&info), vec!["The ", "quick fox"]);
        assert_eq!(info.lines[0].bounds.width, 40.0);
        assert_eq!(info.lines[1].bounds.width, 90.0);
        assert_eq!(info.max_width, 90.0);
    }

    #[test]
    fn fitting_text_stays_on_one_line() {
        let info = layout_text(&font(), "hello world", 200.0, TextAlign::Start, true);
        assert_eq!(texts(&info), vec!["hello world"]);
        assert_eq!(info.total_height, 20.0);
    }

    #[test]
    fn long_word_splits_mid_word() {
        let info = layout_text(&font(), "abcdefgh", 35.0, TextAlign::Start, true);
        assert_eq!(texts(&info), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn word_after_split_word_moves_as_block() {
        let info = layout_text(&font(), "abcdef gh", 45.0, TextAlign::Start, true);
        assert_eq!(texts(&info), vec!["abcd", "ef ", "gh"]);
    }

    #[test]
    fn newline_forces_break() {
        let info = layout_text(&font(), "ab\ncd", 1000.0, TextAlign::Start, true);
        assert_eq!(texts(&info), vec!["ab", "cd"]);
        assert_eq!(info.lines[1].range, 3..5);
    }

    #[test]
    fn crlf_is_a_single_break() {
        let info = layout_text(&font(), "ab\r\ncd", 1000.0, TextAlign::Start, true);
        assert_eq!(texts(&info), vec!["ab", "cd"]);
        assert_eq!(info.lines[1].range, 4..6);
    }

    #[test]
    fn trailing_newline_emits_empty_last_line() {
        let info = layout_text(&font(), "ab\n", 1000.0, TextAlign::Start, true);
        assert_eq!(texts(&info), vec!["ab", ""]);
        assert_eq!(info.lines[1].bounds.width, 0.0);
        assert_eq!(info.lines[1].bounds.height, 20.0);
    }

    #[test]
    fn single_line_mode_ignores_width_and_newlines() {
        let info = layout_text(&font(), "ab\ncd efg", 10.0, TextAlign::Start, false);
        assert_eq!(info.line_count(), 1);
        assert_eq!(info.lines[0].text, "ab\ncd efg");
        assert_eq!(info.lines[0].bounds.width, 90.0);
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        let info = layout_text(&font(), "", 100.0, TextAlign::Center, true);
        assert_eq!(info.line_count(), 1);
        assert_eq!(info.lines[0].bounds, Rect::default());
        assert_eq!(info.total_height, 0.0);
        assert_eq!(info.max_width, 0.0);
    }

    #[test]
    fn zero_width_is_one_char_per_line() {
        let info = layout_text(&font(), "ab cd", 0.0, TextAlign::Start, true);
        assert_eq!(texts(&info), vec!["a", "b", " ", "c", "d"]);
    }

    #[test]
    fn negative_width_is_one_char_per_line() {
        let info = layout_text(&font(), "xyz", -5.0, TextAlign::Start, true);
        assert_eq!(texts(&info), vec!["x", "y", "z"]);
    }

    #[test]
    fn alignment_offsets() {
        let center = layout_text(&font(), "ab", 100.0, TextAlign::Center, true);
        assert_eq!(center.lines[0].bounds.x, 40.0);
        let end = layout_text(&font(), "ab", 100.0, TextAlign::End, true);
        assert_eq!(end.lines[0].bounds.x, 80.0);
        let start = layout_text(&font(), "ab", 100.0, TextAlign::Start, true);
        assert_eq!(start.lines[0].bounds.x, 0.0);
    }

    #[test]
    fn unbounded_width_aligns_to_start() {
        let info = layout_text(&font(), "ab", f32::INFINITY, TextAlign::End, true);
        assert_eq!(info.lines[0].bounds.x, 0.0);
    }

    #[test]
    fn lines_stack_with_gap() {
        let gappy = MonospaceFont::new(10.0, 20.0, 5.0);
        let info = layout_text(&gappy, "a\nb\nc", 100.0, TextAlign::Start, true);
        let ys: Vec<f32> = info.lines.iter().map(|l| l.bounds.y).collect();
        assert_eq!(ys, vec![0.0, 25.0, 50.0]);
        assert_eq!(info.total_height, 70.0);
    }

    #[test]
    fn char_offsets_follow_advances() {
        let info = layout_text(&font(), "abc", 100.0, TextAlign::Start, true);
        assert_eq!(info.lines[0].char_offsets, vec![0.0, 10.0, 20.0]);
        assert_eq!(info.lines[0].char_count(), 3);
    }

    #[test]
    fn line_at_and_char_at() {
        let info = layout_text(&font(), "ab\ncd", 100.0, TextAlign::Start, true);
        assert_eq!(info.line_at(5.0), Some(0));
        assert_eq!(info.line_at(25.0), Some(1));
        assert_eq!(info.line_at(45.0), None);
        assert_eq!(info.char_at(15.0, 30.0), Some(TextPos { line: 1, char: 1 }));
        assert_eq!(info.char_at(25.0, 30.0), None);
        assert_eq!(info.char_at(-1.0, 5.0), None);
    }

    mod prop {
        use super::*;
        use crate::measure::measure_text;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rewrap_reproduces_line_widths(
                text in "[a-z ]{0,80}",
                max_width in 0.0f32..200.0,
            ) {
                let info = layout_text(&font(), &text, max_width, TextAlign::Start, true);
                for line in &info.lines {
                    let again = layout_text(&font(), &line.text, max_width, TextAlign::Start, false);
                    prop_assert_eq!(again.line_count(), 1);
                    prop_assert!((again.lines[0].bounds.width - line.bounds.width).abs() < 0.001);
                }
            }

            #[test]
            fn lines_cover_source_without_newlines(text in "[a-z \\n]{0,80}", max_width in 1.0f32..120.0) {
                let info = layout_text(&font(), &text, max_width, TextAlign::Start, true);
                let joined: String = info.lines.iter().map(|l| l.text.as_str()).collect();
                let expected: String = text.chars().filter(|&c| c != '\n').collect();
                prop_assert_eq!(joined, expected);
            }

            #[test]
            fn width_matches_measure(text in "[a-z ]{1,60}", max_width in 0.0f32..150.0) {
                let info = layout_text(&font(), &text, max_width, TextAlign::Start, true);
                for line in &info.lines {
                    prop_assert!((line.bounds.width - measure_text(&font(), &line.text)).abs() < 0.001);
                }
            }

            #[test]
            fn multi_char_lines_fit_unless_single_word(text in "[a-z ]{1,60}", max_width in 10.0f32..150.0) {
                let info = layout_text(&font(), &text, max_width, TextAlign::Start, true);
                for line in &info.lines {
                    // Only a whole-block carry-over may exceed the width,
                    // and it never exceeds it by more than one character.
                    prop_assert!(line.bounds.width <= max_width + 10.0);
                }
            }
        }
    }
}
