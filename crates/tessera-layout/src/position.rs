//! Main- and cross-axis placement of already-sized flow children.

use tessera_types::{CrossAlign, Dir, MainAlign, Point, Rect, Size};

/// Offset of every child along the main axis, relative to the start of the
/// container's content box.
///
/// `R` below is the main length left after the children. Gaps are not
/// part of it; they are added after every child on top of the policy's
/// spacing. `SpaceBetween` with fewer than two children falls back to
/// flex-start.
pub fn main_offsets(align: MainAlign, main_len: f32, gap: f32, lengths: &[f32]) -> Vec<f32> {
    let n = lengths.len();
    if n == 0 {
        return Vec::new();
    }
    let remaining = main_len - lengths.iter().sum::<f32>();
    let count = n as f32;

    // (offset before the first child, extra space between neighbours)
    let (lead, between) = match align {
        MainAlign::FlexStart => (0.0, 0.0),
        MainAlign::FlexEnd => (remaining, 0.0),
        MainAlign::Center => (remaining / 2.0, 0.0),
        MainAlign::SpaceBetween if n <= 1 => (0.0, 0.0),
        MainAlign::SpaceBetween => (0.0, remaining / (count - 1.0)),
        MainAlign::SpaceAround => {
            let half = remaining / count / 2.0;
            (half, half * 2.0)
        },
        MainAlign::SpaceEvenly => {
            let space = remaining / (count + 1.0);
            (space, space)
        },
    };

    let mut cursor = lead;
    lengths
        .iter()
        .map(|len| {
            let offset = cursor;
            cursor += len + gap + between;
            offset
        })
        .collect()
}

/// Offset of one child along the cross axis.
pub fn cross_offset(align: CrossAlign, cross_len: f32, child_cross: f32) -> f32 {
    match align {
        CrossAlign::FlexStart => 0.0,
        CrossAlign::FlexEnd => cross_len - child_cross,
        CrossAlign::Center => (cross_len - child_cross) / 2.0,
    }
}

/// Alignment settings of one container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub dir: Dir,
    pub main_align: MainAlign,
    pub cross_align: CrossAlign,
    pub gap: f32,
}

impl Placement {
    /// Absolute origin of every child inside `content`.
    pub fn place(&self, content: Rect, sizes: &[Size]) -> Vec<Point> {
        let main_len = content.size().main(self.dir);
        let cross_len = content.size().cross(self.dir);
        let lengths: Vec<f32> = sizes.iter().map(|s| s.main(self.dir)).collect();

        main_offsets(self.main_align, main_len, self.gap, &lengths)
            .into_iter()
            .zip(sizes)
            .map(|(main, size)| {
                let cross = cross_offset(self.cross_align, cross_len, size.cross(self.dir));
                let (x, y) = self.dir.to_xy(main, cross);
                Point::new(content.x + x, content.y + y)
            })
            .collect()
    }
}
