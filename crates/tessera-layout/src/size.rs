//! Size resolution for the flow children of one container.
//!
//! Each axis is resolved independently. Along the main axis, percentage
//! children share whatever the pixel and shrink children (and the gaps)
//! leave over; along the cross axis a percentage is taken of the
//! container's content size directly.

use tessera_types::{Dir, Size, SizeKind, SizeSpec};

/// Sizing input for one flow child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildSizing {
    pub width: SizeSpec,
    pub height: SizeSpec,
    /// Unconstrained content size, used for shrink lengths.
    pub intrinsic: Size,
}

impl ChildSizing {
    pub fn new(width: SizeSpec, height: SizeSpec) -> Self {
        Self {
            width,
            height,
            intrinsic: Size::ZERO,
        }
    }

    pub fn with_intrinsic(mut self, intrinsic: Size) -> Self {
        self.intrinsic = intrinsic;
        self
    }
}

/// Resolve a length that is not pooled against siblings.
///
/// Percentages are taken of `parent_len`, pixels are scaled by `scale`,
/// shrink lengths come from `intrinsic_len`.
pub fn resolve_independent(spec: SizeSpec, parent_len: f32, scale: f32, intrinsic_len: f32) -> f32 {
    let len = match spec.kind {
        SizeKind::Percentage => spec.sanitized_value() / 100.0 * parent_len,
        SizeKind::Pixel => spec.sanitized_value() * scale,
        SizeKind::Shrink => intrinsic_len,
    };
    len.max(0.0)
}

/// Total space taken by gaps between `n` flow children.
pub fn total_gap(gap: f32, n: usize) -> f32 {
    gap * n.saturating_sub(1) as f32
}

/// Main length of one percentage child given the space `available` to
/// percentage children.
///
/// Over-subscription (more than 100 points in total) is normalised so the
/// percentage children exactly fill `available`; under-subscription
/// leaves slack. 100% of `available` is `available` exactly.
fn percent_share(value: f32, available: f32, total_percent: f32) -> f32 {
    if total_percent > 100.0 {
        value * available / total_percent
    } else {
        value / 100.0 * available
    }
}

/// Resolve the width and height of every flow child of a container.
///
/// `content` is the container's content box (outer size minus padding).
/// Widths are resolved before heights on both directions so that
/// `shrink_height(index, width)` can measure content, wrapped text in
/// particular, at the child's final width.
pub fn resolve_sizes(
    dir: Dir,
    content: Size,
    gap: f32,
    scale: f32,
    children: &[ChildSizing],
    shrink_height: impl Fn(usize, f32) -> f32,
) -> Vec<Size> {
    if children.is_empty() {
        return Vec::new();
    }
    let gaps = total_gap(gap, children.len());

    let widths: Vec<f32> = match dir {
        Dir::Horizontal => resolve_main_axis(
            content.width,
            gaps,
            scale,
            children.iter().map(|c| (c.width, c.intrinsic.width)),
        ),
        Dir::Vertical => children
            .iter()
            .map(|c| resolve_independent(c.width, content.width, scale, c.intrinsic.width))
            .collect(),
    };

    let shrunk = |i: usize| {
        if children[i].height.kind == SizeKind::Shrink {
            shrink_height(i, widths[i])
        } else {
            0.0
        }
    };

    let heights: Vec<f32> = match dir {
        Dir::Horizontal => children
            .iter()
            .enumerate()
            .map(|(i, c)| resolve_independent(c.height, content.height, scale, shrunk(i)))
            .collect(),
        Dir::Vertical => resolve_main_axis(
            content.height,
            gaps,
            scale,
            children.iter().enumerate().map(|(i, c)| (c.height, shrunk(i))),
        ),
    };

    log::trace!(
        "resolve_sizes: {} children along {dir:?} in {}x{}",
        children.len(),
        content.width,
        content.height
    );

    widths
        .into_iter()
        .zip(heights)
        .map(|(width, height)| Size::new(width, height))
        .collect()
}

/// Resolve one main-axis length per child from `(spec, shrink_len)`.
fn resolve_main_axis(
    main_len: f32,
    gaps: f32,
    scale: f32,
    specs: impl Iterator<Item = (SizeSpec, f32)>,
) -> Vec<f32> {
    let specs: Vec<(SizeSpec, f32)> = specs.collect();

    // First pass: fixed lengths and total percentage.
    let mut fixed = 0.0;
    let mut total_percent = 0.0;
    for (spec, shrink_len) in &specs {
        match spec.kind {
            SizeKind::Percentage => total_percent += spec.sanitized_value(),
            SizeKind::Pixel | SizeKind::Shrink => {
                fixed += resolve_independent(*spec, 0.0, scale, *shrink_len);
            },
        }
    }

    // Second pass: distribute the remainder among percentage children.
    let available = (main_len - fixed - gaps).max(0.0);
    specs
        .iter()
        .map(|(spec, shrink_len)| match spec.kind {
            SizeKind::Percentage => {
                percent_share(spec.sanitized_value(), available, total_percent).max(0.0)
            },
            SizeKind::Pixel | SizeKind::Shrink => {
                resolve_independent(*spec, 0.0, scale, *shrink_len)
            },
        })
        .collect()
}
