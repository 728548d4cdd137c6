//! Absolutely positioned boxes.
//!
//! These take no part in sibling pooling or flow placement. They are sized
//! against the content box of their positioning root, one axis at a time,
//! and placed by whichever edge offsets they set.

use tessera_types::{AbsoluteOffsets, Point, Rect, Size, SizeKind, SizeSpec};

use crate::size::resolve_independent;

/// Size an absolute box against its positioning root's content size.
///
/// `shrink_height` receives the resolved width and is only called when the
/// height is shrink-to-content.
pub fn absolute_size(
    width: SizeSpec,
    height: SizeSpec,
    intrinsic: Size,
    root_content: Size,
    scale: f32,
    shrink_height: impl FnOnce(f32) -> f32,
) -> Size {
    let w = resolve_independent(width, root_content.width, scale, intrinsic.width);
    let shrink_h = match height.kind {
        SizeKind::Shrink => shrink_height(w),
        SizeKind::Percentage | SizeKind::Pixel => intrinsic.height,
    };
    let h = resolve_independent(height, root_content.height, scale, shrink_h);
    Size::new(w, h)
}

/// Place an absolute box of `size` inside `root_content`.
///
/// `left`/`top` win over `right`/`bottom`. An axis with neither edge set
/// sits at the content origin.
pub fn absolute_origin(offsets: &AbsoluteOffsets, root_content: Rect, size: Size) -> Point {
    let x = match (offsets.left, offsets.right) {
        (Some(left), _) => root_content.x + left,
        (None, Some(right)) => root_content.right() - right - size.width,
        (None, None) => root_content.x,
    };
    let y = match (offsets.top, offsets.bottom) {
        (Some(top), _) => root_content.y + top,
        (None, Some(bottom)) => root_content.bottom() - bottom - size.height,
        (None, None) => root_content.y,
    };
    Point::new(x, y)
}
