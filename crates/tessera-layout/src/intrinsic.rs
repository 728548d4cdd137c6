//! Unconstrained ("shrink-to-content") sizes, computed bottom-up.

use tessera_text::layout_text;
use tessera_types::{FontMetrics, Size, SizeKind, SizeSpec, TextAlign};

use crate::size::total_gap;
use crate::tree::{BoxContent, BoxId, BoxNode, LayoutTree};

/// Fill in the intrinsic size of `root` and every box below it.
///
/// Boxes are visited children-first. Each size includes the box's own
/// padding.
pub fn compute_intrinsic(tree: &mut LayoutTree, root: BoxId, font: &dyn FontMetrics, scale: f32) {
    // Reversed pre-order puts every child before its parent.
    let order = tree.descendants(root);
    for &id in order.iter().rev() {
        let intrinsic = intrinsic_of(tree, &tree.nodes[id.index()], font, scale);
        tree.nodes[id.index()].intrinsic = intrinsic;
    }
}

fn intrinsic_of(tree: &LayoutTree, node: &BoxNode, font: &dyn FontMetrics, scale: f32) -> Size {
    let padding = node.style.padding;
    let inner = match &node.content {
        BoxContent::Text(text) => {
            let info = layout_text(
                font,
                &text.text,
                f32::INFINITY,
                TextAlign::Start,
                text.multiline,
            );
            Size::new(info.max_width, info.total_height)
        },
        BoxContent::Image { width, height } => Size::new(width * scale, height * scale),
        BoxContent::Camera(_) => Size::ZERO,
        BoxContent::Container => {
            let dir = node.style.dir;
            let mut main = 0.0_f32;
            let mut cross = 0.0_f32;
            let mut count = 0;
            for child in node.children.iter().map(|&c| &tree.nodes[c.index()]) {
                if child.style.hidden || child.style.absolute {
                    continue;
                }
                let w = extent(child.style.width, child.intrinsic.width, scale);
                let h = extent(child.style.height, child.intrinsic.height, scale);
                main += dir.main(w, h);
                cross = cross.max(dir.cross(w, h));
                count += 1;
            }
            main += total_gap(node.style.gap, count);
            let (w, h) = dir.to_xy(main, cross);
            Size::new(w, h)
        },
    };
    Size::new(
        inner.width + padding.horizontal(),
        inner.height + padding.vertical(),
    )
}

/// Contribution of one child length to its parent's shrink size.
/// Percentages depend on the parent and contribute nothing.
fn extent(spec: SizeSpec, intrinsic: f32, scale: f32) -> f32 {
    match spec.kind {
        SizeKind::Pixel => spec.sanitized_value() * scale,
        SizeKind::Shrink => intrinsic,
        SizeKind::Percentage => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use tessera_types::{Dir, MonospaceFont, Quadrant};

    use super::*;
    use crate::tree::{BoxStyle, ElementKey, TextContent};

    fn font() -> MonospaceFont {
        MonospaceFont::new(10.0, 20.0, 2.0)
    }

    fn intrinsic(tree: &LayoutTree, id: BoxId) -> Size {
        tree.get(id).unwrap().intrinsic()
    }

    #[test]
    fn text_is_measured_unwrapped() {
        let mut tree = LayoutTree::new();
        let root = tree
            .set_root(
                ElementKey(0),
                BoxStyle::default().with_padding(Quadrant::uniform(2.0)),
                BoxContent::Text(TextContent::new("ab\ncde")),
            )
            .unwrap();
        compute_intrinsic(&mut tree, root, &font(), 1.0);
        // Widest line 30, two lines 20 + 2 + 20.
        assert_eq!(intrinsic(&tree, root), Size::new(34.0, 46.0));
    }

    #[test]
    fn image_scaled_by_display_scale() {
        let mut tree = LayoutTree::new();
        let root = tree
            .set_root(
                ElementKey(0),
                BoxStyle::default(),
                BoxContent::Image {
                    width: 16.0,
                    height: 8.0,
                },
            )
            .unwrap();
        compute_intrinsic(&mut tree, root, &font(), 2.0);
        assert_eq!(intrinsic(&tree, root), Size::new(32.0, 16.0));
    }

    #[test]
    fn container_sums_main_and_maxes_cross() {
        let mut tree = LayoutTree::new();
        let root = tree
            .set_root(
                ElementKey(0),
                BoxStyle::default()
                    .with_dir(Dir::Horizontal)
                    .with_gap(5.0)
                    .with_padding(Quadrant::symmetric(3.0, 1.0)),
                BoxContent::Container,
            )
            .unwrap();
        let px = BoxStyle::default().with_size(SizeSpec::px(40.0), SizeSpec::px(10.0));
        tree.add_child(root, ElementKey(1), px.clone(), BoxContent::Container)
            .unwrap();
        tree.add_child(
            root,
            ElementKey(2),
            BoxStyle::default().with_size(SizeSpec::shrink(), SizeSpec::shrink()),
            BoxContent::Text(TextContent::new("hello")),
        )
        .unwrap();
        // Percentage, hidden and absolute children add nothing.
        tree.add_child(root, ElementKey(3), BoxStyle::default(), BoxContent::Container)
            .unwrap();
        tree.add_child(root, ElementKey(4), px.clone().with_hidden(true), BoxContent::Container)
            .unwrap();
        tree.add_child(
            root,
            ElementKey(5),
            px.with_absolute(Default::default()),
            BoxContent::Container,
        )
        .unwrap();

        compute_intrinsic(&mut tree, root, &font(), 1.0);
        // main: 40 + 50 + 0 + two gaps + 6 padding; cross: max(10, 20) + 2.
        assert_eq!(intrinsic(&tree, root), Size::new(106.0, 22.0));
    }

    #[test]
    fn nested_shrink_containers_propagate() {
        let mut tree = LayoutTree::new();
        let shrink = BoxStyle::default().with_size(SizeSpec::shrink(), SizeSpec::shrink());
        let root = tree
            .set_root(ElementKey(0), shrink.clone(), BoxContent::Container)
            .unwrap();
        let inner = tree
            .add_child(
                root,
                ElementKey(1),
                shrink.with_padding(Quadrant::uniform(4.0)),
                BoxContent::Container,
            )
            .unwrap();
        tree.add_child(
            inner,
            ElementKey(2),
            BoxStyle::default().with_size(SizeSpec::px(10.0), SizeSpec::px(10.0)),
            BoxContent::Container,
        )
        .unwrap();
        compute_intrinsic(&mut tree, root, &font(), 1.5);
        assert_eq!(intrinsic(&tree, inner), Size::new(23.0, 23.0));
        assert_eq!(intrinsic(&tree, root), Size::new(23.0, 23.0));
    }
}
