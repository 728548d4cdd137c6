//! Layout pass driver.
//!
//! One [`LayoutEngine::compute`] call runs a full pass over a tree:
//!
//! 1. intrinsic sizes, bottom-up;
//! 2. the root, sized against the viewport;
//! 3. a top-down walk where each box sizes and places its children and
//!    wraps its own text at its final width.
//!
//! Scroll positions are the only state carried from one pass to the next.

use tessera_text::layout_text;
use tessera_types::{FontMetrics, LayoutConfig, Point, Rect, Size, SizeKind};

use crate::absolute::{absolute_origin, absolute_size};
use crate::intrinsic::compute_intrinsic;
use crate::position::Placement;
use crate::scroll::ScrollRegistry;
use crate::size::{ChildSizing, resolve_independent, resolve_sizes};
use crate::tree::{BoxContent, BoxId, LayoutTree};

/// Per-frame input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Scroll wheel movement this frame; positive scrolls down.
    pub scroll_delta: f32,
    /// Pointer position in screen space, if the pointer is present.
    pub pointer: Option<Point>,
}

impl FrameInput {
    pub fn new(scroll_delta: f32, pointer: Option<Point>) -> Self {
        Self {
            scroll_delta,
            pointer,
        }
    }
}

/// Runs layout passes and owns the scroll state between them.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
    scroll: ScrollRegistry,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            scroll: ScrollRegistry::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn scroll_states(&self) -> &ScrollRegistry {
        &self.scroll
    }

    /// Lay out `tree` inside `viewport`, writing every box's rect.
    pub fn compute(
        &mut self,
        tree: &mut LayoutTree,
        viewport: Size,
        font: &dyn FontMetrics,
        input: &FrameInput,
    ) {
        let Some(root) = tree.root() else {
            return;
        };
        let scale = self.config.display_scale;
        self.scroll.begin_pass();

        compute_intrinsic(tree, root, font, scale);

        if tree.nodes[root.index()].style.hidden {
            clear_subtree(tree, root, Point::ZERO);
            self.scroll.end_pass();
            return;
        }

        let root_size = {
            let node = &tree.nodes[root.index()];
            let width = resolve_independent(
                node.style.width,
                viewport.width,
                scale,
                node.intrinsic.width,
            );
            let shrink_h = match node.style.height.kind {
                SizeKind::Shrink => shrink_height(tree, root, width, font),
                SizeKind::Percentage | SizeKind::Pixel => node.intrinsic.height,
            };
            let height = resolve_independent(node.style.height, viewport.height, scale, shrink_h);
            Size::new(width, height)
        };
        tree.nodes[root.index()].rect = Rect::from_origin_size(Point::ZERO, root_size);

        // Each entry carries the pointer in the box's own coordinate space.
        let mut stack = vec![(root, input.pointer)];
        let mut visited = 0usize;
        while let Some((id, pointer)) = stack.pop() {
            visited += 1;
            wrap_text(tree, id, font);
            self.layout_children(tree, id, font, input, pointer);

            let node = &tree.nodes[id.index()];
            let child_pointer = match &node.content {
                BoxContent::Camera(camera) => pointer.map(|p| camera.screen_to_world(p)),
                BoxContent::Container | BoxContent::Text(_) | BoxContent::Image { .. } => pointer,
            };
            for &child in node.children.iter().rev() {
                if !tree.nodes[child.index()].style.hidden {
                    stack.push((child, child_pointer));
                }
            }
        }

        self.scroll.end_pass();
        log::debug!(
            "layout pass: {visited}/{} boxes in {}x{} viewport",
            tree.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Size and place every child of `id`. Its own rect is already final.
    fn layout_children(
        &mut self,
        tree: &mut LayoutTree,
        id: BoxId,
        font: &dyn FontMetrics,
        input: &FrameInput,
        pointer: Option<Point>,
    ) {
        let scale = self.config.display_scale;
        let node = &tree.nodes[id.index()];
        let style = node.style.clone();
        let key = node.key;
        let rect = node.rect;
        let content = node.content_rect();
        let is_camera = matches!(node.content, BoxContent::Camera(_));
        let children = node.children.clone();

        let mut flow = Vec::new();
        let mut free = Vec::new();
        for &child in &children {
            let c = &tree.nodes[child.index()];
            if c.style.hidden {
                clear_subtree(tree, child, content.origin());
            } else if is_camera || c.style.absolute {
                free.push(child);
            } else {
                flow.push(child);
            }
        }

        // Flow children: pooled sizing, then alignment.
        let sizing: Vec<ChildSizing> = flow
            .iter()
            .map(|&c| {
                let s = &tree.nodes[c.index()].style;
                ChildSizing::new(s.width, s.height).with_intrinsic(tree.nodes[c.index()].intrinsic)
            })
            .collect();
        let sizes = resolve_sizes(
            style.dir,
            content.size(),
            style.gap,
            scale,
            &sizing,
            |i, width| shrink_height(tree, flow[i], width, font),
        );
        let placement = Placement {
            dir: style.dir,
            main_align: style.main_align,
            cross_align: style.cross_align,
            gap: style.gap,
        };
        let origins = placement.place(content, &sizes);
        for ((&child, origin), size) in flow.iter().zip(origins).zip(&sizes) {
            tree.nodes[child.index()].rect = Rect::from_origin_size(origin, *size);
        }

        let content_height = flow
            .iter()
            .map(|c| tree.nodes[c.index()].rect.bottom() - content.y)
            .fold(0.0_f32, f32::max)
            + style.padding.vertical();
        let scroll_offset = if style.scrollable {
            let hovered = pointer.is_some_and(|p| rect.contains(p));
            self.scroll.update(
                key,
                content_height,
                rect.height,
                input.scroll_delta,
                hovered,
                &self.config.scroll,
            )
        } else {
            0.0
        };
        if scroll_offset != 0.0 {
            for &child in &flow {
                tree.nodes[child.index()].rect.y -= scroll_offset;
            }
        }
        let node = &mut tree.nodes[id.index()];
        node.content_height = content_height;
        node.scroll_offset = scroll_offset;

        // Absolute children, or every child of a camera in world space.
        for &child in &free {
            let c = &tree.nodes[child.index()];
            let root_content = if is_camera {
                Rect::new(0.0, 0.0, content.width, content.height)
            } else {
                // Roots edited in through `style_mut` skip the `add_child` check.
                let root = match c.style.absolute_root {
                    Some(root) if tree.is_ancestor_or_self(root, id) => root,
                    Some(root) => {
                        log::warn!(
                            "box {}: absolute root {} is not an ancestor, using the parent",
                            child.index(),
                            root.index()
                        );
                        id
                    },
                    None => id,
                };
                tree.nodes[root.index()].content_rect()
            };
            let size = absolute_size(
                c.style.width,
                c.style.height,
                c.intrinsic,
                root_content.size(),
                scale,
                |width| shrink_height(tree, child, width, font),
            );
            let origin = absolute_origin(&c.style.offsets, root_content, size);
            tree.nodes[child.index()].rect = Rect::from_origin_size(origin, size);
        }

        log::trace!(
            "box {}: {} flow, {} free children in {}x{}",
            id.index(),
            flow.len(),
            free.len(),
            content.width,
            content.height
        );
    }
}

fn wrap_text(tree: &mut LayoutTree, id: BoxId, font: &dyn FontMetrics) {
    let node = &mut tree.nodes[id.index()];
    node.text_layout = match &node.content {
        BoxContent::Text(text) => {
            let width = node.rect.inset(&node.style.padding).width;
            Some(layout_text(font, &text.text, width, text.align, text.multiline))
        },
        BoxContent::Container | BoxContent::Image { .. } | BoxContent::Camera(_) => None,
    };
}

/// Shrink height of `id` once its width is known.
///
/// Text is wrapped at the width left after padding; every other box keeps
/// its intrinsic height.
fn shrink_height(tree: &LayoutTree, id: BoxId, width: f32, font: &dyn FontMetrics) -> f32 {
    let node = &tree.nodes[id.index()];
    match &node.content {
        BoxContent::Text(text) => {
            let padding = node.style.padding;
            let inner = (width - padding.horizontal()).max(0.0);
            layout_text(font, &text.text, inner, text.align, text.multiline).total_height
                + padding.vertical()
        },
        BoxContent::Container | BoxContent::Image { .. } | BoxContent::Camera(_) => {
            node.intrinsic.height
        },
    }
}

fn clear_subtree(tree: &mut LayoutTree, id: BoxId, origin: Point) {
    for d in tree.descendants(id) {
        tree.nodes[d.index()].clear_layout(origin);
    }
}
