//! Arena-based layout tree.
//!
//! Boxes live in a flat `Vec` and link to each other by [`BoxId`]. The
//! engine walks the tree with explicit stacks over this arena, so deep
//! trees never recurse.

use serde::{Deserialize, Serialize};
use tessera_text::TextLayoutInfo;
use tessera_types::{
    AbsoluteOffsets, CrossAlign, Dir, MainAlign, Point, Quadrant, Rect, Result, Size, SizeSpec,
    TesseraError, TextAlign,
};

use crate::camera::CameraInfo;

// ------------------------------------------------------------------
// Identity
// ------------------------------------------------------------------

/// Index of a box inside one [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoxId(usize);

impl BoxId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Caller-chosen identity that survives rebuilding the tree.
///
/// Per-element state kept across frames (scroll positions) is keyed by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementKey(pub u64);

impl ElementKey {
    /// Key derived from a name with 64-bit FNV-1a.
    pub fn from_name(name: &str) -> Self {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        let hash = name
            .bytes()
            .fold(OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(PRIME));
        Self(hash)
    }
}

// ------------------------------------------------------------------
// Style and content
// ------------------------------------------------------------------

/// User-authored layout settings of one box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStyle {
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub padding: Quadrant,
    /// Space between consecutive flow children.
    pub gap: f32,
    pub dir: Dir,
    pub main_align: MainAlign,
    pub cross_align: CrossAlign,
    /// Taken out of the flow and placed by `offsets`.
    pub absolute: bool,
    pub offsets: AbsoluteOffsets,
    /// Ancestor whose content box positions this absolute box. Defaults to
    /// the parent.
    pub absolute_root: Option<BoxId>,
    pub hidden: bool,
    pub scrollable: bool,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: SizeSpec::percent(100.0),
            height: SizeSpec::percent(100.0),
            padding: Quadrant::ZERO,
            gap: 0.0,
            dir: Dir::Vertical,
            main_align: MainAlign::FlexStart,
            cross_align: CrossAlign::FlexStart,
            absolute: false,
            offsets: AbsoluteOffsets::default(),
            absolute_root: None,
            hidden: false,
            scrollable: false,
        }
    }
}

impl BoxStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: SizeSpec) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: SizeSpec) -> Self {
        self.height = height;
        self
    }

    pub fn with_size(self, width: SizeSpec, height: SizeSpec) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_padding(mut self, padding: Quadrant) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    pub fn with_dir(mut self, dir: Dir) -> Self {
        self.dir = dir;
        self
    }

    pub fn with_main_align(mut self, align: MainAlign) -> Self {
        self.main_align = align;
        self
    }

    pub fn with_cross_align(mut self, align: CrossAlign) -> Self {
        self.cross_align = align;
        self
    }

    /// Make the box absolute, placed by `offsets`.
    pub fn with_absolute(mut self, offsets: AbsoluteOffsets) -> Self {
        self.absolute = true;
        self.offsets = offsets;
        self
    }

    pub fn with_absolute_root(mut self, root: BoxId) -> Self {
        self.absolute_root = Some(root);
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }
}

/// Text leaf content.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    pub text: String,
    pub align: TextAlign,
    pub multiline: bool,
}

impl TextContent {
    /// Start-aligned, wrapping text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: TextAlign::Start,
            multiline: true,
        }
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }
}

/// What a box holds besides its geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxContent {
    Container,
    Text(TextContent),
    /// Leaf with fixed intrinsic pixel dimensions.
    Image { width: f32, height: f32 },
    /// Children are laid out in world space and viewed through the camera.
    Camera(CameraInfo),
}

impl BoxContent {
    pub fn kind_name(&self) -> &'static str {
        match self {
            BoxContent::Container => "container",
            BoxContent::Text(_) => "text",
            BoxContent::Image { .. } => "image",
            BoxContent::Camera(_) => "camera",
        }
    }
}

// ------------------------------------------------------------------
// Nodes
// ------------------------------------------------------------------

/// One box of the tree with its style and its computed layout.
#[derive(Debug, Clone)]
pub struct BoxNode {
    pub(crate) key: ElementKey,
    pub(crate) style: BoxStyle,
    pub(crate) content: BoxContent,
    pub(crate) parent: Option<BoxId>,
    pub(crate) children: Vec<BoxId>,
    pub(crate) intrinsic: Size,
    pub(crate) rect: Rect,
    pub(crate) text_layout: Option<TextLayoutInfo>,
    pub(crate) scroll_offset: f32,
    pub(crate) content_height: f32,
}

impl BoxNode {
    fn new(key: ElementKey, style: BoxStyle, content: BoxContent, parent: Option<BoxId>) -> Self {
        Self {
            key,
            style,
            content,
            parent,
            children: Vec::new(),
            intrinsic: Size::ZERO,
            rect: Rect::default(),
            text_layout: None,
            scroll_offset: 0.0,
            content_height: 0.0,
        }
    }

    pub fn key(&self) -> ElementKey {
        self.key
    }

    pub fn style(&self) -> &BoxStyle {
        &self.style
    }

    /// Mutable style. Changes apply on the next layout pass.
    pub fn style_mut(&mut self) -> &mut BoxStyle {
        &mut self.style
    }

    pub fn content(&self) -> &BoxContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut BoxContent {
        &mut self.content
    }

    pub fn parent(&self) -> Option<BoxId> {
        self.parent
    }

    pub fn children(&self) -> &[BoxId] {
        &self.children
    }

    /// Resolved outer rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Resolved rectangle minus padding.
    pub fn content_rect(&self) -> Rect {
        self.rect.inset(&self.style.padding)
    }

    /// Unconstrained content size including padding.
    pub fn intrinsic(&self) -> Size {
        self.intrinsic
    }

    /// Wrapped lines of a text box, relative to its content origin.
    pub fn text_layout(&self) -> Option<&TextLayoutInfo> {
        self.text_layout.as_ref()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Height of the flow content plus vertical padding, as used for
    /// scrolling.
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn is_hidden(&self) -> bool {
        self.style.hidden
    }

    pub(crate) fn clear_layout(&mut self, origin: Point) {
        self.rect = Rect::from_origin_size(origin, Size::ZERO);
        self.text_layout = None;
        self.scroll_offset = 0.0;
        self.content_height = 0.0;
    }
}

// ------------------------------------------------------------------
// Tree
// ------------------------------------------------------------------

/// A tree of boxes with one root.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    pub(crate) nodes: Vec<BoxNode>,
    root: Option<BoxId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the root box. A tree has exactly one.
    pub fn set_root(
        &mut self,
        key: ElementKey,
        style: BoxStyle,
        content: BoxContent,
    ) -> Result<BoxId> {
        if self.root.is_some() {
            return Err(TesseraError::InvalidTree("tree already has a root".into()));
        }
        if style.absolute_root.is_some() {
            return Err(TesseraError::InvalidTree(
                "root box cannot name an absolute root".into(),
            ));
        }
        let id = self.push(BoxNode::new(key, style, content, None));
        self.root = Some(id);
        Ok(id)
    }

    /// Append a box as the last child of `parent`.
    ///
    /// An `absolute_root` in `style` must be `parent` or one of its
    /// ancestors.
    pub fn add_child(
        &mut self,
        parent: BoxId,
        key: ElementKey,
        style: BoxStyle,
        content: BoxContent,
    ) -> Result<BoxId> {
        if self.get(parent).is_none() {
            return Err(TesseraError::InvalidTree(format!(
                "unknown parent box {}",
                parent.index()
            )));
        }
        if let Some(root) = style.absolute_root {
            if !self.is_ancestor_or_self(root, parent) {
                return Err(TesseraError::InvalidTree(format!(
                    "absolute root {} is not an ancestor of box {}",
                    root.index(),
                    parent.index()
                )));
            }
        }
        let id = self.push(BoxNode::new(key, style, content, Some(parent)));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    fn push(&mut self, node: BoxNode) -> BoxId {
        let id = BoxId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn is_ancestor_or_self(&self, ancestor: BoxId, mut id: BoxId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.nodes[id.0].parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    pub fn root(&self) -> Option<BoxId> {
        self.root
    }

    pub fn get(&self, id: BoxId) -> Option<&BoxNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut BoxNode> {
        self.nodes.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every box in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BoxId, &BoxNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (BoxId(i), n))
    }

    /// Number of ancestors of `id`; the root has depth 0.
    pub fn depth(&self, id: BoxId) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.nodes[parent.0].parent;
        }
        depth
    }

    pub fn find_by_key(&self, key: ElementKey) -> Option<BoxId> {
        self.iter().find(|(_, n)| n.key == key).map(|(id, _)| id)
    }

    /// `id` followed by all of its descendants in pre-order.
    pub fn descendants(&self, id: BoxId) -> Vec<BoxId> {
        let mut out = Vec::new();
        if self.get(id).is_none() {
            return out;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current.0].children.iter().rev());
        }
        out
    }

    /// Deepest visible box under `point`.
    ///
    /// Later siblings are drawn over earlier ones, so they are tried first.
    /// Descent stops at the first box that does not contain the point;
    /// entering a camera box projects the point into world space.
    pub fn hit_test(&self, point: Point) -> Option<BoxId> {
        let root = self.root?;
        let root_node = &self.nodes[root.0];
        if root_node.style.hidden || !root_node.rect.contains(point) {
            return None;
        }

        let mut hit = root;
        let mut p = point;
        loop {
            let node = &self.nodes[hit.0];
            if let BoxContent::Camera(camera) = &node.content {
                p = camera.screen_to_world(p);
            }
            let next = node.children.iter().rev().copied().find(|&child| {
                let c = &self.nodes[child.0];
                !c.style.hidden && c.rect.contains(p)
            });
            match next {
                Some(child) => hit = child,
                None => return Some(hit),
            }
        }
    }
}
