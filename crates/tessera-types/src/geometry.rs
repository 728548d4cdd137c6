//! Geometry primitives: points, rectangles, axes and four-sided insets.

use serde::{Deserialize, Serialize};

/// Layout direction of a container. Defines which axis is "main".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dir {
    /// Children flow top to bottom.
    #[default]
    Vertical,
    /// Children flow left to right.
    Horizontal,
}

impl Dir {
    /// The orthogonal direction.
    pub fn other(self) -> Self {
        match self {
            Dir::Vertical => Dir::Horizontal,
            Dir::Horizontal => Dir::Vertical,
        }
    }

    /// Pick the main-axis component of a `(width, height)` pair.
    pub fn main(self, width: f32, height: f32) -> f32 {
        match self {
            Dir::Horizontal => width,
            Dir::Vertical => height,
        }
    }

    /// Pick the cross-axis component of a `(width, height)` pair.
    pub fn cross(self, width: f32, height: f32) -> f32 {
        match self {
            Dir::Horizontal => height,
            Dir::Vertical => width,
        }
    }

    /// Turn `(main, cross)` back into `(x, y)` / `(width, height)` order.
    pub fn to_xy(self, main: f32, cross: f32) -> (f32, f32) {
        match self {
            Dir::Horizontal => (main, cross),
            Dir::Vertical => (cross, main),
        }
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Length along the main axis of `dir`.
    pub fn main(&self, dir: Dir) -> f32 {
        dir.main(self.width, self.height)
    }

    /// Length along the cross axis of `dir`.
    pub fn cross(&self, dir: Dir) -> f32 {
        dir.cross(self.width, self.height)
    }
}

/// A rectangle with position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink the rectangle by an inset on every side.
    ///
    /// The resulting size never goes below zero.
    pub fn inset(&self, q: &Quadrant) -> Rect {
        Rect {
            x: self.x + q.left,
            y: self.y + q.top,
            width: (self.width - q.horizontal()).max(0.0),
            height: (self.height - q.vertical()).max(0.0),
        }
    }
}

/// Four-sided inset (left/right/top/bottom), used for padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quadrant {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Quadrant {
    /// Zero inset on all sides.
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    /// Create an inset with individual side values. Negative values are
    /// clamped to zero.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left: left.max(0.0),
            right: right.max(0.0),
            top: top.max(0.0),
            bottom: bottom.max(0.0),
        }
    }

    /// Same inset on every side.
    pub fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Create symmetric insets (horizontal and vertical).
    pub fn symmetric(h: f32, v: f32) -> Self {
        Self::new(h, h, v, v)
    }

    /// Total horizontal inset (left + right).
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Sum of both edges along `dir`: left + right for horizontal,
    /// top + bottom for vertical.
    pub fn sum_in_direction(&self, dir: Dir) -> f32 {
        match dir {
            Dir::Horizontal => self.horizontal(),
            Dir::Vertical => self.vertical(),
        }
    }

    /// Leading edge along `dir` (left or top).
    pub fn start_of_direction(&self, dir: Dir) -> f32 {
        match dir {
            Dir::Horizontal => self.left,
            Dir::Vertical => self.top,
        }
    }

    /// Trailing edge along `dir` (right or bottom).
    pub fn end_of_direction(&self, dir: Dir) -> f32 {
        match dir {
            Dir::Horizontal => self.right,
            Dir::Vertical => self.bottom,
        }
    }
}

/// Optional per-edge offsets for absolutely positioned boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AbsoluteOffsets {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
}

impl AbsoluteOffsets {
    /// Offsets anchored at the top-left corner.
    pub fn top_left(left: f32, top: f32) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            ..Self::default()
        }
    }
}
