//! Camera boxes: a 2D view transform between world and screen space.

use serde::{Deserialize, Serialize};
use tessera_types::Point;

/// View transform of a camera box.
///
/// `target` is the world point shown at `offset` on screen; `zoom` scales
/// world units to screen pixels around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraInfo {
    pub offset: Point,
    pub target: Point,
    pub zoom: f32,
}

impl Default for CameraInfo {
    fn default() -> Self {
        Self {
            offset: Point::ZERO,
            target: Point::ZERO,
            zoom: 1.0,
        }
    }
}

impl CameraInfo {
    pub fn new(offset: Point, target: Point, zoom: f32) -> Self {
        Self {
            offset,
            target,
            zoom,
        }
    }

    pub fn world_to_screen(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.target.x) * self.zoom + self.offset.x,
            (p.y - self.target.y) * self.zoom + self.offset.y,
        )
    }

    /// Inverse of [`world_to_screen`](Self::world_to_screen).
    ///
    /// A zero zoom collapses the whole screen onto `target`.
    pub fn screen_to_world(&self, p: Point) -> Point {
        if self.zoom == 0.0 {
            return self.target;
        }
        Point::new(
            (p.x - self.offset.x) / self.zoom + self.target.x,
            (p.y - self.offset.y) / self.zoom + self.target.y,
        )
    }
}
