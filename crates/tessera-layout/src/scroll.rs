//! Smoothed vertical scrolling for scrollable containers.
//!
//! Each scrollable container owns one [`ScrollState`], kept in a
//! [`ScrollRegistry`] keyed by the container's [`ElementKey`] so it
//! survives the layout tree being rebuilt every frame.

use std::collections::{HashMap, HashSet};

use tessera_types::ScrollConfig;

use crate::tree::ElementKey;

fn lerp(from: f32, to: f32, progress: f32) -> f32 {
    from * (1.0 - progress) + to * progress
}

/// Scroll position of one container plus its smoothing window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    position: f32,
    start: f32,
    target: f32,
    /// Time left in the current smoothing window.
    timer: f32,
}

impl ScrollState {
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether a smoothing window is still running.
    pub fn is_animating(&self) -> bool {
        self.timer > 0.0
    }

    /// Advance by one frame and return the new position.
    ///
    /// `delta` is the frame's scroll input; it only counts when `hovered`.
    /// The result is clamped to `[0, content_height - viewport_height]`.
    pub fn update(
        &mut self,
        content_height: f32,
        viewport_height: f32,
        delta: f32,
        hovered: bool,
        config: &ScrollConfig,
    ) -> f32 {
        let max_scroll = content_height - viewport_height;
        if max_scroll <= 0.0 {
            *self = Self::default();
            return 0.0;
        }

        if delta != 0.0 && hovered {
            self.timer = config.duration;
            self.start = self.position;
            self.target += delta * config.delta_multiplier;
        }

        if self.timer > 0.0 {
            let progress = 1.0 - self.timer / config.duration;
            self.position = lerp(self.start, self.target, progress).clamp(0.0, max_scroll);
            self.timer -= config.frame_step;
        } else {
            // Window closed: the last smoothed value is final.
            self.position = self.position.clamp(0.0, max_scroll);
            self.start = self.position;
            self.target = self.position;
        }

        self.position
    }
}

/// Scroll states of every scrollable container, keyed by element identity.
#[derive(Debug, Default)]
pub struct ScrollRegistry {
    states: HashMap<ElementKey, ScrollState>,
    visited: HashSet<ElementKey>,
}

impl ScrollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: ElementKey) -> Option<&ScrollState> {
        self.states.get(&key)
    }

    /// Current position for `key`, 0 if it never scrolled.
    pub fn position(&self, key: ElementKey) -> f32 {
        self.states.get(&key).map_or(0.0, ScrollState::position)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Start a layout pass. Containers not updated before
    /// [`end_pass`](Self::end_pass) lose their state.
    pub fn begin_pass(&mut self) {
        self.visited.clear();
    }

    /// Advance the state of `key` by one frame.
    pub fn update(
        &mut self,
        key: ElementKey,
        content_height: f32,
        viewport_height: f32,
        delta: f32,
        hovered: bool,
        config: &ScrollConfig,
    ) -> f32 {
        self.visited.insert(key);
        self.states
            .entry(key)
            .or_default()
            .update(content_height, viewport_height, delta, hovered, config)
    }

    /// Drop states of containers that were not laid out this pass.
    pub fn end_pass(&mut self) {
        let before = self.states.len();
        let visited = &self.visited;
        self.states.retain(|key, _| visited.contains(key));
        let dropped = before - self.states.len();
        if dropped > 0 {
            log::debug!("dropped {dropped} stale scroll states");
        }
    }
}
