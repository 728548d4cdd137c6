//! Flat, serializable record of a laid-out tree for debug tooling.

use std::fmt;

use serde::{Deserialize, Serialize};
use tessera_types::{Rect, Result};

use crate::tree::{BoxId, ElementKey, LayoutTree};

/// One box of a [`LayoutSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub id: BoxId,
    pub key: ElementKey,
    pub kind: String,
    pub depth: usize,
    pub rect: Rect,
    pub hidden: bool,
    pub scroll_offset: f32,
}

/// Every box of a tree in pre-order, with its resolved rect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub entries: Vec<SnapshotEntry>,
}

impl LayoutSnapshot {
    pub fn capture(tree: &LayoutTree) -> Self {
        let mut entries = Vec::with_capacity(tree.len());
        let Some(root) = tree.root() else {
            return Self { entries };
        };

        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = tree.get(id) else {
                continue;
            };
            entries.push(SnapshotEntry {
                id,
                key: node.key(),
                kind: node.content().kind_name().to_string(),
                depth,
                rect: node.rect(),
                hidden: node.is_hidden(),
                scroll_offset: node.scroll_offset(),
            });
            stack.extend(node.children().iter().rev().map(|&c| (c, depth + 1)));
        }
        Self { entries }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl fmt::Display for LayoutSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.entries {
            write!(
                f,
                "{:indent$}{} #{} ({}, {}) {}x{}",
                "",
                e.kind,
                e.id.index(),
                e.rect.x,
                e.rect.y,
                e.rect.width,
                e.rect.height,
                indent = e.depth * 2
            )?;
            if e.hidden {
                f.write_str(" hidden")?;
            }
            if e.scroll_offset != 0.0 {
                write!(f, " scroll={}", e.scroll_offset)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
