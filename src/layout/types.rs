//! Layout types: Position, LayoutNode, LayoutResult.

use std::collections::BTreeMap;

use crate::syntax::types::Direction;

// ─── Position ────────────────────────────────────────────────────────────────

/// Top-left corner of a node box in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Layer index per node id.
pub type Layers = BTreeMap<String, usize>;

/// Box position per node id.
pub type Positions = BTreeMap<String, Position>;

// ─── LayoutNode ──────────────────────────────────────────────────────────────

/// A node with its computed layer, position and dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    pub id: String,
    pub label: String,
    pub layer: usize,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl LayoutNode {
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Column of the box's horizontal midpoint.
    pub fn center_x(&self) -> i64 {
        self.x + self.width / 2
    }

    /// Row of the box's single text line.
    pub fn center_y(&self) -> i64 {
        self.y + self.height / 2
    }
}

// ─── LayoutResult ────────────────────────────────────────────────────────────

/// The full output of the layout pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResult {
    pub direction: Direction,
    /// Positioned nodes, ordered by layer then id.
    pub nodes: Vec<LayoutNode>,
    /// `(from_id, to_id)` pairs in source order.
    pub edges: Vec<(String, String)>,
}

impl LayoutResult {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
