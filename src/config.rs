//! Configuration for the rendering pipeline.

use crate::graph::DEFAULT_PADDING;
use crate::syntax::types::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Use Unicode box-drawing characters (true) or plain ASCII (false).
    pub unicode: bool,
    /// Blank columns between a box border and its label, per side.
    /// Clamped to at least 1.
    pub padding: usize,
    /// Override the diagram direction. None = use the header's direction.
    pub direction_override: Option<Direction>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            padding: DEFAULT_PADDING,
            direction_override: None,
        }
    }
}

impl RenderConfig {
    pub fn ascii() -> Self {
        Self {
            unicode: false,
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction_override = Some(direction);
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}
