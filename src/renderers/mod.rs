//! Renderer trait and the text rasterizer.

pub mod ascii;
pub mod canvas;
pub mod charset;

pub use ascii::AsciiRenderer;
pub use charset::CharSet;

use crate::layout::types::LayoutResult;

/// Trait for diagram renderers.
pub trait Renderer {
    /// Render a laid-out graph to display rows, blank edge rows trimmed.
    fn render(&self, layout: &LayoutResult) -> Vec<String>;
}
