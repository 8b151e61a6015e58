//! flowchart-ascii: flowchart syntax to ASCII/Unicode box-drawing diagrams.
//!
//! Pipeline: parse → cycle check → layers → coordinates → rasterize → trim.
//!
//! ```
//! let rows = flowchart_ascii::render("flowchart LR\nA[Start] --> B[End]").unwrap();
//! assert!(rows.iter().any(|r| r.contains("Start") && r.contains('►')));
//! ```
//!
//! Every call builds its own graph and grid, so concurrent calls need no
//! locking.

pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;
pub mod text_width;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use syntax::types::Direction;

use crate::layout::full_layout;
use crate::renderers::{AsciiRenderer, Renderer};

/// Render flowchart source with the default configuration.
pub fn render(src: &str) -> Result<Vec<String>> {
    render_with_config(src, &RenderConfig::default())
}

/// Render flowchart source to display rows.
pub fn render_with_config(src: &str, config: &RenderConfig) -> Result<Vec<String>> {
    let mut graph = parsers::parse(src, config.padding)?;
    if let Some(direction) = config.direction_override {
        graph.direction = direction;
    }
    let layout = full_layout(&graph)?;
    Ok(AsciiRenderer::new(config.unicode).render(&layout))
}

/// Render to a single newline-terminated string (empty stays empty).
pub fn render_to_string(src: &str, config: &RenderConfig) -> Result<String> {
    let rows = render_with_config(src, config)?;
    if rows.is_empty() {
        return Ok(String::new());
    }
    let mut out = rows.join("\n");
    out.push('\n');
    Ok(out)
}

/// Render, or hand back the raw source lines when the diagram can't be drawn.
///
/// Intended for document viewers that must never fail on a bad block.
pub fn render_or_source(src: &str, config: &RenderConfig) -> Vec<String> {
    match render_with_config(src, config) {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!(error = %err, "diagram render failed; showing source");
            src.lines().map(str::to_owned).collect()
        }
    }
}
