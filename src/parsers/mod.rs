//! Parser registry: detect diagram type and dispatch to the right parser.

pub mod base;
pub mod flowchart;

pub use base::Parser;

use crate::error::{RenderError, Result};
use crate::graph::Graph;
use base::significant_lines;
use flowchart::FlowchartParser;

/// Detect the diagram type from the first significant line.
///
/// Returns the diagram keyword in lowercase (e.g. "flowchart"), or None
/// when the input has no significant lines.
pub fn detect_type(src: &str) -> Option<String> {
    let first = significant_lines(src).into_iter().next()?;
    first
        .text
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
}

/// Parse diagram source into a measured Graph.
///
/// Only the flowchart family is supported.
pub fn parse(src: &str, padding: usize) -> Result<Graph> {
    match detect_type(src).as_deref() {
        None => Err(RenderError::EmptyInput),
        Some("flowchart") => FlowchartParser::new(padding).parse(src),
        Some(_) => {
            let first = significant_lines(src)
                .first()
                .map(|l| l.text.trim().to_string())
                .unwrap_or_default();
            Err(RenderError::UnsupportedDiagramType(first))
        }
    }
}
