//! Line-oriented parser for `flowchart` diagrams.
//!
//! Grammar, one statement per significant line:
//!
//! ```text
//! header     := "flowchart" WS ("LR" | "RL" | "TB" | "BT")      (case-insensitive)
//! statement  := node_ref ("-->" node_ref)*
//! node_ref   := WORD ("[" label "]")? (":::" WORD)?
//! ```
//!
//! Container and styling directives (`subgraph`, `end`, `direction`,
//! `classDef`, `class`, `style`, `linkStyle`, `click`) are skipped; node
//! and edge statements inside a subgraph block land in the flat graph.

use std::sync::LazyLock;

use regex::Regex;

use super::base::{Parser, SourceLine, parse_node_ref, significant_lines, split_chain};
use crate::error::{RenderError, Result};
use crate::graph::{DEFAULT_PADDING, Graph};
use crate::syntax::types::{Direction, Directive, NodeRef};

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^flowchart\s+(LR|RL|TB|BT)\s*;?$").expect("header pattern is valid")
});

/// Parser for `flowchart <direction>` diagrams.
#[derive(Debug, Clone, Copy)]
pub struct FlowchartParser {
    /// Label padding used when measuring node boxes.
    pub padding: usize,
}

impl Default for FlowchartParser {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}

impl FlowchartParser {
    pub fn new(padding: usize) -> Self {
        Self { padding }
    }
}

impl Parser for FlowchartParser {
    fn parse(&self, src: &str) -> Result<Graph> {
        let lines = significant_lines(src);
        let (header, body) = lines.split_first().ok_or(RenderError::EmptyInput)?;
        let direction = parse_header(header.text)
            .ok_or_else(|| RenderError::UnsupportedDiagramType(header.text.trim().to_string()))?;

        let mut graph = Graph::new(direction);
        for line in body {
            parse_statement(&mut graph, line)?;
        }
        if graph.node_count() == 0 {
            return Err(RenderError::NoNodes);
        }
        graph.measure(self.padding);
        tracing::debug!(
            direction = %graph.direction,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "parsed flowchart"
        );
        Ok(graph)
    }
}

/// Match the header line and return its direction.
pub fn parse_header(line: &str) -> Option<Direction> {
    let caps = HEADER_RE.captures(line.trim())?;
    caps.get(1)?.as_str().parse().ok()
}

/// Apply one statement line to the graph.
fn parse_statement(graph: &mut Graph, line: &SourceLine<'_>) -> Result<()> {
    let stmt = line.statement();
    if stmt.is_empty() {
        return Ok(());
    }
    let tokens = split_chain(stmt);
    if tokens.len() == 1 {
        if let Some(directive) = Directive::from_statement(stmt) {
            tracing::debug!(
                line = line.number,
                directive = directive.keyword(),
                "skipping directive"
            );
            return Ok(());
        }
    }

    let refs = tokens
        .into_iter()
        .map(|token| parse_node_ref(token.trim()))
        .collect::<Option<Vec<NodeRef>>>()
        .ok_or_else(|| RenderError::Syntax {
            line: line.number,
            text: line.text.trim().to_string(),
        })?;

    for node_ref in &refs {
        graph.upsert(node_ref);
    }
    for pair in refs.windows(2) {
        graph.add_edge(&pair[0].id, &pair[1].id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_flowchart.rs"]
mod tests;
