//! Parser trait and the line-level helpers shared by diagram parsers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::graph::Graph;
use crate::syntax::types::NodeRef;

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for diagram parsers.
pub trait Parser {
    /// Parse the input source string into a Graph.
    fn parse(&self, src: &str) -> Result<Graph>;
}

// ─── Tokens ──────────────────────────────────────────────────────────────────

/// Edge operator between two node references.
pub const EDGE_OP: &str = "-->";

/// Comment marker; the rest of a line starting with it is ignored.
pub const COMMENT_PREFIX: &str = "%%";

/// `id`, `id[Label]`, optionally followed by a `:::class` suffix.
static NODE_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)(?:\[([^\[\]]*)\])?(?::::\w+)?$").expect("node reference pattern is valid")
});

// ─── Source lines ────────────────────────────────────────────────────────────

/// A retained input line together with its 1-based position in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// The line with surrounding whitespace and a trailing `;` removed.
    pub fn statement(&self) -> &'a str {
        let trimmed = self.text.trim();
        trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end()
    }
}

/// Drop blank lines and `%%` comment lines, keeping original line numbers.
pub fn significant_lines(src: &str) -> Vec<SourceLine<'_>> {
    src.lines()
        .enumerate()
        .filter_map(|(i, text)| {
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                None
            } else {
                Some(SourceLine { number: i + 1, text })
            }
        })
        .collect()
}

/// Split a statement on the `-->` operators that sit outside `[...]` labels.
///
/// Always returns at least one token; tokens are not trimmed.
pub fn split_chain(stmt: &str) -> Vec<&str> {
    let bytes = stmt.as_bytes();
    let op = EDGE_OP.as_bytes();
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            _ if depth == 0 && bytes[i..].starts_with(op) => {
                tokens.push(&stmt[start..i]);
                i += op.len();
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    tokens.push(&stmt[start..]);
    tokens
}

/// Parse one node reference token (already trimmed).
pub fn parse_node_ref(token: &str) -> Option<NodeRef> {
    let caps = NODE_REF_RE.captures(token)?;
    let id = caps.get(1)?.as_str();
    let label = caps.get(2).map(|m| m.as_str().trim());
    Some(NodeRef::new(id, label))
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_base.rs"]
mod tests;
