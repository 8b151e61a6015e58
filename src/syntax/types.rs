//! Syntax-level data structures for the flowchart language.
//!
//! These types represent what the parser reads off a single line:
//! the flow `Direction`, node references with optional labels, and the
//! directive keywords that are recognised but carry no layout meaning.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::text_width::display_width;

// ─── Direction ───────────────────────────────────────────────────────────────

/// Overall flow direction declared by the `flowchart` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    LR,
    RL,
    TB,
    BT,
}

impl Direction {
    /// True when layers advance along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LR | Direction::RL)
    }

    /// True when the first topological layer is drawn at the far end
    /// (right for RL, bottom for BT).
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::RL | Direction::BT)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::LR => "LR",
            Direction::RL => "RL",
            Direction::TB => "TB",
            Direction::BT => "BT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}'; use LR, RL, TB, or BT")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LR" => Ok(Direction::LR),
            "RL" => Ok(Direction::RL),
            "TB" => Ok(Direction::TB),
            "BT" => Ok(Direction::BT),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

// ─── Node ────────────────────────────────────────────────────────────────────

/// A registered node. `width`/`height` stay zero until the graph is measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Stable key, a word-character token (e.g. "A", "start_1").
    pub id: String,
    /// Display text. Defaults to the id.
    pub label: String,
    pub width: i64,
    pub height: i64,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: 0,
            height: 0,
        }
    }

    /// Label length in display columns.
    pub fn label_len(&self) -> i64 {
        display_width(&self.label) as i64
    }
}

// ─── NodeRef ─────────────────────────────────────────────────────────────────

/// One node mention on a source line: `id` or `id[Label text]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub id: String,
    /// Bracketed label, if one was written.
    pub label: Option<String>,
}

impl NodeRef {
    pub fn new(id: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            id: id.into(),
            label: label.map(str::to_owned),
        }
    }

    /// The label this mention imposes on the node, if any.
    ///
    /// A bracket whose text equals the id is not an explicit label.
    pub fn explicit_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| *l != self.id)
    }
}

// ─── Directive ───────────────────────────────────────────────────────────────

/// Container and styling keywords that are accepted and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Subgraph,
    End,
    Direction,
    ClassDef,
    Class,
    Style,
    LinkStyle,
    Click,
}

impl Directive {
    pub const ALL: [Directive; 8] = [
        Directive::Subgraph,
        Directive::End,
        Directive::Direction,
        Directive::ClassDef,
        Directive::Class,
        Directive::Style,
        Directive::LinkStyle,
        Directive::Click,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Directive::Subgraph => "subgraph",
            Directive::End => "end",
            Directive::Direction => "direction",
            Directive::ClassDef => "classDef",
            Directive::Class => "class",
            Directive::Style => "style",
            Directive::LinkStyle => "linkStyle",
            Directive::Click => "click",
        }
    }

    /// Match the first whitespace-delimited word of a statement.
    ///
    /// `end` only counts when it stands alone, so a node named `end` inside
    /// an edge chain still parses as a node.
    pub fn from_statement(stmt: &str) -> Option<Self> {
        let mut words = stmt.split_whitespace();
        let first = words.next()?;
        let directive = Self::ALL.into_iter().find(|d| d.keyword() == first)?;
        match directive {
            Directive::End if words.next().is_some() => None,
            d => Some(d),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
