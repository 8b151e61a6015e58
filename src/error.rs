//! Error taxonomy for the render pipeline.
//!
//! Every error is detected at parse or cycle-check time, before any layout
//! work starts. Callers are expected to fall back to the raw source text.

use thiserror::Error;

/// A failure to turn flowchart source into a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No non-blank, non-comment lines remain after filtering.
    #[error("empty input: no diagram statements found")]
    EmptyInput,

    /// The first significant line is not a `flowchart <LR|RL|TB|BT>` header.
    #[error("unsupported diagram type: {0}")]
    UnsupportedDiagramType(String),

    /// A statement does not match the node/edge grammar. `line` is 1-based
    /// and counts blank and comment lines of the original input.
    #[error("syntax error on line {line}: {text}")]
    Syntax { line: usize, text: String },

    /// The header parsed but no node was registered.
    #[error("no nodes found")]
    NoNodes,

    /// The graph contains at least one directed cycle.
    #[error("cycles are not supported")]
    Cyclic,
}

impl RenderError {
    /// The offending 1-based source line, for syntax errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            RenderError::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
