//! Syntax types shared by the parser and the graph model.

pub mod types;

pub use types::{Direction, Directive, Node, NodeRef, ParseDirectionError};
