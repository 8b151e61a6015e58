//! graph.rs: the flowchart graph model.
//!
//! Nodes live in a petgraph `DiGraph` arena and are addressed by id through
//! `node_index`; edges are stored as arena links and come back out as
//! `(from_id, to_id)` pairs in insertion order. The graph is built by the
//! parser and treated as immutable by every later stage.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::syntax::types::{Direction, Node, NodeRef};

/// Blank columns between the box border and the widest label, per side.
pub const DEFAULT_PADDING: usize = 1;
/// Narrowest box drawn, whatever the label.
pub const MIN_NODE_WIDTH: i64 = 5;
/// Border, one text row, border.
pub const NODE_HEIGHT: i64 = 3;

/// Parsed flowchart: direction, node arena, directed edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub direction: Direction,
    pub digraph: DiGraph<Node, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    // ── Mutation ─────────────────────────────────────────────────────────────

    /// Register a node mention.
    ///
    /// Creates the node on first sight. On a repeat mention an explicit
    /// label (one that differs from the id) overwrites the current label;
    /// a bare mention never erases an earlier label.
    pub fn upsert(&mut self, node_ref: &NodeRef) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&node_ref.id) {
            if let Some(label) = node_ref.explicit_label() {
                self.digraph[idx].label = label.to_string();
            }
            return idx;
        }
        let label = node_ref.explicit_label().unwrap_or(&node_ref.id);
        let idx = self.digraph.add_node(Node::new(node_ref.id.as_str(), label));
        self.node_index.insert(node_ref.id.clone(), idx);
        idx
    }

    /// Ensure a bare node exists for `id` and return its index.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        self.upsert(&NodeRef::new(id, None))
    }

    /// Add a directed edge, creating bare endpoints as needed.
    pub fn add_edge(&mut self, from_id: &str, to_id: &str) {
        let from = self.ensure_node(from_id);
        let to = self.ensure_node(to_id);
        self.digraph.add_edge(from, to, ());
    }

    /// Compute every node's box size from its label.
    pub fn measure(&mut self, padding: usize) {
        let padding = padding.max(1) as i64;
        for node in self.digraph.node_weights_mut() {
            node.width = (node.label_len() + 2 * padding + 2).max(MIN_NODE_WIDTH);
            node.height = NODE_HEIGHT;
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.digraph[idx])
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// All node ids, sorted lexicographically.
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.node_index.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// All edges as `(from_id, to_id)` pairs, in insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.digraph
            .raw_edges()
            .iter()
            .map(|e| {
                (
                    self.digraph[e.source()].id.as_str(),
                    self.digraph[e.target()].id.as_str(),
                )
            })
            .collect()
    }

    /// In-degrees and successor lists keyed by id, the starting state of a
    /// Kahn pass. Every node gets an in-degree entry; parallel edges count
    /// once per edge.
    pub fn adjacency(&self) -> Adjacency<'_> {
        let mut in_degree: HashMap<&str, usize> =
            self.node_index.keys().map(|id| (id.as_str(), 0)).collect();
        let mut successors: HashMap<&str, Vec<&str>> = HashMap::new();
        for (from, to) in self.edges() {
            *in_degree.entry(to).or_insert(0) += 1;
            successors.entry(from).or_default().push(to);
        }
        Adjacency {
            in_degree,
            successors,
        }
    }
}

/// Borrowed degree table built by [`Graph::adjacency`], consumed as a
/// Kahn pass releases nodes.
#[derive(Debug, Clone, Default)]
pub struct Adjacency<'g> {
    in_degree: HashMap<&'g str, usize>,
    successors: HashMap<&'g str, Vec<&'g str>>,
}

impl<'g> Adjacency<'g> {
    /// Nodes that currently have no incoming edge.
    pub fn sources(&self) -> Vec<&'g str> {
        self.in_degree
            .iter()
            .filter(|&(_, &deg)| deg == 0)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Remove `id`'s outgoing edges.
    ///
    /// Returns each successor in edge insertion order (repeated for
    /// parallel edges), paired with whether that removal left it with no
    /// incoming edge.
    pub fn release(&mut self, id: &str) -> Vec<(&'g str, bool)> {
        let Some(targets) = self.successors.remove(id) else {
            return Vec::new();
        };
        let mut released = Vec::with_capacity(targets.len());
        for succ in targets {
            let freed = match self.in_degree.get_mut(succ) {
                Some(deg) => {
                    *deg = deg.saturating_sub(1);
                    *deg == 0
                }
                None => false,
            };
            released.push((succ, freed));
        }
        released
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_graph.rs"]
mod tests;
