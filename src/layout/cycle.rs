//! Cycle detection gate (Kahn's algorithm).
//!
//! Runs before any layout work; a graph that fails here is never layered.

use std::collections::VecDeque;

use crate::error::{RenderError, Result};
use crate::graph::Graph;

/// Number of nodes Kahn's algorithm can peel off before getting stuck.
///
/// Equal to `node_count()` exactly when the graph is acyclic.
pub fn kahn_processed_count(graph: &Graph) -> usize {
    let mut adjacency = graph.adjacency();
    let mut queue: VecDeque<&str> = adjacency.sources().into_iter().collect();

    let mut processed = 0;
    while let Some(id) = queue.pop_front() {
        processed += 1;
        for (succ, freed) in adjacency.release(id) {
            if freed {
                queue.push_back(succ);
            }
        }
    }
    processed
}

/// Fail with [`RenderError::Cyclic`] unless the graph is a DAG.
pub fn check_acyclic(graph: &Graph) -> Result<()> {
    let processed = kahn_processed_count(graph);
    if processed == graph.node_count() {
        Ok(())
    } else {
        tracing::debug!(
            processed,
            total = graph.node_count(),
            "cycle detected during topological sort"
        );
        Err(RenderError::Cyclic)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_cycle.rs"]
mod tests;
