//! Layered graph layout.
//!
//! Phases:
//!   1. Layer assignment (longest path, Kahn order)
//!   2. Coordinate assignment (layer bands along the flow axis)
//!
//! Both phases are pure functions of the graph; nothing is written back
//! into the nodes.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{Layers, Position, Positions};
use crate::graph::Graph;
use crate::syntax::types::Node;

// ─── Geometry constants ──────────────────────────────────────────────────────

/// Columns between horizontally adjacent boxes.
pub const H_GAP: i64 = 6;
/// Rows between vertically adjacent boxes.
pub const V_GAP: i64 = 3;

// ─── Layer Assignment ────────────────────────────────────────────────────────

/// Assign every node its longest-path layer.
///
/// Sources sit on layer 0; every other node sits one past its deepest
/// predecessor. The ready set is drained in lexicographic id order so the
/// result never depends on hash or insertion order. The graph must be
/// acyclic; nodes on or behind a cycle are never released.
pub fn assign_layers(graph: &Graph) -> Layers {
    let mut adjacency = graph.adjacency();
    let mut layers: Layers = graph
        .node_ids()
        .into_iter()
        .map(|id| (id.to_string(), 0))
        .collect();
    let mut ready: BTreeSet<&str> = adjacency.sources().into_iter().collect();

    while let Some(id) = ready.pop_first() {
        let next = layers.get(id).copied().unwrap_or(0) + 1;
        for (succ, freed) in adjacency.release(id) {
            if let Some(layer) = layers.get_mut(succ) {
                *layer = (*layer).max(next);
            }
            if freed {
                ready.insert(succ);
            }
        }
    }

    tracing::debug!(
        layers = layers.values().max().map_or(0, |&l| l + 1),
        "assigned layers"
    );
    layers
}

/// Group nodes by layer, each group sorted by id.
pub fn group_by_layer<'g>(graph: &'g Graph, layers: &Layers) -> BTreeMap<usize, Vec<&'g Node>> {
    let mut bands: BTreeMap<usize, Vec<&Node>> = BTreeMap::new();
    for id in graph.node_ids() {
        let Some(node) = graph.node(id) else { continue };
        let layer = layers.get(id).copied().unwrap_or(0);
        bands.entry(layer).or_default().push(node);
    }
    bands
}

// ─── Coordinate Assignment ───────────────────────────────────────────────────

/// Map layers to character coordinates for the graph's direction.
///
/// Horizontal flow: each layer is an x band as wide as its widest node
/// plus `H_GAP`; nodes stack downward separated by `V_GAP`.
/// Vertical flow: the same with axes swapped, bands as tall as their
/// tallest node plus `V_GAP`, siblings separated by `H_GAP`.
/// RL and BT visit the layers in reverse so layer 0 lands at the far end.
pub fn assign_coordinates(graph: &Graph, layers: &Layers) -> Positions {
    let direction = graph.direction;
    let horizontal = direction.is_horizontal();
    let bands = group_by_layer(graph, layers);

    let ordered: Vec<&Vec<&Node>> = if direction.is_reversed() {
        bands.values().rev().collect()
    } else {
        bands.values().collect()
    };

    let mut positions = Positions::new();
    let mut primary: i64 = 0;
    for band in ordered {
        let mut secondary: i64 = 0;
        for node in band {
            let pos = if horizontal {
                Position::new(primary, secondary)
            } else {
                Position::new(secondary, primary)
            };
            positions.insert(node.id.clone(), pos);
            secondary += if horizontal {
                node.height + V_GAP
            } else {
                node.width + H_GAP
            };
        }
        let extent = band
            .iter()
            .map(|n| if horizontal { n.width } else { n.height })
            .max()
            .unwrap_or(0);
        primary += extent + if horizontal { H_GAP } else { V_GAP };
    }
    positions
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_sugiyama.rs"]
mod tests;
