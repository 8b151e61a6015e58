//! Layout engine: cycle gate, layering, and coordinates in one call.

pub mod cycle;
pub mod sugiyama;
pub mod types;

pub use cycle::check_acyclic;
pub use sugiyama::{assign_coordinates, assign_layers};
pub use types::{Layers, LayoutNode, LayoutResult, Position, Positions};

use crate::error::Result;
use crate::graph::Graph;

/// Run the full layout pipeline on a measured graph.
///
/// Fails with `Cyclic` before any layering when the graph is not a DAG.
pub fn full_layout(graph: &Graph) -> Result<LayoutResult> {
    check_acyclic(graph)?;
    let layers = assign_layers(graph);
    let positions = assign_coordinates(graph, &layers);
    Ok(build_result(graph, &layers, &positions))
}

/// Combine graph, layers, and positions into a `LayoutResult`.
///
/// Nodes without a position are left out; their edges are kept and
/// skipped later by the renderer.
pub fn build_result(graph: &Graph, layers: &Layers, positions: &Positions) -> LayoutResult {
    let mut result = LayoutResult::new(graph.direction);
    for id in graph.node_ids() {
        let (Some(node), Some(pos)) = (graph.node(id), positions.get(id)) else {
            continue;
        };
        result.nodes.push(LayoutNode {
            id: node.id.clone(),
            label: node.label.clone(),
            layer: layers.get(id).copied().unwrap_or(0),
            x: pos.x,
            y: pos.y,
            width: node.width,
            height: node.height,
        });
    }
    result.nodes.sort_by(|a, b| a.layer.cmp(&b.layer).then_with(|| a.id.cmp(&b.id)));
    result.edges = graph
        .edges()
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();
    result
}
