use super::*;

use petgraph::algo::is_cyclic_directed;

fn graph(edges: &[(&str, &str)]) -> Graph {
    let mut g = Graph::default();
    for (from, to) in edges {
        g.add_edge(from, to);
    }
    g
}

#[test]
fn test_empty_graph_is_acyclic() {
    let g = Graph::default();
    assert_eq!(kahn_processed_count(&g), 0);
    assert!(check_acyclic(&g).is_ok());
}

#[test]
fn test_chain_is_acyclic() {
    let g = graph(&[("A", "B"), ("B", "C")]);
    assert_eq!(kahn_processed_count(&g), 3);
    assert!(check_acyclic(&g).is_ok());
}

#[test]
fn test_diamond_with_duplicate_edges_is_acyclic() {
    let g = graph(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("A", "B")]);
    assert!(check_acyclic(&g).is_ok());
}

#[test]
fn test_two_cycle_rejected() {
    let g = graph(&[("A", "B"), ("B", "A")]);
    assert_eq!(check_acyclic(&g), Err(RenderError::Cyclic));
}

#[test]
fn test_self_loop_rejected() {
    let g = graph(&[("A", "A")]);
    assert_eq!(check_acyclic(&g), Err(RenderError::Cyclic));
}

#[test]
fn test_cycle_downstream_of_source_counts_prefix() {
    let g = graph(&[("S", "A"), ("A", "B"), ("B", "C"), ("C", "A")]);
    assert_eq!(kahn_processed_count(&g), 1);
    assert_eq!(check_acyclic(&g), Err(RenderError::Cyclic));
}

#[test]
fn test_agrees_with_petgraph() {
    let cases: [&[(&str, &str)]; 4] = [
        &[("A", "B"), ("B", "C"), ("A", "C")],
        &[("A", "B"), ("B", "C"), ("C", "A")],
        &[("X", "Y"), ("Z", "Y")],
        &[("P", "Q"), ("Q", "R"), ("R", "Q")],
    ];
    for edges in cases {
        let g = graph(edges);
        assert_eq!(check_acyclic(&g).is_ok(), !is_cyclic_directed(&g.digraph), "{edges:?}");
    }
}
