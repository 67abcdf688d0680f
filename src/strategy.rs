//! `proptest` strategies for random graphs.
//!
//! Enabled by the `proptest` feature so downstream crates can property-test
//! code built on [`Graph`].

use proptest::prelude::*;

use crate::Graph;

/// Generates `(node_count, edges)` with `1..=max_nodes` nodes and up to
/// `max_edges` edges whose endpoints are in range. Self-loops and repeats occur.
pub fn edge_list(
    max_nodes: usize,
    max_edges: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..=max_nodes.max(1)).prop_flat_map(move |n| {
        let edges = proptest::collection::vec((0..n, 0..n), 0..=max_edges);
        (Just(n), edges)
    })
}

/// Generates a graph whose node `i` holds the value `i`; every node is a vertex.
pub fn graph(max_nodes: usize, max_edges: usize) -> impl Strategy<Value = Graph<usize>> {
    edge_list(max_nodes, max_edges).prop_map(|(n, edges)| build(n, &edges))
}

/// Builds a graph from an edge list, node `i` holding the value `i`.
pub fn build(node_count: usize, edges: &[(usize, usize)]) -> Graph<usize> {
    let mut graph = Graph::with_capacity(node_count);
    let ids: Vec<_> = (0..node_count).map(|i| graph.create_node(i)).collect();
    graph.add_vertices(ids.iter().copied());
    for &(a, b) in edges {
        if let (Some(&a), Some(&b)) = (ids.get(a), ids.get(b)) {
            graph.add_edge(a, b);
        }
    }
    graph
}
