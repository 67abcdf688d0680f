//! # `nodegraph` - Arena-backed undirected graphs
//!
//! A small undirected graph whose vertices hold arbitrary values and whose
//! edges live in per-node adjacency sets. Supports vertex/edge mutation and
//! three traversal queries: depth-first, breadth-first and unweighted
//! shortest-path distance.
//!
//! ## Architecture
//!
//! Nodes are stored in a single arena owned by the [`Graph`] and addressed by
//! [`NodeId`] handles, so mutually adjacent nodes never form ownership cycles.
//! The graph keeps a second [`NodeSet`] of "active" handles: its vertex set.
//!
//! 1. **Arena** (`Vec<Node<V>>`):
//!    - Nodes are never deallocated, handles never dangle
//!    - Removing a vertex severs its edges but keeps its value readable
//!
//! 2. **Adjacency** ([`NodeSet`]):
//!    - Duplicate-free, iterates in insertion order
//!    - Symmetric: `b ∈ adj(a)` iff `a ∈ adj(b)`
//!
//! 3. **Traversals** ([`Dfs`], [`Bfs`]):
//!    - Iterative (explicit stack / queue), no recursion depth limits
//!    - Nodes are marked seen when pushed, so each is emitted once
//!
//! ## Error policy
//!
//! Mutations are lenient by default: redundant or unknown operations are
//! silent no-ops. Every mutation has a `try_*` twin returning
//! [`Result`] for callers who want validation.
//!
//! ## Example
//!
//! ```rust
//! use nodegraph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.create_node("A");
//! let b = graph.create_node("B");
//! let c = graph.create_node("C");
//! graph.add_vertices([a, b, c]);
//! graph.add_edge(a, b);
//! graph.add_edge(b, c);
//!
//! assert_eq!(graph.breadth_first_search(a), vec![&"A", &"B", &"C"]);
//! assert_eq!(graph.distance_of_shortest_path(a, c), Some(2));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;
pub mod node;
pub mod node_set;
#[cfg(feature = "proptest")]
pub mod strategy;

pub use error::{GraphError, Result};
pub use graph::{Bfs, Dfs, Graph};
pub use node::{Node, NodeId};
pub use node_set::NodeSet;

// Handles are plain indices.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());
};
