//! An undirected graph over an arena of nodes.
//!
//! The graph owns every node it creates in a single `Vec` and hands out
//! [`NodeId`] handles. Edges are stored redundantly in both endpoints'
//! adjacency sets; there is no separate edge list. A second [`NodeSet`]
//! records which nodes are currently vertices of the graph.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `create_node` | \(O(1)\) amortized | Appends to the arena |
//! | `add_vertex` | \(O(1)\) amortized | Hash-set insert |
//! | `add_edge` | \(O(1)\) amortized | Inserts into both adjacency sets |
//! | `remove_edge` | \(O(\text{deg})\) | Order-preserving removal |
//! | `remove_vertex` | \(O(\sum \text{deg}(n))\) over neighbors \(n\) | Snapshots the neighbors first |
//! | traversals | \(O(V + E)\) | Reachable part only |

mod traversal;
mod visited;

pub use traversal::{Bfs, Dfs};

use crate::error::{GraphError, Result};
use crate::node::{Node, NodeId};
use crate::node_set::NodeSet;

/// An undirected, unweighted graph whose vertices hold values of type `V`.
///
/// Mutations are lenient: adding something already present, removing
/// something absent, or passing a handle from another graph is a silent
/// no-op. The `try_*` methods report those cases as [`GraphError`]s instead.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    arena: Vec<Node<V>>,
    vertices: NodeSet,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            vertices: NodeSet::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            vertices: NodeSet::with_capacity(capacity),
        }
    }

    /// Allocates a node holding `value` and returns its handle.
    ///
    /// The node is not a vertex until passed to [`add_vertex`](Self::add_vertex).
    pub fn create_node(&mut self, value: V) -> NodeId {
        self.insert_node(Node::new(value))
    }

    /// Allocates an already-built node, keeping its adjacency set as given.
    pub fn insert_node(&mut self, node: Node<V>) -> NodeId {
        let id = NodeId::new(self.arena.len());
        self.arena.push(node);
        trace_event!(node = %id, "node created");
        id
    }

    /// Adds `vertex` to the vertex set. Adding it twice is a no-op.
    pub fn add_vertex(&mut self, vertex: NodeId) {
        if !self.contains_node(vertex) {
            debug_event!(node = %vertex, "add_vertex ignored: unknown node");
            return;
        }
        if self.vertices.insert(vertex) {
            trace_event!(node = %vertex, "vertex added");
        }
    }

    /// Adds every handle in `vertices`, in order.
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Links `v1` and `v2`. Neither has to be a vertex; `v1 == v2` makes a self-loop.
    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId) {
        if !self.contains_node(v1) || !self.contains_node(v2) {
            debug_event!(node = %v1, neighbor = %v2, "add_edge ignored: unknown node");
            return;
        }
        self.arena[v1.index()].adjacent.insert(v2);
        self.arena[v2.index()].adjacent.insert(v1);
        trace_event!(node = %v1, neighbor = %v2, "edge added");
        self.debug_assert_symmetric(v1, v2);
    }

    /// Unlinks `v1` and `v2` in both directions. No-op if they are not adjacent.
    pub fn remove_edge(&mut self, v1: NodeId, v2: NodeId) {
        if let Some(node) = self.arena.get_mut(v1.index()) {
            node.adjacent.remove(v2);
        }
        if let Some(node) = self.arena.get_mut(v2.index()) {
            node.adjacent.remove(v1);
        }
        trace_event!(node = %v1, neighbor = %v2, "edge removed");
        self.debug_assert_symmetric(v1, v2);
    }

    /// Removes `vertex` from the vertex set and severs all of its edges.
    ///
    /// The node stays in the arena: its value remains readable through
    /// [`value`](Self::value) and it can be added back later.
    ///
    /// The last vertex in [`vertices`](Self::vertices) order takes the
    /// removed vertex's position.
    pub fn remove_vertex(&mut self, vertex: NodeId) {
        self.vertices.swap_remove(vertex);

        let Some(node) = self.arena.get(vertex.index()) else {
            debug_event!(node = %vertex, "remove_vertex ignored: unknown node");
            return;
        };

        // Snapshot before unlinking, the set shrinks underneath us.
        let neighbors = node.adjacent.to_vec();
        for neighbor in neighbors {
            if let Some(other) = self.arena.get_mut(neighbor.index()) {
                other.adjacent.remove(vertex);
            }
        }
        self.arena[vertex.index()].adjacent.clear();
        trace_event!(node = %vertex, "vertex removed");
    }

    /// Like [`add_vertex`](Self::add_vertex), but reports unknown handles.
    ///
    /// Returns `Ok(false)` if the vertex was already present.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] if `vertex` was not issued by this graph.
    pub fn try_add_vertex(&mut self, vertex: NodeId) -> Result<bool> {
        self.check_node(vertex)?;
        let added = self.vertices.insert(vertex);
        if added {
            trace_event!(node = %vertex, "vertex added");
        }
        Ok(added)
    }

    /// Like [`add_edge`](Self::add_edge), but refuses to re-add an existing edge.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] for foreign handles,
    /// [`GraphError::EdgeExists`] if the nodes are already adjacent.
    pub fn try_add_edge(&mut self, v1: NodeId, v2: NodeId) -> Result<()> {
        self.check_node(v1)?;
        self.check_node(v2)?;
        if self.has_edge(v1, v2) {
            return Err(GraphError::EdgeExists(v1, v2));
        }
        self.add_edge(v1, v2);
        Ok(())
    }

    /// Like [`remove_edge`](Self::remove_edge), but reports a missing edge.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] for foreign handles,
    /// [`GraphError::EdgeNotFound`] if the nodes are not adjacent.
    pub fn try_remove_edge(&mut self, v1: NodeId, v2: NodeId) -> Result<()> {
        self.check_node(v1)?;
        self.check_node(v2)?;
        if !self.has_edge(v1, v2) {
            return Err(GraphError::EdgeNotFound(v1, v2));
        }
        self.remove_edge(v1, v2);
        Ok(())
    }

    /// Like [`remove_vertex`](Self::remove_vertex), but reports non-vertices.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] for foreign handles,
    /// [`GraphError::VertexNotFound`] if the node is not in the vertex set.
    pub fn try_remove_vertex(&mut self, vertex: NodeId) -> Result<()> {
        self.check_node(vertex)?;
        if !self.vertices.contains(vertex) {
            return Err(GraphError::VertexNotFound(vertex));
        }
        self.remove_vertex(vertex);
        Ok(())
    }

    /// Returns the node behind `id`, if this graph issued it.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.arena.get(id.index())
    }

    /// Returns the value stored at `id`.
    #[inline]
    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.node(id).map(Node::value)
    }

    /// Returns the value stored at `id` mutably.
    #[inline]
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.arena.get_mut(id.index()).map(Node::value_mut)
    }

    /// Iterates the neighbors of `id` in insertion order.
    ///
    /// Empty for unknown handles.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|node| node.adjacent.iter())
    }

    /// Number of neighbors of `id`. A self-loop counts once.
    pub fn degree(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, |node| node.adjacent.len())
    }

    /// Returns `true` if `v2` is adjacent to `v1`.
    pub fn has_edge(&self, v1: NodeId, v2: NodeId) -> bool {
        self.node(v1).is_some_and(|node| node.adjacent.contains(v2))
    }

    /// Returns `true` if `id` is in the vertex set.
    pub fn contains_vertex(&self, id: NodeId) -> bool {
        self.vertices.contains(id)
    }

    /// Returns `true` if `id` was issued by this graph.
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.arena.len()
    }

    /// Iterates the vertex set.
    ///
    /// Insertion order, except that [`remove_vertex`](Self::remove_vertex)
    /// moves the last vertex into the freed slot.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.vertices.iter()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of nodes ever created in this graph, vertices or not.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of distinct edges across the arena. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.arena
            .iter()
            .enumerate()
            .map(|(i, node)| node.adjacent.iter().filter(|n| n.index() >= i).count())
            .sum()
    }

    /// Returns `true` if the vertex set is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn check_node(&self, id: NodeId) -> Result<()> {
        if self.contains_node(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }

    /// Debug-asserts that the `v1 -- v2` relation is recorded on both sides or neither.
    #[inline]
    fn debug_assert_symmetric(&self, v1: NodeId, v2: NodeId) {
        debug_assert_eq!(
            self.has_edge(v1, v2),
            self.has_edge(v2, v1),
            "adjacency symmetry violated between {v1} and {v2}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (Graph<&'static str>, NodeId, NodeId, NodeId) {
        let mut graph = Graph::new();
        let a = graph.create_node("A");
        let b = graph.create_node("B");
        let c = graph.create_node("C");
        graph.add_vertices([a, b, c]);
        (graph, a, b, c)
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let (mut graph, a, _, _) = abc();
        assert_eq!(graph.vertex_count(), 3);
        graph.add_vertex(a);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let (mut graph, a, b, c) = abc();
        graph.add_edge(a, b);
        graph.add_edge(a, c);

        assert!(graph.has_edge(a, b) && graph.has_edge(b, a));
        assert!(graph.has_edge(a, c) && graph.has_edge(c, a));
        assert!(!graph.has_edge(b, c));
        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![b, c]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_twice_keeps_one_entry() {
        let (mut graph, a, b, _) = abc();
        graph.add_edge(a, b);
        graph.add_edge(b, a);
        assert_eq!(graph.degree(a), 1);
        assert_eq!(graph.degree(b), 1);
    }

    #[test]
    fn test_self_loop_is_permitted() {
        let (mut graph, a, _, _) = abc();
        graph.add_edge(a, a);
        assert!(graph.has_edge(a, a));
        assert_eq!(graph.degree(a), 1);
        assert_eq!(graph.edge_count(), 1);

        graph.remove_vertex(a);
        assert_eq!(graph.degree(a), 0);
    }

    #[test]
    fn test_remove_edge_twice_is_noop() {
        let (mut graph, a, b, _) = abc();
        graph.add_edge(a, b);
        graph.remove_edge(a, b);
        graph.remove_edge(a, b);
        assert!(!graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
    }

    #[test]
    fn test_remove_vertex_severs_all_edges() {
        let (mut graph, a, b, c) = abc();
        graph.add_edge(a, b);
        graph.add_edge(a, c);
        graph.add_edge(b, c);

        graph.remove_vertex(a);

        assert!(!graph.contains_vertex(a));
        assert_eq!(graph.degree(a), 0);
        assert!(!graph.neighbors(b).any(|n| n == a));
        assert!(!graph.neighbors(c).any(|n| n == a));
        assert!(graph.has_edge(b, c));
        assert_eq!(graph.value(a), Some(&"A"));
    }

    #[test]
    fn test_edges_between_non_vertices_are_allowed() {
        let mut graph = Graph::new();
        let x = graph.create_node(1);
        let y = graph.create_node(2);
        graph.add_edge(x, y);

        assert!(graph.is_empty());
        assert!(graph.has_edge(x, y));
    }

    #[test]
    fn test_foreign_handles_are_ignored() {
        let mut big = Graph::new();
        let _ = big.create_node(0);
        let foreign = big.create_node(1);

        let mut graph = Graph::new();
        let a = graph.create_node(10);

        graph.add_vertex(foreign);
        graph.add_edge(a, foreign);
        graph.remove_edge(a, foreign);
        graph.remove_vertex(foreign);

        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.degree(a), 0);
        assert_eq!(graph.degree(foreign), 0);
        assert_eq!(graph.value(foreign), None);
    }

    #[test]
    fn test_strict_mode_reports_redundant_edits() {
        let (mut graph, a, b, _) = abc();

        assert_eq!(graph.try_add_vertex(a), Ok(false));
        assert_eq!(graph.try_add_edge(a, b), Ok(()));
        assert_eq!(graph.try_add_edge(b, a), Err(GraphError::EdgeExists(b, a)));
        assert_eq!(graph.try_remove_edge(a, b), Ok(()));
        assert_eq!(graph.try_remove_edge(a, b), Err(GraphError::EdgeNotFound(a, b)));
        assert_eq!(graph.try_remove_vertex(a), Ok(()));
        assert_eq!(graph.try_remove_vertex(a), Err(GraphError::VertexNotFound(a)));
        assert_eq!(graph.try_add_vertex(a), Ok(true));
    }

    #[test]
    fn test_strict_mode_reports_unknown_nodes() {
        let foreign = NodeId::new(4);

        let (mut graph, a, _, _) = abc();
        assert_eq!(graph.try_add_vertex(foreign), Err(GraphError::UnknownNode(foreign)));
        assert_eq!(graph.try_add_edge(a, foreign), Err(GraphError::UnknownNode(foreign)));
        assert_eq!(graph.try_remove_edge(foreign, a), Err(GraphError::UnknownNode(foreign)));
        assert_eq!(graph.try_remove_vertex(foreign), Err(GraphError::UnknownNode(foreign)));
    }

    #[test]
    fn test_insert_node_keeps_initial_adjacency() {
        let mut graph = Graph::new();
        let a = graph.create_node('a');
        let b = graph.insert_node(Node::with_adjacent('b', [a].into_iter().collect()));

        assert!(graph.has_edge(b, a));
        assert!(!graph.has_edge(a, b));
    }

    #[test]
    fn test_value_mut() {
        let mut graph = Graph::new();
        let a = graph.create_node(String::from("x"));
        if let Some(v) = graph.value_mut(a) {
            v.push('y');
        }
        assert_eq!(graph.value(a).map(String::as_str), Some("xy"));
    }

    #[test]
    fn test_remove_hub_of_large_star() {
        let leaves = 20_000;
        let mut graph = Graph::with_capacity(leaves + 1);
        let hub = graph.create_node(0);
        graph.add_vertex(hub);
        let ids: Vec<_> = (1..=leaves).map(|i| graph.create_node(i)).collect();
        graph.add_vertices(ids.iter().copied());
        for &leaf in &ids {
            graph.add_edge(hub, leaf);
        }
        assert_eq!(graph.degree(hub), leaves);

        graph.remove_vertex(hub);

        assert_eq!(graph.degree(hub), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(ids.iter().all(|&leaf| graph.degree(leaf) == 0));
        assert_eq!(graph.vertex_count(), leaves);
    }

    #[test]
    fn test_teardown_many_vertices() {
        let n = 40_000;
        let mut graph = Graph::with_capacity(n);
        let ids: Vec<_> = (0..n).map(|i| graph.create_node(i)).collect();
        graph.add_vertices(ids.iter().copied());
        graph.add_vertices(ids.iter().copied());
        assert_eq!(graph.vertex_count(), n);

        for &id in &ids {
            graph.remove_vertex(id);
        }
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), n);
    }

    #[test]
    fn test_remove_vertex_moves_last_vertex_into_gap() {
        let (mut graph, a, b, c) = abc();
        graph.remove_vertex(a);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![c, b]);

        graph.add_vertex(a);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![c, b, a]);
    }

    #[test]
    fn test_remove_vertex_keeps_neighbor_order() {
        let mut graph = Graph::new();
        let ids: Vec<_> = (0..4).map(|i| graph.create_node(i)).collect();
        graph.add_vertices(ids.iter().copied());
        for &other in &ids[1..] {
            graph.add_edge(ids[0], other);
        }
        graph.add_edge(ids[1], ids[2]);
        graph.add_edge(ids[1], ids[3]);

        graph.remove_vertex(ids[2]);
        assert_eq!(graph.neighbors(ids[0]).collect::<Vec<_>>(), vec![ids[1], ids[3]]);
        assert_eq!(graph.neighbors(ids[1]).collect::<Vec<_>>(), vec![ids[0], ids[3]]);
    }
}
