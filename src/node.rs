//! Graph nodes and the handles that address them.

use crate::node_set::NodeSet;

/// A stable handle to a node in a [`Graph`](crate::Graph)'s arena.
///
/// Handles are plain indices. They stay valid for the lifetime of the graph
/// that issued them, including after the node is removed from the vertex set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index behind this handle.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value together with the set of nodes adjacent to it.
///
/// The graph mutates `adjacent` directly; the value is never touched by
/// graph operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    value: V,
    pub(crate) adjacent: NodeSet,
}

impl<V> Node<V> {
    /// Creates a node with no neighbors.
    pub fn new(value: V) -> Self {
        Self::with_adjacent(value, NodeSet::new())
    }

    /// Creates a node with an initial adjacency set.
    ///
    /// The set is taken as-is: the listed neighbors are not updated to point
    /// back, so use [`Graph::add_edge`](crate::Graph::add_edge) when symmetry
    /// matters.
    pub fn with_adjacent(value: V, adjacent: NodeSet) -> Self {
        Self { value, adjacent }
    }

    /// Returns the node's value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the node's value mutably.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns the set of adjacent nodes.
    #[inline]
    pub fn adjacent(&self) -> &NodeSet {
        &self.adjacent
    }

    /// Consumes the node, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }
}
