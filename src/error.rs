//! Errors reported by the strict (`try_*`) graph operations.
//!
//! The lenient operations on [`Graph`](crate::Graph) never fail; these
//! variants describe what they would have silently ignored.

use crate::node::NodeId;

/// Error type for the validating graph API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// The handle does not belong to this graph's arena.
    UnknownNode(NodeId),
    /// The node exists but is not part of the vertex set.
    VertexNotFound(NodeId),
    /// The two nodes are already adjacent.
    EdgeExists(NodeId, NodeId),
    /// The two nodes are not adjacent.
    EdgeNotFound(NodeId, NodeId),
    /// No path connects the two nodes.
    Unreachable(NodeId, NodeId),
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "node {id} does not belong to this graph"),
            Self::VertexNotFound(id) => write!(f, "node {id} is not a vertex of this graph"),
            Self::EdgeExists(a, b) => write!(f, "edge {a} -- {b} already exists"),
            Self::EdgeNotFound(a, b) => write!(f, "edge {a} -- {b} does not exist"),
            Self::Unreachable(a, b) => write!(f, "no path from {a} to {b}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias for the validating graph API.
pub type Result<T> = core::result::Result<T, GraphError>;
