//! Traversals over a [`Graph`]: DFS, BFS and unweighted shortest paths.
//!
//! [`Dfs`] and [`Bfs`] are lazy iterators yielding [`NodeId`]s. Both mark a
//! node as seen the moment it is scheduled (pushed or enqueued), not when it
//! is emitted, so no node is ever scheduled twice. Neighbors are scheduled in
//! adjacency insertion order, which makes every traversal deterministic.

use std::collections::VecDeque;

use super::visited::VisitedSet;
use super::Graph;
use crate::error::{GraphError, Result};
use crate::node::NodeId;

/// An iterator for Depth-First Search (DFS).
///
/// Pops the most recently pushed node, then pushes all of its unseen
/// neighbors. With neighbors `[b, c]`, `c` is therefore explored before `b`.
pub struct Dfs<'g, V> {
    graph: &'g Graph<V>,
    visited: VisitedSet,
    stack: Vec<NodeId>,
}

impl<'g, V> Dfs<'g, V> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// Yields nothing if `start` was not issued by `graph`.
    pub fn new(graph: &'g Graph<V>, start: NodeId) -> Self {
        let mut visited = VisitedSet::new(graph.node_count());
        let mut stack = Vec::new();

        if visited.try_visit(start.index()) {
            stack.push(start);
        }

        Self {
            graph,
            visited,
            stack,
        }
    }
}

impl<V> Iterator for Dfs<'_, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        let graph = self.graph;
        for v in graph.neighbors(u) {
            if self.visited.try_visit(v.index()) {
                self.stack.push(v);
            }
        }

        Some(u)
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Yields nodes in level order; ties within a level follow the order in
/// which their parents were visited and then adjacency insertion order.
pub struct Bfs<'g, V> {
    graph: &'g Graph<V>,
    visited: VisitedSet,
    queue: VecDeque<NodeId>,
}

impl<'g, V> Bfs<'g, V> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// Yields nothing if `start` was not issued by `graph`.
    pub fn new(graph: &'g Graph<V>, start: NodeId) -> Self {
        let mut visited = VisitedSet::new(graph.node_count());
        let mut queue = VecDeque::new();

        if visited.try_visit(start.index()) {
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<V> Iterator for Bfs<'_, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        let graph = self.graph;
        for v in graph.neighbors(u) {
            if self.visited.try_visit(v.index()) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

impl<V> Graph<V> {
    /// Returns a lazy depth-first traversal starting at `start`.
    pub fn dfs(&self, start: NodeId) -> Dfs<'_, V> {
        Dfs::new(self, start)
    }

    /// Returns a lazy breadth-first traversal starting at `start`.
    pub fn bfs(&self, start: NodeId) -> Bfs<'_, V> {
        Bfs::new(self, start)
    }

    /// Collects the values reachable from `start` in depth-first order.
    ///
    /// Unreachable nodes are absent; an unknown `start` gives an empty `Vec`.
    pub fn depth_first_search(&self, start: NodeId) -> Vec<&V> {
        let values: Vec<&V> = self.dfs(start).map(|id| self.arena[id.index()].value()).collect();
        trace_event!(start = %start, visited = values.len(), "depth-first search");
        values
    }

    /// Collects the values reachable from `start` in breadth-first order.
    ///
    /// Unreachable nodes are absent; an unknown `start` gives an empty `Vec`.
    pub fn breadth_first_search(&self, start: NodeId) -> Vec<&V> {
        let values: Vec<&V> = self.bfs(start).map(|id| self.arena[id.index()].value()).collect();
        trace_event!(start = %start, visited = values.len(), "breadth-first search");
        values
    }

    /// Number of edges on a shortest path from `start` to `end`.
    ///
    /// Processes the BFS frontier in waves and counts completed waves until
    /// `end` is dequeued. Returns `Some(0)` when `start == end` and `None`
    /// when `end` is unreachable (or either handle is unknown).
    pub fn distance_of_shortest_path(&self, start: NodeId, end: NodeId) -> Option<usize> {
        let mut visited = VisitedSet::new(self.node_count());
        if !visited.try_visit(start.index()) {
            return None;
        }
        let mut queue = VecDeque::from([start]);

        let mut nodes_at_level = 1usize;
        let mut nodes_at_next_level = 0usize;
        let mut depth = 0usize;

        while let Some(u) = queue.pop_front() {
            if u == end {
                trace_event!(start = %start, end = %end, distance = depth, "shortest path found");
                return Some(depth);
            }

            for v in self.neighbors(u) {
                if visited.try_visit(v.index()) {
                    queue.push_back(v);
                    nodes_at_next_level += 1;
                }
            }

            nodes_at_level -= 1;
            if nodes_at_level == 0 {
                depth += 1;
                nodes_at_level = nodes_at_next_level;
                nodes_at_next_level = 0;
            }
        }

        debug_event!(start = %start, end = %end, "no path");
        None
    }

    /// Like [`distance_of_shortest_path`](Self::distance_of_shortest_path),
    /// but says why no distance exists.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] for foreign handles,
    /// [`GraphError::Unreachable`] if no path connects the nodes.
    pub fn try_distance_of_shortest_path(&self, start: NodeId, end: NodeId) -> Result<usize> {
        self.check_node(start)?;
        self.check_node(end)?;
        self.distance_of_shortest_path(start, end)
            .ok_or(GraphError::Unreachable(start, end))
    }

    /// A shortest path from `start` to `end`, both endpoints included.
    ///
    /// The path has `distance + 1` nodes; `vec![start]` when `start == end`.
    /// When several shortest paths exist, the one BFS discovers first wins.
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Option<Vec<NodeId>> {
        let mut visited = VisitedSet::new(self.node_count());
        if !visited.try_visit(start.index()) {
            return None;
        }
        let mut preds: Vec<Option<NodeId>> = vec![None; self.node_count()];
        let mut queue = VecDeque::from([start]);

        while let Some(u) = queue.pop_front() {
            if u == end {
                let mut path = vec![end];
                let mut curr = end;
                while let Some(prev) = preds[curr.index()] {
                    path.push(prev);
                    curr = prev;
                }
                path.reverse();
                return Some(path);
            }

            for v in self.neighbors(u) {
                if visited.try_visit(v.index()) {
                    preds[v.index()] = Some(u);
                    queue.push_back(v);
                }
            }
        }

        None
    }
}
