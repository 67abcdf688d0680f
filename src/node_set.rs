//! An insertion-ordered set of node handles.
//!
//! Backs both a node's adjacency and a graph's vertex set. Membership is a
//! hash lookup; iteration follows insertion order so traversals are
//! deterministic.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert` | \(O(1)\) amortized | No-op if present |
//! | `remove` | \(O(n)\) | Shifts later members, order preserved |
//! | `swap_remove` | \(O(1)\) | Last member takes the freed slot |
//! | `contains` | \(O(1)\) | Hash lookup |
//! | `clear` | \(O(n)\) | |
//! | `iter` | \(O(1)\) per step | Insertion order |

use indexmap::IndexSet;

use crate::node::NodeId;

/// A duplicate-free, insertion-ordered set of [`NodeId`]s.
///
/// Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet {
    ids: IndexSet<NodeId>,
}

impl NodeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            ids: IndexSet::new(),
        }
    }

    /// Creates an empty set with room for `capacity` handles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: IndexSet::with_capacity(capacity),
        }
    }

    /// Adds `id` to the end of the set.
    ///
    /// Returns `false` (and leaves the order untouched) if it was already present.
    pub fn insert(&mut self, id: NodeId) -> bool {
        self.ids.insert(id)
    }

    /// Removes `id`, returning whether it was present.
    ///
    /// The remaining members keep their relative order.
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.ids.shift_remove(&id)
    }

    /// Removes `id` in constant time, returning whether it was present.
    ///
    /// The last member moves into the freed position.
    pub fn swap_remove(&mut self, id: NodeId) -> bool {
        self.ids.swap_remove(&id)
    }

    /// Returns `true` if `id` is a member.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Iterates members in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator + '_ {
        self.ids.iter().copied()
    }

    /// Copies the members out, in insertion order.
    ///
    /// Use this to snapshot a set before mutating it while walking it.
    pub fn to_vec(&self) -> Vec<NodeId> {
        self.iter().collect()
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<NodeId> for NodeSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = NodeId;
    type IntoIter = core::iter::Copied<indexmap::set::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter().copied()
    }
}
