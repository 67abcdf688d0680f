//! Visited sets for graph traversals.
//!
//! Every traversal in this crate marks a node as seen at the moment it is
//! scheduled. A word-packed bit vector sized to the arena keeps that cheap,
//! one allocation per traversal.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set sized to the graph's arena.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    bits: usize,
}

impl VisitedSet {
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            bits,
        }
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    ///
    /// Out-of-range nodes are never visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        if node >= self.bits {
            return false;
        }
        let mask = 1u64 << (node % WORD_BITS);
        let word = &mut self.words[node / WORD_BITS];
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }
}
