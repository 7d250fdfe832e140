//! Visited set for traversals over hashable node ids.
//!
//! Traversals report discovery order through their own output; this set only
//! answers membership. Keeping the two apart lets the iterators yield nodes
//! lazily while still guaranteeing each node is produced once.

use std::collections::HashSet;
use std::hash::Hash;

/// Membership record of nodes already discovered by a traversal.
#[derive(Debug, Clone)]
pub(crate) struct Visited<N> {
    seen: HashSet<N>,
}

impl<N: Eq + Hash + Clone> Visited<N> {
    pub(crate) fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: &N) -> bool {
        if self.seen.contains(node) {
            false
        } else {
            self.seen.insert(node.clone());
            true
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, node: &N) -> bool {
        self.seen.contains(node)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}
