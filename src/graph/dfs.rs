//! Depth-first traversal in pre-order.
//!
//! The order is exactly that of the textbook recursion: visit a node, then
//! descend into each unvisited neighbour in edge order before moving on. The
//! recursion is replaced by a stack of neighbour cursors, one per node on the
//! current path, so traversal depth is bounded by heap rather than by the
//! thread's call stack.

use core::slice;
use std::hash::Hash;

use super::access::Visited;
use super::AdjacencyMap;

/// An iterator yielding node ids in depth-first pre-order.
///
/// Each stack entry is the remaining neighbour list of a node on the current
/// path. The visited check happens before descending, which keeps cyclic
/// graphs finite.
pub struct Dfs<'g, G: ?Sized, N> {
    graph: &'g G,
    visited: Visited<N>,
    start: Option<N>,
    stack: Vec<slice::Iter<'g, N>>,
}

impl<'g, G, N> Dfs<'g, G, N>
where
    G: AdjacencyMap<N> + ?Sized,
    N: Eq + Hash + Clone,
{
    /// Creates a new DFS iterator starting from `start`.
    pub fn new(graph: &'g G, start: N) -> Self {
        Self {
            graph,
            visited: Visited::new(),
            start: Some(start),
            stack: Vec::new(),
        }
    }

    /// Number of nodes yielded so far.
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if `node` has already been yielded.
    pub fn is_discovered(&self, node: &N) -> bool {
        self.visited.is_visited(node)
    }

    /// Length of the current root-to-node path.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<'g, G, N> Iterator for Dfs<'g, G, N>
where
    G: AdjacencyMap<N> + ?Sized,
    N: Eq + Hash + Clone,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;

        if let Some(start) = self.start.take() {
            self.visited.try_visit(&start);
            self.stack.push(graph.neighbors(&start).iter());
            return Some(start);
        }

        while let Some(cursor) = self.stack.last_mut() {
            match cursor.next() {
                Some(node) => {
                    if self.visited.try_visit(node) {
                        self.stack.push(graph.neighbors(node).iter());
                        return Some(node.clone());
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

/// Returns every node reachable from `start` in depth-first pre-order.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use algorist::depth_first_search;
///
/// let graph = HashMap::from([
///     ('A', vec!['B', 'C']),
///     ('B', vec!['D', 'E']),
///     ('C', vec!['F']),
/// ]);
/// assert_eq!(
///     depth_first_search(&graph, 'A'),
///     vec!['A', 'B', 'D', 'E', 'C', 'F']
/// );
/// ```
pub fn depth_first_search<G, N>(graph: &G, start: N) -> Vec<N>
where
    G: AdjacencyMap<N> + ?Sized,
    N: Eq + Hash + Clone,
{
    let order: Vec<N> = Dfs::new(graph, start).collect();
    trace_op!(op = "depth_first_search", visited = order.len());
    order
}
