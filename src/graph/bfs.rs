//! Breadth-first traversal.
//!
//! Nodes come out in non-decreasing distance from the start; nodes at equal
//! distance come out in the order their parents list them.
//!
//! A node is marked visited when it is first enqueued rather than when it is
//! dequeued. The yielded order is the same either way, but marking early keeps
//! every node in the queue at most once.

use std::collections::VecDeque;
use std::hash::Hash;

use super::access::Visited;
use super::AdjacencyMap;

/// An iterator yielding node ids in breadth-first order.
///
/// It uses an internal `VecDeque` work queue and a visited set for state
/// management; the graph is only borrowed.
pub struct Bfs<'g, G: ?Sized, N> {
    graph: &'g G,
    visited: Visited<N>,
    queue: VecDeque<N>,
}

impl<'g, G, N> Bfs<'g, G, N>
where
    G: AdjacencyMap<N> + ?Sized,
    N: Eq + Hash + Clone,
{
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// `start` is always yielded first, whether or not the graph has an entry
    /// for it.
    pub fn new(graph: &'g G, start: N) -> Self {
        let mut visited = Visited::new();
        visited.try_visit(&start);

        let mut queue = VecDeque::new();
        queue.push_back(start);

        Self {
            graph,
            visited,
            queue,
        }
    }

    /// Number of nodes discovered so far, including those still queued.
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if `node` has been discovered (yielded or queued).
    pub fn is_discovered(&self, node: &N) -> bool {
        self.visited.is_visited(node)
    }
}

impl<'g, G, N> Iterator for Bfs<'g, G, N>
where
    G: AdjacencyMap<N> + ?Sized,
    N: Eq + Hash + Clone,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for next in self.graph.neighbors(&node) {
            if self.visited.try_visit(next) {
                self.queue.push_back(next.clone());
            }
        }

        Some(node)
    }
}

/// Returns every node reachable from `start` in breadth-first order.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use algorist::breadth_first_search;
///
/// let graph = HashMap::from([
///     ('A', vec!['B', 'C']),
///     ('B', vec!['D', 'E']),
///     ('C', vec!['F']),
/// ]);
/// assert_eq!(
///     breadth_first_search(&graph, 'A'),
///     vec!['A', 'B', 'C', 'D', 'E', 'F']
/// );
/// ```
pub fn breadth_first_search<G, N>(graph: &G, start: N) -> Vec<N>
where
    G: AdjacencyMap<N> + ?Sized,
    N: Eq + Hash + Clone,
{
    let order: Vec<N> = Bfs::new(graph, start).collect();
    trace_op!(op = "breadth_first_search", visited = order.len());
    order
}
