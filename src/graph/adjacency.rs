//! Adjacency mappings.
//!
//! [`AdjacencyMap`] is implemented for the standard associative containers so
//! callers can traverse the maps they already have. [`Graph`] is an owned
//! hash-map graph with edge-building helpers and transparent `serde` support,
//! so `{"A": ["B", "C"], "B": []}` deserializes directly.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};

/// A directed graph viewed as node id → ordered neighbour list.
pub trait AdjacencyMap<N> {
    /// Outgoing neighbours of `node`, in edge order.
    ///
    /// Nodes without an entry have no neighbours.
    fn neighbors(&self, node: &N) -> &[N];
}

impl<N, S> AdjacencyMap<N> for HashMap<N, Vec<N>, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<N: Ord> AdjacencyMap<N> for BTreeMap<N, Vec<N>> {
    #[inline]
    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Owned adjacency-list graph keyed by node id.
///
/// # Example
///
/// ```rust
/// use algorist::{breadth_first_search, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2);
/// graph.add_edge(1, 3);
/// graph.add_edge(2, 3);
///
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(breadth_first_search(&graph, 1), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph<N: Eq + Hash> {
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: Eq + Hash> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `nodes` adjacency entries.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Ensures `node` has an (initially empty) adjacency entry.
    ///
    /// Returns `true` if the node was not present before.
    pub fn add_node(&mut self, node: N) -> bool {
        let before = self.adjacency.len();
        self.adjacency.entry(node).or_default();
        self.adjacency.len() != before
    }

    /// Appends the directed edge `from -> to` to `from`'s neighbour list.
    ///
    /// `to` does not get an entry of its own. Parallel edges are kept.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Returns `true` if `node` has an adjacency entry.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes with an adjacency entry.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Iterates over `(node, neighbours)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.adjacency.iter().map(|(n, adj)| (n, adj.as_slice()))
    }

    /// Consumes the graph, returning the underlying map.
    pub fn into_inner(self) -> HashMap<N, Vec<N>> {
        self.adjacency
    }
}

impl<N: Eq + Hash> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash> AdjacencyMap<N> for Graph<N> {
    #[inline]
    fn neighbors(&self, node: &N) -> &[N] {
        self.adjacency.neighbors(node)
    }
}

impl<N: Eq + Hash> From<HashMap<N, Vec<N>>> for Graph<N> {
    fn from(adjacency: HashMap<N, Vec<N>>) -> Self {
        Self { adjacency }
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}
