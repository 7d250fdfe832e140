//! Traversals over adjacency mappings.
//!
//! A graph is anything implementing [`AdjacencyMap`]: a mapping from a node id
//! to its ordered neighbour list. Edges are directed, and a node missing from
//! the mapping simply has no outgoing edges, so traversals tolerate start
//! nodes and neighbours that are not keys.
//!
//! - `adjacency`: the [`AdjacencyMap`] seam and the owned [`Graph`] type.
//! - `bfs`: breadth-first order, lazily via [`Bfs`].
//! - `dfs`: depth-first pre-order, lazily via [`Dfs`], on an explicit stack.
//!
//! Both traversals return every node reachable from the start exactly once.

pub mod adjacency;
pub mod bfs;
pub mod dfs;
pub(crate) mod access;

pub use adjacency::{AdjacencyMap, Graph};
pub use bfs::{breadth_first_search, Bfs};
pub use dfs::{depth_first_search, Dfs};
