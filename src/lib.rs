//! # `algorist` - Canonical Algorithm Library
//!
//! Small, correctness-verified building blocks: sorting, searching, graph
//! traversal and dynamic programming. Every routine is a free-standing,
//! synchronous, pure function over borrowed input; nothing is shared between
//! calls and nothing is mutated behind the caller's back.
//!
//! ## Families
//!
//! - [`sorting`]: bubble, quick and merge sort, plus the stable [`merge`](sorting::merge)
//!   primitive merge sort is built on.
//! - [`searching`]: linear and binary search.
//! - [`graph`]: breadth-first and depth-first traversal over any adjacency mapping.
//! - [`dynamic`]: tabulated Fibonacci and longest common subsequence.
//!
//! ## Guarantees
//!
//! - **Value semantics**: sorts take `&[T]` and return a fresh `Vec<T>`.
//! - **Stability**: [`merge_sort`] keeps equal elements in input order, because
//!   [`merge`](sorting::merge) always prefers the left run on ties.
//! - **No hidden panics**: binary search on unsorted input returns an
//!   unspecified answer rather than underflowing; invalid Fibonacci indices and
//!   overflow are reported through [`AlgoError`].
//! - **Bounded recursion**: depth-first traversal runs on an explicit frame
//!   stack, so deep graphs do not exhaust the call stack.
//!
//! ## Features
//!
//! - `parallel`: enables `sorting::par_merge_sort` on top of `rayon`.
//! - `tracing`: emits `tracing` events at every family entry point.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use algorist::{binary_search, breadth_first_search, merge_sort};
//!
//! let sorted = merge_sort(&[38, 27, 43, 3, 9, 82, 10]);
//! assert_eq!(sorted, vec![3, 9, 10, 27, 38, 43, 82]);
//! assert_eq!(binary_search(&sorted, &43), Some(5));
//!
//! let mut graph = HashMap::new();
//! graph.insert('A', vec!['B', 'C']);
//! graph.insert('B', vec!['D']);
//! assert_eq!(breadth_first_search(&graph, 'A'), vec!['A', 'B', 'C', 'D']);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod dynamic;
pub mod error;
pub mod graph;
pub mod searching;
pub mod sorting;

pub use dynamic::{fibonacci, fibonacci_as, lcs_length, longest_common_subsequence};
pub use error::{AlgoError, Result};
pub use graph::{breadth_first_search, depth_first_search, AdjacencyMap, Bfs, Dfs, Graph};
pub use searching::{binary_search, linear_search, to_sentinel, NOT_FOUND};
pub use sorting::{bubble_sort, merge, merge_sort, quick_sort};
