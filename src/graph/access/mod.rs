//! Internal traversal building blocks.
//!
//! This module is `pub(crate)` so both traversals share one visited-set
//! implementation without exposing it as part of the public API surface.

pub(crate) mod visited;

pub(crate) use visited::Visited;
