//! Tabulated dynamic programming.
//!
//! Each routine fills a table bottom-up from the smallest subproblem and
//! reads its answer off the last cell. Tables live only for the duration of
//! the call.

pub mod fibonacci;
pub mod lcs;
pub mod table;

pub use fibonacci::{fibonacci, fibonacci_as};
pub use lcs::{lcs_length, longest_common_subsequence, longest_common_subsequence_items};
pub use table::DpTable;
