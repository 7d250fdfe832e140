//! Comparison sorts with value semantics.
//!
//! Every sort borrows its input and returns a freshly allocated, ascending
//! `Vec<T>` holding the same multiset of elements. The caller's slice is never
//! reordered.
//!
//! - `bubble`: adjacent-swap passes with early exit.
//! - `quick`: three-way partition around the middle element.
//! - `merge`: top-down merge sort and the stable merge primitive.
//!
//! Each sort has a `_by` form taking a comparator. The comparator must
//! describe a total order; otherwise the output order is unspecified (but the
//! output is still a permutation of the input).

pub mod bubble;
pub mod merge;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod quick;

pub use bubble::{bubble_sort, bubble_sort_by};
pub use merge::{merge, merge_by, merge_sort, merge_sort_by};
#[cfg(feature = "parallel")]
pub use parallel::{par_merge_sort, par_merge_sort_by, PARALLEL_CUTOFF};
pub use quick::{quick_sort, quick_sort_by};

/// Returns `true` if `items` is in non-decreasing order.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}
