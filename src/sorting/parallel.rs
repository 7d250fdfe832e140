//! Fork-join merge sort on the `rayon` pool.
//!
//! Runs longer than [`PARALLEL_CUTOFF`] sort their halves with `rayon::join`;
//! shorter runs fall back to the sequential sort. Halving and merging follow
//! [`merge_sort`](super::merge_sort) exactly, so the output is identical,
//! stability included.

use core::cmp::Ordering;

use super::merge::{merge_by, sort_halves};

/// Run length at or below which halves are sorted on the current thread.
pub const PARALLEL_CUTOFF: usize = 4096;

/// Parallel counterpart of [`merge_sort`](super::merge_sort).
pub fn par_merge_sort<T>(input: &[T]) -> Vec<T>
where
    T: Ord + Clone + Send + Sync,
{
    par_merge_sort_by(input, T::cmp)
}

/// Parallel counterpart of [`merge_sort_by`](super::merge_sort_by).
///
/// The comparator is shared between worker threads, so it must be `Fn + Sync`.
pub fn par_merge_sort_by<T, F>(input: &[T], compare: F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    trace_op!(op = "par_merge_sort", len = input.len(), cutoff = PARALLEL_CUTOFF);
    fork_halves(input, &compare)
}

fn fork_halves<T, F>(run: &[T], compare: &F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if run.len() <= PARALLEL_CUTOFF {
        return sort_halves(run, &mut |a: &T, b: &T| compare(a, b));
    }

    let (lower, upper) = run.split_at(run.len() / 2);
    let (left, right) = rayon::join(|| fork_halves(lower, compare), || fork_halves(upper, compare));
    merge_by(left, right, compare)
}
