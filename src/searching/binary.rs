//! Binary search over an ascending slice.
//!
//! Keeps a closed interval `[low, high]` of candidate indices and inspects
//! `(low + high) / 2`. The interval is empty once `low > high`; since indices
//! are unsigned, the "high = mid - 1" step at `mid == 0` ends the search
//! instead of wrapping.
//!
//! The ascending-order precondition is not checked. On unsorted input the
//! result is an arbitrary matching index or `None`, never a panic.

use core::cmp::Ordering;

/// Returns an index `i` with `items[i] == *target`, if any.
///
/// `items` must be sorted ascending.
///
/// # Example
///
/// ```rust
/// use algorist::binary_search;
///
/// let sorted = [1, 3, 5, 7, 9, 11];
/// assert_eq!(binary_search(&sorted, &7), Some(3));
/// assert_eq!(binary_search(&sorted, &6), None);
/// ```
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    binary_search_by(items, |item| item.cmp(target))
}

/// Binary search driven by a comparator.
///
/// `compare(item)` reports how the inspected element orders relative to the
/// target: `Less` moves the search right, `Greater` moves it left, `Equal` is
/// a hit.
pub fn binary_search_by<T, F>(items: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    trace_op!(op = "binary_search", len = items.len());

    let mut low = 0usize;
    let mut high = items.len().checked_sub(1)?;

    while low <= high {
        let mid = low + (high - low) / 2;
        match compare(&items[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid.checked_sub(1)?,
        }
    }

    None
}
