//! Bubble sort.
//!
//! After pass `i` the last `i + 1` elements are in their final position, so
//! each pass only scans the unsorted prefix. A pass that performs no swap
//! proves the whole vector is ordered and ends the sort early.
//!
//! O(n²) comparisons in the worst and average case, O(n) on sorted input.

use core::cmp::Ordering;

/// Sorts a copy of `input` in ascending order.
///
/// # Example
///
/// ```rust
/// use algorist::bubble_sort;
///
/// assert_eq!(
///     bubble_sort(&[64, 34, 25, 12, 22, 11, 90]),
///     vec![11, 12, 22, 25, 34, 64, 90]
/// );
/// ```
pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    bubble_sort_by(input, T::cmp)
}

/// Sorts a copy of `input` using `compare` as the ordering.
///
/// Only strictly out-of-order neighbours are swapped, so the sort is stable.
pub fn bubble_sort_by<T, F>(input: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    trace_op!(op = "bubble_sort", len = input.len());

    let mut items = input.to_vec();
    let n = items.len();

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if compare(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    items
}
