//! Top-down merge sort and the stable merge primitive.
//!
//! The run is halved at `len / 2` (the lower half takes the first ⌊n/2⌋
//! elements), both halves are sorted, then merged. O(n log n) comparisons,
//! O(log n) recursion depth.
//!
//! # Stability
//!
//! [`merge_by`] takes from the left run whenever `left <= right`. Since the
//! left run always holds the earlier input positions, equal elements leave the
//! sort in the order they entered it.

use core::cmp::Ordering;

/// Sorts a copy of `input` in ascending order. Stable.
///
/// # Example
///
/// ```rust
/// use algorist::merge_sort;
///
/// assert_eq!(
///     merge_sort(&[38, 27, 43, 3, 9, 82, 10]),
///     vec![3, 9, 10, 27, 38, 43, 82]
/// );
/// ```
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    merge_sort_by(input, T::cmp)
}

/// Sorts a copy of `input` using `compare` as the ordering. Stable.
pub fn merge_sort_by<T, F>(input: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    trace_op!(op = "merge_sort", len = input.len());
    sort_halves(input, &mut compare)
}

pub(crate) fn sort_halves<T, F>(run: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if run.len() <= 1 {
        return run.to_vec();
    }

    let (lower, upper) = run.split_at(run.len() / 2);
    let left = sort_halves(lower, compare);
    let right = sort_halves(upper, compare);
    merge_by(left, right, &mut *compare)
}

/// Merges two ascending vectors into one ascending vector.
///
/// Ties are resolved in favour of `left`.
///
/// # Example
///
/// ```rust
/// use algorist::merge;
///
/// assert_eq!(merge(vec![1, 4, 9], vec![2, 4, 10]), vec![1, 2, 4, 4, 9, 10]);
/// ```
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    merge_by(left, right, T::cmp)
}

/// Merges two vectors that are each ascending under `compare`.
///
/// An element of `left` is emitted first whenever it does not compare
/// `Greater` than the head of `right`. Inputs that are not ascending still
/// yield every element exactly once, in unspecified order.
pub fn merge_by<T, F>(left: Vec<T>, right: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if compare(l, r) == Ordering::Greater {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
