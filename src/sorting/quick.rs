//! Three-way quick sort.
//!
//! The pivot is always the middle element of the current run (`run[len / 2]`).
//! Elements are split into strictly-less, equal and strictly-greater groups;
//! only the outer two are sorted recursively.
//!
//! The middle pivot is not randomised: adversarial inputs can still drive the
//! sort to O(n²) comparisons and O(n) recursion depth. The rule is kept fixed
//! so output order for equal keys is reproducible.

use core::cmp::Ordering;

/// Sorts a copy of `input` in ascending order.
///
/// # Example
///
/// ```rust
/// use algorist::quick_sort;
///
/// assert_eq!(quick_sort(&[10, 7, 8, 9, 1, 5]), vec![1, 5, 7, 8, 9, 10]);
/// ```
pub fn quick_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    quick_sort_by(input, T::cmp)
}

/// Sorts a copy of `input` using `compare` as the ordering.
pub fn quick_sort_by<T, F>(input: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    trace_op!(op = "quick_sort", len = input.len());
    partition_sort(input, &mut compare)
}

fn partition_sort<T, F>(run: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if run.len() <= 1 {
        return run.to_vec();
    }

    let pivot = &run[run.len() / 2];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for item in run {
        match compare(item, pivot) {
            Ordering::Less => less.push(item.clone()),
            Ordering::Equal => equal.push(item.clone()),
            Ordering::Greater => greater.push(item.clone()),
        }
    }

    let mut sorted = partition_sort(&less, compare);
    sorted.reserve(equal.len() + greater.len());
    sorted.append(&mut equal);
    sorted.append(&mut partition_sort(&greater, compare));
    sorted
}
