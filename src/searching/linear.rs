//! Sequential scan. No ordering precondition.

/// Returns the index of the first element equal to `target`.
///
/// # Example
///
/// ```rust
/// use algorist::linear_search;
///
/// assert_eq!(linear_search(&[4, 2, 7, 1, 9, 3], &7), Some(2));
/// assert_eq!(linear_search(&[4, 2, 7], &5), None);
/// ```
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    linear_search_by(items, |item| item == target)
}

/// Returns the index of the first element satisfying `predicate`.
pub fn linear_search_by<T, P>(items: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    trace_op!(op = "linear_search", len = items.len());
    items.iter().position(predicate)
}
