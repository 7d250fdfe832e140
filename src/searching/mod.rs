//! Index lookup over slices.
//!
//! Searches report a hit as `Some(index)` and a miss as `None`. Callers that
//! need the classic numeric sentinel can convert with [`to_sentinel`], which
//! maps a miss to [`NOT_FOUND`] (`-1`).

pub mod binary;
pub mod linear;

pub use binary::{binary_search, binary_search_by};
pub use linear::{linear_search, linear_search_by};

/// Numeric "not found" sentinel.
pub const NOT_FOUND: isize = -1;

/// Converts a search result into a signed index, `-1` meaning "not found".
///
/// # Example
///
/// ```rust
/// use algorist::{binary_search, to_sentinel};
///
/// let sorted = [1, 3, 5, 7, 9, 11];
/// assert_eq!(to_sentinel(binary_search(&sorted, &7)), 3);
/// assert_eq!(to_sentinel(binary_search(&sorted, &6)), -1);
/// ```
pub fn to_sentinel(found: Option<usize>) -> isize {
    // Slice indices of sized elements never exceed isize::MAX.
    found.and_then(|i| isize::try_from(i).ok()).unwrap_or(NOT_FOUND)
}
