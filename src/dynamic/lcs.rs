//! Longest common subsequence.
//!
//! Cell `(i, j)` of an `(m + 1) x (n + 1)` table holds the LCS length of the
//! first `i` elements of `a` and the first `j` elements of `b`. Row 0 and
//! column 0 stay zero. When `a[i - 1] == b[j - 1]` the cell extends the
//! diagonal predecessor by one; otherwise it takes the larger of the cells
//! above and to the left. O(m·n) time and space.

use super::table::DpTable;

/// Returns the length of the longest common subsequence of `a` and `b`.
///
/// # Example
///
/// ```rust
/// use algorist::longest_common_subsequence;
///
/// assert_eq!(longest_common_subsequence(&[1, 2, 3, 4], &[2, 4, 5]), 2);
/// ```
pub fn longest_common_subsequence<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    trace_op!(op = "longest_common_subsequence", left = a.len(), right = b.len());
    lcs_table(a, b).corner().copied().unwrap_or(0)
}

/// [`longest_common_subsequence`] over the `char`s of two strings.
///
/// # Example
///
/// ```rust
/// use algorist::lcs_length;
///
/// assert_eq!(lcs_length("abcde", "ace"), 3);
/// assert_eq!(lcs_length("abc", ""), 0);
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    longest_common_subsequence(&a, &b)
}

/// Returns one longest common subsequence of `a` and `b`.
///
/// The table is walked back from the corner. On a match the element is taken
/// diagonally; otherwise the walk moves up when the cell above is at least as
/// large as the cell to the left, so among equally long answers the one
/// favouring later elements of `b` is chosen.
///
/// # Example
///
/// ```rust
/// use algorist::dynamic::longest_common_subsequence_items;
///
/// let a: Vec<char> = "abcde".chars().collect();
/// let b: Vec<char> = "ace".chars().collect();
/// assert_eq!(longest_common_subsequence_items(&a, &b), vec!['a', 'c', 'e']);
/// ```
pub fn longest_common_subsequence_items<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let table = lcs_table(a, b);
    let (mut i, mut j) = (a.len(), b.len());
    let mut items = Vec::with_capacity(table[(i, j)]);

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            items.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if table[(i - 1, j)] >= table[(i, j - 1)] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    items.reverse();
    items
}

fn lcs_table<T: PartialEq>(a: &[T], b: &[T]) -> DpTable<usize> {
    let mut table: DpTable<usize> = DpTable::new(a.len() + 1, b.len() + 1);

    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            table[(i + 1, j + 1)] = if x == y {
                table[(i, j)] + 1
            } else {
                table[(i, j + 1)].max(table[(i + 1, j)])
            };
        }
    }

    table
}
