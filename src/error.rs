//! Error type shared by the fallible routines.
//!
//! Most of the library is total: sorts, searches and traversals cannot fail.
//! Only the dynamic-programming family rejects inputs outside its domain.

use core::fmt;

/// Errors returned by fallible algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// A sequence index was negative (e.g. `fibonacci(-1)`).
    NegativeIndex(i64),
    /// The result at `index` does not fit in the requested output type.
    Overflow {
        /// Index whose value overflowed.
        index: usize,
    },
}

impl fmt::Display for AlgoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIndex(n) => write!(f, "index must be non-negative, got {n}"),
            Self::Overflow { index } => {
                write!(f, "value at index {index} overflows the output type")
            }
        }
    }
}

impl std::error::Error for AlgoError {}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AlgoError>;
