//! Bottom-up Fibonacci.
//!
//! The table is filled from index 0 up to `n`, each entry the sum of the two
//! before it. Additions are checked, so a value that does not fit the output
//! type is reported instead of wrapping.

use num_traits::{CheckedAdd, One, Zero};

use crate::error::{AlgoError, Result};

/// Computes the `n`-th Fibonacci number (F(0) = 0, F(1) = 1) as a `u128`.
///
/// # Errors
///
/// - [`AlgoError::NegativeIndex`] if `n < 0`.
/// - [`AlgoError::Overflow`] if F(n) exceeds `u128::MAX` (n > 186).
///
/// # Example
///
/// ```rust
/// use algorist::{fibonacci, AlgoError};
///
/// assert_eq!(fibonacci(10), Ok(55));
/// assert_eq!(fibonacci(-1), Err(AlgoError::NegativeIndex(-1)));
/// ```
pub fn fibonacci(n: i64) -> Result<u128> {
    fibonacci_as::<u128>(n)
}

/// Computes the `n`-th Fibonacci number in any checked numeric type.
///
/// # Errors
///
/// - [`AlgoError::NegativeIndex`] if `n < 0`.
/// - [`AlgoError::Overflow`] if some F(i), i ≤ n, does not fit in `T`.
///
/// # Example
///
/// ```rust
/// use algorist::{fibonacci_as, AlgoError};
///
/// assert_eq!(fibonacci_as::<u8>(13), Ok(233));
/// assert_eq!(fibonacci_as::<u8>(14), Err(AlgoError::Overflow { index: 14 }));
/// ```
pub fn fibonacci_as<T>(n: i64) -> Result<T>
where
    T: Zero + One + CheckedAdd + Clone,
{
    trace_op!(op = "fibonacci", n);

    if n < 0 {
        debug_op!(op = "fibonacci", n, "negative index rejected");
        return Err(AlgoError::NegativeIndex(n));
    }
    let n = usize::try_from(n).map_err(|_| AlgoError::Overflow { index: usize::MAX })?;

    match n {
        0 => return Ok(T::zero()),
        1 => return Ok(T::one()),
        _ => {}
    }

    let mut table = Vec::new();
    table.push(T::zero());
    table.push(T::one());

    for i in 2..=n {
        let Some(next) = table[i - 1].checked_add(&table[i - 2]) else {
            debug_op!(op = "fibonacci", index = i, "overflow");
            return Err(AlgoError::Overflow { index: i });
        };
        table.push(next);
    }

    Ok(table[n].clone())
}
