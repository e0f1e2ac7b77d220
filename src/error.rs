//! This module contains the error type shared by every checked operation in
//! the crate

use thiserror::Error;

/// The two ways a checked counting operation can fail
///
/// Enumeration functions never produce these on their own. An out of range
/// selection size or an empty input simply produces an empty result.
///
/// ```rust
/// use combinatorics_rs::{CombinatoricsError, binomial_exact_checked};
///
/// assert!(binomial_exact_checked::<u64>(5, 7) == Err(CombinatoricsError::InvalidInput));
/// assert!(
///     binomial_exact_checked::<u64>(1000, 500) == Err(CombinatoricsError::MagnitudeTooLarge)
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinatoricsError {
    /// `n` was zero or `k` was larger than `n`
    #[error("invalid input: n must be at least 1 and k must not exceed n")]
    InvalidInput,

    /// The true result does not fit in the requested numeric type
    #[error("result is too large for the target numeric type")]
    MagnitudeTooLarge,
}

/// Result type returned by every checked operation
pub type CombinatoricsResult<T> = Result<T, CombinatoricsError>;
