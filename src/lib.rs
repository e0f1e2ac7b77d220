//! Exact and approximate combinatorial counting along with eager generation
//! of combinations and permutations.
//!
//! The counting functions live in [`numeric`]. Each one comes in an exact
//! flavour over any [`ExactUnsigned`] integer and an approximate `f64`
//! flavour, and in an unchecked and a checked shape. The generators in
//! [`combinations`] and [`permutations`] use those counts to allocate their
//! whole result before producing a single row.
//!
//! ```rust
//! use combinatorics_rs::{
//!     CombinatoricsExt, binomial_exact, factorial_exact, factorial_approx_checked,
//! };
//!
//! let letters = ['a', 'b', 'c', 'd', 'e'];
//!
//! assert!(letters.combinations(2).len() == binomial_exact(5, 2));
//! assert!(letters.permutations().len() == factorial_exact(5));
//! assert!(factorial_approx_checked(171).is_err());
//! ```
//!
//! With the default `async` feature, [`dispatch`] runs the generators on a
//! worker pool and delivers their results elsewhere.
#![forbid(unsafe_code)]

pub mod combinations;
#[cfg(feature = "async")]
pub mod dispatch;
pub mod error;
pub mod ext;
pub mod numeric;
pub mod permutations;
pub mod recursive;

pub use combinations::{all_combinations, combinations, try_all_combinations, try_combinations};
pub use error::{CombinatoricsError, CombinatoricsResult};
pub use ext::CombinatoricsExt;
pub use numeric::{
    ExactUnsigned,
    binomial::{binomial_approx, binomial_approx_checked, binomial_exact, binomial_exact_checked},
    factorial::{
        MAX_APPROX_FACTORIAL_INPUT, factorial_approx, factorial_approx_checked, factorial_exact,
        factorial_exact_checked,
    },
};
pub use permutations::{permutations, try_permutations};
