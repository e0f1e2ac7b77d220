//! Factorials computed by successive multiplication, either exactly in a fixed
//! width unsigned integer or approximately in an `f64`

use crate::{
    error::{CombinatoricsError, CombinatoricsResult},
    numeric::ExactUnsigned,
};

/// Largest `n` for which `n!` stays below [`f64::MAX`]
pub const MAX_APPROX_FACTORIAL_INPUT: u64 = 170;

/// Multiplies `1 * 2 * ... * n`, giving up as soon as the product leaves `U`
fn exact_product<U: ExactUnsigned>(n: U) -> Option<U> {
    let mut product = U::one();
    let mut factor = U::one();
    while factor < n {
        factor = factor + U::one();
        product = product.checked_mul(&factor)?;
    }
    Some(product)
}

/// Computes `n!` exactly
///
/// Callers are expected to have bounded `n` by [`ExactUnsigned::MAX_FACTORIAL_INPUT`]
/// already. Use [`factorial_exact_checked`] if that is not the case.
///
/// # Panics
///
/// Panics if `n!` does not fit into `U`. The value never wraps around.
///
/// ```rust
/// use combinatorics_rs::factorial_exact;
///
/// assert!(factorial_exact(0_u32) == 1);
/// assert!(factorial_exact(12_u32) == 479_001_600);
/// ```
pub fn factorial_exact<U: ExactUnsigned>(n: U) -> U {
    match exact_product(n) {
        Some(product) => product,
        None => panic!("{n}! overflows a {}-bit unsigned integer", U::BITS),
    }
}

/// Computes `n!` exactly, failing with
/// [`CombinatoricsError::MagnitudeTooLarge`] if the result cannot be held in
/// `U`
///
/// The input is compared against the width derived limit before any
/// multiplication happens.
///
/// ```rust
/// use combinatorics_rs::{CombinatoricsError, factorial_exact_checked};
///
/// assert!(factorial_exact_checked(20_u64) == Ok(2_432_902_008_176_640_000));
/// assert!(factorial_exact_checked(21_u64) == Err(CombinatoricsError::MagnitudeTooLarge));
/// assert!(factorial_exact_checked(13_u32) == Err(CombinatoricsError::MagnitudeTooLarge));
/// ```
pub fn factorial_exact_checked<U: ExactUnsigned>(n: U) -> CombinatoricsResult<U> {
    match n.to_u32() {
        Some(small) if small <= U::MAX_FACTORIAL_INPUT => {
            exact_product(n).ok_or(CombinatoricsError::MagnitudeTooLarge)
        }
        _ => {
            log::debug!(
                "rejecting {n}!: limit for {}-bit integers is {}",
                U::BITS,
                U::MAX_FACTORIAL_INPUT
            );
            Err(CombinatoricsError::MagnitudeTooLarge)
        }
    }
}

/// Computes `n!` as an `f64`
///
/// Returns [`f64::INFINITY`] once the product overflows. Values are built by
/// multiplying upwards from `0! = 1`, so moderate inputs stay exact within
/// floating point precision.
///
/// ```rust
/// use combinatorics_rs::factorial_approx;
///
/// assert!(factorial_approx(5) == 120.0);
/// assert!(factorial_approx(50) == 3.0414093201713376e64);
/// assert!(factorial_approx(171) == f64::INFINITY);
/// ```
pub fn factorial_approx(n: u64) -> f64 {
    let mut product = 1_f64;
    for factor in 1..=n {
        product *= factor as f64;
        if product.is_infinite() {
            break;
        }
    }
    product
}

/// Computes `n!` as an `f64`, failing with
/// [`CombinatoricsError::MagnitudeTooLarge`] instead of returning infinity
///
/// ```rust
/// use combinatorics_rs::{CombinatoricsError, factorial_approx_checked};
///
/// assert!(factorial_approx_checked(170) == Ok(7.257415615307994e306));
/// assert!(factorial_approx_checked(171) == Err(CombinatoricsError::MagnitudeTooLarge));
/// ```
pub fn factorial_approx_checked(n: u64) -> CombinatoricsResult<f64> {
    if n > MAX_APPROX_FACTORIAL_INPUT {
        log::debug!("rejecting {n}!: limit for f64 is {MAX_APPROX_FACTORIAL_INPUT}");
        return Err(CombinatoricsError::MagnitudeTooLarge);
    }
    Ok(factorial_approx(n))
}
