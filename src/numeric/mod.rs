//! This module holds the scalar counting primitives: factorials and binomial
//! coefficients, each available in an exact fixed width integer flavour and an
//! approximate `f64` flavour.
//!
//! Every flavour comes in two shapes. The unchecked shape never reports an
//! error (integers panic on overflow, floats saturate to infinity) while the
//! checked shape returns a [`CombinatoricsResult`].
//!
//! [`CombinatoricsResult`]: crate::CombinatoricsResult

use std::fmt::{Debug, Display};

use num_traits::{PrimInt, Unsigned};

pub mod binomial;
pub mod factorial;

/// Fixed width unsigned integers that exact counting can be performed in
///
/// The largest factorial input a type can hold is derived from its bit width
/// alone, so `usize` automatically follows the width of the target platform.
///
/// ```rust
/// use combinatorics_rs::numeric::ExactUnsigned;
///
/// assert!(u32::MAX_FACTORIAL_INPUT == 12);
/// assert!(u64::MAX_FACTORIAL_INPUT == 20);
/// ```
pub trait ExactUnsigned: PrimInt + Unsigned + Debug + Display + Send + Sync + 'static {
    /// Number of bits in the representation
    const BITS: u32;

    /// Largest `n` for which `n!` is representable
    const MAX_FACTORIAL_INPUT: u32;
}

/// Finds the largest `n` whose factorial fits into an unsigned integer of the
/// given bit width
pub const fn max_factorial_input(bits: u32) -> u32 {
    let max = if bits >= u128::BITS {
        u128::MAX
    } else {
        (1_u128 << bits) - 1
    };

    let mut n: u128 = 1;
    let mut product: u128 = 1;
    loop {
        match product.checked_mul(n + 1) {
            Some(next) if next <= max => {
                product = next;
                n += 1;
            }
            _ => return n as u32,
        }
    }
}

macro_rules! impl_exact_unsigned {
    ($($t:ty),*) => {
        $(
            impl ExactUnsigned for $t {
                const BITS: u32 = <$t>::BITS;
                const MAX_FACTORIAL_INPUT: u32 = max_factorial_input(<$t>::BITS);
            }
        )*
    };
}

impl_exact_unsigned!(u8, u16, u32, u64, u128, usize);
