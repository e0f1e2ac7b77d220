//! Binomial coefficients computed without building the large intermediate
//! factorials of `n! / (k! (n - k)!)`.
//!
//! Rather than evaluating the three factorials separately, the numerator
//! factors `larger + 1 ..= n` are introduced one at a time and every pending
//! denominator factor in `2 ..= smaller` is divided out as soon as it divides
//! evenly, either into the incoming factor or into the running product. For
//! `C(10, 4)` this effectively evaluates `(10 / 2) * (9 / 3) * (8 / 4) * 7`.
//!
//! The running product is always an integer and every divisor is retired
//! exactly once by the time the last numerator factor has been introduced.
//! The integer shapes always drain the pending divisors inside the loop, since
//! the remaining divisors multiply to a divisor of the product. Once an `f64`
//! product grows past 2^53 it is rounded and the remainder test can miss, so
//! the float shapes divide out whatever is still pending after the loop. Their
//! results then carry ordinary floating point rounding only.
//!
//! All four public shapes share one interleaving routine and only differ in
//! how the running product reacts to overflow and how the outcome is reported.

use crate::{
    error::{CombinatoricsError, CombinatoricsResult},
    numeric::ExactUnsigned,
};

/// Running product of the interleaved numerator and denominator factors
trait Accumulator<D>: Sized {
    /// Starts a product at the given value
    fn seed(value: D) -> Self;

    /// Multiplies the product by a reduced numerator factor
    fn multiply(&mut self, factor: D) -> CombinatoricsResult<()>;

    /// Divides the product by `divisor` if it divides evenly, reporting
    /// whether it did
    fn divide_exact(&mut self, divisor: D) -> bool;

    /// Retires the divisors the loop could not divide out evenly
    fn finish(&mut self, _pending: &[D]) {}
}

/// Integer product that reports overflow before it happens
struct Checked<U>(U);

/// Integer product that panics on overflow
struct Trapping<U>(U);

/// Floating point product that reports reaching infinity
struct Approx(f64);

impl<U: ExactUnsigned> Accumulator<U> for Checked<U> {
    fn seed(value: U) -> Self {
        Checked(value)
    }

    fn multiply(&mut self, factor: U) -> CombinatoricsResult<()> {
        if factor > U::max_value() / self.0 {
            return Err(CombinatoricsError::MagnitudeTooLarge);
        }
        self.0 = self.0 * factor;
        Ok(())
    }

    fn divide_exact(&mut self, divisor: U) -> bool {
        if (self.0 % divisor).is_zero() {
            self.0 = self.0 / divisor;
            true
        } else {
            false
        }
    }
}

impl<U: ExactUnsigned> Accumulator<U> for Trapping<U> {
    fn seed(value: U) -> Self {
        Trapping(value)
    }

    fn multiply(&mut self, factor: U) -> CombinatoricsResult<()> {
        match self.0.checked_mul(&factor) {
            Some(product) => self.0 = product,
            None => panic!(
                "binomial coefficient overflowed a {}-bit unsigned integer",
                U::BITS
            ),
        }
        Ok(())
    }

    fn divide_exact(&mut self, divisor: U) -> bool {
        if (self.0 % divisor).is_zero() {
            self.0 = self.0 / divisor;
            true
        } else {
            false
        }
    }
}

impl Accumulator<u64> for Approx {
    fn seed(value: u64) -> Self {
        Approx(value as f64)
    }

    fn multiply(&mut self, factor: u64) -> CombinatoricsResult<()> {
        self.0 *= factor as f64;
        if self.0 == f64::INFINITY {
            return Err(CombinatoricsError::MagnitudeTooLarge);
        }
        Ok(())
    }

    fn divide_exact(&mut self, divisor: u64) -> bool {
        let divisor = divisor as f64;
        // `%` on f64 truncates like fmod, so an exact multiple leaves 0.0
        if self.0 % divisor == 0.0 {
            self.0 /= divisor;
            true
        } else {
            false
        }
    }

    fn finish(&mut self, pending: &[u64]) {
        for &divisor in pending {
            self.0 /= divisor as f64;
        }
    }
}

/// Evaluates `C(n, k)` into the accumulator `A`
fn interleave<D, A>(n: D, k: D) -> CombinatoricsResult<A>
where
    D: ExactUnsigned,
    A: Accumulator<D>,
{
    let one = D::one();
    if n < one || k > n {
        log::debug!("rejecting C({n}, {k}): n must be at least 1 and k at most n");
        return Err(CombinatoricsError::InvalidInput);
    }

    if k.is_zero() || k == n {
        return Ok(A::seed(one));
    }
    if k == one || k == n - one {
        return Ok(A::seed(n));
    }

    let larger = (n - k).max(k);
    let smaller = (n - k).min(k);

    let mut pending = Vec::new();
    let mut divisor = one + one;
    while divisor <= smaller {
        pending.push(divisor);
        divisor = divisor + one;
    }

    let mut result = A::seed(one);
    let mut numerator = larger;
    while numerator < n {
        numerator = numerator + one;

        // Retire every divisor that already goes into the incoming factor
        let mut factor = numerator;
        pending.retain(|&den| {
            if (factor % den).is_zero() {
                factor = factor / den;
                false
            } else {
                true
            }
        });

        if let Err(error) = result.multiply(factor) {
            log::debug!("C({n}, {k}) overflowed while multiplying by {factor}");
            return Err(error);
        }

        // Retire every divisor the running product can now absorb
        pending.retain(|&den| !result.divide_exact(den));
    }

    if !pending.is_empty() {
        log::trace!("C({n}, {k}) left {} divisors for the final pass", pending.len());
    }
    result.finish(&pending);
    Ok(result)
}

/// Computes the binomial coefficient `C(n, k)` exactly
///
/// Returns `0` when `n < 1` or `k > n`.
///
/// # Panics
///
/// Panics if an intermediate product overflows `U`. The value never wraps
/// around. Use [`binomial_exact_checked`] to get an error instead.
///
/// ```rust
/// use combinatorics_rs::binomial_exact;
///
/// assert!(binomial_exact(5_u64, 2) == 10);
/// assert!(binomial_exact(50_u64, 5) == 2_118_760);
/// assert!(binomial_exact(5_u64, 7) == 0);
/// ```
pub fn binomial_exact<U: ExactUnsigned>(n: U, k: U) -> U {
    match interleave::<U, Trapping<U>>(n, k) {
        Ok(Trapping(value)) => value,
        Err(_) => U::zero(),
    }
}

/// Computes the binomial coefficient `C(n, k)` exactly, reporting invalid
/// inputs and overflow as errors
///
/// ```rust
/// use combinatorics_rs::{CombinatoricsError, binomial_exact_checked};
///
/// assert!(binomial_exact_checked(10_u32, 4) == Ok(210));
/// assert!(binomial_exact_checked(0_u32, 2) == Err(CombinatoricsError::InvalidInput));
/// assert!(binomial_exact_checked(1000_u64, 500) == Err(CombinatoricsError::MagnitudeTooLarge));
/// ```
pub fn binomial_exact_checked<U: ExactUnsigned>(n: U, k: U) -> CombinatoricsResult<U> {
    interleave::<U, Checked<U>>(n, k).map(|Checked(value)| value)
}

/// Computes the binomial coefficient `C(n, k)` as an `f64`
///
/// Returns `0.0` when `n < 1` or `k > n` and [`f64::INFINITY`] when an
/// intermediate product overflows.
///
/// ```rust
/// use combinatorics_rs::binomial_approx;
///
/// assert!(binomial_approx(10, 4) == 210.0);
/// assert!(binomial_approx(0, 2) == 0.0);
/// assert!(binomial_approx(1000, 500) == f64::INFINITY);
/// ```
pub fn binomial_approx(n: u64, k: u64) -> f64 {
    match interleave::<u64, Approx>(n, k) {
        Ok(Approx(value)) => value,
        Err(CombinatoricsError::InvalidInput) => 0.0,
        Err(CombinatoricsError::MagnitudeTooLarge) => f64::INFINITY,
    }
}

/// Computes the binomial coefficient `C(n, k)` as an `f64`, reporting invalid
/// inputs and overflow as errors
///
/// ```rust
/// use combinatorics_rs::{CombinatoricsError, binomial_approx_checked};
///
/// assert!(binomial_approx_checked(20, 10) == Ok(184_756.0));
/// assert!(binomial_approx_checked(5, 7) == Err(CombinatoricsError::InvalidInput));
/// assert!(binomial_approx_checked(1000, 500) == Err(CombinatoricsError::MagnitudeTooLarge));
/// ```
pub fn binomial_approx_checked(n: u64, k: u64) -> CombinatoricsResult<f64> {
    interleave::<u64, Approx>(n, k).map(|Approx(value)| value)
}
