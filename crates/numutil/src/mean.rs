//! Summation and arithmetic means.
//!
//! Both means share [`sum`], which accumulates eight elements per iteration
//! to shorten the dependency chain on the running total.
//!
//! Totals are kept in the input type and integer totals wrap around on
//! overflow, so a mean over values whose sum exceeds the type's range is
//! the mean of the wrapped total. Widen the input first when that matters.
//!
//! Empty input is handled the same way in both families: [`mean`] and
//! [`mean_f64`] return zero, matching [`min_n`](crate::min_n) and
//! [`max_n`](crate::max_n), while [`try_mean`] and [`try_mean_f64`] report
//! [`NumericError::EmptyInput`].

use crate::error::{NumericError, Result};
use crate::types::Numeric;

const UNROLL: usize = 8;

/// Sums the given values in their own type.
///
/// Integer sums wrap around on overflow (two's complement) instead of
/// panicking; float sums saturate to infinity.
///
/// # Examples
/// ```
/// use numutil::sum;
/// assert_eq!(sum(&[1u32, 2, 3, 4, 5, 6, 7, 8, 9]), 45);
/// assert_eq!(sum(&[200u8, 100]), 44);
/// ```
pub fn sum<T: Numeric>(xs: &[T]) -> T {
    let mut chunks = xs.chunks_exact(UNROLL);
    let mut total = T::zero();

    for c in &mut chunks {
        let chunk = c[0]
            .accumulate(c[1])
            .accumulate(c[2])
            .accumulate(c[3])
            .accumulate(c[4])
            .accumulate(c[5])
            .accumulate(c[6])
            .accumulate(c[7]);
        total = total.accumulate(chunk);
    }

    for &x in chunks.remainder() {
        total = total.accumulate(x);
    }

    total
}

/// Returns the truncated average of the given values.
///
/// The division happens in `T`, so integer means round toward zero. If the
/// element count itself does not fit in `T`, the quotient is computed in
/// `f64` and truncated back. An empty slice yields `T::zero()`. The total
/// wraps like [`sum`].
///
/// # Examples
/// ```
/// use numutil::mean;
/// assert_eq!(mean(&[1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6]), 3);
/// assert_eq!(mean(&[1.0, 2.0]), 1.5);
/// ```
pub fn mean<T: Numeric>(xs: &[T]) -> T {
    try_mean(xs).unwrap_or_else(|_| T::zero())
}

/// Returns the truncated average, or an error for empty input.
pub fn try_mean<T: Numeric>(xs: &[T]) -> Result<T> {
    if xs.is_empty() {
        return Err(NumericError::EmptyInput);
    }

    let total = sum(xs);
    match T::try_from_usize(xs.len()) {
        Some(count) => Ok(total / count),
        None => {
            let quotient = (total.as_f64() / xs.len() as f64).trunc();
            T::try_from_f64(quotient).ok_or_else(|| NumericError::overflow("mean", quotient))
        }
    }
}

/// Returns the average of the given values as `f64`.
///
/// The summation runs in `T`; only the division is carried out in `f64`,
/// so the result is not truncated. An empty slice yields `0.0`.
///
/// # Examples
/// ```
/// use numutil::mean_f64;
/// assert_eq!(mean_f64(&[1u8, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6]), 3.5);
/// ```
pub fn mean_f64<T: Numeric>(xs: &[T]) -> f64 {
    try_mean_f64(xs).unwrap_or(0.0)
}

/// Returns the average as `f64`, or an error for empty input.
pub fn try_mean_f64<T: Numeric>(xs: &[T]) -> Result<f64> {
    if xs.is_empty() {
        return Err(NumericError::EmptyInput);
    }
    Ok(sum(xs).as_f64() / xs.len() as f64)
}
