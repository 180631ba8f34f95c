//! Absolute value and minimum/maximum selection.
//!
//! The slice forms [`min_n`] and [`max_n`] unroll the comparison chains for
//! two, three and four elements, which covers the common call sites, and
//! fall back to a linear scan otherwise. Every path keeps the running
//! extremum and replaces it only on a strict comparison, so ties, signed
//! zeros and `NaN` resolve the same way whatever the slice length.

use crate::types::{Numeric, SignedNumeric};

/// Returns the absolute value of a signed number.
///
/// Negating the minimum value of a signed integer type follows the usual
/// arithmetic overflow rules.
///
/// # Examples
/// ```
/// use numutil::abs;
/// assert_eq!(abs(-10i32), 10);
/// assert_eq!(abs(2.5f64), 2.5);
/// ```
#[inline]
pub fn abs<T: SignedNumeric>(x: T) -> T {
    if x < T::zero() {
        -x
    } else {
        x
    }
}

/// Returns the smaller of two values.
#[inline]
pub fn min<T: Numeric>(x: T, y: T) -> T {
    if x < y {
        x
    } else {
        y
    }
}

/// Returns the larger of two values.
#[inline]
pub fn max<T: Numeric>(x: T, y: T) -> T {
    if x > y {
        x
    } else {
        y
    }
}

#[inline]
fn keep_min<T: Numeric>(acc: T, x: T) -> T {
    if x < acc {
        x
    } else {
        acc
    }
}

#[inline]
fn keep_max<T: Numeric>(acc: T, x: T) -> T {
    if x > acc {
        x
    } else {
        acc
    }
}

/// Returns the minimum of the given values.
///
/// An empty slice yields `T::zero()`. The first occurrence of the minimum
/// wins.
///
/// # Examples
/// ```
/// use numutil::min_n;
/// assert_eq!(min_n(&[100, 50, 10]), 10);
/// assert_eq!(min_n::<u8>(&[]), 0);
/// ```
pub fn min_n<T: Numeric>(xs: &[T]) -> T {
    match *xs {
        [] => T::zero(),
        [a] => a,
        [a, b] => keep_min(a, b),
        [a, b, c] => keep_min(keep_min(a, b), c),
        [a, b, c, d] => keep_min(keep_min(keep_min(a, b), c), d),
        [first, ref rest @ ..] => rest.iter().fold(first, |acc, &x| keep_min(acc, x)),
    }
}

/// Returns the maximum of the given values.
///
/// An empty slice yields `T::zero()`. The first occurrence of the maximum
/// wins.
///
/// # Examples
/// ```
/// use numutil::max_n;
/// assert_eq!(max_n(&[10, 50, 100]), 100);
/// assert_eq!(max_n::<f64>(&[]), 0.0);
/// ```
pub fn max_n<T: Numeric>(xs: &[T]) -> T {
    match *xs {
        [] => T::zero(),
        [a] => a,
        [a, b] => keep_max(a, b),
        [a, b, c] => keep_max(keep_max(a, b), c),
        [a, b, c, d] => keep_max(keep_max(keep_max(a, b), c), d),
        [first, ref rest @ ..] => rest.iter().fold(first, |acc, &x| keep_max(acc, x)),
    }
}
