//! Rounding to powers of two.
//!
//! Both roundings start from `2^ceil(log2(x))` computed in `f64`. The
//! candidate is checked against `x` in the input type and doubled when
//! `f64` rounding left it below `x`, so wide integers such as `2^62 + 1`
//! still round up to the next power. The nearest-power comparison runs in
//! the input type whenever both bracketing powers are representable.
//!
//! The infallible forms return zero when the result does not fit in the
//! input type, the same value `u32::next_power_of_two` wraps to in release
//! builds. The `try_*` forms report [`NumericError::Overflow`] instead.

use log::trace;

use crate::error::{NumericError, Result};
use crate::types::Numeric;

/// Smallest power of two `>= x` as an `f64`, for `x > 1`.
///
/// Near `2^k` the `f64` image of `2^k + 1` (or its `log2`) collapses onto
/// `k`, so a candidate that lands below `x` is doubled.
fn ceil_power_of_2<T: Numeric>(x: T) -> f64 {
    let candidate = x.as_f64().log2().ceil().exp2();
    match T::try_from_f64(candidate) {
        Some(power) if power < x => candidate * 2.0,
        _ => candidate,
    }
}

/// Returns the smallest power of two greater than or equal to `x`.
///
/// Values `<= 1` (including zero and negatives) map to 1. Overflow yields
/// `T::zero()`.
///
/// # Examples
/// ```
/// use numutil::next_power_of_2;
/// assert_eq!(next_power_of_2(9u32), 16);
/// assert_eq!(next_power_of_2(8u32), 8);
/// assert_eq!(next_power_of_2(0i64), 1);
/// assert_eq!(next_power_of_2(2.5f64), 4.0);
/// ```
pub fn next_power_of_2<T: Numeric>(x: T) -> T {
    try_next_power_of_2(x).unwrap_or_else(|err| {
        trace!("{err}, falling back to zero");
        T::zero()
    })
}

/// Returns the smallest power of two greater than or equal to `x`, or an
/// error if it is not representable in `T`.
pub fn try_next_power_of_2<T: Numeric>(x: T) -> Result<T> {
    if x <= T::one() {
        return Ok(T::one());
    }

    T::try_from_f64(ceil_power_of_2(x))
        .ok_or_else(|| NumericError::overflow("next_power_of_2", x))
}

/// Returns the power of two nearest to `x`.
///
/// With `hi = next_power_of_2(x)` and `lo = hi / 2`, `lo` is chosen only
/// when it is strictly closer; equal distances resolve to `hi`. Values
/// `<= 1` map to 1 and overflow yields `T::zero()`.
///
/// # Examples
/// ```
/// use numutil::closest_power_of_2;
/// assert_eq!(closest_power_of_2(5u32), 4);
/// assert_eq!(closest_power_of_2(6u32), 8);
/// assert_eq!(closest_power_of_2(24i32), 32);
/// ```
pub fn closest_power_of_2<T: Numeric>(x: T) -> T {
    try_closest_power_of_2(x).unwrap_or_else(|err| {
        trace!("{err}, falling back to zero");
        T::zero()
    })
}

/// Returns the power of two nearest to `x`, or an error if it is not
/// representable in `T`.
pub fn try_closest_power_of_2<T: Numeric>(x: T) -> Result<T> {
    if x <= T::one() {
        return Ok(T::one());
    }

    let hi = ceil_power_of_2(x);
    let lo = hi / 2.0;
    if let (Some(hi), Some(lo)) = (T::try_from_f64(hi), T::try_from_f64(lo)) {
        return Ok(if hi - x > x - lo { lo } else { hi });
    }

    // `hi` overflows `T`; decide in f64 and let the conversion report it.
    let value = x.as_f64();
    let nearest = if hi - value > value - lo { lo } else { hi };
    T::try_from_f64(nearest).ok_or_else(|| NumericError::overflow("closest_power_of_2", x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_next_power_of_2_table() {
        let cases = [(0, 1), (1, 1), (2, 2), (3, 4), (8, 8), (9, 16), (17, 32), (32, 32)];
        for (give, want) in cases {
            assert_eq!(next_power_of_2(give), want, "next_power_of_2({give})");
        }
    }

    #[test]
    fn test_closest_power_of_2_table() {
        let cases = [(0, 1), (1, 1), (3, 4), (5, 4), (6, 8), (11, 8), (12, 16), (23, 16), (24, 32)];
        for (give, want) in cases {
            assert_eq!(closest_power_of_2(give), want, "closest_power_of_2({give})");
        }
    }

    #[test]
    fn test_negative_inputs_map_to_one() {
        assert_eq!(next_power_of_2(-20i32), 1);
        assert_eq!(closest_power_of_2(-0.5f64), 1.0);
    }

    #[test]
    fn test_fractional_inputs() {
        assert_eq!(next_power_of_2(2.5f64), 4.0);
        assert_eq!(closest_power_of_2(2.5f64), 2.0);
        assert_eq!(closest_power_of_2(1.2f32), 1.0);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(next_power_of_2(100i8), 0);
        assert_eq!(next_power_of_2(64i8), 64);
        assert_eq!(closest_power_of_2(200u8), 0);
        assert_eq!(closest_power_of_2(150u8), 128);
        assert_eq!(next_power_of_2(u64::MAX), 0);

        assert_eq!(
            try_next_power_of_2(100i8),
            Err(NumericError::overflow("next_power_of_2", 100i8))
        );
        assert_eq!(
            try_closest_power_of_2(200u8),
            Err(NumericError::overflow("closest_power_of_2", 200u8))
        );
    }

    #[test]
    fn test_large_exact_powers() {
        assert_eq!(next_power_of_2(1u64 << 40), 1u64 << 40);
        assert_eq!(next_power_of_2((1u64 << 40) + 1), 1u64 << 41);
        assert_eq!(closest_power_of_2(1u64 << 63), 1u64 << 63);
    }

    #[test]
    fn test_wide_integers_just_above_a_power() {
        for k in 45..63 {
            let x = (1u64 << k) + 1;
            assert_eq!(next_power_of_2(x), 1u64 << (k + 1), "next_power_of_2(2^{k} + 1)");
            assert_eq!(closest_power_of_2(x), 1u64 << k, "closest_power_of_2(2^{k} + 1)");

            let upper = 1u64 << (k + 1);
            assert_eq!(next_power_of_2(upper - 1), upper, "next_power_of_2({upper} - 1)");
            assert_eq!(closest_power_of_2(upper - 1), upper, "closest_power_of_2({upper} - 1)");
        }
        assert_eq!(next_power_of_2((1i64 << 61) + 1), 1i64 << 62);
        assert_eq!(next_power_of_2((1i64 << 62) + 1), 0);
        assert_eq!(closest_power_of_2((1i64 << 62) + 1), 1i64 << 62);
        assert_eq!(next_power_of_2((1u64 << 63) + 1), 0);
        assert_eq!(closest_power_of_2((1u64 << 63) + 1), 1u64 << 63);
    }
}
