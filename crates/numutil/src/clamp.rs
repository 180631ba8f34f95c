//! Clamping to inclusive bounds.

use crate::types::Numeric;

/// Clamps `x` to `[lo, hi]` (inclusive).
///
/// The bounds are not validated. If `lo > hi` the upper bound is tested
/// first, so values above `hi` map to `hi` and values below `lo` map to `lo`.
///
/// # Examples
/// ```
/// use numutil::clamp;
/// assert_eq!(clamp(15, 1, 10), 10);
/// assert_eq!(clamp(-1, 1, 10), 1);
/// assert_eq!(clamp(1.5, 1.0, 2.0), 1.5);
/// ```
#[inline]
pub fn clamp<T: Numeric>(x: T, lo: T, hi: T) -> T {
    if x > hi {
        hi
    } else if x < lo {
        lo
    } else {
        x
    }
}

/// Clamps `x` so that it is at least `lo`.
#[inline]
pub fn clamp_min<T: Numeric>(x: T, lo: T) -> T {
    if x < lo {
        lo
    } else {
        x
    }
}

/// Clamps `x` so that it is at most `hi`.
#[inline]
pub fn clamp_max<T: Numeric>(x: T, hi: T) -> T {
    if x > hi {
        hi
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 1, 10), 5);
        assert_eq!(clamp(15, 1, 10), 10);
        assert_eq!(clamp(-1, 1, 10), 1);
        assert_eq!(clamp(1.5, 1.0, 2.0), 1.5);
        assert_eq!(clamp(1u8, 1, 10), 1);
        assert_eq!(clamp(10u8, 1, 10), 10);
    }

    #[test]
    fn test_clamp_inverted_bounds() {
        // The upper bound is tested first.
        assert_eq!(clamp(20, 10, 1), 1);
        assert_eq!(clamp(0, 10, 1), 10);
        assert_eq!(clamp(5, 10, 1), 1);
    }

    #[test]
    fn test_one_sided() {
        assert_eq!(clamp_min(-5, 0), 0);
        assert_eq!(clamp_min(5, 0), 5);
        assert_eq!(clamp_max(50, 10), 10);
        assert_eq!(clamp_max(5, 10), 5);
        assert_eq!(clamp_max(-0.5f32, 0.0), -0.5);
    }
}
