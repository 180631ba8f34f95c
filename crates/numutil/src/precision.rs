//! Decimal precision rounding.

use crate::types::{Numeric, Real};

/// Rounds `x` to `digits` decimal places.
///
/// Rounding is half away from zero. A negative `digits` returns `x`
/// unchanged and zero rounds to the nearest integer. When `x * 10^digits`
/// is not finite, `x` already has no digits past that position and is
/// returned unchanged. The result is subject to the usual binary
/// representation error of `T`.
///
/// # Examples
/// ```
/// use numutil::precision;
/// assert_eq!(precision(3.14159, 2), 3.14);
/// assert_eq!(precision(2.5, 0), 3.0);
/// assert_eq!(precision(2.5, -1), 2.5);
/// ```
pub fn precision<T: Real>(x: T, digits: i32) -> T {
    match digits {
        d if d < 0 => x,
        0 => x.round(),
        d => {
            let scale = T::try_from_f64(10.0).map_or_else(T::nan, |ten| ten.powi(d));
            let scaled = x * scale;
            if !scaled.is_finite() {
                return x;
            }
            scaled.round() / scale
        }
    }
}
