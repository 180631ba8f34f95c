//! Numeric type constraints.
//!
//! This module provides the traits that bound the generic functions of the
//! crate. All of them are blanket-implemented on top of `num-traits`, so every
//! primitive integer and floating-point type satisfies the constraints that
//! make sense for it without any opt-in.
//!
//! The one exception is [`Accumulate`], which is implemented per primitive
//! because integers and floats overflow differently.

use num_traits::{Bounded, Float, Num, NumCast, PrimInt, Signed, ToPrimitive};
use std::fmt::{Debug, Display};

/// Any primitive integer or floating-point number.
///
/// This trait combines the numeric traits required by the helpers in this
/// crate: ordering, arithmetic, and lossy/checked conversion through `f64`.
pub trait Numeric:
    Accumulate
    + Num
    + NumCast
    + ToPrimitive
    + Bounded
    + PartialOrd
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Convert to f64, rounding to the nearest representable value.
    ///
    /// Every primitive is convertible; `NaN` is only returned for types
    /// whose conversion reports failure.
    fn as_f64(self) -> f64 {
        num_traits::cast(self).unwrap_or(f64::NAN)
    }

    /// Try to convert from f64.
    ///
    /// Returns `None` if `v` is out of range for `Self` (or `NaN` for an
    /// integer type). Fractional parts are truncated toward zero.
    fn try_from_f64(v: f64) -> Option<Self> {
        <Self as NumCast>::from(v)
    }

    /// Try to convert from usize (for element counts).
    fn try_from_usize(v: usize) -> Option<Self> {
        <Self as NumCast>::from(v)
    }
}

impl<T> Numeric for T where
    T: Accumulate
        + Num
        + NumCast
        + ToPrimitive
        + Bounded
        + PartialOrd
        + Display
        + Debug
        + Default
        + Copy
        + Send
        + Sync
        + 'static
{
}

/// Addition used for running totals.
///
/// Integers wrap around on overflow (two's complement); floats add
/// normally and saturate to infinity.
pub trait Accumulate: Copy {
    /// Adds `rhs` to `self` under the type's accumulation rule.
    fn accumulate(self, rhs: Self) -> Self;
}

macro_rules! impl_accumulate_wrapping {
    ($($t:ty),*) => {
        $(
            impl Accumulate for $t {
                #[inline]
                fn accumulate(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_accumulate_float {
    ($($t:ty),*) => {
        $(
            impl Accumulate for $t {
                #[inline]
                fn accumulate(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_accumulate_wrapping!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_accumulate_float!(f32, f64);

/// A numeric type supporting negative values (signed integers and floats).
pub trait SignedNumeric: Numeric + Signed {}

impl<T> SignedNumeric for T where T: Numeric + Signed {}

/// A primitive integer type.
pub trait Integer: Numeric + PrimInt {}

impl<T> Integer for T where T: Numeric + PrimInt {}

/// A primitive floating-point type (f32 or f64).
pub trait Real: Numeric + Float {}

impl<T> Real for T where T: Numeric + Float {}
