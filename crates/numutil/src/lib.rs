//! Generic numeric helpers.
//!
//! This crate provides small, stateless functions over any primitive integer
//! or floating-point type: absolute value, extrema, means, clamping,
//! power-of-two rounding, decimal precision, and fast pseudo-random integers.
//!
//! # Key Concepts
//!
//! - **Numeric constraints**: [`Numeric`], [`SignedNumeric`], [`Integer`]
//!   and [`Real`] are blanket-implemented for the matching primitives
//! - **Defined fallbacks**: edge cases such as empty input return zero
//!   instead of failing; the `try_*` variants report them as [`NumericError`]
//! - **Per-thread randomness**: [`fastrand`] and [`fastrandn`] never share a
//!   generator between threads
//!
//! # Modules
//!
//! - [`clamp`](mod@clamp): Inclusive and one-sided clamping
//! - [`config`]: Seeding configuration for the random source
//! - [`error`]: Error types for the fallible helpers
//! - [`extrema`]: Absolute value, minimum and maximum
//! - [`mean`](mod@mean): Summation, truncated and floating-point means
//! - [`power_of_two`]: Rounding to powers of two
//! - [`precision`](mod@precision): Decimal precision rounding
//! - [`random`]: Fast, non-cryptographic random integers
//! - [`types`]: Numeric trait constraints
//!
//! # Example
//! ```
//! use numutil::prelude::*;
//!
//! assert_eq!(min_n(&[100, 50, 10]), 10);
//! assert_eq!(mean(&[1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6]), 3);
//! assert_eq!(mean_f64(&[1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6]), 3.5);
//! assert_eq!(clamp(15, 1, 10), 10);
//! assert_eq!(closest_power_of_2(12u32), 16);
//! assert!(fastrandn(8u32) < 8);
//! ```

pub mod clamp;
pub mod config;
pub mod error;
pub mod extrema;
pub mod mean;
pub mod power_of_two;
pub mod precision;
pub mod random;
pub mod types;

// Re-export commonly used items at the crate root
pub use clamp::{clamp, clamp_max, clamp_min};
pub use error::{NumericError, Result};
pub use extrema::{abs, max, max_n, min, min_n};
pub use mean::{mean, mean_f64, sum, try_mean, try_mean_f64};
pub use power_of_two::{
    closest_power_of_2, next_power_of_2, try_closest_power_of_2, try_next_power_of_2,
};
pub use precision::precision;
pub use random::{fastrand, fastrandn, FastRng};
pub use types::{Accumulate, Integer, Numeric, Real, SignedNumeric};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use numutil::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clamp::{clamp, clamp_max, clamp_min};
    pub use crate::config::{random_config, set_random_config, RandomConfig, RandomConfigBuilder};
    pub use crate::error::{NumericError, Result};
    pub use crate::extrema::{abs, max, max_n, min, min_n};
    pub use crate::mean::{mean, mean_f64, sum, try_mean, try_mean_f64};
    pub use crate::power_of_two::{
        closest_power_of_2, next_power_of_2, try_closest_power_of_2, try_next_power_of_2,
    };
    pub use crate::precision::precision;
    pub use crate::random::{fastrand, fastrandn, FastRng};
    pub use crate::types::{Accumulate, Integer, Numeric, Real, SignedNumeric};
}
