//! Fast, non-cryptographic random integers.
//!
//! [`fastrand`] and [`fastrandn`] draw from a per-thread [`FastRng`], so
//! concurrent callers never contend on a shared generator. How the thread
//! generators are seeded is controlled by [`RandomConfig`](crate::config::RandomConfig).
//!
//! # Reproducibility
//!
//! For reproducible sampling, own a [`FastRng`] built with [`FastRng::new`].
//! The underlying algorithm (`SmallRng`) is deterministic for a given seed
//! on the same platform, but it is not portable across `rand` releases and
//! must not be used where unpredictability matters.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::config::random_config;
use crate::types::Integer;

/// Number of thread generators seeded from the configured base seed so far.
static SEEDED_THREADS: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static THREAD_RNG: RefCell<FastRng> = RefCell::new(FastRng::for_current_thread());
}

/// A fast, seedable pseudo-random generator.
///
/// Wraps `SmallRng` and adds the range contracts of [`fastrand`] and
/// [`fastrandn`]. It also implements [`RngCore`], so it can be handed to any
/// `rand` API.
///
/// # Examples
/// ```
/// use numutil::FastRng;
/// let mut rng = FastRng::new(42);
/// let x = rng.below(10u32);
/// assert!(x < 10);
/// ```
#[derive(Debug, Clone)]
pub struct FastRng {
    inner: SmallRng,
}

impl FastRng {
    /// Creates a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: SmallRng::from_entropy(),
        }
    }

    fn for_current_thread() -> Self {
        match random_config().seed {
            Some(seed) => {
                let ordinal = SEEDED_THREADS.fetch_add(1, Ordering::Relaxed);
                debug!(
                    "Seeding random generator of thread {:?} from base seed {seed}, ordinal {ordinal}",
                    std::thread::current().id()
                );
                Self::new(seed.wrapping_add(ordinal))
            }
            None => {
                debug!(
                    "Seeding random generator of thread {:?} from entropy",
                    std::thread::current().id()
                );
                Self::from_entropy()
            }
        }
    }

    /// Returns a value in `[0, u32::MAX)`.
    pub fn next_below_max(&mut self) -> u32 {
        self.inner.gen_range(0..u32::MAX)
    }

    /// Returns a value in `[0, bound)`.
    ///
    /// The bound is first clamped into `[0, u32::MAX]`; negative bounds
    /// clamp to zero. A zero bound yields zero.
    pub fn below<T: Integer>(&mut self, bound: T) -> T {
        let bound = clamp_bound(bound);
        if bound == 0 {
            return T::zero();
        }

        // The drawn value is below a bound that came from `T`, so it fits.
        num_traits::cast(self.inner.gen_range(0..bound)).unwrap_or_else(T::zero)
    }
}

impl RngCore for FastRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

fn clamp_bound<T: Integer>(bound: T) -> u32 {
    if bound <= T::zero() {
        return 0;
    }
    bound
        .to_u64()
        .map_or(u32::MAX, |b| u32::try_from(b).unwrap_or(u32::MAX))
}

/// Returns a pseudo-random value in `[0, min(T::MAX, u32::MAX))` from the
/// calling thread's generator.
///
/// Equivalent to `fastrandn(T::max_value())`. Not suitable for
/// security-sensitive use.
///
/// # Examples
/// ```
/// use numutil::fastrand;
/// assert!(fastrand::<u8>() < u8::MAX);
/// assert!(fastrand::<u64>() < u64::from(u32::MAX));
/// ```
pub fn fastrand<T: Integer>() -> T {
    fastrandn(T::max_value())
}

/// Returns a pseudo-random value in `[0, bound)` from the calling thread's
/// generator.
///
/// The bound is clamped into `[0, u32::MAX]` before use, so the result is
/// also below `u32::MAX` for wider types. A bound of zero (or less) yields
/// zero. Not suitable for security-sensitive use.
///
/// # Examples
/// ```
/// use numutil::fastrandn;
/// for _ in 0..100 {
///     assert!(fastrandn(6u8) < 6);
/// }
/// ```
pub fn fastrandn<T: Integer>(bound: T) -> T {
    THREAD_RNG.with(|rng| rng.borrow_mut().below(bound))
}
