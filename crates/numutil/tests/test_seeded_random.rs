//! Tests for deterministic seeding of the thread random generators.
//!
//! Installing the global configuration is a one-shot, process-wide action,
//! so this file holds a single test and runs in its own test binary.

use numutil::prelude::*;
use pretty_assertions::assert_eq;
use test_log::test;

#[test]
fn test_configured_seed_drives_thread_generators() {
    const SEED: u64 = 0x5eed;

    set_random_config(RandomConfig::builder().seed(SEED).build()).unwrap();
    assert_eq!(random_config().seed, Some(SEED));
    assert_eq!(
        set_random_config(RandomConfig::default()),
        Err(NumericError::AlreadyConfigured)
    );

    // The first thread to draw receives ordinal 0, the next one ordinal 1.
    let first: Vec<u32> = (0..32).map(|_| fastrandn(1_000u32)).collect();
    let second: Vec<u32> = std::thread::spawn(|| (0..32).map(|_| fastrandn(1_000u32)).collect())
        .join()
        .unwrap();

    let mut expected_first = FastRng::new(SEED);
    let mut expected_second = FastRng::new(SEED + 1);
    assert_eq!(
        first,
        (0..32).map(|_| expected_first.below(1_000u32)).collect::<Vec<_>>()
    );
    assert_eq!(
        second,
        (0..32).map(|_| expected_second.below(1_000u32)).collect::<Vec<_>>()
    );
    assert!(first.iter().chain(&second).all(|&x| x < 1_000));
}
