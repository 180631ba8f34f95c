//! Process-wide configuration of the fast random source.
//!
//! The configuration is installed at most once. Reading it before an
//! explicit install locks in the default (entropy-seeded) configuration.

use std::sync::OnceLock;

use log::{debug, warn};

use crate::error::{NumericError, Result};

/// Global configuration for the per-thread random generators
static GLOBAL_CONFIG: OnceLock<RandomConfig> = OnceLock::new();

/// Configuration for the per-thread random generators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomConfig {
    /// Base seed for deterministic generators.
    ///
    /// When set, each thread seeds its generator from this value and the
    /// order in which the thread first drew a number. When `None`, threads
    /// seed from OS entropy.
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// Create a builder starting from the default configuration
    pub fn builder() -> RandomConfigBuilder {
        RandomConfigBuilder::new()
    }
}

/// Builder for customizing the random configuration
#[derive(Debug, Default)]
pub struct RandomConfigBuilder {
    config: RandomConfig,
}

impl RandomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: RandomConfig::default(),
        }
    }

    /// Seed every thread generator deterministically
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> RandomConfig {
        self.config
    }
}

/// Get the global random configuration
pub fn random_config() -> &'static RandomConfig {
    GLOBAL_CONFIG.get_or_init(RandomConfig::default)
}

/// Set the global random configuration.
///
/// Fails if a configuration was already installed or read.
pub fn set_random_config(config: RandomConfig) -> Result<()> {
    match GLOBAL_CONFIG.set(config) {
        Ok(()) => {
            debug!("Installed random configuration {:?}", random_config());
            Ok(())
        }
        Err(rejected) => {
            warn!(
                "Ignoring random configuration {rejected:?}, {:?} is already installed",
                random_config()
            );
            Err(NumericError::AlreadyConfigured)
        }
    }
}
