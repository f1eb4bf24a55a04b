//! Harness configuration
//!
//! There are no flags, files or environment variables; the binary always
//! runs `HarnessConfig::default()`. The struct exists so the fixed values
//! live in one place and tests can run the same sequence with other values.

use kemcheck_api::error::validation;
use kemcheck_api::Result;
use kemcheck_params::{DEFAULT_FAMILY, DEFAULT_ITERATIONS, DEFAULT_MECHANISM};
use tracing::level_filters::LevelFilter;

/// Parameters of one harness run
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// Substring used to filter the enabled mechanism list
    pub family: String,

    /// Mechanism used for the round-trip and the throughput loop
    pub mechanism: String,

    /// Number of keypair generations timed
    pub iterations: u64,

    /// Maximum level of diagnostics written to stderr
    pub log_level: LevelFilter,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            family: DEFAULT_FAMILY.to_string(),
            mechanism: DEFAULT_MECHANISM.to_string(),
            iterations: DEFAULT_ITERATIONS,
            log_level: LevelFilter::WARN,
        }
    }
}

impl HarnessConfig {
    /// Reject values no run could succeed with
    pub fn validate(&self) -> Result<()> {
        validation::parameter(!self.family.is_empty(), "config", "family must not be empty")?;
        validation::parameter(!self.mechanism.is_empty(), "config", "mechanism must not be empty")?;
        validation::parameter(self.iterations > 0, "config", "iterations must be positive")?;
        Ok(())
    }
}
