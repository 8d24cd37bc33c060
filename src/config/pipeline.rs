//! Repair pipeline configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on the attempt budget accepted from configuration.
pub const MAX_CONFIGURED_ATTEMPTS: u32 = 10;

/// Repair pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Total generation attempts, initial one included
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Time allowed for a single generation call, in seconds
    #[serde(default = "default_attempt_timeout")]
    pub attempt_timeout_secs: u64,
}

impl PipelineConfig {
    /// Get the per-attempt timeout as Duration
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }

    /// Validate pipeline configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_attempts == 0 || self.max_attempts > MAX_CONFIGURED_ATTEMPTS {
            return Err(ValidationError::InvalidMaxAttempts {
                max: MAX_CONFIGURED_ATTEMPTS,
            });
        }
        if self.attempt_timeout_secs == 0 || self.attempt_timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            attempt_timeout_secs: default_attempt_timeout(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_attempt_timeout() -> u64 {
    120
}
