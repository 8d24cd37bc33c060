//! Configuration error types

use thiserror::Error;

use crate::domain::quality::PolicyError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Model name cannot be empty")]
    EmptyModel,

    #[error("Base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Max attempts must be between 1 and {max}")]
    InvalidMaxAttempts { max: u32 },

    #[error("Invalid quality policy: {0}")]
    InvalidQualityPolicy(#[from] PolicyError),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
