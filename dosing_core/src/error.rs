//! Error types for the dosing_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for dosing_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Weight missing, zero, non-numeric or outside the accepted range
    #[error("Invalid weight: {0} kg")]
    InvalidWeight(f64),

    /// Drug identifier not present in the rule table
    #[error("Unknown drug: {0}")]
    UnknownDrug(String),

    /// Locale code other than the supported ones
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rule table validation error
    #[error("Rule validation error: {0}")]
    RuleValidation(String),
}
