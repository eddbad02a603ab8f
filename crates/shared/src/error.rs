//! Application-wide error types.
//!
//! Only the binary edges fail: loading configuration, reading arguments and
//! writing output. The numeric helpers always return a value.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Unknown command or missing argument.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Returns the process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Config(_) | Self::Serialization(_) => 1,
        }
    }

    /// Returns the stable error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Usage(_) => "USAGE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
