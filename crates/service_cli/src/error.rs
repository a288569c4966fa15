//! CLI error types.

use pricer_core::types::{DateError, PricingError};
use thiserror::Error;

/// Errors returned by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Input file exists but could not be decoded.
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// Offending file
        path: String,
        /// Decoder message
        message: String,
    },

    /// Pricing failed outside a per-trade result.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Date construction failed.
    #[error(transparent)]
    Date(#[from] DateError),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialisation failed.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
