//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by a single `price` call
//! - `DateError`: Errors from date construction and parsing

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every variant is fatal to the individual pricing call that produced it
/// and leaves the registry and adapter usable for later calls.
///
/// # Variants
/// - `UnsupportedTradeKind`: No handler registered for the kind or any ancestor
/// - `KeyNotFound`: A curve or volatility surface id is absent from the market snapshot
/// - `NonNumericResult`: A handler produced a value that cannot be read as `f64`
/// - `TradeMismatch`: A handler received a trade it cannot view as its payload type
/// - `InvalidInput`: A backend found a present but unusable field
/// - `Date`: Wrapped date error
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::UnsupportedTradeKind("ExoticTrade".to_string());
/// assert_eq!(format!("{}", err), "Unsupported trade type: ExoticTrade");
///
/// let err = PricingError::key_not_found("curves", "usd_ois");
/// assert_eq!(format!("{}", err), "Key not found in curves: 'usd_ois'");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// No handler registered for the trade kind or any of its ancestors.
    #[error("Unsupported trade type: {0}")]
    UnsupportedTradeKind(String),

    /// Identifier missing from one of the market snapshot sections.
    #[error("Key not found in {section}: '{key}'")]
    KeyNotFound {
        /// Section searched (`curves`, `market_data`, `vol_surfaces`)
        section: &'static str,
        /// The missing identifier
        key: String,
    },

    /// Handler result could not be coerced to `f64`.
    #[error("Handler for {kind} returned a non-numeric result ({found})")]
    NonNumericResult {
        /// Concrete kind of the trade being priced
        kind: String,
        /// Type name of the offending value
        found: String,
    },

    /// Handler could not view the trade as the payload type it prices.
    #[error("Trade of kind {actual} cannot be priced as {expected}")]
    TradeMismatch {
        /// Payload type the handler expected
        expected: String,
        /// Concrete kind of the trade it received
        actual: String,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Date construction or parsing failed.
    #[error(transparent)]
    Date(#[from] DateError),
}

impl PricingError {
    /// Create a `KeyNotFound` error for the given market section.
    pub fn key_not_found(section: &'static str, key: impl Into<String>) -> Self {
        Self::KeyNotFound {
            section,
            key: key.into(),
        }
    }

    /// Create an `InvalidInput` error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}
