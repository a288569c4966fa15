//! Core time, payload and error types.
//!
//! This module provides:
//! - `time`: [`Date`] and the ACT/365 year fraction
//! - `value`: [`Value`] and [`Payload`], the opaque mappings carried by trades and market data
//! - `error`: Structured error types for dispatch, market lookups and dates
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod error;
pub mod time;
pub mod value;

// Re-export commonly used types at module level
pub use error::{DateError, PricingError};
pub use time::{year_fraction_act365, Date};
pub use value::{Payload, Value};
