//! Market data shared by every pricing call.
//!
//! The adapter treats curves, generic market inputs and volatility surfaces
//! as opaque: handlers look them up by identifier and pass them untouched to
//! the pricing backend.
//!
//! # Components
//!
//! - [`state`]: The immutable market snapshot ([`MarketState`])

pub mod state;

// Re-export commonly used types
pub use state::MarketState;
