//! # pricer_core: Foundation Types for the Trade Pricing Adapter
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Trade dates and ACT/365 accrual: `Date`, `year_fraction_act365` (`types::time`)
//! - Opaque pass-through payloads: `Value`, `Payload` (`types::value`)
//! - Error types: `PricingError`, `DateError` (`types::error`)
//! - The shared market snapshot handed to every handler (`market_data`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: numeric coercion of opaque values (`ToPrimitive`)
//! - chrono: Date arithmetic
//! - serde: loading payloads and market snapshots from documents
//! - thiserror: error enums
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketState;
//! use pricer_core::payload;
//! use pricer_core::types::{year_fraction_act365, Date};
//!
//! let start = Date::from_ymd(2026, 1, 1).unwrap();
//! let end = Date::from_ymd(2031, 1, 1).unwrap();
//! assert_eq!(end - start, 1826);
//! let yf = year_fraction_act365(start, end);
//! assert!((yf - 5.0027).abs() < 1e-4);
//!
//! let market = MarketState::new().with_curve("usd_ois", payload! { "par_rate" => 0.03 });
//! assert!(market.curve("usd_ois").is_ok());
//! assert!(market.curve("eur_estr").is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
