//! Built-in interest rate trade payloads.
//!
//! This module provides the three trade kinds the adapter prices out of the box:
//! - [`IrsTrade`]: Vanilla swap with explicit economic fields
//! - [`SwaptionTrade`]: Swaption carried as a free-form payload
//! - [`CapFloorTrade`]: Cap/floor payload plus curve and surface references
//!
//! Each payload shape mirrors the backend that prices it; the handlers in
//! `pricer_pricing` only reshape arguments.
//!
//! # Examples
//!
//! ```
//! use pricer_core::payload;
//! use pricer_models::instruments::rates::{CapFloorTrade, SwaptionTrade};
//! use pricer_models::instruments::Trade;
//!
//! let swaption = SwaptionTrade::new(payload! { "notional" => 5_000_000, "annuity" => 4.1 });
//! assert_eq!(swaption.kind().name(), "SwaptionTrade");
//!
//! let cap = CapFloorTrade::new(payload! { "strike" => 0.03 }, "usd_3m", "usd_3m_caps")
//!     .with_options(payload! { "scale" => 1.2 });
//! assert_eq!(cap.kwargs.len(), 1);
//! ```

mod capfloor;
mod swap;
mod swaption;

pub use capfloor::CapFloorTrade;
pub use swap::IrsTrade;
pub use swaption::SwaptionTrade;
