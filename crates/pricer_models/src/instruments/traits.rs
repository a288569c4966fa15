//! Trade trait definitions.
//!
//! This module provides the [`Trade`] trait every priceable value object
//! implements, and [`downcast_trade`] which handlers use to view a trade as
//! the payload type they understand.
//!
//! # Ancestry by composition
//!
//! A derived trade embeds the payload of its parent kind and exposes it via
//! [`Trade::base`]. A handler registered for the parent kind then prices
//! the derived trade by viewing it through that embedded payload:
//!
//! ```
//! use std::any::Any;
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{downcast_trade, IrsTrade, Trade, TradeKind};
//!
//! #[derive(Debug)]
//! struct TaggedIrs {
//!     desk: String,
//!     swap: IrsTrade,
//! }
//!
//! impl Trade for TaggedIrs {
//!     fn kind(&self) -> TradeKind {
//!         TradeKind::with_parents("TaggedIrs", [IrsTrade::trade_kind()])
//!     }
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//!     fn base(&self) -> Option<&dyn Trade> {
//!         Some(&self.swap)
//!     }
//! }
//!
//! let trade = TaggedIrs {
//!     desk: "rates".to_string(),
//!     swap: IrsTrade::new(
//!         1_000_000.0,
//!         0.032,
//!         Date::from_ymd(2026, 1, 1).unwrap(),
//!         Date::from_ymd(2031, 1, 1).unwrap(),
//!         "usd_ois",
//!     ),
//! };
//! let swap: &IrsTrade = downcast_trade(&trade).unwrap();
//! assert_eq!(swap.curve_id, "usd_ois");
//! ```

use std::any::Any;
use std::fmt;

use pricer_core::types::PricingError;

use super::TradeKind;

/// Core trait for all trades the adapter can route.
///
/// Trades are immutable value objects; the trait only exposes what the
/// dispatcher needs to resolve a handler and what handlers need to read
/// the payload back.
pub trait Trade: Any + fmt::Debug + Send + Sync {
    /// The concrete kind of this trade, with its declared ancestors.
    fn kind(&self) -> TradeKind;

    /// Upcast for downcasting to the concrete payload type.
    fn as_any(&self) -> &dyn Any;

    /// The embedded payload of the parent kind, if this trade derives from one.
    ///
    /// Default implementation returns `None`.
    fn base(&self) -> Option<&dyn Trade> {
        None
    }
}

/// Views `trade` as payload type `T`, walking [`Trade::base`] until one matches.
///
/// # Errors
/// `PricingError::TradeMismatch` if neither the trade nor any embedded base is a `T`.
pub fn downcast_trade<T: Trade>(trade: &dyn Trade) -> Result<&T, PricingError> {
    let mut current = Some(trade);
    while let Some(candidate) = current {
        if let Some(found) = candidate.as_any().downcast_ref::<T>() {
            return Ok(found);
        }
        current = candidate.base();
    }

    Err(PricingError::TradeMismatch {
        expected: short_type_name::<T>().to_string(),
        actual: trade.kind().name().to_string(),
    })
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
