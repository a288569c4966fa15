//! # Pricer Pricing (Dispatch Layer)
//!
//! A single entry point, [`PricerAdapter::price`], that routes any trade to
//! the pricing backend able to value it.
//!
//! ## Architecture
//!
//! - [`registry`]: thread-safe [`TradeKind`](pricer_models::instruments::TradeKind)
//!   to handler mapping, resolved along the kind's lineage
//! - [`adapter`]: the dispatcher owning the backends and a shared registry
//! - [`handlers`]: built-in handlers for swaps, swaptions and caps/floors
//! - [`portfolio`]: parallel pricing of many trades against one snapshot
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::MarketState;
//! use pricer_core::payload;
//! use pricer_core::types::Date;
//! use pricer_models::instruments::IrsTrade;
//! use pricer_pricing::PricerAdapter;
//!
//! let adapter = PricerAdapter::default();
//! let market = MarketState::new().with_curve("usd_ois", payload! { "par_rate" => 0.03 });
//! let swap = IrsTrade::new(
//!     1_000_000.0,
//!     0.032,
//!     Date::from_ymd(2026, 1, 1).unwrap(),
//!     Date::from_ymd(2031, 1, 1).unwrap(),
//!     "usd_ois",
//! );
//!
//! let pv = adapter.price(&swap, &market).unwrap();
//! assert!((pv - 10_005.48).abs() < 0.01);
//! ```
//!
//! ## Extension
//!
//! New trade kinds are supported by registering a handler on the registry
//! the adapter was built with; no adapter code changes:
//!
//! ```rust
//! use std::any::Any;
//! use std::sync::Arc;
//! use pricer_core::market_data::MarketState;
//! use pricer_core::types::Value;
//! use pricer_models::instruments::{downcast_trade, Trade, TradeKind};
//! use pricer_pricing::{handler, PricerAdapter, TradeRegistry};
//!
//! #[derive(Debug)]
//! struct FxForwardTrade {
//!     notional: f64,
//! }
//!
//! impl Trade for FxForwardTrade {
//!     fn kind(&self) -> TradeKind {
//!         TradeKind::new("FxForwardTrade")
//!     }
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! let registry = Arc::new(TradeRegistry::with_builtins());
//! let adapter = PricerAdapter::new(Arc::clone(&registry));
//! registry.register(
//!     TradeKind::new("FxForwardTrade"),
//!     handler(|_, trade, _| {
//!         let fx: &FxForwardTrade = downcast_trade(trade)?;
//!         Ok(Value::Float(fx.notional * 0.01))
//!     }),
//! );
//!
//! let pv = adapter
//!     .price(&FxForwardTrade { notional: 3_000_000.0 }, &MarketState::new())
//!     .unwrap();
//! assert!((pv - 30_000.0).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod adapter;
pub mod handlers;
pub mod portfolio;
pub mod registry;

pub use adapter::{PricerAdapter, PricerAdapterBuilder};
pub use handlers::register_builtins;
pub use portfolio::price_portfolio;
pub use registry::{handler, Handler, TradeRegistry};
