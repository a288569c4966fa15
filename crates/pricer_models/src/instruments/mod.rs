//! Trade definitions.
//!
//! This module provides the value objects the adapter routes, together with
//! the kind hierarchy the dispatcher resolves against.
//!
//! # Architecture
//!
//! Unlike a closed instrument enum, trades are open: any type implementing
//! [`Trade`] can be priced once a handler is registered for its
//! [`TradeKind`] or one of that kind's ancestors.
//!
//! # Trade Types
//!
//! - [`IrsTrade`]: Interest rate swap
//! - [`SwaptionTrade`]: Swaption with a free-form payload
//! - [`CapFloorTrade`]: Cap/floor with curve and surface references
//! - [`TradeRecord`] / [`PortfolioEntry`]: Serialisable wrappers for portfolio files

mod kind;
mod record;
mod traits;

pub mod rates;

pub use kind::TradeKind;
pub use rates::{CapFloorTrade, IrsTrade, SwaptionTrade};
pub use record::{PortfolioEntry, TradeRecord};
pub use traits::{downcast_trade, Trade};
