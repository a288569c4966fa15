//! Serialisable trade records.
//!
//! Portfolio files list trades as JSON objects tagged by `type`:
//!
//! ```
//! use pricer_models::instruments::PortfolioEntry;
//!
//! let entries: Vec<PortfolioEntry> = serde_json::from_str(r#"[
//!     {"id": "T1", "type": "irs", "notional": 1000000, "fixed_rate": 0.032,
//!      "start": "2026-01-01", "end": "2031-01-01", "curve_id": "usd_ois"},
//!     {"type": "swaption", "trade_dict": {"notional": 5000000, "annuity": 4.1}}
//! ]"#).unwrap();
//!
//! assert_eq!(entries[0].id.as_deref(), Some("T1"));
//! assert_eq!(entries[1].trade.kind().name(), "SwaptionTrade");
//! ```

use serde::{Deserialize, Serialize};

use super::rates::{CapFloorTrade, IrsTrade, SwaptionTrade};
use super::{Trade, TradeKind};

/// One of the built-in trade payloads, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TradeRecord {
    /// Interest rate swap
    Irs(IrsTrade),
    /// Swaption
    Swaption(SwaptionTrade),
    /// Cap/floor
    CapFloor(CapFloorTrade),
}

impl TradeRecord {
    /// Kind of the wrapped payload.
    pub fn kind(&self) -> TradeKind {
        match self {
            TradeRecord::Irs(t) => t.kind(),
            TradeRecord::Swaption(t) => t.kind(),
            TradeRecord::CapFloor(t) => t.kind(),
        }
    }

    /// Unwraps into a boxed trade for dispatch.
    pub fn into_trade(self) -> Box<dyn Trade> {
        match self {
            TradeRecord::Irs(t) => Box::new(t),
            TradeRecord::Swaption(t) => Box::new(t),
            TradeRecord::CapFloor(t) => Box::new(t),
        }
    }
}

/// A trade record with an optional identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// Caller-supplied trade identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The trade itself.
    #[serde(flatten)]
    pub trade: TradeRecord,
}
