//! Interest rate swap trade payload.

use std::any::Any;
use std::sync::OnceLock;

use pricer_core::types::Date;
use serde::{Deserialize, Serialize};

use crate::instruments::{Trade, TradeKind};

/// Interest rate swap trade.
///
/// Priced by the swap backend, which takes the economic fields positionally
/// together with the curve named by `curve_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrsTrade {
    /// Swap notional.
    pub notional: f64,
    /// Contract fixed rate.
    pub fixed_rate: f64,
    /// Effective date.
    pub start: Date,
    /// Maturity date.
    pub end: Date,
    /// Key of the pricing curve in `MarketState::curves`.
    pub curve_id: String,
}

impl IrsTrade {
    /// Kind name used for registration.
    pub const KIND: &'static str = "IRSTrade";

    /// Creates a new swap trade.
    pub fn new(
        notional: f64,
        fixed_rate: f64,
        start: Date,
        end: Date,
        curve_id: impl Into<String>,
    ) -> Self {
        Self {
            notional,
            fixed_rate,
            start,
            end,
            curve_id: curve_id.into(),
        }
    }

    /// The registry kind shared by every `IrsTrade`.
    pub fn trade_kind() -> TradeKind {
        static KIND: OnceLock<TradeKind> = OnceLock::new();
        KIND.get_or_init(|| TradeKind::new(IrsTrade::KIND)).clone()
    }
}

impl Trade for IrsTrade {
    fn kind(&self) -> TradeKind {
        Self::trade_kind()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irs_kind() {
        let trade = IrsTrade::new(
            1_000_000.0,
            0.032,
            Date::from_ymd(2026, 1, 1).unwrap(),
            Date::from_ymd(2031, 1, 1).unwrap(),
            "usd_ois",
        );
        assert_eq!(trade.kind().name(), "IRSTrade");
        assert!(trade.kind().parents().is_empty());
    }

    #[test]
    fn test_irs_deserialise() {
        let trade: IrsTrade = serde_json::from_str(
            r#"{"notional": 1000000, "fixed_rate": 0.032, "start": "2026-01-01",
                "end": "2031-01-01", "curve_id": "usd_ois"}"#,
        )
        .unwrap();
        assert_eq!(trade.notional, 1_000_000.0);
        assert_eq!(trade.end, Date::from_ymd(2031, 1, 1).unwrap());
    }
}
