//! Cap/floor trade payload.

use std::any::Any;
use std::sync::OnceLock;

use pricer_core::types::Payload;
use serde::{Deserialize, Serialize};

use crate::instruments::{Trade, TradeKind};

/// Cap/floor trade for the object-style cap/floor backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapFloorTrade {
    /// Instrument payload (typically `type`, `strike`, `notional`).
    pub cap: Payload,
    /// Key of the forward curve in `MarketState::curves`.
    pub curve_id: String,
    /// Key of the surface in `MarketState::vol_surfaces`.
    pub vol_surface_id: String,
    /// Extra named options forwarded to the backend.
    #[serde(default)]
    pub kwargs: Payload,
}

impl CapFloorTrade {
    /// Kind name used for registration.
    pub const KIND: &'static str = "CapFloorTrade";

    /// Creates a new cap/floor trade with no extra options.
    pub fn new(
        cap: Payload,
        curve_id: impl Into<String>,
        vol_surface_id: impl Into<String>,
    ) -> Self {
        Self {
            cap,
            curve_id: curve_id.into(),
            vol_surface_id: vol_surface_id.into(),
            kwargs: Payload::new(),
        }
    }

    /// Sets the named options forwarded to the backend.
    pub fn with_options(mut self, kwargs: Payload) -> Self {
        self.kwargs = kwargs;
        self
    }

    /// The registry kind shared by every `CapFloorTrade`.
    pub fn trade_kind() -> TradeKind {
        static KIND: OnceLock<TradeKind> = OnceLock::new();
        KIND.get_or_init(|| TradeKind::new(CapFloorTrade::KIND)).clone()
    }
}

impl Trade for CapFloorTrade {
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
    use pricer_core::payload;

    #[test]
    fn test_kwargs_default_to_empty() {
        let trade: CapFloorTrade = serde_json::from_str(
            r#"{"cap": {"strike": 0.03}, "curve_id": "usd_3m", "vol_surface_id": "usd_3m_caps"}"#,
        )
        .unwrap();
        assert!(trade.kwargs.is_empty());
        assert_eq!(trade.kind(), CapFloorTrade::trade_kind());
    }

    #[test]
    fn test_with_options() {
        let trade = CapFloorTrade::new(payload! {}, "c", "v")
            .with_options(payload! { "scale" => 1.2, "greeks" => true });
        assert_eq!(trade.kwargs.len(), 2);
    }
}
