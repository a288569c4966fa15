//! Swaption trade payload.

use std::any::Any;
use std::sync::OnceLock;

use pricer_core::types::Payload;
use serde::{Deserialize, Serialize};

use crate::instruments::{Trade, TradeKind};

/// Swaption trade represented as a free-form mapping.
///
/// The payload is handed to the swaption backend untouched; no field is
/// extracted or validated on the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwaptionTrade {
    /// Free-form mapping consumed by the swaption backend.
    pub trade_dict: Payload,
}

impl SwaptionTrade {
    /// Kind name used for registration.
    pub const KIND: &'static str = "SwaptionTrade";

    /// Creates a new swaption trade from its payload.
    pub fn new(trade_dict: Payload) -> Self {
        Self { trade_dict }
    }

    /// The registry kind shared by every `SwaptionTrade`.
    pub fn trade_kind() -> TradeKind {
        static KIND: OnceLock<TradeKind> = OnceLock::new();
        KIND.get_or_init(|| TradeKind::new(SwaptionTrade::KIND)).clone()
    }
}

impl Trade for SwaptionTrade {
    fn kind(&self) -> TradeKind {
        Self::trade_kind()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
