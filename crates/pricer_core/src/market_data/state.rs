//! Immutable market snapshot.

use serde::{Deserialize, Serialize};

use crate::types::{Payload, PricingError, Value};

/// Snapshot bundling named curves, generic market data and named
/// volatility surfaces.
///
/// Each section defaults to empty, so partial documents deserialise:
///
/// ```
/// use pricer_core::market_data::MarketState;
///
/// let market: MarketState = toml::from_str(r#"
///     [curves.usd_ois]
///     par_rate = 0.03
/// "#).unwrap();
/// assert!(market.curve("usd_ois").is_ok());
/// assert!(market.market_data.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketState {
    /// Curves keyed by curve identifier.
    pub curves: Payload,
    /// Generic market inputs consumed by mapping-style pricers.
    pub market_data: Payload,
    /// Volatility surfaces keyed by surface identifier.
    pub vol_surfaces: Payload,
}

impl MarketState {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a named curve.
    pub fn with_curve(mut self, id: impl Into<String>, curve: impl Into<Value>) -> Self {
        self.curves.insert(id.into(), curve.into());
        self
    }

    /// Adds (or replaces) a generic market input.
    pub fn with_market_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.market_data.insert(key.into(), value.into());
        self
    }

    /// Adds (or replaces) a named volatility surface.
    pub fn with_vol_surface(mut self, id: impl Into<String>, surface: impl Into<Value>) -> Self {
        self.vol_surfaces.insert(id.into(), surface.into());
        self
    }

    /// Looks up a curve by identifier.
    ///
    /// # Errors
    /// `PricingError::KeyNotFound` if `id` is not in `curves`.
    pub fn curve(&self, id: &str) -> Result<&Value, PricingError> {
        self.curves
            .get(id)
            .ok_or_else(|| PricingError::key_not_found("curves", id))
    }

    /// Looks up a volatility surface by identifier.
    ///
    /// # Errors
    /// `PricingError::KeyNotFound` if `id` is not in `vol_surfaces`.
    pub fn vol_surface(&self, id: &str) -> Result<&Value, PricingError> {
        self.vol_surfaces
            .get(id)
            .ok_or_else(|| PricingError::key_not_found("vol_surfaces", id))
    }
}
