//! The pricing dispatcher.
//!
//! [`PricerAdapter`] owns one instance of each pricing backend and a shared
//! [`TradeRegistry`]. `price` resolves the handler for the trade's kind,
//! invokes it, and coerces the result to `f64`.

use std::fmt;
use std::sync::Arc;

use num_traits::ToPrimitive;
use pricer_core::market_data::MarketState;
use pricer_core::types::PricingError;
use pricer_models::analytical::{
    price_swap, swaption_pv, CapFloorPricer, IntrinsicCapFloorPricer, SwapPricer, SwaptionPricer,
};
use pricer_models::instruments::Trade;
use tracing::warn;

use crate::registry::TradeRegistry;

/// Routes trades to pricing backends through a shared registry.
///
/// Adapters are cheap to clone and safe to share across threads. All clones
/// and every adapter built on the same registry see the same registrations.
#[derive(Clone)]
pub struct PricerAdapter {
    registry: Arc<TradeRegistry>,
    swap_pricer: Arc<dyn SwapPricer>,
    swaption_pricer: Arc<dyn SwaptionPricer>,
    capfloor_pricer: Arc<dyn CapFloorPricer>,
}

impl PricerAdapter {
    /// Creates an adapter on `registry` with the default backends.
    pub fn new(registry: Arc<TradeRegistry>) -> Self {
        Self::builder(registry).build()
    }

    /// Starts a builder on `registry` for injecting backends.
    pub fn builder(registry: Arc<TradeRegistry>) -> PricerAdapterBuilder {
        PricerAdapterBuilder::new(registry)
    }

    /// Prices `trade` against `market`.
    ///
    /// # Errors
    /// - `UnsupportedTradeKind` if no handler is registered for the trade's
    ///   kind or any ancestor
    /// - `NonNumericResult` if the handler's value cannot be read as `f64`
    /// - whatever the handler or backend returns
    pub fn price(&self, trade: &dyn Trade, market: &MarketState) -> Result<f64, PricingError> {
        let kind = trade.kind();
        let handler = self.registry.resolve(&kind).ok_or_else(|| {
            warn!(kind = %kind, "No pricing handler registered");
            PricingError::UnsupportedTradeKind(kind.name().to_string())
        })?;

        let value = handler(self, trade, market)?;
        value.to_f64().ok_or_else(|| PricingError::NonNumericResult {
            kind: kind.name().to_string(),
            found: value.type_name().to_string(),
        })
    }

    /// The registry this adapter dispatches through.
    pub fn registry(&self) -> &Arc<TradeRegistry> {
        &self.registry
    }

    /// Swap backend.
    pub fn swap_pricer(&self) -> &dyn SwapPricer {
        self.swap_pricer.as_ref()
    }

    /// Swaption backend.
    pub fn swaption_pricer(&self) -> &dyn SwaptionPricer {
        self.swaption_pricer.as_ref()
    }

    /// Cap/floor backend.
    pub fn capfloor_pricer(&self) -> &dyn CapFloorPricer {
        self.capfloor_pricer.as_ref()
    }
}

impl Default for PricerAdapter {
    /// Adapter on the process-wide registry with the default backends.
    fn default() -> Self {
        Self::new(TradeRegistry::global())
    }
}

impl fmt::Debug for PricerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PricerAdapter")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Builder for [`PricerAdapter`].
///
/// Backends not set explicitly fall back to the analytical defaults.
pub struct PricerAdapterBuilder {
    registry: Arc<TradeRegistry>,
    swap_pricer: Option<Arc<dyn SwapPricer>>,
    swaption_pricer: Option<Arc<dyn SwaptionPricer>>,
    capfloor_pricer: Option<Arc<dyn CapFloorPricer>>,
}

impl PricerAdapterBuilder {
    /// Creates a builder on `registry` with no backend overrides.
    pub fn new(registry: Arc<TradeRegistry>) -> Self {
        Self {
            registry,
            swap_pricer: None,
            swaption_pricer: None,
            capfloor_pricer: None,
        }
    }

    /// Replaces the swap backend.
    pub fn swap_pricer(mut self, pricer: impl SwapPricer + 'static) -> Self {
        self.swap_pricer = Some(Arc::new(pricer));
        self
    }

    /// Replaces the swaption backend.
    pub fn swaption_pricer(mut self, pricer: impl SwaptionPricer + 'static) -> Self {
        self.swaption_pricer = Some(Arc::new(pricer));
        self
    }

    /// Replaces the cap/floor backend.
    pub fn capfloor_pricer(mut self, pricer: impl CapFloorPricer + 'static) -> Self {
        self.capfloor_pricer = Some(Arc::new(pricer));
        self
    }

    /// Builds the adapter.
    pub fn build(self) -> PricerAdapter {
        PricerAdapter {
            registry: self.registry,
            swap_pricer: self.swap_pricer.unwrap_or_else(|| Arc::new(price_swap)),
            swaption_pricer: self.swaption_pricer.unwrap_or_else(|| Arc::new(swaption_pv)),
            capfloor_pricer: self
                .capfloor_pricer
                .unwrap_or_else(|| Arc::new(IntrinsicCapFloorPricer)),
        }
    }
}
