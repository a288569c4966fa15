//! Mapping-signature swaption backend.

use pricer_core::types::value::number_or;
use pricer_core::types::{Payload, PricingError};

/// Swaption pricing library signature.
pub trait SwaptionPricer: Send + Sync {
    /// Prices a swaption from its free-form payload and generic market data.
    fn swaption_pv(&self, trade_dict: &Payload, market_data: &Payload)
        -> Result<f64, PricingError>;
}

impl<F> SwaptionPricer for F
where
    F: Fn(&Payload, &Payload) -> Result<f64, PricingError> + Send + Sync,
{
    fn swaption_pv(
        &self,
        trade_dict: &Payload,
        market_data: &Payload,
    ) -> Result<f64, PricingError> {
        self(trade_dict, market_data)
    }
}

/// Default swaption formula: `notional * annuity * implied_vol`.
///
/// `notional` defaults to 0, `annuity` to 1 and `implied_vol` to 0.
pub fn swaption_pv(trade_dict: &Payload, market_data: &Payload) -> Result<f64, PricingError> {
    let notional = number_or(Some(trade_dict), "notional", 0.0)?;
    let annuity = number_or(Some(trade_dict), "annuity", 1.0)?;
    let implied_vol = number_or(Some(market_data), "implied_vol", 0.0)?;
    Ok(notional * annuity * implied_vol)
}
