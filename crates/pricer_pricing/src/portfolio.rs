//! Parallel portfolio pricing.

use pricer_core::market_data::MarketState;
use pricer_core::types::PricingError;
use pricer_models::instruments::Trade;
use rayon::prelude::*;

use crate::adapter::PricerAdapter;

/// Prices every trade against the same snapshot using Rayon.
///
/// Results come back in input order. A failing trade yields its own `Err`
/// and never aborts the rest of the batch.
pub fn price_portfolio(
    adapter: &PricerAdapter,
    trades: &[Box<dyn Trade>],
    market: &MarketState,
) -> Vec<Result<f64, PricingError>> {
    trades
        .par_iter()
        .map(|trade| adapter.price(trade.as_ref(), market))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TradeRegistry;
    use pricer_core::payload;
    use pricer_models::instruments::{SwaptionTrade, TradeKind};
    use std::any::Any;
    use std::sync::Arc;

    #[derive(Debug)]
    struct ExoticTrade;

    impl Trade for ExoticTrade {
        fn kind(&self) -> TradeKind {
            TradeKind::new("ExoticTrade")
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_preserves_order_and_isolates_failures() {
        let adapter = PricerAdapter::new(Arc::new(TradeRegistry::with_builtins()));
        let market = MarketState::new().with_market_data("implied_vol", 0.5);

        let trades: Vec<Box<dyn Trade>> = (0..64)
            .map(|i| -> Box<dyn Trade> {
                if i % 8 == 7 {
                    Box::new(ExoticTrade)
                } else {
                    Box::new(SwaptionTrade::new(payload! { "notional" => i }))
                }
            })
            .collect();

        let results = price_portfolio(&adapter, &trades, &market);
        assert_eq!(results.len(), 64);
        for (i, result) in results.iter().enumerate() {
            if i % 8 == 7 {
                assert_eq!(
                    result,
                    &Err(PricingError::UnsupportedTradeKind("ExoticTrade".to_string()))
                );
            } else {
                assert_eq!(result, &Ok(i as f64 * 0.5));
            }
        }
    }

    #[test]
    fn test_empty_portfolio() {
        let adapter = PricerAdapter::new(Arc::new(TradeRegistry::new()));
        assert!(price_portfolio(&adapter, &[], &MarketState::new()).is_empty());
    }
}
