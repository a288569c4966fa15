//! Built-in handlers for the rates trade kinds.
//!
//! Each handler translates one trade payload into the call signature of its
//! backend:
//!
//! | Kind            | Backend call                                               |
//! |-----------------|------------------------------------------------------------|
//! | `IRSTrade`      | `price_swap(notional, fixed_rate, start, end, curve)`      |
//! | `SwaptionTrade` | `swaption_pv(trade_dict, market_data)`                     |
//! | `CapFloorTrade` | `price(cap, curve, vol_surface, options)`                  |

use pricer_core::market_data::MarketState;
use pricer_core::types::{PricingError, Value};
use pricer_models::instruments::{downcast_trade, CapFloorTrade, IrsTrade, SwaptionTrade, Trade};

use crate::adapter::PricerAdapter;
use crate::registry::{handler, TradeRegistry};

/// Installs the swap, swaption and cap/floor handlers on `registry`.
///
/// Existing handlers for those kinds are replaced.
pub fn register_builtins(registry: &TradeRegistry) {
    registry.register(IrsTrade::trade_kind(), handler(price_irs));
    registry.register(SwaptionTrade::trade_kind(), handler(price_swaption));
    registry.register(CapFloorTrade::trade_kind(), handler(price_capfloor));
}

/// Prices a swap with the positional backend against its curve.
pub fn price_irs(
    adapter: &PricerAdapter,
    trade: &dyn Trade,
    market: &MarketState,
) -> Result<Value, PricingError> {
    let swap: &IrsTrade = downcast_trade(trade)?;
    let curve = market.curve(&swap.curve_id)?;
    adapter
        .swap_pricer()
        .price_swap(swap.notional, swap.fixed_rate, swap.start, swap.end, curve)
        .map(Value::from)
}

/// Prices a swaption from its payload and the snapshot's generic market data.
pub fn price_swaption(
    adapter: &PricerAdapter,
    trade: &dyn Trade,
    market: &MarketState,
) -> Result<Value, PricingError> {
    let swaption: &SwaptionTrade = downcast_trade(trade)?;
    adapter
        .swaption_pricer()
        .swaption_pv(&swaption.trade_dict, &market.market_data)
        .map(Value::from)
}

/// Prices a cap/floor, forwarding its extra options untouched.
///
/// The curve is looked up before the volatility surface, so a snapshot
/// missing both reports the curve.
pub fn price_capfloor(
    adapter: &PricerAdapter,
    trade: &dyn Trade,
    market: &MarketState,
) -> Result<Value, PricingError> {
    let capfloor: &CapFloorTrade = downcast_trade(trade)?;
    let curve = market.curve(&capfloor.curve_id)?;
    let vol_surface = market.vol_surface(&capfloor.vol_surface_id)?;
    adapter
        .capfloor_pricer()
        .price(&capfloor.cap, curve, vol_surface, &capfloor.kwargs)
        .map(Value::from)
}
