//! Demo command: prices one trade of each built-in kind.
//!
//! # Expected Output
//!
//! ```text
//! IRS PV: 10,005.48
//! Swaption PV: 4,510,000.00
//! Cap/Floor PV: 456.00
//! Unsupported trade example: Unsupported trade type: ExoticTrade
//! ```

use std::any::Any;

use pricer_core::market_data::MarketState;
use pricer_core::payload;
use pricer_core::types::{Date, PricingError};
use pricer_models::instruments::{CapFloorTrade, IrsTrade, SwaptionTrade, Trade, TradeKind};
use pricer_pricing::PricerAdapter;
use tracing::info;

use super::format_amount;
use crate::Result;

/// Trade kind nobody registers a handler for.
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

/// Snapshot with one curve per built-in handler, swaption market data and
/// a cap volatility surface.
pub fn demo_market() -> MarketState {
    MarketState::new()
        .with_curve("usd_ois", payload! { "par_rate" => 0.03 })
        .with_curve("usd_3m", payload! { "forward" => 0.031 })
        .with_market_data("implied_vol", 0.22)
        .with_vol_surface("usd_3m_caps", payload! { "atm_vol" => 0.19 })
}

/// Prices the demo trades and returns the report lines.
///
/// The unsupported trade is expected to fail; any other failure is returned.
pub fn report(adapter: &PricerAdapter) -> Result<Vec<String>> {
    let market = demo_market();

    let irs = IrsTrade::new(
        1_000_000.0,
        0.032,
        Date::from_ymd(2026, 1, 1)?,
        Date::from_ymd(2031, 1, 1)?,
        "usd_ois",
    );
    let swaption =
        SwaptionTrade::new(payload! { "notional" => 5_000_000, "annuity" => 4.1, "strike" => 0.028 });
    let capfloor = CapFloorTrade::new(
        payload! { "type" => "cap", "strike" => 0.03, "notional" => 2_000_000 },
        "usd_3m",
        "usd_3m_caps",
    )
    .with_options(payload! { "scale" => 1.2 });

    let mut lines = vec![
        format!("IRS PV: {}", format_amount(adapter.price(&irs, &market)?)),
        format!("Swaption PV: {}", format_amount(adapter.price(&swaption, &market)?)),
        format!("Cap/Floor PV: {}", format_amount(adapter.price(&capfloor, &market)?)),
    ];

    match adapter.price(&ExoticTrade, &market) {
        Err(err @ PricingError::UnsupportedTradeKind(_)) => {
            lines.push(format!("Unsupported trade example: {}", err));
        }
        Err(err) => return Err(err.into()),
        Ok(pv) => lines.push(format!("Exotic PV: {}", format_amount(pv))),
    }

    Ok(lines)
}

/// Run the demo command
pub fn run(adapter: &PricerAdapter) -> Result<()> {
    info!("Running pricing adapter demo");
    for line in report(adapter)? {
        println!("{}", line);
    }
    Ok(())
}
