//! Object-style cap/floor backend.

use pricer_core::types::value::number_or;
use pricer_core::types::{Payload, PricingError, Value};

/// Cap/floor pricing library signature.
///
/// `options` is an open set of named arguments; implementations ignore the
/// names they do not understand.
pub trait CapFloorPricer: Send + Sync {
    /// Prices a cap/floor payload against a curve and a volatility surface.
    fn price(
        &self,
        cap: &Payload,
        curve: &Value,
        vol_surface: &Value,
        options: &Payload,
    ) -> Result<f64, PricingError>;
}

/// Default cap/floor pricer.
///
/// `max(forward - strike, 0) * notional * atm_vol * scale`, with `notional`
/// defaulting to 1, `strike` to 0, `forward` to the strike, `atm_vol` to 0
/// and the `scale` option to 1.
///
/// # Examples
///
/// ```
/// use pricer_core::payload;
/// use pricer_core::types::Value;
/// use pricer_models::analytical::{CapFloorPricer, IntrinsicCapFloorPricer};
///
/// let pv = IntrinsicCapFloorPricer
///     .price(
///         &payload! { "strike" => 0.03, "notional" => 2_000_000 },
///         &Value::from(payload! { "forward" => 0.031 }),
///         &Value::from(payload! { "atm_vol" => 0.19 }),
///         &payload! { "scale" => 1.2 },
///     )
///     .unwrap();
/// assert!((pv - 456.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntrinsicCapFloorPricer;

impl CapFloorPricer for IntrinsicCapFloorPricer {
    fn price(
        &self,
        cap: &Payload,
        curve: &Value,
        vol_surface: &Value,
        options: &Payload,
    ) -> Result<f64, PricingError> {
        let notional = number_or(Some(cap), "notional", 1.0)?;
        let strike = number_or(Some(cap), "strike", 0.0)?;
        let forward = curve.number_or("forward", strike)?;
        let atm_vol = vol_surface.number_or("atm_vol", 0.0)?;
        let scale = number_or(Some(options), "scale", 1.0)?;
        let intrinsic = (forward - strike).max(0.0);
        Ok(intrinsic * notional * atm_vol * scale)
    }
}
