//! Positional-signature swap backend.

use pricer_core::types::{year_fraction_act365, Date, PricingError, Value};

/// Swap pricing library signature.
pub trait SwapPricer: Send + Sync {
    /// Prices a swap from its economic fields and the resolved curve.
    fn price_swap(
        &self,
        notional: f64,
        fixed_rate: f64,
        start: Date,
        end: Date,
        curve: &Value,
    ) -> Result<f64, PricingError>;
}

impl<F> SwapPricer for F
where
    F: Fn(f64, f64, Date, Date, &Value) -> Result<f64, PricingError> + Send + Sync,
{
    fn price_swap(
        &self,
        notional: f64,
        fixed_rate: f64,
        start: Date,
        end: Date,
        curve: &Value,
    ) -> Result<f64, PricingError> {
        self(notional, fixed_rate, start, end, curve)
    }
}

/// Default swap formula.
///
/// `notional * (fixed_rate - par_rate) * max(ACT/365(start, end), 0)`, where
/// `par_rate` is read from the curve and defaults to `fixed_rate`.
///
/// # Examples
///
/// ```
/// use pricer_core::payload;
/// use pricer_core::types::{Date, Value};
/// use pricer_models::analytical::price_swap;
///
/// let curve = Value::from(payload! { "par_rate" => 0.03 });
/// let pv = price_swap(
///     1_000_000.0,
///     0.032,
///     Date::from_ymd(2026, 1, 1).unwrap(),
///     Date::from_ymd(2031, 1, 1).unwrap(),
///     &curve,
/// )
/// .unwrap();
/// assert!((pv - 10_005.48).abs() < 0.01);
/// ```
pub fn price_swap(
    notional: f64,
    fixed_rate: f64,
    start: Date,
    end: Date,
    curve: &Value,
) -> Result<f64, PricingError> {
    let year_fraction = year_fraction_act365(start, end).max(0.0);
    let par_rate = curve.number_or("par_rate", fixed_rate)?;
    Ok(notional * (fixed_rate - par_rate) * year_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::payload;

    fn dates() -> (Date, Date) {
        (
            Date::from_ymd(2026, 1, 1).unwrap(),
            Date::from_ymd(2031, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_price_swap_example() {
        let (start, end) = dates();
        let curve = Value::from(payload! { "par_rate" => 0.03 });
        let pv = price_swap(1_000_000.0, 0.032, start, end, &curve).unwrap();
        assert_relative_eq!(pv, 1_000_000.0 * 0.002 * 1826.0 / 365.0, epsilon = 1e-6);
    }

    #[test]
    fn test_missing_par_rate_defaults_to_fixed_rate() {
        let (start, end) = dates();
        let pv = price_swap(1_000_000.0, 0.032, start, end, &Value::from(payload! {})).unwrap();
        assert_eq!(pv, 0.0);
    }

    #[test]
    fn test_reversed_dates_floor_year_fraction() {
        let (start, end) = dates();
        let curve = Value::from(payload! { "par_rate" => 0.01 });
        let pv = price_swap(1_000_000.0, 0.032, end, start, &curve).unwrap();
        assert_eq!(pv, 0.0);
    }

    #[test]
    fn test_non_numeric_par_rate_is_invalid_input() {
        let (start, end) = dates();
        let curve = Value::from(payload! { "par_rate" => "three percent" });
        assert!(matches!(
            price_swap(1.0, 0.03, start, end, &curve),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_mapping_curve_is_invalid_input() {
        let (start, end) = dates();
        let err = price_swap(1_000_000.0, 0.032, start, end, &Value::Float(0.03)).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }
}
