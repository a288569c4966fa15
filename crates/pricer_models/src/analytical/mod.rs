//! Pricing backends behind the adapter.
//!
//! Each backend exposes the call signature of a different pricing library:
//! - [`SwapPricer`]: positional arguments (`notional, fixed_rate, start, end, curve`)
//! - [`SwaptionPricer`]: two free-form mappings (trade payload, market data)
//! - [`CapFloorPricer`]: an object with a `price` method taking an open option set
//!
//! The default implementations are placeholder formulas; they exist to
//! exercise dispatch, not to value anything.
//!
//! ## Injection
//!
//! `SwapPricer` and `SwaptionPricer` are implemented for matching closures,
//! so a replacement backend can be a plain function:
//!
//! ```
//! use pricer_core::types::{Date, PricingError, Value};
//! use pricer_models::analytical::SwapPricer;
//!
//! let flat = |notional: f64, _rate: f64, _start: Date, _end: Date, _curve: &Value| {
//!     Ok::<f64, PricingError>(notional * 0.001)
//! };
//! let start = Date::from_ymd(2026, 1, 1).unwrap();
//! assert_eq!(flat.price_swap(1000.0, 0.0, start, start, &Value::Null).unwrap(), 1.0);
//! ```

pub mod capfloor;
pub mod swap;
pub mod swaption;

// Re-export main types at module level
pub use capfloor::{CapFloorPricer, IntrinsicCapFloorPricer};
pub use swap::{price_swap, SwapPricer};
pub use swaption::{swaption_pv, SwaptionPricer};
