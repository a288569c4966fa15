//! Integration tests for trade dispatch.
//!
//! Every test builds its own registry so registrations never leak between
//! tests.

use std::any::Any;
use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use pricer_core::market_data::MarketState;
use pricer_core::payload;
use pricer_core::types::{Date, Payload, PricingError, Value};
use pricer_models::analytical::CapFloorPricer;
use pricer_models::instruments::{
    downcast_trade, CapFloorTrade, IrsTrade, SwaptionTrade, Trade, TradeKind,
};
use pricer_pricing::{handler, PricerAdapter, TradeRegistry};
use proptest::prelude::*;

fn demo_market() -> MarketState {
    MarketState::new()
        .with_curve("usd_ois", payload! { "par_rate" => 0.03 })
        .with_curve("usd_3m", payload! { "forward" => 0.031 })
        .with_market_data("implied_vol", 0.22)
        .with_vol_surface("usd_3m_caps", payload! { "atm_vol" => 0.19 })
}

fn demo_swap() -> IrsTrade {
    IrsTrade::new(
        1_000_000.0,
        0.032,
        Date::from_ymd(2026, 1, 1).unwrap(),
        Date::from_ymd(2031, 1, 1).unwrap(),
        "usd_ois",
    )
}

fn demo_cap() -> CapFloorTrade {
    CapFloorTrade::new(
        payload! { "type" => "cap", "strike" => 0.03, "notional" => 2_000_000 },
        "usd_3m",
        "usd_3m_caps",
    )
    .with_options(payload! { "scale" => 1.2 })
}

fn builtin_adapter() -> PricerAdapter {
    PricerAdapter::new(Arc::new(TradeRegistry::with_builtins()))
}

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

/// A swap carrying a desk tag, deriving from the built-in swap kind.
#[derive(Debug)]
struct DeskSwap {
    desk: &'static str,
    swap: IrsTrade,
}

impl Trade for DeskSwap {
    fn kind(&self) -> TradeKind {
        TradeKind::with_parents("DeskSwap", [IrsTrade::trade_kind()])
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn base(&self) -> Option<&dyn Trade> {
        Some(&self.swap)
    }
}

#[test]
fn test_dispatch_returns_handler_value() {
    let registry = Arc::new(TradeRegistry::new());
    registry.register(
        IrsTrade::trade_kind(),
        handler(|_, trade, _| {
            let swap: &IrsTrade = downcast_trade(trade)?;
            Ok(Value::Float(swap.notional / 4.0))
        }),
    );
    let adapter = PricerAdapter::new(registry);
    assert_eq!(adapter.price(&demo_swap(), &demo_market()).unwrap(), 250_000.0);
}

#[test]
fn test_unsupported_kind_names_the_kind() {
    let adapter = builtin_adapter();
    let err = adapter.price(&ExoticTrade, &demo_market()).unwrap_err();
    assert_eq!(err, PricingError::UnsupportedTradeKind("ExoticTrade".to_string()));
    assert!(err.to_string().contains("ExoticTrade"));

    // The adapter stays usable after a failure
    assert!(adapter.price(&demo_swap(), &demo_market()).is_ok());
}

#[test]
fn test_ancestry_fallback_uses_parent_handler() {
    let adapter = builtin_adapter();
    let trade = DeskSwap {
        desk: "rates",
        swap: demo_swap(),
    };
    assert!(!adapter.registry().contains(&trade.kind()));

    let pv = adapter.price(&trade, &demo_market()).unwrap();
    assert_relative_eq!(pv, 10_005.479452054795, epsilon = 1e-6);
    assert_eq!(trade.desk, "rates");
}

#[test]
fn test_subtype_registration_takes_precedence() {
    let registry = Arc::new(TradeRegistry::with_builtins());
    registry.register(
        TradeKind::new("DeskSwap"),
        handler(|_, _, _| Ok(Value::Int(-1))),
    );
    let adapter = PricerAdapter::new(registry);
    let trade = DeskSwap {
        desk: "xva",
        swap: demo_swap(),
    };
    assert_eq!(adapter.price(&trade, &demo_market()).unwrap(), -1.0);
}

#[test]
fn test_reregistration_replaces_handler() {
    let registry = Arc::new(TradeRegistry::with_builtins());
    let adapter = PricerAdapter::new(Arc::clone(&registry));
    let market = demo_market();
    assert!(adapter.price(&demo_swap(), &market).unwrap() > 10_000.0);

    registry.register(IrsTrade::trade_kind(), handler(|_, _, _| Ok(Value::Float(1.0))));
    assert_eq!(adapter.price(&demo_swap(), &market).unwrap(), 1.0);
    assert_eq!(registry.len(), 3);
}

type SwapCall = (f64, f64, Date, Date, Value);

#[test]
fn test_injected_swap_backend_receives_positional_arguments() {
    let calls: Arc<Mutex<Vec<SwapCall>>> = Arc::new(Mutex::new(Vec::new()));
    let spy = {
        let calls = Arc::clone(&calls);
        move |notional: f64, fixed_rate: f64, start: Date, end: Date, curve: &Value| {
            calls
                .lock()
                .unwrap()
                .push((notional, fixed_rate, start, end, curve.clone()));
            Ok::<f64, PricingError>(123.0)
        }
    };
    let adapter = PricerAdapter::builder(Arc::new(TradeRegistry::with_builtins()))
        .swap_pricer(spy)
        .build();

    let pv = adapter.price(&demo_swap(), &demo_market()).unwrap();
    assert_eq!(pv, 123.0);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (notional, fixed_rate, start, end, curve) = &calls[0];
    assert_eq!(*notional, 1_000_000.0);
    assert_eq!(*fixed_rate, 0.032);
    assert_eq!(*start, Date::from_ymd(2026, 1, 1).unwrap());
    assert_eq!(*end, Date::from_ymd(2031, 1, 1).unwrap());
    assert_eq!(curve, &Value::from(payload! { "par_rate" => 0.03 }));
}

#[test]
fn test_injected_swaption_backend_receives_payload_and_market_data() {
    let seen: Arc<Mutex<Option<(Payload, Payload)>>> = Arc::new(Mutex::new(None));
    let spy = {
        let seen = Arc::clone(&seen);
        move |trade_dict: &Payload, market_data: &Payload| {
            *seen.lock().unwrap() = Some((trade_dict.clone(), market_data.clone()));
            Ok::<f64, PricingError>(7.0)
        }
    };
    let adapter = PricerAdapter::builder(Arc::new(TradeRegistry::with_builtins()))
        .swaption_pricer(spy)
        .build();

    let dict = payload! { "notional" => 5_000_000, "annuity" => 4.1, "strike" => 0.028 };
    let pv = adapter
        .price(&SwaptionTrade::new(dict.clone()), &demo_market())
        .unwrap();
    assert_eq!(pv, 7.0);

    let seen = seen.lock().unwrap();
    let (trade_dict, market_data) = seen.as_ref().unwrap();
    assert_eq!(trade_dict, &dict);
    assert_eq!(market_data, &demo_market().market_data);
}

/// Records the option set of every call and returns its size.
struct RecordingCapFloorPricer {
    options: Arc<Mutex<Vec<Payload>>>,
}

impl CapFloorPricer for RecordingCapFloorPricer {
    fn price(
        &self,
        _cap: &Payload,
        _curve: &Value,
        _vol_surface: &Value,
        options: &Payload,
    ) -> Result<f64, PricingError> {
        self.options.lock().unwrap().push(options.clone());
        Ok(options.len() as f64)
    }
}

#[test]
fn test_injected_capfloor_backend_receives_open_options() {
    let options = Arc::new(Mutex::new(Vec::new()));
    let adapter = PricerAdapter::builder(Arc::new(TradeRegistry::with_builtins()))
        .capfloor_pricer(RecordingCapFloorPricer {
            options: Arc::clone(&options),
        })
        .build();
    let trade = demo_cap().with_options(payload! { "scale" => 1.2, "model" => "bachelier" });

    assert_eq!(adapter.price(&trade, &demo_market()).unwrap(), 2.0);
    let options = options.lock().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["model"], Value::from("bachelier"));
}

#[test]
fn test_swap_example_default_backend() {
    let pv = builtin_adapter().price(&demo_swap(), &demo_market()).unwrap();
    assert_relative_eq!(pv, 1_000_000.0 * 0.002 * 1826.0 / 365.0, epsilon = 1e-6);
    assert!((pv - 10_005.48).abs() < 0.01);
}

#[test]
fn test_capfloor_example_default_backend() {
    let pv = builtin_adapter().price(&demo_cap(), &demo_market()).unwrap();
    assert_relative_eq!(pv, 456.0, epsilon = 1e-6);
}

#[test]
fn test_swaption_example_default_backend() {
    let trade = SwaptionTrade::new(payload! { "notional" => 5_000_000, "annuity" => 4.1 });
    let pv = builtin_adapter().price(&trade, &demo_market()).unwrap();
    assert_relative_eq!(pv, 4_510_000.0, epsilon = 1e-6);
}

#[test]
fn test_missing_curve_propagates_key_not_found() {
    let adapter = builtin_adapter();
    let market = MarketState::new().with_vol_surface("usd_3m_caps", payload! { "atm_vol" => 0.19 });

    let err = adapter.price(&demo_swap(), &market).unwrap_err();
    assert_eq!(err, PricingError::key_not_found("curves", "usd_ois"));

    let err = adapter.price(&demo_cap(), &market).unwrap_err();
    assert_eq!(err, PricingError::key_not_found("curves", "usd_3m"));
}

#[test]
fn test_runtime_registered_kind() {
    #[derive(Debug)]
    struct FxForwardTrade {
        notional: f64,
    }

    impl Trade for FxForwardTrade {
        fn kind(&self) -> TradeKind {
            TradeKind::new("FxForwardTrade")
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    let registry = Arc::new(TradeRegistry::with_builtins());
    let adapter = PricerAdapter::new(Arc::clone(&registry));
    let trade = FxForwardTrade {
        notional: 3_000_000.0,
    };
    assert!(matches!(
        adapter.price(&trade, &demo_market()),
        Err(PricingError::UnsupportedTradeKind(_))
    ));

    registry.register(
        TradeKind::new("FxForwardTrade"),
        handler(|_, trade, _| {
            let fx: &FxForwardTrade = downcast_trade(trade)?;
            Ok(Value::Float(fx.notional * 0.01))
        }),
    );
    assert_relative_eq!(adapter.price(&trade, &demo_market()).unwrap(), 30_000.0);
}

#[test]
fn test_registries_are_isolated() {
    let a = Arc::new(TradeRegistry::new());
    let b = Arc::new(TradeRegistry::new());
    a.register(TradeKind::new("OnlyInA"), handler(|_, _, _| Ok(Value::Int(1))));
    assert!(a.contains(&TradeKind::new("OnlyInA")));
    assert!(!b.contains(&TradeKind::new("OnlyInA")));
}

#[test]
fn test_deep_shared_ancestry_resolves_to_root_handler() {
    let root = TradeKind::new("Root");
    let mut top = root.clone();
    for i in 0..64 {
        let left = TradeKind::with_parents(format!("Left{}", i), [top.clone()]);
        let right = TradeKind::with_parents(format!("Right{}", i), [top]);
        top = TradeKind::with_parents(format!("Join{}", i), [left, right]);
    }

    let registry = Arc::new(TradeRegistry::new());
    registry.register(root, handler(|_, _, _| Ok(Value::Float(7.0))));
    let adapter = PricerAdapter::new(registry);

    assert_relative_eq!(adapter.price(&Generated(top), &demo_market()).unwrap(), 7.0);
}

#[derive(Debug)]
struct Generated(TradeKind);

impl Trade for Generated {
    fn kind(&self) -> TradeKind {
        self.0.clone()
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Random hierarchy (kind `i` derives only from kinds `< i`) plus a random
/// subset of kinds with registered handlers.
fn arb_registered_hierarchy() -> impl Strategy<Value = (Vec<TradeKind>, Vec<bool>)> {
    (1usize..10)
        .prop_flat_map(|n| {
            (
                proptest::collection::vec(proptest::collection::vec(any::<usize>(), 0..3), n),
                proptest::collection::vec(any::<bool>(), n),
            )
        })
        .prop_map(|(parent_picks, registered)| {
            let mut kinds: Vec<TradeKind> = Vec::new();
            for (i, picks) in parent_picks.into_iter().enumerate() {
                let parents: Vec<TradeKind> = if i == 0 {
                    Vec::new()
                } else {
                    picks.into_iter().map(|p| kinds[p % i].clone()).collect()
                };
                kinds.push(TradeKind::with_parents(format!("K{}", i), parents));
            }
            (kinds, registered)
        })
}

proptest! {
    #[test]
    fn prop_price_uses_first_registered_kind_in_lineage(
        (kinds, registered) in arb_registered_hierarchy()
    ) {
        let registry = Arc::new(TradeRegistry::new());
        for (i, kind) in kinds.iter().enumerate() {
            if registered[i] {
                registry.register(kind.clone(), handler(move |_, _, _| Ok(Value::from(i as i64))));
            }
        }
        let adapter = PricerAdapter::new(registry);
        let market = MarketState::new();

        for kind in &kinds {
            let expected = kind
                .lineage()
                .iter()
                .position(|k| registered[kinds.iter().position(|c| c == k).unwrap()])
                .map(|pos| kind.lineage()[pos].name()[1..].parse::<f64>().unwrap());

            let result = adapter.price(&Generated(kind.clone()), &market);
            match expected {
                Some(value) => prop_assert_eq!(result, Ok(value)),
                None => prop_assert_eq!(
                    result,
                    Err(PricingError::UnsupportedTradeKind(kind.name().to_string()))
                ),
            }
        }
    }
}
