//! Trade kind → handler registry.
//!
//! This module provides [`TradeRegistry`], the mapping every
//! [`PricerAdapter`](crate::PricerAdapter) consults to find the handler for
//! a trade, and the [`Handler`] type stored in it.
//!
//! # Sharing
//!
//! Registration is scoped to the registry, not to an adapter: adapters hold
//! an `Arc<TradeRegistry>`, so a kind registered after an adapter was built
//! is immediately visible to it. Tests build their own registry for
//! isolation; [`TradeRegistry::global`] is the lazily built process-wide
//! instance used by `PricerAdapter::default()`.
//!
//! # Concurrency
//!
//! The map sits behind an `RwLock`. Resolution takes the read lock and
//! returns a cloned `Arc` to the handler, so the lock is never held while a
//! handler runs.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pricer_core::types::Value;
//! use pricer_models::instruments::TradeKind;
//! use pricer_pricing::registry::{handler, TradeRegistry};
//!
//! let registry = TradeRegistry::new();
//! let fx_forward = TradeKind::new("FxForwardTrade");
//! registry.register(fx_forward.clone(), handler(|_, _, _| Ok(Value::Float(1.0))));
//!
//! assert!(registry.contains(&fx_forward));
//! assert!(registry.resolve(&TradeKind::with_parents("NdfTrade", [fx_forward])).is_some());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pricer_core::market_data::MarketState;
use pricer_core::types::{PricingError, Value};
use pricer_models::instruments::{Trade, TradeKind};
use tracing::{debug, trace};

use crate::adapter::PricerAdapter;
use crate::handlers::register_builtins;

/// A pricing handler: `(adapter, trade, market) -> value`.
///
/// The returned [`Value`] is coerced to `f64` by the adapter.
pub type Handler = Arc<
    dyn Fn(&PricerAdapter, &dyn Trade, &MarketState) -> Result<Value, PricingError> + Send + Sync,
>;

/// Wraps a closure or function as a [`Handler`].
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&PricerAdapter, &dyn Trade, &MarketState) -> Result<Value, PricingError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// Thread-safe mapping from trade kind to handler.
///
/// Registration overwrites silently: the last handler registered for a kind
/// wins.
pub struct TradeRegistry {
    handlers: RwLock<HashMap<TradeKind, Handler>>,
}

impl TradeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry pre-populated with the built-in rates handlers.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        register_builtins(&registry);
        registry
    }

    /// The process-wide registry, built with the built-in handlers on first use.
    pub fn global() -> Arc<TradeRegistry> {
        static GLOBAL: OnceLock<Arc<TradeRegistry>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(TradeRegistry::with_builtins())))
    }

    /// Registers `handler` for `kind`, replacing any previous handler.
    ///
    /// Returns the handler unchanged so registration can wrap a definition.
    pub fn register(&self, kind: TradeKind, handler: Handler) -> Handler {
        let mut handlers = self.write();
        let replaced = handlers.insert(kind.clone(), Arc::clone(&handler)).is_some();
        if replaced {
            debug!(kind = %kind, "Replaced trade handler");
        } else {
            debug!(kind = %kind, "Registered trade handler");
        }
        handler
    }

    /// Finds the handler for `kind`, searching its lineage most specific first.
    ///
    /// Read-only: the registry is never modified by a lookup.
    pub fn resolve(&self, kind: &TradeKind) -> Option<Handler> {
        let handlers = self.read();
        std::iter::once(kind)
            .chain(kind.ancestors())
            .find_map(|candidate| {
                handlers.get(candidate).map(|found| {
                    trace!(kind = %kind, resolved = %candidate, "Resolved trade handler");
                    Arc::clone(found)
                })
            })
    }

    /// Whether a handler is registered for exactly this kind.
    pub fn contains(&self, kind: &TradeKind) -> bool {
        self.read().contains_key(kind)
    }

    /// Names of every directly registered kind, sorted.
    pub fn registered_kinds(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .read()
            .keys()
            .map(|kind| kind.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no kind is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic elsewhere never leaves the map half-written, so a poisoned
    // lock is safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TradeKind, Handler>> {
        self.handlers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TradeKind, Handler>> {
        self.handlers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TradeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TradeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TradeRegistry")
            .field("kinds", &self.registered_kinds())
            .finish()
    }
}
