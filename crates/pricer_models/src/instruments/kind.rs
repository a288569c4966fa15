//! Trade kind identifiers and their ancestry.
//!
//! A [`TradeKind`] names a category of trade and declares its parent kinds
//! explicitly. The dispatcher never reflects on Rust types: it asks the kind
//! for its [`lineage`](TradeKind::lineage) and searches the registry in that
//! order.
//!
//! # Resolution order
//!
//! The lineage is a depth-first pre-order walk over the declared parents,
//! in declaration order. When a kind is reachable along several paths only
//! its last position is kept, so a shared ancestor is always searched after
//! every kind that derives from it. The ancestor list is built once, from
//! the parents' own lists, when the kind is constructed:
//!
//! ```text
//!        Swap                 lineage(CallableSwap) =
//!       /    \                  [CallableSwap, VanillaSwap, Callable, Swap]
//!  VanillaSwap  Callable
//!       \    /
//!     CallableSwap
//! ```
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::TradeKind;
//!
//! let swap = TradeKind::new("Swap");
//! let vanilla = TradeKind::with_parents("VanillaSwap", [swap.clone()]);
//! let callable = TradeKind::with_parents("Callable", [swap.clone()]);
//! let callable_swap = TradeKind::with_parents("CallableSwap", [vanilla, callable]);
//!
//! let names: Vec<_> = callable_swap.lineage().iter().map(|k| k.name().to_string()).collect();
//! assert_eq!(names, ["CallableSwap", "VanillaSwap", "Callable", "Swap"]);
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Identifier for a category of trade, with its declared parent kinds.
///
/// Cheap to clone. Equality and hashing use the name only: two kinds with
/// the same name are the same registry key.
#[derive(Clone)]
pub struct TradeKind(Arc<KindInner>);

struct KindInner {
    name: Cow<'static, str>,
    parents: Vec<TradeKind>,
    /// Every ancestor once, in resolution order. Excludes the kind itself.
    ancestors: Vec<TradeKind>,
}

impl TradeKind {
    /// Creates a root kind with no ancestors.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_parents(name, std::iter::empty())
    }

    /// Creates a kind deriving from `parents`, listed most significant first.
    pub fn with_parents(
        name: impl Into<Cow<'static, str>>,
        parents: impl IntoIterator<Item = TradeKind>,
    ) -> Self {
        let parents: Vec<TradeKind> = parents.into_iter().collect();
        let ancestors = merge_ancestors(&parents);
        TradeKind(Arc::new(KindInner {
            name: name.into(),
            parents,
            ancestors,
        }))
    }

    /// Kind name, used in registry keys and error messages.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Directly declared parents, in declaration order.
    pub fn parents(&self) -> &[TradeKind] {
        &self.0.parents
    }

    /// Every ancestor once, most specific first. Excludes this kind.
    pub fn ancestors(&self) -> &[TradeKind] {
        &self.0.ancestors
    }

    /// The resolution chain: this kind first, then every ancestor once.
    ///
    /// Every kind in the chain precedes all of its own ancestors.
    pub fn lineage(&self) -> Vec<TradeKind> {
        std::iter::once(self)
            .chain(self.ancestors())
            .cloned()
            .collect()
    }
}

/// Concatenates each parent's lineage and keeps the last occurrence of
/// every kind.
fn merge_ancestors(parents: &[TradeKind]) -> Vec<TradeKind> {
    let walk: Vec<&TradeKind> = parents
        .iter()
        .flat_map(|parent| std::iter::once(parent).chain(parent.ancestors()))
        .collect();

    let mut seen: HashSet<&str> = HashSet::with_capacity(walk.len());
    let mut ancestors = Vec::with_capacity(walk.len());
    for kind in walk.into_iter().rev() {
        if seen.insert(kind.name()) {
            ancestors.push(kind.clone());
        }
    }
    ancestors.reverse();
    ancestors
}

impl PartialEq for TradeKind {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for TradeKind {}

impl Hash for TradeKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parents: Vec<&str> = self.parents().iter().map(TradeKind::name).collect();
        f.debug_struct("TradeKind")
            .field("name", &self.name())
            .field("parents", &parents)
            .finish()
    }
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
