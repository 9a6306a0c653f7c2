use rustc_hash::FxHashMap;
use std::{fmt::Debug, hash::Hash};

/// Edge weights, tentative costs and heuristic estimates
pub type Cost = f64;

/// Bound satisfied by every searchable state.
///
/// States are opaque values compared by equality. `Ord` only breaks ties
/// between frontier entries of equal cost so runs are reproducible, and
/// `Debug` is used to name states in errors and logs.
pub trait State: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> State for T {}

/// Predecessor of every discovered state; the start state maps to `None`
pub type Predecessors<S> = FxHashMap<S, Option<S>>;
