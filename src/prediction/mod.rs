//! Prediction for predictive parsers.

mod first;

use std::collections::{BTreeMap, BTreeSet};

use crate::symbol::Symbol;

pub use self::first::FirstSets;

/// The representation of FIRST sets. `epsilon` marks an empty derivation.
pub type PerSymbolSets = BTreeMap<Symbol, BTreeSet<Symbol>>;

/// Access to a table of per-symbol sets.
pub trait PredictSets {
    /// Returns a reference to the sets.
    fn predict_sets(&self) -> &PerSymbolSets;
}
