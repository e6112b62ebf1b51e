//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::prediction::{PerSymbolSets, PredictSets};
use crate::symbol::Symbol;

/// FIRST sets of every symbol in a context-free grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstSets {
    map: PerSymbolSets,
    passes: usize,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// FIRST(t) = {t} for terminals and FIRST(epsilon) = {epsilon}. The end
    /// marker counts as a terminal once a right-hand side uses it.
    /// Nonterminal sets start out empty. Each pass recomputes every
    /// nonterminal's set from the previous pass's table, and we stop at the
    /// first pass that changes nothing.
    ///
    /// The grammar must be context-free. Productions with anything other
    /// than a single symbol on the left are not looked at.
    pub(crate) fn new(grammar: &Grammar) -> Self {
        let mut map = initial_sets(grammar);
        let mut passes = 0;
        loop {
            passes += 1;
            let next = first_pass(grammar, &map);
            let changed = next != map;
            trace!("FIRST pass {}: changed = {}", passes, changed);
            map = next;
            if !changed {
                break;
            }
        }
        debug!(
            "FIRST sets for {} symbols converged after {} passes",
            map.len(),
            passes
        );
        FirstSets { map, passes }
    }

    /// Returns a reference to FIRST sets.
    pub fn first_sets(&self) -> &PerSymbolSets {
        &self.map
    }

    /// Returns the FIRST set of a single symbol.
    pub fn first(&self, sym: Symbol) -> Option<&BTreeSet<Symbol>> {
        self.map.get(&sym)
    }

    /// Checks whether the symbol derives the empty string.
    pub fn is_nullable(&self, sym: Symbol) -> bool {
        self.first(sym)
            .map_or(false, |set| set.contains(&Symbol::EPSILON))
    }

    /// Calculates a FIRST set for a string of symbols.
    ///
    /// The empty string yields `{epsilon}`.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> BTreeSet<Symbol> {
        first_of_sequence(&self.map, string)
    }

    /// Returns the number of passes the computation took, including the
    /// last one, which changed nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl PredictSets for FirstSets {
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}

fn initial_sets(grammar: &Grammar) -> PerSymbolSets {
    let registry = grammar.registry();
    let mut map = BTreeMap::new();
    map.insert(Symbol::EPSILON, BTreeSet::from([Symbol::EPSILON]));
    // The end marker only gets a set when some production mentions it.
    let uses_end_marker = grammar
        .productions()
        .iter()
        .any(|production| production.rhs().contains(&Symbol::END_MARKER));
    if uses_end_marker {
        map.insert(Symbol::END_MARKER, BTreeSet::from([Symbol::END_MARKER]));
    }
    for terminal in registry.terminals() {
        map.insert(terminal, BTreeSet::from([terminal]));
    }
    for nonterminal in registry.nonterminals() {
        map.insert(nonterminal, BTreeSet::new());
    }
    map
}

/// Computes the next table. Sets only grow.
fn first_pass(grammar: &Grammar, prev: &PerSymbolSets) -> PerSymbolSets {
    let mut next = prev.clone();
    for nonterminal in grammar.registry().nonterminals() {
        let first_set = next.entry(nonterminal).or_default();
        for production in grammar.productions_for(nonterminal) {
            first_set.extend(first_of_sequence(prev, production.rhs()));
        }
    }
    next
}

/// FIRST of a string, looked up in `map` as it stands.
///
/// `epsilon` is in the result only if every symbol of the string is
/// nullable.
fn first_of_sequence(map: &PerSymbolSets, string: &[Symbol]) -> BTreeSet<Symbol> {
    let mut result = BTreeSet::new();
    for sym in string {
        let set = match map.get(sym) {
            Some(set) => set,
            // Unknown to the table, so it starts nothing.
            None => return result,
        };
        result.extend(set.iter().copied().filter(|sym| !sym.is_epsilon()));
        if !set.contains(&Symbol::EPSILON) {
            return result;
        }
    }
    result.insert(Symbol::EPSILON);
    result
}
