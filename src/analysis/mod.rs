//! LL(1) analysis of context-free grammars.

use std::collections::BTreeSet;

use crate::grammar::{Built, Grammar, GrammarType};
use crate::prediction::{FirstSets, PerSymbolSets};
use crate::symbol::Symbol;

/// A context-free grammar together with its FIRST sets.
///
/// FIRST sets are computed once, when the analysis is created. The analysis
/// shares its registry and productions with the grammar it was built from.
#[derive(Clone, Debug)]
pub struct Ll1Analysis {
    grammar: Grammar,
    first: FirstSets,
}

impl Ll1Analysis {
    /// The caller checks that the grammar is context-free.
    pub(crate) fn new(grammar: &Grammar) -> Self {
        let grammar = Grammar::from_existing(grammar);
        let first = FirstSets::new(&grammar);
        Ll1Analysis { grammar, first }
    }

    /// Returns a plain grammar when `grammar_type` is `None`, or this
    /// analysis again for [`GrammarType::Ll1`].
    pub fn build(&self, grammar_type: Option<GrammarType>) -> Built {
        match grammar_type {
            None => Built::Grammar(Grammar::from_existing(&self.grammar)),
            Some(GrammarType::Ll1) => Built::Ll1(self.clone()),
        }
    }

    /// Returns the analyzed grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Returns the FIRST set of every symbol: terminals, nonterminals and
    /// `epsilon`.
    pub fn first_sets(&self) -> &PerSymbolSets {
        self.first.first_sets()
    }

    /// Returns the FIRST set of one symbol.
    pub fn first_set(&self, sym: Symbol) -> Option<&BTreeSet<Symbol>> {
        self.first.first(sym)
    }

    /// Calculates a FIRST set for a string of symbols.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> BTreeSet<Symbol> {
        self.first.first_set_for_string(string)
    }

    /// Returns the underlying FIRST set collector.
    pub fn first(&self) -> &FirstSets {
        &self.first
    }
}
