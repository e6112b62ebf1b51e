//! Library for modelling context-free grammars and computing FIRST sets, the
//! basis of predictive LL(1) parser construction.
//!
//! ```
//! use cfg_first::build_grammar;
//!
//! let grammar = build_grammar(["A"], ["a", "b"], ["A -> A a", "A -> b"], "A").unwrap();
//! let analysis = grammar.analyze_ll1().unwrap();
//! let b = grammar.registry().recognize("b").unwrap();
//! assert_eq!(analysis.first_set(grammar.start_sym()).unwrap().len(), 1);
//! assert!(analysis.first_set(grammar.start_sym()).unwrap().contains(&b));
//! ```

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]
#![cfg_attr(test, allow(missing_docs))]

mod analysis;
pub mod error;
mod grammar;
pub mod prediction;
pub mod rule;
pub mod symbol;

pub use crate::analysis::Ll1Analysis;
pub use crate::error::{
    ConstructionError, GrammarError, NameNotFound, ValidationError, ValidationErrorKind,
};
pub use crate::grammar::{parse_production, Built, Grammar, GrammarType, PRODUCTION_SEPARATOR};
pub use crate::prediction::{FirstSets, PerSymbolSets, PredictSets};
pub use crate::rule::Production;
pub use crate::symbol::{Symbol, SymbolKind, SymbolRegistry};

/// Builds a grammar from nonterminal names, terminal names, production rule
/// texts and the name of the start symbol.
///
/// See [`Grammar::from_spec`].
pub fn build_grammar<N, T, R>(
    nonterminals: N,
    terminals: T,
    rules: R,
    start: &str,
) -> Result<Grammar, GrammarError>
where
    N: IntoIterator,
    N::Item: AsRef<str>,
    T: IntoIterator,
    T::Item: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    Grammar::from_spec(nonterminals, terminals, rules, start)
}
