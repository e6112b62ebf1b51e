//! Definitions of the grammar type and its construction.

use std::collections::BTreeSet;
use std::rc::Rc;

use log::debug;

use crate::analysis::Ll1Analysis;
use crate::error::{ConstructionError, GrammarError, ValidationError, ValidationErrorKind};
use crate::rule::Production;
use crate::symbol::{Symbol, SymbolRegistry};

/// The token that separates the two sides of a production rule text.
pub const PRODUCTION_SEPARATOR: &str = "->";

/// Grammar type.
///
/// A grammar is immutable once built. Its registry and production list are
/// shared through reference counting, so [`Grammar::from_existing`] and
/// `clone` alias the same storage instead of copying it.
#[derive(Clone, Debug)]
pub struct Grammar {
    /// The symbol registry.
    registry: Rc<SymbolRegistry>,
    /// The array of productions.
    productions: Rc<[Production]>,
    /// Start symbol.
    start: Symbol,
}

/// The kind of analysis requested from [`Grammar::build`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GrammarType {
    /// Predictive LL(1) analysis. Computes FIRST sets.
    Ll1,
}

/// The result of [`Grammar::build`].
#[derive(Clone, Debug)]
pub enum Built {
    /// No analysis was requested.
    Grammar(Grammar),
    /// LL(1) analysis of a context-free grammar.
    Ll1(Ll1Analysis),
}

impl Grammar {
    /// Creates a grammar that shares the registry, productions and start
    /// symbol of `other`. Nothing is copied.
    pub fn from_existing(other: &Grammar) -> Self {
        Grammar {
            registry: Rc::clone(&other.registry),
            productions: Rc::clone(&other.productions),
            start: other.start,
        }
    }

    /// Creates a grammar from pre-built parts.
    ///
    /// Every production must have non-empty sides made of symbols from
    /// `registry`. The start symbol must be one of the registry's
    /// nonterminals.
    pub fn from_parts(
        registry: SymbolRegistry,
        productions: Vec<Production>,
        start: Symbol,
    ) -> Result<Self, GrammarError> {
        for (index, production) in productions.iter().enumerate() {
            if production.lhs().is_empty() {
                return Err(ConstructionError::EmptyLhs { production: index }.into());
            }
            if production.rhs().is_empty() {
                return Err(ConstructionError::EmptyRhs { production: index }.into());
            }
            let foreign = production
                .lhs()
                .iter()
                .chain(production.rhs())
                .find(|&&sym| !registry.contains(sym));
            if let Some(sym) = foreign {
                return Err(ConstructionError::ForeignSymbol {
                    production: index,
                    id: sym.id(),
                }
                .into());
            }
        }
        Self::check_start(&registry, start)?;

        debug!(
            "grammar with {} symbols and {} productions",
            registry.num_syms(),
            productions.len()
        );
        Ok(Grammar {
            registry: Rc::new(registry),
            productions: productions.into(),
            start,
        })
    }

    /// Creates a grammar from names and production rule texts.
    ///
    /// Rule texts have the form `A -> b C d`. Rules are parsed in lexical
    /// order, which fixes the order of the production list. Identical rule
    /// texts give a single production.
    pub fn from_spec<N, T, R>(
        nonterminals: N,
        terminals: T,
        rules: R,
        start: &str,
    ) -> Result<Self, GrammarError>
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let registry = SymbolRegistry::from_names(nonterminals, terminals);
        let rules: BTreeSet<String> = rules
            .into_iter()
            .map(|rule| rule.as_ref().to_string())
            .collect();
        let productions = rules
            .iter()
            .map(|rule| parse_production(&registry, rule))
            .collect::<Result<Vec<_>, _>>()?;
        let start = registry.recognize(start)?;
        Self::from_parts(registry, productions, start)
    }

    fn check_start(registry: &SymbolRegistry, start: Symbol) -> Result<(), ConstructionError> {
        if !registry.contains(start) {
            Err(ConstructionError::ForeignStart { id: start.id() })
        } else if !registry.is_nonterminal(start) {
            Err(ConstructionError::StartNotNonterminal { id: start.id() })
        } else {
            Ok(())
        }
    }

    /// Parses a production rule text against this grammar's registry.
    pub fn parse_production(&self, text: &str) -> Result<Production, GrammarError> {
        parse_production(&self.registry, text)
    }

    /// Checks whether every production has exactly one nonterminal on its
    /// left-hand side.
    pub fn is_context_free(&self) -> bool {
        self.productions.iter().all(|production| {
            production
                .single_lhs()
                .map_or(false, |lhs| self.registry.is_nonterminal(lhs))
        })
    }

    /// Returns the grammar itself when `grammar_type` is `None`, or runs the
    /// requested analysis.
    pub fn build(&self, grammar_type: Option<GrammarType>) -> Result<Built, GrammarError> {
        match grammar_type {
            None => Ok(Built::Grammar(self.clone())),
            Some(GrammarType::Ll1) => self.analyze_ll1().map(Built::Ll1),
        }
    }

    /// Computes FIRST sets for LL(1) analysis.
    ///
    /// Fails with [`GrammarError::NotContextFree`] unless
    /// [`is_context_free`](Self::is_context_free) holds.
    pub fn analyze_ll1(&self) -> Result<Ll1Analysis, GrammarError> {
        if !self.is_context_free() {
            return Err(GrammarError::NotContextFree);
        }
        Ok(Ll1Analysis::new(self))
    }

    /// Returns the symbol registry.
    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// Returns all productions.
    pub fn productions(&self) -> &[Production] {
        &self.productions[..]
    }

    /// Iterates over productions whose left-hand side is exactly `lhs`.
    pub fn productions_for(&self, lhs: Symbol) -> impl Iterator<Item = &Production> + '_ {
        self.productions
            .iter()
            .filter(move |production| production.single_lhs() == Some(lhs))
    }

    /// Returns the start symbol.
    pub fn start_sym(&self) -> Symbol {
        self.start
    }

    /// Checks whether both grammars alias the same registry and productions.
    pub fn shares_storage(&self, other: &Grammar) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
            && Rc::ptr_eq(&self.productions, &other.productions)
    }
}

/// Parses a production rule text such as `A -> b C d`.
///
/// The text must contain exactly one `->`. Both sides are split on
/// whitespace and every token is resolved through `registry`.
pub fn parse_production(registry: &SymbolRegistry, text: &str) -> Result<Production, GrammarError> {
    let invalid = |kind| ValidationError {
        rule: text.to_string(),
        kind,
    };
    let mut parts = text.split(PRODUCTION_SEPARATOR);
    let (lhs, rhs) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lhs), Some(rhs), None) => (lhs, rhs),
        (_, _, Some(_)) => return Err(invalid(ValidationErrorKind::RepeatedSeparator).into()),
        _ => return Err(invalid(ValidationErrorKind::MissingSeparator).into()),
    };
    let resolve = |side: &str| {
        side.split_whitespace()
            .map(|token| {
                registry
                    .recognize(token)
                    .map_err(|err| invalid(ValidationErrorKind::UnknownName(err)))
            })
            .collect::<Result<Vec<Symbol>, _>>()
    };
    let lhs = resolve(lhs)?;
    let rhs = resolve(rhs)?;
    if lhs.is_empty() {
        return Err(invalid(ValidationErrorKind::EmptyLhs).into());
    }
    if rhs.is_empty() {
        return Err(invalid(ValidationErrorKind::EmptyRhs).into());
    }
    Ok(Production::new(lhs, rhs))
}
