//! This module defines productions. In a context-free grammar, each
//! production has a single nonterminal on its left-hand side and a non-empty
//! string of symbols on its right-hand side. An empty derivation is written
//! with a lone `epsilon` on the right.

use std::rc::Rc;

use crate::symbol::Symbol;

/// A grammar production, `lhs -> rhs`.
///
/// The left-hand side is a string of symbols so that grammars which are not
/// context-free can still be represented and rejected by
/// [`Grammar::is_context_free`].
///
/// [`Grammar::is_context_free`]: crate::Grammar::is_context_free
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Production {
    lhs: Rc<[Symbol]>,
    rhs: Rc<[Symbol]>,
}

impl Production {
    /// Creates a new production.
    ///
    /// Emptiness of either side is checked when the production is added to
    /// a grammar.
    pub fn new(lhs: impl AsRef<[Symbol]>, rhs: impl AsRef<[Symbol]>) -> Self {
        Production {
            lhs: lhs.as_ref().into(),
            rhs: rhs.as_ref().into(),
        }
    }

    /// Creates the production `lhs -> epsilon`.
    pub fn epsilon(lhs: Symbol) -> Self {
        Production::new([lhs], [Symbol::EPSILON])
    }

    /// Returns the production's left-hand side.
    pub fn lhs(&self) -> &[Symbol] {
        &self.lhs[..]
    }

    /// Returns the production's right-hand side.
    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs[..]
    }

    /// Returns the single left-hand side symbol, if there is exactly one.
    pub fn single_lhs(&self) -> Option<Symbol> {
        match self.lhs() {
            &[sym] => Some(sym),
            _ => None,
        }
    }

    /// Checks whether this is `lhs -> epsilon`.
    pub fn is_epsilon(&self) -> bool {
        self.rhs() == [Symbol::EPSILON]
    }
}
