//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs.

pub mod registry;
mod repr;
pub mod set;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub use self::registry::SymbolRegistry;
pub use self::repr::{SymbolRepr, END_MARKER_ID, EPSILON_ID, FIRST_ID};
pub use self::set::SymbolBitSet;

/// Whether a symbol can be expanded.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub enum SymbolKind {
    /// Appears literally in derived strings.
    Terminal,
    /// Expands through productions.
    Nonterminal,
}

/// A grammar symbol.
///
/// Equality, ordering and hashing look only at the identity. Names are kept
/// by the [`SymbolRegistry`] that issued the symbol.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct Symbol {
    id: SymbolRepr,
    kind: SymbolKind,
}

impl Symbol {
    /// The empty derivation.
    pub const EPSILON: Symbol = Symbol {
        id: EPSILON_ID,
        kind: SymbolKind::Terminal,
    };

    /// The end of input. Reserved for lookahead computations.
    pub const END_MARKER: Symbol = Symbol {
        id: END_MARKER_ID,
        kind: SymbolKind::Terminal,
    };

    pub(crate) fn new(id: SymbolRepr, kind: SymbolKind) -> Self {
        Symbol { id, kind }
    }

    /// Returns the symbol's identity.
    #[inline]
    pub fn id(self) -> SymbolRepr {
        self.id
    }

    /// Returns the symbol's kind.
    #[inline]
    pub fn kind(self) -> SymbolKind {
        self.kind
    }

    /// Checks whether this is a terminal. The reserved symbols count as terminals.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self.kind == SymbolKind::Terminal
    }

    #[inline]
    pub fn is_nonterminal(self) -> bool {
        self.kind == SymbolKind::Nonterminal
    }

    #[inline]
    pub fn is_epsilon(self) -> bool {
        self.id == EPSILON_ID
    }

    /// Checks whether this is `epsilon` or the end marker.
    #[inline]
    pub fn is_reserved(self) -> bool {
        self.id <= EPSILON_ID
    }

    /// Cast the symbol's ID to `usize`, or `None` for the end marker.
    #[inline]
    pub fn usize(self) -> Option<usize> {
        usize::try_from(self.id).ok()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
