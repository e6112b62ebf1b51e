//! Informs whether symbols are terminal or nonterminal.

use std::iter;

use bit_vec::BitVec;

use crate::symbol::{Symbol, SymbolKind, SymbolRepr};

/// A set of symbols in the form of a bit vector, indexed by identity.
///
/// Only symbols with non-negative identities can be members. The end
/// marker is never in the set.
#[derive(Clone, Debug, Default)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
    kind: SymbolKind,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Set the entry for a symbol, growing the set as needed.
    ///
    /// Setting the end marker has no effect.
    pub fn set(&mut self, sym: Symbol, value: bool) {
        if let Some(index) = sym.usize() {
            if index >= self.bit_vec.len() {
                let missing = index + 1 - self.bit_vec.len();
                self.bit_vec.grow(missing, false);
            }
            self.bit_vec.set(index, value);
        }
    }

    /// Checks whether a given symbol is in this set.
    pub fn has_sym(&self, sym: Symbol) -> bool {
        sym.usize()
            .and_then(|index| self.bit_vec.get(index))
            .unwrap_or(false)
    }

    /// Iterates over symbols in the set, all reported with the given kind.
    pub fn iter(&self, kind: SymbolKind) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
            kind,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::new(id as SymbolRepr, self.kind));
            }
        }
        None
    }
}
