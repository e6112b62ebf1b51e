//! Registry of named symbols.
//!
//! The registry is the single owner of symbol names. Everything else in the
//! crate holds plain [`Symbol`] values and asks the registry for names.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::error::NameNotFound;
use crate::symbol::repr::{SymbolRepr, FIRST_ID};
use crate::symbol::{Symbol, SymbolBitSet, SymbolKind};

/// The name that [`SymbolRegistry::recognize`] maps to [`Symbol::EPSILON`].
pub const EPSILON_NAME: &str = "epsilon";
/// The name of [`Symbol::END_MARKER`].
pub const END_MARKER_NAME: &str = "dollar";

/// Allocates symbol identities and remembers their names.
///
/// Nonterminal and terminal names live in separate namespaces. Keeping
/// them disjoint is up to the caller; on overlap, [`recognize`] prefers
/// the nonterminal.
///
/// [`recognize`]: SymbolRegistry::recognize
#[derive(Clone, Debug)]
pub struct SymbolRegistry {
    next_id: SymbolRepr,
    /// Names indexed by `id - FIRST_ID`.
    names: Vec<String>,
    nonterminals: BTreeMap<String, Symbol>,
    terminals: BTreeMap<String, Symbol>,
    terminal_set: SymbolBitSet,
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolRegistry {
    /// Creates a registry with an empty symbol space.
    pub fn new() -> Self {
        SymbolRegistry {
            next_id: FIRST_ID,
            names: vec![],
            nonterminals: BTreeMap::new(),
            terminals: BTreeMap::new(),
            terminal_set: SymbolBitSet::new(),
        }
    }

    /// Creates a registry holding the given nonterminal and terminal names.
    ///
    /// Each collection is sorted and deduplicated first. Nonterminals are
    /// allocated before terminals, so the same names always receive the
    /// same identities.
    pub fn from_names<N, T>(nonterminals: N, terminals: T) -> Self
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let nonterminals: BTreeSet<String> = nonterminals
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        let terminals: BTreeSet<String> = terminals
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();

        let mut registry = SymbolRegistry::new();
        for name in nonterminals {
            registry.allocate(name, SymbolKind::Nonterminal);
        }
        for name in terminals {
            registry.allocate(name, SymbolKind::Terminal);
        }
        registry
    }

    /// Issues the next unused identity for `name` in the namespace of `kind`.
    ///
    /// A name that is already registered under the same kind keeps its
    /// symbol.
    pub fn allocate(&mut self, name: impl Into<String>, kind: SymbolKind) -> Symbol {
        let name = name.into();
        let namespace = match kind {
            SymbolKind::Nonterminal => &self.nonterminals,
            SymbolKind::Terminal => &self.terminals,
        };
        if let Some(&sym) = namespace.get(&name) {
            return sym;
        }

        let sym = Symbol::new(self.next_id, kind);
        self.next_id = self.next_id.saturating_add(1);
        debug_assert_ne!(self.next_id, SymbolRepr::MAX, "ran out of Symbol space?");
        trace!("allocate {:?} as {:?}", name, sym);

        if kind == SymbolKind::Terminal {
            self.terminal_set.set(sym, true);
            self.terminals.insert(name.clone(), sym);
        } else {
            self.nonterminals.insert(name.clone(), sym);
        }
        self.names.push(name);
        sym
    }

    /// Resolves a name.
    ///
    /// `epsilon` always resolves to [`Symbol::EPSILON`]. Other names are
    /// looked up among nonterminals, then among terminals.
    pub fn recognize(&self, name: &str) -> Result<Symbol, NameNotFound> {
        if name == EPSILON_NAME {
            return Ok(Symbol::EPSILON);
        }
        self.nonterminals
            .get(name)
            .or_else(|| self.terminals.get(name))
            .copied()
            .ok_or_else(|| NameNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the name of a symbol issued by this registry, or of a
    /// reserved symbol.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        if sym == Symbol::EPSILON {
            Some(EPSILON_NAME)
        } else if sym == Symbol::END_MARKER {
            Some(END_MARKER_NAME)
        } else if self.contains(sym) {
            self.names
                .get((sym.id() - FIRST_ID) as usize)
                .map(|name| &name[..])
        } else {
            None
        }
    }

    /// Checks whether the symbol is reserved, or was issued by this
    /// registry with the same kind.
    pub fn contains(&self, sym: Symbol) -> bool {
        if sym.is_reserved() {
            return true;
        }
        sym.id() < self.next_id && self.terminal_set.has_sym(sym) == sym.is_terminal()
    }

    /// Checks whether the symbol is a terminal issued by this registry.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        !sym.is_reserved() && sym.is_terminal() && self.contains(sym)
    }

    /// Checks whether the symbol is a nonterminal issued by this registry.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        sym.is_nonterminal() && self.contains(sym)
    }

    /// Iterates over nonterminals in allocation order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        (FIRST_ID..self.next_id)
            .map(|id| Symbol::new(id, SymbolKind::Nonterminal))
            .filter(move |&sym| !self.terminal_set.has_sym(sym))
    }

    /// Iterates over terminals in allocation order. The reserved symbols
    /// are not included.
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.terminal_set.iter(SymbolKind::Terminal)
    }

    /// Returns the number of allocated symbols, not counting the reserved
    /// ones.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }
}
