//! Source

use std::collections::HashMap;
use std::sync::Arc;

use crate::Symbol;

/// The name of a symbol, shared between the name list and the lookup map.
pub type SymbolName = Arc<str>;

/// A source of numeric symbols. Every symbol has a unique name.
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    names: Vec<SymbolName>,
    by_name: HashMap<SymbolName, Symbol>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol with the given name, generating a new one if the
    /// name was not seen before.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.by_name.get(name) {
            return sym;
        }
        self.push_name(name.into())
    }

    /// Generates a new unique symbol with the given name.
    ///
    /// Returns `None` if the name is already taken.
    pub fn next_sym(&mut self, name: &str) -> Option<Symbol> {
        if self.by_name.contains_key(name) {
            None
        } else {
            Some(self.push_name(name.into()))
        }
    }

    fn push_name(&mut self, name: SymbolName) -> Symbol {
        let sym = Symbol::from(self.names.len());
        self.by_name.insert(name.clone(), sym);
        self.names.push(name);
        sym
    }

    /// Looks up a symbol by name.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// Returns the name of the given symbol.
    ///
    /// # Panics
    ///
    /// Panics if the symbol was not generated by this source.
    pub fn name_of(&self, sym: Symbol) -> &str {
        &self.names[sym.usize()]
    }

    /// Returns the list of names, indexed by symbol ID.
    pub fn names(&self) -> &[SymbolName] {
        &self.names[..]
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Iterates over all symbols generated so far, in order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        Self::generate_fresh().take(self.num_syms())
    }

    /// Returns an endless iterator over symbols, starting with the first ID.
    /// The iterator is not tied to any source.
    pub fn generate_fresh() -> Generate {
        Generate { next: Some(Symbol::first()) }
    }
}

/// Iterator for generating symbols.
#[allow(missing_copy_implementations)]
#[derive(Clone, Debug)]
pub struct Generate {
    next: Option<Symbol>,
}

impl Iterator for Generate {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = Some(current.next());
        Some(current)
    }
}
