//! Registry of names in use during one rewrite of a grammar.
//!
//! Rewrites that synthesize nonterminals ask the registry for a name derived
//! from a base, such as `A'` or `A_fact_x`. The registry is seeded with every
//! name of a symbol source and remembers every name it hands out, so two
//! requests never yield the same name.

use std::collections::HashSet;

use log::trace;

use crate::SymbolSource;

/// Run-scoped set of names in use.
#[derive(Clone, Debug, Default)]
pub struct FreshNames {
    in_use: HashSet<String>,
}

impl FreshNames {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that knows every name of the given source.
    pub fn from_source(sym_source: &SymbolSource) -> Self {
        let mut fresh = Self::new();
        fresh.reserve_all(sym_source);
        fresh
    }

    /// Marks every name of the given source as taken.
    pub fn reserve_all(&mut self, sym_source: &SymbolSource) {
        self.in_use
            .extend(sym_source.names().iter().map(|name| name.to_string()));
    }

    /// Marks a name as taken. Returns `false` if it already was.
    pub fn reserve(&mut self, name: &str) -> bool {
        self.in_use.insert(name.to_string())
    }

    /// Checks whether the name is taken.
    pub fn is_taken(&self, name: &str) -> bool {
        self.in_use.contains(name)
    }

    /// Returns a name not taken so far and marks it as taken.
    ///
    /// The base itself is returned when it is free. Otherwise, the first free
    /// name among `base2`, `base3`, ... is returned.
    pub fn fresh_name(&mut self, base: &str) -> String {
        if self.reserve(base) {
            return base.to_string();
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{}{}", base, n);
            if self.reserve(&candidate) {
                trace!("FRESH {:?} taken, using {:?}", base, candidate);
                return candidate;
            }
            n += 1;
        }
    }

    /// Returns the number of names in use.
    pub fn len(&self) -> usize {
        self.in_use.len()
    }

    /// Checks whether no name is in use.
    pub fn is_empty(&self) -> bool {
        self.in_use.is_empty()
    }
}
