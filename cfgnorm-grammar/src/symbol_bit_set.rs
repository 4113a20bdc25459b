//! Sets of symbols, such as the terminals of a grammar or its nullable
//! nonterminals.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::local_prelude::*;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Default)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Zip<bit_vec::Iter<'a>, cfgnorm_symbol::Generate>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Constructs an empty set with room for every symbol of the source.
    pub fn for_source(sym_source: &SymbolSource) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(sym_source.num_syms(), false),
        }
    }

    /// Adds or removes a symbol, growing the set as needed.
    pub fn set(&mut self, sym: Symbol, elem: bool) {
        let index = sym.usize();
        if index >= self.bit_vec.len() {
            if !elem {
                return;
            }
            self.bit_vec.grow(index + 1 - self.bit_vec.len(), false);
        }
        self.bit_vec.set(index, elem);
    }

    /// Adds a symbol. Returns `true` if it was not present.
    pub fn insert(&mut self, sym: Symbol) -> bool {
        let was_present = self.contains(sym);
        self.set(sym, true);
        !was_present
    }

    /// Checks whether the symbol is in the set.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().zip(SymbolSource::generate_fresh()),
        }
    }

    /// Returns the number of symbols in the set.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Checks whether the set has no symbols.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }

}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        for (is_present, sym) in &mut self.iter {
            if is_present {
                return Some(sym);
            }
        }
        None
    }
}

impl FromIterator<Symbol> for SymbolBitSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = SymbolBitSet::new();
        for sym in iter {
            set.set(sym, true);
        }
        set
    }
}

/// Sets are equal when they have the same members, regardless of capacity.
impl PartialEq for SymbolBitSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for SymbolBitSet {}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.contains(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}
