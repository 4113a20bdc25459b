//! Properties that propagate from right-hand sides to left-hand sides, most
//! importantly nullability.

use log::debug;

use crate::local_prelude::*;
use crate::occurence_map::OccurenceMap;

impl Grammar {
    /// Returns the set of nonterminals that have an `ε` alternative.
    pub fn nulling_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::for_source(self.sym_source());
        for (lhs, prods) in self.rules() {
            if prods.iter().any(|prod| prod.is_epsilon()) {
                set.set(lhs, true);
            }
        }
        set
    }

    /// Returns the set of nonterminals that derive the empty string.
    ///
    /// Starts from the nulling symbols. A nonterminal joins the set when one
    /// of its alternatives consists of symbols in the set only. Stops when
    /// nothing joins anymore; the set only grows, so this terminates after at
    /// most one round per nonterminal.
    pub fn nullable_symbols(&self) -> SymbolBitSet {
        let mut nullable = self.nulling_symbols();
        self.rhs_closure_for_all(&mut nullable);
        debug!(
            "NULLABLE {:?}",
            nullable.iter().map(|sym| self.name_of(sym)).collect::<Vec<_>>()
        );
        nullable
    }

    /// If **all** symbols on the RHS of some alternative have the property,
    /// the LHS has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    pub fn rhs_closure_for_all(&self, property: &mut SymbolBitSet) {
        let occurence_map = OccurenceMap::from_grammar(self);
        let mut work_stack: Vec<Symbol> = property.iter().collect();

        while let Some(work_sym) = work_stack.pop() {
            for &(lhs, i) in occurence_map.rhs(work_sym) {
                if property[lhs] {
                    continue;
                }
                let prod = &self.productions(lhs)[i];
                if prod.symbols().iter().all(|&sym| property[sym]) {
                    property.set(lhs, true);
                    work_stack.push(lhs);
                }
            }
        }
    }
}
