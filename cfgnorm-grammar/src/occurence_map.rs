use std::collections::BTreeMap;

use crate::local_prelude::*;

/// Identifies an alternative by its left-hand side and position.
pub(crate) type ProductionIndex = (Symbol, usize);

/// Maps each symbol to the alternatives mentioning it on their right-hand side.
pub(crate) struct OccurenceMap {
    occurences: BTreeMap<Symbol, Vec<ProductionIndex>>,
}

impl OccurenceMap {
    pub(crate) fn from_grammar(grammar: &Grammar) -> Self {
        let mut occurences = BTreeMap::new();
        for (lhs, prods) in grammar.rules() {
            for (i, prod) in prods.iter().enumerate() {
                let mut rhs_syms = prod.symbols().to_vec();
                rhs_syms.sort();
                rhs_syms.dedup();
                for rhs_sym in rhs_syms {
                    occurences
                        .entry(rhs_sym)
                        .or_insert_with(Vec::new)
                        .push((lhs, i));
                }
            }
        }
        OccurenceMap { occurences }
    }

    pub(crate) fn rhs(&self, sym: Symbol) -> &[ProductionIndex] {
        self.occurences
            .get(&sym)
            .map(|occurences| &occurences[..])
            .unwrap_or(&[])
    }
}
