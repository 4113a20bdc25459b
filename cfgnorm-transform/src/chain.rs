//! Chain-rule elimination.
//!
//! An alternative consisting of a single nonterminal, `A ::= B`, is a chain
//! rule. Each nonterminal receives the non-chain alternatives of every
//! nonterminal it reaches through chain rules, itself included.

use std::iter;

use bit_matrix::BitMatrix;
use log::{debug, trace};

use cfgnorm_grammar::{Grammar, Production, Symbol};

use crate::error::NormalizeError;

/// Returns the target of a chain rule, or `None` for any other alternative.
pub fn chain_target(grammar: &Grammar, prod: &Production) -> Option<Symbol> {
    prod.single().filter(|&sym| grammar.is_nonterminal(sym))
}

/// Returns the reflexive transitive closure of the chain rule relation.
///
/// Entry `(A, B)` is set when `A` derives `B` through zero or more chain
/// rules. Cycles are fine: the closure of a relation over a finite set of
/// symbols is reached in a bounded number of steps.
pub fn chain_closure(grammar: &Grammar) -> BitMatrix {
    let num_syms = grammar.num_syms();
    let mut closure = BitMatrix::new(num_syms, num_syms);

    for (lhs, prods) in grammar.rules() {
        for prod in prods {
            if let Some(target) = chain_target(grammar, prod) {
                closure.set(lhs.usize(), target.usize(), true);
            }
        }
    }

    closure.transitive_closure();
    closure.reflexive_closure();
    closure
}

/// Returns an equivalent grammar without chain rules.
///
/// Fails with `NormalizeError::DeadNonterminal` if a nonterminal reaches only
/// nonterminals that have nothing but chain rules.
pub fn eliminate_chain_rules(grammar: &Grammar) -> Result<Grammar, NormalizeError> {
    let closure = chain_closure(grammar);
    let mut result = grammar.clone();

    for lhs in grammar.nonterminals() {
        let reachable: Vec<Symbol> = iter::once(lhs)
            .chain(
                grammar
                    .nonterminals()
                    .filter(|&other| other != lhs && closure[(lhs.usize(), other.usize())]),
            )
            .collect();
        let prods: Vec<Production> = reachable
            .iter()
            .flat_map(|&sym| grammar.productions(sym))
            .filter(|prod| chain_target(grammar, prod).is_none())
            .cloned()
            .collect();
        if prods.is_empty() {
            return Err(NormalizeError::DeadNonterminal {
                nonterminal: grammar.name_of(lhs).to_string(),
                closure: reachable
                    .iter()
                    .map(|&sym| grammar.name_of(sym).to_string())
                    .collect(),
            });
        }
        if reachable.len() > 1 {
            trace!(
                "CHAIN {} inlines {:?}",
                grammar.name_of(lhs),
                reachable[1..]
                    .iter()
                    .map(|&sym| grammar.name_of(sym))
                    .collect::<Vec<_>>()
            );
        }
        result.set_productions(lhs, prods);
    }
    debug!(
        "chain rule elimination: {} -> {} alternatives",
        grammar.num_productions(),
        result.num_productions()
    );
    Ok(result)
}
