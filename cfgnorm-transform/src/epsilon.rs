//! Epsilon elimination.
//!
//! Every occurrence of a nullable symbol is either kept or dropped, so an
//! alternative with `k` nullable occurrences expands into `2^k` alternatives.
//! The unchanged alternative comes first. The expansion where nothing is
//! left is dropped, and `ε` is added back where the `EpsilonPolicy` says so.

use log::{debug, trace, warn};

use cfgnorm_grammar::{Grammar, Production, Symbol, SymbolBitSet};

use crate::error::NormalizeError;
use crate::options::NormalizeOptions;

/// Returns an equivalent grammar without `ε` alternatives, except where the
/// `EpsilonPolicy` keeps them.
///
/// A nonterminal that ends up with no alternatives at all gets a lone `ε`.
pub fn eliminate_epsilon(
    grammar: &Grammar,
    nullable: &SymbolBitSet,
    options: &NormalizeOptions,
) -> Result<Grammar, NormalizeError> {
    let mut result = grammar.clone();
    for (lhs, prods) in grammar.rules() {
        let mut rewritten = vec![];
        for prod in prods.iter().filter(|prod| !prod.is_epsilon()) {
            expand_nullable(grammar, lhs, prod, nullable, options, &mut rewritten)?;
        }
        if nullable[lhs] && options.epsilon_policy.keeps_epsilon(grammar, lhs) {
            rewritten.push(Production::epsilon());
        }
        if rewritten.is_empty() {
            warn!(
                "`{}` derives only the empty string; keeping `{}` as its only alternative",
                grammar.name_of(lhs),
                cfgnorm_grammar::EPSILON
            );
            rewritten.push(Production::epsilon());
        }
        trace!(
            "EPSILON {} ::= {:?}",
            grammar.name_of(lhs),
            rewritten
                .iter()
                .map(|prod| grammar.stringify_production(prod))
                .collect::<Vec<_>>()
        );
        result.set_productions(lhs, rewritten);
    }
    debug!(
        "epsilon elimination: {} -> {} alternatives",
        grammar.num_productions(),
        result.num_productions()
    );
    Ok(result)
}

fn expand_nullable(
    grammar: &Grammar,
    lhs: Symbol,
    prod: &Production,
    nullable: &SymbolBitSet,
    options: &NormalizeOptions,
    dest: &mut Vec<Production>,
) -> Result<(), NormalizeError> {
    let positions: Vec<usize> = prod
        .symbols()
        .iter()
        .enumerate()
        .filter(|&(_, &sym)| nullable[sym])
        .map(|(i, _)| i)
        .collect();
    let k = positions.len();
    // The mask below has one bit per occurrence.
    let limit = options
        .max_nullable_occurrences
        .unwrap_or(usize::MAX)
        .min(usize::BITS as usize - 1);
    if k > limit {
        return Err(NormalizeError::CombinatorialLimitExceeded {
            nonterminal: grammar.name_of(lhs).to_string(),
            production: grammar.stringify_production(prod),
            nullable_occurrences: k,
            limit,
        });
    }
    if k > options.warn_nullable_occurrences {
        warn!(
            "`{} ::= {}` has {} nullable occurrences and expands into {} alternatives",
            grammar.name_of(lhs),
            grammar.stringify_production(prod),
            k,
            1usize << k
        );
    }

    // Bit `n` of the mask keeps the `n`th nullable occurrence.
    for mask in (0..1usize << k).rev() {
        let rhs: Vec<Symbol> = prod
            .symbols()
            .iter()
            .enumerate()
            .filter(|&(i, _)| match positions.binary_search(&i) {
                Ok(n) => mask & (1 << n) != 0,
                Err(_) => true,
            })
            .map(|(_, &sym)| sym)
            .collect();
        if !rhs.is_empty() {
            dest.push(Production::new(rhs));
        }
    }
    Ok(())
}
