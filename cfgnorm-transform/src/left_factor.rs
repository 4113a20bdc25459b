//! Left factoring, one grouping pass.
//!
//! Alternatives of a nonterminal that share a leading symbol are replaced by
//! that symbol followed by a new nonterminal, which derives the rest of each
//! alternative. Alternatives of the new nonterminal are not factored again,
//! so shared prefixes longer than one symbol need another pass.

use log::{debug, trace};

use cfgnorm_grammar::{Grammar, Production, Symbol};
use cfgnorm_symbol::FreshNames;

use crate::error::NormalizeError;

/// Returns the base name of the nonterminal factored out of `lhs` for
/// alternatives starting with `first`, before registry disambiguation.
pub fn factored_name(grammar: &Grammar, lhs: Symbol, first: Symbol) -> String {
    let sanitized: String = grammar
        .name_of(first)
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect();
    let suffix = if sanitized.is_empty() {
        "sym"
    } else {
        &sanitized[..]
    };
    format!("{}_fact_{}", grammar.name_of(lhs), suffix)
}

/// Returns a grammar where no nonterminal has two alternatives with the same
/// leading symbol. `ε` alternatives are never grouped. New nonterminals get
/// names from `fresh`.
pub fn left_factor(grammar: &Grammar, fresh: &mut FreshNames) -> Result<Grammar, NormalizeError> {
    fresh.reserve_all(grammar.sym_source());
    let mut result = grammar.clone();
    let mut num_factored = 0;

    for (lhs, prods) in grammar.rules() {
        if prods.len() <= 1 {
            continue;
        }
        let groups = group_by_first(prods);
        if groups.iter().all(|(_, members)| members.len() == 1) {
            continue;
        }

        let mut rewritten = Vec::with_capacity(groups.len());
        let mut done: Vec<Symbol> = vec![];
        for prod in prods {
            let first = match prod.first() {
                Some(first) => first,
                None => {
                    rewritten.push(prod.clone());
                    continue;
                }
            };
            let members = groups
                .iter()
                .find(|(sym, _)| *sym == first)
                .map(|(_, members)| &members[..])
                .unwrap_or(&[]);
            if members.len() <= 1 {
                rewritten.push(prod.clone());
            } else if !done.contains(&first) {
                let name = fresh.fresh_name(&factored_name(grammar, lhs, first));
                let factored = result.add_nonterminal(&name)?;
                trace!(
                    "LEFT FACTOR {} on {} into {}",
                    grammar.name_of(lhs),
                    grammar.name_of(first),
                    name
                );
                result.set_productions(factored, members.iter().map(|prod| prod.tail()));
                rewritten.push(Production::new([first, factored]));
                done.push(first);
                num_factored += 1;
            }
        }
        result.set_productions(lhs, rewritten);
    }
    debug!("left factoring: {} groups factored", num_factored);
    Ok(result)
}

/// Groups alternatives by leading symbol, in order of first appearance.
fn group_by_first(prods: &[Production]) -> Vec<(Symbol, Vec<&Production>)> {
    let mut groups: Vec<(Symbol, Vec<&Production>)> = vec![];
    for prod in prods {
        if let Some(first) = prod.first() {
            match groups.iter_mut().find(|(sym, _)| *sym == first) {
                Some((_, members)) => members.push(prod),
                None => groups.push((first, vec![prod])),
            }
        }
    }
    groups
}
