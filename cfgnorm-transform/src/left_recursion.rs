//! Direct left-recursion elimination.
//!
//! ```text
//! A ::= A α1 | … | A αn | β1 | … | βm
//! ```
//!
//! becomes
//!
//! ```text
//! A  ::= β1 A' | … | βm A'
//! A' ::= α1 A' | … | αn A' | ε
//! ```
//!
//! Only alternatives that start with their own left-hand side are
//! considered. Left recursion through other nonterminals, such as
//! `A ::= B x` with `B ::= A y`, is left as it is.

use log::{debug, trace};

use cfgnorm_grammar::{Grammar, Production};
use cfgnorm_symbol::FreshNames;

use crate::error::NormalizeError;

/// Returns an equivalent grammar without direct left recursion. Tail
/// nonterminals get names from `fresh`.
pub fn eliminate_left_recursion(
    grammar: &Grammar,
    fresh: &mut FreshNames,
) -> Result<Grammar, NormalizeError> {
    fresh.reserve_all(grammar.sym_source());
    let mut result = grammar.clone();
    let mut num_split = 0;

    for (lhs, prods) in grammar.rules() {
        let (recursive, base): (Vec<&Production>, Vec<&Production>) =
            prods.iter().partition(|prod| prod.first() == Some(lhs));
        if recursive.is_empty() {
            continue;
        }
        if base.is_empty() {
            // Every derivation from `A` starts with `A` again.
            return Err(NormalizeError::DeadNonterminal {
                nonterminal: grammar.name_of(lhs).to_string(),
                closure: vec![grammar.name_of(lhs).to_string()],
            });
        }
        // `A ::= A` adds nothing to the language.
        let tails: Vec<Production> = recursive
            .iter()
            .map(|prod| prod.tail())
            .filter(|tail| !tail.is_epsilon())
            .collect();
        if tails.is_empty() {
            result.set_productions(lhs, base.into_iter().cloned());
            continue;
        }

        let name = fresh.fresh_name(&format!("{}'", grammar.name_of(lhs)));
        let tail_sym = result.add_nonterminal(&name)?;
        trace!(
            "LEFT RECURSION {} split off {} with {} tails",
            grammar.name_of(lhs),
            name,
            tails.len()
        );
        result.set_productions(lhs, base.iter().map(|prod| prod.appended(tail_sym)));
        result.set_productions(
            tail_sym,
            tails
                .iter()
                .map(|tail| tail.appended(tail_sym))
                .chain(Some(Production::epsilon())),
        );
        num_split += 1;
    }
    debug!("left recursion elimination: split {} nonterminals", num_split);
    Ok(result)
}
