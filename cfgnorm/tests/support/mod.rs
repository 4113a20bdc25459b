#![allow(dead_code)]

use cfgnorm::load::GrammarLoadExt;
use cfgnorm::{Grammar, GrammarBuilder, Symbol};

pub const EXPRESSION_TERMINALS: [&str; 9] = ["RO", "A", "MUL", "ID", "NUM", "BOOL", "UN", "LP", "RP"];

/// The expression grammar used throughout the tests.
pub fn expression_grammar() -> Grammar {
    GrammarBuilder::new()
        .rule("E")
        .rhs(["O", "ROE"])
        .rule("ROE")
        .rhs(["RO", "O", "ROE"])
        .rhs(["ε"])
        .rule("O")
        .rhs(["T", "AO"])
        .rule("AO")
        .rhs(["A", "T", "AO"])
        .rhs(["ε"])
        .rule("T")
        .rhs(["M", "MT"])
        .rule("MT")
        .rhs(["MUL", "M", "MT"])
        .rhs(["ε"])
        .rule("M")
        .rhs(["ID"])
        .rhs(["NUM"])
        .rhs(["BOOL"])
        .rhs(["UN", "M"])
        .rhs(["LP", "E", "RP"])
        .terminals(EXPRESSION_TERMINALS)
        .start("E")
        .build()
        .unwrap()
}

pub fn load(bnf: &str) -> Grammar {
    Grammar::load(bnf).unwrap()
}

/// Returns every nonterminal with its rendered alternatives, in order.
pub fn rules_by_name(grammar: &Grammar) -> Vec<(String, Vec<String>)> {
    grammar
        .nonterminals()
        .map(|lhs| {
            (
                grammar.name_of(lhs).to_string(),
                grammar.stringify_productions(lhs),
            )
        })
        .collect()
}

/// Compares the grammar with the expected rules, by name and in order.
pub fn assert_rules(grammar: &Grammar, expected: &[(&str, &[&str])]) {
    let expected: Vec<(String, Vec<String>)> = expected
        .iter()
        .map(|&(lhs, alternatives)| {
            (
                lhs.to_string(),
                alternatives.iter().map(|alt| alt.to_string()).collect(),
            )
        })
        .collect();
    let actual = rules_by_name(grammar);
    if actual != expected {
        eprintln!("Left:\n{}", grammar);
        eprintln!("Right:");
        for (lhs, alternatives) in &expected {
            eprintln!("{} ::= {}", lhs, alternatives.join(" | "));
        }
        panic!("Rules expected to be equal");
    }
}

/// Checks the alternatives of one nonterminal.
pub fn assert_productions(grammar: &Grammar, lhs: &str, expected: &[&str]) {
    let sym = grammar
        .symbol(lhs)
        .unwrap_or_else(|| panic!("no symbol named `{}`", lhs));
    assert_eq!(grammar.stringify_productions(sym), expected, "alternatives of `{}`", lhs);
}

pub fn assert_no_epsilon_except_start(grammar: &Grammar) {
    for (lhs, prods) in grammar.rules() {
        if lhs != grammar.start() {
            assert!(
                prods.iter().all(|prod| !prod.is_epsilon()),
                "`{}` keeps an empty alternative",
                grammar.name_of(lhs)
            );
        }
    }
}

pub fn assert_no_chain_rules(grammar: &Grammar) {
    for (lhs, prods) in grammar.rules() {
        for prod in prods {
            let is_chain = prod.single().map_or(false, |sym| grammar.is_nonterminal(sym));
            assert!(
                !is_chain,
                "`{} ::= {}` is a chain rule",
                grammar.name_of(lhs),
                grammar.stringify_production(prod)
            );
        }
    }
}

pub fn assert_no_direct_left_recursion(grammar: &Grammar) {
    for (lhs, prods) in grammar.rules() {
        for prod in prods {
            assert_ne!(
                prod.first(),
                Some(lhs),
                "`{} ::= {}` is left-recursive",
                grammar.name_of(lhs),
                grammar.stringify_production(prod)
            );
        }
    }
}

/// Checks the given nonterminals for alternatives that share a leading
/// symbol.
pub fn assert_left_factored<'a>(grammar: &Grammar, names: impl IntoIterator<Item = &'a str>) {
    for name in names {
        let lhs = grammar.symbol(name).unwrap();
        let mut seen: Vec<Symbol> = vec![];
        for prod in grammar.productions(lhs) {
            if let Some(first) = prod.first() {
                assert!(
                    !seen.contains(&first),
                    "`{}` has two alternatives starting with `{}`",
                    name,
                    grammar.name_of(first)
                );
                seen.push(first);
            }
        }
    }
}

/// Returns the names of the nonterminals, in order.
pub fn nonterminal_names(grammar: &Grammar) -> Vec<String> {
    grammar
        .nonterminals()
        .map(|sym| grammar.name_of(sym).to_string())
        .collect()
}
