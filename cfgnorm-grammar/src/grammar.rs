//! Definitions of the context-free grammar type.

use std::collections::BTreeMap;
use std::fmt;

use crate::local_prelude::*;

/// Context-free grammar type.
///
/// Maps every nonterminal to its list of alternatives. Nonterminals are
/// iterated in the order their symbols were created, which is the insertion
/// order of the input followed by nonterminals added by rewrites.
///
/// Cloning a grammar yields an independent copy, so every rewrite can take a
/// `&Grammar` and return a new one.
#[derive(Clone, Debug)]
pub struct Grammar {
    /// The symbol source, holding every symbol's name.
    sym_source: SymbolSource,
    /// The set of terminal symbols.
    terminals: SymbolBitSet,
    /// Alternatives, keyed by nonterminal.
    rules: BTreeMap<Symbol, Vec<Production>>,
    /// The start symbol.
    start: Symbol,
}

impl Grammar {
    /// Assembles a grammar. Used by the builder, which checks validity.
    pub(crate) fn from_parts(
        sym_source: SymbolSource,
        terminals: SymbolBitSet,
        rules: BTreeMap<Symbol, Vec<Production>>,
        start: Symbol,
    ) -> Self {
        Grammar {
            sym_source,
            terminals,
            rules,
            start,
        }
    }

    /// Returns the start symbol.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// Allows access to the symbol source through a reference.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns the number of symbols in use, terminals included.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns the name of the given symbol.
    pub fn name_of(&self, sym: Symbol) -> &str {
        self.sym_source.name_of(sym)
    }

    /// Looks up a symbol by name.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.sym_source.get(name)
    }

    /// Checks whether the symbol is a terminal.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminals[sym]
    }

    /// Checks whether the symbol is a nonterminal of this grammar.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.rules.contains_key(&sym)
    }

    /// Returns the set of terminal symbols.
    pub fn terminals(&self) -> &SymbolBitSet {
        &self.terminals
    }

    /// Iterates over nonterminals in order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rules.keys().copied()
    }

    /// Returns the number of nonterminals.
    pub fn num_nonterminals(&self) -> usize {
        self.rules.len()
    }

    /// Returns the alternatives of a nonterminal, or an empty slice if the
    /// symbol is not a nonterminal of this grammar.
    pub fn productions(&self, lhs: Symbol) -> &[Production] {
        self.rules.get(&lhs).map(|prods| &prods[..]).unwrap_or(&[])
    }

    /// Returns the alternatives of the nonterminal with the given name.
    pub fn productions_by_name(&self, name: &str) -> Option<&[Production]> {
        self.symbol(name)
            .and_then(|sym| self.rules.get(&sym))
            .map(|prods| &prods[..])
    }

    /// Iterates over nonterminals together with their alternatives.
    pub fn rules(&self) -> impl Iterator<Item = (Symbol, &[Production])> + '_ {
        self.rules.iter().map(|(&lhs, prods)| (lhs, &prods[..]))
    }

    /// Returns the total number of alternatives.
    pub fn num_productions(&self) -> usize {
        self.rules.values().map(|prods| prods.len()).sum()
    }

    /// Replaces the alternatives of a nonterminal. Duplicates are removed,
    /// keeping the first occurrence.
    ///
    /// # Panics
    ///
    /// Panics if `lhs` is a terminal.
    pub fn set_productions(&mut self, lhs: Symbol, prods: impl IntoIterator<Item = Production>) {
        assert!(
            !self.is_terminal(lhs),
            "terminal `{}` cannot have productions",
            self.name_of(lhs)
        );
        let mut deduped: Vec<Production> = vec![];
        for prod in prods {
            if !deduped.contains(&prod) {
                deduped.push(prod);
            }
        }
        self.rules.insert(lhs, deduped);
    }

    /// Adds a new nonterminal with no alternatives yet.
    ///
    /// Fails if the name is taken by any symbol.
    pub fn add_nonterminal(&mut self, name: &str) -> Result<Symbol, MalformedGrammarError> {
        let sym = self
            .sym_source
            .next_sym(name)
            .ok_or_else(|| MalformedGrammarError::DuplicateName {
                name: name.to_string(),
            })?;
        self.rules.insert(sym, vec![]);
        Ok(sym)
    }

    /// Checks that every nonterminal on a right-hand side has productions and
    /// that the start symbol is a nonterminal. Every nonterminal must have at
    /// least one alternative.
    pub fn validate(&self) -> Result<(), MalformedGrammarError> {
        if !self.is_nonterminal(self.start) {
            return Err(MalformedGrammarError::UnknownStart {
                name: self.name_of(self.start).to_string(),
            });
        }
        for (lhs, prods) in self.rules() {
            if self.is_terminal(lhs) {
                return Err(MalformedGrammarError::TerminalWithProductions {
                    name: self.name_of(lhs).to_string(),
                });
            }
            if prods.is_empty() {
                return Err(MalformedGrammarError::NoAlternatives {
                    nonterminal: self.name_of(lhs).to_string(),
                });
            }
            for prod in prods {
                let dangling = prod
                    .symbols()
                    .iter()
                    .find(|&&sym| !self.is_terminal(sym) && self.productions(sym).is_empty());
                if let Some(&sym) = dangling {
                    return Err(MalformedGrammarError::UnknownNonterminal {
                        nonterminal: self.name_of(lhs).to_string(),
                        production: self.stringify_production(prod),
                        symbol: self.name_of(sym).to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Formats an alternative as space-separated names, or `ε`.
    pub fn stringify_production(&self, prod: &Production) -> String {
        if prod.is_epsilon() {
            crate::EPSILON.to_string()
        } else {
            let names: Vec<&str> = prod.symbols().iter().map(|&sym| self.name_of(sym)).collect();
            names.join(" ")
        }
    }

    /// Formats the alternatives of a nonterminal.
    pub fn stringify_productions(&self, lhs: Symbol) -> Vec<String> {
        self.productions(lhs)
            .iter()
            .map(|prod| self.stringify_production(prod))
            .collect()
    }

    /// Formats the grammar to a `String`, one nonterminal per line, preceded
    /// by a `%start` line if the start symbol is not the first nonterminal:
    ///
    /// ```text
    /// E ::= O ROE | O
    /// ROE ::= RO O ROE | RO O
    /// ```
    pub fn stringify_to_bnf(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The first nonterminal is the start symbol unless told otherwise.
        if self.nonterminals().next() != Some(self.start) {
            writeln!(f, "%start {}", self.name_of(self.start))?;
        }
        for (lhs, prods) in self.rules() {
            let alternatives: Vec<String> = prods
                .iter()
                .map(|prod| self.stringify_production(prod))
                .collect();
            writeln!(f, "{} ::= {}", self.name_of(lhs), alternatives.join(" | "))?;
        }
        Ok(())
    }
}
