//! Grammars are built by name with the builder pattern.
//!
//! ```
//! use cfgnorm_grammar::{GrammarBuilder, EPSILON};
//!
//! let grammar = GrammarBuilder::new()
//!     .rule("list")
//!     .rhs(["item", "list"])
//!     .rhs([EPSILON])
//!     .terminals(["item"])
//!     .start("list")
//!     .build()
//!     .unwrap();
//! assert_eq!(grammar.num_productions(), 2);
//! ```

use std::collections::{BTreeMap, HashSet};

use log::trace;

use crate::local_prelude::*;

/// The default empty marker.
pub const EPSILON: &str = "ε";

/// Whether a name stands for a terminal or a nonterminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// An opaque token category.
    Terminal,
    /// A name that must be a key of the grammar.
    Nonterminal,
}

/// Tells terminals from nonterminals when a grammar is built.
pub trait Classify {
    /// Classifies a symbol name.
    fn classify(&self, name: &str) -> SymbolKind;
}

impl<F> Classify for F
where
    F: Fn(&str) -> SymbolKind,
{
    fn classify(&self, name: &str) -> SymbolKind {
        self(name)
    }
}

/// A set of declared terminal names. Every other name is a nonterminal.
#[derive(Clone, Debug, Default)]
pub struct TerminalSet {
    names: HashSet<String>,
}

impl TerminalSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a terminal.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Checks whether the name was declared.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for TerminalSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TerminalSet {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Classify for TerminalSet {
    fn classify(&self, name: &str) -> SymbolKind {
        if self.contains(name) {
            SymbolKind::Terminal
        } else {
            SymbolKind::Nonterminal
        }
    }
}

/// The grammar builder.
///
/// Rules are kept in insertion order. Calling `rule` again with a known
/// name appends further alternatives to it.
#[derive(Clone, Debug)]
pub struct GrammarBuilder {
    rules: Vec<(String, Vec<Vec<String>>)>,
    current: Option<usize>,
    start: Option<String>,
    terminals: TerminalSet,
    epsilon: String,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarBuilder {
    /// Creates a builder with no rules.
    pub fn new() -> Self {
        GrammarBuilder {
            rules: vec![],
            current: None,
            start: None,
            terminals: TerminalSet::new(),
            epsilon: EPSILON.to_string(),
        }
    }

    /// Starts building alternatives for the given left-hand side.
    pub fn rule(mut self, lhs: impl Into<String>) -> Self {
        let lhs = lhs.into();
        let index = match self.rules.iter().position(|(name, _)| *name == lhs) {
            Some(index) => index,
            None => {
                self.rules.push((lhs, vec![]));
                self.rules.len() - 1
            }
        };
        self.current = Some(index);
        self
    }

    /// Adds an alternative to the current rule.
    ///
    /// # Panics
    ///
    /// Panics if no rule was started.
    pub fn rhs<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = self.current.expect("`rhs` called before `rule`");
        let alternative = syms.into_iter().map(Into::into).collect();
        self.rules[index].1.push(alternative);
        self
    }

    /// Picks the start symbol. Defaults to the first rule's left-hand side.
    pub fn start(mut self, name: impl Into<String>) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Declares terminals, used by `build`.
    pub fn terminals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.terminals.insert(name);
        }
        self
    }

    /// Replaces the empty marker, `ε` by default.
    pub fn epsilon_marker(mut self, marker: impl Into<String>) -> Self {
        self.epsilon = marker.into();
        self
    }

    /// Builds the grammar, treating declared terminals as terminals and every
    /// other name as a nonterminal.
    pub fn build(mut self) -> Result<Grammar, MalformedGrammarError> {
        let terminals = std::mem::take(&mut self.terminals);
        self.build_with(&terminals)
    }

    /// Builds the grammar, treating every name that is not a left-hand side
    /// as a terminal.
    pub fn build_classified_by_keys(self) -> Result<Grammar, MalformedGrammarError> {
        let keys: HashSet<String> = self.rules.iter().map(|(lhs, _)| lhs.clone()).collect();
        self.build_with(&|name: &str| {
            if keys.contains(name) {
                SymbolKind::Nonterminal
            } else {
                SymbolKind::Terminal
            }
        })
    }

    /// Builds the grammar with the given classification.
    pub fn build_with<C>(self, classify: &C) -> Result<Grammar, MalformedGrammarError>
    where
        C: Classify + ?Sized,
    {
        if self.rules.is_empty() {
            return Err(MalformedGrammarError::NoRules);
        }

        let mut sym_source = SymbolSource::new();
        // Nonterminals come first, in insertion order.
        for (lhs, _) in &self.rules {
            if classify.classify(lhs) == SymbolKind::Terminal || *lhs == self.epsilon {
                return Err(MalformedGrammarError::TerminalWithProductions { name: lhs.clone() });
            }
            sym_source.intern(lhs);
        }

        let mut terminals = SymbolBitSet::new();
        let mut rules = BTreeMap::new();
        for (lhs, alternatives) in &self.rules {
            if alternatives.is_empty() {
                return Err(MalformedGrammarError::NoAlternatives {
                    nonterminal: lhs.clone(),
                });
            }
            let mut prods: Vec<Production> = Vec::with_capacity(alternatives.len());
            for (index, alternative) in alternatives.iter().enumerate() {
                let prod = self.production(
                    lhs,
                    index,
                    alternative,
                    classify,
                    &mut sym_source,
                    &mut terminals,
                )?;
                if !prods.contains(&prod) {
                    prods.push(prod);
                }
            }
            trace!("BUILD {} with {} alternatives", lhs, prods.len());
            rules.insert(sym_source.intern(lhs), prods);
        }

        let start_name = match self.start {
            Some(name) => name,
            None => self.rules[0].0.clone(),
        };
        let start = sym_source
            .get(&start_name)
            .filter(|sym| rules.contains_key(sym))
            .ok_or(MalformedGrammarError::UnknownStart { name: start_name })?;

        Ok(Grammar::from_parts(sym_source, terminals, rules, start))
    }

    fn production<C>(
        &self,
        lhs: &str,
        index: usize,
        alternative: &[String],
        classify: &C,
        sym_source: &mut SymbolSource,
        terminals: &mut SymbolBitSet,
    ) -> Result<Production, MalformedGrammarError>
    where
        C: Classify + ?Sized,
    {
        if alternative.is_empty() {
            return Err(MalformedGrammarError::EmptyProduction {
                nonterminal: lhs.to_string(),
                index,
            });
        }
        if alternative.iter().any(|sym| *sym == self.epsilon) {
            return if alternative.len() == 1 {
                Ok(Production::epsilon())
            } else {
                Err(MalformedGrammarError::MisplacedEpsilon {
                    nonterminal: lhs.to_string(),
                    production: alternative.join(" "),
                })
            };
        }
        let mut rhs = Vec::with_capacity(alternative.len());
        for name in alternative {
            let is_key = self.rules.iter().any(|(key, _)| key == name);
            if !is_key {
                if classify.classify(name) == SymbolKind::Nonterminal {
                    return Err(MalformedGrammarError::UnknownNonterminal {
                        nonterminal: lhs.to_string(),
                        production: alternative.join(" "),
                        symbol: name.clone(),
                    });
                }
                let sym = sym_source.intern(name);
                terminals.set(sym, true);
                rhs.push(sym);
            } else {
                rhs.push(sym_source.intern(name));
            }
        }
        Ok(Production::new(rhs))
    }
}
