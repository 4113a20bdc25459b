//! The normalization pipeline.

use std::borrow::Cow;
use std::fmt;

use log::debug;

use cfgnorm_grammar::Grammar;
use cfgnorm_symbol::FreshNames;

use crate::chain::eliminate_chain_rules;
use crate::epsilon::eliminate_epsilon;
use crate::error::NormalizeError;
use crate::left_factor::left_factor;
use crate::left_recursion::eliminate_left_recursion;
use crate::options::NormalizeOptions;

/// A stage of the pipeline. Stages run in declaration order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Removes `ε` alternatives.
    Epsilon,
    /// Removes single-nonterminal alternatives.
    ChainRules,
    /// Removes direct left recursion.
    LeftRecursion,
    /// Groups alternatives by their leading symbol.
    LeftFactoring,
}

impl Stage {
    /// Every stage, in the order of execution.
    pub const ALL: [Stage; 4] = [
        Stage::Epsilon,
        Stage::ChainRules,
        Stage::LeftRecursion,
        Stage::LeftFactoring,
    ];

    /// Returns a short name.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Epsilon => "epsilon",
            Stage::ChainRules => "chain",
            Stage::LeftRecursion => "left-recursion",
            Stage::LeftFactoring => "left-factor",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the stages in order. Holds nothing but options; the fresh-name
/// registry lives for one run only.
#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Creates a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Normalizer { options }
    }

    /// Returns the options.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalizes a grammar. The input is left untouched.
    pub fn run(&self, grammar: &Grammar) -> Result<Grammar, NormalizeError> {
        self.run_with(grammar, |_, _| {})
    }

    /// Normalizes a grammar, returning the result of every stage that ran.
    pub fn run_traced(&self, grammar: &Grammar) -> Result<Vec<(Stage, Grammar)>, NormalizeError> {
        let mut trace = vec![];
        self.run_with(grammar, |stage, result| {
            trace.push((stage, result.clone()))
        })?;
        Ok(trace)
    }

    /// Normalizes a grammar, passing the result of each stage to `inspect`.
    pub fn run_with<F>(&self, grammar: &Grammar, mut inspect: F) -> Result<Grammar, NormalizeError>
    where
        F: FnMut(Stage, &Grammar),
    {
        grammar.validate()?;
        let mut fresh = FreshNames::from_source(grammar.sym_source());
        let mut current = Cow::Borrowed(grammar);

        for stage in Stage::ALL {
            let next = match stage {
                Stage::Epsilon => {
                    let nullable = current.nullable_symbols();
                    eliminate_epsilon(&current, &nullable, &self.options)?
                }
                Stage::ChainRules => eliminate_chain_rules(&current)?,
                Stage::LeftRecursion => eliminate_left_recursion(&current, &mut fresh)?,
                Stage::LeftFactoring => left_factor(&current, &mut fresh)?,
            };
            debug!(
                "stage {}: {} nonterminals, {} alternatives",
                stage,
                next.num_nonterminals(),
                next.num_productions()
            );
            inspect(stage, &next);
            current = Cow::Owned(next);
            if self.options.stop_after == Some(stage) {
                break;
            }
        }
        Ok(current.into_owned())
    }
}

/// Normalizes a grammar with the default options.
pub fn normalize(grammar: &Grammar) -> Result<Grammar, NormalizeError> {
    Normalizer::default().run(grammar)
}

/// Normalization through methods on `Grammar`.
pub trait NormalizeExt {
    /// Normalizes with the default options.
    fn normalize(&self) -> Result<Grammar, NormalizeError>;

    /// Normalizes with the given options.
    fn normalize_with(&self, options: &NormalizeOptions) -> Result<Grammar, NormalizeError>;
}

impl NormalizeExt for Grammar {
    fn normalize(&self) -> Result<Grammar, NormalizeError> {
        normalize(self)
    }

    fn normalize_with(&self, options: &NormalizeOptions) -> Result<Grammar, NormalizeError> {
        Normalizer::new(*options).run(self)
    }
}
