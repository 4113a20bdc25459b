//! Configuration of a normalization run.

use cfgnorm_grammar::{Grammar, Symbol};

use crate::pipeline::Stage;

/// Which nonterminals keep an `ε` alternative after epsilon elimination.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EpsilonPolicy {
    /// The start symbol keeps `ε` if it is nullable, so the language keeps
    /// the empty string.
    #[default]
    StartOnly,
    /// Every nullable nonterminal keeps `ε`. The result is ambiguous but
    /// each optional nonterminal can still be matched empty on its own.
    AllNullable,
    /// No nonterminal keeps `ε`. The empty string leaves the language,
    /// except through a nonterminal that derives nothing but the empty
    /// string: it keeps a lone `ε` alternative.
    Discard,
}

impl EpsilonPolicy {
    /// Checks whether a nullable `lhs` keeps its `ε` alternative.
    pub fn keeps_epsilon(self, grammar: &Grammar, lhs: Symbol) -> bool {
        match self {
            EpsilonPolicy::StartOnly => lhs == grammar.start(),
            EpsilonPolicy::AllNullable => true,
            EpsilonPolicy::Discard => false,
        }
    }
}

/// Options for a normalization run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Which nonterminals keep `ε`.
    pub epsilon_policy: EpsilonPolicy,
    /// Largest number of nullable occurrences in one alternative. An
    /// alternative with `k` occurrences expands into up to `2^k` alternatives.
    /// `None` disables the check.
    pub max_nullable_occurrences: Option<usize>,
    /// A warning is logged for alternatives with more nullable occurrences.
    pub warn_nullable_occurrences: usize,
    /// Stops the pipeline after this stage.
    pub stop_after: Option<Stage>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            epsilon_policy: EpsilonPolicy::default(),
            max_nullable_occurrences: Some(16),
            warn_nullable_occurrences: 8,
            stop_after: None,
        }
    }
}

impl NormalizeOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `ε` policy.
    pub fn epsilon_policy(mut self, policy: EpsilonPolicy) -> Self {
        self.epsilon_policy = policy;
        self
    }

    /// Sets the limit on nullable occurrences per alternative.
    pub fn max_nullable_occurrences(mut self, limit: Option<usize>) -> Self {
        self.max_nullable_occurrences = limit;
        self
    }

    /// Sets the warning threshold on nullable occurrences per alternative.
    pub fn warn_nullable_occurrences(mut self, threshold: usize) -> Self {
        self.warn_nullable_occurrences = threshold;
        self
    }

    /// Stops the pipeline after the given stage.
    pub fn stop_after(mut self, stage: Option<Stage>) -> Self {
        self.stop_after = stage;
        self
    }
}
