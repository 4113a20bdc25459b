use cfgnorm_grammar::MalformedGrammarError;
use thiserror::Error;

/// A rewrite could not produce a well-formed grammar.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The input grammar is malformed.
    #[error(transparent)]
    Malformed(#[from] MalformedGrammarError),
    /// A nonterminal is left with no alternative that could derive anything.
    #[error(
        "nonterminal `{nonterminal}` has no usable alternative (reachable through chain rules: {})",
        .closure.join(", ")
    )]
    DeadNonterminal {
        nonterminal: String,
        closure: Vec<String>,
    },
    /// Epsilon elimination would enumerate too many alternatives.
    #[error(
        "`{nonterminal} ::= {production}` has {nullable_occurrences} nullable occurrences, \
         more than the limit of {limit}"
    )]
    CombinatorialLimitExceeded {
        nonterminal: String,
        production: String,
        nullable_occurrences: usize,
        limit: usize,
    },
}
