//! Errors raised while building or validating a grammar.

use thiserror::Error;

/// A grammar violates the model's validity rules.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MalformedGrammarError {
    /// There is nothing to build.
    #[error("grammar has no rules")]
    NoRules,
    /// A rule was started without any alternative.
    #[error("nonterminal `{nonterminal}` has no alternatives")]
    NoAlternatives { nonterminal: String },
    /// An alternative has no symbols and is not the empty marker.
    #[error("alternative {index} of `{nonterminal}` is empty; write the empty marker instead")]
    EmptyProduction { nonterminal: String, index: usize },
    /// The empty marker must stand alone.
    #[error("`{nonterminal} ::= {production}` mixes the empty marker with other symbols")]
    MisplacedEpsilon {
        nonterminal: String,
        production: String,
    },
    /// A nonterminal on some right-hand side has no productions.
    #[error("`{nonterminal} ::= {production}` references unknown nonterminal `{symbol}`")]
    UnknownNonterminal {
        nonterminal: String,
        production: String,
        symbol: String,
    },
    /// A symbol classified as a terminal appears on a left-hand side.
    #[error("terminal `{name}` cannot have productions")]
    TerminalWithProductions { name: String },
    /// The start symbol is not a key of the grammar.
    #[error("start symbol `{name}` is not a nonterminal of the grammar")]
    UnknownStart { name: String },
    /// A new symbol was requested under a name that is taken.
    #[error("symbol name `{name}` is already in use")]
    DuplicateName { name: String },
}
