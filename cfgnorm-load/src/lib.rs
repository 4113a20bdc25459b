//! Allows us to load context-free grammars from
//! a BNF string.
//!
//! ```text
//! # comment
//! %start E
//! %terminals PLUS ID
//! E ::= T PLUS E
//!     | T
//! T ::= ID
//! ```
//!
//! A rule ends at `;` or at a newline that is not followed by a `|`
//! continuation. Without `%terminals`, every name that is not a left-hand
//! side is a terminal.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod lexer;
mod parser;

use cfgnorm_grammar::{Grammar, MalformedGrammarError};
use thiserror::Error;

/// Represents an error when loading a BNF string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The text is not valid BNF.
    #[error("{reason} at line {line}, column {col}")]
    Syntax {
        /// Human-readable reason for the error.
        reason: String,
        /// Line where the error happened.
        ///
        /// One-indexed.
        line: u32,
        /// Column where the error happened.
        ///
        /// One-indexed.
        col: u32,
    },
    /// The text is valid BNF, but the grammar is malformed.
    #[error(transparent)]
    Malformed(#[from] MalformedGrammarError),
}

/// Loading grammars from BNF text.
pub trait GrammarLoadExt: Sized {
    /// Parses BNF text into a grammar.
    fn load(bnf: &str) -> Result<Self, LoadError>;
}

impl GrammarLoadExt for Grammar {
    fn load(bnf: &str) -> Result<Self, LoadError> {
        let tokens = lexer::Lexer::tokenize(bnf)?;
        parser::Parser::new(tokens).parse()
    }
}
