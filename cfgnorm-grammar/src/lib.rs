//! Context-free grammars over interned symbols, with the validity rules every
//! rewrite relies on.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod builder;
pub mod error;
pub mod grammar;
mod occurence_map;
pub mod production;
pub mod rhs_closure;
pub mod symbol_bit_set;

pub use crate::builder::{Classify, GrammarBuilder, SymbolKind, TerminalSet, EPSILON};
pub use crate::error::MalformedGrammarError;
pub use crate::grammar::Grammar;
pub use crate::production::Production;
pub use crate::symbol_bit_set::SymbolBitSet;
pub use cfgnorm_symbol::{FreshNames, Symbol, SymbolSource};

pub(crate) mod local_prelude {
    pub use crate::error::MalformedGrammarError;
    pub use crate::grammar::Grammar;
    pub use crate::production::Production;
    pub use crate::symbol_bit_set::SymbolBitSet;
    pub use cfgnorm_symbol::{Symbol, SymbolSource};
}
