//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs and carry names recorded in their `SymbolSource`.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod fresh;
mod source;
mod symbol;

pub use self::fresh::FreshNames;
pub use self::source::{Generate, SymbolName, SymbolSource};
pub use self::symbol::Symbol;
