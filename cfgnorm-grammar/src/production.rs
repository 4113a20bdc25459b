//! A single alternative of a nonterminal.

use crate::local_prelude::*;

/// An ordered sequence of symbols. The empty sequence is the empty-marker
/// alternative, written `ε`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Production {
    rhs: Vec<Symbol>,
}

impl Production {
    /// Creates an alternative with the given symbols.
    pub fn new(rhs: impl Into<Vec<Symbol>>) -> Self {
        Production { rhs: rhs.into() }
    }

    /// Creates the empty-marker alternative.
    pub fn epsilon() -> Self {
        Self::default()
    }

    /// Checks whether this is the empty-marker alternative.
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Same as `is_epsilon`.
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    /// Returns the symbols.
    pub fn symbols(&self) -> &[Symbol] {
        &self.rhs[..]
    }

    /// Returns the leading symbol, or `None` for `ε`.
    pub fn first(&self) -> Option<Symbol> {
        self.rhs.first().copied()
    }

    /// Returns the sole symbol of an alternative of length one.
    pub fn single(&self) -> Option<Symbol> {
        match self.rhs[..] {
            [sym] => Some(sym),
            _ => None,
        }
    }

    /// Returns the alternative without its leading symbol. Stripping the only
    /// symbol yields `ε`.
    pub fn tail(&self) -> Production {
        Production {
            rhs: self.rhs.iter().skip(1).copied().collect(),
        }
    }

    /// Returns the alternative with `sym` appended.
    pub fn appended(&self, sym: Symbol) -> Production {
        let mut rhs = Vec::with_capacity(self.rhs.len() + 1);
        rhs.extend_from_slice(&self.rhs[..]);
        rhs.push(sym);
        Production { rhs }
    }
}

impl From<Vec<Symbol>> for Production {
    fn from(rhs: Vec<Symbol>) -> Self {
        Production::new(rhs)
    }
}

impl<const N: usize> From<[Symbol; N]> for Production {
    fn from(rhs: [Symbol; N]) -> Self {
        Production::new(rhs)
    }
}

impl AsRef<[Symbol]> for Production {
    fn as_ref(&self) -> &[Symbol] {
        self.symbols()
    }
}
