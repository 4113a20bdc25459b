use std::num::NonZeroU32;

/// A common grammar symbol type.
///
/// The ID is stored off by one, so that `Option<Symbol>` takes four bytes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    n: NonZeroU32,
}

impl Default for Symbol {
    fn default() -> Self {
        Self::first()
    }
}

impl Symbol {
    /// The symbol with ID 0.
    pub fn first() -> Self {
        Symbol { n: NonZeroU32::MIN }
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.n.get() as usize - 1
    }

    /// Returns the symbol with the next ID.
    #[inline]
    pub fn next(self) -> Self {
        Symbol {
            n: self.n.checked_add(1).expect("ran out of Symbol space"),
        }
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        let n = u32::try_from(id)
            .ok()
            .and_then(|id| id.checked_add(1))
            .and_then(NonZeroU32::new)
            .expect("symbol ID out of range");
        Symbol { n }
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> usize {
        sym.usize()
    }
}
