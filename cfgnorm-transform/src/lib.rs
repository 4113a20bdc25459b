//! Normalizing rewrites of context-free grammars: epsilon elimination,
//! chain-rule elimination, direct left-recursion elimination and left
//! factoring, run in this order by the [`Normalizer`].

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod chain;
pub mod epsilon;
pub mod error;
pub mod left_factor;
pub mod left_recursion;
pub mod options;
pub mod pipeline;

pub use crate::chain::{chain_closure, eliminate_chain_rules};
pub use crate::epsilon::eliminate_epsilon;
pub use crate::error::NormalizeError;
pub use crate::left_factor::left_factor;
pub use crate::left_recursion::eliminate_left_recursion;
pub use crate::options::{EpsilonPolicy, NormalizeOptions};
pub use crate::pipeline::{normalize, NormalizeExt, Normalizer, Stage};
