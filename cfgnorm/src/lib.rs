#[cfg(feature = "cfgnorm-load")]
pub use cfgnorm_load as load;
pub use cfgnorm_grammar::*;
pub use cfgnorm_symbol::*;
pub use cfgnorm_transform as transform;
pub use cfgnorm_transform::{normalize, NormalizeExt};
