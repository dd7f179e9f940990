// Tree operations
pub mod compare;
pub mod merge;
pub mod path;
pub mod scale;

pub mod error;

// Internal modules - not part of public API
pub(crate) mod paths;

// Public modules for CLI access
pub mod defaults;

// Re-export common types for convenience
pub use compare::Equality;
pub use error::{Error, ErrorCode, Result};
pub use scale::Rect;
