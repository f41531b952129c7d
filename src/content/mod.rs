//! Source text transformations
//!
//! - [`normalize`]: canonical comparison key for source text
//! - [`rewrite`]: import alias substitution applied before writing or comparing

pub mod normalize;
pub mod rewrite;

pub use normalize::{equivalent, normalize};
pub use rewrite::rewrite_imports;
