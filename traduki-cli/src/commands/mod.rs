//! CLI command implementations.

pub mod extract;
pub mod validate;
