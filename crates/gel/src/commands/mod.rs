//! CLI command implementations

pub mod compile;
