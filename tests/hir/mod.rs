//! HIR layer tests
//!
//! - Global collection over realistic scripts and modules
//! - Property accesses and one-level call-argument aliases
//! - Determinism of repeated analysis

pub mod tests_aliases;
pub mod tests_globals;
