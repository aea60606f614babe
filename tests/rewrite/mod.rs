//! Rewrite tests
//!
//! - End-to-end renames of globals and property chains
//! - Rule ordering, identity rules and failure behavior
//! - File fixtures with expected outputs

pub mod tests_fixtures;
pub mod tests_properties;
pub mod tests_rewrite;
