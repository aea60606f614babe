//! Parser tests
//!
//! - Lossless round trips over realistic sources
//! - Syntax errors as reported through the public API

pub mod tests_lossless;
pub mod tests_syntax_errors;
