//! Error types for analysis and rewriting.

use crate::base::{LineIndex, TextRange};
use crate::parser;
use thiserror::Error;

/// Errors that can occur while analyzing or rewriting a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplacerError {
    /// The source failed to parse. `line` is 1-based and `column` 0-based.
    #[error("{message} ({line}:{column})")]
    SyntaxError {
        message: String,
        range: TextRange,
        line: u32,
        column: u32,
    },

    /// Input that cannot be analyzed at all.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A rule's paths have different segment counts.
    #[error(
        "When replacing expressions, the parts must be the same length: \"{from}\" -> \"{to}\""
    )]
    PathArity { from: String, to: String },
}

impl ReplacerError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an arity error for the rule `from -> to`.
    pub fn path_arity(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::PathArity {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Convert a parser error, resolving its position against `text`.
    pub fn from_syntax(error: &parser::SyntaxError, text: &str) -> Self {
        let position = LineIndex::new(text).line_col(text, error.range.start());
        Self::SyntaxError {
            message: error.message.clone(),
            range: error.range,
            line: position.line + 1,
            column: position.col,
        }
    }
}

/// Result type for replacer operations.
pub type Result<T> = std::result::Result<T, ReplacerError>;
