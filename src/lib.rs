//! # global-replacer
//!
//! Finds the free (global) identifiers of a JavaScript program and renames
//! selected globals and their property chains in place, byte-exact, leaving
//! all unrelated formatting and comments untouched.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! rewrite   → Rule planning, offset-correcting text splicer
//!   ↓
//! hir       → Scope annotation, global collection, alias resolution
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! base      → Primitives (TextRange, LineIndex)
//! ```
//!
//! ## Example
//!
//! ```
//! use replacer::{ReplacerOptions, rewrite};
//!
//! let options = ReplacerOptions::new().with_replacement("window", "_window");
//! let output = rewrite("window.blah = 1;", &options).unwrap();
//! assert_eq!(output, "_window.blah = 1;");
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → hir → rewrite)
// ============================================================================

/// Foundation types: TextRange, line/column conversion
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// Scopes, global references and property aliases
pub mod hir;

/// Rewrite rules and the text splicer
pub mod rewrite;

mod config;
mod error;

pub use config::ReplacerOptions;
pub use error::{ReplacerError, Result};
pub use hir::{GlobalGroup, GlobalReference, PropertyAccess, analyze, analyze_syntax};
pub use parser::SourceType;
pub use rewrite::{PropertyPath, Replacer, RewriteRule, rewrite, rewrite_bytes};

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};
