//! In-place rewriting of globals and their property chains.
//!
//! Rules are applied one at a time. Every rule re-parses and re-analyzes the
//! current buffer, so later rules see the text earlier rules produced:
//!
//! ```text
//! for (from, to) in replacements:
//!     parse(buffer) → analyze → plan_rule → SourceBuffer::splice
//! ```

mod path;
mod plan;
mod splice;

pub use path::{PropertyPath, RewriteRule};
pub use plan::plan_rule;
pub use splice::{ReplacementSpan, SourceBuffer};

use crate::config::ReplacerOptions;
use crate::error::{ReplacerError, Result};
use crate::hir::{analyze_syntax, parse_program};

/// Applies the rules of one [`ReplacerOptions`] to a buffer.
///
/// Rules are not transactional: when a rule fails, the rules before it stay
/// applied and [`Replacer::buffer`] shows the partially rewritten text.
#[derive(Debug, Clone)]
pub struct Replacer<'a> {
    options: &'a ReplacerOptions,
    buffer: SourceBuffer,
}

impl<'a> Replacer<'a> {
    pub fn new(source: impl Into<String>, options: &'a ReplacerOptions) -> Self {
        Self {
            options,
            buffer: SourceBuffer::new(source),
        }
    }

    /// Apply every rule in order, stopping at the first error
    pub fn apply(&mut self) -> Result<()> {
        let options = self.options;
        for (from, to) in &options.replacements {
            self.apply_rule(from, to)?;
        }
        Ok(())
    }

    /// Apply a single `from -> to` rule; returns the number of spans replaced
    pub fn apply_rule(&mut self, from: &str, to: &str) -> Result<usize> {
        if from == to {
            tracing::trace!(from, "identity rule skipped");
            return Ok(0);
        }
        let rule = RewriteRule::new(from, to)?;

        let parse = parse_program(self.buffer.as_str(), self.options.source_type)?;
        let groups = analyze_syntax(&parse.syntax(), self.options)?;
        let spans = plan_rule(&rule, &groups, self.buffer.as_str());
        if spans.is_empty() {
            tracing::trace!(%rule, "rule matched nothing");
            return Ok(0);
        }

        self.buffer.splice(&spans)?;
        tracing::debug!(%rule, spans = spans.len(), "applied rule");
        Ok(spans.len())
    }

    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn into_string(self) -> String {
        self.buffer.into_string()
    }
}

/// Rewrite `source` with every rule of `options`
pub fn rewrite(source: &str, options: &ReplacerOptions) -> Result<String> {
    let mut replacer = Replacer::new(source, options);
    replacer.apply()?;
    Ok(replacer.into_string())
}

/// Like [`rewrite`], for input that has not been checked to be UTF-8
pub fn rewrite_bytes(bytes: &[u8], options: &ReplacerOptions) -> Result<String> {
    let source = std::str::from_utf8(bytes)
        .map_err(|e| ReplacerError::invalid_input(format!("source is not UTF-8 text: {e}")))?;
    rewrite(source, options)
}
