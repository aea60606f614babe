//! Dotted property paths and rename rules.

use std::fmt;

use smol_str::SmolStr;

use crate::error::{ReplacerError, Result};

/// A non-empty sequence of non-empty segments: `window.location.href`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<SmolStr>,
}

impl PropertyPath {
    pub fn parse(text: &str) -> Result<Self> {
        let segments: Vec<SmolStr> = text.split('.').map(SmolStr::new).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ReplacerError::invalid_input(format!(
                "empty segment in replacement path \"{text}\""
            )));
        }
        Ok(Self { segments })
    }

    /// The global name the path starts at
    pub fn head(&self) -> &str {
        &self.segments[0]
    }

    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(SmolStr::as_str)
    }

    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true for a parsed path
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// One `from -> to` rename with equal segment counts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RewriteRule {
    pub from: PropertyPath,
    pub to: PropertyPath,
}

impl RewriteRule {
    pub fn new(from: &str, to: &str) -> Result<Self> {
        let from_path = PropertyPath::parse(from)?;
        let to_path = PropertyPath::parse(to)?;
        if from_path.len() != to_path.len() {
            return Err(ReplacerError::path_arity(from, to));
        }
        Ok(Self {
            from: from_path,
            to: to_path,
        })
    }

    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    pub fn len(&self) -> usize {
        self.from.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
