//! Replacer configuration.

use crate::parser::SourceType;
use indexmap::IndexMap;

/// Options for [`crate::analyze`] and [`crate::rewrite`].
///
/// `replacements` maps a dotted source path to its replacement path and is
/// applied in insertion order.
///
/// `source_type` defaults to [`SourceType::Script`]; a script containing
/// `import`/`export` declarations is analyzed as a module anyway, so setting
/// [`SourceType::Module`] is only needed for module-only syntax such as
/// top-level `await` without any declaration.
///
/// With the `serde` feature the options deserialize from documents such as
/// `{"replacements": {"window": "_window"}, "sourceType": "module"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ReplacerOptions {
    pub replacements: IndexMap<String, String>,
    pub source_type: SourceType,
}

impl ReplacerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule; re-adding an existing `from` keeps its original position
    pub fn with_replacement(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.replacements.insert(from.into(), to.into());
        self
    }

    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }
}

impl<K, V> FromIterator<(K, V)> for ReplacerOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |options, (from, to)| options.with_replacement(from, to))
    }
}
