//! High-level IR (HIR): scopes and global references.
//!
//! Analysis runs in three passes over one immutable tree:
//!
//! ```text
//! parse(text)                  ← lossless CST
//!     │
//!     ▼
//! ScopeMap::build(root)        ← locals of every scope node
//!     │
//!     ▼
//! collect_globals(root, map)   ← unresolved references grouped by name,
//!                                plus direct and aliased property accesses
//! ```
//!
//! Every pass result is owned by the caller; nothing is cached between runs.

mod globals;
mod scope;

pub use globals::{GlobalGroup, GlobalReference, PropertyAccess, THIS_NAME, collect_globals};
pub use scope::ScopeMap;

use crate::config::ReplacerOptions;
use crate::error::{ReplacerError, Result};
use crate::parser::{self, Parse, SourceType, SyntaxKind, SyntaxNode};

/// Parse `text`, turning the first syntax error into a [`ReplacerError`].
///
/// A script that is rejected because it contains `import`/`export`
/// declarations is parsed again as a module.
pub fn parse_program(text: &str, source_type: SourceType) -> Result<Parse> {
    let mut parse = parser::parse(text, source_type);
    if source_type == SourceType::Script && parse.needs_module() {
        tracing::trace!("module declarations found, reparsing as module");
        parse = parser::parse(text, SourceType::Module);
    }
    match parse.errors.first() {
        Some(error) => Err(ReplacerError::from_syntax(error, text)),
        None => Ok(parse),
    }
}

/// Find every global of `source`, grouped and sorted by name
pub fn analyze(source: &str, options: &ReplacerOptions) -> Result<Vec<GlobalGroup>> {
    let parse = parse_program(source, options.source_type)?;
    analyze_syntax(&parse.syntax(), options)
}

/// Find every global of an already parsed program
pub fn analyze_syntax(root: &SyntaxNode, options: &ReplacerOptions) -> Result<Vec<GlobalGroup>> {
    if root.kind() != SyntaxKind::PROGRAM {
        return Err(ReplacerError::invalid_input(format!(
            "expected a program root, found {:?}",
            root.kind()
        )));
    }
    let scopes = ScopeMap::build(root);
    let groups = collect_globals(root, &scopes);
    tracing::trace!(
        source_type = ?options.source_type,
        scopes = scopes.len(),
        groups = groups.len(),
        "analysis pass"
    );
    Ok(groups)
}
