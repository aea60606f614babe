//! Grammar rules for JavaScript
//!
//! This module contains the parsing logic organized by construct:
//! - `statements` - Statements, blocks and variable declarations
//! - `expressions` - The expression precedence ladder and primaries
//! - `functions` - Functions, arrows, parameters and classes
//! - `patterns` - Binding patterns (destructuring)
//! - `modules` - `import` / `export` declarations
//!
//! Every rule is a free function over [`Parser`]; ranges of the nodes they
//! open start at the first significant token of the construct.

mod expressions;
mod functions;
mod modules;
mod patterns;
mod statements;

pub(crate) use modules::MODULE_ONLY;

use super::parser::Parser;
use super::syntax_kind::SyntaxKind;

/// Program = ModuleItem*
pub(crate) fn program(p: &mut Parser) {
    p.start_root(SyntaxKind::PROGRAM);

    while !p.at_eof() {
        let before = p.progress();
        modules::module_item(p);
        // Safety: if we didn't make progress, force-skip a token
        if p.progress() == before {
            p.error_skip("Unexpected token");
        }
    }

    p.bump_trivia();
    p.finish_node();
}
