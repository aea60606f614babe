//! `import` / `export` declarations

use super::{expressions, functions, patterns, statements};
use crate::parser::SourceType;
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

/// ModuleItem = ImportDecl | ExportDecl | Statement
pub(crate) fn module_item(p: &mut Parser) {
    match p.current_kind() {
        SyntaxKind::IMPORT_KW if !statements::at_import_expression(p) => import_decl(p),
        SyntaxKind::EXPORT_KW => export_decl(p),
        _ => statements::statement(p),
    }
}

/// Reported for `import`/`export` declarations in a script
pub(crate) const MODULE_ONLY: &str = "'import' and 'export' may appear only with 'sourceType: module'";

fn require_module(p: &mut Parser) {
    if p.source_type() != SourceType::Module {
        p.error(MODULE_ONLY);
    }
}

fn string_literal(p: &mut Parser) {
    if p.at(SyntaxKind::STRING) {
        p.start_node(SyntaxKind::LITERAL);
        p.bump();
        p.finish_node();
    } else {
        p.error_bump("Unexpected token, expected string");
    }
}

/// An imported or exported name that is not a local binding
fn module_export_name(p: &mut Parser) {
    if p.current_kind().is_identifier_name() || p.at(SyntaxKind::STRING) {
        p.start_node(SyntaxKind::MODULE_EXPORT_NAME);
        p.bump();
        p.finish_node();
    } else {
        p.error_bump("Unexpected token, expected identifier");
    }
}

/// Optional `with { type: "json" }` import attributes
fn import_attributes(p: &mut Parser) {
    if p.at(SyntaxKind::WITH_KW) && p.nth(1) == SyntaxKind::L_BRACE {
        p.bump();
        expressions::object_expr(p);
    }
}

/// ImportDecl = 'import' (String | Clause 'from' String) Attributes? ';'
fn import_decl(p: &mut Parser) {
    require_module(p);
    p.start_node(SyntaxKind::IMPORT_DECL);
    p.bump(); // import

    if p.at(SyntaxKind::STRING) {
        string_literal(p);
    } else {
        let mut more = true;
        if p.at(SyntaxKind::IDENT) {
            p.start_node(SyntaxKind::IMPORT_DEFAULT_SPECIFIER);
            patterns::name(p);
            p.finish_node();
            more = p.eat(SyntaxKind::COMMA);
        }
        if more {
            match p.current_kind() {
                SyntaxKind::STAR => {
                    p.start_node(SyntaxKind::IMPORT_NAMESPACE_SPECIFIER);
                    p.bump();
                    p.expect_contextual("as");
                    patterns::name(p);
                    p.finish_node();
                }
                SyntaxKind::L_BRACE => named_imports(p),
                _ => p.error("Unexpected token"),
            }
        }
        p.expect_contextual("from");
        string_literal(p);
    }

    import_attributes(p);
    p.eat_semicolon();
    p.finish_node();
}

/// `{ a, b as c, "d e" as f }`
fn named_imports(p: &mut Parser) {
    p.bump(); // {
    while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        p.start_node(SyntaxKind::IMPORT_SPECIFIER);
        if p.nth(1) == SyntaxKind::IDENT && p.nth_text(1) == "as" {
            module_export_name(p);
            p.bump(); // as
        }
        patterns::name(p);
        p.finish_node();
        if !p.at(SyntaxKind::R_BRACE) && !p.expect(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACE);
}

/// ExportDecl = 'export' (Default | '*' ... | '{' ... '}' | Declaration)
fn export_decl(p: &mut Parser) {
    require_module(p);
    p.start_node(SyntaxKind::EXPORT_DECL);
    p.bump(); // export

    match p.current_kind() {
        _ if p.at_eof() => p.error("Unexpected token"),
        SyntaxKind::DEFAULT_KW => {
            p.bump();
            if p.at(SyntaxKind::FUNCTION_KW) || functions::at_async_function(p) {
                functions::default_function_decl(p);
            } else if p.at(SyntaxKind::CLASS_KW) {
                functions::default_class_decl(p);
            } else {
                p.with_in(expressions::assignment_expr);
                p.eat_semicolon();
            }
        }
        SyntaxKind::STAR => {
            p.bump();
            if p.eat_contextual("as") {
                module_export_name(p);
            }
            p.expect_contextual("from");
            string_literal(p);
            import_attributes(p);
            p.eat_semicolon();
        }
        SyntaxKind::L_BRACE => {
            let after = p.after_group(0);
            let reexport = p.nth(after) == SyntaxKind::IDENT && p.nth_text(after) == "from";
            export_specifiers(p, reexport);
            if reexport {
                p.bump(); // from
                string_literal(p);
                import_attributes(p);
            }
            p.eat_semicolon();
        }
        SyntaxKind::VAR_KW | SyntaxKind::CONST_KW => statements::var_decl(p, true),
        SyntaxKind::IDENT if statements::at_let_declaration(p) => statements::var_decl(p, true),
        SyntaxKind::FUNCTION_KW => functions::function_decl(p),
        SyntaxKind::IDENT if functions::at_async_function(p) => functions::function_decl(p),
        SyntaxKind::CLASS_KW => functions::class_decl(p),
        _ => p.error_bump("Unexpected token"),
    }

    p.finish_node();
}

/// `{ a, b as c }`; local names are references unless re-exported
fn export_specifiers(p: &mut Parser, reexport: bool) {
    p.bump(); // {
    while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        p.start_node(SyntaxKind::EXPORT_SPECIFIER);
        if !reexport && p.at(SyntaxKind::IDENT) {
            p.start_node(SyntaxKind::NAME_REF);
            p.bump();
            p.finish_node();
        } else {
            module_export_name(p);
        }
        if p.eat_contextual("as") {
            module_export_name(p);
        }
        p.finish_node();
        if !p.at(SyntaxKind::R_BRACE) && !p.expect(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACE);
}
