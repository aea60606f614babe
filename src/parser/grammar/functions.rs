//! Functions, arrow functions and classes

use super::{expressions, patterns, statements};
use crate::parser::parser::{Context, Parser};
use crate::parser::syntax_kind::SyntaxKind;
use rowan::Checkpoint;

/// `async function` with no line break between the words
pub(crate) fn at_async_function(p: &Parser) -> bool {
    p.at_contextual("async") && p.nth(1) == SyntaxKind::FUNCTION_KW && !p.line_break_before_nth(1)
}

pub(crate) fn function_decl(p: &mut Parser) {
    function(p, SyntaxKind::FUNCTION_DECL, true);
}

/// `export default function () {}` may omit the name
pub(crate) fn default_function_decl(p: &mut Parser) {
    function(p, SyntaxKind::FUNCTION_DECL, false);
}

pub(crate) fn function_expr(p: &mut Parser) {
    function(p, SyntaxKind::FUNCTION_EXPR, false);
}

/// Function = 'async'? 'function' '*'? Name? ParamList Block
fn function(p: &mut Parser, kind: SyntaxKind, require_name: bool) {
    p.start_node(kind);
    let is_async = p.eat_contextual("async");
    p.expect(SyntaxKind::FUNCTION_KW);
    let is_generator = p.eat(SyntaxKind::STAR);
    if p.at(SyntaxKind::IDENT) {
        patterns::name(p);
    } else if require_name {
        p.error("Unexpected token, expected function name");
    }
    function_rest(p, is_async, is_generator);
    p.finish_node();
}

/// Parameters and body, parsed in the function's own context
fn function_rest(p: &mut Parser, is_async: bool, is_generator: bool) {
    let ctx = Context {
        in_async: is_async,
        in_generator: is_generator,
        no_in: false,
    };
    p.with_ctx(ctx, |p| {
        param_list(p);
        statements::block(p);
    });
}

/// ParamList = '(' (BindingElement | RestPattern) (',' ...)* ','? ')'
fn param_list(p: &mut Parser) {
    p.start_node(SyntaxKind::PARAM_LIST);
    p.expect(SyntaxKind::L_PAREN);
    while !p.at_eof() && !p.at(SyntaxKind::R_PAREN) {
        if p.at(SyntaxKind::DOT_DOT_DOT) {
            patterns::rest_pattern(p);
        } else {
            patterns::binding_element(p);
        }
        if !p.at(SyntaxKind::R_PAREN) && !p.expect(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_PAREN);
    p.finish_node();
}

/// Whether an arrow function starts at the cursor:
/// `x =>`, `(...) =>`, `async x =>`, `async (...) =>`
pub(crate) fn at_arrow(p: &Parser) -> bool {
    let start = if p.at_contextual("async")
        && matches!(p.nth(1), SyntaxKind::IDENT | SyntaxKind::L_PAREN)
        && !p.line_break_before_nth(1)
    {
        1
    } else {
        0
    };
    let arrow_at = match p.nth(start) {
        SyntaxKind::IDENT => start + 1,
        SyntaxKind::L_PAREN => p.after_group(start),
        _ => return false,
    };
    p.nth(arrow_at) == SyntaxKind::FAT_ARROW && !p.line_break_before_nth(arrow_at)
}

/// Arrow = 'async'? (Name | ParamList) '=>' (Block | AssignmentExpr)
pub(crate) fn arrow_function(p: &mut Parser) {
    p.start_node(SyntaxKind::ARROW_FUNCTION);
    let is_async = p.at_contextual("async") && p.nth(1) != SyntaxKind::FAT_ARROW;
    if is_async {
        p.bump();
    }
    let ctx = Context {
        in_async: is_async,
        in_generator: false,
        no_in: p.ctx.no_in,
    };
    p.with_ctx(ctx, |p| {
        if p.at(SyntaxKind::IDENT) {
            p.start_node(SyntaxKind::PARAM_LIST);
            patterns::name(p);
            p.finish_node();
        } else {
            param_list(p);
        }
        p.expect(SyntaxKind::FAT_ARROW);
        if p.at(SyntaxKind::L_BRACE) {
            p.with_in(statements::block);
        } else {
            expressions::assignment_expr(p);
        }
    });
    p.finish_node();
}

/// Wrap an already parsed key (from `checkpoint`) into a METHOD
pub(crate) fn method_tail(p: &mut Parser, checkpoint: Checkpoint, is_async: bool, is_generator: bool) {
    p.start_node_at(checkpoint, SyntaxKind::METHOD);
    function_rest(p, is_async, is_generator);
    p.finish_node();
}

pub(crate) fn class_decl(p: &mut Parser) {
    class(p, SyntaxKind::CLASS_DECL, true);
}

pub(crate) fn default_class_decl(p: &mut Parser) {
    class(p, SyntaxKind::CLASS_DECL, false);
}

pub(crate) fn class_expr(p: &mut Parser) {
    class(p, SyntaxKind::CLASS_EXPR, false);
}

/// Class = 'class' Name? ('extends' LeftHandSideExpr)? ClassBody
fn class(p: &mut Parser, kind: SyntaxKind, require_name: bool) {
    p.start_node(kind);
    p.bump(); // class
    if p.at(SyntaxKind::IDENT) {
        patterns::name(p);
    } else if require_name {
        p.error("Unexpected token, expected class name");
    }
    if p.at(SyntaxKind::EXTENDS_KW) {
        p.start_node(SyntaxKind::CLASS_HERITAGE);
        p.bump();
        expressions::lhs_expr(p);
        p.finish_node();
    }
    class_body(p);
    p.finish_node();
}

fn class_body(p: &mut Parser) {
    p.start_node(SyntaxKind::CLASS_BODY);
    p.expect(SyntaxKind::L_BRACE);
    while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        if p.eat(SyntaxKind::SEMICOLON) {
            continue;
        }
        let before = p.progress();
        class_member(p);
        if p.progress() == before {
            p.error_skip("Unexpected token");
        }
    }
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// Tokens that can follow a modifier word when it really is a modifier
fn starts_member_key(kind: SyntaxKind) -> bool {
    expressions::starts_property_key(kind) || kind == SyntaxKind::STAR
}

fn class_member(p: &mut Parser) {
    let checkpoint = p.checkpoint();

    if p.at_contextual("static") && p.nth(1) == SyntaxKind::L_BRACE {
        p.start_node(SyntaxKind::STATIC_BLOCK);
        p.bump();
        p.with_ctx(Context::default(), statements::block);
        p.finish_node();
        return;
    }
    if p.at_contextual("static") && starts_member_key(p.nth(1)) {
        p.bump();
    }

    if (p.at_contextual("get") || p.at_contextual("set"))
        && expressions::starts_property_key(p.nth(1))
    {
        p.bump();
        expressions::property_key(p);
        method_tail(p, checkpoint, false, false);
        return;
    }

    let is_async = p.at_contextual("async")
        && starts_member_key(p.nth(1))
        && !p.line_break_before_nth(1);
    if is_async {
        p.bump();
    }
    let is_generator = p.eat(SyntaxKind::STAR);

    expressions::property_key(p);
    if is_async || is_generator || p.at(SyntaxKind::L_PAREN) {
        method_tail(p, checkpoint, is_async, is_generator);
        return;
    }

    // Field: key ('=' AssignmentExpr)? ';'
    p.start_node_at(checkpoint, SyntaxKind::CLASS_FIELD);
    if p.eat(SyntaxKind::EQ) {
        p.with_ctx(Context::default(), expressions::assignment_expr);
    }
    p.eat_semicolon();
    p.finish_node();
}
