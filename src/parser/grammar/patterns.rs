//! Binding patterns

use super::expressions;
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

/// Binding identifier
pub(crate) fn name(p: &mut Parser) {
    if p.at(SyntaxKind::IDENT) {
        p.start_node(SyntaxKind::NAME);
        p.bump();
        p.finish_node();
    } else {
        p.error_bump("Unexpected token, expected identifier");
    }
}

/// BindingTarget = Name | ObjectPattern | ArrayPattern
pub(crate) fn binding_target(p: &mut Parser) {
    match p.current_kind() {
        SyntaxKind::L_BRACE if !p.at_eof() => object_pattern(p),
        SyntaxKind::L_BRACKET if !p.at_eof() => array_pattern(p),
        _ => name(p),
    }
}

/// BindingElement = BindingTarget ('=' AssignmentExpr)?
pub(crate) fn binding_element(p: &mut Parser) {
    let checkpoint = p.checkpoint();
    binding_target(p);
    if p.at(SyntaxKind::EQ) {
        p.start_node_at(checkpoint, SyntaxKind::ASSIGN_PATTERN);
        p.bump();
        p.with_in(expressions::assignment_expr);
        p.finish_node();
    }
}

/// RestPattern = '...' BindingTarget
pub(crate) fn rest_pattern(p: &mut Parser) {
    p.start_node(SyntaxKind::REST_PATTERN);
    p.bump(); // ...
    binding_target(p);
    p.finish_node();
}

fn object_pattern(p: &mut Parser) {
    p.start_node(SyntaxKind::OBJECT_PATTERN);
    p.bump(); // {
    while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        if p.at(SyntaxKind::DOT_DOT_DOT) {
            rest_pattern(p);
        } else {
            object_pattern_prop(p);
        }
        if !p.at(SyntaxKind::R_BRACE) && !p.expect(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// `a`, `a = 1`, `key: target`, `[expr]: target = 1`
fn object_pattern_prop(p: &mut Parser) {
    p.start_node(SyntaxKind::OBJECT_PATTERN_PROP);
    if p.at(SyntaxKind::IDENT) && p.nth(1) != SyntaxKind::COLON {
        binding_element(p);
    } else {
        expressions::property_key(p);
        p.expect(SyntaxKind::COLON);
        binding_element(p);
    }
    p.finish_node();
}

fn array_pattern(p: &mut Parser) {
    p.start_node(SyntaxKind::ARRAY_PATTERN);
    p.bump(); // [
    while !p.at_eof() && !p.at(SyntaxKind::R_BRACKET) {
        // Elision
        if p.eat(SyntaxKind::COMMA) {
            continue;
        }
        if p.at(SyntaxKind::DOT_DOT_DOT) {
            rest_pattern(p);
        } else {
            binding_element(p);
        }
        if !p.at(SyntaxKind::R_BRACKET) && !p.expect(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACKET);
    p.finish_node();
}
