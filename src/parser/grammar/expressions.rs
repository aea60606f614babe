//! Expression parsing
//!
//! Precedence climbing over a rowan checkpoint: each binary operator wraps
//! everything parsed since the start of its left operand, so left
//! associativity falls out of reusing the same checkpoint in a loop.

use super::{functions, statements};
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

/// Expression = AssignmentExpr (',' AssignmentExpr)*
pub(crate) fn expr(p: &mut Parser) {
    let checkpoint = p.checkpoint();
    assignment_expr(p);
    if p.at(SyntaxKind::COMMA) {
        p.start_node_at(checkpoint, SyntaxKind::SEQUENCE_EXPR);
        while p.eat(SyntaxKind::COMMA) {
            assignment_expr(p);
        }
        p.finish_node();
    }
}

/// Tokens after which an optional operand is absent
pub(crate) fn at_expression_end(p: &Parser) -> bool {
    p.at_eof()
        || p.at_any(&[
            SyntaxKind::SEMICOLON,
            SyntaxKind::R_BRACE,
            SyntaxKind::R_PAREN,
            SyntaxKind::R_BRACKET,
            SyntaxKind::COMMA,
            SyntaxKind::COLON,
        ])
}

/// AssignmentExpr = Arrow | Yield | ConditionalExpr (AssignOp AssignmentExpr)?
pub(crate) fn assignment_expr(p: &mut Parser) {
    if functions::at_arrow(p) {
        functions::arrow_function(p);
        return;
    }
    if p.ctx.in_generator && p.at_contextual("yield") {
        yield_expr(p);
        return;
    }

    let checkpoint = p.checkpoint();
    conditional_expr(p);
    if !p.at_eof() && p.current_kind().is_assign_op() {
        p.start_node_at(checkpoint, SyntaxKind::ASSIGN_EXPR);
        p.bump();
        assignment_expr(p);
        p.finish_node();
    }
}

fn yield_expr(p: &mut Parser) {
    p.start_node(SyntaxKind::YIELD_EXPR);
    p.bump(); // yield
    let delegate = p.eat(SyntaxKind::STAR);
    if delegate || (!p.has_line_break_before() && !at_expression_end(p)) {
        assignment_expr(p);
    }
    p.finish_node();
}

fn conditional_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint();
    binary_expr(p, 1);
    if p.at(SyntaxKind::QUESTION) {
        p.start_node_at(checkpoint, SyntaxKind::CONDITIONAL_EXPR);
        p.bump();
        p.with_in(assignment_expr);
        p.expect(SyntaxKind::COLON);
        assignment_expr(p);
        p.finish_node();
    }
}

/// Binding power of the binary operator at the cursor
fn binary_precedence(p: &Parser) -> Option<u8> {
    if p.at_eof() {
        return None;
    }
    let prec = match p.current_kind() {
        SyntaxKind::QUESTION_QUESTION => 1,
        SyntaxKind::PIPE_PIPE => 2,
        SyntaxKind::AMP_AMP => 3,
        SyntaxKind::PIPE => 4,
        SyntaxKind::CARET => 5,
        SyntaxKind::AMP => 6,
        SyntaxKind::EQ_EQ | SyntaxKind::BANG_EQ | SyntaxKind::EQ_EQ_EQ | SyntaxKind::BANG_EQ_EQ => 7,
        SyntaxKind::IN_KW if p.ctx.no_in => return None,
        SyntaxKind::LT
        | SyntaxKind::GT
        | SyntaxKind::LT_EQ
        | SyntaxKind::GT_EQ
        | SyntaxKind::INSTANCEOF_KW
        | SyntaxKind::IN_KW => 8,
        SyntaxKind::SHL | SyntaxKind::SHR | SyntaxKind::USHR => 9,
        SyntaxKind::PLUS | SyntaxKind::MINUS => 10,
        SyntaxKind::STAR | SyntaxKind::SLASH | SyntaxKind::PERCENT => 11,
        SyntaxKind::STAR_STAR => 12,
        _ => return None,
    };
    Some(prec)
}

fn binary_expr(p: &mut Parser, min_prec: u8) {
    let checkpoint = p.checkpoint();
    if p.at(SyntaxKind::PRIVATE_NAME) && p.nth(1) == SyntaxKind::IN_KW {
        // `#field in obj`
        p.start_node(SyntaxKind::LITERAL);
        p.bump();
        p.finish_node();
    } else {
        unary_expr(p);
    }

    while let Some(prec) = binary_precedence(p) {
        if prec < min_prec {
            break;
        }
        // `**` is right-associative
        let next = if p.at(SyntaxKind::STAR_STAR) { prec } else { prec + 1 };
        p.start_node_at(checkpoint, SyntaxKind::BINARY_EXPR);
        p.bump();
        binary_expr(p, next);
        p.finish_node();
    }
}

fn unary_expr(p: &mut Parser) {
    match p.current_kind() {
        SyntaxKind::DELETE_KW
        | SyntaxKind::VOID_KW
        | SyntaxKind::TYPEOF_KW
        | SyntaxKind::PLUS
        | SyntaxKind::MINUS
        | SyntaxKind::TILDE
        | SyntaxKind::BANG => {
            p.start_node(SyntaxKind::UNARY_EXPR);
            p.bump();
            unary_expr(p);
            p.finish_node();
        }
        SyntaxKind::PLUS_PLUS | SyntaxKind::MINUS_MINUS => {
            p.start_node(SyntaxKind::UPDATE_EXPR);
            p.bump();
            unary_expr(p);
            p.finish_node();
        }
        SyntaxKind::IDENT if p.ctx.in_async && p.at_contextual("await") => {
            p.start_node(SyntaxKind::AWAIT_EXPR);
            p.bump();
            unary_expr(p);
            p.finish_node();
        }
        _ => postfix_expr(p),
    }
}

fn postfix_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint();
    lhs_expr(p);
    if p.at_any(&[SyntaxKind::PLUS_PLUS, SyntaxKind::MINUS_MINUS]) && !p.has_line_break_before() {
        p.start_node_at(checkpoint, SyntaxKind::UPDATE_EXPR);
        p.bump();
        p.finish_node();
    }
}

/// LeftHandSideExpr = (NewExpr | PrimaryExpr) Suffix*
pub(crate) fn lhs_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint();
    if p.at(SyntaxKind::NEW_KW) {
        new_expr(p);
    } else {
        primary_expr(p);
    }
    suffixes(p, checkpoint, true);
}

fn new_expr(p: &mut Parser) {
    if p.nth(1) == SyntaxKind::DOT {
        // new.target
        p.start_node(SyntaxKind::META_PROPERTY);
        p.bump();
        p.bump();
        property_name(p);
        p.finish_node();
        return;
    }

    p.start_node(SyntaxKind::NEW_EXPR);
    p.bump(); // new
    let callee = p.checkpoint();
    if p.at(SyntaxKind::NEW_KW) {
        new_expr(p);
    } else {
        primary_expr(p);
    }
    // The first argument list belongs to `new`, not to a call
    suffixes(p, callee, false);
    if p.at(SyntaxKind::L_PAREN) {
        arg_list(p);
    }
    p.finish_node();
}

/// Member access, indexing, calls and tagged templates
fn suffixes(p: &mut Parser, checkpoint: rowan::Checkpoint, allow_call: bool) {
    loop {
        match p.current_kind() {
            _ if p.at_eof() => break,
            SyntaxKind::DOT => {
                p.start_node_at(checkpoint, SyntaxKind::MEMBER_EXPR);
                p.bump();
                property_name(p);
                p.finish_node();
            }
            SyntaxKind::QUESTION_DOT => match p.nth(1) {
                SyntaxKind::L_BRACKET => {
                    p.start_node_at(checkpoint, SyntaxKind::INDEX_EXPR);
                    p.bump();
                    index_tail(p);
                    p.finish_node();
                }
                SyntaxKind::L_PAREN => {
                    p.start_node_at(checkpoint, SyntaxKind::CALL_EXPR);
                    p.bump();
                    arg_list(p);
                    p.finish_node();
                }
                _ => {
                    p.start_node_at(checkpoint, SyntaxKind::MEMBER_EXPR);
                    p.bump();
                    property_name(p);
                    p.finish_node();
                }
            },
            SyntaxKind::L_BRACKET => {
                p.start_node_at(checkpoint, SyntaxKind::INDEX_EXPR);
                index_tail(p);
                p.finish_node();
            }
            SyntaxKind::L_PAREN if allow_call => {
                p.start_node_at(checkpoint, SyntaxKind::CALL_EXPR);
                arg_list(p);
                p.finish_node();
            }
            SyntaxKind::TEMPLATE_HEAD | SyntaxKind::TEMPLATE_TAIL
                if p.current_text().starts_with('`') =>
            {
                p.start_node_at(checkpoint, SyntaxKind::TAGGED_TEMPLATE);
                template_literal(p);
                p.finish_node();
            }
            _ => break,
        }
    }
}

fn index_tail(p: &mut Parser) {
    p.expect(SyntaxKind::L_BRACKET);
    p.with_in(expr);
    p.expect(SyntaxKind::R_BRACKET);
}

/// The name after `.` or `?.`: any IdentifierName, reserved words included
fn property_name(p: &mut Parser) {
    if p.current_kind().is_identifier_name() || p.at(SyntaxKind::PRIVATE_NAME) {
        p.start_node(SyntaxKind::PROPERTY_NAME);
        p.bump();
        p.finish_node();
    } else {
        p.error("Unexpected token");
    }
}

/// ArgList = '(' (AssignmentExpr | '...' AssignmentExpr) (',' ...)* ','? ')'
pub(crate) fn arg_list(p: &mut Parser) {
    p.start_node(SyntaxKind::ARG_LIST);
    p.expect(SyntaxKind::L_PAREN);
    p.with_in(|p| {
        while !p.at_eof() && !p.at(SyntaxKind::R_PAREN) {
            if p.at(SyntaxKind::DOT_DOT_DOT) {
                spread_element(p);
            } else {
                assignment_expr(p);
            }
            if !p.at(SyntaxKind::R_PAREN) && !p.expect(SyntaxKind::COMMA) {
                break;
            }
        }
    });
    p.expect(SyntaxKind::R_PAREN);
    p.finish_node();
}

fn spread_element(p: &mut Parser) {
    p.start_node(SyntaxKind::SPREAD_ELEMENT);
    p.bump(); // ...
    assignment_expr(p);
    p.finish_node();
}

fn primary_expr(p: &mut Parser) {
    match p.current_kind() {
        _ if p.at_eof() => p.error("Unexpected token"),
        SyntaxKind::THIS_KW => {
            p.start_node(SyntaxKind::THIS_EXPR);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::SUPER_KW => {
            p.start_node(SyntaxKind::SUPER_EXPR);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::IDENT if functions::at_async_function(p) => functions::function_expr(p),
        SyntaxKind::IDENT => {
            p.start_node(SyntaxKind::NAME_REF);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::NUMBER
        | SyntaxKind::STRING
        | SyntaxKind::REGEX
        | SyntaxKind::NULL_KW
        | SyntaxKind::TRUE_KW
        | SyntaxKind::FALSE_KW => {
            p.start_node(SyntaxKind::LITERAL);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::TEMPLATE_HEAD | SyntaxKind::TEMPLATE_TAIL => template_literal(p),
        SyntaxKind::L_BRACKET => array_expr(p),
        SyntaxKind::L_BRACE => object_expr(p),
        SyntaxKind::L_PAREN => {
            p.start_node(SyntaxKind::PAREN_EXPR);
            p.bump();
            p.with_in(expr);
            p.expect(SyntaxKind::R_PAREN);
            p.finish_node();
        }
        SyntaxKind::FUNCTION_KW => functions::function_expr(p),
        SyntaxKind::CLASS_KW => functions::class_expr(p),
        SyntaxKind::IMPORT_KW if statements::at_import_expression(p) => import_expr(p),
        _ => p.error_bump("Unexpected token"),
    }
}

/// `import(specifier)` or `import.meta`
fn import_expr(p: &mut Parser) {
    if p.nth(1) == SyntaxKind::DOT {
        p.start_node(SyntaxKind::META_PROPERTY);
        p.bump();
        p.bump();
        property_name(p);
        p.finish_node();
    } else {
        p.start_node(SyntaxKind::IMPORT_CALL);
        p.bump();
        arg_list(p);
        p.finish_node();
    }
}

/// Template = TEMPLATE_TAIL | TEMPLATE_HEAD Expr (TEMPLATE_HEAD Expr)* TEMPLATE_TAIL
fn template_literal(p: &mut Parser) {
    p.start_node(SyntaxKind::TEMPLATE_LITERAL);
    loop {
        if p.eat(SyntaxKind::TEMPLATE_TAIL) {
            break;
        }
        if p.eat(SyntaxKind::TEMPLATE_HEAD) {
            p.with_in(expr);
            continue;
        }
        p.error("Unterminated template");
        break;
    }
    p.finish_node();
}

fn array_expr(p: &mut Parser) {
    p.start_node(SyntaxKind::ARRAY_EXPR);
    p.bump(); // [
    p.with_in(|p| {
        while !p.at_eof() && !p.at(SyntaxKind::R_BRACKET) {
            // Hole
            if p.eat(SyntaxKind::COMMA) {
                continue;
            }
            if p.at(SyntaxKind::DOT_DOT_DOT) {
                spread_element(p);
            } else {
                assignment_expr(p);
            }
            if !p.at(SyntaxKind::R_BRACKET) && !p.expect(SyntaxKind::COMMA) {
                break;
            }
        }
    });
    p.expect(SyntaxKind::R_BRACKET);
    p.finish_node();
}

pub(crate) fn object_expr(p: &mut Parser) {
    p.start_node(SyntaxKind::OBJECT_EXPR);
    p.bump(); // {
    p.with_in(|p| {
        while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
            object_member(p);
            if !p.at(SyntaxKind::R_BRACE) && !p.expect(SyntaxKind::COMMA) {
                break;
            }
        }
    });
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// Tokens that can begin a property key
pub(crate) fn starts_property_key(kind: SyntaxKind) -> bool {
    kind.is_identifier_name()
        || matches!(
            kind,
            SyntaxKind::STRING | SyntaxKind::NUMBER | SyntaxKind::L_BRACKET | SyntaxKind::PRIVATE_NAME
        )
}

fn object_member(p: &mut Parser) {
    if p.at(SyntaxKind::DOT_DOT_DOT) {
        spread_element(p);
        return;
    }

    let checkpoint = p.checkpoint();
    if (p.at_contextual("get") || p.at_contextual("set")) && starts_property_key(p.nth(1)) {
        p.bump();
        property_key(p);
        functions::method_tail(p, checkpoint, false, false);
        return;
    }

    let is_async = p.at_contextual("async")
        && (starts_property_key(p.nth(1)) || p.nth(1) == SyntaxKind::STAR)
        && !p.line_break_before_nth(1);
    if is_async {
        p.bump();
    }
    let is_generator = p.eat(SyntaxKind::STAR);
    if is_async || is_generator {
        property_key(p);
        functions::method_tail(p, checkpoint, is_async, is_generator);
        return;
    }

    // Shorthand `{ a }` or, in assignment targets, `{ a = 1 }`
    if p.at(SyntaxKind::IDENT)
        && matches!(p.nth(1), SyntaxKind::COMMA | SyntaxKind::R_BRACE | SyntaxKind::EQ)
    {
        p.start_node(SyntaxKind::OBJECT_PROPERTY);
        p.start_node(SyntaxKind::NAME_REF);
        p.bump();
        p.finish_node();
        if p.eat(SyntaxKind::EQ) {
            assignment_expr(p);
        }
        p.finish_node();
        return;
    }

    property_key(p);
    if p.at(SyntaxKind::L_PAREN) {
        functions::method_tail(p, checkpoint, false, false);
        return;
    }
    p.start_node_at(checkpoint, SyntaxKind::OBJECT_PROPERTY);
    p.expect(SyntaxKind::COLON);
    assignment_expr(p);
    p.finish_node();
}

/// PropertyKey = IdentifierName | String | Number | PrivateName | '[' Expr ']'
pub(crate) fn property_key(p: &mut Parser) {
    if p.at(SyntaxKind::L_BRACKET) {
        p.start_node(SyntaxKind::COMPUTED_KEY);
        p.bump();
        p.with_in(assignment_expr);
        p.expect(SyntaxKind::R_BRACKET);
        p.finish_node();
    } else if !p.at_eof() && starts_property_key(p.current_kind()) {
        p.start_node(SyntaxKind::PROPERTY_KEY);
        p.bump();
        p.finish_node();
    } else {
        p.error_bump("Unexpected token");
    }
}
