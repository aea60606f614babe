//! Statement parsing

use super::{expressions, functions, patterns};
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

/// Statement = Block | Declaration | ControlFlow | ExpressionStatement
pub(crate) fn statement(p: &mut Parser) {
    match p.current_kind() {
        SyntaxKind::L_BRACE => block(p),
        SyntaxKind::VAR_KW | SyntaxKind::CONST_KW => var_decl(p, true),
        SyntaxKind::IDENT if at_let_declaration(p) => var_decl(p, true),
        SyntaxKind::FUNCTION_KW => functions::function_decl(p),
        SyntaxKind::IDENT if functions::at_async_function(p) => functions::function_decl(p),
        SyntaxKind::CLASS_KW => functions::class_decl(p),
        SyntaxKind::IF_KW => if_stmt(p),
        SyntaxKind::FOR_KW => for_stmt(p),
        SyntaxKind::WHILE_KW => while_stmt(p),
        SyntaxKind::DO_KW => do_while_stmt(p),
        SyntaxKind::SWITCH_KW => switch_stmt(p),
        SyntaxKind::TRY_KW => try_stmt(p),
        SyntaxKind::RETURN_KW => return_stmt(p),
        SyntaxKind::THROW_KW => throw_stmt(p),
        SyntaxKind::BREAK_KW => jump_stmt(p, SyntaxKind::BREAK_STMT),
        SyntaxKind::CONTINUE_KW => jump_stmt(p, SyntaxKind::CONTINUE_STMT),
        SyntaxKind::WITH_KW => with_stmt(p),
        SyntaxKind::DEBUGGER_KW => {
            p.start_node(SyntaxKind::DEBUGGER_STMT);
            p.bump();
            p.eat_semicolon();
            p.finish_node();
        }
        SyntaxKind::SEMICOLON => {
            p.start_node(SyntaxKind::EMPTY_STMT);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::IMPORT_KW | SyntaxKind::EXPORT_KW if !at_import_expression(p) => {
            p.error_skip("'import' and 'export' may only appear at the top level");
        }
        SyntaxKind::IDENT if p.nth(1) == SyntaxKind::COLON => labeled_stmt(p),
        _ => expr_stmt(p),
    }
}

/// `import(...)` and `import.meta` are expressions, not declarations
pub(crate) fn at_import_expression(p: &Parser) -> bool {
    p.at(SyntaxKind::IMPORT_KW) && matches!(p.nth(1), SyntaxKind::L_PAREN | SyntaxKind::DOT)
}

/// `let` starts a declaration only when a binding follows it
pub(crate) fn at_let_declaration(p: &Parser) -> bool {
    p.at_contextual("let")
        && matches!(
            p.nth(1),
            SyntaxKind::IDENT | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE
        )
}

/// Block = '{' Statement* '}'
pub(crate) fn block(p: &mut Parser) {
    p.start_node(SyntaxKind::BLOCK_STMT);
    p.expect(SyntaxKind::L_BRACE);
    statements_until(p, SyntaxKind::R_BRACE);
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

fn statements_until(p: &mut Parser, end: SyntaxKind) {
    while !p.at_eof() && !p.at(end) {
        let before = p.progress();
        statement(p);
        if p.progress() == before {
            p.error_skip("Unexpected token");
        }
    }
}

/// VarDecl = ('var' | 'let' | 'const') Declarator (',' Declarator)* ';'?
///
/// `with_semicolon` is false inside `for (...)` heads.
pub(crate) fn var_decl(p: &mut Parser, with_semicolon: bool) {
    p.start_node(SyntaxKind::VAR_DECL);
    p.bump(); // var / let / const
    loop {
        p.start_node(SyntaxKind::VAR_DECLARATOR);
        patterns::binding_target(p);
        if p.eat(SyntaxKind::EQ) {
            expressions::assignment_expr(p);
        }
        p.finish_node();
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    if with_semicolon {
        p.eat_semicolon();
    }
    p.finish_node();
}

fn expr_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::EXPR_STMT);
    expressions::expr(p);
    p.eat_semicolon();
    p.finish_node();
}

/// Parenthesized condition of if / while / switch / with
fn paren_condition(p: &mut Parser) {
    p.expect(SyntaxKind::L_PAREN);
    p.with_in(expressions::expr);
    p.expect(SyntaxKind::R_PAREN);
}

fn if_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::IF_STMT);
    p.bump(); // if
    paren_condition(p);
    statement(p);
    if p.eat(SyntaxKind::ELSE_KW) {
        statement(p);
    }
    p.finish_node();
}

/// For = 'for' 'await'? '(' Head ')' Statement
///
/// The node kind (`FOR_STMT`, `FOR_IN_STMT`, `FOR_OF_STMT`) is only known
/// after the head's first clause, so the node is opened retroactively.
fn for_stmt(p: &mut Parser) {
    let checkpoint = p.checkpoint();
    p.bump(); // for
    p.eat_contextual("await");
    p.expect(SyntaxKind::L_PAREN);

    let no_in = crate::parser::parser::Context {
        no_in: true,
        ..p.ctx
    };
    p.with_ctx(no_in, |p| {
        if p.at(SyntaxKind::SEMICOLON) {
            return;
        }
        if p.at_any(&[SyntaxKind::VAR_KW, SyntaxKind::CONST_KW]) || at_let_declaration(p) {
            var_decl(p, false);
        } else {
            expressions::expr(p);
        }
    });

    let kind = if p.at(SyntaxKind::IN_KW) {
        SyntaxKind::FOR_IN_STMT
    } else if p.at_contextual("of") {
        SyntaxKind::FOR_OF_STMT
    } else {
        SyntaxKind::FOR_STMT
    };
    p.start_node_at(checkpoint, kind);

    match kind {
        SyntaxKind::FOR_IN_STMT => {
            p.bump();
            p.with_in(expressions::expr);
        }
        SyntaxKind::FOR_OF_STMT => {
            p.bump();
            p.with_in(expressions::assignment_expr);
        }
        _ => {
            p.expect(SyntaxKind::SEMICOLON);
            if !p.at(SyntaxKind::SEMICOLON) {
                p.with_in(expressions::expr);
            }
            p.expect(SyntaxKind::SEMICOLON);
            if !p.at(SyntaxKind::R_PAREN) {
                p.with_in(expressions::expr);
            }
        }
    }

    p.expect(SyntaxKind::R_PAREN);
    statement(p);
    p.finish_node();
}

fn while_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::WHILE_STMT);
    p.bump(); // while
    paren_condition(p);
    statement(p);
    p.finish_node();
}

fn do_while_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::DO_WHILE_STMT);
    p.bump(); // do
    statement(p);
    p.expect(SyntaxKind::WHILE_KW);
    paren_condition(p);
    // The semicolon after do-while is always optional
    p.eat(SyntaxKind::SEMICOLON);
    p.finish_node();
}

fn with_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::WITH_STMT);
    p.bump(); // with
    paren_condition(p);
    statement(p);
    p.finish_node();
}

/// Switch = 'switch' '(' Expr ')' '{' SwitchCase* '}'
fn switch_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::SWITCH_STMT);
    p.bump(); // switch
    paren_condition(p);
    p.expect(SyntaxKind::L_BRACE);
    while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        if !p.at_any(&[SyntaxKind::CASE_KW, SyntaxKind::DEFAULT_KW]) {
            p.error_skip("Unexpected token, expected case or default");
            continue;
        }
        p.start_node(SyntaxKind::SWITCH_CASE);
        if p.eat(SyntaxKind::CASE_KW) {
            p.with_in(expressions::expr);
        } else {
            p.bump(); // default
        }
        p.expect(SyntaxKind::COLON);
        while !p.at_eof()
            && !p.at_any(&[SyntaxKind::CASE_KW, SyntaxKind::DEFAULT_KW, SyntaxKind::R_BRACE])
        {
            let before = p.progress();
            statement(p);
            if p.progress() == before {
                p.error_skip("Unexpected token");
            }
        }
        p.finish_node();
    }
    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// Try = 'try' Block Catch? Finally?
fn try_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::TRY_STMT);
    p.bump(); // try
    block(p);

    let has_catch = p.at(SyntaxKind::CATCH_KW);
    if has_catch {
        p.start_node(SyntaxKind::CATCH_CLAUSE);
        p.bump(); // catch
        // Optional catch binding: `catch { ... }`
        if p.eat(SyntaxKind::L_PAREN) {
            patterns::binding_target(p);
            p.expect(SyntaxKind::R_PAREN);
        }
        block(p);
        p.finish_node();
    }

    if p.at(SyntaxKind::FINALLY_KW) {
        p.start_node(SyntaxKind::FINALLY_CLAUSE);
        p.bump(); // finally
        block(p);
        p.finish_node();
    } else if !has_catch {
        p.error("Missing catch or finally clause");
    }
    p.finish_node();
}

/// Return = 'return' Expr? ';' (allowed outside functions)
fn return_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::RETURN_STMT);
    p.bump(); // return
    if !expressions::at_expression_end(p) && !p.has_line_break_before() {
        p.with_in(expressions::expr);
    }
    p.eat_semicolon();
    p.finish_node();
}

fn throw_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::THROW_STMT);
    p.bump(); // throw
    if p.has_line_break_before() {
        p.error("Illegal newline after throw");
    }
    p.with_in(expressions::expr);
    p.eat_semicolon();
    p.finish_node();
}

/// Break / Continue = keyword Label? ';'
fn jump_stmt(p: &mut Parser, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump(); // break / continue
    if p.at(SyntaxKind::IDENT) && !p.has_line_break_before() {
        p.start_node(SyntaxKind::LABEL);
        p.bump();
        p.finish_node();
    }
    p.eat_semicolon();
    p.finish_node();
}

fn labeled_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::LABELED_STMT);
    p.start_node(SyntaxKind::LABEL);
    p.bump();
    p.finish_node();
    p.bump(); // :
    statement(p);
    p.finish_node();
}
