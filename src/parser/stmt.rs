use crate::{
    ast::{
        ast::{span_between, Stmt},
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name = IdentifierExpr::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default);
    skip_optional_semicolon(parser);
    let value = value?;

    Some(Stmt::Let(LetStmt {
        span: span_between(&start_token.span, &parser.current_token().span),
        token: start_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let start_token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default);
    skip_optional_semicolon(parser);
    let value = value?;

    Some(Stmt::Return(ReturnStmt {
        span: span_between(&start_token.span, &parser.current_token().span),
        token: start_token,
        value,
    }))
}

pub fn parse_expression_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Default);
    skip_optional_semicolon(parser);
    let expression = expression?;

    Some(Stmt::Expression(ExpressionStmt {
        span: span_between(&start_token.span, &parser.current_token().span),
        token: start_token,
        expression,
    }))
}

// Trailing semicolons are optional so bare expressions like `5 + 5` parse.
// Also called after a failed expression so its `;` is not parsed again.
fn skip_optional_semicolon<S: TokenSource>(parser: &mut Parser<S>) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }
}
