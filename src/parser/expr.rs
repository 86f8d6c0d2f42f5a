use crate::{
    ast::{
        ast::{span_between, Expr, Node},
        expressions::{IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{
    lookups::{led_lookup, nud_lookup, BindingPower},
    parser::Parser,
};

pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>, bp: BindingPower) -> Option<Expr> {
    let depth = parser.nesting_depth();
    let expr = parse_nested_expr(parser, bp);
    parser.restore_nesting(depth);

    expr
}

fn parse_nested_expr<S: TokenSource>(parser: &mut Parser<S>, bp: BindingPower) -> Option<Expr> {
    if !parser.enter_nesting() {
        return None;
    }

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = nud_lookup::<S>(token_kind) else {
        let position = parser.get_position();
        parser.push_error(ErrorImpl::NoPrefixParseFn { kind: token_kind }, position);
        return None;
    };

    let mut left = nud(parser)?;

    // Strictly greater keeps equal-precedence operators left-associative
    while !parser.peek_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let Some(led) = led_lookup::<S>(parser.peek_token().kind) else {
            return Some(left);
        };

        parser.advance();
        // Each applied operator puts `left` one level deeper
        if !parser.enter_nesting() {
            return None;
        }
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    Some(Expr::Identifier(IdentifierExpr::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerExpr { token, value })),
        Err(_) => {
            let position = token.span.start.clone();
            parser.push_error(
                ErrorImpl::IntegerParseError {
                    literal: token.value,
                },
                position,
            );
            None
        }
    }
}

pub fn parse_prefix_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Unary)?;

    Some(Expr::Prefix(PrefixExpr {
        span: span_between(&operator_token.span, right.get_span()),
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Expr,
    bp: BindingPower,
) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix(InfixExpr {
        span: span_between(left.get_span(), right.get_span()),
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
