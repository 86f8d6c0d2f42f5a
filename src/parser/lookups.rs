use crate::{
    ast::ast::Expr,
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{
    expr::{parse_identifier_expr, parse_infix_expr, parse_integer_expr, parse_prefix_expr},
    parser::Parser,
};

/// Operator precedence, ordered lowest to highest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,       // == !=
    Relational,     // < >
    Additive,       // + -
    Multiplicative, // * /
    Unary,          // -x !x
    Call,           // reserved
}

impl BindingPower {
    /// Precedence of `kind` in infix position. Tokens without an infix rule
    /// resolve to `Default`, which ends any expression loop.
    pub const fn of(kind: TokenKind) -> BindingPower {
        match kind {
            TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equality,
            TokenKind::Less | TokenKind::Greater => BindingPower::Relational,
            TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
            TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
            _ => BindingPower::Default,
        }
    }
}

pub type NUDHandler<S> = fn(&mut Parser<S>) -> Option<Expr>;
pub type LEDHandler<S> = fn(&mut Parser<S>, Expr, BindingPower) -> Option<Expr>;

/// Prefix (null denotation) rule for a token starting an expression.
pub fn nud_lookup<S: TokenSource>(kind: TokenKind) -> Option<NUDHandler<S>> {
    match kind {
        TokenKind::Identifier => Some(parse_identifier_expr::<S> as NUDHandler<S>),
        TokenKind::Integer => Some(parse_integer_expr::<S> as NUDHandler<S>),
        TokenKind::Dash | TokenKind::Not => Some(parse_prefix_expr::<S> as NUDHandler<S>),
        _ => None,
    }
}

/// Infix (left denotation) rule for a token following a complete operand.
pub fn led_lookup<S: TokenSource>(kind: TokenKind) -> Option<LEDHandler<S>> {
    if kind.is_infix_operator() {
        Some(parse_infix_expr::<S> as LEDHandler<S>)
    } else {
        None
    }
}
