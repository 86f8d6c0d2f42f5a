use std::fmt::{self, Display};

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, Node},
    expressions::IdentifierExpr,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: IdentifierExpr,
    pub value: Expr,
    pub span: Span,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {};", self.token.value, self.name, self.value)
    }
}

/// `return <value>;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
    pub span: Span,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.token.value, self.value)
    }
}

/// A bare expression used as a statement; the trailing `;` is optional.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
    pub span: Span,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}
