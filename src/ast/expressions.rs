use std::fmt::{self, Display};

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, Node};

// LITERALS

/// Identifier Expression
/// Represents a name in the AST.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub token: Token,
    pub value: String,
}

impl IdentifierExpr {
    pub fn new(token: Token) -> Self {
        IdentifierExpr {
            value: token.value.clone(),
            token,
        }
    }
}

impl Node for IdentifierExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// Represents a signed 64-bit integer literal in the AST.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a unary operator (`-` or `!`) applied to an operand.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// Represents a binary operation between two expressions in the AST.
///
/// The node's token is the operator token, so `token_literal` is the operator.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}
