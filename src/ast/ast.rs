use std::{
    fmt::{self, Debug, Display},
    slice::Iter,
};

use crate::Span;

use super::{
    expressions::{IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Implemented by every node of the tree, including [`Stmt`], [`Expr`] and
/// [`Program`] themselves.
pub trait Node: Debug + Display {
    /// Literal text of the token that introduced this node.
    fn token_literal(&self) -> &str;
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
}

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    LetStmt,
    ReturnStmt,
    ExpressionStmt,
}

/// Statement
///
/// Closed set of statement kinds. Each variant exclusively owns its node.
#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Let(_) => StmtType::LetStmt,
            Stmt::Return(_) => StmtType::ReturnStmt,
            Stmt::Expression(_) => StmtType::ExpressionStmt,
        }
    }

    fn as_node(&self) -> &dyn Node {
        match self {
            Stmt::Let(stmt) => stmt,
            Stmt::Return(stmt) => stmt,
            Stmt::Expression(stmt) => stmt,
        }
    }
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        self.as_node().token_literal()
    }
    fn get_span(&self) -> &Span {
        self.as_node().get_span()
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_node(), f)
    }
}

/// Expression Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Identifier,
    Integer,
    Prefix,
    Infix,
}

/// Expression
///
/// Closed set of expression kinds produced by the prefix and infix rules.
#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::Integer(_) => ExprType::Integer,
            Expr::Prefix(_) => ExprType::Prefix,
            Expr::Infix(_) => ExprType::Infix,
        }
    }

    fn as_node(&self) -> &dyn Node {
        match self {
            Expr::Identifier(expr) => expr,
            Expr::Integer(expr) => expr,
            Expr::Prefix(expr) => expr,
            Expr::Infix(expr) => expr,
        }
    }
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        self.as_node().token_literal()
    }
    fn get_span(&self) -> &Span {
        self.as_node().get_span()
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_node(), f)
    }
}

/// Program
///
/// Root of the tree: the statements of one source, in order.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn new(statements: Vec<Stmt>, span: Span) -> Self {
        Program { statements, span }
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    // Empty for an empty program; only diagnostics and tests rely on this.
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Span covering `start` through `end`.
pub fn span_between(start: &Span, end: &Span) -> Span {
    Span {
        start: start.start.clone(),
        end: end.end.clone(),
    }
}

