//! Parser state and token cursor.
//!
//! The parser keeps exactly two tokens of the stream in view: the token being
//! parsed (`current`) and the one after it (`peek`). Statement and expression
//! rules live in `stmt` and `expr` and drive the cursor through the methods
//! defined here.
//!
//! Malformed input never aborts the pass. Rules record a diagnostic and
//! return `None`, and `parse_program` moves on to the next statement.

use std::mem;

use log::{debug, trace};

use crate::{
    ast::ast::{Node, Program, Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenSource},
    Position, Span,
};

use super::{lookups::BindingPower, stmt::parse_stmt};

/// Deepest expression tree the parser will build. Bounds native recursion
/// while parsing and while dropping or printing the tree.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<S> {
    /// Where tokens are pulled from, strictly left to right
    source: S,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
    /// Nesting level of the expression being parsed
    depth: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser over `source` with the lookahead window primed.
    ///
    /// Pass `&mut lexer` to keep ownership of the stream with the caller.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        Parser {
            source,
            current,
            peek,
            errors: vec![],
            depth: 0,
        }
    }

    /// Parses statements until the current token is `EOF`.
    ///
    /// Always returns a program; statements that failed to parse are left
    /// out and explained in [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let start = self.current.span.start.clone();
        let mut statements: Vec<Stmt> = vec![];

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                debug!("parsed {:?}: {}", stmt.get_stmt_type(), stmt);
                statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            statements.len(),
            self.errors.len()
        );

        let program = Program::new(
            statements,
            Span {
                start,
                end: self.current.span.end.clone(),
            },
        );
        trace!("program literal: {:?}", program.token_literal());

        program
    }

    /// Moves the window one token forward.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = mem::replace(&mut self.peek, next);
        trace!("current token: {} {:?}", self.current.kind, self.current.value);
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances onto the peek token if it is of `kind`.
    ///
    /// Otherwise records a peek mismatch and leaves the cursor where it is.
    /// Every mandatory token goes through here.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub fn current_binding_power(&self) -> BindingPower {
        BindingPower::of(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        BindingPower::of(self.peek.kind)
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = ErrorImpl::UnexpectedPeek {
            expected,
            actual: self.peek.kind,
        };
        let position = self.peek.span.start.clone();
        self.push_error(error, position);
    }

    /// Descends one expression level.
    ///
    /// Past [`MAX_NESTING_DEPTH`] records a diagnostic at the current token and
    /// returns `false` without descending.
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            let position = self.get_position();
            self.push_error(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                position,
            );
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn nesting_depth(&self) -> usize {
        self.depth
    }

    pub fn restore_nesting(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Appends a diagnostic to the collector.
    pub fn push_error(&mut self, error: ErrorImpl, position: Position) {
        let error = Error::new(error, position);
        debug!("parse error at {}: {}", error.get_position().0, error);
        self.errors.push(error);
    }

    /// Diagnostic texts recorded so far, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Structured diagnostics recorded so far, oldest first.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Consumes the parser, handing over its diagnostics.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }
}
