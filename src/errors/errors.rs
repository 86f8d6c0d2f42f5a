use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A single parse diagnostic and where it was detected.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedPeek { .. } => "UnexpectedPeek",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedPeek {
                expected: TokenKind::Semicolon,
                ..
            } => ErrorTip::Suggestion(String::from("did you miss a semicolon?")),
            ErrorImpl::UnexpectedPeek { .. } => ErrorTip::None,
            ErrorImpl::NoPrefixParseFn { kind } if kind.is_infix_operator() => {
                ErrorTip::Suggestion(format!("`{}` needs a left operand", kind))
            }
            ErrorImpl::NoPrefixParseFn { .. } => ErrorTip::None,
            ErrorImpl::IntegerParseError { .. } => ErrorTip::Suggestion(String::from(
                "integer literals must fit in a signed 64-bit integer",
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression with intermediate `let` bindings",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Diagnostic taxonomy. The display text of each variant is part of the
/// public surface and must not change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedPeek {
        expected: TokenKind,
        actual: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
