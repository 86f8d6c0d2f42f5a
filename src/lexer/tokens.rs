use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("return", TokenKind::Return);
        map.insert("fn", TokenKind::Function);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Identifier,
    Integer,

    Assignment, // =
    Plus,
    Dash,
    Star,
    Slash,
    Not,        // !
    Equals,     // ==
    NotEquals,  // !=
    Less,
    Greater,

    Comma,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Let,
    Return,
    Function,
}

impl TokenKind {
    /// Returns true for the binary operators of the expression grammar.
    pub fn is_infix_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Dash
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::Greater
        )
    }
}

// These names appear verbatim in diagnostics.
impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::Assignment => "=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Not => "!",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Let => "LET",
            TokenKind::Return => "RETURN",
            TokenKind::Function => "FUNCTION",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Pull-based source of tokens consumed by the parser.
///
/// Implementations hand out tokens strictly left to right and keep returning
/// an `EOF` token once the input is exhausted.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}
