//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and delimiters
//! - Illegal characters and end-of-input behaviour

use rstest::rstest;

use super::{
    lexer::{tokenize, Lexer},
    tokens::{TokenKind, TokenSource},
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let return fn", Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[0].value, "let");
    assert_eq!(tokens[1].kind, TokenKind::Return);
    assert_eq!(tokens[2].kind, TokenKind::Function);
    assert_eq!(tokens[2].value, "fn");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore letter", None);

    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["foo", "bar", "baz_123", "_underscore", "letter", ""]);
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 838383", None);

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[2].value, "838383");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[rstest]
#[case("=", TokenKind::Assignment)]
#[case("+", TokenKind::Plus)]
#[case("-", TokenKind::Dash)]
#[case("*", TokenKind::Star)]
#[case("/", TokenKind::Slash)]
#[case("!", TokenKind::Not)]
#[case("==", TokenKind::Equals)]
#[case("!=", TokenKind::NotEquals)]
#[case("<", TokenKind::Less)]
#[case(">", TokenKind::Greater)]
#[case(",", TokenKind::Comma)]
#[case(";", TokenKind::Semicolon)]
#[case("(", TokenKind::OpenParen)]
#[case(")", TokenKind::CloseParen)]
#[case("{", TokenKind::OpenCurly)]
#[case("}", TokenKind::CloseCurly)]
fn test_tokenize_single_symbol(#[case] source: &str, #[case] kind: TokenKind) {
    let tokens = tokenize(source, None);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, kind);
    assert_eq!(tokens[0].value, source);
}

#[test]
fn test_tokenize_statement_sequence() {
    let tokens = tokenize("let five = 5;\nfive != -10 == !x;", None);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Dash,
            TokenKind::Integer,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("let  x", Some("spans.lang".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[2].span.start.0, 6);
    assert_eq!(tokens[1].span.start.1.as_str(), "spans.lang");
}

#[test]
fn test_illegal_character_does_not_stop_lexing() {
    let tokens = tokenize("a @ b", None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "b");
}

#[test]
fn test_illegal_multibyte_character() {
    let tokens = tokenize("é1", None);

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "é");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].span.start.0, 2);
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("x", None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("   \n\t ", None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Integer.to_string(), "INT");
    assert_eq!(TokenKind::Let.to_string(), "LET");
    assert_eq!(TokenKind::NotEquals.to_string(), "!=");
    assert_eq!(TokenKind::Illegal.to_string(), "ILLEGAL");
}
