//! Integration tests for the public parsing surface.
//!
//! These tests drive the crate the way a caller would: through `parse`, through
//! `Parser` over the bundled lexer, and through `Parser` over a hand-built
//! token stream.

use std::{collections::VecDeque, rc::Rc};

use pratt_parser::{
    ast::ast::{Expr, Node, Stmt},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind, TokenSource},
    },
    parse,
    parser::parser::Parser,
    render_error, Position, Span,
};

/// Replays a fixed list of tokens, then `EOF` forever.
struct ReplayStream {
    tokens: VecDeque<Token>,
    pulled: usize,
}

impl ReplayStream {
    fn new(spec: &[(TokenKind, &str)]) -> Self {
        let file = Rc::new(String::from("replay"));
        let tokens = spec
            .iter()
            .enumerate()
            .map(|(i, (kind, value))| Token {
                kind: *kind,
                value: value.to_string(),
                span: Span {
                    start: Position(i as u32, Rc::clone(&file)),
                    end: Position(i as u32 + 1, Rc::clone(&file)),
                },
            })
            .collect();

        ReplayStream { tokens, pulled: 0 }
    }
}

impl TokenSource for ReplayStream {
    fn next_token(&mut self) -> Token {
        self.pulled += 1;
        self.tokens.pop_front().unwrap_or_else(|| Token {
            kind: TokenKind::EOF,
            value: String::new(),
            span: Span {
                start: Position::null(),
                end: Position::null(),
            },
        })
    }
}

#[test]
fn test_parse_let_statements() {
    let (program, errors) = parse("let x = 5; let y = 10; let foobar = 838383;", None);

    assert!(errors.is_empty());
    assert_eq!(program.len(), 3);

    let names: Vec<&str> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Let(let_stmt) => let_stmt.name.value.as_str(),
            other => panic!("expected let statement, got {:?}", other.get_stmt_type()),
        })
        .collect();
    assert_eq!(names, vec!["x", "y", "foobar"]);
}

#[test]
fn test_parse_mixed_program() {
    let source = "let total = 1 + 2 * 3;\nreturn !total == -4;\ntotal / 2";
    let (program, errors) = parse(source, Some("mixed.lang".to_string()));

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(
        program.to_string(),
        "let total = (1 + (2 * 3));return ((!total) == (-4));(total / 2)"
    );
    assert_eq!(program.get_span().start.1.as_str(), "mixed.lang");
}

#[test]
fn test_parser_borrows_lexer() {
    let mut lexer = Lexer::new("a; b;", None);

    {
        let mut parser = Parser::new(&mut lexer);
        let program = parser.parse_program();
        assert_eq!(program.len(), 2);
    }

    // The stream stays with the caller and is exhausted.
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_parser_over_custom_token_source() {
    let mut stream = ReplayStream::new(&[
        (TokenKind::Integer, "1"),
        (TokenKind::Plus, "+"),
        (TokenKind::Integer, "2"),
        (TokenKind::Plus, "+"),
        (TokenKind::Integer, "3"),
        (TokenKind::Semicolon, ";"),
    ]);

    let mut parser = Parser::new(&mut stream);
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    match &program.statements[0] {
        Stmt::Expression(stmt) => match &stmt.expression {
            Expr::Infix(root) => {
                assert_eq!(root.operator, "+");
                assert_eq!(root.left.to_string(), "(1 + 2)");
                assert_eq!(root.right.to_string(), "3");
            }
            other => panic!("expected infix, got {:?}", other.get_expr_type()),
        },
        other => panic!("expected expression statement, got {:?}", other.get_stmt_type()),
    }
}

#[test]
fn test_construction_primes_two_tokens() {
    let mut stream = ReplayStream::new(&[(TokenKind::Identifier, "a"), (TokenKind::Identifier, "b")]);

    let parser = Parser::new(&mut stream);
    assert_eq!(parser.current_token().value, "a");
    assert_eq!(parser.peek_token().value, "b");
    drop(parser);

    assert_eq!(stream.pulled, 2);
}

#[test]
fn test_errors_do_not_stop_the_pass() {
    let (program, errors) = parse("let x 5;\nlet = 3;\nlet ok = 1;\n*2;", None);

    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
            "no prefix parse function for * found",
        ]
    );
    assert!(program
        .iter()
        .any(|stmt| matches!(stmt, Stmt::Let(let_stmt) if let_stmt.name.value == "ok")));
}

#[test]
fn test_render_parse_error() {
    let source = "let a = 1;\n  let b 2;";
    let (_, errors) = parse(source, Some("render.lang".to_string()));

    assert_eq!(errors.len(), 1);
    let rendered = render_error(&errors[0], source);

    assert_eq!(
        rendered,
        "error: expected next token to be =, got INT instead\n\
         -> render.lang\n  \
         |\n\
         2 | let b 2;\n  \
         | ------^"
    );
}
