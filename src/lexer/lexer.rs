use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenSource, RESERVED_LOOKUP};

/// Builds a token from the matched text, or returns `None` to skip it.
pub type RegexHandler = fn(&Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})", pattern)).expect("token patterns are valid regexes")
}

lazy_static! {
    // Tried in order; multi-character operators precede their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: anchored("[a-zA-Z_][a-zA-Z0-9_]*"), handler: symbol_handler },
        RegexPattern { regex: anchored("[0-9]+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Integer) },
        RegexPattern { regex: anchored("\\s+"), handler: skip_handler },
        RegexPattern { regex: anchored("=="), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: anchored("!="), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: anchored("="), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: anchored("!"), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
        RegexPattern { regex: anchored("\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: anchored("-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: anchored("\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: anchored("/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: anchored("<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: anchored(">"), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: anchored(","), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: anchored(";"), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: anchored("\\("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: anchored("\\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: anchored("\\{"), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: anchored("\\}"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
    ];
}

/// Regex-driven tokenizer that hands out one token per call.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.to_string(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        self.source.get(self.pos..).unwrap_or("")
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes, starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.get_position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn eof_token(&self) -> Token {
        MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0))
    }

    fn illegal_token(&mut self) -> Token {
        let unexpected = self.remainder().chars().next().unwrap_or_default();
        let token = MK_TOKEN!(
            TokenKind::Illegal,
            unexpected.to_string(),
            self.span_of(unexpected.len_utf8())
        );
        self.advance_n(unexpected.len_utf8());

        token
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        'scan: while !self.at_eof() {
            for pattern in PATTERNS.iter() {
                let Some(found) = pattern.regex.find(self.remainder()) else {
                    continue;
                };
                let matched = found.as_str().to_string();
                let token = (pattern.handler)(self, &matched);
                self.advance_n(matched.len());

                match token {
                    Some(token) => {
                        trace!("lexed {} {:?}", token.kind, token.value);
                        return token;
                    }
                    None => continue 'scan,
                }
            }

            return self.illegal_token();
        }

        self.eof_token()
    }
}

fn skip_handler(_lexer: &Lexer, _matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, String::from(matched), lexer.span_of(matched.len())))
}

/// Drains a fresh lexer over `source`, up to and including the first `EOF`.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
