//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, bare expressions)
//! - Expression parsing (prefix and infix operators, literals, identifiers)
//! - Error collection without aborting the pass
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. Both are
//! chosen by matching on the token kind in `lookups`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
