//! Lexical analysis module.
//!
//! The parser only needs something that implements [`tokens::TokenSource`];
//! this module provides the default implementation. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, integers, and operators
//! - Token position tracking for error reporting
//! - `ILLEGAL` tokens for characters the language does not know

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
