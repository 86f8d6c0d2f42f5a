//! Diagnostics collected while parsing.
//!
//! Errors here never abort a parse. The parser appends them to its collector
//! and keeps going, so the caller inspects them once `parse_program` returns.
//! It includes:
//!
//! - Error structures with source position information
//! - The exact diagnostic texts exposed to callers
//! - Short suggestions used when rendering a diagnostic

pub mod errors;
