//! Lexical analysis module for the evaluator.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens on demand for the parser. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of numbers, identifiers and single-character operators
//! - Token position tracking for error reporting
//! - Whitespace skipping
//!
//! The lexer never fails. Characters no pattern accepts become `Invalid`
//! tokens, which the parser rejects where a real token is required.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
