//! Parser module for building the expression tree.
//!
//! This module contains the recursive-descent parser that pulls tokens from
//! the lexer one at a time and builds an [`Expr`](crate::ast::ast::Expr).
//!
//! ```text
//! expr   := term   ( ('+' | '-') term   )*
//! term   := factor ( ('*' | '/') factor )*
//! factor := NUMBER | '(' expr ')'
//! ```
//!
//! The grammar is LL(1): one token of lookahead decides every production,
//! so there is no backtracking and the first mismatch aborts the parse.
//! Operators of equal binding power associate to the left.

pub mod expr;
pub mod lookups;
pub mod parser;
