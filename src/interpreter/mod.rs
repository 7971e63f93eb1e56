//! Evaluation of expression trees.
//!
//! Walks a parsed [`Expr`](crate::ast::ast::Expr) and folds it into a single
//! `i64`. Arithmetic wraps on overflow; division truncates toward zero and
//! a zero divisor is an error.

pub mod interpreter;
