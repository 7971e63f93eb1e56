//! Error types and error handling for the evaluator.
//!
//! This module defines the single error type returned by every stage of
//! the pipeline. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and evaluation
//! - The phase each error belongs to
//! - Helpful error messages and suggestions

pub mod errors;
