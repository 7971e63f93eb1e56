use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::MalformedTree { .. } => "MalformedTree",
        }
    }

    pub fn get_phase(&self) -> ErrorPhase {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorPhase::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::TrailingInput { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorPhase::Syntax,
            ErrorImpl::DivisionByZero | ErrorImpl::MalformedTree { .. } => ErrorPhase::Evaluation,
        }
    }

    /// Whether the error aborted parsing (as opposed to evaluation).
    ///
    /// Lexical anomalies only surface once the parser hits them, so they
    /// count as syntax errors here.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self.get_phase(), ErrorPhase::Lexical | ErrorPhase::Syntax)
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token, expected } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, expected {}", token, expected))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Input ended early, expected {}",
                expected
            )),
            ErrorImpl::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "Found `{}` after a complete expression, did you miss an operator?",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Parentheses may be nested at most {} deep, try splitting the expression",
                limit
            )),
            ErrorImpl::DivisionByZero => {
                ErrorTip::Suggestion(String::from("The right-hand side of `/` evaluated to zero"))
            }
            ErrorImpl::MalformedTree { .. } => ErrorTip::Suggestion(String::from(
                "The expression tree is not well formed, this is a bug in the parser",
            )),
        }
    }
}

/// Which stage of the pipeline an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Lexical,
    Syntax,
    Evaluation,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}, expected {expected}")]
    UnexpectedToken { token: String, expected: String },
    #[error("unexpected token: {token:?}, {message}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unexpected input after expression: {token:?}")]
    TrailingInput { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("parentheses nested more than {limit} deep")]
    NestingTooDeep { limit: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("malformed expression tree: {message}")]
    MalformedTree { message: String },
}
