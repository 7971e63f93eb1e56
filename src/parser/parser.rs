//! Parser implementation for building the expression tree.
//!
//! The parser owns its lexer and exactly one token of lookahead. Tokens are
//! pulled from the lexer only when the lookahead is consumed, so nothing
//! beyond the current token is ever buffered.

use tracing::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::expr::parse_expr;

/// How many parenthesised groups may be open at once.
///
/// Each open group costs a handful of stack frames in the recursive descent.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of further tokens
    lexer: Lexer,
    /// The lookahead token, not yet consumed
    current: Token,
    /// Number of currently open parenthesised groups
    depth: usize,
}

impl Parser {
    /// Creates a new Parser, fetching the first lookahead token from `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        Parser {
            lexer,
            current,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Consumes the current token, refreshing the lookahead from the lexer.
    ///
    /// Returns the consumed token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// This is the only place lookahead is consumed on a match. On a mismatch
    /// the lookahead is left untouched and the error is returned at once.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.unexpected(&describe_kind(expected_kind))),
            }
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds the error for finding the current token where `expected` was required.
    ///
    /// Invalid tokens are reported as unrecognised and the end of input as
    /// such, rather than as an ordinary unexpected token.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = &self.current;
        let error = match token.kind {
            TokenKind::Invalid => ErrorImpl::UnrecognisedToken {
                token: token.value.clone(),
            },
            TokenKind::EOF => ErrorImpl::UnexpectedEndOfInput {
                expected: expected.to_string(),
            },
            _ => ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                expected: expected.to_string(),
            },
        };

        Error::new(error, token.span.start.clone())
    }

    /// Builds the error for a group opened by `open` whose `)` is missing.
    pub fn unclosed_group(&self, open: &Token) -> Error {
        let token = &self.current;
        let expected = format!("`)` to close the `(` at offset {}", open.span.start.0);

        match token.kind {
            TokenKind::Invalid | TokenKind::EOF => self.unexpected(&expected),
            _ => Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: format!("expected {}", expected),
                },
                token.span.start.clone(),
            ),
        }
    }

    /// Records that the group opened by `open` has been entered.
    ///
    /// Fails with `NestingTooDeep` at the `(` once more than
    /// [`MAX_NESTING_DEPTH`] groups would be open.
    pub fn enter_group(&mut self, open: &Token) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                open.span.start.clone(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Checks whether the lexer has been drained.
    pub fn at_end(&self) -> bool {
        self.current.kind == TokenKind::EOF
    }

    /// Returns the source position of the lookahead token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses one expression without requiring the input to end after it.
    ///
    /// Whatever follows the expression is left as the lookahead.
    pub fn parse_expr(&mut self) -> Result<Expr, Error> {
        parse_expr(self)
    }

    /// Parses the whole input as a single expression.
    ///
    /// Succeeds only if the expression is followed by the end of input;
    /// a leftover token is a `TrailingInput` error.
    pub fn parse(&mut self) -> Result<Expr, Error> {
        let tree = parse_expr(self)?;

        if self.current_token_kind() == TokenKind::Invalid {
            return Err(self.unexpected("end of input"));
        }

        if !self.at_end() {
            let token = self.current_token();
            return Err(Error::new(
                ErrorImpl::TrailingInput {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        debug!(nodes = tree.node_count(), tree = %tree, "parsed expression");
        Ok(tree)
    }
}

/// How a token kind is quoted in "expected ..." messages.
fn describe_kind(kind: TokenKind) -> String {
    match kind.lexeme() {
        Some(lexeme) => format!("`{}`", lexeme),
        None => match kind {
            TokenKind::Number => String::from("a number"),
            TokenKind::Identifier => String::from("an identifier"),
            TokenKind::EOF => String::from("end of input"),
            _ => kind.to_string(),
        },
    }
}

/// Parses `source` into an expression tree.
///
/// This is the main entry point for parsing. It creates the lexer and
/// parser and requires the whole source to form exactly one expression.
pub fn parse(source: &str, file: Option<String>) -> Result<Expr, Error> {
    let mut parser = Parser::new(Lexer::new(source, file));
    parser.parse()
}
