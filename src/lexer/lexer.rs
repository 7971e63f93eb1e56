use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Turns the text a pattern matched into a token, or `None` to skip it.
pub type RegexHandler = fn(&Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; every pattern is anchored at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \\t\\n\\x0B\\x0C\\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
    ];
}

/// On-demand tokenizer over a single source string.
///
/// The cursor only moves forward. Once the end of the source is reached,
/// every further call to [`Lexer::next_token`] returns an `EOF` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Lexer {
            source: source.to_string(),
            pos: 0,
            file: file_name,
        }
    }

    /// Scans past the next lexeme and returns its token.
    ///
    /// Never fails: characters no rule accepts come back as `Invalid` tokens
    /// and it is up to the parser to reject them.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0));
            }

            let lexer: &Lexer = self;
            let scanned = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(lexer.remainder())
                    .map(|matched| ((pattern.handler)(lexer, matched.as_str()), matched.end()))
            });

            let (token, length) = match scanned {
                Some(scanned) => scanned,
                None => {
                    let invalid = self.invalid_token();
                    let length = invalid.value.len();
                    (Some(invalid), length)
                }
            };

            self.advance_n(length);

            if let Some(token) = token {
                trace!(kind = %token.kind, value = %token.value, offset = token.span.start.0, "token");
                return token;
            }
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos, Arc::clone(&self.file))
    }

    /// Span of `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.get_position(),
            end: Position(self.pos + len, Arc::clone(&self.file)),
        }
    }

    fn invalid_token(&self) -> Token {
        let value = self
            .remainder()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();

        MK_TOKEN!(TokenKind::Invalid, value.clone(), self.span_of(value.len()))
    }
}

fn number_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Number, matched.to_string(), lexer.span_of(matched.len())))
}

fn symbol_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Identifier, matched.to_string(), lexer.span_of(matched.len())))
}

fn skip_handler(_lexer: &Lexer, _matched: &str) -> Option<Token> {
    None
}

/// Lexes all of `source`, returning every token up to and including the first `EOF`.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
