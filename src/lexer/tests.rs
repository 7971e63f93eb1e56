//! Unit tests for the lexer module.
//!
//! - Numbers and identifiers
//! - Operators and punctuation
//! - Whitespace handling
//! - Invalid characters
//! - End-of-input behaviour and spans

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 007 123456789", Some("test.x".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "007"); // no normalisation
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "123456789");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar9 CamelCase x1y2", Some("test.x".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar9");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "CamelCase");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "x1y2");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_digits_then_letters() {
    // A digit run stops at the first letter; the letters start an identifier
    let tokens = tokenize("12ab", None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "ab");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / ( ) = ;", Some("test.x".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::OpenParen);
    assert_eq!(tokens[5].kind, TokenKind::CloseParen);
    assert_eq!(tokens[6].kind, TokenKind::Assignment);
    assert_eq!(tokens[7].kind, TokenKind::Semicolon);
    assert_eq!(tokens[8].kind, TokenKind::EOF);

    for token in &tokens[..8] {
        assert_eq!(Some(token.value.as_str()), token.kind.lexeme());
    }
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize(" \t 1 \n+\r\n  2 \x0B\x0C", None);

    assert_eq!(tokens.len(), 4); // 1, +, 2, EOF
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].value, "2");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_without_whitespace() {
    let tokens = tokenize("(1+2)*3", None);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenParen,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_invalid_character() {
    let tokens = tokenize("1 @ 2", None);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "2");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_invalid_multibyte_character() {
    let tokens = tokenize("é1", None);

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].value, "é");
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "1");
}

#[test]
fn test_underscore_is_invalid() {
    let tokens = tokenize("_a", None);

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].value, "_");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("", None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].value, "");
}

#[test]
fn test_whitespace_only_source() {
    let tokens = tokenize("   \n\t ", None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_repeatable() {
    let mut lexer = Lexer::new("7", None);

    assert_eq!(lexer.next_token().kind, TokenKind::Number);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.span.start.0, 1);
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("12 + abc", Some("spans.x".to_string()));

    assert_eq!((tokens[0].span.start.0, tokens[0].span.end.0), (0, 2));
    assert_eq!((tokens[1].span.start.0, tokens[1].span.end.0), (3, 4));
    assert_eq!((tokens[2].span.start.0, tokens[2].span.end.0), (5, 8));
    assert_eq!((tokens[3].span.start.0, tokens[3].span.end.0), (8, 8));
    assert_eq!(tokens[0].span.start.1.as_str(), "spans.x");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("1", None);
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_fresh_lexers_agree() {
    let source = "((1 + 2) * (3 + 4)) / x $";
    assert_eq!(tokenize(source, None), tokenize(source, None));
}

#[test]
fn test_token_display() {
    let tokens = tokenize("42 +", None);

    assert_eq!(tokens[0].to_string(), "Number (42)");
    assert_eq!(tokens[1].to_string(), "Plus ()");
    assert_eq!(tokens[2].to_string(), "EOF ()");
}
