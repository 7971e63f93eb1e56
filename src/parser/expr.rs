use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, NumberExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{binding_power, BindingPower},
    parser::Parser,
};

type OperandParser = fn(&mut Parser) -> Result<Expr, Error>;

/// `expr := term (('+' | '-') term)*`
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Additive, parse_term)
}

/// `term := factor (('*' | '/') factor)*`
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Multiplicative, parse_factor)
}

/// Parses a left-associative chain of operators sharing binding power `bp`.
///
/// Each operator found wraps everything parsed so far as its left child, so
/// `8 - 3 - 2` becomes `(8 - 3) - 2`.
pub fn parse_binary_expr(
    parser: &mut Parser,
    bp: BindingPower,
    operand: OperandParser,
) -> Result<Expr, Error> {
    let mut left = operand(parser)?;

    while binding_power(parser.current_token_kind()) == bp {
        let kind = parser.current_token_kind();
        let operator = parser.expect(kind)?;
        let right = operand(parser)?;

        let span = Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        };

        left = Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span,
        });
    }

    Ok(left)
}

/// `factor := NUMBER | '(' expr ')'`
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => parse_primary_expr(parser),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(parser.unexpected("a number or `(`")),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Number)?;

    match token.value.parse::<i64>() {
        Ok(value) => Ok(Expr::Number(NumberExpr {
            value,
            span: token.span,
        })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect(TokenKind::OpenParen)?;
    parser.enter_group(&open)?;

    let mut expr = parse_expr(parser)?;
    let unclosed = (parser.current_token_kind() != TokenKind::CloseParen)
        .then(|| parser.unclosed_group(&open));
    let close = parser.expect_error(TokenKind::CloseParen, unclosed)?;
    parser.leave_group();

    // A grouped node's span includes its parentheses
    let span = Span {
        start: open.span.start,
        end: close.span.end,
    };
    match &mut expr {
        Expr::Number(number) => number.span = span,
        Expr::Binary(binary) => binary.span = span,
    }

    Ok(expr)
}
