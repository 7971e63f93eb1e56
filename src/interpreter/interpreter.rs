use tracing::debug;

use crate::{
    ast::{ast::Expr, expressions::BinaryExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

/// Work left to do while walking the tree.
enum Step<'a> {
    /// Evaluate this subtree and push its value.
    Visit(&'a Expr),
    /// Both operands are on the value stack; combine them.
    Apply(&'a BinaryExpr),
}

/// Evaluates the tree rooted at `expr`.
///
/// The walk is post-order over an explicit stack, left operand before right,
/// and stops at the first error.
pub fn evaluate(expr: &Expr) -> Result<i64, Error> {
    let mut steps = vec![Step::Visit(expr)];
    let mut values: Vec<i64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Expr::Number(number)) => values.push(number.value),
            Step::Visit(Expr::Binary(binary)) => {
                steps.push(Step::Apply(binary));
                steps.push(Step::Visit(&binary.right));
                steps.push(Step::Visit(&binary.left));
            }
            Step::Apply(binary) => {
                let (right, left) = match (values.pop(), values.pop()) {
                    (Some(right), Some(left)) => (right, left),
                    _ => return Err(malformed(binary, "operand missing")),
                };
                values.push(evaluate_binary(binary, left, right)?);
            }
        }
    }

    let value = values.pop().ok_or_else(|| {
        Error::new(
            ErrorImpl::MalformedTree {
                message: String::from("no value produced"),
            },
            expr.get_span().start.clone(),
        )
    })?;

    debug!(value, "evaluated expression");
    Ok(value)
}

fn evaluate_binary(binary: &BinaryExpr, left: i64, right: i64) -> Result<i64, Error> {
    match binary.operator.kind {
        TokenKind::Plus => Ok(left.wrapping_add(right)),
        TokenKind::Dash => Ok(left.wrapping_sub(right)),
        TokenKind::Star => Ok(left.wrapping_mul(right)),
        TokenKind::Slash => {
            if right == 0 {
                Err(Error::new(
                    ErrorImpl::DivisionByZero,
                    binary.operator.span.start.clone(),
                ))
            } else {
                Ok(left.wrapping_div(right))
            }
        }
        kind => Err(malformed(
            binary,
            &format!("binary node labelled with {} `{}`", kind, binary.operator.value),
        )),
    }
}

fn malformed(binary: &BinaryExpr, message: &str) -> Error {
    Error::new(
        ErrorImpl::MalformedTree {
            message: message.to_string(),
        },
        binary.operator.span.start.clone(),
    )
}
