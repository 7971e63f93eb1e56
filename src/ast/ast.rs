use std::fmt::Display;

use crate::Span;

use super::expressions::{BinaryExpr, NumberExpr};

/// A node of the expression tree.
///
/// Every child is owned by exactly one parent and the root by whoever asked
/// for the parse. Chains of operators can make the tree arbitrarily deep, so
/// walks over it use an explicit stack instead of recursion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(NumberExpr),
    Binary(BinaryExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(number) => &number.span,
            Expr::Binary(binary) => &binary.span,
        }
    }

    /// Number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(expr) = pending.pop() {
            count += 1;
            if let Expr::Binary(binary) = expr {
                pending.push(&binary.right);
                pending.push(&binary.left);
            }
        }

        count
    }
}

enum Piece<'a> {
    Node(&'a Expr),
    Text(&'static str),
}

/// Renders the tree in prefix form, e.g. `(- (- 8 3) 2)`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Expr::Number(number)) => write!(f, "{}", number.value)?,
                Piece::Node(Expr::Binary(binary)) => {
                    write!(f, "({} ", binary.operator.value)?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(&binary.right));
                    pending.push(Piece::Text(" "));
                    pending.push(Piece::Node(&binary.left));
                }
            }
        }

        Ok(())
    }
}
