use crate::{lexer::tokens::Token, Span};

use super::ast::Expr;

/// Number Expression
/// Represents an integer literal; always a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberExpr {
    pub value: i64,
    pub span: Span,
}

/// Binary Expression
/// Represents an operation on two operands, e.g. `1 + 2`.
///
/// `operator` is the token the node was built from. The parser only ever
/// labels nodes with `+`, `-`, `*` or `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

impl BinaryExpr {
    /// Moves any binary children out onto `pending`, leaving leaves in their place.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        for child in [&mut self.left, &mut self.right] {
            if matches!(**child, Expr::Binary(_)) {
                let leaf = Expr::Number(NumberExpr {
                    value: 0,
                    span: self.span.clone(),
                });
                pending.push(std::mem::replace(&mut **child, leaf));
            }
        }
    }
}

/// Tears the subtree down one node at a time; long operator chains would
/// otherwise be dropped through one nested call per node.
impl Drop for BinaryExpr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(expr) = pending.pop() {
            if let Expr::Binary(mut binary) = expr {
                binary.detach_children(&mut pending);
            }
        }
    }
}
