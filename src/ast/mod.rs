/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The `Expr` node type and its helpers
/// - expressions: The leaf and binary node payloads
pub mod ast;
pub mod expressions;
