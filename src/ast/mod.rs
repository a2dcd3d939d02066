/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Expr` and `Stmt` node enums
/// - expressions: Expression payloads, operators and literals
/// - statements: Statement payloads
/// - types: The semantic type model and declared type names
/// - printer: S-expression rendering used by `--ast`
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;
