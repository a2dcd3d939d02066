use crate::Span;

use super::{
    expressions::{BinaryExpr, GroupingExpr, LiteralExpr, LogicalExpr, SymbolExpr, UnaryExpr},
    statements::{
        AssignmentStmt, BlockStmt, ForStmt, IfStmt, PrintStmt, ReadStmt, VarDeclStmt,
    },
};

/// Expression node.
///
/// Both passes match on this exhaustively, so a new variant has to be
/// handled by the type checker and the compiler before anything builds.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    /// `&&` and `||`, kept apart from `Binary` because they short-circuit.
    Logical(LogicalExpr),
    Unary(UnaryExpr),
    Literal(LiteralExpr),
    Grouping(GroupingExpr),
    Variable(SymbolExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Binary(expr) => &expr.span,
            Expr::Logical(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Literal(expr) => &expr.span,
            Expr::Grouping(expr) => &expr.span,
            Expr::Variable(expr) => &expr.span,
        }
    }
}

/// Statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
    If(IfStmt),
    For(ForStmt),
    Print(PrintStmt),
    Read(ReadStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Block(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::For(stmt) => &stmt.span,
            Stmt::Print(stmt) => &stmt.span,
            Stmt::Read(stmt) => &stmt.span,
        }
    }
}
