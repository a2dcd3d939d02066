use crate::Span;

use super::{ast::Expr, ast::Stmt, types::TypeName};

/// A variable name together with where it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// Block Statement
/// Represents a block of code containing multiple statements.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `var name type (= value)?`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: Identifier,
    pub explicit_type: TypeName,
    pub assigned_value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub assignee: Identifier,
    pub value: Expr,
    pub span: Span,
}

/// If Statement
/// An `else if` chain is an `IfStmt` in `else_body`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForKind {
    /// `for { ... }`
    Infinite,
    /// `for cond { ... }`
    WhileStyle,
    /// `for init; cond; inc { ... }`
    Classic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    pub increment: Option<Box<Stmt>>,
    pub body: Box<Stmt>,
    pub span: Span,
}

impl ForStmt {
    pub fn kind(&self) -> ForKind {
        match (&self.init, &self.condition, &self.increment) {
            (None, None, None) => ForKind::Infinite,
            (Some(_), _, _) => ForKind::Classic,
            _ => ForKind::WhileStyle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub expressions: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadStmt {
    pub variables: Vec<Identifier>,
    pub span: Span,
}
