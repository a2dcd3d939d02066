use std::fmt::Display;

use crate::{Position, Span};

use super::ast::Expr;

/// Arithmetic, relational and equality operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Add
                | BinaryOperator::Subtract
                | BinaryOperator::Multiply
                | BinaryOperator::Divide
        )
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Less
                | BinaryOperator::LessEquals
                | BinaryOperator::Greater
                | BinaryOperator::GreaterEquals
        )
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, BinaryOperator::Equals | BinaryOperator::NotEquals)
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
        }
    }
}

impl Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Not,
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Not => "!",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A literal value as written in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
    Null,
}

/// Renders the literal as a TAC operand: reals always keep a fractional
/// part and text is quoted.
impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(value) => write!(f, "{}", value),
            Literal::Real(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{:.1}", value)
            }
            Literal::Real(value) => write!(f, "{}", value),
            Literal::Text(value) => write!(f, "{:?}", value),
            Literal::Boolean(value) => write!(f, "{}", value),
            Literal::Null => write!(f, "nil"),
        }
    }
}

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

/// Symbol Expression
/// A reference to a variable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// `left <op> right` for arithmetic, relational and equality operators.
///
/// `operator_position` points at the operator token, which is where type
/// errors on the operation are reported.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub operator_position: Position,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Logical Expression
/// `left && right` or `left || right`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub operator: LogicalOperator,
    pub operator_position: Position,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Unary Expression
/// The operator is the first token, so `span.start` is its position.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// A parenthesised expression.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}
