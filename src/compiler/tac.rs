//! Three-address code instructions.
//!
//! Every instruction has an operator and up to three textual fields. Which
//! fields are set depends on the operator:
//!
//! | operator            | result   | operand1  | operand2 |
//! | ------------------- | -------- | --------- | -------- |
//! | binary (`ADD`, ...) | temp     | left      | right    |
//! | `NEG`, `NOT`        | temp     | operand   |          |
//! | `COPY`              | variable | value     |          |
//! | `LABEL`, `GOTO`     | label    |           |          |
//! | `IF_FALSE/IF_TRUE`  | label    | condition |          |
//! | `PRINT`             |          | value     |          |
//! | `READ`              | variable |           |          |

use std::fmt::Display;

use crate::ast::expressions::{BinaryOperator, LogicalOperator, UnaryOperator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TacOperator {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    And,
    Or,
    Not,
    Copy,
    Label,
    Goto,
    IfFalse,
    IfTrue,
    Print,
    Read,
}

impl TacOperator {
    /// Infix or prefix symbol for operators that compute a value.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TacOperator::Add => "+",
            TacOperator::Sub | TacOperator::Neg => "-",
            TacOperator::Mul => "*",
            TacOperator::Div => "/",
            TacOperator::Lt => "<",
            TacOperator::Le => "<=",
            TacOperator::Gt => ">",
            TacOperator::Ge => ">=",
            TacOperator::Eq => "==",
            TacOperator::Ne => "!=",
            TacOperator::And => "&&",
            TacOperator::Or => "||",
            TacOperator::Not => "!",
            _ => return None,
        };
        Some(symbol)
    }
}

impl Display for TacOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TacOperator::Add => "ADD",
            TacOperator::Sub => "SUB",
            TacOperator::Mul => "MUL",
            TacOperator::Div => "DIV",
            TacOperator::Neg => "NEG",
            TacOperator::Lt => "LT",
            TacOperator::Le => "LE",
            TacOperator::Gt => "GT",
            TacOperator::Ge => "GE",
            TacOperator::Eq => "EQ",
            TacOperator::Ne => "NE",
            TacOperator::And => "AND",
            TacOperator::Or => "OR",
            TacOperator::Not => "NOT",
            TacOperator::Copy => "COPY",
            TacOperator::Label => "LABEL",
            TacOperator::Goto => "GOTO",
            TacOperator::IfFalse => "IF_FALSE",
            TacOperator::IfTrue => "IF_TRUE",
            TacOperator::Print => "PRINT",
            TacOperator::Read => "READ",
        };
        write!(f, "{}", name)
    }
}

impl From<BinaryOperator> for TacOperator {
    fn from(operator: BinaryOperator) -> Self {
        match operator {
            BinaryOperator::Add => TacOperator::Add,
            BinaryOperator::Subtract => TacOperator::Sub,
            BinaryOperator::Multiply => TacOperator::Mul,
            BinaryOperator::Divide => TacOperator::Div,
            BinaryOperator::Less => TacOperator::Lt,
            BinaryOperator::LessEquals => TacOperator::Le,
            BinaryOperator::Greater => TacOperator::Gt,
            BinaryOperator::GreaterEquals => TacOperator::Ge,
            BinaryOperator::Equals => TacOperator::Eq,
            BinaryOperator::NotEquals => TacOperator::Ne,
        }
    }
}

impl From<LogicalOperator> for TacOperator {
    fn from(operator: LogicalOperator) -> Self {
        match operator {
            LogicalOperator::And => TacOperator::And,
            LogicalOperator::Or => TacOperator::Or,
        }
    }
}

impl From<UnaryOperator> for TacOperator {
    fn from(operator: UnaryOperator) -> Self {
        match operator {
            UnaryOperator::Negate => TacOperator::Neg,
            UnaryOperator::Not => TacOperator::Not,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacInstruction {
    pub operator: TacOperator,
    pub result: Option<String>,
    pub operand1: Option<String>,
    pub operand2: Option<String>,
}

impl TacInstruction {
    pub fn new(
        operator: TacOperator,
        result: Option<String>,
        operand1: Option<String>,
        operand2: Option<String>,
    ) -> Self {
        TacInstruction {
            operator,
            result,
            operand1,
            operand2,
        }
    }

    /// `result = left <op> right`
    pub fn binary(operator: TacOperator, result: &str, left: &str, right: &str) -> Self {
        Self::new(
            operator,
            Some(result.to_string()),
            Some(left.to_string()),
            Some(right.to_string()),
        )
    }

    /// `result = <op>operand`
    pub fn unary(operator: TacOperator, result: &str, operand: &str) -> Self {
        Self::new(
            operator,
            Some(result.to_string()),
            Some(operand.to_string()),
            None,
        )
    }

    pub fn copy(target: &str, value: &str) -> Self {
        Self::new(
            TacOperator::Copy,
            Some(target.to_string()),
            Some(value.to_string()),
            None,
        )
    }

    pub fn label(name: &str) -> Self {
        Self::new(TacOperator::Label, Some(name.to_string()), None, None)
    }

    pub fn goto(label: &str) -> Self {
        Self::new(TacOperator::Goto, Some(label.to_string()), None, None)
    }

    pub fn if_false(condition: &str, label: &str) -> Self {
        Self::new(
            TacOperator::IfFalse,
            Some(label.to_string()),
            Some(condition.to_string()),
            None,
        )
    }

    pub fn if_true(condition: &str, label: &str) -> Self {
        Self::new(
            TacOperator::IfTrue,
            Some(label.to_string()),
            Some(condition.to_string()),
            None,
        )
    }

    pub fn print(value: &str) -> Self {
        Self::new(TacOperator::Print, None, Some(value.to_string()), None)
    }

    pub fn read(variable: &str) -> Self {
        Self::new(TacOperator::Read, Some(variable.to_string()), None, None)
    }

    pub fn is_label(&self) -> bool {
        self.operator == TacOperator::Label
    }

    /// GOTO, IF_FALSE and IF_TRUE.
    pub fn is_jump(&self) -> bool {
        matches!(
            self.operator,
            TacOperator::Goto | TacOperator::IfFalse | TacOperator::IfTrue
        )
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self.operator,
            TacOperator::Add
                | TacOperator::Sub
                | TacOperator::Mul
                | TacOperator::Div
                | TacOperator::Neg
        )
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

impl Display for TacInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result = field(&self.result);
        let operand1 = field(&self.operand1);
        let operand2 = field(&self.operand2);

        match self.operator {
            TacOperator::Copy => write!(f, "{} = {}", result, operand1),
            TacOperator::Label => write!(f, "{}:", result),
            TacOperator::Goto => write!(f, "goto {}", result),
            TacOperator::IfFalse => write!(f, "if_false {} goto {}", operand1, result),
            TacOperator::IfTrue => write!(f, "if_true {} goto {}", operand1, result),
            TacOperator::Print => write!(f, "print {}", operand1),
            TacOperator::Read => write!(f, "read {}", result),
            TacOperator::Neg | TacOperator::Not => {
                write!(f, "{} = {}{}", result, self.operator.symbol().unwrap_or(""), operand1)
            }
            _ => write!(
                f,
                "{} = {} {} {}",
                result,
                operand1,
                self.operator.symbol().unwrap_or(""),
                operand2
            ),
        }
    }
}
