use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::Type, Position};

/// Problems found by the type checker. Unlike [`super::errors::Error`] these
/// never stop the pass; they are collected and reported together.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("variable '{variable}' was not declared")]
    VariableNotDeclared { variable: String },
    #[error("variable '{variable}' is already declared in this scope")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable '{variable}' may be used before being initialized")]
    VariableUninitializedUse { variable: String },
    #[error("incompatible operand types: {left} and {right}")]
    TypeMismatch { left: Type, right: Type },
    #[error("operator '{operator}' {details}")]
    InvalidOperationType { operator: String, details: String },
    #[error("condition of '{statement}' must be boolean, found {found}")]
    InvalidConditionType { statement: String, found: Type },
    #[error("cannot assign {received} to variable '{variable}' of type {expected}")]
    InvalidAssignmentType {
        variable: String,
        expected: Type,
        received: Type,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    VariableNotDeclared,
    VariableAlreadyDeclared,
    VariableUninitializedUse,
    TypeMismatch,
    InvalidOperationType,
    InvalidConditionType,
    InvalidAssignmentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    error: SemanticError,
    position: Option<Position>,
}

impl Diagnostic {
    pub fn new(error: SemanticError, position: Option<Position>) -> Self {
        Diagnostic { error, position }
    }

    pub fn get_error(&self) -> &SemanticError {
        &self.error
    }

    pub fn get_position(&self) -> Option<Position> {
        self.position
    }

    pub fn kind(&self) -> DiagnosticKind {
        match &self.error {
            SemanticError::VariableNotDeclared { .. } => DiagnosticKind::VariableNotDeclared,
            SemanticError::VariableAlreadyDeclared { .. } => {
                DiagnosticKind::VariableAlreadyDeclared
            }
            SemanticError::VariableUninitializedUse { .. } => {
                DiagnosticKind::VariableUninitializedUse
            }
            SemanticError::TypeMismatch { .. } => DiagnosticKind::TypeMismatch,
            SemanticError::InvalidOperationType { .. } => DiagnosticKind::InvalidOperationType,
            SemanticError::InvalidConditionType { .. } => DiagnosticKind::InvalidConditionType,
            SemanticError::InvalidAssignmentType { .. } => DiagnosticKind::InvalidAssignmentType,
        }
    }

    /// Uninitialized reads are advisory; everything else invalidates the
    /// program.
    pub fn severity(&self) -> Severity {
        match self.kind() {
            DiagnosticKind::VariableUninitializedUse => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match self.kind() {
            DiagnosticKind::VariableNotDeclared => "VariableNotDeclared",
            DiagnosticKind::VariableAlreadyDeclared => "VariableAlreadyDeclared",
            DiagnosticKind::VariableUninitializedUse => "VariableUninitializedUse",
            DiagnosticKind::TypeMismatch => "TypeMismatch",
            DiagnosticKind::InvalidOperationType => "InvalidOperationType",
            DiagnosticKind::InvalidConditionType => "InvalidConditionType",
            DiagnosticKind::InvalidAssignmentType => "InvalidAssignmentType",
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.position.unwrap_or_default();
        write!(
            f,
            "[line {}, column {}] {}: {}",
            position.line,
            position.column,
            self.severity(),
            self.error
        )
    }
}
