//! Unit tests for error handling.
//!
//! This module contains tests for front-end errors and semantic diagnostics.

use crate::ast::types::Type;
use crate::errors::diagnostics::{Diagnostic, DiagnosticKind, SemanticError, Severity};
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::new(1, 10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        Position::new(42, 3),
    );

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::new(3, 5),
    );

    assert_eq!(
        error.to_string(),
        "[line 3, column 5] error parsing number: \"99999999999999999999\""
    );
}

#[test]
fn test_unterminated_errors() {
    let string = Error::new(ErrorImpl::UnterminatedString, Position::new(1, 1));
    let comment = Error::new(ErrorImpl::UnterminatedComment, Position::new(1, 1));

    assert_eq!(string.get_error_name(), "UnterminatedString");
    assert_eq!(comment.get_error_name(), "UnterminatedComment");
    assert!(matches!(comment.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::new(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position::new(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`}`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_diagnostic_kind_and_name() {
    let diagnostic = Diagnostic::new(
        SemanticError::VariableNotDeclared {
            variable: "z".to_string(),
        },
        Some(Position::new(1, 1)),
    );

    assert_eq!(diagnostic.kind(), DiagnosticKind::VariableNotDeclared);
    assert_eq!(diagnostic.get_error_name(), "VariableNotDeclared");
    assert_eq!(diagnostic.message(), "variable 'z' was not declared");
}

#[test]
fn test_only_uninitialized_use_is_a_warning() {
    let warning = Diagnostic::new(
        SemanticError::VariableUninitializedUse {
            variable: "x".to_string(),
        },
        Some(Position::new(2, 7)),
    );
    let error = Diagnostic::new(
        SemanticError::TypeMismatch {
            left: Type::Text,
            right: Type::Integer,
        },
        Some(Position::new(2, 7)),
    );

    assert_eq!(warning.severity(), Severity::Warning);
    assert!(!warning.is_error());
    assert_eq!(error.severity(), Severity::Error);
    assert!(error.is_error());
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic::new(
        SemanticError::InvalidAssignmentType {
            variable: "x".to_string(),
            expected: Type::Integer,
            received: Type::Text,
        },
        Some(Position::new(4, 9)),
    );

    assert_eq!(
        diagnostic.to_string(),
        "[line 4, column 9] error: cannot assign text to variable 'x' of type integer"
    );
}

#[test]
fn test_diagnostic_display_without_position() {
    let diagnostic = Diagnostic::new(
        SemanticError::InvalidConditionType {
            statement: "if".to_string(),
            found: Type::Integer,
        },
        None,
    );

    assert_eq!(diagnostic.get_position(), None);
    assert_eq!(
        diagnostic.to_string(),
        "[line 0, column 0] error: condition of 'if' must be boolean, found integer"
    );
}
