//! Type system definitions.
//!
//! This module defines the two type representations used by the compiler:
//!
//! - `TypeName`: a type annotation as written in a declaration (`int`, `real`, ...)
//! - `Type`: the semantic category the type checker computes for expressions
//!
//! Annotations are parsed into `TypeName` and converted to `Type` by the
//! type checker; the conversion is total.

use std::fmt::Display;

/// Value categories known to the type checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Integer,
    Real,
    Text,
    Boolean,
    /// The type of the `nil` literal.
    Absent,
    /// Produced after a diagnostic was reported for an expression. Operations
    /// on it stay silent so one mistake is reported once.
    ErrorMarker,
}

impl Type {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Integer | Type::Real)
    }

    /// Identical types, or any two numeric types.
    pub fn is_compatible_with(&self, other: &Type) -> bool {
        self == other || (self.is_numeric() && other.is_numeric())
    }

    /// Result type of an arithmetic operation. Errors win over promotion,
    /// and `Real` wins over `Integer`.
    pub fn promote(left: Type, right: Type) -> Type {
        if left == Type::ErrorMarker || right == Type::ErrorMarker {
            return Type::ErrorMarker;
        }

        if left == Type::Real || right == Type::Real {
            return Type::Real;
        }

        left
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Integer => "integer",
            Type::Real => "real",
            Type::Text => "text",
            Type::Boolean => "boolean",
            Type::Absent => "absent",
            Type::ErrorMarker => "error",
        };
        write!(f, "{}", name)
    }
}

/// A type annotation on a `var` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    Int,
    Real,
    String,
    Bool,
}

impl From<TypeName> for Type {
    fn from(name: TypeName) -> Self {
        match name {
            TypeName::Int => Type::Integer,
            TypeName::Real => Type::Real,
            TypeName::String => Type::Text,
            TypeName::Bool => Type::Boolean,
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            TypeName::Int => "int",
            TypeName::Real => "real",
            TypeName::String => "string",
            TypeName::Bool => "bool",
        };
        write!(f, "{}", keyword)
    }
}
