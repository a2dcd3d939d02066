//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Front-end errors (lexing and parsing) with source position information
//! - Semantic diagnostics collected by the type checker, with severities
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod diagnostics;
pub mod errors;

#[cfg(test)]
mod tests;
