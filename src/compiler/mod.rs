//! Code generation module for the compiler.
//!
//! This module lowers a semantically valid AST into a flat list of
//! three-address code instructions. It handles:
//!
//! - Expressions, with one fresh temporary per computed value
//! - `if`/`else` and the three `for` forms, as labels and jumps
//! - Short-circuit `&&`/`||`, as conditional branches
//! - `print` and `read`, one instruction per operand

pub mod compiler;
pub mod expr;
pub mod stmt;
pub mod tac;

#[cfg(test)]
mod tests;
