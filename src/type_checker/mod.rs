//! Type checking and semantic analysis module.
//!
//! This module walks the AST once and checks it for semantic problems:
//!
//! - Use of undeclared variables and redeclarations within one scope
//! - Type compatibility of assignments and operators, with `int`/`real`
//!   promotion
//! - Boolean conditions in `if` and `for`
//! - Reads of variables that were never assigned (advisory only)
//!
//! The type checker keeps a stack of scopes and collects every diagnostic
//! instead of stopping at the first one.

pub mod environment;
pub mod type_checker;
