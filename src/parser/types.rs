//! Type annotation parsing.
//!
//! Declarations carry one of the four built-in type keywords. Like
//! expression parsing, annotations are dispatched through a NUD lookup
//! table keyed by token kind.

use std::collections::HashMap;

use crate::{ast::types::TypeName, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeName, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::IntType, parse_builtin_type);
    parser.type_nud(TokenKind::RealType, parse_builtin_type);
    parser.type_nud(TokenKind::StringType, parse_builtin_type);
    parser.type_nud(TokenKind::BoolType, parse_builtin_type);
}

pub fn parse_builtin_type(parser: &mut Parser) -> Result<TypeName, Error> {
    let name = match parser.current_token_kind() {
        TokenKind::IntType => TypeName::Int,
        TokenKind::RealType => TypeName::Real,
        TokenKind::StringType => TypeName::String,
        TokenKind::BoolType => TypeName::Bool,
        _ => return Err(parser.unexpected("expected a type (int, real, string, bool)")),
    };

    parser.advance();
    Ok(name)
}

pub fn parse_type(parser: &mut Parser) -> Result<TypeName, Error> {
    let Some(nud_fn) = parser.type_handler(parser.current_token_kind()) else {
        return Err(parser.unexpected("expected a type (int, real, string, bool)"));
    };

    nud_fn(parser)
}
