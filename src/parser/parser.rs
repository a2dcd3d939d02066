//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type annotation handlers

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables for parsing
/// statements, expressions, and types. The token stream always ends with
/// an EOF token, which the parser never moves past.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type annotation handlers
    type_nud_lookup: TypeNUDLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An EOF token is appended when the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or(Position::new(1, 1));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span::new(end, end),
            });
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens[(self.pos + 1).min(self.tokens.len() - 1)].kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token if the current token matches.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start,
                )
            }));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Expects a token of the specified kind, reporting `message` when it is
    /// missing.
    pub fn expect_detailed(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        let error = self.unexpected(message);
        self.expect_error(expected_kind, Some(error))
    }

    /// Builds an `UnexpectedTokenDetailed` error for the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current_token().value.clone(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Statement handler for `kind`, if the token can start a statement.
    pub fn stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Infix binding power of `kind`; tokens that are not operators bind
    /// with `Default` and end the expression.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    pub fn type_handler(&self, kind: TokenKind) -> Option<TypeNUDHandler> {
        self.type_nud_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix handlers do not touch the binding power table, so `-` keeps
    /// its infix precedence.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type annotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }

    /// Returns the end of the last consumed token.
    pub fn last_end(&self) -> Position {
        match self.pos {
            0 => self.current_token().span.start,
            pos => self.tokens[pos - 1].span.end,
        }
    }
}

/// Parses a stream of tokens into a program (a statement sequence).
///
/// Parsing stops at the first syntax error.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    debug!("parsed {} top-level statements", body.len());
    Ok(body)
}
