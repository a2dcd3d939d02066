//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and reals)
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Comments
//! - Line/column tracking
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};
use crate::{errors::errors::ErrorImpl, Position};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("var if else for print read int real string bool true false nil"),
        vec![
            TokenKind::Var,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::Print,
            TokenKind::Read,
            TokenKind::IntType,
            TokenKind::RealType,
            TokenKind::StringType,
            TokenKind::BoolType,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Nil,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase variable").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    // Keyword prefix does not make it a keyword
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].value, "variable");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Decimal);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Decimal);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""hello\nworld" "tab\there" "backslash\\" "quote\"test""#).unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "quote\"test");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / == != < > <= >= = && || !"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_operators_without_spaces() {
    assert_eq!(
        kinds("a<=b!=!c"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "var x int = 5; // trailing comment\n/* block\n comment */ x = 10 / 2;";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::IntType,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("var x int = 42;").unwrap();

    assert_eq!(tokens.len(), 7); // var, x, int, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::IntType);
    assert_eq!(tokens[4].value, "42");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_tracks_line_and_column() {
    let tokens = tokenize("var x int;\n  x = 1;").unwrap();

    assert_eq!(tokens[0].span.start, Position::new(1, 1));
    assert_eq!(tokens[1].span.start, Position::new(1, 5));
    assert_eq!(tokens[1].span.end, Position::new(1, 6));
    assert_eq!(tokens[4].value, "x");
    assert_eq!(tokens[4].span.start, Position::new(2, 3));
    assert_eq!(tokens[5].span.start, Position::new(2, 5));
}

#[test]
fn test_tokenize_columns_after_block_comment() {
    let tokens = tokenize("/* a\nb */ y").unwrap();

    assert_eq!(tokens[0].value, "y");
    assert_eq!(tokens[0].span.start, Position::new(2, 6));
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("var x int = @;").unwrap_err();

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(*error.get_position(), Position::new(1, 13));
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("print(\"oops);").unwrap_err();

    assert_eq!(*error.get_internal_error(), ErrorImpl::UnterminatedString);
    assert_eq!(*error.get_position(), Position::new(1, 7));
}

#[test]
fn test_tokenize_unterminated_comment() {
    let error = tokenize("x = 1; /* never closed").unwrap_err();

    assert_eq!(*error.get_internal_error(), ErrorImpl::UnterminatedComment);
    assert_eq!(*error.get_position(), Position::new(1, 8));
}

#[test]
fn test_tokenize_whitespace_only() {
    assert_eq!(kinds("  \n\t  "), vec![TokenKind::EOF]);
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("x;").unwrap();

    assert_eq!(tokens[0].to_string(), "1:1 Identifier (\"x\")");
    assert_eq!(tokens[1].to_string(), "1:2 Semicolon ()");
}
