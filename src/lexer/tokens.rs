use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("print", TokenKind::Print);
        map.insert("read", TokenKind::Read);
        map.insert("int", TokenKind::IntType);
        map.insert("real", TokenKind::RealType);
        map.insert("string", TokenKind::StringType);
        map.insert("bool", TokenKind::BoolType);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("nil", TokenKind::Nil);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Decimal,
    String,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Var,
    If,
    Else,
    For,
    Print,
    Read,
    IntType,
    RealType,
    StringType,
    BoolType,
    True,
    False,
    Nil,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn carries_value(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Decimal,
        ])
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.carries_value() {
            write!(f, "{} {} ({:?})", self.span.start, self.kind, self.value)
        } else {
            write!(f, "{} {} ()", self.span.start, self.kind)
        }
    }
}
