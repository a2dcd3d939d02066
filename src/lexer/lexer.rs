use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text the pattern matched at the current position.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Order matters: the first pattern that matches wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^//[^\n]*", skip_handler),
        RegexPattern::new(r"^/\*", block_comment_handler),
        RegexPattern::new(r#"^"(?:[^"\\]|\\.)*""#, string_handler),
        RegexPattern::new(r#"^""#, unterminated_string_handler),
        RegexPattern::new(r"^[0-9]+(\.[0-9]+)?", number_handler),
        RegexPattern::new(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new(r"^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new(r"^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new(r"^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        RegexPattern::new(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new(r"^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new(r"^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new(r"^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new(r"^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new(r"^\|\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        RegexPattern::new(r"^&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        RegexPattern::new(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves `n` bytes forward, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        for c in self.source[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn block_comment_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.position();

    match lexer.remainder()[matched.len()..].find("*/") {
        Some(offset) => {
            lexer.advance_n(matched.len() + offset + 2);
            Ok(())
        }
        None => Err(Error::new(ErrorImpl::UnterminatedComment, start)),
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = if matched.contains('.') {
        TokenKind::Decimal
    } else {
        TokenKind::Number
    };

    let start = lexer.position();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        kind,
        matched.to_string(),
        Span::new(start, lexer.position())
    ));
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.position();
    lexer.advance_n(matched.len());

    let mut result = String::new();
    let mut chars = matched[1..matched.len() - 1].chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some(other) => {
                // Unknown escapes are kept as written
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    lexer.push(MK_TOKEN!(
        TokenKind::String,
        result,
        Span::new(start, lexer.position())
    ));
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, lexer.position()))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let start = lexer.position();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(
        kind,
        matched.to_string(),
        Span::new(start, lexer.position())
    ));
    Ok(())
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|m| (pattern.handler, m.as_str().to_string()))
        });

        match found {
            Some((handler, matched)) => handler(&mut lex, &matched)?,
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    lex.position(),
                ));
            }
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span::new(end, end)
    ));

    debug!("tokenized {} tokens", lex.tokens.len());
    Ok(lex.tokens)
}
