use crate::{
    ast::{
        ast::Stmt,
        statements::{
            AssignmentStmt, BlockStmt, ForStmt, Identifier, IfStmt, PrintStmt, ReadStmt,
            VarDeclStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let Some(stmt_fn) = parser.stmt_handler(parser.current_token_kind()) else {
        return Err(parser.unexpected("expected a statement"));
    };

    stmt_fn(parser)
}

fn parse_identifier(parser: &mut Parser, message: &str) -> Result<Identifier, Error> {
    let token = parser.expect_detailed(TokenKind::Identifier, message)?;
    Ok(Identifier {
        name: token.value,
        span: token.span,
    })
}

/// `var name type (= value)?` without the trailing semicolon, shared with
/// the `for` initializer.
pub fn parse_var_decl(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Var)?.span.start;

    let identifier = parse_identifier(parser, "expected identifier during variable declaration")?;
    let explicit_type = parse_type(parser)?;

    let assigned_value = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        explicit_type,
        assigned_value,
        span: Span::new(start, parser.last_end()),
    }))
}

/// `name = value` without the trailing semicolon, shared with the `for`
/// initializer and increment.
pub fn parse_assignment(parser: &mut Parser) -> Result<Stmt, Error> {
    let assignee = parse_identifier(parser, "expected the name of the variable to assign")?;
    parser.expect_detailed(TokenKind::Assignment, "expected '=' in assignment")?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        span: assignee.span.to(value.get_span()),
        assignee,
        value,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt = parse_var_decl(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(stmt)
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt = parse_assignment(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(stmt)
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser
        .expect_detailed(TokenKind::OpenCurly, "expected '{' to open a block")?
        .span
        .start;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected("expected '}' to close the block"));
        }
        statements.push(parse_stmt(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(Stmt::Block(BlockStmt {
        body: statements,
        span: Span::new(start, end),
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        if parser.current_token_kind() == TokenKind::If {
            Some(Box::new(parse_if_stmt(parser)?))
        } else {
            Some(Box::new(parse_block_stmt(parser)?))
        }
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body: Box::new(body),
        else_body,
        span: Span::new(start, parser.last_end()),
    }))
}

/// Three forms share the keyword:
///
/// - `for { ... }` loops forever
/// - `for cond { ... }` loops while `cond` holds
/// - `for init; cond; inc { ... }` where each part may be empty
///
/// The classic form is chosen when the clause starts with `var`, `;`, or an
/// assignment.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let mut init = None;
    let mut condition = None;
    let mut increment = None;

    let is_classic = match parser.current_token_kind() {
        TokenKind::Var | TokenKind::Semicolon => true,
        TokenKind::Identifier => parser.peek_kind() == TokenKind::Assignment,
        _ => false,
    };

    if is_classic {
        init = match parser.current_token_kind() {
            TokenKind::Var => Some(Box::new(parse_var_decl(parser)?)),
            TokenKind::Identifier => Some(Box::new(parse_assignment(parser)?)),
            _ => None,
        };
        parser.expect(TokenKind::Semicolon)?;

        if parser.current_token_kind() != TokenKind::Semicolon {
            condition = Some(parse_expr(parser, BindingPower::Default)?);
        }
        parser.expect(TokenKind::Semicolon)?;

        if parser.current_token_kind() != TokenKind::OpenCurly {
            increment = Some(Box::new(parse_assignment(parser)?));
        }
    } else if parser.current_token_kind() != TokenKind::OpenCurly {
        condition = Some(parse_expr(parser, BindingPower::Default)?);
    }

    let body = parse_block_stmt(parser)?;

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        increment,
        body: Box::new(body),
        span: Span::new(start, parser.last_end()),
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;
    parser.expect_detailed(TokenKind::OpenParen, "expected '(' after print")?;

    let mut expressions = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        expressions.push(parse_expr(parser, BindingPower::Default)?);
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            expressions.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    parser.expect_detailed(TokenKind::CloseParen, "expected ')' to close print")?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Print(PrintStmt {
        expressions,
        span: Span::new(start, parser.last_end()),
    }))
}

pub fn parse_read_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;
    parser.expect_detailed(TokenKind::OpenParen, "expected '(' after read")?;

    let mut variables = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        variables.push(parse_identifier(parser, "read expects variable names")?);
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            variables.push(parse_identifier(parser, "read expects variable names")?);
        }
    }

    parser.expect_detailed(TokenKind::CloseParen, "expected ')' to close read")?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Read(ReadStmt {
        variables,
        span: Span::new(start, parser.last_end()),
    }))
}
