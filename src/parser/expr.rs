use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, BinaryOperator, GroupingExpr, Literal, LiteralExpr, LogicalExpr,
            LogicalOperator, SymbolExpr, UnaryExpr, UnaryOperator,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let Some(nud_fn) = parser.nud_handler(parser.current_token_kind()) else {
        return Err(parser.unexpected("expected an expression"));
    };

    let mut left = nud_fn(parser)?;

    // Keep folding infix operators that bind tighter than `bp`
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = parser.binding_power(token_kind);

        if next_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.led_handler(token_kind) else {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        };

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let value = match token.kind {
        TokenKind::Number => match token.value.parse::<i64>() {
            Ok(value) => Literal::Integer(value),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                ))
            }
        },
        TokenKind::Decimal => match token.value.parse::<f64>() {
            Ok(value) => Literal::Real(value),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                ))
            }
        },
        TokenKind::String => Literal::Text(token.value.clone()),
        TokenKind::True => Literal::Boolean(true),
        TokenKind::False => Literal::Boolean(false),
        TokenKind::Nil => Literal::Null,
        TokenKind::Identifier => {
            parser.advance();
            return Ok(Expr::Variable(SymbolExpr {
                value: token.value,
                span: token.span,
            }));
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.value },
                token.span.start,
            ))
        }
    };

    parser.advance();
    Ok(Expr::Literal(LiteralExpr {
        value,
        span: token.span,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let operator = match operator_token.kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Dash => BinaryOperator::Subtract,
        TokenKind::Star => BinaryOperator::Multiply,
        TokenKind::Slash => BinaryOperator::Divide,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::LessEquals => BinaryOperator::LessEquals,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::GreaterEquals => BinaryOperator::GreaterEquals,
        TokenKind::Equals => BinaryOperator::Equals,
        TokenKind::NotEquals => BinaryOperator::NotEquals,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        operator_position: operator_token.span.start,
        right: Box::new(right),
    }))
}

pub fn parse_logical_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let operator = match operator_token.kind {
        TokenKind::And => LogicalOperator::And,
        TokenKind::Or => LogicalOperator::Or,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Logical(LogicalExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        operator_position: operator_token.span.start,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let operator = match operator_token.kind {
        TokenKind::Dash => UnaryOperator::Negate,
        TokenKind::Not => UnaryOperator::Not,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        span: operator_token.span.to(rhs.get_span()),
        operator,
        operand: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.advance().clone();
    let expr = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect_detailed(TokenKind::CloseParen, "expected ')' to close the group")?;

    Ok(Expr::Grouping(GroupingExpr {
        inner: Box::new(expr),
        span: open.span.to(&close.span),
    }))
}
