use crate::{
    ast::expressions::{
        BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
        InfixExpression, IntegerLiteral, PrefixExpression, StringLiteral,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { token: kind },
            parser.get_position(),
        ));
    };

    let mut left = nud(parser)?;

    // While the current token is an infix operator binding strictly tighter
    // than the caller, it takes `left` as its left operand. Strict
    // comparison is what makes equal-precedence chains left-associative.
    loop {
        let kind = parser.current_token_kind();
        let power = parser
            .get_bp_lookup()
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default);
        if power <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&kind).copied() else {
            break;
        };

        left = led(parser, left, power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse::<i64>();

            match result {
                Ok(value) => {
                    parser.advance();
                    Ok(Expression::Integer(IntegerLiteral { value }))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::IntegerParseError {
                        literal: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::Identifier => Ok(Expression::Identifier(Identifier {
            value: parser.advance().value.clone(),
        })),
        TokenKind::String => Ok(Expression::String(StringLiteral {
            value: parser.advance().value.clone(),
        })),
        TokenKind::True | TokenKind::False => Ok(Expression::Boolean(BooleanLiteral {
            value: parser.advance().kind == TokenKind::True,
        })),
        kind => Err(Error::new(
            ErrorImpl::NoPrefixParseFn { token: kind },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpression {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator = parser.advance().clone();

    // Unary power, so `-1 + 2` parses as `((-1) + 2)`.
    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expression::Prefix(PrefixExpression {
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance(); // (

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expression)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> Result<Expression, Error> {
    parser.advance(); // (

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expression::Call(CallExpression {
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance(); // if

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpression {
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance(); // fn

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        parameters.push(Identifier {
            value: parser.expect(TokenKind::Identifier)?.value,
        });

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            parameters.push(Identifier {
                value: parser.expect(TokenKind::Identifier)?.value,
            });
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block_stmt(parser)?;

    Ok(Expression::Function(FunctionLiteral { parameters, body }))
}
