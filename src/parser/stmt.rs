use crate::{
    ast::statements::{
        BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement,
    },
    ast::expressions::Identifier,
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let kind = parser.current_token_kind();
    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;

    consume_optional_semicolon(parser);

    Ok(Statement::Expression(ExpressionStatement { expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.advance(); // let

    let name = Identifier {
        value: parser.expect(TokenKind::Identifier)?.value,
    };
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::Default)?;

    consume_optional_semicolon(parser);

    Ok(Statement::Let(LetStatement { name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.advance(); // return

    let value = parse_expr(parser, BindingPower::Default)?;

    consume_optional_semicolon(parser);

    Ok(Statement::Return(ReturnStatement { value }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStatement, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly
        && parser.current_token_kind() != TokenKind::EOF
    {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStatement { statements })
}

// Trailing semicolons are optional after every statement form, so shell
// entries like `5 + 5` work without one.
fn consume_optional_semicolon(parser: &mut Parser) {
    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}
