use crate::{
    ast::{
        ast::{Identifier, Stmt},
        statements::{AssignStmt, BlockStmt, ExpressionStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// Parses one statement and its `;`.
///
/// The form is picked from the current token and up to two tokens of
/// lookahead:
/// 1. `name =` starts an assignment.
/// 2. `{` starts a block, unless it is followed by `}` or its second token
///    is `:`, which is how an empty map or a `{"key": ...}` map begins.
/// 3. Anything else is an expression statement.
///
/// The terminator may only be left out when the statement ends the input.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt = if parser.test(TokenKind::Identifier) && parser.look(1).kind == TokenKind::Assignment {
        tracing::trace!(variable = %parser.current().value, "assignment statement");
        parse_assign_stmt(parser)?
    } else if parser.test(TokenKind::OpenCurly)
        && parser.look(1).kind != TokenKind::CloseCurly
        && parser.look(2).kind != TokenKind::Colon
    {
        tracing::trace!("block statement");
        Stmt::Block(parser.nested(parse_block_stmt)?)
    } else {
        parse_expression_stmt(parser)?
    };

    if !parser.eof() {
        parser.expect(TokenKind::Semicolon, Some("statements must be terminated by `;`"))?;
    }

    Ok(stmt)
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let open = parser.expect(TokenKind::OpenCurly, Some("block must begin with `{`"))?;

    let mut body = Vec::new();
    while !parser.test(TokenKind::CloseCurly) && !parser.eof() {
        body.push(parse_stmt(parser)?);
    }

    let close = parser.expect(TokenKind::CloseCurly, Some("block must be closed by `}`"))?;

    Ok(BlockStmt {
        body,
        span: open.span.to(&close.span),
    })
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = parser.expect(TokenKind::Identifier, Some("assignment target must be an identifier"))?;
    parser.expect(TokenKind::Assignment, Some("expected `=` after assignment target"))?;

    let value = parse_expr(parser)?;

    Ok(Stmt::Assign(AssignStmt {
        span: target.span.to(value.get_span()),
        target: Identifier {
            name: target.value,
            span: target.span,
        },
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().clone(),
        expression,
    }))
}
