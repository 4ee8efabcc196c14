use crate::{
    ast::{
        ast::{Expr, Identifier},
        expressions::{
            ArrayExpr, BinaryExpr, CallExpr, LiteralExpr, LiteralValue, MapExpr, MemberExpr,
            MemberProperty, UnaryExpr, UpdateExpr, VariableExpr,
        },
        operators::{BinaryOperator, UnaryOperator, UpdateOperator},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{BindingPower, Token, TokenKind},
};

use super::{
    lookups::{led_for, nud_for, Led, Nud},
    parser::Parser,
};

/// Parses a full expression: one operand, then any binary operators
/// following it.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_primary_expr(parser)?;

    if parser.is_binary_operator() {
        return parse_binary_expr(parser, left, BindingPower::Default);
    }

    Ok(left)
}

/// Precedence climbing over `left` and the operator/operand pairs after it.
///
/// Only operators binding tighter than `min_bp` are consumed. When the
/// operator after a right operand binds tighter than the one before it, the
/// right operand is climbed first; equal precedence folds left.
pub fn parse_binary_expr(parser: &mut Parser, mut left: Expr, min_bp: BindingPower) -> Result<Expr, Error> {
    while parser.is_binary_operator() && parser.binary_precedence() > min_bp {
        let operator_token = parser.next();
        let bp = operator_token.binary_precedence();
        let operator = binary_operator(&operator_token)?;

        let mut right = parse_primary_expr(parser)?;

        if bp < parser.binary_precedence() {
            right = parse_binary_expr(parser, right, bp)?;
        }

        left = Expr::Binary(BinaryExpr {
            span: left.get_span().to(right.get_span()),
            operator,
            left: Box::new(left),
            right: Box::new(right),
        });
    }

    Ok(left)
}

fn binary_operator(token: &Token) -> Result<BinaryOperator, Error> {
    BinaryOperator::from_token_kind(token.kind).ok_or_else(|| unexpected_token(token))
}

fn unexpected_token(token: &Token) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            kind: token.kind,
            token: token.value.clone(),
        },
        token.span.start.clone(),
    )
}

/// Parses a single operand and the postfix chain hanging off it.
///
/// Every nested operand (grouping, unary, container element, argument,
/// index) passes through here, so this is where nesting depth is counted.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(parse_nested_primary_expr)
}

fn parse_nested_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let expr = match nud_for(parser.current_kind()) {
        Nud::Literal => parse_literal_expr(parser)?,
        Nud::Identifier => parse_identifier_expr(parser),
        Nud::Array => parse_array_expr(parser)?,
        Nud::Map => parse_map_expr(parser)?,
        Nud::Grouping => parse_grouping_expr(parser)?,
        Nud::PrefixUpdate => parse_prefix_update_expr(parser)?,
        Nud::Unary => parse_unary_expr(parser)?,
        Nud::None => return Err(unexpected_token(parser.current())),
    };

    parse_postfix_expr(parser, expr)
}

fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.next();

    let value = match token.kind {
        TokenKind::Number => match token.value.parse::<f64>() {
            Ok(number) => LiteralValue::Number(number),
            Err(_) => {
                return Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value.clone() },
                    token.span.start.clone(),
                ))
            }
        },
        TokenKind::String => LiteralValue::String(token.value.clone()),
        _ => return Err(unexpected_token(&token)),
    };

    Ok(Expr::Literal(LiteralExpr {
        value,
        raw: token.raw,
        span: token.span,
    }))
}

/// `true`, `false` and `null` are matched case-insensitively; anything else
/// is a variable.
fn parse_identifier_expr(parser: &mut Parser) -> Expr {
    let token = parser.next();

    let value = match token.value.to_ascii_lowercase().as_str() {
        "true" => LiteralValue::Boolean(true),
        "false" => LiteralValue::Boolean(false),
        "null" => LiteralValue::Null,
        _ => {
            return Expr::Variable(VariableExpr {
                name: token.value,
                span: token.span,
            })
        }
    };

    Expr::Literal(LiteralExpr {
        value,
        raw: token.raw,
        span: token.span,
    })
}

/// `( expr )` yields the inner node itself, with its span widened to the
/// parentheses so that anything built on it starts at the `(`.
fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect(TokenKind::OpenParen, Some("parenthesized expression must begin with `(`"))?;
    let mut expr = parse_expr(parser)?;
    let close = parser.expect(TokenKind::CloseParen, Some("parenthesized expression must be closed by `)`"))?;

    *expr.span_mut() = open.span.to(&close.span);
    Ok(expr)
}

/// `!x`, `+x`, `-x`. The operand is a single primary expression, so unary
/// operators never take part in precedence climbing.
fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.next();
    let operator = UnaryOperator::from_token_kind(operator_token.kind)
        .ok_or_else(|| unexpected_token(&operator_token))?;

    let argument = parse_primary_expr(parser)?;

    Ok(Expr::Unary(UnaryExpr {
        span: operator_token.span.to(argument.get_span()),
        operator,
        argument: Box::new(argument),
    }))
}

fn update_operator(token: &Token) -> Result<UpdateOperator, Error> {
    UpdateOperator::from_token_kind(token.kind).ok_or_else(|| unexpected_token(token))
}

fn parse_prefix_update_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.next();
    let operator = update_operator(&operator_token)?;

    let argument = parse_primary_expr(parser)?;
    let span = operator_token.span.to(argument.get_span());

    Ok(Expr::Update(UpdateExpr::new(operator, argument, true, span)?))
}

/// Extends `expr` with calls, member accesses and postfix updates until the
/// current token continues none of them.
pub fn parse_postfix_expr(parser: &mut Parser, mut expr: Expr) -> Result<Expr, Error> {
    loop {
        expr = match led_for(parser.current_kind()) {
            Some(Led::Call) => parse_call_expr(parser, expr)?,
            Some(Led::Member) => parse_member_expr(parser, expr)?,
            Some(Led::ComputedMember) => parse_computed_member_expr(parser, expr)?,
            Some(Led::PostfixUpdate) => parse_postfix_update_expr(parser, expr)?,
            None => return Ok(expr),
        };
    }
}

fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    let (arguments, close) = parse_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        span: callee.get_span().to(&close.span),
        callee: Box::new(callee),
        arguments,
    }))
}

/// `object.name`, and `object.name(...)` as a method call.
fn parse_member_expr(parser: &mut Parser, object: Expr) -> Result<Expr, Error> {
    parser.expect(TokenKind::Dot, None)?;
    let property = parser.expect(TokenKind::Identifier, Some("expected a property name after `.`"))?;

    let member = Expr::Member(MemberExpr {
        span: object.get_span().to(&property.span),
        object: Box::new(object),
        property: MemberProperty::Identifier(Identifier {
            name: property.value,
            span: property.span,
        }),
    });

    if parser.test(TokenKind::OpenParen) {
        return parse_call_expr(parser, member);
    }

    Ok(member)
}

fn parse_computed_member_expr(parser: &mut Parser, object: Expr) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket, None)?;
    let property = parse_expr(parser)?;
    let close = parser.expect(TokenKind::CloseBracket, Some("computed member access must be closed by `]`"))?;

    Ok(Expr::Member(MemberExpr {
        span: object.get_span().to(&close.span),
        object: Box::new(object),
        property: MemberProperty::Computed(Box::new(property)),
    }))
}

fn parse_postfix_update_expr(parser: &mut Parser, argument: Expr) -> Result<Expr, Error> {
    let operator_token = parser.next();
    let operator = update_operator(&operator_token)?;
    let span = argument.get_span().to(&operator_token.span);

    Ok(Expr::Update(UpdateExpr::new(operator, argument, false, span)?))
}

// CONTAINERS

fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect(TokenKind::OpenBracket, Some("array literal must begin with `[`"))?;

    let mut elements = vec![];
    while !parser.test(TokenKind::CloseBracket) && !parser.eof() {
        if !elements.is_empty() {
            parser.expect(TokenKind::Comma, Some("array elements must be separated by `,`"))?;
        }
        elements.push(parse_expr(parser)?);
    }

    let close = parser.expect(TokenKind::CloseBracket, Some("array literal must be closed by `]`"))?;

    Ok(Expr::Array(ArrayExpr {
        elements,
        span: open.span.to(&close.span),
    }))
}

fn parse_map_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect(TokenKind::OpenCurly, Some("map literal must begin with `{`"))?;

    let mut entries = vec![];
    while !parser.test(TokenKind::CloseCurly) && !parser.eof() {
        if !entries.is_empty() {
            parser.expect(TokenKind::Comma, Some("map entries must be separated by `,`"))?;
        }

        let key = parser.expect(TokenKind::String, Some("map keys must be string literals"))?;
        parser.expect(TokenKind::Colon, Some("map key must be followed by `:`"))?;
        let value = parse_expr(parser)?;

        entries.push((
            LiteralExpr {
                value: LiteralValue::String(key.value),
                raw: key.raw,
                span: key.span,
            },
            value,
        ));
    }

    let close = parser.expect(TokenKind::CloseCurly, Some("map literal must be closed by `}`"))?;

    Ok(Expr::Map(MapExpr {
        entries,
        span: open.span.to(&close.span),
    }))
}

/// Parses `(a, b, ...)` and returns the arguments with the closing paren.
fn parse_arguments(parser: &mut Parser) -> Result<(Vec<Expr>, Token), Error> {
    parser.expect(TokenKind::OpenParen, Some("argument list must begin with `(`"))?;

    let mut arguments = vec![];
    while !parser.test(TokenKind::CloseParen) && !parser.eof() {
        if !arguments.is_empty() {
            parser.expect(TokenKind::Comma, Some("arguments must be separated by `,`"))?;
        }
        arguments.push(parse_expr(parser)?);
    }

    let close = parser.expect(TokenKind::CloseParen, Some("argument list must be closed by `)`"))?;

    Ok((arguments, close))
}
