use crate::{
    ast::{
        expressions::{
            AdditiveOperator, BinaryExpr, BooleanExpr, ComparisonOperator, Expr, FunctionExpr,
            IdentifierExpr, IntegerExpr, LogicalExpr, MultiplicativeOperator, Parameter,
            UnaryExpr, UnaryOperator,
        },
        statements::Binding,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::BindingPower,
    parser::Parser,
    stmt::parse_block,
    types::{parse_return_types, try_parse_type},
};

type OperandParser = fn(&mut Parser) -> Result<Expr, Error>;
type Combiner = fn(Token, Expr, Expr) -> Result<Expr, Error>;

/// Parses a full expression. Function literals are only recognised here,
/// never as operands.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.try_peek(TokenKind::Func).is_some() {
        return parse_function_expr(parser);
    }

    parse_logical_or_expr(parser)
}

/// Parses `expr (, expr)*`.
pub fn parse_expr_list(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut exprs = vec![parse_expr(parser)?];
    while parser.try_match(TokenKind::Comma).is_some() {
        exprs.push(parse_expr(parser)?);
    }
    Ok(exprs)
}

// One precedence level: operands from the next tighter level, folded to the
// left while the current token is an operator of this level.
fn parse_binary_level(
    parser: &mut Parser,
    level: BindingPower,
    operand: OperandParser,
    combine: Combiner,
) -> Result<Expr, Error> {
    let mut left = operand(parser)?;

    while parser.get_binding_power(parser.current_token_kind()) == level {
        let operator = parser.advance();
        let right = operand(parser)?;
        left = combine(operator, left, right)?;
    }

    Ok(left)
}

fn unexpected_operator(level: &str, operator: &Token) -> Error {
    Error::new(
        ErrorImpl::InternalError {
            message: format!("{} is not a {} operator", operator.describe(), level),
        },
        operator.span.start.clone(),
    )
}

pub fn parse_logical_or_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(
        parser,
        BindingPower::LogicalOr,
        parse_logical_and_expr,
        |operator, left, right| match operator.kind {
            TokenKind::Or => Ok(Expr::LogicalOr(LogicalExpr {
                left: Box::new(left),
                right: Box::new(right),
                position: operator.span.start,
            })),
            _ => Err(unexpected_operator("logical or", &operator)),
        },
    )
}

pub fn parse_logical_and_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(
        parser,
        BindingPower::LogicalAnd,
        parse_comparison_expr,
        |operator, left, right| match operator.kind {
            TokenKind::And => Ok(Expr::LogicalAnd(LogicalExpr {
                left: Box::new(left),
                right: Box::new(right),
                position: operator.span.start,
            })),
            _ => Err(unexpected_operator("logical and", &operator)),
        },
    )
}

pub fn parse_comparison_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(
        parser,
        BindingPower::Relational,
        parse_additive_expr,
        |operator, left, right| {
            let comparison = match operator.kind {
                TokenKind::Equals => ComparisonOperator::Equal,
                TokenKind::NotEquals => ComparisonOperator::NotEqual,
                TokenKind::Greater => ComparisonOperator::Greater,
                TokenKind::Less => ComparisonOperator::Less,
                TokenKind::GreaterEquals => ComparisonOperator::GreaterEqual,
                TokenKind::LessEquals => ComparisonOperator::LessEqual,
                _ => return Err(unexpected_operator("comparison", &operator)),
            };

            Ok(Expr::Comparison(BinaryExpr {
                operator: comparison,
                left: Box::new(left),
                right: Box::new(right),
                position: operator.span.start,
            }))
        },
    )
}

pub fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(
        parser,
        BindingPower::Additive,
        parse_multiplicative_expr,
        |operator, left, right| {
            let additive = match operator.kind {
                TokenKind::Plus => AdditiveOperator::Add,
                TokenKind::Dash => AdditiveOperator::Subtract,
                _ => return Err(unexpected_operator("additive", &operator)),
            };

            Ok(Expr::Additive(BinaryExpr {
                operator: additive,
                left: Box::new(left),
                right: Box::new(right),
                position: operator.span.start,
            }))
        },
    )
}

pub fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(
        parser,
        BindingPower::Multiplicative,
        parse_unary_expr,
        |operator, left, right| {
            let multiplicative = match operator.kind {
                TokenKind::Star => MultiplicativeOperator::Multiply,
                TokenKind::Slash => MultiplicativeOperator::Divide,
                TokenKind::Percent => MultiplicativeOperator::Modulo,
                _ => return Err(unexpected_operator("multiplicative", &operator)),
            };

            Ok(Expr::Multiplicative(BinaryExpr {
                operator: multiplicative,
                left: Box::new(left),
                right: Box::new(right),
                position: operator.span.start,
            }))
        },
    )
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(operator) = parser.try_match_any(&[TokenKind::Dash, TokenKind::Not]) else {
        return parse_primary_expr(parser);
    };

    let unary = match operator.kind {
        TokenKind::Dash => UnaryOperator::Negate,
        TokenKind::Not => UnaryOperator::Not,
        _ => return Err(unexpected_operator("prefix", &operator)),
    };
    let operand = parse_unary_expr(parser)?;

    Ok(Expr::Unary(UnaryExpr {
        operator: unary,
        operand: Box::new(operand),
        position: operator.span.start,
    }))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Identifier(IdentifierExpr {
                name: token.value,
                position: token.span.start,
            }))
        }
        TokenKind::Number => {
            // Literals carry no sign, so `-9223372036854775808` overflows.
            let token = parser.advance();
            match token.value.parse() {
                Ok(value) => Ok(Expr::Integer(IntegerExpr {
                    value,
                    position: token.span.start,
                })),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: token.value },
                    token.span.start,
                )),
            }
        }
        TokenKind::True | TokenKind::False => {
            let token = parser.advance();
            Ok(Expr::Boolean(BooleanExpr {
                value: token.kind == TokenKind::True,
                position: token.span.start,
            }))
        }
        TokenKind::OpenParen => parse_grouping_expr(parser),
        TokenKind::String => Err(Error::new(
            ErrorImpl::NotImplementedError {
                construct: String::from("string literal expression"),
            },
            parser.get_position(),
        )),
        _ => Err(parser.unexpected("expression")),
    }
}

/// Parentheses only group; they leave no node behind.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_logical_or_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses `func(a, b int, c bool) (int, bool) { ... }`.
pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.expect(TokenKind::Func)?.span.start;

    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_parameters(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let returns = parse_return_types(parser)?;
    let body = parse_block(parser)?;

    Ok(Expr::Function(FunctionExpr {
        parameters,
        returns,
        body,
        position,
    }))
}

/// Parameters come in runs of names sharing the type written after the
/// last of them: in `a, b int` both `a` and `b` are `int`.
fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    let mut parameters = Vec::new();
    if parser.try_peek(TokenKind::CloseParen).is_some() {
        return Ok(parameters);
    }

    let mut untyped: Vec<Binding> = Vec::new();
    loop {
        let name = parser.expect(TokenKind::Identifier)?;
        untyped.push(Binding {
            name: name.value,
            position: name.span.start,
        });

        if let Some(ty) = try_parse_type(parser)? {
            parameters.extend(untyped.drain(..).map(|binding| Parameter {
                ty: ty.clone(),
                name: binding.name,
                position: binding.position,
            }));
        }

        if parser.try_match(TokenKind::Comma).is_none() {
            break;
        }
    }

    if let Some(binding) = untyped.into_iter().next() {
        return Err(Error::new(
            ErrorImpl::MissingParameterType { name: binding.name },
            binding.position,
        ));
    }

    Ok(parameters)
}
