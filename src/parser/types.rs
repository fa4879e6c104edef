//! Type parsing implementation.
//!
//! Types are either a basic type keyword (`int`, `bool`) or a function
//! signature `func(T, U) R` / `func(T) (R, S)` / `func()`. Handlers are
//! looked up by the token a type starts with, so trying to parse a type at
//! a position that cannot start one consumes nothing.

use std::collections::HashMap;

use crate::{
    ast::types::{BasicType, Type},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for type handler functions.
pub type TypeHandler = fn(&mut Parser) -> Result<Type, Error>;

/// Type alias for the type lookup table.
pub type TypeLookup = HashMap<TokenKind, TypeHandler>;

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Int, parse_basic_type);
    parser.type_nud(TokenKind::Bool, parse_basic_type);
    parser.type_nud(TokenKind::Func, parse_function_type);
}

/// Parses a type if the current token can start one.
///
/// Returns `Ok(None)` without consuming anything otherwise. Once a type has
/// started, malformed input is an error.
pub fn try_parse_type(parser: &mut Parser) -> Result<Option<Type>, Error> {
    let handler = parser.get_type_lookup().get(&parser.current_token_kind()).copied();

    match handler {
        Some(handler) => handler(parser).map(Some),
        None => Ok(None),
    }
}

pub fn parse_basic_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.advance();

    BasicType::from_token_kind(token.kind)
        .map(Type::Basic)
        .ok_or_else(|| {
            Error::new(
                ErrorImpl::InternalError {
                    message: format!("{} registered as a basic type", token.describe()),
                },
                token.span.start.clone(),
            )
        })
}

pub fn parse_function_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::Func)?;
    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_type_list(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    let returns = parse_return_types(parser)?;

    Ok(Type::function(parameters, returns))
}

/// Parses a possibly empty, comma separated list of types. Every comma must
/// be followed by a type.
pub fn parse_type_list(parser: &mut Parser) -> Result<Vec<Type>, Error> {
    let mut types = Vec::new();

    let Some(first) = try_parse_type(parser)? else {
        return Ok(types);
    };
    types.push(first);

    while parser.try_match(TokenKind::Comma).is_some() {
        match try_parse_type(parser)? {
            Some(ty) => types.push(ty),
            None => {
                return Err(Error::new(
                    ErrorImpl::MissingTypeAfterComma {
                        found: parser.current_token().describe(),
                    },
                    parser.get_position(),
                ))
            }
        }
    }

    Ok(types)
}

/// Parses the results of a signature: a parenthesized list, a single type,
/// or nothing at all.
pub fn parse_return_types(parser: &mut Parser) -> Result<Vec<Type>, Error> {
    if parser.try_match(TokenKind::OpenParen).is_some() {
        let types = parse_type_list(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        return Ok(types);
    }

    Ok(try_parse_type(parser)?.into_iter().collect())
}
