use crate::{
    ast::{
        statements::{
            AssignStmt, Binding, BlockStmt, DefineStmt, EmptyStmt, ForKind, ForStmt, IfBranch,
            IfStmt, ReturnStmt, SingleStmt, Stmt, VarDeclStmt, VarSpec,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_expr_list},
    parser::Parser,
    types::try_parse_type,
};

/// Parses one statement together with its terminator.
///
/// A statement may be followed by `;` and must then end its line. A closing
/// `}` or the end of file also ends the line without being consumed.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(token) = parser.try_match(TokenKind::Semicolon) {
        parser.match_newline()?;
        return Ok(Stmt::Empty(EmptyStmt {
            position: token.span.start,
        }));
    }

    if let Some(token) = parser.try_match_newline() {
        return Ok(Stmt::Empty(EmptyStmt {
            position: token.span.start,
        }));
    }

    let handler = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();
    let stmt = match handler {
        Some(handler) => handler(parser)?,
        None => parse_simple_stmt(parser)?,
    };

    let has_semicolon = parser.try_match(TokenKind::Semicolon).is_some();
    parser.match_newline()?;

    Ok(match stmt {
        Stmt::Single(single) => Stmt::Single(SingleStmt {
            discard_value: has_semicolon,
            ..single
        }),
        stmt => stmt,
    })
}

/// Parses an expression statement, an assignment or a defining assignment,
/// without a terminator.
///
/// The leading expression is parsed once; the token after it decides which
/// of the three it starts.
pub fn parse_simple_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.get_position();
    let first = parse_expr(parser)?;

    if !matches!(
        parser.current_token_kind(),
        TokenKind::Comma | TokenKind::Assignment | TokenKind::Define
    ) {
        return Ok(Stmt::Single(SingleStmt {
            expression: first,
            discard_value: false,
            position,
        }));
    }

    let mut targets = vec![first];
    while parser.try_match(TokenKind::Comma).is_some() {
        targets.push(parse_expr(parser)?);
    }

    if parser.try_match(TokenKind::Assignment).is_some() {
        let values = parse_expr_list(parser)?;
        return Ok(Stmt::Assign(AssignStmt {
            targets,
            values,
            position,
        }));
    }

    let error = parser.unexpected("`=` or `:=`");
    parser.expect_error(TokenKind::Define, Some(error))?;

    let names = targets
        .iter()
        .map(|target| match target.as_identifier() {
            Some(identifier) => Ok(Binding {
                name: identifier.name.clone(),
                position: identifier.position.clone(),
            }),
            None => Err(Error::new(
                ErrorImpl::NonNameOnLeftOfDefine {
                    expr: target.to_string(),
                },
                target.get_position().clone(),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let values = parse_expr_list(parser)?;

    Ok(Stmt::Define(DefineStmt {
        names,
        values,
        position,
    }))
}

/// Parses `{ stmt* }` without a terminator after the `}`.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let position = parser.expect(TokenKind::OpenCurly)?.span.start;
    parser.try_match_newline();

    let mut body = Vec::new();
    while parser.try_match(TokenKind::CloseCurly).is_none() {
        if !parser.has_tokens() {
            return Err(parser.unexpected("`}`"));
        }
        body.push(parse_stmt(parser)?);
    }

    Ok(BlockStmt { body, position })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.expect(TokenKind::Var)?.span.start;

    let mut names = Vec::new();
    loop {
        let error = parser.unexpected("identifier during variable declaration");
        let name = parser.expect_error(TokenKind::Identifier, Some(error))?;
        names.push(Binding {
            name: name.value,
            position: name.span.start,
        });

        if parser.try_match(TokenKind::Comma).is_none() {
            break;
        }
    }

    let spec = match try_parse_type(parser)? {
        Some(explicit_type) => {
            let values = if parser.try_match(TokenKind::Assignment).is_some() {
                Some(parse_expr_list(parser)?)
            } else {
                None
            };
            VarSpec::Typed {
                explicit_type,
                values,
            }
        }
        None => {
            parser.expect(TokenKind::Assignment)?;
            VarSpec::Inferred {
                values: parse_expr_list(parser)?,
            }
        }
    };

    Ok(Stmt::VarDecl(VarDeclStmt {
        names,
        spec,
        position,
    }))
}

/// Parses `if c { } else if d { } else { }`, collecting branches in order.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.expect(TokenKind::If)?.span.start;

    let mut branches = Vec::new();
    let mut branch_position = position.clone();
    loop {
        let condition = parse_expr(parser)?;
        let body = parse_block(parser)?;
        branches.push(IfBranch {
            condition,
            body,
            position: branch_position,
        });

        if parser.try_match(TokenKind::Else).is_none() {
            return Ok(Stmt::If(IfStmt {
                branches,
                else_body: None,
                position,
            }));
        }

        match parser.try_match(TokenKind::If) {
            Some(token) => branch_position = token.span.start,
            None => {
                let else_body = parse_block(parser)?;
                return Ok(Stmt::If(IfStmt {
                    branches,
                    else_body: Some(else_body),
                    position,
                }));
            }
        }
    }
}

/// Parses the three `for` shapes.
///
/// The first clause is parsed once as a simple statement. A following `{`
/// makes it the loop condition, a following `;` makes it the init clause.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.expect(TokenKind::For)?.span.start;

    if parser.try_peek(TokenKind::OpenCurly).is_some() {
        let body = parse_block(parser)?;
        return Ok(Stmt::For(ForStmt {
            kind: ForKind::Infinite,
            body,
            position,
        }));
    }

    let init = if parser.try_peek(TokenKind::Semicolon).is_some() {
        None
    } else {
        let init = parse_simple_stmt(parser)?;

        if parser.try_peek(TokenKind::OpenCurly).is_some() {
            let condition = match init {
                Stmt::Single(single) => single.expression,
                other => {
                    return Err(Error::new(
                        ErrorImpl::StatementUsedAsValue {
                            stmt: other.to_string(),
                        },
                        other.get_position().clone(),
                    ))
                }
            };

            let body = parse_block(parser)?;
            return Ok(Stmt::For(ForStmt {
                kind: ForKind::Condition(condition),
                body,
                position,
            }));
        }

        Some(Box::new(init))
    };

    let error = parser.unexpected("`{` or `;`");
    parser.expect_error(TokenKind::Semicolon, Some(error))?;

    let condition = if parser.try_peek(TokenKind::Semicolon).is_some() {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect(TokenKind::Semicolon)?;

    let post = if parser.try_peek(TokenKind::OpenCurly).is_some() {
        None
    } else {
        let post_position = parser.get_position();
        match parse_simple_stmt(parser)? {
            Stmt::Define(_) => {
                return Err(Error::new(ErrorImpl::DeclarationInForPost, post_position))
            }
            post => Some(Box::new(post)),
        }
    };

    let body = parse_block(parser)?;

    Ok(Stmt::For(ForStmt {
        kind: ForKind::Clauses {
            init,
            condition,
            post,
        },
        body,
        position,
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Break(parser.expect(TokenKind::Break)?.span.start))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Continue(parser.expect(TokenKind::Continue)?.span.start))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.expect(TokenKind::Return)?.span.start;

    let values = if matches!(
        parser.current_token_kind(),
        TokenKind::Semicolon | TokenKind::Newline | TokenKind::CloseCurly | TokenKind::EOF
    ) {
        Vec::new()
    } else {
        parse_expr_list(parser)?
    };

    Ok(Stmt::Return(ReturnStmt { values, position }))
}
