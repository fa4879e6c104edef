use std::collections::HashMap;

use crate::{ast::statements::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Precedence levels of the binary operators, loosest first. Prefix
/// operators bind tighter than all of them.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Relational,
    Additive,
    Multiplicative,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.infix(TokenKind::Or, BindingPower::LogicalOr);
    parser.infix(TokenKind::And, BindingPower::LogicalAnd);

    // Relational
    parser.infix(TokenKind::Equals, BindingPower::Relational);
    parser.infix(TokenKind::NotEquals, BindingPower::Relational);
    parser.infix(TokenKind::Less, BindingPower::Relational);
    parser.infix(TokenKind::LessEquals, BindingPower::Relational);
    parser.infix(TokenKind::Greater, BindingPower::Relational);
    parser.infix(TokenKind::GreaterEquals, BindingPower::Relational);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, BindingPower::Additive);
    parser.infix(TokenKind::Dash, BindingPower::Additive);
    parser.infix(TokenKind::Star, BindingPower::Multiplicative);
    parser.infix(TokenKind::Slash, BindingPower::Multiplicative);
    parser.infix(TokenKind::Percent, BindingPower::Multiplicative);

    // Statements
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::Continue, parse_continue_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
