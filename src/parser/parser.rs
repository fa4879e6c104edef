//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! Expressions are parsed by layered precedence climbing, statements by
//! recursive descent dispatched on the current token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Binding powers of the binary operators
//! - Type parsing handlers

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::statements::Stmt,
    errors::errors::Error,
    lexer::{
        lexer::tokenize,
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_stmt,
    types::{create_token_type_lookups, TypeHandler, TypeLookup},
};

/// A parse session over one token stream.
///
/// The session owns its tokens and is consumed by [`Parser::parse`] or
/// [`Parser::statements`], so a finished session cannot be parsed again.
pub struct Parser {
    /// The token stream being parsed
    tokens: TokenStream,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operator binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type parsing handlers
    type_lookup: TypeLookup,
}

impl Parser {
    /// Creates a new Parser instance with all lookup tables registered.
    pub fn new(tokens: TokenStream) -> Self {
        let mut parser = Parser {
            tokens,
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        create_token_type_lookups(&mut parser);
        parser
    }

    /// Parses every top-level statement, stopping at the first error.
    pub fn parse(self) -> Result<Vec<Stmt>, Error> {
        debug!("parse started");
        let program = self.statements().collect::<Result<Vec<_>, _>>()?;
        debug!("parse finished with {} top-level statements", program.len());
        Ok(program)
    }

    /// Yields top-level statements one at a time as they are parsed.
    pub fn statements(self) -> Statements {
        Statements { parser: Some(self) }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.current_kind()
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        self.tokens.advance()
    }

    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Option<Error>) -> Result<Token, Error> {
        self.tokens.expect_error(expected_kind, error)
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.tokens.expect(expected_kind)
    }

    pub fn try_match(&mut self, kind: TokenKind) -> Option<Token> {
        self.tokens.try_match(kind)
    }

    pub fn try_match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        self.tokens.try_match_any(kinds)
    }

    pub fn try_peek(&self, kind: TokenKind) -> Option<&Token> {
        self.tokens.try_peek(kind)
    }

    pub fn try_match_newline(&mut self) -> Option<Token> {
        self.tokens.try_match_newline()
    }

    pub fn match_newline(&mut self) -> Result<(), Error> {
        self.tokens.match_newline()
    }

    /// Builds an "unexpected token" error at the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        self.tokens.unexpected(expected.to_string())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.tokens.at_end()
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_type_lookup(&self) -> &TypeLookup {
        &self.type_lookup
    }

    /// Binding power of `kind` as a binary operator.
    pub fn get_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a binary operator at the given precedence level.
    pub fn infix(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a handler for types starting with `kind`.
    pub fn type_nud(&mut self, kind: TokenKind, type_fn: TypeHandler) {
        self.type_lookup.insert(kind, type_fn);
    }
}

/// Top-level statements pulled lazily from a parse session.
///
/// Iteration ends after the token stream is exhausted or after the first
/// error, which is yielded once.
pub struct Statements {
    parser: Option<Parser>,
}

impl Iterator for Statements {
    type Item = Result<Stmt, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let parser = self.parser.as_mut()?;

        if !parser.has_tokens() {
            self.parser = None;
            return None;
        }

        let result = parse_stmt(parser);
        match &result {
            Ok(stmt) => trace!("parsed statement at {}", stmt.get_position()),
            Err(_) => self.parser = None,
        }

        Some(result)
    }
}

/// Parses a token vector into its top-level statements.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, Error> {
    Parser::new(TokenStream::new(tokens)).parse()
}

/// Tokenizes and parses `source`, naming it `file` in positions.
pub fn parse_source(source: &str, file: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    parse(tokens)
}
