//! The cursor the parser pulls tokens from.
//!
//! Line breaks are first-class tokens here, so besides the usual
//! peek/match primitives the stream has newline-specific variants that
//! implement the statement terminator rule.

use crate::errors::errors::{Error, ErrorImpl};

use super::tokens::{Token, TokenKind};

pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Wraps a token vector. A trailing `EOF` token is added when missing so
    /// the cursor always has something to look at.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let span = tokens
                .last()
                .map(|token| token.span.clone())
                .unwrap_or_else(|| crate::Span {
                    start: crate::Position::null(),
                    end: crate::Position::null(),
                });
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span,
            });
        }

        TokenStream { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub fn at_end(&self) -> bool {
        self.current_kind() == TokenKind::EOF
    }

    /// Advances to the next token and returns the previous one. The cursor
    /// never moves past `EOF`.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Non-consuming test of the current token.
    pub fn try_peek(&self, kind: TokenKind) -> Option<&Token> {
        let token = self.current();
        (token.kind == kind).then_some(token)
    }

    /// Consumes the current token if it is of the given kind.
    pub fn try_match(&mut self, kind: TokenKind) -> Option<Token> {
        if self.current_kind() == kind {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes the current token if it is any of the given kinds.
    pub fn try_match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.contains(&self.current_kind()) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Expects a token of the specified kind, failing with `error` if given.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Option<Error>) -> Result<Token, Error> {
        if self.current_kind() == expected_kind {
            return Ok(self.advance());
        }

        match error {
            Some(error) => Err(error),
            None => Err(self.unexpected(expected_kind.describe())),
        }
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    pub fn try_match_newline(&mut self) -> Option<Token> {
        self.try_match(TokenKind::Newline)
    }

    /// Closes a logical line: consumes a newline, or accepts an upcoming `}`
    /// or end of file without consuming them.
    pub fn match_newline(&mut self) -> Result<(), Error> {
        match self.current_kind() {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::CloseCurly | TokenKind::EOF => Ok(()),
            _ => Err(self.unexpected(TokenKind::Newline.describe())),
        }
    }

    /// Builds an "unexpected token" error at the current token.
    pub fn unexpected(&self, expected: String) -> Error {
        let token = self.current();
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: token.describe(),
            },
            token.span.start.clone(),
        )
    }
}
