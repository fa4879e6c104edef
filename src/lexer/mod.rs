//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line breaks, which are emitted as tokens rather than skipped
//! - Token position tracking for error reporting
//! - The token stream cursor consumed by the parser

pub mod lexer;
pub mod stream;
pub mod tokens;
