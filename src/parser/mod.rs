//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (declarations, assignments, control flow, blocks)
//! - Expression parsing by precedence climbing, one function per level
//! - Function literals with grouped parameter types
//! - Type parsing for basic and function types
//!
//! Statements end at a line break, optionally preceded by `;`. The first
//! error aborts the parse; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
