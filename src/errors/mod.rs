//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while lexing and parsing:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, grammar and internal failures
//! - Classification into syntax, not-implemented and internal errors
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
