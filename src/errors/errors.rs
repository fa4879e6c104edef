use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A front-end failure: what went wrong and where.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{position}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input. The caller may report it and carry on with other sources.
    Syntax,
    /// Input reached a grammar position that has no production yet.
    NotImplemented,
    /// The parser broke one of its own invariants.
    Internal,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::NotImplementedError { .. } => ErrorKind::NotImplemented,
            ErrorImpl::InternalError { .. } => ErrorKind::Internal,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NonNameOnLeftOfDefine { .. } => "NonNameOnLeftOfDefine",
            ErrorImpl::DeclarationInForPost => "DeclarationInForPost",
            ErrorImpl::StatementUsedAsValue { .. } => "StatementUsedAsValue",
            ErrorImpl::MissingTypeAfterComma { .. } => "MissingTypeAfterComma",
            ErrorImpl::MissingParameterType { .. } => "MissingParameterType",
            ErrorImpl::NotImplementedError { .. } => "NotImplementedError",
            ErrorImpl::InternalError { .. } => "InternalError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected {}, found {}", expected, found))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, literals are unsigned and must fit in a 64-bit signed integer",
                token
            )),
            ErrorImpl::NonNameOnLeftOfDefine { expr } => ErrorTip::Suggestion(format!(
                "`{}` is not a name, only names can be declared with `:=`",
                expr
            )),
            ErrorImpl::DeclarationInForPost => ErrorTip::Suggestion(String::from(
                "Use `=` instead of `:=` in the post statement of a for loop",
            )),
            ErrorImpl::StatementUsedAsValue { stmt } => ErrorTip::Suggestion(format!(
                "`{}` is a statement, a loop condition must be an expression",
                stmt
            )),
            ErrorImpl::MissingTypeAfterComma { found } => ErrorTip::Suggestion(format!(
                "Expected a type after `,`, found {}",
                found
            )),
            ErrorImpl::MissingParameterType { name } => ErrorTip::Suggestion(format!(
                "Parameter `{}` needs a type, either its own or one following it",
                name
            )),
            ErrorImpl::NotImplementedError { .. } => ErrorTip::Suggestion(String::from(
                "This feature is expected to be handled, but has not yet been implemented",
            )),
            ErrorImpl::InternalError { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken { expected: String, found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("non-name {expr} on left side of :=")]
    NonNameOnLeftOfDefine { expr: String },
    #[error("cannot declare in post statement of for loop")]
    DeclarationInForPost,
    #[error("cannot use {stmt} as value")]
    StatementUsedAsValue { stmt: String },
    #[error("expected type after comma, found {found}")]
    MissingTypeAfterComma { found: String },
    #[error("missing type for parameter {name:?}")]
    MissingParameterType { name: String },
    #[error("not implemented: {construct}")]
    NotImplementedError { construct: String },
    #[error("internal error: {message}")]
    InternalError { message: String },
}
