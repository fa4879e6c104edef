//! Type expressions as written in source.
//!
//! There are two kinds of type: a basic type named by a keyword, and a
//! function signature. Function types nest freely as parameter or return
//! types. Types carry no location and compare structurally.

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Int,
    Bool,
}

impl BasicType {
    pub fn from_token_kind(kind: TokenKind) -> Option<BasicType> {
        match kind {
            TokenKind::Int => Some(BasicType::Int),
            TokenKind::Bool => Some(BasicType::Bool),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BasicType::Int => "int",
            BasicType::Bool => "bool",
        }
    }
}

/// A function signature: ordered parameter types and zero or more returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub parameters: Vec<Type>,
    pub returns: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Basic(BasicType),
    Function(FunctionType),
}

impl Type {
    pub fn int() -> Type {
        Type::Basic(BasicType::Int)
    }

    pub fn bool() -> Type {
        Type::Basic(BasicType::Bool)
    }

    pub fn function(parameters: Vec<Type>, returns: Vec<Type>) -> Type {
        Type::Function(FunctionType {
            parameters,
            returns,
        })
    }
}
