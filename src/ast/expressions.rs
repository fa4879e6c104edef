use crate::Position;

use super::{statements::BlockStmt, types::Type};

// LITERALS

/// Identifier Expression
/// A reference to a name. Resolution is left to later stages.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
    pub position: Position,
}

/// Integer Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub position: Position,
}

/// Boolean Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
    pub position: Position,
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditiveOperator {
    Add,
    Subtract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplicativeOperator {
    Multiply,
    Divide,
    Modulo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

/// Prefix Expression
/// `-operand` or `!operand`. The position is that of the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
    pub position: Position,
}

/// Binary Expression
/// A left-associative operator application. The position is that of the
/// operator token.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<Op> {
    pub operator: Op,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub position: Position,
}

/// `&&` and `||` have no operator choice, only their two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub position: Position,
}

// FUNCTIONS

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub ty: Type,
    pub name: String,
    pub position: Position,
}

/// Function Literal Expression
/// `func(a, b int) int { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub parameters: Vec<Parameter>,
    pub returns: Vec<Type>,
    pub body: BlockStmt,
    pub position: Position,
}

impl FunctionExpr {
    /// The type of the literal itself.
    pub fn signature(&self) -> Type {
        Type::function(
            self.parameters.iter().map(|param| param.ty.clone()).collect(),
            self.returns.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Unary(UnaryExpr),
    Additive(BinaryExpr<AdditiveOperator>),
    Multiplicative(BinaryExpr<MultiplicativeOperator>),
    Comparison(BinaryExpr<ComparisonOperator>),
    LogicalAnd(LogicalExpr),
    LogicalOr(LogicalExpr),
    Function(FunctionExpr),
}

impl Expr {
    pub fn get_position(&self) -> &Position {
        match self {
            Expr::Identifier(expr) => &expr.position,
            Expr::Integer(expr) => &expr.position,
            Expr::Boolean(expr) => &expr.position,
            Expr::Unary(expr) => &expr.position,
            Expr::Additive(expr) => &expr.position,
            Expr::Multiplicative(expr) => &expr.position,
            Expr::Comparison(expr) => &expr.position,
            Expr::LogicalAnd(expr) => &expr.position,
            Expr::LogicalOr(expr) => &expr.position,
            Expr::Function(expr) => &expr.position,
        }
    }

    /// The bare name this expression refers to, if it is an identifier.
    pub fn as_identifier(&self) -> Option<&IdentifierExpr> {
        match self {
            Expr::Identifier(identifier) => Some(identifier),
            _ => None,
        }
    }
}
