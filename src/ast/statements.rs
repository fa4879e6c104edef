use crate::Position;

use super::{expressions::Expr, types::Type};

/// A name introduced by a declaration, with where it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub position: Position,
}

/// Empty Statement
/// A bare `;` or an empty line.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStmt {
    pub position: Position,
}

/// Expression Statement
///
/// `discard_value` is set when the statement was closed by an explicit
/// `;`. A statement closed only by a line end leaves its value available.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleStmt {
    pub expression: Expr,
    pub discard_value: bool,
    pub position: Position,
}

/// What follows the names of a `var` declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum VarSpec {
    /// `var a, b int` or `var a, b int = 1, 2`
    Typed {
        explicit_type: Type,
        values: Option<Vec<Expr>>,
    },
    /// `var a, b = 1, 2`
    Inferred { values: Vec<Expr> },
}

/// Variable Declaration Statement
///
/// The number of names is not checked against the number of values.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub names: Vec<Binding>,
    pub spec: VarSpec,
    pub position: Position,
}

impl VarDeclStmt {
    pub fn explicit_type(&self) -> Option<&Type> {
        match &self.spec {
            VarSpec::Typed { explicit_type, .. } => Some(explicit_type),
            VarSpec::Inferred { .. } => None,
        }
    }

    pub fn values(&self) -> Option<&[Expr]> {
        match &self.spec {
            VarSpec::Typed { values, .. } => values.as_deref(),
            VarSpec::Inferred { values } => Some(values),
        }
    }
}

/// Block Statement
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfBranch {
    pub condition: Expr,
    pub body: BlockStmt,
    pub position: Position,
}

/// If Statement
/// `if a { } else if b { } else { }` keeps its branches in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub branches: Vec<IfBranch>,
    pub else_body: Option<BlockStmt>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForKind {
    /// `for { }`
    Infinite,
    /// `for cond { }`
    Condition(Expr),
    /// `for init; cond; post { }`, any clause may be left out
    Clauses {
        init: Option<Box<Stmt>>,
        condition: Option<Expr>,
        post: Option<Box<Stmt>>,
    },
}

/// For Statement
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub kind: ForKind,
    pub body: BlockStmt,
    pub position: Position,
}

/// Return Statement
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub values: Vec<Expr>,
    pub position: Position,
}

/// Assignment Statement
/// `a, b = b, a`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub targets: Vec<Expr>,
    pub values: Vec<Expr>,
    pub position: Position,
}

/// Defining Assignment Statement
/// `a, b := 1, 2`. Every target is a bare name.
#[derive(Debug, Clone, PartialEq)]
pub struct DefineStmt {
    pub names: Vec<Binding>,
    pub values: Vec<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Empty(EmptyStmt),
    Single(SingleStmt),
    VarDecl(VarDeclStmt),
    Block(BlockStmt),
    If(IfStmt),
    For(ForStmt),
    Break(Position),
    Continue(Position),
    Return(ReturnStmt),
    Assign(AssignStmt),
    Define(DefineStmt),
}

impl Stmt {
    pub fn get_position(&self) -> &Position {
        match self {
            Stmt::Empty(stmt) => &stmt.position,
            Stmt::Single(stmt) => &stmt.position,
            Stmt::VarDecl(stmt) => &stmt.position,
            Stmt::Block(stmt) => &stmt.position,
            Stmt::If(stmt) => &stmt.position,
            Stmt::For(stmt) => &stmt.position,
            Stmt::Break(position) => position,
            Stmt::Continue(position) => position,
            Stmt::Return(stmt) => &stmt.position,
            Stmt::Assign(stmt) => &stmt.position,
            Stmt::Define(stmt) => &stmt.position,
        }
    }
}
