//! Source re-serialization of the AST.
//!
//! Every node prints back to text the parser accepts and that parses to the
//! same tree. Expressions get the fewest parentheses that preserve their
//! shape; blocks put one statement per line, indented by four spaces.

use std::fmt::{self, Display, Formatter};

use super::{
    expressions::{
        AdditiveOperator, ComparisonOperator, Expr, FunctionExpr, MultiplicativeOperator,
        UnaryOperator,
    },
    statements::{BlockStmt, ForKind, Stmt, VarSpec},
    types::{BasicType, Type},
};

/// Renders a whole program, one top-level statement per line.
pub fn to_source(program: &[Stmt]) -> String {
    program.iter().map(|stmt| format!("{}\n", stmt)).collect()
}

/// Binding strength of an expression's outermost node, loosest first.
pub fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Function(_) => 0,
        Expr::LogicalOr(_) => 1,
        Expr::LogicalAnd(_) => 2,
        Expr::Comparison(_) => 3,
        Expr::Additive(_) => 4,
        Expr::Multiplicative(_) => 5,
        Expr::Unary(_) => 6,
        Expr::Identifier(_) | Expr::Integer(_) | Expr::Boolean(_) => 7,
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_returns(f: &mut Formatter<'_>, returns: &[Type]) -> fmt::Result {
    match returns {
        [] => Ok(()),
        [single] => write!(f, " {}", single),
        _ => write!(f, " ({})", join(returns)),
    }
}

fn write_operand(f: &mut Formatter<'_>, operand: &Expr, min_precedence: u8) -> fmt::Result {
    if precedence(operand) < min_precedence {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

// Left-associative, so an equally tight right operand needs parentheses.
fn write_binary(
    f: &mut Formatter<'_>,
    left: &Expr,
    operator: &dyn Display,
    right: &Expr,
    own_precedence: u8,
) -> fmt::Result {
    write_operand(f, left, own_precedence)?;
    write!(f, " {} ", operator)?;
    write_operand(f, right, own_precedence + 1)
}

impl Display for BasicType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(basic) => write!(f, "{}", basic),
            Type::Function(function) => {
                write!(f, "func({})", join(&function.parameters))?;
                write_returns(f, &function.returns)
            }
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
            UnaryOperator::Not => write!(f, "!"),
        }
    }
}

impl Display for AdditiveOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AdditiveOperator::Add => write!(f, "+"),
            AdditiveOperator::Subtract => write!(f, "-"),
        }
    }
}

impl Display for MultiplicativeOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MultiplicativeOperator::Multiply => write!(f, "*"),
            MultiplicativeOperator::Divide => write!(f, "/"),
            MultiplicativeOperator::Modulo => write!(f, "%"),
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ComparisonOperator::Equal => "==",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::Less => "<",
            ComparisonOperator::GreaterEqual => ">=",
            ComparisonOperator::LessEqual => "<=",
        };
        write!(f, "{}", symbol)
    }
}

impl Display for FunctionExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|param| format!("{} {}", param.name, param.ty))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "func({})", parameters)?;
        write_returns(f, &self.returns)?;
        write!(f, " {}", self.body)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let own = precedence(self);
        match self {
            Expr::Identifier(expr) => write!(f, "{}", expr.name),
            Expr::Integer(expr) => write!(f, "{}", expr.value),
            Expr::Boolean(expr) => write!(f, "{}", expr.value),
            Expr::Unary(expr) => {
                write!(f, "{}", expr.operator)?;
                write_operand(f, &expr.operand, own)
            }
            Expr::Additive(expr) => write_binary(f, &expr.left, &expr.operator, &expr.right, own),
            Expr::Multiplicative(expr) => {
                write_binary(f, &expr.left, &expr.operator, &expr.right, own)
            }
            Expr::Comparison(expr) => {
                write_binary(f, &expr.left, &expr.operator, &expr.right, own)
            }
            Expr::LogicalAnd(expr) => write_binary(f, &expr.left, &"&&", &expr.right, own),
            Expr::LogicalOr(expr) => write_binary(f, &expr.left, &"||", &expr.right, own),
            Expr::Function(expr) => write!(f, "{}", expr),
        }
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for stmt in &self.body {
            for line in stmt.to_string().split('\n') {
                if line.is_empty() {
                    writeln!(f)?;
                } else {
                    writeln!(f, "    {}", line)?;
                }
            }
        }
        write!(f, "}}")
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Empty(_) => Ok(()),
            Stmt::Single(stmt) => {
                write!(f, "{}", stmt.expression)?;
                if stmt.discard_value {
                    write!(f, ";")?;
                }
                Ok(())
            }
            Stmt::VarDecl(stmt) => {
                let names = stmt
                    .names
                    .iter()
                    .map(|binding| binding.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "var {}", names)?;

                match &stmt.spec {
                    VarSpec::Typed {
                        explicit_type,
                        values,
                    } => {
                        write!(f, " {}", explicit_type)?;
                        if let Some(values) = values {
                            write!(f, " = {}", join(values))?;
                        }
                        Ok(())
                    }
                    VarSpec::Inferred { values } => write!(f, " = {}", join(values)),
                }
            }
            Stmt::Block(block) => write!(f, "{}", block),
            Stmt::If(stmt) => {
                for (index, branch) in stmt.branches.iter().enumerate() {
                    if index > 0 {
                        write!(f, " else ")?;
                    }
                    write!(f, "if {} {}", branch.condition, branch.body)?;
                }
                if let Some(else_body) = &stmt.else_body {
                    write!(f, " else {}", else_body)?;
                }
                Ok(())
            }
            Stmt::For(stmt) => {
                match &stmt.kind {
                    ForKind::Infinite => write!(f, "for ")?,
                    ForKind::Condition(condition) => write!(f, "for {} ", condition)?,
                    ForKind::Clauses {
                        init,
                        condition,
                        post,
                    } => {
                        let init = init.as_ref().map(|s| s.to_string()).unwrap_or_default();
                        let condition =
                            condition.as_ref().map(|c| c.to_string()).unwrap_or_default();
                        let post = post.as_ref().map(|s| format!("{} ", s)).unwrap_or_default();
                        write!(f, "for {}; {}; {}", init, condition, post)?
                    }
                }
                write!(f, "{}", stmt.body)
            }
            Stmt::Break(_) => write!(f, "break"),
            Stmt::Continue(_) => write!(f, "continue"),
            Stmt::Return(stmt) => {
                write!(f, "return")?;
                if !stmt.values.is_empty() {
                    write!(f, " {}", join(&stmt.values))?;
                }
                Ok(())
            }
            Stmt::Assign(stmt) => write!(f, "{} = {}", join(&stmt.targets), join(&stmt.values)),
            Stmt::Define(stmt) => {
                let names = stmt
                    .names
                    .iter()
                    .map(|binding| binding.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{} := {}", names, join(&stmt.values))
            }
        }
    }
}
