/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// The tree is a set of closed enums: consumers walk it with exhaustive
/// `match`es, so adding a node kind fails to compile until every consumer
/// handles it.
///
/// Submodules:
/// - ast: Re-serialization of every node kind back to source
/// - expressions: Definitions for the expression kinds
/// - statements: Definitions for the statement kinds
/// - types: Definitions for type representations in the AST
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
