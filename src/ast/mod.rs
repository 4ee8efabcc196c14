/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The statement and expression enums and shared node types
/// - expressions: Definitions for the individual expression nodes
/// - statements: Definitions for the individual statement nodes
/// - operators: Binary, unary and update operators
pub mod ast;
pub mod expressions;
pub mod operators;
pub mod statements;
