/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions, the `Node` trait and the `Program` root
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for the statement node types
pub mod ast;
pub mod expressions;
pub mod statements;
