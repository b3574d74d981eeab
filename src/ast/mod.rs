/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions and traits
/// - expressions: Definitions for various expression types
/// - types: Builtin value type names
pub mod ast;
pub mod expressions;
pub mod types;
