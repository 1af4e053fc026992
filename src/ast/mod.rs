/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for the expression node family
/// - statements: Definitions for the statement node family and Program root
///
/// Both families are closed enums so that evaluator dispatch is exhaustive:
/// adding a node kind without handling it everywhere is a compile error.
/// Every node renders a canonical, fully parenthesized form via `Display`,
/// which the parser tests use for structural assertions.
pub mod expressions;
pub mod statements;
