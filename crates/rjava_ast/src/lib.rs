//! rjava_ast: Syntax tree definitions for Java sources.
//!
//! Defines the node types read by the display printer, the SyntaxKind enum
//! and node flags. Nodes are arena-allocated and immutable once built.

pub mod node;
pub mod syntax_kind;
pub mod types;

// Re-export key types
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use types::*;
