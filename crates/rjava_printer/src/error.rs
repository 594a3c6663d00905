//! Errors raised when a node is outside what the printer can describe.

use miette::Diagnostic;
use rjava_ast::SyntaxKind;
use rjava_core::TextRange;
use thiserror::Error;

/// Contract violations reported by node classification.
///
/// Well-formed trees never produce these for supported nodes; callers are
/// expected to propagate them rather than recover.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum PrettyPrintError {
    #[error("Node {kind:?} at {range} is unaccounted for")]
    #[diagnostic(
        code(rjava::unsupported_node_kind),
        help("only type declarations, methods, constructors, fields and resources have a printable kind")
    )]
    UnsupportedNodeKind { kind: SyntaxKind, range: TextRange },

    #[error("Field declaration at {range} declares no variables")]
    #[diagnostic(
        code(rjava::empty_declared_identifiers),
        help("a field declaration must declare at least one variable")
    )]
    EmptyDeclaredIdentifiers { range: TextRange },
}

pub type Result<T> = std::result::Result<T, PrettyPrintError>;
