//! Declaration kinds and node names for messages.

use crate::error::{PrettyPrintError, Result};
use crate::Printer;
use rjava_ast::node::*;
use rjava_core::intern::StringInterner;

/// Returns the generic kind of declaration this is, eg "enum" or "class".
pub fn type_declaration_kind(decl: &TypeDeclaration) -> &'static str {
    match decl {
        TypeDeclaration::ClassOrInterface(d) if d.is_interface() => "interface",
        TypeDeclaration::AnnotationType(_) => "annotation",
        TypeDeclaration::Enum(_) => "enum",
        TypeDeclaration::Record(_) => "record",
        TypeDeclaration::ClassOrInterface(_) => "class",
    }
}

/// Returns the kind of node this is, e.g. "field" for a field declaration.
///
/// Only declarations that rules report on have a kind; any other node is
/// an [`PrettyPrintError::UnsupportedNodeKind`].
pub fn printable_node_kind(node: JavaNode<'_>) -> Result<&'static str> {
    match node {
        JavaNode::TypeDeclaration(decl) => Ok(type_declaration_kind(decl)),
        JavaNode::Method(_) => Ok("method"),
        JavaNode::Constructor(_) => Ok("constructor"),
        JavaNode::Field(_) => Ok("field"),
        JavaNode::Resource(_) => Ok("resource specification"),
        JavaNode::VariableDeclaratorId(_)
        | JavaNode::FormalParameter(_)
        | JavaNode::Import(_)
        | JavaNode::Type(_)
        | JavaNode::Other(_) => {
            let data = node.data();
            tracing::debug!(kind = ?data.kind, range = %data.range, "no printable kind for node");
            Err(PrettyPrintError::UnsupportedNodeKind {
                kind: data.kind,
                range: data.range,
            })
        }
    }
}

/// Returns the "name" of a node. For constructors this is the whole
/// display signature, since overloads share the name.
pub fn node_name(node: JavaNode<'_>, interner: &StringInterner) -> Result<String> {
    let name = match node {
        JavaNode::Method(method) => interner.resolve(method.name).to_string(),
        JavaNode::Constructor(ctor) => {
            Printer::new(interner).print_declaration_signature(MethodOrConstructor::Constructor(ctor))
        }
        JavaNode::Field(field) => {
            let first = field.var_ids.first().ok_or_else(|| {
                tracing::debug!(range = %field.data.range, "field declaration without variables");
                PrettyPrintError::EmptyDeclaredIdentifiers {
                    range: field.data.range,
                }
            })?;
            interner.resolve(first.name).to_string()
        }
        JavaNode::Resource(resource) => resource_stable_name(resource, interner),
        JavaNode::TypeDeclaration(decl) => interner.resolve(decl.simple_name()).to_string(),
        JavaNode::VariableDeclaratorId(id) => interner.resolve(id.name).to_string(),
        JavaNode::FormalParameter(_) | JavaNode::Import(_) | JavaNode::Type(_) | JavaNode::Other(_) => node
            .image()
            .map(|image| interner.resolve(image).to_string())
            .unwrap_or_default(),
    };
    Ok(name)
}

/// A name for a try-with-resources resource that does not depend on
/// formatting: the variable name, or the expression without whitespace.
pub fn resource_stable_name(resource: &Resource<'_>, interner: &StringInterner) -> String {
    match resource {
        Resource::LocalVariable(var) => interner.resolve(var.var_id.name).to_string(),
        Resource::Expression(expr) => interner
            .resolve(expr.text)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect(),
    }
}
