//! Import declaration text.

use rjava_ast::node::ImportDeclaration;
use rjava_core::intern::StringInterner;

/// The imported name, with `.*` appended for on-demand imports.
pub fn pretty_import(decl: &ImportDeclaration, interner: &StringInterner) -> String {
    let name = interner.resolve(decl.imported_name);
    if decl.is_import_on_demand() {
        return format!("{}.*", name);
    }
    name.to_string()
}
