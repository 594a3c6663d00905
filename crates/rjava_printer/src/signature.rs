//! Method and constructor display signatures.

use crate::Printer;
use rjava_ast::node::*;
use rjava_core::intern::StringInterner;

impl<'i> Printer<'i> {
    /// Print `name(T1, T2, ...)` from the parameter types. Type arguments
    /// are dropped; extra dimensions declared on the parameter name are
    /// appended to its type, so `int[] a[]` contributes `int[][]`.
    pub fn print_signature(&mut self, name: &str, params: &FormalParameters<'_>) -> String {
        self.output.clear();
        self.write(name);
        self.write("(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_type_node(param.type_node, false);
            self.write_brackets(param.var_id.extra_dimensions);
        }
        self.write(")");
        self.take_output()
    }

    /// Print the signature of a method or constructor declaration.
    pub fn print_declaration_signature(&mut self, decl: MethodOrConstructor<'_>) -> String {
        let name = match decl {
            MethodOrConstructor::Method(method) => self.resolve(method.name),
            MethodOrConstructor::Constructor(ctor) => ctor.data.image.map_or("", |image| self.resolve(image)),
        };
        tracing::trace!(name, params = decl.formal_parameters().len(), "printing display signature");
        self.print_signature(name, decl.formal_parameters())
    }
}

/// Returns a normalized method name from the parameter types, e.g.
/// `equals(Object)`.
pub fn display_signature(name: &str, params: &FormalParameters<'_>, interner: &StringInterner) -> String {
    Printer::new(interner).print_signature(name, params)
}

/// Returns the display signature of a declaration. Methods use their
/// name, constructors their image.
pub fn display_signature_of(decl: MethodOrConstructor<'_>, interner: &StringInterner) -> String {
    Printer::new(interner).print_declaration_signature(decl)
}
