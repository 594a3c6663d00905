//! Type node printing.

use crate::options::TypeArgumentSeparator;
use crate::Printer;
use rjava_ast::node::*;
use rjava_core::intern::StringInterner;

impl<'i> Printer<'i> {
    /// Print a type. With `with_targs` unset, type arguments of class and
    /// interface types are omitted.
    pub fn print_type(&mut self, ty: &TypeNode<'_>, with_targs: bool) -> String {
        self.output.clear();
        self.print_type_node(ty, with_targs);
        self.take_output()
    }

    pub(crate) fn print_type_node(&mut self, ty: &TypeNode<'_>, with_targs: bool) {
        match ty {
            TypeNode::Primitive(n) => self.write(n.kind.simple_name()),
            TypeNode::ClassOrInterface(n) => {
                self.write_name(n.name);
                if with_targs {
                    if let Some(type_args) = n.type_arguments {
                        self.print_type_arguments(type_args);
                    }
                }
            }
            TypeNode::Array(n) => {
                self.print_type_node(n.element_type, with_targs);
                self.write_brackets(n.depth);
            }
            TypeNode::Void(_) => self.write("void"),
            TypeNode::Wildcard(n) => {
                self.write("?");
                if let Some(bound) = n.bound {
                    self.write(if n.has_lower_bound() { " super " } else { " extends " });
                    self.print_type_node(bound, with_targs);
                }
            }
        }
    }

    /// Arguments are always printed with their own type arguments.
    fn print_type_arguments(&mut self, type_args: &[TypeNode<'_>]) {
        self.write("<");
        match self.options.type_argument_separator {
            TypeArgumentSeparator::Legacy => {
                // The separator trails each non-first argument: <A, B> prints as <AB, >.
                let mut first = true;
                for arg in type_args {
                    self.print_type_node(arg, true);
                    if !first {
                        self.write(", ");
                    }
                    first = false;
                }
            }
            TypeArgumentSeparator::Standard => {
                for (i, arg) in type_args.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_type_node(arg, true);
                }
            }
        }
        self.write(">");
    }
}

/// Print a type without type arguments, e.g. `Map[]` for `Map<K, V>[]`.
pub fn pretty_print_type(ty: &TypeNode<'_>, interner: &StringInterner) -> String {
    Printer::new(interner).print_type(ty, false)
}

/// Print a type including its type arguments at every level.
pub fn pretty_print_type_with_targs(ty: &TypeNode<'_>, interner: &StringInterner) -> String {
    Printer::new(interner).print_type(ty, true)
}
