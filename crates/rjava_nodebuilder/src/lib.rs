//! rjava_nodebuilder: Synthetic syntax tree construction.
//!
//! Builds well-formed nodes directly into an arena, for callers that need
//! display names of declarations that were never parsed (quick fixes,
//! reports about generated members) and for tests.

use bumpalo::Bump;
use rjava_ast::node::*;
use rjava_ast::syntax_kind::SyntaxKind;
use rjava_ast::types::NodeFlags;
use rjava_core::intern::StringInterner;

/// Allocates synthetic nodes in an arena.
///
/// Type nodes are returned by value so they can be nested in type argument
/// lists; declarations are returned as arena references.
pub struct NodeFactory<'a> {
    arena: &'a Bump,
    interner: StringInterner,
}

impl<'a> NodeFactory<'a> {
    pub fn new(arena: &'a Bump, interner: &StringInterner) -> Self {
        Self {
            arena,
            interner: interner.clone(),
        }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    fn synthesized(kind: SyntaxKind) -> NodeData {
        NodeData::new(kind, 0, 0).with_flags(NodeFlags::SYNTHESIZED)
    }

    fn alloc_list<T>(&self, items: Vec<T>) -> NodeList<'a, T> {
        if items.is_empty() {
            return &[];
        }
        self.arena.alloc_slice_fill_iter(items)
    }

    /// Move a type node into the arena.
    pub fn alloc_type(&self, ty: TypeNode<'a>) -> &'a TypeNode<'a> {
        self.arena.alloc(ty)
    }

    // ========================================================================
    // Types
    // ========================================================================

    pub fn primitive_type(&self, kind: PrimitiveKind) -> TypeNode<'a> {
        TypeNode::Primitive(PrimitiveType {
            data: Self::synthesized(SyntaxKind::PrimitiveType),
            kind,
        })
    }

    /// A class or interface type without type arguments, e.g. `String`.
    pub fn class_type(&self, name: &str) -> TypeNode<'a> {
        TypeNode::ClassOrInterface(ClassOrInterfaceType {
            data: Self::synthesized(SyntaxKind::ClassOrInterfaceType),
            name: self.interner.intern(name),
            type_arguments: None,
        })
    }

    /// A parameterized type. An empty argument list produces a diamond.
    pub fn generic_type(&self, name: &str, type_arguments: Vec<TypeNode<'a>>) -> TypeNode<'a> {
        TypeNode::ClassOrInterface(ClassOrInterfaceType {
            data: Self::synthesized(SyntaxKind::ClassOrInterfaceType),
            name: self.interner.intern(name),
            type_arguments: Some(self.alloc_list(type_arguments)),
        })
    }

    /// An array of `element_type` with `depth` bracket pairs. A depth of
    /// zero yields the element type unchanged.
    pub fn array_type(&self, element_type: TypeNode<'a>, depth: u32) -> TypeNode<'a> {
        if depth == 0 {
            return element_type;
        }
        TypeNode::Array(ArrayType {
            data: Self::synthesized(SyntaxKind::ArrayType),
            element_type: self.alloc_type(element_type),
            depth,
        })
    }

    pub fn void_type(&self) -> TypeNode<'a> {
        TypeNode::Void(VoidType {
            data: Self::synthesized(SyntaxKind::VoidType),
        })
    }

    /// An unbounded wildcard, `?`.
    pub fn wildcard(&self) -> TypeNode<'a> {
        TypeNode::Wildcard(WildcardType {
            data: Self::synthesized(SyntaxKind::WildcardType),
            bound: None,
        })
    }

    /// `? extends bound`
    pub fn wildcard_extends(&self, bound: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::Wildcard(WildcardType {
            data: Self::synthesized(SyntaxKind::WildcardType),
            bound: Some(self.alloc_type(bound)),
        })
    }

    /// `? super bound`
    pub fn wildcard_super(&self, bound: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::Wildcard(WildcardType {
            data: Self::synthesized(SyntaxKind::WildcardType).with_flags(NodeFlags::LOWER_BOUND),
            bound: Some(self.alloc_type(bound)),
        })
    }

    // ========================================================================
    // Variables and parameters
    // ========================================================================

    pub fn variable_id(&self, name: &str, extra_dimensions: u32) -> VariableDeclaratorId {
        VariableDeclaratorId {
            data: Self::synthesized(SyntaxKind::VariableDeclaratorId),
            name: self.interner.intern(name),
            extra_dimensions,
        }
    }

    /// A formal parameter; `extra_dimensions` counts brackets written after
    /// the name, as in `String args[]`.
    pub fn formal_parameter(
        &self,
        type_node: TypeNode<'a>,
        name: &str,
        extra_dimensions: u32,
    ) -> FormalParameter<'a> {
        FormalParameter {
            data: Self::synthesized(SyntaxKind::FormalParameter),
            type_node: self.alloc_type(type_node),
            var_id: self.variable_id(name, extra_dimensions),
        }
    }

    pub fn formal_parameters(&self, parameters: Vec<FormalParameter<'a>>) -> FormalParameters<'a> {
        FormalParameters {
            data: Self::synthesized(SyntaxKind::FormalParameters),
            parameters: self.alloc_list(parameters),
        }
    }

    // ========================================================================
    // Members
    // ========================================================================

    pub fn method(
        &self,
        name: &str,
        parameters: Vec<FormalParameter<'a>>,
    ) -> &'a MethodDeclaration<'a> {
        self.arena.alloc(MethodDeclaration {
            data: Self::synthesized(SyntaxKind::MethodDeclaration),
            name: self.interner.intern(name),
            parameters: self.formal_parameters(parameters),
        })
    }

    /// A constructor; its name is recorded as the node image.
    pub fn constructor(
        &self,
        name: &str,
        parameters: Vec<FormalParameter<'a>>,
    ) -> &'a ConstructorDeclaration<'a> {
        self.arena.alloc(ConstructorDeclaration {
            data: Self::synthesized(SyntaxKind::ConstructorDeclaration)
                .with_image(self.interner.intern(name)),
            parameters: self.formal_parameters(parameters),
        })
    }

    pub fn field(
        &self,
        type_node: TypeNode<'a>,
        var_ids: Vec<VariableDeclaratorId>,
    ) -> &'a FieldDeclaration<'a> {
        self.arena.alloc(FieldDeclaration {
            data: Self::synthesized(SyntaxKind::FieldDeclaration),
            type_node: self.alloc_type(type_node),
            var_ids: self.alloc_list(var_ids),
        })
    }

    // ========================================================================
    // Resources
    // ========================================================================

    /// `try (Type name = ...)`
    pub fn resource_variable(&self, type_node: TypeNode<'a>, name: &str) -> &'a Resource<'a> {
        self.arena.alloc(Resource::LocalVariable(LocalVariableResource {
            data: Self::synthesized(SyntaxKind::Resource),
            type_node: self.alloc_type(type_node),
            var_id: self.variable_id(name, 0),
        }))
    }

    /// `try (expression)`, with the expression given as source text.
    pub fn resource_expression(&self, text: &str) -> &'a Resource<'a> {
        self.arena.alloc(Resource::Expression(ExpressionResource {
            data: Self::synthesized(SyntaxKind::Resource),
            text: self.interner.intern(text),
        }))
    }

    // ========================================================================
    // Type declarations
    // ========================================================================

    pub fn class(&self, name: &str) -> &'a TypeDeclaration {
        self.arena.alloc(TypeDeclaration::ClassOrInterface(ClassOrInterfaceDeclaration {
            data: Self::synthesized(SyntaxKind::ClassOrInterfaceDeclaration),
            name: self.interner.intern(name),
        }))
    }

    pub fn interface(&self, name: &str) -> &'a TypeDeclaration {
        self.arena.alloc(TypeDeclaration::ClassOrInterface(ClassOrInterfaceDeclaration {
            data: Self::synthesized(SyntaxKind::ClassOrInterfaceDeclaration)
                .with_flags(NodeFlags::INTERFACE),
            name: self.interner.intern(name),
        }))
    }

    pub fn annotation_type(&self, name: &str) -> &'a TypeDeclaration {
        self.arena.alloc(TypeDeclaration::AnnotationType(AnnotationTypeDeclaration {
            data: Self::synthesized(SyntaxKind::AnnotationTypeDeclaration),
            name: self.interner.intern(name),
        }))
    }

    pub fn enum_declaration(&self, name: &str) -> &'a TypeDeclaration {
        self.arena.alloc(TypeDeclaration::Enum(EnumDeclaration {
            data: Self::synthesized(SyntaxKind::EnumDeclaration),
            name: self.interner.intern(name),
        }))
    }

    pub fn record(&self, name: &str) -> &'a TypeDeclaration {
        self.arena.alloc(TypeDeclaration::Record(RecordDeclaration {
            data: Self::synthesized(SyntaxKind::RecordDeclaration),
            name: self.interner.intern(name),
        }))
    }

    // ========================================================================
    // Imports and other nodes
    // ========================================================================

    /// A single-type import such as `java.util.List`.
    pub fn import(&self, imported_name: &str) -> &'a ImportDeclaration {
        self.arena.alloc(ImportDeclaration {
            data: Self::synthesized(SyntaxKind::ImportDeclaration),
            imported_name: self.interner.intern(imported_name),
        })
    }

    /// An on-demand import; `imported_name` excludes the trailing `.*`.
    pub fn import_on_demand(&self, imported_name: &str) -> &'a ImportDeclaration {
        self.arena.alloc(ImportDeclaration {
            data: Self::synthesized(SyntaxKind::ImportDeclaration).with_flags(NodeFlags::ON_DEMAND),
            imported_name: self.interner.intern(imported_name),
        })
    }

    /// Any node without a dedicated shape, optionally carrying an image.
    pub fn other(&self, kind: SyntaxKind, image: Option<&str>) -> &'a OtherNode {
        debug_assert!(!kind.is_type() && !kind.is_type_declaration());
        let mut data = Self::synthesized(kind);
        if let Some(image) = image {
            data = data.with_image(self.interner.intern(image));
        }
        self.arena.alloc(OtherNode { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_are_marked_synthesized() {
        let arena = Bump::new();
        let interner = StringInterner::new();
        let factory = NodeFactory::new(&arena, &interner);

        let method = factory.method("run", vec![]);
        assert!(method.data.has_flag(NodeFlags::SYNTHESIZED));
        assert!(method.parameters.is_empty());
        assert_eq!(interner.resolve(method.name), "run");
    }

    #[test]
    fn test_zero_depth_array_is_element_type() {
        let arena = Bump::new();
        let interner = StringInterner::new();
        let factory = NodeFactory::new(&arena, &interner);

        let ty = factory.array_type(factory.primitive_type(PrimitiveKind::Int), 0);
        assert!(matches!(ty, TypeNode::Primitive(_)));

        let ty = factory.array_type(factory.primitive_type(PrimitiveKind::Int), 2);
        match ty {
            TypeNode::Array(array) => {
                assert_eq!(array.depth, 2);
                assert!(matches!(array.element_type, TypeNode::Primitive(_)));
            }
            other => panic!("expected array type, got {:?}", other),
        }
    }

    #[test]
    fn test_wildcard_bounds() {
        let arena = Bump::new();
        let interner = StringInterner::new();
        let factory = NodeFactory::new(&arena, &interner);

        match factory.wildcard_super(factory.class_type("Number")) {
            TypeNode::Wildcard(w) => assert!(w.has_lower_bound()),
            other => panic!("expected wildcard, got {:?}", other),
        }
        match factory.wildcard_extends(factory.class_type("Number")) {
            TypeNode::Wildcard(w) => assert!(w.has_upper_bound()),
            other => panic!("expected wildcard, got {:?}", other),
        }
    }

    #[test]
    fn test_diamond_keeps_empty_argument_list() {
        let arena = Bump::new();
        let interner = StringInterner::new();
        let factory = NodeFactory::new(&arena, &interner);

        match factory.generic_type("ArrayList", vec![]) {
            TypeNode::ClassOrInterface(t) => assert_eq!(t.type_arguments.map(|a| a.len()), Some(0)),
            other => panic!("expected class type, got {:?}", other),
        }
    }

    #[test]
    fn test_declaration_flags() {
        let arena = Bump::new();
        let interner = StringInterner::new();
        let factory = NodeFactory::new(&arena, &interner);

        match factory.interface("Runnable") {
            TypeDeclaration::ClassOrInterface(decl) => assert!(decl.is_interface()),
            other => panic!("expected class or interface, got {:?}", other),
        }
        assert!(factory.import_on_demand("java.util").is_import_on_demand());
        assert!(!factory.import("java.util.List").is_import_on_demand());
        let ctor = factory.constructor("Foo", vec![]);
        assert_eq!(ctor.data.image.map(|i| interner.resolve(i)), Some("Foo"));
    }
}
