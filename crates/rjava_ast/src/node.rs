//! Syntax tree node definitions.
//!
//! Only the node shapes needed to render display names are modelled in
//! detail; every other syntax node is carried as an [`OtherNode`]. Nodes
//! reference child nodes via arena-allocated references.

use crate::syntax_kind::SyntaxKind;
use crate::types::NodeFlags;
use rjava_core::intern::InternedString;
use rjava_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all nodes.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// The kind of this node.
    pub kind: SyntaxKind,
    /// Source position range.
    pub range: TextRange,
    pub flags: NodeFlags,
    /// Raw textual image of the node, if the tree builder recorded one.
    /// Constructors store their name here.
    pub image: Option<InternedString>,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
            flags: NodeFlags::NONE,
            image: None,
        }
    }

    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_image(mut self, image: InternedString) -> Self {
        self.image = Some(image);
        self
    }

    #[inline]
    pub fn has_flag(&self, flag: NodeFlags) -> bool {
        self.flags.contains(flag)
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

// ============================================================================
// Type Nodes
// ============================================================================

#[derive(Debug)]
pub enum TypeNode<'a> {
    Primitive(PrimitiveType),
    ClassOrInterface(ClassOrInterfaceType<'a>),
    Array(ArrayType<'a>),
    Void(VoidType),
    Wildcard(WildcardType<'a>),
}

impl<'a> TypeNode<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeNode::Primitive(n) => &n.data,
            TypeNode::ClassOrInterface(n) => &n.data,
            TypeNode::Array(n) => &n.data,
            TypeNode::Void(n) => &n.data,
            TypeNode::Wildcard(n) => &n.data,
        }
    }
}

/// The eight primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// The keyword spelling of this primitive.
    pub fn simple_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }
}

#[derive(Debug)]
pub struct PrimitiveType {
    pub data: NodeData,
    pub kind: PrimitiveKind,
}

#[derive(Debug)]
pub struct ClassOrInterfaceType<'a> {
    pub data: NodeData,
    /// Simple name, without any qualifier.
    pub name: InternedString,
    /// `None` when no `<...>` is written; `Some(&[])` for a diamond.
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

#[derive(Debug)]
pub struct ArrayType<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeNode<'a>,
    /// Number of bracket pairs attached to this type, at least 1.
    pub depth: u32,
}

#[derive(Debug)]
pub struct VoidType {
    pub data: NodeData,
}

#[derive(Debug)]
pub struct WildcardType<'a> {
    pub data: NodeData,
    pub bound: OptionalNode<'a, TypeNode<'a>>,
}

impl<'a> WildcardType<'a> {
    /// Whether this is a `? super T` wildcard.
    pub fn has_lower_bound(&self) -> bool {
        self.bound.is_some() && self.data.has_flag(NodeFlags::LOWER_BOUND)
    }

    /// Whether this is a `? extends T` wildcard.
    pub fn has_upper_bound(&self) -> bool {
        self.bound.is_some() && !self.data.has_flag(NodeFlags::LOWER_BOUND)
    }
}

// ============================================================================
// Parameters and Variables
// ============================================================================

#[derive(Debug)]
pub struct VariableDeclaratorId {
    pub data: NodeData,
    pub name: InternedString,
    /// Bracket pairs written after the name, as in `int a[]`.
    pub extra_dimensions: u32,
}

#[derive(Debug)]
pub struct FormalParameter<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub var_id: VariableDeclaratorId,
}

#[derive(Debug)]
pub struct FormalParameters<'a> {
    pub data: NodeData,
    pub parameters: NodeList<'a, FormalParameter<'a>>,
}

impl<'a> FormalParameters<'a> {
    pub fn iter(&self) -> std::slice::Iter<'a, FormalParameter<'a>> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

// ============================================================================
// Members
// ============================================================================

#[derive(Debug)]
pub struct MethodDeclaration<'a> {
    pub data: NodeData,
    pub name: InternedString,
    pub parameters: FormalParameters<'a>,
}

#[derive(Debug)]
pub struct ConstructorDeclaration<'a> {
    /// The image holds the constructor name.
    pub data: NodeData,
    pub parameters: FormalParameters<'a>,
}

/// A borrowed method or constructor declaration.
#[derive(Debug, Clone, Copy)]
pub enum MethodOrConstructor<'a> {
    Method(&'a MethodDeclaration<'a>),
    Constructor(&'a ConstructorDeclaration<'a>),
}

impl<'a> MethodOrConstructor<'a> {
    pub fn data(&self) -> &'a NodeData {
        match *self {
            MethodOrConstructor::Method(n) => &n.data,
            MethodOrConstructor::Constructor(n) => &n.data,
        }
    }

    pub fn formal_parameters(&self) -> &'a FormalParameters<'a> {
        match *self {
            MethodOrConstructor::Method(n) => &n.parameters,
            MethodOrConstructor::Constructor(n) => &n.parameters,
        }
    }
}

#[derive(Debug)]
pub struct FieldDeclaration<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    /// Declared variables in source order, as in `int a, b[];`.
    pub var_ids: NodeList<'a, VariableDeclaratorId>,
}

// ============================================================================
// Resources
// ============================================================================

/// A resource of a try-with-resources statement.
#[derive(Debug)]
pub enum Resource<'a> {
    /// `try (InputStream in = open())`
    LocalVariable(LocalVariableResource<'a>),
    /// `try (this.lock)`: a concise resource naming an existing variable.
    Expression(ExpressionResource),
}

impl<'a> Resource<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Resource::LocalVariable(n) => &n.data,
            Resource::Expression(n) => &n.data,
        }
    }
}

#[derive(Debug)]
pub struct LocalVariableResource<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub var_id: VariableDeclaratorId,
}

#[derive(Debug)]
pub struct ExpressionResource {
    pub data: NodeData,
    /// Source text of the expression, as written.
    pub text: InternedString,
}

// ============================================================================
// Type Declarations
// ============================================================================

#[derive(Debug)]
pub enum TypeDeclaration {
    ClassOrInterface(ClassOrInterfaceDeclaration),
    AnnotationType(AnnotationTypeDeclaration),
    Enum(EnumDeclaration),
    Record(RecordDeclaration),
}

impl TypeDeclaration {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeDeclaration::ClassOrInterface(n) => &n.data,
            TypeDeclaration::AnnotationType(n) => &n.data,
            TypeDeclaration::Enum(n) => &n.data,
            TypeDeclaration::Record(n) => &n.data,
        }
    }

    pub fn simple_name(&self) -> InternedString {
        match self {
            TypeDeclaration::ClassOrInterface(n) => n.name,
            TypeDeclaration::AnnotationType(n) => n.name,
            TypeDeclaration::Enum(n) => n.name,
            TypeDeclaration::Record(n) => n.name,
        }
    }
}

#[derive(Debug)]
pub struct ClassOrInterfaceDeclaration {
    pub data: NodeData,
    pub name: InternedString,
}

impl ClassOrInterfaceDeclaration {
    pub fn is_interface(&self) -> bool {
        self.data.has_flag(NodeFlags::INTERFACE)
    }
}

#[derive(Debug)]
pub struct AnnotationTypeDeclaration {
    pub data: NodeData,
    pub name: InternedString,
}

#[derive(Debug)]
pub struct EnumDeclaration {
    pub data: NodeData,
    pub name: InternedString,
}

#[derive(Debug)]
pub struct RecordDeclaration {
    pub data: NodeData,
    pub name: InternedString,
}

// ============================================================================
// Imports
// ============================================================================

#[derive(Debug)]
pub struct ImportDeclaration {
    pub data: NodeData,
    /// Dotted name, without the trailing `.*` of on-demand imports.
    pub imported_name: InternedString,
}

impl ImportDeclaration {
    pub fn is_import_on_demand(&self) -> bool {
        self.data.has_flag(NodeFlags::ON_DEMAND)
    }
}

// ============================================================================
// Generic Node
// ============================================================================

/// Any syntax node without a dedicated shape in this tree.
#[derive(Debug)]
pub struct OtherNode {
    pub data: NodeData,
}

/// A reference to any node of the tree.
#[derive(Debug, Clone, Copy)]
pub enum JavaNode<'a> {
    TypeDeclaration(&'a TypeDeclaration),
    Method(&'a MethodDeclaration<'a>),
    Constructor(&'a ConstructorDeclaration<'a>),
    Field(&'a FieldDeclaration<'a>),
    Resource(&'a Resource<'a>),
    VariableDeclaratorId(&'a VariableDeclaratorId),
    FormalParameter(&'a FormalParameter<'a>),
    Import(&'a ImportDeclaration),
    Type(&'a TypeNode<'a>),
    Other(&'a OtherNode),
}

impl<'a> JavaNode<'a> {
    pub fn data(&self) -> &'a NodeData {
        match *self {
            JavaNode::TypeDeclaration(n) => n.data(),
            JavaNode::Method(n) => &n.data,
            JavaNode::Constructor(n) => &n.data,
            JavaNode::Field(n) => &n.data,
            JavaNode::Resource(n) => n.data(),
            JavaNode::VariableDeclaratorId(n) => &n.data,
            JavaNode::FormalParameter(n) => &n.data,
            JavaNode::Import(n) => &n.data,
            JavaNode::Type(n) => n.data(),
            JavaNode::Other(n) => &n.data,
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    #[inline]
    pub fn image(&self) -> Option<InternedString> {
        self.data().image
    }

    /// View this node as a method or constructor, if it is one.
    pub fn as_method_or_constructor(&self) -> Option<MethodOrConstructor<'a>> {
        match *self {
            JavaNode::Method(n) => Some(MethodOrConstructor::Method(n)),
            JavaNode::Constructor(n) => Some(MethodOrConstructor::Constructor(n)),
            _ => None,
        }
    }
}

impl<'a> From<&'a TypeDeclaration> for JavaNode<'a> {
    fn from(node: &'a TypeDeclaration) -> Self {
        JavaNode::TypeDeclaration(node)
    }
}

impl<'a> From<&'a MethodDeclaration<'a>> for JavaNode<'a> {
    fn from(node: &'a MethodDeclaration<'a>) -> Self {
        JavaNode::Method(node)
    }
}

impl<'a> From<&'a ConstructorDeclaration<'a>> for JavaNode<'a> {
    fn from(node: &'a ConstructorDeclaration<'a>) -> Self {
        JavaNode::Constructor(node)
    }
}

impl<'a> From<&'a FieldDeclaration<'a>> for JavaNode<'a> {
    fn from(node: &'a FieldDeclaration<'a>) -> Self {
        JavaNode::Field(node)
    }
}

impl<'a> From<&'a Resource<'a>> for JavaNode<'a> {
    fn from(node: &'a Resource<'a>) -> Self {
        JavaNode::Resource(node)
    }
}

impl<'a> From<&'a VariableDeclaratorId> for JavaNode<'a> {
    fn from(node: &'a VariableDeclaratorId) -> Self {
        JavaNode::VariableDeclaratorId(node)
    }
}

impl<'a> From<&'a FormalParameter<'a>> for JavaNode<'a> {
    fn from(node: &'a FormalParameter<'a>) -> Self {
        JavaNode::FormalParameter(node)
    }
}

impl<'a> From<&'a ImportDeclaration> for JavaNode<'a> {
    fn from(node: &'a ImportDeclaration) -> Self {
        JavaNode::Import(node)
    }
}

impl<'a> From<&'a TypeNode<'a>> for JavaNode<'a> {
    fn from(node: &'a TypeNode<'a>) -> Self {
        JavaNode::Type(node)
    }
}

impl<'a> From<&'a OtherNode> for JavaNode<'a> {
    fn from(node: &'a OtherNode) -> Self {
        JavaNode::Other(node)
    }
}

impl<'a> From<MethodOrConstructor<'a>> for JavaNode<'a> {
    fn from(decl: MethodOrConstructor<'a>) -> Self {
        match decl {
            MethodOrConstructor::Method(n) => JavaNode::Method(n),
            MethodOrConstructor::Constructor(n) => JavaNode::Constructor(n),
        }
    }
}
