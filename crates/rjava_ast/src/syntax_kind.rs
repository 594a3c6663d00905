//! SyntaxKind enum - node kinds of the Java syntax tree.

/// The kind of a node in the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown = 0,

    // ========================================================================
    // Compilation unit level
    // ========================================================================
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,
    ModuleDeclaration,

    // ========================================================================
    // Type declarations
    // ========================================================================
    ClassOrInterfaceDeclaration,
    AnnotationTypeDeclaration,
    EnumDeclaration,
    RecordDeclaration,
    EnumConstant,
    RecordComponent,
    Initializer,

    // ========================================================================
    // Members
    // ========================================================================
    MethodDeclaration,
    ConstructorDeclaration,
    FieldDeclaration,
    FormalParameters,
    FormalParameter,
    VariableDeclarator,
    VariableDeclaratorId,
    TypeParameter,

    // ========================================================================
    // Types
    // ========================================================================
    PrimitiveType,
    ClassOrInterfaceType,
    ArrayType,
    VoidType,
    WildcardType,
    TypeArguments,

    // ========================================================================
    // Statements
    // ========================================================================
    Block,
    LocalVariableDeclaration,
    TryStatement,
    ResourceList,
    Resource,
    ReturnStatement,
    ThrowStatement,

    // ========================================================================
    // Expressions
    // ========================================================================
    MethodCall,
    FieldAccess,
    VariableAccess,
    LambdaExpression,
    Literal,
    Annotation,
}

impl SyntaxKind {
    /// Whether this kind is one of the type declaration kinds.
    pub fn is_type_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassOrInterfaceDeclaration
                | SyntaxKind::AnnotationTypeDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::RecordDeclaration
        )
    }

    /// Whether this kind is one of the type node kinds.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            SyntaxKind::PrimitiveType
                | SyntaxKind::ClassOrInterfaceType
                | SyntaxKind::ArrayType
                | SyntaxKind::VoidType
                | SyntaxKind::WildcardType
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups() {
        assert!(SyntaxKind::EnumDeclaration.is_type_declaration());
        assert!(!SyntaxKind::EnumConstant.is_type_declaration());
        assert!(SyntaxKind::WildcardType.is_type());
        assert!(!SyntaxKind::TypeArguments.is_type());
    }
}
