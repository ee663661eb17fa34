//! Declaration statements.
//!
//! Every declaration carries a name, optional decorators, [`CommonFlags`]
//! and an optional module name override set by a preceding `module`
//! statement. Shared access goes through the [`Declaration`] trait.

use super::{
    Decorator, Expression, FunctionTypeNode, IdentifierExpression, NamedTypeNode, Node, NodeKind,
    Statement, TypeNode, TypeParameter,
};
use crate::{CommonFlags, Range};

/// Common interface of declaration statements.
pub trait Declaration: Node {
    fn name(&self) -> &IdentifierExpression;

    fn decorators(&self) -> Option<&[Decorator]>;

    fn flags(&self) -> CommonFlags;

    fn flags_mut(&mut self) -> &mut CommonFlags;

    /// Module name override from a preceding `module` statement.
    fn overridden_module_name(&self) -> Option<&str>;

    fn set_overridden_module_name(&mut self, name: String);

    /// Whether all of `flags` are set.
    fn is(&self, flags: CommonFlags) -> bool {
        self.flags().contains(flags)
    }

    /// Whether any of `flags` is set.
    fn is_any(&self, flags: CommonFlags) -> bool {
        self.flags().intersects(flags)
    }

    fn set(&mut self, flags: CommonFlags) {
        self.flags_mut().insert(flags);
    }
}

/// Implements [`Declaration`] and [`Node`] for declaration structs.
///
/// `kind` is either a fixed [`NodeKind`] variant or `dynamic` for structs
/// storing their kind in a `kind` field.
macro_rules! impl_declaration {
    (@kind $self:ident, dynamic) => {
        $self.kind
    };
    (@kind $self:ident, $kind:ident) => {
        NodeKind::$kind
    };
    ($($ty:ty => $kind:tt),* $(,)?) => {
        $(
            impl Declaration for $ty {
                #[inline]
                fn name(&self) -> &IdentifierExpression {
                    &self.name
                }

                #[inline]
                fn decorators(&self) -> Option<&[Decorator]> {
                    self.decorators.as_deref()
                }

                #[inline]
                fn flags(&self) -> CommonFlags {
                    self.flags
                }

                #[inline]
                fn flags_mut(&mut self) -> &mut CommonFlags {
                    &mut self.flags
                }

                fn overridden_module_name(&self) -> Option<&str> {
                    self.overridden_module_name.as_deref()
                }

                fn set_overridden_module_name(&mut self, name: String) {
                    self.overridden_module_name = Some(name);
                }
            }

            impl Node for $ty {
                #[inline]
                fn kind(&self) -> NodeKind {
                    impl_declaration!(@kind self, $kind)
                }

                #[inline]
                fn range(&self) -> Range {
                    self.range
                }
            }
        )*
    };
}

/// A `class` or `interface` declaration.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ClassDeclaration {
    kind: NodeKind,
    pub(crate) name: IdentifierExpression,
    pub(crate) decorators: Option<Vec<Decorator>>,
    pub(crate) flags: CommonFlags,
    pub(crate) overridden_module_name: Option<String>,
    pub(crate) type_parameters: Option<Vec<TypeParameter>>,
    pub(crate) extends_type: Option<NamedTypeNode>,
    pub(crate) implements_types: Option<Vec<NamedTypeNode>>,
    pub(crate) members: Vec<Statement>,
    pub(crate) index_signature: Option<IndexSignature>,
    pub(crate) range: Range,
}

impl ClassDeclaration {
    pub fn new(
        name: IdentifierExpression,
        decorators: Option<Vec<Decorator>>,
        flags: CommonFlags,
        type_parameters: Option<Vec<TypeParameter>>,
        extends_type: Option<NamedTypeNode>,
        implements_types: Option<Vec<NamedTypeNode>>,
        members: Vec<Statement>,
        range: Range,
    ) -> Self {
        ClassDeclaration {
            kind: NodeKind::ClassDeclaration,
            name,
            decorators,
            flags,
            overridden_module_name: None,
            type_parameters,
            extends_type,
            implements_types,
            members,
            index_signature: None,
            range,
        }
    }

    pub fn new_interface(
        name: IdentifierExpression,
        decorators: Option<Vec<Decorator>>,
        flags: CommonFlags,
        type_parameters: Option<Vec<TypeParameter>>,
        extends_type: Option<NamedTypeNode>,
        implements_types: Option<Vec<NamedTypeNode>>,
        members: Vec<Statement>,
        range: Range,
    ) -> Self {
        ClassDeclaration {
            kind: NodeKind::InterfaceDeclaration,
            ..ClassDeclaration::new(
                name,
                decorators,
                flags,
                type_parameters,
                extends_type,
                implements_types,
                members,
                range,
            )
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind == NodeKind::InterfaceDeclaration
    }

    pub fn is_generic(&self) -> bool {
        self.type_parameters
            .as_ref()
            .is_some_and(|params| !params.is_empty())
    }

    pub fn set_index_signature(&mut self, index_signature: IndexSignature) {
        self.index_signature = Some(index_signature);
    }

    #[inline]
    pub fn type_parameters(&self) -> Option<&[TypeParameter]> {
        self.type_parameters.as_deref()
    }

    #[inline]
    pub fn extends_type(&self) -> Option<&NamedTypeNode> {
        self.extends_type.as_ref()
    }

    #[inline]
    pub fn implements_types(&self) -> Option<&[NamedTypeNode]> {
        self.implements_types.as_deref()
    }

    #[inline]
    pub fn members(&self) -> &[Statement] {
        &self.members
    }

    #[inline]
    pub fn index_signature(&self) -> Option<&IndexSignature> {
        self.index_signature.as_ref()
    }
}

/// Arrow function kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ArrowKind {
    /// Not an arrow function.
    #[default]
    None,
    /// `(a, b) => ...`
    Parenthesized,
    /// `a => ...`
    Single,
}

/// A `function` declaration or a method.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct FunctionDeclaration {
    kind: NodeKind,
    pub(crate) name: IdentifierExpression,
    pub(crate) decorators: Option<Vec<Decorator>>,
    pub(crate) flags: CommonFlags,
    pub(crate) overridden_module_name: Option<String>,
    pub(crate) type_parameters: Option<Vec<TypeParameter>>,
    pub(crate) signature: FunctionTypeNode,
    pub(crate) body: Option<Box<Statement>>,
    pub(crate) arrow_kind: ArrowKind,
    pub(crate) range: Range,
}

impl FunctionDeclaration {
    pub fn new(
        name: IdentifierExpression,
        decorators: Option<Vec<Decorator>>,
        flags: CommonFlags,
        type_parameters: Option<Vec<TypeParameter>>,
        signature: FunctionTypeNode,
        body: Option<Statement>,
        arrow_kind: ArrowKind,
        range: Range,
    ) -> Self {
        FunctionDeclaration {
            kind: NodeKind::FunctionDeclaration,
            name,
            decorators,
            flags,
            overridden_module_name: None,
            type_parameters,
            signature,
            body: body.map(Box::new),
            arrow_kind,
            range,
        }
    }

    /// Creates a method declaration within a class or interface.
    pub fn new_method(
        name: IdentifierExpression,
        decorators: Option<Vec<Decorator>>,
        flags: CommonFlags,
        type_parameters: Option<Vec<TypeParameter>>,
        signature: FunctionTypeNode,
        body: Option<Statement>,
        range: Range,
    ) -> Self {
        FunctionDeclaration {
            kind: NodeKind::MethodDeclaration,
            ..FunctionDeclaration::new(
                name,
                decorators,
                flags,
                type_parameters,
                signature,
                body,
                ArrowKind::None,
                range,
            )
        }
    }

    pub fn is_method(&self) -> bool {
        self.kind == NodeKind::MethodDeclaration
    }

    pub fn is_generic(&self) -> bool {
        self.type_parameters
            .as_ref()
            .is_some_and(|params| !params.is_empty())
    }

    #[inline]
    pub fn type_parameters(&self) -> Option<&[TypeParameter]> {
        self.type_parameters.as_deref()
    }

    #[inline]
    pub fn signature(&self) -> &FunctionTypeNode {
        &self.signature
    }

    #[inline]
    pub fn body(&self) -> Option<&Statement> {
        self.body.as_deref()
    }

    #[inline]
    pub fn arrow_kind(&self) -> ArrowKind {
        self.arrow_kind
    }
}

/// An `enum` declaration.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct EnumDeclaration {
    pub(crate) name: IdentifierExpression,
    pub(crate) decorators: Option<Vec<Decorator>>,
    pub(crate) flags: CommonFlags,
    pub(crate) overridden_module_name: Option<String>,
    pub(crate) values: Vec<EnumValueDeclaration>,
    pub(crate) range: Range,
}

impl EnumDeclaration {
    pub fn new(
        name: IdentifierExpression,
        decorators: Option<Vec<Decorator>>,
        flags: CommonFlags,
        values: Vec<EnumValueDeclaration>,
        range: Range,
    ) -> Self {
        EnumDeclaration {
            name,
            decorators,
            flags,
            overridden_module_name: None,
            values,
            range,
        }
    }

    #[inline]
    pub fn values(&self) -> &[EnumValueDeclaration] {
        &self.values
    }
}

/// A value of an `enum` declaration.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct EnumValueDeclaration {
    pub(crate) name: IdentifierExpression,
    pub(crate) decorators: Option<Vec<Decorator>>,
    pub(crate) flags: CommonFlags,
    pub(crate) overridden_module_name: Option<String>,
    pub(crate) initializer: Option<Expression>,
    pub(crate) range: Range,
}

impl EnumValueDeclaration {
    pub fn new(
        name: IdentifierExpression,
        flags: CommonFlags,
        initializer: Option<Expression>,
        range: Range,
    ) -> Self {
        EnumValueDeclaration {
            name,
            decorators: None,
            flags,
            overridden_module_name: None,
            initializer,
            range,
        }
    }

    #[inline]
    pub fn initializer(&self) -> Option<&Expression> {
        self.initializer.as_ref()
    }
}

/// A field declaration within a class.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct FieldDeclaration {
    pub(crate) name: IdentifierExpression,
    pub(crate) decorators: Option<Vec<Decorator>>,
    pub(crate) flags: CommonFlags,
    pub(crate) overridden_module_name: Option<String>,
    pub(crate) type_node: Option<TypeNode>,
    pub(crate) initializer: Option<Expression>,
    /// Index of the constructor parameter declaring this field, if any.
    pub(crate) parameter_index: Option<u32>,
    pub(crate) range: Range,
}

impl FieldDeclaration {
    pub fn new(
        name: IdentifierExpression,
        decorators: Option<Vec<Decorator>>,
        flags: CommonFlags,
        type_node: Option<TypeNode>,
        initializer: Option<Expression>,
        range: Range,
    ) -> Self {
        FieldDeclaration {
            name,
            decorators,
            flags,
            overridden_module_name: None,
            type_node,
            initializer,
            parameter_index: None,
            range,
        }
    }

    pub fn set_parameter_index(&mut self, index: u32) {
        self.parameter_index = Some(index);
    }

    #[inline]
    pub fn type_node(&self) -> Option<&TypeNode> {
        self.type_node.as_ref()
    }

    #[inline]
    pub fn initializer(&self) -> Option<&Expression> {
        self.initializer.as_ref()
    }

    #[inline]
    pub fn parameter_index(&self) -> Option<u32> {
        self.parameter_index
    }
}

/// A single binding of an `import` statement, e.g. `a as b`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ImportDeclaration {
    /// Local name.
    pub(crate) name: IdentifierExpression,
    pub(crate) decorators: Option<Vec<Decorator>>,
    pub(crate) flags: CommonFlags,
    pub(crate) overridden_module_name: Option<String>,
    /// Name in the imported module.
    pub(crate) foreign_name: IdentifierExpression,
    pub(crate) range: Range,
}

impl ImportDeclaration {
    /// Creates an import binding; the local name defaults to the foreign name.
    pub fn new(
        foreign_name: IdentifierExpression,
        name: Option<IdentifierExpression>,
        range: Range,
    ) -> Self {
        ImportDeclaration {
            name: name.unwrap_or_else(|| foreign_name.clone()),
            decorators: None,
            flags: CommonFlags::empty(),
            overridden_module_name: None,
            foreign_name,
            range,
        }
    }

    #[inline]
    pub fn foreign_name(&self) -> &IdentifierExpression {
        &self.foreign_name
    }
}

/// A `namespace` declaration.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NamespaceDeclaration {
    pub(crate) name: IdentifierExpression,
    pub(crate) decorators: Option<Vec<Decorator>>,
    pub(crate) flags: CommonFlags,
    pub(crate) overridden_module_name: Option<String>,
    pub(crate) members: Vec<Statement>,
    pub(crate) range: Range,
}

impl NamespaceDeclaration {
    pub fn new(
        name: IdentifierExpression,
        decorators: Option<Vec<Decorator>>,
        flags: CommonFlags,
        members: Vec<Statement>,
        range: Range,
    ) -> Self {
        NamespaceDeclaration {
            name,
            decorators,
            flags,
            overridden_module_name: None,
            members,
            range,
        }
    }

    #[inline]
    pub fn members(&self) -> &[Statement] {
        &self.members
    }
}

/// A `type` alias declaration.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct TypeDeclaration {
    pub(crate) name: IdentifierExpression,
    pub(crate) decorators: Option<Vec<Decorator>>,
    pub(crate) flags: CommonFlags,
    pub(crate) overridden_module_name: Option<String>,
    pub(crate) type_parameters: Option<Vec<TypeParameter>>,
    pub(crate) type_node: TypeNode,
    pub(crate) range: Range,
}

impl TypeDeclaration {
    pub fn new(
        name: IdentifierExpression,
        decorators: Option<Vec<Decorator>>,
        flags: CommonFlags,
        type_parameters: Option<Vec<TypeParameter>>,
        type_node: TypeNode,
        range: Range,
    ) -> Self {
        TypeDeclaration {
            name,
            decorators,
            flags,
            overridden_module_name: None,
            type_parameters,
            type_node,
            range,
        }
    }

    #[inline]
    pub fn type_parameters(&self) -> Option<&[TypeParameter]> {
        self.type_parameters.as_deref()
    }

    #[inline]
    pub fn type_node(&self) -> &TypeNode {
        &self.type_node
    }
}

/// A single binding of a variable statement.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct VariableDeclaration {
    pub(crate) name: IdentifierExpression,
    pub(crate) decorators: Option<Vec<Decorator>>,
    pub(crate) flags: CommonFlags,
    pub(crate) overridden_module_name: Option<String>,
    pub(crate) type_node: Option<TypeNode>,
    pub(crate) initializer: Option<Expression>,
    pub(crate) range: Range,
}

impl VariableDeclaration {
    pub fn new(
        name: IdentifierExpression,
        decorators: Option<Vec<Decorator>>,
        flags: CommonFlags,
        type_node: Option<TypeNode>,
        initializer: Option<Expression>,
        range: Range,
    ) -> Self {
        VariableDeclaration {
            name,
            decorators,
            flags,
            overridden_module_name: None,
            type_node,
            initializer,
            range,
        }
    }

    #[inline]
    pub fn type_node(&self) -> Option<&TypeNode> {
        self.type_node.as_ref()
    }

    #[inline]
    pub fn initializer(&self) -> Option<&Expression> {
        self.initializer.as_ref()
    }
}

impl_declaration! {
    ClassDeclaration => dynamic,
    FunctionDeclaration => dynamic,
    EnumDeclaration => EnumDeclaration,
    EnumValueDeclaration => EnumValueDeclaration,
    FieldDeclaration => FieldDeclaration,
    ImportDeclaration => ImportDeclaration,
    NamespaceDeclaration => NamespaceDeclaration,
    TypeDeclaration => TypeDeclaration,
    VariableDeclaration => VariableDeclaration,
}

/// An index signature within a class, e.g. `[key: i32]: u8`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct IndexSignature {
    pub(crate) key_type: NamedTypeNode,
    pub(crate) value_type: TypeNode,
    pub(crate) flags: CommonFlags,
    pub(crate) range: Range,
}

impl IndexSignature {
    pub fn new(
        key_type: NamedTypeNode,
        value_type: TypeNode,
        flags: CommonFlags,
        range: Range,
    ) -> Self {
        IndexSignature {
            key_type,
            value_type,
            flags,
            range,
        }
    }

    #[inline]
    pub fn key_type(&self) -> &NamedTypeNode {
        &self.key_type
    }

    #[inline]
    pub fn value_type(&self) -> &TypeNode {
        &self.value_type
    }

    #[inline]
    pub fn flags(&self) -> CommonFlags {
        self.flags
    }
}

super::impl_node! {
    IndexSignature => IndexSignature,
}
