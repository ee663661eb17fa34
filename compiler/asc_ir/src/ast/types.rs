//! Type references, type parameters and parameters.

use super::{impl_node, Expression, FieldDeclaration, IdentifierExpression, Node, NodeKind};
use crate::{CommonFlags, Range};

/// A possibly qualified type name, e.g. `a.b.C`.
///
/// Each part links to the next part, if any.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct TypeName {
    pub(crate) identifier: IdentifierExpression,
    pub(crate) next: Option<Box<TypeName>>,
    pub(crate) range: Range,
}

impl TypeName {
    pub fn new(identifier: IdentifierExpression, next: Option<TypeName>, range: Range) -> Self {
        TypeName {
            identifier,
            next: next.map(Box::new),
            range,
        }
    }

    /// Single-part type name.
    pub fn new_simple(name: impl Into<String>, range: Range) -> Self {
        TypeName::new(IdentifierExpression::new(name, false, range), None, range)
    }

    /// Whether the name has more than one part.
    pub fn is_qualified(&self) -> bool {
        self.next.is_some()
    }

    #[inline]
    pub fn identifier(&self) -> &IdentifierExpression {
        &self.identifier
    }

    #[inline]
    pub fn next(&self) -> Option<&TypeName> {
        self.next.as_deref()
    }
}

/// A named type reference, e.g. `Map<K, V> | null`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NamedTypeNode {
    pub(crate) name: TypeName,
    pub(crate) type_arguments: Option<Vec<TypeNode>>,
    pub(crate) is_nullable: bool,
    pub(crate) range: Range,
}

impl NamedTypeNode {
    pub fn new(
        name: TypeName,
        type_arguments: Option<Vec<TypeNode>>,
        is_nullable: bool,
        range: Range,
    ) -> Self {
        NamedTypeNode {
            name,
            type_arguments,
            is_nullable,
            range,
        }
    }

    /// Whether at least one type argument is present.
    pub fn has_type_arguments(&self) -> bool {
        self.type_arguments.as_ref().is_some_and(|args| !args.is_empty())
    }

    /// Whether this type references one of `type_parameters`.
    ///
    /// Only unqualified names are considered. With type arguments present,
    /// the arguments are searched instead of the name itself.
    pub fn has_generic_component(&self, type_parameters: &[TypeParameter]) -> bool {
        if self.name.is_qualified() {
            return false;
        }
        match &self.type_arguments {
            Some(args) if !args.is_empty() => args
                .iter()
                .any(|arg| arg.has_generic_component(type_parameters)),
            _ => {
                let name = self.name.identifier.text.as_str();
                type_parameters.iter().any(|param| param.name.text == name)
            }
        }
    }

    #[inline]
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    #[inline]
    pub fn type_arguments(&self) -> Option<&[TypeNode]> {
        self.type_arguments.as_deref()
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.is_nullable
    }
}

/// A function type, e.g. `(this: T, a: i32) => void`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct FunctionTypeNode {
    pub(crate) parameters: Vec<Parameter>,
    pub(crate) return_type: Box<TypeNode>,
    /// Explicitly provided `this` type; never a function type.
    pub(crate) explicit_this_type: Option<NamedTypeNode>,
    pub(crate) is_nullable: bool,
    pub(crate) range: Range,
}

impl FunctionTypeNode {
    pub fn new(
        parameters: Vec<Parameter>,
        return_type: TypeNode,
        explicit_this_type: Option<NamedTypeNode>,
        is_nullable: bool,
        range: Range,
    ) -> Self {
        FunctionTypeNode {
            parameters,
            return_type: Box::new(return_type),
            explicit_this_type,
            is_nullable,
            range,
        }
    }

    pub fn has_generic_component(&self, type_parameters: &[TypeParameter]) -> bool {
        self.parameters
            .iter()
            .any(|param| param.type_node.has_generic_component(type_parameters))
            || self.return_type.has_generic_component(type_parameters)
            || self
                .explicit_this_type
                .as_ref()
                .is_some_and(|this_type| this_type.has_generic_component(type_parameters))
    }

    #[inline]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    #[inline]
    pub fn return_type(&self) -> &TypeNode {
        &self.return_type
    }

    #[inline]
    pub fn explicit_this_type(&self) -> Option<&NamedTypeNode> {
        self.explicit_this_type.as_ref()
    }

    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.is_nullable
    }
}

/// A type reference.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeNode {
    Named(NamedTypeNode),
    Function(FunctionTypeNode),
}

impl TypeNode {
    pub fn new_named(
        name: TypeName,
        type_arguments: Option<Vec<TypeNode>>,
        is_nullable: bool,
        range: Range,
    ) -> Self {
        TypeNode::Named(NamedTypeNode::new(name, type_arguments, is_nullable, range))
    }

    pub fn new_function(
        parameters: Vec<Parameter>,
        return_type: TypeNode,
        explicit_this_type: Option<NamedTypeNode>,
        is_nullable: bool,
        range: Range,
    ) -> Self {
        TypeNode::Function(FunctionTypeNode::new(
            parameters,
            return_type,
            explicit_this_type,
            is_nullable,
            range,
        ))
    }

    /// Placeholder for a type that was left out in the source.
    pub fn new_omitted(range: Range) -> Self {
        TypeNode::new_named(TypeName::new_simple("", range), None, false, range)
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            TypeNode::Named(node) => node.is_nullable,
            TypeNode::Function(node) => node.is_nullable,
        }
    }

    /// Whether this type references one of `type_parameters`.
    pub fn has_generic_component(&self, type_parameters: &[TypeParameter]) -> bool {
        match self {
            TypeNode::Named(node) => node.has_generic_component(type_parameters),
            TypeNode::Function(node) => node.has_generic_component(type_parameters),
        }
    }
}

impl Node for TypeNode {
    fn kind(&self) -> NodeKind {
        match self {
            TypeNode::Named(_) => NodeKind::NamedType,
            TypeNode::Function(_) => NodeKind::FunctionType,
        }
    }

    fn range(&self) -> Range {
        match self {
            TypeNode::Named(node) => node.range,
            TypeNode::Function(node) => node.range,
        }
    }
}

/// Whether `type_node` is the placeholder of an omitted type.
pub fn is_type_omitted(type_node: &TypeNode) -> bool {
    match type_node {
        TypeNode::Named(node) => !node.name.is_qualified() && node.name.identifier.text.is_empty(),
        TypeNode::Function(_) => false,
    }
}

/// A type parameter, e.g. `T extends Base = Default`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct TypeParameter {
    pub(crate) name: IdentifierExpression,
    pub(crate) extends_type: Option<NamedTypeNode>,
    pub(crate) default_type: Option<NamedTypeNode>,
    pub(crate) range: Range,
}

impl TypeParameter {
    pub fn new(
        name: IdentifierExpression,
        extends_type: Option<NamedTypeNode>,
        default_type: Option<NamedTypeNode>,
        range: Range,
    ) -> Self {
        TypeParameter {
            name,
            extends_type,
            default_type,
            range,
        }
    }

    #[inline]
    pub fn name(&self) -> &IdentifierExpression {
        &self.name
    }

    #[inline]
    pub fn extends_type(&self) -> Option<&NamedTypeNode> {
        self.extends_type.as_ref()
    }

    #[inline]
    pub fn default_type(&self) -> Option<&NamedTypeNode> {
        self.default_type.as_ref()
    }
}

/// Kind of a function parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ParameterKind {
    /// No specific flags.
    #[default]
    Default,
    /// Optional: `a?: i32` or with an initializer.
    Optional,
    /// Rest: `...rest: i32[]`
    Rest,
}

/// A function parameter.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Parameter {
    pub(crate) parameter_kind: ParameterKind,
    pub(crate) name: IdentifierExpression,
    pub(crate) type_node: TypeNode,
    pub(crate) initializer: Option<Expression>,
    /// Field declared implicitly by a constructor parameter with modifiers.
    pub(crate) implicit_field_declaration: Option<Box<FieldDeclaration>>,
    pub(crate) flags: CommonFlags,
    pub(crate) range: Range,
}

impl Parameter {
    pub fn new(
        parameter_kind: ParameterKind,
        name: IdentifierExpression,
        type_node: TypeNode,
        initializer: Option<Expression>,
        range: Range,
    ) -> Self {
        Parameter {
            parameter_kind,
            name,
            type_node,
            initializer,
            implicit_field_declaration: None,
            flags: CommonFlags::empty(),
            range,
        }
    }

    /// Whether all of `flags` are set.
    pub fn is(&self, flags: CommonFlags) -> bool {
        self.flags.contains(flags)
    }

    /// Whether any of `flags` is set.
    pub fn is_any(&self, flags: CommonFlags) -> bool {
        self.flags.intersects(flags)
    }

    pub fn set(&mut self, flags: CommonFlags) {
        self.flags.insert(flags);
    }

    pub fn set_implicit_field_declaration(&mut self, declaration: FieldDeclaration) {
        self.implicit_field_declaration = Some(Box::new(declaration));
    }

    #[inline]
    pub fn parameter_kind(&self) -> ParameterKind {
        self.parameter_kind
    }

    #[inline]
    pub fn name(&self) -> &IdentifierExpression {
        &self.name
    }

    #[inline]
    pub fn type_node(&self) -> &TypeNode {
        &self.type_node
    }

    #[inline]
    pub fn initializer(&self) -> Option<&Expression> {
        self.initializer.as_ref()
    }

    #[inline]
    pub fn implicit_field_declaration(&self) -> Option<&FieldDeclaration> {
        self.implicit_field_declaration.as_deref()
    }

    #[inline]
    pub fn flags(&self) -> CommonFlags {
        self.flags
    }
}

impl_node! {
    TypeName => TypeName,
    NamedTypeNode => NamedType,
    FunctionTypeNode => FunctionType,
    TypeParameter => TypeParameter,
    Parameter => Parameter,
}
