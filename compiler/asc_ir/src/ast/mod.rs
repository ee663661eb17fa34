//! Abstract syntax tree.
//!
//! Every node is anchored by a [`Range`] and tagged by a [`NodeKind`].
//! The tree is made of closed sum types dispatched by `match`:
//!
//! - `types`: type references, type parameters and parameters
//! - `expr`: [`Expression`] and its concrete node structs
//! - `stmt`: [`Statement`] and the non-declaration statement structs
//! - `decl`: declaration statements and the [`Declaration`] trait
//! - `decorator`: decorators and built-in decorator kinds
//!
//! Concrete node structs are `#[non_exhaustive]` and created through the
//! factory functions only. Fields are read through accessors; the few that
//! may change after parsing have setters. A parent exclusively owns its
//! children.

use crate::Range;

mod decl;
mod decorator;
mod expr;
mod stmt;
mod types;

pub use decl::{
    ArrowKind, ClassDeclaration, Declaration, EnumDeclaration, EnumValueDeclaration,
    FieldDeclaration, FunctionDeclaration, ImportDeclaration, IndexSignature,
    NamespaceDeclaration, TypeDeclaration, VariableDeclaration,
};
pub use decorator::{find_decorator, Decorator, DecoratorKind};
pub use expr::{
    ArrayLiteralExpression, AssertionExpression, AssertionKind, BinaryExpression, CallExpression,
    ClassExpression, CommaExpression, CompiledExpression, CompiledHandle, ElementAccessExpression,
    Expression, FloatLiteralExpression, FunctionExpression, IdentifierExpression,
    InstanceOfExpression, IntegerLiteralExpression, KeywordExpression, NewExpression,
    ObjectLiteralExpression, OmittedExpression, ParenthesizedExpression, PropertyAccessExpression,
    RegexpLiteralExpression, StringLiteralExpression, TemplateLiteralExpression,
    TernaryExpression, UnaryExpression,
};
pub use stmt::{
    BlockStatement, BreakStatement, ContinueStatement, DoStatement, EmptyStatement,
    ExportDefaultStatement, ExportImportStatement, ExportMember, ExportStatement,
    ExpressionStatement, ForOfStatement, ForStatement, IfStatement, ImportStatement,
    ModuleDeclaration, ReturnStatement, Statement, SwitchCase, SwitchStatement, ThrowStatement,
    TryStatement, VariableStatement, VoidStatement, WhileStatement,
};
pub use types::{
    is_type_omitted, FunctionTypeNode, NamedTypeNode, Parameter, ParameterKind, TypeName,
    TypeNode, TypeParameter,
};

/// Kind tag of a node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum NodeKind {
    Source,

    // types
    NamedType,
    FunctionType,
    TypeName,
    TypeParameter,
    Parameter,

    // expressions
    Identifier,
    Assertion,
    Binary,
    Call,
    Class,
    Comma,
    ElementAccess,
    False,
    Function,
    InstanceOf,
    Literal,
    New,
    Null,
    Omitted,
    Parenthesized,
    PropertyAccess,
    Ternary,
    Super,
    This,
    True,
    Constructor,
    UnaryPostfix,
    UnaryPrefix,
    Compiled,

    // statements
    Block,
    Break,
    Continue,
    Do,
    Empty,
    Export,
    ExportDefault,
    ExportImport,
    Expression,
    For,
    ForOf,
    If,
    Import,
    Return,
    Switch,
    Throw,
    Try,
    Variable,
    Void,
    While,
    Module,

    // declaration statements
    ClassDeclaration,
    EnumDeclaration,
    EnumValueDeclaration,
    FieldDeclaration,
    FunctionDeclaration,
    ImportDeclaration,
    InterfaceDeclaration,
    MethodDeclaration,
    NamespaceDeclaration,
    TypeDeclaration,
    VariableDeclaration,

    // special
    Decorator,
    ExportMember,
    SwitchCase,
    IndexSignature,
    Comment,
}

impl NodeKind {
    /// Whether nodes of this kind are declaration statements.
    pub fn is_declaration(self) -> bool {
        (NodeKind::ClassDeclaration as u8..=NodeKind::VariableDeclaration as u8)
            .contains(&(self as u8))
    }
}

/// Kind of a literal expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Float,
    Integer,
    String,
    Template,
    RegExp,
    Array,
    Object,
}

/// Common interface of every node.
pub trait Node {
    /// Kind tag of this node.
    fn kind(&self) -> NodeKind;

    /// Source range of this node.
    fn range(&self) -> Range;
}

/// Implements [`Node`] for structs with a `range` field and a fixed kind.
macro_rules! impl_node {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl $crate::ast::Node for $ty {
                #[inline]
                fn kind(&self) -> $crate::ast::NodeKind {
                    $crate::ast::NodeKind::$kind
                }

                #[inline]
                fn range(&self) -> $crate::Range {
                    self.range
                }
            }
        )*
    };
}
use impl_node;
