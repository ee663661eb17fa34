//! Statement nodes.

use super::{
    impl_node, ClassDeclaration, Declaration, Decorator, EnumDeclaration, Expression,
    FieldDeclaration, FunctionDeclaration, IdentifierExpression, ImportDeclaration,
    NamespaceDeclaration, Node, NodeKind, StringLiteralExpression, TypeDeclaration,
    VariableDeclaration,
};
use crate::path::{mangle_internal_path, normalize_path, resolve_path, LIBRARY_PREFIX};
use crate::{CommonFlags, Range, Source};

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct BlockStatement {
    pub(crate) statements: Vec<Statement>,
    pub(crate) range: Range,
}

impl BlockStatement {
    #[inline]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct BreakStatement {
    pub(crate) label: Option<IdentifierExpression>,
    pub(crate) range: Range,
}

impl BreakStatement {
    #[inline]
    pub fn label(&self) -> Option<&IdentifierExpression> {
        self.label.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ContinueStatement {
    pub(crate) label: Option<IdentifierExpression>,
    pub(crate) range: Range,
}

impl ContinueStatement {
    #[inline]
    pub fn label(&self) -> Option<&IdentifierExpression> {
        self.label.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct DoStatement {
    pub(crate) body: Box<Statement>,
    pub(crate) condition: Expression,
    pub(crate) range: Range,
}

impl DoStatement {
    #[inline]
    pub fn body(&self) -> &Statement {
        &self.body
    }

    #[inline]
    pub fn condition(&self) -> &Expression {
        &self.condition
    }
}

/// A semicolon terminating nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct EmptyStatement {
    pub(crate) range: Range,
}

/// A member of an `export` statement, e.g. `a as b`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ExportMember {
    pub(crate) local_name: IdentifierExpression,
    pub(crate) exported_name: IdentifierExpression,
    pub(crate) range: Range,
}

impl ExportMember {
    /// Creates an export member; the exported name defaults to the local name.
    pub fn new(
        local_name: IdentifierExpression,
        exported_name: Option<IdentifierExpression>,
        range: Range,
    ) -> Self {
        ExportMember {
            exported_name: exported_name.unwrap_or_else(|| local_name.clone()),
            local_name,
            range,
        }
    }

    #[inline]
    pub fn local_name(&self) -> &IdentifierExpression {
        &self.local_name
    }

    #[inline]
    pub fn exported_name(&self) -> &IdentifierExpression {
        &self.exported_name
    }
}

/// An `export { ... } [from "path"]` statement.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ExportStatement {
    pub(crate) members: Option<Vec<ExportMember>>,
    pub(crate) path: Option<StringLiteralExpression>,
    pub(crate) is_declare: bool,
    /// Internal path of the re-exported module, if `path` is present.
    pub(crate) internal_path: Option<String>,
    pub(crate) range: Range,
}

impl ExportStatement {
    #[inline]
    pub fn members(&self) -> Option<&[ExportMember]> {
        self.members.as_deref()
    }

    #[inline]
    pub fn path(&self) -> Option<&StringLiteralExpression> {
        self.path.as_ref()
    }

    #[inline]
    pub fn is_declare(&self) -> bool {
        self.is_declare
    }

    #[inline]
    pub fn internal_path(&self) -> Option<&str> {
        self.internal_path.as_deref()
    }
}

/// An `export default` statement.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ExportDefaultStatement {
    /// The exported declaration statement.
    pub(crate) declaration: Box<Statement>,
    pub(crate) range: Range,
}

impl ExportDefaultStatement {
    #[inline]
    pub fn declaration(&self) -> &Statement {
        &self.declaration
    }
}

/// An `export import name = external.name` statement.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ExportImportStatement {
    pub(crate) name: IdentifierExpression,
    pub(crate) external_name: IdentifierExpression,
    pub(crate) range: Range,
}

impl ExportImportStatement {
    #[inline]
    pub fn name(&self) -> &IdentifierExpression {
        &self.name
    }

    #[inline]
    pub fn external_name(&self) -> &IdentifierExpression {
        &self.external_name
    }
}

/// An expression used as a statement. Its range is the expression's.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ExpressionStatement {
    pub(crate) expression: Expression,
}

impl ExpressionStatement {
    #[inline]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ForStatement {
    pub(crate) initializer: Option<Box<Statement>>,
    pub(crate) condition: Option<Expression>,
    pub(crate) incrementor: Option<Expression>,
    pub(crate) body: Box<Statement>,
    pub(crate) range: Range,
}

impl ForStatement {
    #[inline]
    pub fn initializer(&self) -> Option<&Statement> {
        self.initializer.as_deref()
    }

    #[inline]
    pub fn condition(&self) -> Option<&Expression> {
        self.condition.as_ref()
    }

    #[inline]
    pub fn incrementor(&self) -> Option<&Expression> {
        self.incrementor.as_ref()
    }

    #[inline]
    pub fn body(&self) -> &Statement {
        &self.body
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ForOfStatement {
    pub(crate) variable: Box<Statement>,
    pub(crate) iterable: Expression,
    pub(crate) body: Box<Statement>,
    pub(crate) range: Range,
}

impl ForOfStatement {
    #[inline]
    pub fn variable(&self) -> &Statement {
        &self.variable
    }

    #[inline]
    pub fn iterable(&self) -> &Expression {
        &self.iterable
    }

    #[inline]
    pub fn body(&self) -> &Statement {
        &self.body
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct IfStatement {
    pub(crate) condition: Expression,
    pub(crate) if_true: Box<Statement>,
    pub(crate) if_false: Option<Box<Statement>>,
    pub(crate) range: Range,
}

impl IfStatement {
    #[inline]
    pub fn condition(&self) -> &Expression {
        &self.condition
    }

    #[inline]
    pub fn if_true(&self) -> &Statement {
        &self.if_true
    }

    #[inline]
    pub fn if_false(&self) -> Option<&Statement> {
        self.if_false.as_deref()
    }
}

/// An `import` statement.
///
/// Either `declarations` (`import { a, b as c } from "path"`) or
/// `namespace_name` (`import * as ns from "path"`) is set.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ImportStatement {
    pub(crate) declarations: Option<Vec<ImportDeclaration>>,
    pub(crate) namespace_name: Option<IdentifierExpression>,
    pub(crate) path: StringLiteralExpression,
    /// Mangled internal path of the imported module.
    pub(crate) internal_path: String,
    pub(crate) range: Range,
}

impl ImportStatement {
    #[inline]
    pub fn declarations(&self) -> Option<&[ImportDeclaration]> {
        self.declarations.as_deref()
    }

    #[inline]
    pub fn namespace_name(&self) -> Option<&IdentifierExpression> {
        self.namespace_name.as_ref()
    }

    #[inline]
    pub fn path(&self) -> &StringLiteralExpression {
        &self.path
    }

    #[inline]
    pub fn internal_path(&self) -> &str {
        &self.internal_path
    }
}

/// A `module "name";` statement overriding the module name of subsequent
/// declarations.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ModuleDeclaration {
    pub(crate) module_name: String,
    pub(crate) flags: CommonFlags,
    pub(crate) range: Range,
}

impl ModuleDeclaration {
    #[inline]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    #[inline]
    pub fn flags(&self) -> CommonFlags {
        self.flags
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ReturnStatement {
    pub(crate) value: Option<Expression>,
    pub(crate) range: Range,
}

impl ReturnStatement {
    #[inline]
    pub fn value(&self) -> Option<&Expression> {
        self.value.as_ref()
    }
}

/// A single `case` or `default` clause of a `switch` statement.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct SwitchCase {
    /// Case label; `None` for `default`.
    pub(crate) label: Option<Expression>,
    pub(crate) statements: Vec<Statement>,
    pub(crate) range: Range,
}

impl SwitchCase {
    pub fn new(label: Option<Expression>, statements: Vec<Statement>, range: Range) -> Self {
        SwitchCase {
            label,
            statements,
            range,
        }
    }

    pub fn is_default(&self) -> bool {
        self.label.is_none()
    }

    #[inline]
    pub fn label(&self) -> Option<&Expression> {
        self.label.as_ref()
    }

    #[inline]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct SwitchStatement {
    pub(crate) condition: Expression,
    pub(crate) cases: Vec<SwitchCase>,
    pub(crate) range: Range,
}

impl SwitchStatement {
    #[inline]
    pub fn condition(&self) -> &Expression {
        &self.condition
    }

    #[inline]
    pub fn cases(&self) -> &[SwitchCase] {
        &self.cases
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ThrowStatement {
    pub(crate) value: Expression,
    pub(crate) range: Range,
}

impl ThrowStatement {
    #[inline]
    pub fn value(&self) -> &Expression {
        &self.value
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct TryStatement {
    pub(crate) body_statements: Vec<Statement>,
    pub(crate) catch_variable: Option<IdentifierExpression>,
    pub(crate) catch_statements: Option<Vec<Statement>>,
    pub(crate) finally_statements: Option<Vec<Statement>>,
    pub(crate) range: Range,
}

impl TryStatement {
    #[inline]
    pub fn body_statements(&self) -> &[Statement] {
        &self.body_statements
    }

    #[inline]
    pub fn catch_variable(&self) -> Option<&IdentifierExpression> {
        self.catch_variable.as_ref()
    }

    #[inline]
    pub fn catch_statements(&self) -> Option<&[Statement]> {
        self.catch_statements.as_deref()
    }

    #[inline]
    pub fn finally_statements(&self) -> Option<&[Statement]> {
        self.finally_statements.as_deref()
    }
}

/// A `var`, `let` or `const` statement wrapping its declarations.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct VariableStatement {
    pub(crate) decorators: Option<Vec<Decorator>>,
    pub(crate) declarations: Vec<VariableDeclaration>,
    pub(crate) range: Range,
}

impl VariableStatement {
    #[inline]
    pub fn decorators(&self) -> Option<&[Decorator]> {
        self.decorators.as_deref()
    }

    #[inline]
    pub fn declarations(&self) -> &[VariableDeclaration] {
        &self.declarations
    }
}

/// A `void expr;` statement dropping the expression's value.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct VoidStatement {
    pub(crate) expression: Expression,
    pub(crate) range: Range,
}

impl VoidStatement {
    #[inline]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct WhileStatement {
    pub(crate) condition: Expression,
    pub(crate) body: Box<Statement>,
    pub(crate) range: Range,
}

impl WhileStatement {
    #[inline]
    pub fn condition(&self) -> &Expression {
        &self.condition
    }

    #[inline]
    pub fn body(&self) -> &Statement {
        &self.body
    }
}

/// A statement node, including declaration statements.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Block(BlockStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Do(DoStatement),
    Empty(EmptyStatement),
    Export(ExportStatement),
    ExportDefault(ExportDefaultStatement),
    ExportImport(ExportImportStatement),
    Expression(ExpressionStatement),
    For(ForStatement),
    ForOf(ForOfStatement),
    If(IfStatement),
    Import(ImportStatement),
    Return(ReturnStatement),
    Switch(SwitchStatement),
    Throw(ThrowStatement),
    Try(TryStatement),
    Variable(VariableStatement),
    Void(VoidStatement),
    While(WhileStatement),
    Module(ModuleDeclaration),

    // Declarations
    Class(Box<ClassDeclaration>),
    Interface(Box<ClassDeclaration>),
    Enum(Box<EnumDeclaration>),
    Field(Box<FieldDeclaration>),
    Function(Box<FunctionDeclaration>),
    Method(Box<FunctionDeclaration>),
    Namespace(Box<NamespaceDeclaration>),
    TypeAlias(Box<TypeDeclaration>),
}

/// Internal path of an import or export path literal, resolved against the
/// importing source.
///
/// Relative paths are resolved against `origin`; all other paths are
/// library paths and get the library prefix if it is missing.
fn module_path(path: &str, origin: &Source) -> String {
    let normalized = normalize_path(path);
    if path.starts_with('.') {
        resolve_path(&normalized, origin.internal_path())
    } else if normalized.starts_with(LIBRARY_PREFIX) {
        normalized
    } else {
        let mut prefixed = String::with_capacity(LIBRARY_PREFIX.len() + normalized.len());
        prefixed.push_str(LIBRARY_PREFIX);
        prefixed.push_str(&normalized);
        prefixed
    }
}

// Factories
impl Statement {
    pub fn new_block(statements: Vec<Statement>, range: Range) -> Self {
        Statement::Block(BlockStatement { statements, range })
    }

    pub fn new_break(label: Option<IdentifierExpression>, range: Range) -> Self {
        Statement::Break(BreakStatement { label, range })
    }

    pub fn new_continue(label: Option<IdentifierExpression>, range: Range) -> Self {
        Statement::Continue(ContinueStatement { label, range })
    }

    pub fn new_do(body: Statement, condition: Expression, range: Range) -> Self {
        Statement::Do(DoStatement {
            body: Box::new(body),
            condition,
            range,
        })
    }

    pub fn new_empty(range: Range) -> Self {
        Statement::Empty(EmptyStatement { range })
    }

    /// Creates an `export` statement.
    ///
    /// `origin` is the source containing the statement; it anchors relative
    /// re-export paths.
    pub fn new_export(
        members: Option<Vec<ExportMember>>,
        path: Option<StringLiteralExpression>,
        is_declare: bool,
        origin: &Source,
        range: Range,
    ) -> Self {
        debug_assert_eq!(origin.id(), range.source);
        let internal_path = path.as_ref().map(|path| module_path(&path.value, origin));
        Statement::Export(ExportStatement {
            members,
            path,
            is_declare,
            internal_path,
            range,
        })
    }

    pub fn new_export_default(declaration: Statement, range: Range) -> Self {
        debug_assert!(declaration.as_declaration().is_some());
        Statement::ExportDefault(ExportDefaultStatement {
            declaration: Box::new(declaration),
            range,
        })
    }

    pub fn new_export_import(
        name: IdentifierExpression,
        external_name: IdentifierExpression,
        range: Range,
    ) -> Self {
        Statement::ExportImport(ExportImportStatement {
            name,
            external_name,
            range,
        })
    }

    pub fn new_expression(expression: Expression) -> Self {
        Statement::Expression(ExpressionStatement { expression })
    }

    pub fn new_for(
        initializer: Option<Statement>,
        condition: Option<Expression>,
        incrementor: Option<Expression>,
        body: Statement,
        range: Range,
    ) -> Self {
        Statement::For(ForStatement {
            initializer: initializer.map(Box::new),
            condition,
            incrementor,
            body: Box::new(body),
            range,
        })
    }

    pub fn new_for_of(
        variable: Statement,
        iterable: Expression,
        body: Statement,
        range: Range,
    ) -> Self {
        Statement::ForOf(ForOfStatement {
            variable: Box::new(variable),
            iterable,
            body: Box::new(body),
            range,
        })
    }

    pub fn new_if(
        condition: Expression,
        if_true: Statement,
        if_false: Option<Statement>,
        range: Range,
    ) -> Self {
        Statement::If(IfStatement {
            condition,
            if_true: Box::new(if_true),
            if_false: if_false.map(Box::new),
            range,
        })
    }

    /// Creates an `import { ... } from "path"` statement.
    pub fn new_import(
        declarations: Option<Vec<ImportDeclaration>>,
        path: StringLiteralExpression,
        origin: &Source,
        range: Range,
    ) -> Self {
        Statement::new_import_impl(declarations, None, path, origin, range)
    }

    /// Creates an `import * as namespace_name from "path"` statement.
    pub fn new_wildcard_import(
        namespace_name: IdentifierExpression,
        path: StringLiteralExpression,
        origin: &Source,
        range: Range,
    ) -> Self {
        Statement::new_import_impl(None, Some(namespace_name), path, origin, range)
    }

    fn new_import_impl(
        declarations: Option<Vec<ImportDeclaration>>,
        namespace_name: Option<IdentifierExpression>,
        path: StringLiteralExpression,
        origin: &Source,
        range: Range,
    ) -> Self {
        debug_assert_eq!(origin.id(), range.source);
        let internal_path = mangle_internal_path(&module_path(&path.value, origin));
        Statement::Import(ImportStatement {
            declarations,
            namespace_name,
            path,
            internal_path,
            range,
        })
    }

    pub fn new_module(module_name: impl Into<String>, flags: CommonFlags, range: Range) -> Self {
        Statement::Module(ModuleDeclaration {
            module_name: module_name.into(),
            flags,
            range,
        })
    }

    pub fn new_return(value: Option<Expression>, range: Range) -> Self {
        Statement::Return(ReturnStatement { value, range })
    }

    pub fn new_switch(condition: Expression, cases: Vec<SwitchCase>, range: Range) -> Self {
        Statement::Switch(SwitchStatement {
            condition,
            cases,
            range,
        })
    }

    pub fn new_throw(value: Expression, range: Range) -> Self {
        Statement::Throw(ThrowStatement { value, range })
    }

    pub fn new_try(
        body_statements: Vec<Statement>,
        catch_variable: Option<IdentifierExpression>,
        catch_statements: Option<Vec<Statement>>,
        finally_statements: Option<Vec<Statement>>,
        range: Range,
    ) -> Self {
        Statement::Try(TryStatement {
            body_statements,
            catch_variable,
            catch_statements,
            finally_statements,
            range,
        })
    }

    pub fn new_variable(
        decorators: Option<Vec<Decorator>>,
        declarations: Vec<VariableDeclaration>,
        range: Range,
    ) -> Self {
        Statement::Variable(VariableStatement {
            decorators,
            declarations,
            range,
        })
    }

    pub fn new_void(expression: Expression, range: Range) -> Self {
        Statement::Void(VoidStatement { expression, range })
    }

    pub fn new_while(condition: Expression, body: Statement, range: Range) -> Self {
        Statement::While(WhileStatement {
            condition,
            body: Box::new(body),
            range,
        })
    }
}

// Queries
impl Statement {
    /// Whether this is an empty statement.
    pub fn is_empty(&self) -> bool {
        matches!(self, Statement::Empty(_))
    }

    /// The declaration, if this is a declaration statement.
    pub fn as_declaration(&self) -> Option<&dyn Declaration> {
        match self {
            Statement::Class(decl) | Statement::Interface(decl) => Some(&**decl),
            Statement::Enum(decl) => Some(&**decl),
            Statement::Field(decl) => Some(&**decl),
            Statement::Function(decl) | Statement::Method(decl) => Some(&**decl),
            Statement::Namespace(decl) => Some(&**decl),
            Statement::TypeAlias(decl) => Some(&**decl),
            _ => None,
        }
    }

    pub fn as_declaration_mut(&mut self) -> Option<&mut dyn Declaration> {
        match self {
            Statement::Class(decl) | Statement::Interface(decl) => Some(&mut **decl),
            Statement::Enum(decl) => Some(&mut **decl),
            Statement::Field(decl) => Some(&mut **decl),
            Statement::Function(decl) | Statement::Method(decl) => Some(&mut **decl),
            Statement::Namespace(decl) => Some(&mut **decl),
            Statement::TypeAlias(decl) => Some(&mut **decl),
            _ => None,
        }
    }
}

impl From<ClassDeclaration> for Statement {
    fn from(decl: ClassDeclaration) -> Self {
        if decl.is_interface() {
            Statement::Interface(Box::new(decl))
        } else {
            Statement::Class(Box::new(decl))
        }
    }
}

impl From<FunctionDeclaration> for Statement {
    fn from(decl: FunctionDeclaration) -> Self {
        if decl.is_method() {
            Statement::Method(Box::new(decl))
        } else {
            Statement::Function(Box::new(decl))
        }
    }
}

impl From<EnumDeclaration> for Statement {
    fn from(decl: EnumDeclaration) -> Self {
        Statement::Enum(Box::new(decl))
    }
}

impl From<FieldDeclaration> for Statement {
    fn from(decl: FieldDeclaration) -> Self {
        Statement::Field(Box::new(decl))
    }
}

impl From<NamespaceDeclaration> for Statement {
    fn from(decl: NamespaceDeclaration) -> Self {
        Statement::Namespace(Box::new(decl))
    }
}

impl From<TypeDeclaration> for Statement {
    fn from(decl: TypeDeclaration) -> Self {
        Statement::TypeAlias(Box::new(decl))
    }
}

impl Node for Statement {
    fn kind(&self) -> NodeKind {
        match self {
            Statement::Block(_) => NodeKind::Block,
            Statement::Break(_) => NodeKind::Break,
            Statement::Continue(_) => NodeKind::Continue,
            Statement::Do(_) => NodeKind::Do,
            Statement::Empty(_) => NodeKind::Empty,
            Statement::Export(_) => NodeKind::Export,
            Statement::ExportDefault(_) => NodeKind::ExportDefault,
            Statement::ExportImport(_) => NodeKind::ExportImport,
            Statement::Expression(_) => NodeKind::Expression,
            Statement::For(_) => NodeKind::For,
            Statement::ForOf(_) => NodeKind::ForOf,
            Statement::If(_) => NodeKind::If,
            Statement::Import(_) => NodeKind::Import,
            Statement::Return(_) => NodeKind::Return,
            Statement::Switch(_) => NodeKind::Switch,
            Statement::Throw(_) => NodeKind::Throw,
            Statement::Try(_) => NodeKind::Try,
            Statement::Variable(_) => NodeKind::Variable,
            Statement::Void(_) => NodeKind::Void,
            Statement::While(_) => NodeKind::While,
            Statement::Module(_) => NodeKind::Module,
            Statement::Class(decl) | Statement::Interface(decl) => decl.kind(),
            Statement::Function(decl) | Statement::Method(decl) => decl.kind(),
            Statement::Enum(_) => NodeKind::EnumDeclaration,
            Statement::Field(_) => NodeKind::FieldDeclaration,
            Statement::Namespace(_) => NodeKind::NamespaceDeclaration,
            Statement::TypeAlias(_) => NodeKind::TypeDeclaration,
        }
    }

    fn range(&self) -> Range {
        match self {
            Statement::Block(node) => node.range,
            Statement::Break(node) => node.range,
            Statement::Continue(node) => node.range,
            Statement::Do(node) => node.range,
            Statement::Empty(node) => node.range,
            Statement::Export(node) => node.range,
            Statement::ExportDefault(node) => node.range,
            Statement::ExportImport(node) => node.range,
            Statement::Expression(node) => node.expression.range(),
            Statement::For(node) => node.range,
            Statement::ForOf(node) => node.range,
            Statement::If(node) => node.range,
            Statement::Import(node) => node.range,
            Statement::Return(node) => node.range,
            Statement::Switch(node) => node.range,
            Statement::Throw(node) => node.range,
            Statement::Try(node) => node.range,
            Statement::Variable(node) => node.range,
            Statement::Void(node) => node.range,
            Statement::While(node) => node.range,
            Statement::Module(node) => node.range,
            Statement::Class(decl) | Statement::Interface(decl) => decl.range,
            Statement::Function(decl) | Statement::Method(decl) => decl.range,
            Statement::Enum(decl) => decl.range,
            Statement::Field(decl) => decl.range,
            Statement::Namespace(decl) => decl.range,
            Statement::TypeAlias(decl) => decl.range,
        }
    }
}

impl_node! {
    BlockStatement => Block,
    BreakStatement => Break,
    ContinueStatement => Continue,
    DoStatement => Do,
    EmptyStatement => Empty,
    ExportMember => ExportMember,
    ExportStatement => Export,
    ExportDefaultStatement => ExportDefault,
    ExportImportStatement => ExportImport,
    ForStatement => For,
    ForOfStatement => ForOf,
    IfStatement => If,
    ImportStatement => Import,
    ModuleDeclaration => Module,
    ReturnStatement => Return,
    SwitchCase => SwitchCase,
    SwitchStatement => Switch,
    ThrowStatement => Throw,
    TryStatement => Try,
    VariableStatement => Variable,
    VoidStatement => Void,
    WhileStatement => While,
}
