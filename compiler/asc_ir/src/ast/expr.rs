//! Expression nodes.

use super::{
    impl_node, ClassDeclaration, FunctionDeclaration, LiteralKind, Node, NodeKind, TypeName,
    TypeNode,
};
use crate::{Range, RangeError, Token};

/// An identifier, e.g. `foo` or a quoted property name.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct IdentifierExpression {
    pub(crate) text: String,
    pub(crate) is_quoted: bool,
    pub(crate) range: Range,
}

impl IdentifierExpression {
    pub fn new(text: impl Into<String>, is_quoted: bool, range: Range) -> Self {
        IdentifierExpression {
            text: text.into(),
            is_quoted,
            range,
        }
    }

    /// Placeholder identifier with empty text.
    pub fn new_empty(range: Range) -> Self {
        IdentifierExpression::new(String::new(), false, range)
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_quoted(&self) -> bool {
        self.is_quoted
    }
}

/// A keyword-like singleton: `this`, `super`, `true`, `false`, `null`
/// or `constructor`. The kind is given by the [`Expression`] variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct KeywordExpression {
    pub(crate) range: Range,
}

/// An omitted expression, e.g. a hole in an array literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct OmittedExpression {
    pub(crate) range: Range,
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct FloatLiteralExpression {
    pub(crate) value: f64,
    pub(crate) range: Range,
}

impl FloatLiteralExpression {
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Integer literal. Values beyond `i64::MAX` keep their two's complement bits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct IntegerLiteralExpression {
    pub(crate) value: i64,
    pub(crate) range: Range,
}

impl IntegerLiteralExpression {
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct StringLiteralExpression {
    pub(crate) value: String,
    pub(crate) range: Range,
}

impl StringLiteralExpression {
    pub fn new(value: impl Into<String>, range: Range) -> Self {
        StringLiteralExpression {
            value: value.into(),
            range,
        }
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Template literal, optionally tagged: ``tag`a${b}c` ``.
///
/// `parts` holds the cooked string parts and `raw_parts` their raw source
/// text; there is one more part than there are `expressions`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct TemplateLiteralExpression {
    pub(crate) tag: Option<Box<Expression>>,
    pub(crate) parts: Vec<String>,
    pub(crate) raw_parts: Vec<String>,
    pub(crate) expressions: Vec<Expression>,
    pub(crate) range: Range,
}

impl TemplateLiteralExpression {
    #[inline]
    pub fn tag(&self) -> Option<&Expression> {
        self.tag.as_deref()
    }

    #[inline]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    #[inline]
    pub fn raw_parts(&self) -> &[String] {
        &self.raw_parts
    }

    #[inline]
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct RegexpLiteralExpression {
    pub(crate) pattern: String,
    pub(crate) pattern_flags: String,
    pub(crate) range: Range,
}

impl RegexpLiteralExpression {
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    pub fn pattern_flags(&self) -> &str {
        &self.pattern_flags
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ArrayLiteralExpression {
    pub(crate) element_expressions: Vec<Expression>,
    pub(crate) range: Range,
}

impl ArrayLiteralExpression {
    #[inline]
    pub fn element_expressions(&self) -> &[Expression] {
        &self.element_expressions
    }
}

/// Object literal; `names[i]` maps to `values[i]`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ObjectLiteralExpression {
    pub(crate) names: Vec<IdentifierExpression>,
    pub(crate) values: Vec<Expression>,
    pub(crate) range: Range,
}

impl ObjectLiteralExpression {
    #[inline]
    pub fn names(&self) -> &[IdentifierExpression] {
        &self.names
    }

    #[inline]
    pub fn values(&self) -> &[Expression] {
        &self.values
    }
}

/// Kind of a type assertion.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssertionKind {
    /// `<T>expr`
    Prefix,
    /// `expr as T`
    As,
    /// `expr!`
    NonNull,
    /// `expr as const`
    Const,
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct AssertionExpression {
    pub(crate) assertion_kind: AssertionKind,
    pub(crate) expression: Box<Expression>,
    /// Target type, absent for non-null and const assertions.
    pub(crate) to_type: Option<TypeNode>,
    pub(crate) range: Range,
}

impl AssertionExpression {
    #[inline]
    pub fn assertion_kind(&self) -> AssertionKind {
        self.assertion_kind
    }

    #[inline]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    #[inline]
    pub fn to_type(&self) -> Option<&TypeNode> {
        self.to_type.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct BinaryExpression {
    pub(crate) operator: Token,
    pub(crate) left: Box<Expression>,
    pub(crate) right: Box<Expression>,
    pub(crate) range: Range,
}

impl BinaryExpression {
    #[inline]
    pub fn operator(&self) -> Token {
        self.operator
    }

    #[inline]
    pub fn left(&self) -> &Expression {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &Expression {
        &self.right
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct CallExpression {
    pub(crate) expression: Box<Expression>,
    pub(crate) type_arguments: Option<Vec<TypeNode>>,
    pub(crate) args: Vec<Expression>,
    pub(crate) range: Range,
}

impl CallExpression {
    /// Range covering the type arguments, or the callee if there are none.
    pub fn type_arguments_range(&self) -> Result<Range, RangeError> {
        match self.type_arguments.as_deref() {
            Some([first, .., last]) => first.range().join(last.range()),
            Some([only]) => Ok(only.range()),
            _ => Ok(self.expression.range()),
        }
    }

    /// Range covering the arguments, or the callee if there are none.
    pub fn arguments_range(&self) -> Result<Range, RangeError> {
        match self.args.as_slice() {
            [first, .., last] => first.range().join(last.range()),
            [only] => Ok(only.range()),
            [] => Ok(self.expression.range()),
        }
    }

    #[inline]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    #[inline]
    pub fn type_arguments(&self) -> Option<&[TypeNode]> {
        self.type_arguments.as_deref()
    }

    #[inline]
    pub fn args(&self) -> &[Expression] {
        &self.args
    }
}

/// A `class` used as an expression.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ClassExpression {
    pub(crate) declaration: Box<ClassDeclaration>,
}

impl ClassExpression {
    #[inline]
    pub fn declaration(&self) -> &ClassDeclaration {
        &self.declaration
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct CommaExpression {
    pub(crate) expressions: Vec<Expression>,
    pub(crate) range: Range,
}

impl CommaExpression {
    #[inline]
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ElementAccessExpression {
    pub(crate) expression: Box<Expression>,
    pub(crate) element_expression: Box<Expression>,
    pub(crate) range: Range,
}

impl ElementAccessExpression {
    #[inline]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    #[inline]
    pub fn element_expression(&self) -> &Expression {
        &self.element_expression
    }
}

/// A `function` or arrow function used as an expression.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct FunctionExpression {
    pub(crate) declaration: Box<FunctionDeclaration>,
}

impl FunctionExpression {
    #[inline]
    pub fn declaration(&self) -> &FunctionDeclaration {
        &self.declaration
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct InstanceOfExpression {
    pub(crate) expression: Box<Expression>,
    pub(crate) is_type: TypeNode,
    pub(crate) range: Range,
}

impl InstanceOfExpression {
    #[inline]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    #[inline]
    pub fn is_type(&self) -> &TypeNode {
        &self.is_type
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NewExpression {
    pub(crate) type_name: TypeName,
    pub(crate) type_arguments: Option<Vec<TypeNode>>,
    pub(crate) args: Vec<Expression>,
    pub(crate) range: Range,
}

impl NewExpression {
    /// Range covering the type arguments, or the type name if there are none.
    pub fn type_arguments_range(&self) -> Result<Range, RangeError> {
        match self.type_arguments.as_deref() {
            Some([first, .., last]) => first.range().join(last.range()),
            Some([only]) => Ok(only.range()),
            _ => Ok(self.type_name.range),
        }
    }

    /// Range covering the arguments, or the type name if there are none.
    pub fn arguments_range(&self) -> Result<Range, RangeError> {
        match self.args.as_slice() {
            [first, .., last] => first.range().join(last.range()),
            [only] => Ok(only.range()),
            [] => Ok(self.type_name.range),
        }
    }

    #[inline]
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    #[inline]
    pub fn type_arguments(&self) -> Option<&[TypeNode]> {
        self.type_arguments.as_deref()
    }

    #[inline]
    pub fn args(&self) -> &[Expression] {
        &self.args
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ParenthesizedExpression {
    pub(crate) expression: Box<Expression>,
    pub(crate) range: Range,
}

impl ParenthesizedExpression {
    #[inline]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct PropertyAccessExpression {
    pub(crate) expression: Box<Expression>,
    pub(crate) property: IdentifierExpression,
    pub(crate) range: Range,
}

impl PropertyAccessExpression {
    #[inline]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    #[inline]
    pub fn property(&self) -> &IdentifierExpression {
        &self.property
    }
}

/// Short if notation: `condition ? if_then : if_else`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct TernaryExpression {
    pub(crate) condition: Box<Expression>,
    pub(crate) if_then: Box<Expression>,
    pub(crate) if_else: Box<Expression>,
    pub(crate) range: Range,
}

impl TernaryExpression {
    #[inline]
    pub fn condition(&self) -> &Expression {
        &self.condition
    }

    #[inline]
    pub fn if_then(&self) -> &Expression {
        &self.if_then
    }

    #[inline]
    pub fn if_else(&self) -> &Expression {
        &self.if_else
    }
}

/// Prefix or postfix unary operation. The fixity is given by the
/// [`Expression`] variant.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UnaryExpression {
    pub(crate) operator: Token,
    pub(crate) operand: Box<Expression>,
    pub(crate) range: Range,
}

impl UnaryExpression {
    #[inline]
    pub fn operator(&self) -> Token {
        self.operator
    }

    #[inline]
    pub fn operand(&self) -> &Expression {
        &self.operand
    }
}

/// Opaque reference into the code generator's expression and type tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompiledHandle {
    pub expr: u32,
    pub ty: u32,
}

/// A pre-compiled expression. Side effects of the referenced expression
/// are the creator's responsibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct CompiledExpression {
    pub(crate) handle: CompiledHandle,
    pub(crate) range: Range,
}

impl CompiledExpression {
    #[inline]
    pub fn handle(&self) -> CompiledHandle {
        self.handle
    }

    /// Points this expression at another compiled expression.
    pub fn set_handle(&mut self, handle: CompiledHandle) {
        self.handle = handle;
    }
}

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Identifier(IdentifierExpression),
    FloatLiteral(FloatLiteralExpression),
    IntegerLiteral(IntegerLiteralExpression),
    StringLiteral(StringLiteralExpression),
    TemplateLiteral(TemplateLiteralExpression),
    RegexpLiteral(RegexpLiteralExpression),
    ArrayLiteral(ArrayLiteralExpression),
    ObjectLiteral(ObjectLiteralExpression),
    Assertion(AssertionExpression),
    Binary(BinaryExpression),
    Call(CallExpression),
    Class(ClassExpression),
    Comma(CommaExpression),
    ElementAccess(ElementAccessExpression),
    Function(FunctionExpression),
    InstanceOf(InstanceOfExpression),
    New(NewExpression),
    Omitted(OmittedExpression),
    Parenthesized(ParenthesizedExpression),
    PropertyAccess(PropertyAccessExpression),
    Ternary(TernaryExpression),
    UnaryPostfix(UnaryExpression),
    UnaryPrefix(UnaryExpression),
    This(KeywordExpression),
    Super(KeywordExpression),
    True(KeywordExpression),
    False(KeywordExpression),
    Null(KeywordExpression),
    Constructor(KeywordExpression),
    Compiled(CompiledExpression),
}

// Factories
impl Expression {
    pub fn new_identifier(text: impl Into<String>, range: Range, is_quoted: bool) -> Self {
        Expression::Identifier(IdentifierExpression::new(text, is_quoted, range))
    }

    pub fn new_empty_identifier(range: Range) -> Self {
        Expression::Identifier(IdentifierExpression::new_empty(range))
    }

    pub fn new_array_literal(element_expressions: Vec<Expression>, range: Range) -> Self {
        Expression::ArrayLiteral(ArrayLiteralExpression {
            element_expressions,
            range,
        })
    }

    pub fn new_assertion(
        assertion_kind: AssertionKind,
        expression: Expression,
        to_type: Option<TypeNode>,
        range: Range,
    ) -> Self {
        Expression::Assertion(AssertionExpression {
            assertion_kind,
            expression: Box::new(expression),
            to_type,
            range,
        })
    }

    pub fn new_binary(operator: Token, left: Expression, right: Expression, range: Range) -> Self {
        Expression::Binary(BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            range,
        })
    }

    pub fn new_call(
        expression: Expression,
        type_arguments: Option<Vec<TypeNode>>,
        args: Vec<Expression>,
        range: Range,
    ) -> Self {
        Expression::Call(CallExpression {
            expression: Box::new(expression),
            type_arguments,
            args,
            range,
        })
    }

    pub fn new_class(declaration: ClassDeclaration) -> Self {
        Expression::Class(ClassExpression {
            declaration: Box::new(declaration),
        })
    }

    pub fn new_comma(expressions: Vec<Expression>, range: Range) -> Self {
        Expression::Comma(CommaExpression { expressions, range })
    }

    pub fn new_constructor(range: Range) -> Self {
        Expression::Constructor(KeywordExpression { range })
    }

    pub fn new_element_access(
        expression: Expression,
        element_expression: Expression,
        range: Range,
    ) -> Self {
        Expression::ElementAccess(ElementAccessExpression {
            expression: Box::new(expression),
            element_expression: Box::new(element_expression),
            range,
        })
    }

    pub fn new_false(range: Range) -> Self {
        Expression::False(KeywordExpression { range })
    }

    pub fn new_float_literal(value: f64, range: Range) -> Self {
        Expression::FloatLiteral(FloatLiteralExpression { value, range })
    }

    pub fn new_function(declaration: FunctionDeclaration) -> Self {
        Expression::Function(FunctionExpression {
            declaration: Box::new(declaration),
        })
    }

    pub fn new_instance_of(expression: Expression, is_type: TypeNode, range: Range) -> Self {
        Expression::InstanceOf(InstanceOfExpression {
            expression: Box::new(expression),
            is_type,
            range,
        })
    }

    pub fn new_integer_literal(value: i64, range: Range) -> Self {
        Expression::IntegerLiteral(IntegerLiteralExpression { value, range })
    }

    /// Creates a `new` expression.
    pub fn new_new(
        type_name: TypeName,
        type_arguments: Option<Vec<TypeNode>>,
        args: Vec<Expression>,
        range: Range,
    ) -> Self {
        Expression::New(NewExpression {
            type_name,
            type_arguments,
            args,
            range,
        })
    }

    pub fn new_null(range: Range) -> Self {
        Expression::Null(KeywordExpression { range })
    }

    pub fn new_object_literal(
        names: Vec<IdentifierExpression>,
        values: Vec<Expression>,
        range: Range,
    ) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Expression::ObjectLiteral(ObjectLiteralExpression {
            names,
            values,
            range,
        })
    }

    pub fn new_omitted(range: Range) -> Self {
        Expression::Omitted(OmittedExpression { range })
    }

    pub fn new_parenthesized(expression: Expression, range: Range) -> Self {
        Expression::Parenthesized(ParenthesizedExpression {
            expression: Box::new(expression),
            range,
        })
    }

    pub fn new_property_access(
        expression: Expression,
        property: IdentifierExpression,
        range: Range,
    ) -> Self {
        Expression::PropertyAccess(PropertyAccessExpression {
            expression: Box::new(expression),
            property,
            range,
        })
    }

    pub fn new_regexp_literal(
        pattern: impl Into<String>,
        pattern_flags: impl Into<String>,
        range: Range,
    ) -> Self {
        Expression::RegexpLiteral(RegexpLiteralExpression {
            pattern: pattern.into(),
            pattern_flags: pattern_flags.into(),
            range,
        })
    }

    pub fn new_ternary(
        condition: Expression,
        if_then: Expression,
        if_else: Expression,
        range: Range,
    ) -> Self {
        Expression::Ternary(TernaryExpression {
            condition: Box::new(condition),
            if_then: Box::new(if_then),
            if_else: Box::new(if_else),
            range,
        })
    }

    pub fn new_string_literal(value: impl Into<String>, range: Range) -> Self {
        Expression::StringLiteral(StringLiteralExpression::new(value, range))
    }

    pub fn new_super(range: Range) -> Self {
        Expression::Super(KeywordExpression { range })
    }

    pub fn new_template_literal(
        tag: Option<Expression>,
        parts: Vec<String>,
        raw_parts: Vec<String>,
        expressions: Vec<Expression>,
        range: Range,
    ) -> Self {
        debug_assert_eq!(parts.len(), raw_parts.len());
        Expression::TemplateLiteral(TemplateLiteralExpression {
            tag: tag.map(Box::new),
            parts,
            raw_parts,
            expressions,
            range,
        })
    }

    pub fn new_this(range: Range) -> Self {
        Expression::This(KeywordExpression { range })
    }

    pub fn new_true(range: Range) -> Self {
        Expression::True(KeywordExpression { range })
    }

    pub fn new_unary_postfix(operator: Token, operand: Expression, range: Range) -> Self {
        Expression::UnaryPostfix(UnaryExpression {
            operator,
            operand: Box::new(operand),
            range,
        })
    }

    pub fn new_unary_prefix(operator: Token, operand: Expression, range: Range) -> Self {
        Expression::UnaryPrefix(UnaryExpression {
            operator,
            operand: Box::new(operand),
            range,
        })
    }

    pub fn new_compiled(handle: CompiledHandle, range: Range) -> Self {
        Expression::Compiled(CompiledExpression { handle, range })
    }
}

// Queries
impl Expression {
    /// Literal kind, if this is a literal.
    pub fn literal_kind(&self) -> Option<LiteralKind> {
        let kind = match self {
            Expression::FloatLiteral(_) => LiteralKind::Float,
            Expression::IntegerLiteral(_) => LiteralKind::Integer,
            Expression::StringLiteral(_) => LiteralKind::String,
            Expression::TemplateLiteral(_) => LiteralKind::Template,
            Expression::RegexpLiteral(_) => LiteralKind::RegExp,
            Expression::ArrayLiteral(_) => LiteralKind::Array,
            Expression::ObjectLiteral(_) => LiteralKind::Object,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether this is a literal of the given kind.
    pub fn is_literal_kind(&self, literal_kind: LiteralKind) -> bool {
        self.literal_kind() == Some(literal_kind)
    }

    /// Whether this is a float or integer literal.
    pub fn is_numeric_literal(&self) -> bool {
        matches!(
            self,
            Expression::FloatLiteral(_) | Expression::IntegerLiteral(_)
        )
    }

    /// Whether this is guaranteed to compile to a constant value.
    pub fn compiles_to_const(&self) -> bool {
        matches!(
            self,
            Expression::FloatLiteral(_)
                | Expression::IntegerLiteral(_)
                | Expression::StringLiteral(_)
                | Expression::Null(_)
                | Expression::True(_)
                | Expression::False(_)
        )
    }

    /// Whether this accesses a property or method on `this`.
    pub fn is_access_on_this(&self) -> bool {
        self.is_access_on(NodeKind::This)
    }

    /// Whether this accesses a property or method on `super`.
    pub fn is_access_on_super(&self) -> bool {
        self.is_access_on(NodeKind::Super)
    }

    fn is_access_on(&self, kind: NodeKind) -> bool {
        let node = match self {
            Expression::Call(call) => call.expression.as_ref(),
            other => other,
        };
        matches!(node, Expression::PropertyAccess(access) if access.expression.kind() == kind)
    }

    /// Text of identifier-like expressions, including the keyword singletons.
    pub fn identifier_text(&self) -> Option<&str> {
        match self {
            Expression::Identifier(identifier) => Some(&identifier.text),
            Expression::This(_) => Some("this"),
            Expression::Super(_) => Some("super"),
            Expression::True(_) => Some("true"),
            Expression::False(_) => Some("false"),
            Expression::Null(_) => Some("null"),
            Expression::Constructor(_) => Some("constructor"),
            _ => None,
        }
    }
}

impl Node for Expression {
    fn kind(&self) -> NodeKind {
        match self {
            Expression::Identifier(_) => NodeKind::Identifier,
            Expression::FloatLiteral(_)
            | Expression::IntegerLiteral(_)
            | Expression::StringLiteral(_)
            | Expression::TemplateLiteral(_)
            | Expression::RegexpLiteral(_)
            | Expression::ArrayLiteral(_)
            | Expression::ObjectLiteral(_) => NodeKind::Literal,
            Expression::Assertion(_) => NodeKind::Assertion,
            Expression::Binary(_) => NodeKind::Binary,
            Expression::Call(_) => NodeKind::Call,
            Expression::Class(_) => NodeKind::Class,
            Expression::Comma(_) => NodeKind::Comma,
            Expression::ElementAccess(_) => NodeKind::ElementAccess,
            Expression::Function(_) => NodeKind::Function,
            Expression::InstanceOf(_) => NodeKind::InstanceOf,
            Expression::New(_) => NodeKind::New,
            Expression::Omitted(_) => NodeKind::Omitted,
            Expression::Parenthesized(_) => NodeKind::Parenthesized,
            Expression::PropertyAccess(_) => NodeKind::PropertyAccess,
            Expression::Ternary(_) => NodeKind::Ternary,
            Expression::UnaryPostfix(_) => NodeKind::UnaryPostfix,
            Expression::UnaryPrefix(_) => NodeKind::UnaryPrefix,
            Expression::This(_) => NodeKind::This,
            Expression::Super(_) => NodeKind::Super,
            Expression::True(_) => NodeKind::True,
            Expression::False(_) => NodeKind::False,
            Expression::Null(_) => NodeKind::Null,
            Expression::Constructor(_) => NodeKind::Constructor,
            Expression::Compiled(_) => NodeKind::Compiled,
        }
    }

    fn range(&self) -> Range {
        match self {
            Expression::Identifier(node) => node.range,
            Expression::FloatLiteral(node) => node.range,
            Expression::IntegerLiteral(node) => node.range,
            Expression::StringLiteral(node) => node.range,
            Expression::TemplateLiteral(node) => node.range,
            Expression::RegexpLiteral(node) => node.range,
            Expression::ArrayLiteral(node) => node.range,
            Expression::ObjectLiteral(node) => node.range,
            Expression::Assertion(node) => node.range,
            Expression::Binary(node) => node.range,
            Expression::Call(node) => node.range,
            Expression::Class(node) => node.declaration.range,
            Expression::Comma(node) => node.range,
            Expression::ElementAccess(node) => node.range,
            Expression::Function(node) => node.declaration.range,
            Expression::InstanceOf(node) => node.range,
            Expression::New(node) => node.range,
            Expression::Omitted(node) => node.range,
            Expression::Parenthesized(node) => node.range,
            Expression::PropertyAccess(node) => node.range,
            Expression::Ternary(node) => node.range,
            Expression::UnaryPostfix(node) | Expression::UnaryPrefix(node) => node.range,
            Expression::This(node)
            | Expression::Super(node)
            | Expression::True(node)
            | Expression::False(node)
            | Expression::Null(node)
            | Expression::Constructor(node) => node.range,
            Expression::Compiled(node) => node.range,
        }
    }
}

impl_node! {
    IdentifierExpression => Identifier,
    OmittedExpression => Omitted,
    AssertionExpression => Assertion,
    BinaryExpression => Binary,
    CallExpression => Call,
    CommaExpression => Comma,
    ElementAccessExpression => ElementAccess,
    InstanceOfExpression => InstanceOf,
    NewExpression => New,
    ParenthesizedExpression => Parenthesized,
    PropertyAccessExpression => PropertyAccess,
    TernaryExpression => Ternary,
    CompiledExpression => Compiled,
    FloatLiteralExpression => Literal,
    IntegerLiteralExpression => Literal,
    StringLiteralExpression => Literal,
    TemplateLiteralExpression => Literal,
    RegexpLiteralExpression => Literal,
    ArrayLiteralExpression => Literal,
    ObjectLiteralExpression => Literal,
}
