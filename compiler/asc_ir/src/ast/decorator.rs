//! Decorators.

use super::{impl_node, Expression};
use crate::Range;

/// Built-in decorator kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DecoratorKind {
    /// Any decorator that is not built in.
    #[default]
    Custom,
    Global,
    Operator,
    OperatorBinary,
    OperatorPrefix,
    OperatorPostfix,
    Unmanaged,
    Final,
    Inline,
    External,
    ExternalJs,
    Builtin,
    Lazy,
    Unsafe,
}

impl DecoratorKind {
    /// Kind of the decorator named by `name`.
    ///
    /// Recognizes bare identifiers (`@inline`) and two-part names
    /// (`@operator.binary`); everything else is [`DecoratorKind::Custom`].
    pub fn from_node(name: &Expression) -> DecoratorKind {
        match name {
            Expression::Identifier(identifier) => match identifier.text.as_str() {
                "builtin" => DecoratorKind::Builtin,
                "external" => DecoratorKind::External,
                "final" => DecoratorKind::Final,
                "global" => DecoratorKind::Global,
                "inline" => DecoratorKind::Inline,
                "lazy" => DecoratorKind::Lazy,
                "operator" => DecoratorKind::Operator,
                "unmanaged" => DecoratorKind::Unmanaged,
                "unsafe" => DecoratorKind::Unsafe,
                _ => DecoratorKind::Custom,
            },
            Expression::PropertyAccess(access) => {
                let Expression::Identifier(target) = access.expression.as_ref() else {
                    return DecoratorKind::Custom;
                };
                match (target.text.as_str(), access.property.text.as_str()) {
                    ("operator", "binary") => DecoratorKind::OperatorBinary,
                    ("operator", "prefix") => DecoratorKind::OperatorPrefix,
                    ("operator", "postfix") => DecoratorKind::OperatorPostfix,
                    ("external", "js") => DecoratorKind::ExternalJs,
                    _ => DecoratorKind::Custom,
                }
            }
            _ => DecoratorKind::Custom,
        }
    }
}

/// A decorator, e.g. `@operator("+")`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Decorator {
    pub(crate) decorator_kind: DecoratorKind,
    pub(crate) name: Expression,
    pub(crate) args: Option<Vec<Expression>>,
    pub(crate) range: Range,
}

impl Decorator {
    /// Creates a decorator, resolving its kind from `name`.
    pub fn new(name: Expression, args: Option<Vec<Expression>>, range: Range) -> Self {
        Decorator {
            decorator_kind: DecoratorKind::from_node(&name),
            name,
            args,
            range,
        }
    }

    #[inline]
    pub fn decorator_kind(&self) -> DecoratorKind {
        self.decorator_kind
    }

    #[inline]
    pub fn name(&self) -> &Expression {
        &self.name
    }

    #[inline]
    pub fn args(&self) -> Option<&[Expression]> {
        self.args.as_deref()
    }
}

impl_node! {
    Decorator => Decorator,
}

/// First decorator of the given kind.
pub fn find_decorator(kind: DecoratorKind, decorators: Option<&[Decorator]>) -> Option<&Decorator> {
    decorators?
        .iter()
        .find(|decorator| decorator.decorator_kind == kind)
}
