//! The value types a location path is made of: axes, node tests, steps,
//! paths and the predicate expression algebra.
//!
//! All of these are immutable value objects. They are built once (usually by
//! the parser) and evaluated repeatedly; they hold no references into any
//! tree. Step and path constructors validate their contracts up front, so
//! evaluation never has to.

use crate::error::PathError;
use std::fmt;

/// The thirteen XPath 1.0 axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Child,
    Descendant,
    Parent,
    Ancestor,
    FollowingSibling,
    PrecedingSibling,
    Following,
    Preceding,
    Attribute,
    Namespace,
    SelfAxis,
    DescendantOrSelf,
    AncestorOrSelf,
}

impl Axis {
    /// Whether this axis naturally enumerates in reverse document order
    /// (nearest node first). The collectors in [`crate::axes`] emit that
    /// order directly and the engine counts predicate positions along it;
    /// this flag is exposed so callers can query a step's direction without
    /// enumerating anything.
    pub fn is_reverse(self) -> bool {
        matches!(
            self,
            Axis::Ancestor | Axis::AncestorOrSelf | Axis::Preceding | Axis::PrecedingSibling
        )
    }

    /// Whether this axis selects attribute (or namespace) nodes and therefore
    /// requires an attribute node test.
    pub fn selects_attributes(self) -> bool {
        matches!(self, Axis::Attribute | Axis::Namespace)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Child => "child",
            Axis::Descendant => "descendant",
            Axis::Parent => "parent",
            Axis::Ancestor => "ancestor",
            Axis::FollowingSibling => "following-sibling",
            Axis::PrecedingSibling => "preceding-sibling",
            Axis::Following => "following",
            Axis::Preceding => "preceding",
            Axis::Attribute => "attribute",
            Axis::Namespace => "namespace",
            Axis::SelfAxis => "self",
            Axis::DescendantOrSelf => "descendant-or-self",
            Axis::AncestorOrSelf => "ancestor-or-self",
        };
        f.write_str(name)
    }
}

/// A test applied to nodes enumerated along an axis.
///
/// Name tests carry a resolved namespace URI (or `None` for "no namespace" /
/// "any namespace" depending on the variant docs below), never a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeTest {
    /// `node()` - matches every node.
    AnyNode,
    /// `*` - matches any element, regardless of name.
    AnyElement,
    /// A name test for elements. `namespace: None` matches elements with no
    /// namespace; a test cannot ask for "any namespace" (that is `AnyElement`).
    Element {
        namespace: Option<String>,
        local: String,
    },
    /// `text()`.
    Text,
    /// `comment()`.
    Comment,
    /// `processing-instruction()`, optionally with a target literal.
    ProcessingInstruction(Option<String>),
    /// `@*` - matches any attribute.
    AnyAttribute,
    /// A name test for attributes.
    Attr {
        namespace: Option<String>,
        local: String,
    },
}

impl NodeTest {
    /// Whether this test is drawn from the attribute-test variants, i.e. only
    /// valid on the `attribute`/`namespace` axes.
    pub fn is_attribute_test(&self) -> bool {
        matches!(self, NodeTest::AnyAttribute | NodeTest::Attr { .. })
    }
}

impl fmt::Display for NodeTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeTest::AnyNode => f.write_str("node()"),
            NodeTest::AnyElement => f.write_str("*"),
            NodeTest::Element { namespace, local } => match namespace {
                Some(ns) => write!(f, "{{{ns}}}{local}"),
                None => f.write_str(local),
            },
            NodeTest::Text => f.write_str("text()"),
            NodeTest::Comment => f.write_str("comment()"),
            NodeTest::ProcessingInstruction(None) => f.write_str("processing-instruction()"),
            NodeTest::ProcessingInstruction(Some(target)) => {
                write!(f, "processing-instruction('{target}')")
            }
            NodeTest::AnyAttribute => f.write_str("@*"),
            NodeTest::Attr { namespace, local } => match namespace {
                Some(ns) => write!(f, "@{{{ns}}}{local}"),
                None => write!(f, "@{local}"),
            },
        }
    }
}

/// A single step in a location path: axis, node test and predicates.
///
/// Built through [`Step::new`], which rejects axis/test kind mismatches at
/// construction time - an `attribute::`/`namespace::` step must use an
/// attribute test, and no other axis may.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    axis: Axis,
    test: NodeTest,
    predicates: Vec<Expression>,
}

impl Step {
    pub fn new(
        axis: Axis,
        test: NodeTest,
        predicates: Vec<Expression>,
    ) -> Result<Self, PathError> {
        if axis.selects_attributes() != test.is_attribute_test() {
            return Err(PathError::AxisTestMismatch {
                axis: axis.to_string(),
                test: test.to_string(),
            });
        }
        Ok(Step {
            axis,
            test,
            predicates,
        })
    }

    /// A step without predicates.
    pub fn plain(axis: Axis, test: NodeTest) -> Result<Self, PathError> {
        Step::new(axis, test, Vec::new())
    }

    /// Builds a step without the axis/test check. Parser-internal; the parser
    /// re-validates every step after namespace resolution.
    pub(crate) fn unchecked(axis: Axis, test: NodeTest, predicates: Vec<Expression>) -> Self {
        Step {
            axis,
            test,
            predicates,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn test(&self) -> &NodeTest {
        &self.test
    }

    pub fn predicates(&self) -> &[Expression] {
        &self.predicates
    }

    pub(crate) fn into_parts(self) -> (Axis, NodeTest, Vec<Expression>) {
        (self.axis, self.test, self.predicates)
    }
}

/// An ordered chain of steps, absolute (`/a/b`) or relative (`a/b`).
///
/// An absolute path with no steps is the legal path `/` selecting the
/// document root; a relative path must have at least one step, which
/// [`LocationPath::relative`] enforces at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPath {
    is_absolute: bool,
    steps: Vec<Step>,
}

impl LocationPath {
    pub fn new(is_absolute: bool, steps: Vec<Step>) -> Result<Self, PathError> {
        if !is_absolute && steps.is_empty() {
            return Err(PathError::EmptyRelativePath);
        }
        Ok(LocationPath { is_absolute, steps })
    }

    /// An absolute path, evaluated from the document root regardless of the
    /// caller-supplied context node.
    pub fn absolute(steps: Vec<Step>) -> Self {
        LocationPath {
            is_absolute: true,
            steps,
        }
    }

    /// A relative path, evaluated from the context node. Errors on zero steps.
    pub fn relative(steps: Vec<Step>) -> Result<Self, PathError> {
        LocationPath::new(false, steps)
    }

    /// Parser-internal constructor; the parser validates after namespace
    /// resolution.
    pub(crate) fn unchecked(is_absolute: bool, steps: Vec<Step>) -> Self {
        LocationPath { is_absolute, steps }
    }

    pub fn is_absolute(&self) -> bool {
        self.is_absolute
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub(crate) fn into_parts(self) -> (bool, Vec<Step>) {
        (self.is_absolute, self.steps)
    }
}

/// A predicate (or standalone) expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(String),
    Number(f64),
    LocationPath(LocationPath),
    Variable(String),
    FunctionCall {
        name: String,
        args: Vec<Expression>,
    },
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
    UnaryOp {
        op: UnaryOperator,
        expr: Box<Expression>,
    },
}

/// A unary operator used in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Minus,
}

/// A binary operator used in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Logical
    Or,
    And,
    // Equality
    Equals,
    NotEquals,
    // Relational
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    // Additive
    Plus,
    Minus,
    // Multiplicative
    Multiply,
    Divide,
    Modulo,
    // Set
    Union,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_axis_requires_attribute_test() {
        let err = Step::plain(Axis::Attribute, NodeTest::AnyElement).unwrap_err();
        assert!(matches!(err, PathError::AxisTestMismatch { .. }));

        let err = Step::plain(
            Axis::Child,
            NodeTest::Attr {
                namespace: None,
                local: "id".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, PathError::AxisTestMismatch { .. }));

        assert!(Step::plain(Axis::Attribute, NodeTest::AnyAttribute).is_ok());
        assert!(Step::plain(Axis::Namespace, NodeTest::AnyAttribute).is_ok());
        assert!(Step::plain(Axis::Child, NodeTest::AnyNode).is_ok());
    }

    #[test]
    fn relative_path_needs_a_step() {
        assert_eq!(
            LocationPath::relative(Vec::new()).unwrap_err(),
            PathError::EmptyRelativePath
        );
        // "/" is legal.
        let root_path = LocationPath::absolute(Vec::new());
        assert!(root_path.is_absolute());
        assert!(root_path.steps().is_empty());
    }

    #[test]
    fn reverse_axes() {
        for axis in [
            Axis::Ancestor,
            Axis::AncestorOrSelf,
            Axis::Preceding,
            Axis::PrecedingSibling,
        ] {
            assert!(axis.is_reverse(), "{axis} should be reverse");
        }
        for axis in [
            Axis::Child,
            Axis::Descendant,
            Axis::DescendantOrSelf,
            Axis::Parent,
            Axis::FollowingSibling,
            Axis::Following,
            Axis::Attribute,
            Axis::Namespace,
            Axis::SelfAxis,
        ] {
            assert!(!axis.is_reverse(), "{axis} should be forward");
        }
    }
}
