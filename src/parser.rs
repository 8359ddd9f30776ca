//! A `nom`-based parser for the XPath 1.0 location-path language.
//!
//! This is a convenience collaborator: the engine itself only ever consumes
//! pre-structured [`LocationPath`]/[`Expression`] values and never touches
//! raw path text. Parsing runs in two phases: the combinator grammar builds
//! an expression tree in which name tests still carry their lexical prefix,
//! then a resolution pass swaps prefixes for namespace URIs (through the
//! caller-supplied prefix table) and re-validates every step and path through
//! their checked constructors. Steps therefore leave this module with
//! resolved URIs only, and axis/test mismatches (e.g. `@text()`) surface here
//! as construction errors.

use crate::ast::{Axis, BinaryOperator, Expression, LocationPath, NodeTest, Step, UnaryOperator};
use crate::error::PathError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt, peek, recognize},
    multi::{many0, separated_list0},
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated},
};
use std::collections::HashMap;

/// The namespace that the `xml` prefix is implicitly bound to.
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Maps prefixes to namespace URIs during parsing.
pub type Namespaces = HashMap<String, String>;

// --- Main Public Parsers ---

/// Parses an expression that uses no namespace prefixes.
pub fn parse_expression(input: &str) -> Result<Expression, PathError> {
    parse_expression_with_namespaces(input, &Namespaces::new())
}

/// Parses an expression, resolving prefixes through `namespaces`. The `xml`
/// prefix is predeclared unless the table overrides it; any other unbound
/// prefix is an error.
pub fn parse_expression_with_namespaces(
    input: &str,
    namespaces: &Namespaces,
) -> Result<Expression, PathError> {
    let expr = match expression(input.trim()) {
        Ok(("", expr)) => expr,
        Ok((rem, _)) => {
            return Err(PathError::Parse {
                input: input.to_string(),
                message: format!("unparsed trailing input: '{rem}'"),
            });
        }
        Err(e) => {
            return Err(PathError::Parse {
                input: input.to_string(),
                message: e.to_string(),
            });
        }
    };
    resolve_expression(expr, namespaces)
}

/// Parses a plain location path (no namespace prefixes).
pub fn parse_location_path(input: &str) -> Result<LocationPath, PathError> {
    parse_location_path_with_namespaces(input, &Namespaces::new())
}

/// Parses a plain location path, resolving prefixes through `namespaces`.
pub fn parse_location_path_with_namespaces(
    input: &str,
    namespaces: &Namespaces,
) -> Result<LocationPath, PathError> {
    match parse_expression_with_namespaces(input, namespaces)? {
        Expression::LocationPath(path) => Ok(path),
        _ => Err(PathError::Parse {
            input: input.to_string(),
            message: "expression is not a location path".to_string(),
        }),
    }
}

// --- Prefix Resolution & Validation ---

fn resolve_expression(expr: Expression, ns: &Namespaces) -> Result<Expression, PathError> {
    Ok(match expr {
        Expression::LocationPath(path) => Expression::LocationPath(resolve_path(path, ns)?),
        Expression::FunctionCall { name, args } => Expression::FunctionCall {
            name,
            args: args
                .into_iter()
                .map(|a| resolve_expression(a, ns))
                .collect::<Result<_, _>>()?,
        },
        Expression::BinaryOp { left, op, right } => Expression::BinaryOp {
            left: Box::new(resolve_expression(*left, ns)?),
            op,
            right: Box::new(resolve_expression(*right, ns)?),
        },
        Expression::UnaryOp { op, expr } => Expression::UnaryOp {
            op,
            expr: Box::new(resolve_expression(*expr, ns)?),
        },
        other => other,
    })
}

fn resolve_path(path: LocationPath, ns: &Namespaces) -> Result<LocationPath, PathError> {
    let (is_absolute, steps) = path.into_parts();
    let steps = steps
        .into_iter()
        .map(|s| resolve_step(s, ns))
        .collect::<Result<_, _>>()?;
    LocationPath::new(is_absolute, steps)
}

fn resolve_step(step: Step, ns: &Namespaces) -> Result<Step, PathError> {
    let (axis, test, predicates) = step.into_parts();
    let test = match test {
        NodeTest::Element { namespace, local } => NodeTest::Element {
            namespace: resolve_prefix(namespace, ns)?,
            local,
        },
        NodeTest::Attr { namespace, local } => NodeTest::Attr {
            namespace: resolve_prefix(namespace, ns)?,
            local,
        },
        other => other,
    };
    let predicates = predicates
        .into_iter()
        .map(|p| resolve_expression(p, ns))
        .collect::<Result<_, _>>()?;
    Step::new(axis, test, predicates)
}

fn resolve_prefix(prefix: Option<String>, ns: &Namespaces) -> Result<Option<String>, PathError> {
    match prefix {
        None => Ok(None),
        Some(p) => match ns.get(&p) {
            Some(uri) => Ok(Some(uri.clone())),
            None if p == "xml" => Ok(Some(XML_NAMESPACE.to_string())),
            None => Err(PathError::UnknownPrefix(p)),
        },
    }
}

// --- Combinators & Helpers ---

fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}

fn build_binary_expr_parser<'a, F, G>(
    sub_expr_parser: F,
    op_parser: G,
) -> impl FnMut(&'a str) -> IResult<&'a str, Expression>
where
    F: Parser<&'a str, Output = Expression, Error = nom::error::Error<&'a str>> + Clone,
    G: Parser<&'a str, Output = BinaryOperator, Error = nom::error::Error<&'a str>> + Clone,
{
    move |input: &str| {
        let (input, mut left) = sub_expr_parser.clone().parse(input)?;
        let (input, remainder) =
            many0(pair(ws(op_parser.clone()), sub_expr_parser.clone())).parse(input)?;

        for (op, right) in remainder {
            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }
        Ok((input, left))
    }
}

// --- Expression Parsers (in order of precedence) ---

fn expression(input: &str) -> IResult<&str, Expression> {
    or_expr(input)
}

fn or_op(input: &str) -> IResult<&str, BinaryOperator> {
    map(tag("or"), |_| BinaryOperator::Or).parse(input)
}

fn and_op(input: &str) -> IResult<&str, BinaryOperator> {
    map(tag("and"), |_| BinaryOperator::And).parse(input)
}

fn or_expr(input: &str) -> IResult<&str, Expression> {
    build_binary_expr_parser(and_expr, or_op)(input)
}

fn and_expr(input: &str) -> IResult<&str, Expression> {
    build_binary_expr_parser(equality_expr, and_op)(input)
}

fn equality_op(input: &str) -> IResult<&str, BinaryOperator> {
    alt((
        map(tag("="), |_| BinaryOperator::Equals),
        map(tag("!="), |_| BinaryOperator::NotEquals),
    ))
    .parse(input)
}

fn relational_op(input: &str) -> IResult<&str, BinaryOperator> {
    alt((
        map(tag("<="), |_| BinaryOperator::LessThanOrEqual),
        map(tag(">="), |_| BinaryOperator::GreaterThanOrEqual),
        map(tag("<"), |_| BinaryOperator::LessThan),
        map(tag(">"), |_| BinaryOperator::GreaterThan),
    ))
    .parse(input)
}

fn additive_op(input: &str) -> IResult<&str, BinaryOperator> {
    alt((
        map(char('+'), |_| BinaryOperator::Plus),
        map(char('-'), |_| BinaryOperator::Minus),
    ))
    .parse(input)
}

fn multiplicative_op(input: &str) -> IResult<&str, BinaryOperator> {
    alt((
        map(char('*'), |_| BinaryOperator::Multiply),
        map(tag("div"), |_| BinaryOperator::Divide),
        map(tag("mod"), |_| BinaryOperator::Modulo),
    ))
    .parse(input)
}

fn union_op(input: &str) -> IResult<&str, BinaryOperator> {
    map(char('|'), |_| BinaryOperator::Union).parse(input)
}

fn equality_expr(input: &str) -> IResult<&str, Expression> {
    build_binary_expr_parser(relational_expr, equality_op)(input)
}

fn relational_expr(input: &str) -> IResult<&str, Expression> {
    build_binary_expr_parser(additive_expr, relational_op)(input)
}

fn additive_expr(input: &str) -> IResult<&str, Expression> {
    build_binary_expr_parser(multiplicative_expr, additive_op)(input)
}

fn multiplicative_expr(input: &str) -> IResult<&str, Expression> {
    build_binary_expr_parser(unary_expr, multiplicative_op)(input)
}

fn unary_expr(input: &str) -> IResult<&str, Expression> {
    let (i, neg_op) = opt(ws(char('-'))).parse(input)?;
    let (i, expr) = union_expr(i)?;

    if neg_op.is_some() {
        Ok((
            i,
            Expression::UnaryOp {
                op: UnaryOperator::Minus,
                expr: Box::new(expr),
            },
        ))
    } else {
        Ok((i, expr))
    }
}

// The union operator `|` binds tighter than the others, but only applies to paths.
fn union_expr(input: &str) -> IResult<&str, Expression> {
    build_binary_expr_parser(path_expr, union_op)(input)
}

/// Handles the ambiguity between location paths and other primary
/// expressions: `position()` must be a function call, not a step named
/// "position", so primaries are tried first.
fn path_expr(input: &str) -> IResult<&str, Expression> {
    alt((primary_expr, map(location_path, Expression::LocationPath))).parse(input)
}

fn primary_expr(input: &str) -> IResult<&str, Expression> {
    ws(alt((
        variable_reference,
        map(double, Expression::Number),
        map(string_literal, Expression::Literal),
        function_call,
        delimited(ws(char('(')), expression, ws(char(')'))),
    )))
    .parse(input)
}

// --- Literal Parsers ---
fn string_literal(input: &str) -> IResult<&str, String> {
    map(
        alt((
            delimited(char('\''), take_while(|c| c != '\''), char('\'')),
            delimited(char('"'), take_while(|c| c != '"'), char('"')),
        )),
        |s: &str| s.to_string(),
    )
    .parse(input)
}

// --- Variable Reference Parser ---
fn variable_reference(input: &str) -> IResult<&str, Expression> {
    map(preceded(char('$'), q_name), |(prefix, local)| {
        Expression::Variable(match prefix {
            Some(p) => format!("{p}:{local}"),
            None => local,
        })
    })
    .parse(input)
}

// --- Name and NodeTest Parsers ---

/// A node test as it appears lexically, before axis context and namespace
/// resolution are applied. `Name` still carries the prefix.
enum RawTest {
    Wildcard,
    Name {
        prefix: Option<String>,
        local: String,
    },
    Node,
    Text,
    Comment,
    Pi(Option<String>),
}

fn nc_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '-' || c == '.'),
    ))
    .parse(input)
}

fn q_name(input: &str) -> IResult<&str, (Option<String>, String)> {
    map(
        pair(nc_name, opt(preceded(char(':'), nc_name))),
        |(first, second)| match second {
            Some(local) => (Some(first.to_string()), local.to_string()),
            None => (None, first.to_string()),
        },
    )
    .parse(input)
}

fn empty_parens(input: &str) -> IResult<&str, ()> {
    map(pair(ws(char('(')), char(')')), |_| ()).parse(input)
}

fn kind_test(input: &str) -> IResult<&str, RawTest> {
    alt((
        map(terminated(tag("node"), empty_parens), |_| RawTest::Node),
        map(terminated(tag("text"), empty_parens), |_| RawTest::Text),
        map(terminated(tag("comment"), empty_parens), |_| {
            RawTest::Comment
        }),
        map(
            preceded(
                tag("processing-instruction"),
                delimited(ws(char('(')), opt(ws(string_literal)), char(')')),
            ),
            RawTest::Pi,
        ),
    ))
    .parse(input)
}

fn raw_node_test(input: &str) -> IResult<&str, RawTest> {
    alt((
        map(char('*'), |_| RawTest::Wildcard),
        kind_test,
        map(q_name, |(prefix, local)| RawTest::Name { prefix, local }),
    ))
    .parse(input)
}

/// Applies axis context: on the attribute/namespace axes, name tests and
/// wildcards become attribute tests (so `@id` and `attribute::node()` select
/// attributes); everywhere else they are element tests.
fn finish_test(axis: Axis, raw: RawTest) -> NodeTest {
    let on_attributes = axis.selects_attributes();
    match raw {
        RawTest::Wildcard if on_attributes => NodeTest::AnyAttribute,
        RawTest::Wildcard => NodeTest::AnyElement,
        RawTest::Name { prefix, local } if on_attributes => NodeTest::Attr {
            namespace: prefix,
            local,
        },
        RawTest::Name { prefix, local } => NodeTest::Element {
            namespace: prefix,
            local,
        },
        RawTest::Node if on_attributes => NodeTest::AnyAttribute,
        RawTest::Node => NodeTest::AnyNode,
        RawTest::Text => NodeTest::Text,
        RawTest::Comment => NodeTest::Comment,
        RawTest::Pi(target) => NodeTest::ProcessingInstruction(target),
    }
}

// --- Path Parsers ---

fn axis(input: &str) -> IResult<&str, Axis> {
    map(
        terminated(
            alt((
                tag("ancestor-or-self"),
                tag("ancestor"),
                tag("attribute"),
                tag("child"),
                tag("descendant-or-self"),
                tag("descendant"),
                tag("following-sibling"),
                tag("following"),
                tag("namespace"),
                tag("parent"),
                tag("preceding-sibling"),
                tag("preceding"),
                tag("self"),
            )),
            tag("::"),
        ),
        |axis_str| match axis_str {
            "ancestor-or-self" => Axis::AncestorOrSelf,
            "ancestor" => Axis::Ancestor,
            "attribute" => Axis::Attribute,
            "descendant-or-self" => Axis::DescendantOrSelf,
            "descendant" => Axis::Descendant,
            "following-sibling" => Axis::FollowingSibling,
            "following" => Axis::Following,
            "namespace" => Axis::Namespace,
            "parent" => Axis::Parent,
            "preceding-sibling" => Axis::PrecedingSibling,
            "preceding" => Axis::Preceding,
            "self" => Axis::SelfAxis,
            _ => Axis::Child, // "child"
        },
    )
    .parse(input)
}

fn predicate(input: &str) -> IResult<&str, Expression> {
    delimited(ws(char('[')), expression, ws(char(']'))).parse(input)
}

fn step(input: &str) -> IResult<&str, Step> {
    let (i, (axis, test)) = alt((
        map(tag(".."), |_| (Axis::Parent, RawTest::Node)),
        map(char('.'), |_| (Axis::SelfAxis, RawTest::Node)),
        map(preceded(char('@'), raw_node_test), |t| (Axis::Attribute, t)),
        map(pair(opt(axis), raw_node_test), |(ax, t)| {
            (ax.unwrap_or(Axis::Child), t)
        }),
    ))
    .parse(input)?;
    let (i, predicates) = many0(predicate).parse(i)?;
    Ok((i, Step::unchecked(axis, finish_test(axis, test), predicates)))
}

/// The `//` abbreviation expands to a `descendant-or-self::node()` step.
fn abbreviated_descent() -> Step {
    Step::unchecked(Axis::DescendantOrSelf, NodeTest::AnyNode, Vec::new())
}

fn location_path(input: &str) -> IResult<&str, LocationPath> {
    let (i, (is_absolute, mut steps)) =
        if let Ok((rem, _)) = tag::<&str, &str, nom::error::Error<&str>>("//")(input) {
            let (rem, first) = step(rem)?;
            (rem, (true, vec![abbreviated_descent(), first]))
        } else if let Ok((rem, _)) = tag::<&str, &str, nom::error::Error<&str>>("/")(input) {
            if let Ok((rem, first)) = step(rem) {
                (rem, (true, vec![first]))
            } else {
                // The path that is just "/".
                (rem, (true, vec![]))
            }
        } else {
            let (rem, first) = step(input)?;
            (rem, (false, vec![first]))
        };

    // After the first step, subsequent steps MUST be preceded by / or //.
    let (i, remainder) = many0(pair(alt((tag("//"), tag("/"))), step)).parse(i)?;
    for (sep, next_step) in remainder {
        if sep == "//" {
            steps.push(abbreviated_descent());
        }
        steps.push(next_step);
    }

    Ok((i, LocationPath::unchecked(is_absolute, steps)))
}

// --- Function Call Parser ---
fn function_call(input: &str) -> IResult<&str, Expression> {
    // A function call must be a name followed by '('. The lookahead avoids
    // parsing a plain step name (like 'foo' in 'foo/bar') as a function.
    let (i, (prefix, local)) = q_name(input)?;
    let (i, _) = peek(ws(char('('))).parse(i)?;

    // Node kind tests like text() are not functions; let the step parser
    // have them.
    if prefix.is_none()
        && matches!(
            local.as_str(),
            "text" | "node" | "comment" | "processing-instruction"
        )
    {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }

    let (i, args) = preceded(
        multispace0,
        delimited(
            char('('),
            separated_list0(ws(char(',')), expression),
            ws(char(')')),
        ),
    )
    .parse(i)?;

    let name = match prefix {
        Some(p) => format!("{p}:{local}"),
        None => local,
    };
    Ok((i, Expression::FunctionCall { name, args }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(local: &str) -> NodeTest {
        NodeTest::Element {
            namespace: None,
            local: local.to_string(),
        }
    }

    #[test]
    fn parses_absolute_and_relative_paths() {
        let path = parse_location_path("/a/c/d").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.steps().len(), 3);
        assert_eq!(path.steps()[0].axis(), Axis::Child);
        assert_eq!(*path.steps()[2].test(), named("d"));

        let path = parse_location_path("child::*").unwrap();
        assert!(!path.is_absolute());
        assert_eq!(*path.steps()[0].test(), NodeTest::AnyElement);

        let root = parse_location_path("/").unwrap();
        assert!(root.is_absolute());
        assert!(root.steps().is_empty());
    }

    #[test]
    fn parses_every_axis() {
        for (text, axis) in [
            ("child::x", Axis::Child),
            ("descendant::x", Axis::Descendant),
            ("parent::x", Axis::Parent),
            ("ancestor::x", Axis::Ancestor),
            ("following-sibling::x", Axis::FollowingSibling),
            ("preceding-sibling::x", Axis::PrecedingSibling),
            ("following::x", Axis::Following),
            ("preceding::x", Axis::Preceding),
            ("self::x", Axis::SelfAxis),
            ("descendant-or-self::x", Axis::DescendantOrSelf),
            ("ancestor-or-self::x", Axis::AncestorOrSelf),
        ] {
            let path = parse_location_path(text).unwrap();
            assert_eq!(path.steps()[0].axis(), axis, "in {text}");
        }
        // The attribute/namespace axes get attribute tests.
        let path = parse_location_path("attribute::href").unwrap();
        assert_eq!(path.steps()[0].axis(), Axis::Attribute);
        assert_eq!(
            *path.steps()[0].test(),
            NodeTest::Attr {
                namespace: None,
                local: "href".into()
            }
        );
        let path = parse_location_path("namespace::*").unwrap();
        assert_eq!(path.steps()[0].axis(), Axis::Namespace);
        assert_eq!(*path.steps()[0].test(), NodeTest::AnyAttribute);
    }

    #[test]
    fn parses_abbreviations() {
        let path = parse_location_path("@id").unwrap();
        assert_eq!(path.steps()[0].axis(), Axis::Attribute);

        let path = parse_location_path(".").unwrap();
        assert_eq!(path.steps()[0].axis(), Axis::SelfAxis);
        assert_eq!(*path.steps()[0].test(), NodeTest::AnyNode);

        let path = parse_location_path("..").unwrap();
        assert_eq!(path.steps()[0].axis(), Axis::Parent);

        let path = parse_location_path("//b").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.steps().len(), 2);
        assert_eq!(path.steps()[0].axis(), Axis::DescendantOrSelf);
        assert_eq!(*path.steps()[0].test(), NodeTest::AnyNode);

        let path = parse_location_path("a//b").unwrap();
        assert_eq!(path.steps().len(), 3);
        assert_eq!(path.steps()[1].axis(), Axis::DescendantOrSelf);
    }

    #[test]
    fn parses_kind_tests() {
        let path = parse_location_path("text()").unwrap();
        assert_eq!(*path.steps()[0].test(), NodeTest::Text);
        let path = parse_location_path("comment()").unwrap();
        assert_eq!(*path.steps()[0].test(), NodeTest::Comment);
        let path = parse_location_path("processing-instruction()").unwrap();
        assert_eq!(
            *path.steps()[0].test(),
            NodeTest::ProcessingInstruction(None)
        );
        let path = parse_location_path("processing-instruction('pi-target')").unwrap();
        assert_eq!(
            *path.steps()[0].test(),
            NodeTest::ProcessingInstruction(Some("pi-target".into()))
        );
    }

    #[test]
    fn parses_predicates() {
        let path = parse_location_path("child::para[@id='p1'][2]").unwrap();
        let step = &path.steps()[0];
        assert_eq!(step.predicates().len(), 2);
        assert_eq!(step.predicates()[1], Expression::Number(2.0));

        let expr = parse_expression("position() = 2").unwrap();
        assert!(matches!(expr, Expression::BinaryOp { .. }));
    }

    #[test]
    fn parses_operator_precedence() {
        // 1 + 2 * 3 groups as 1 + (2 * 3).
        let expr = parse_expression("1 + 2 * 3").unwrap();
        match expr {
            Expression::BinaryOp { op, right, .. } => {
                assert_eq!(op, BinaryOperator::Plus);
                assert!(matches!(
                    *right,
                    Expression::BinaryOp {
                        op: BinaryOperator::Multiply,
                        ..
                    }
                ));
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn resolves_prefixes_to_uris() {
        let mut ns = Namespaces::new();
        ns.insert("svg".to_string(), "http://www.w3.org/2000/svg".to_string());
        let path = parse_location_path_with_namespaces("child::svg:rect", &ns).unwrap();
        assert_eq!(
            *path.steps()[0].test(),
            NodeTest::Element {
                namespace: Some("http://www.w3.org/2000/svg".into()),
                local: "rect".into()
            }
        );

        // xml is predeclared.
        let path = parse_location_path("@xml:lang").unwrap();
        assert_eq!(
            *path.steps()[0].test(),
            NodeTest::Attr {
                namespace: Some(XML_NAMESPACE.into()),
                local: "lang".into()
            }
        );

        let err = parse_location_path("child::svg:rect").unwrap_err();
        assert_eq!(err, PathError::UnknownPrefix("svg".into()));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            parse_expression("child::").unwrap_err(),
            PathError::Parse { .. }
        ));
        assert!(matches!(
            parse_expression("a b").unwrap_err(),
            PathError::Parse { .. }
        ));
        // Not-a-path is a parse error at the path entry point.
        assert!(matches!(
            parse_location_path("1 + 2").unwrap_err(),
            PathError::Parse { .. }
        ));
    }

    #[test]
    fn axis_test_mismatch_is_a_construction_error() {
        let err = parse_location_path("@text()").unwrap_err();
        assert!(matches!(err, PathError::AxisTestMismatch { .. }));
        let err = parse_location_path("namespace::comment()").unwrap_err();
        assert!(matches!(err, PathError::AxisTestMismatch { .. }));
    }

    #[test]
    fn parses_union_and_functions() {
        let expr = parse_expression("a | b").unwrap();
        assert!(matches!(
            expr,
            Expression::BinaryOp {
                op: BinaryOperator::Union,
                ..
            }
        ));

        let expr = parse_expression("count(child::para)").unwrap();
        match expr {
            Expression::FunctionCall { name, args } => {
                assert_eq!(name, "count");
                assert_eq!(args.len(), 1);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}
