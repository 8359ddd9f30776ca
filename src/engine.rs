//! The evaluation engine: drives steps along their axes, filters through node
//! tests and predicates, and owns document-order normalization of results.

use crate::ast::{Expression, LocationPath, Step, UnaryOperator};
use crate::error::PathError;
use crate::node::NodeView;
use crate::{axes, functions, node_test, operators};
use log::trace;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

/// The possible result types of an expression evaluation.
///
/// A `NodeSet` produced by this engine is always normalized: document order
/// ascending, duplicates removed. Node-sets never own nodes; they are
/// collections of handles valid only as long as the host tree is alive.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<N> {
    NodeSet(Vec<N>),
    String(String),
    Number(f64),
    Boolean(bool),
}

impl<'a, N: NodeView<'a>> Value<N> {
    /// Boolean coercion per XPath 1.0: a node-set is true when non-empty, a
    /// number when non-zero and not NaN, a string when non-empty.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::NodeSet(nodes) => !nodes.is_empty(),
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Boolean(b) => *b,
        }
    }

    /// Numeric coercion per XPath 1.0. A node-set converts through the string
    /// value of its first node (in document order); unparseable strings are NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::NodeSet(nodes) => {
                let s = nodes.first().map(|n| n.string_value()).unwrap_or_default();
                s.trim().parse().unwrap_or(f64::NAN)
            }
        }
    }
}

impl<'a, N: NodeView<'a>> fmt::Display for Value<N> {
    /// String coercion per XPath 1.0: a node-set converts through the string
    /// value of its first node in document order (empty set is "").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::NodeSet(nodes) => {
                f.write_str(&nodes.first().map(|n| n.string_value()).unwrap_or_default())
            }
            Value::String(s) => f.write_str(s),
            Value::Number(n) => {
                if n.is_nan() {
                    f.write_str("NaN")
                } else if n.is_infinite() {
                    f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// All state a single evaluation needs.
///
/// `'a` is the lifetime of the underlying data source, `'d` the lifetime of
/// the borrowed variable bindings. The context is cheap to copy; predicate
/// evaluation forks one per candidate with its own position/size.
pub struct EvaluationContext<'a, 'd, N: NodeView<'a>> {
    pub context_node: N,
    pub root_node: N,
    /// 1-based position of the context node in the current node list.
    pub context_position: usize,
    pub context_size: usize,
    pub variables: &'d HashMap<String, Value<N>>,
    _marker: PhantomData<&'a ()>,
}

impl<'a, 'd, N: NodeView<'a>> EvaluationContext<'a, 'd, N> {
    pub fn new(context_node: N, root_node: N, variables: &'d HashMap<String, Value<N>>) -> Self {
        Self {
            context_node,
            root_node,
            context_position: 1,
            context_size: 1,
            variables,
            _marker: PhantomData,
        }
    }

    fn with_context(&self, node: N, position: usize, size: usize) -> Self {
        Self {
            context_node: node,
            root_node: self.root_node,
            context_position: position,
            context_size: size,
            variables: self.variables,
            _marker: PhantomData,
        }
    }
}

/// Sorts by document-order index ascending and removes duplicates. Every
/// node-set this engine hands to a caller has passed through here.
pub fn sort_document_order<'a, N: NodeView<'a>>(nodes: &mut Vec<N>) {
    nodes.sort_by_key(|n| n.doc_order());
    nodes.dedup_by_key(|n| n.doc_order());
}

/// Evaluates a full expression to a concrete [`Value`].
pub fn evaluate<'a, N>(
    expr: &Expression,
    ctx: &EvaluationContext<'a, '_, N>,
) -> Result<Value<N>, PathError>
where
    N: NodeView<'a> + 'a,
{
    match expr {
        Expression::Literal(s) => Ok(Value::String(s.clone())),
        Expression::Number(n) => Ok(Value::Number(*n)),
        Expression::LocationPath(path) => Ok(Value::NodeSet(evaluate_path(path, ctx)?)),
        Expression::Variable(name) => ctx
            .variables
            .get(name)
            .cloned()
            .ok_or_else(|| PathError::UnknownVariable(name.clone())),
        Expression::FunctionCall { name, args } => {
            let mut evaluated = Vec::with_capacity(args.len());
            for arg in args {
                evaluated.push(evaluate(arg, ctx)?);
            }
            functions::call(name, evaluated, ctx)
        }
        Expression::BinaryOp { left, op, right } => {
            let left = evaluate(left, ctx)?;
            let right = evaluate(right, ctx)?;
            operators::evaluate(*op, left, right)
        }
        Expression::UnaryOp { op, expr } => {
            let value = evaluate(expr, ctx)?;
            match op {
                UnaryOperator::Minus => Ok(Value::Number(-value.to_number())),
            }
        }
    }
}

/// The public entry point for path evaluation: returns the selected nodes in
/// document order, deduplicated. Absolute paths start from the context's root
/// node and ignore the context node entirely.
pub fn evaluate_path<'a, N>(
    path: &LocationPath,
    ctx: &EvaluationContext<'a, '_, N>,
) -> Result<Vec<N>, PathError>
where
    N: NodeView<'a> + 'a,
{
    let mut nodes = evaluate_location_path(path, ctx)?;
    sort_document_order(&mut nodes);
    Ok(nodes)
}

/// Threads the node-set from step to step. Not yet normalized; intermediate
/// sorting would be redundant work when chaining, so the sort happens once in
/// [`evaluate_path`].
fn evaluate_location_path<'a, N>(
    path: &LocationPath,
    ctx: &EvaluationContext<'a, '_, N>,
) -> Result<Vec<N>, PathError>
where
    N: NodeView<'a> + 'a,
{
    // An absolute path with no steps is "/": the root singleton.
    let mut current = if path.is_absolute() {
        vec![ctx.root_node]
    } else {
        vec![ctx.context_node]
    };

    for step in path.steps() {
        current = evaluate_step(step, &current, ctx)?;
        if current.is_empty() {
            break;
        }
    }
    Ok(current)
}

/// Evaluates one step against a context node-set.
///
/// Axis enumeration, node testing and predicate filtering all happen per
/// origin context node: a predicate's position/size refer to the candidate
/// list of that one origin, counted along the axis's natural order (so
/// `preceding-sibling::*[1]` is the nearest preceding sibling). The per-origin
/// results are then unioned and deduplicated by node identity.
fn evaluate_step<'a, N>(
    step: &Step,
    context_nodes: &[N],
    ctx: &EvaluationContext<'a, '_, N>,
) -> Result<Vec<N>, PathError>
where
    N: NodeView<'a> + 'a,
{
    let mut results = Vec::new();
    let mut seen = HashSet::new();

    for &origin in context_nodes {
        let mut candidates = Vec::new();
        axes::collect(step.axis(), origin, &mut candidates);
        candidates.retain(|&node| node_test::matches(step.test(), node));

        for predicate in step.predicates() {
            candidates = filter_by_predicate(&candidates, predicate, ctx)?;
            if candidates.is_empty() {
                break;
            }
        }

        for node in candidates {
            if seen.insert(node) {
                results.push(node);
            }
        }
    }

    trace!(
        "step {}::{} selected {} node(s) from {} context node(s)",
        step.axis(),
        step.test(),
        results.len(),
        context_nodes.len()
    );
    Ok(results)
}

/// Applies one predicate to a candidate list. A bare numeric predicate value
/// `N` is positional shorthand for `position() = N`, not a truthiness test.
fn filter_by_predicate<'a, N>(
    candidates: &[N],
    predicate: &Expression,
    ctx: &EvaluationContext<'a, '_, N>,
) -> Result<Vec<N>, PathError>
where
    N: NodeView<'a> + 'a,
{
    let size = candidates.len();
    let mut kept = Vec::new();
    for (i, &node) in candidates.iter().enumerate() {
        let predicate_ctx = ctx.with_context(node, i + 1, size);
        let value = evaluate(predicate, &predicate_ctx)?;
        let keep = match value {
            Value::Number(n) => n == (i + 1) as f64,
            other => other.to_bool(),
        };
        if keep {
            kept.push(node);
        }
    }
    Ok(kept)
}
