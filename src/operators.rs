//! Binary operator evaluation over [`Value`]s, with the XPath 1.0 comparison
//! rules (node-set comparisons are existential).

use crate::ast::BinaryOperator;
use crate::engine::{Value, sort_document_order};
use crate::error::PathError;
use crate::node::NodeView;

pub fn evaluate<'a, N: NodeView<'a>>(
    op: BinaryOperator,
    left: Value<N>,
    right: Value<N>,
) -> Result<Value<N>, PathError> {
    match op {
        BinaryOperator::Or => Ok(Value::Boolean(left.to_bool() || right.to_bool())),
        BinaryOperator::And => Ok(Value::Boolean(left.to_bool() && right.to_bool())),

        BinaryOperator::Equals => Ok(Value::Boolean(equality(&left, &right, true))),
        BinaryOperator::NotEquals => Ok(Value::Boolean(equality(&left, &right, false))),

        BinaryOperator::LessThan
        | BinaryOperator::LessThanOrEqual
        | BinaryOperator::GreaterThan
        | BinaryOperator::GreaterThanOrEqual => Ok(Value::Boolean(relational(op, &left, &right))),

        BinaryOperator::Plus => Ok(Value::Number(left.to_number() + right.to_number())),
        BinaryOperator::Minus => Ok(Value::Number(left.to_number() - right.to_number())),
        BinaryOperator::Multiply => Ok(Value::Number(left.to_number() * right.to_number())),
        BinaryOperator::Divide => Ok(Value::Number(left.to_number() / right.to_number())),
        BinaryOperator::Modulo => Ok(Value::Number(left.to_number() % right.to_number())),

        BinaryOperator::Union => union(left, right),
    }
}

/// `=` / `!=`. When a node-set is involved the comparison is existential:
/// true if SOME node's string value satisfies it.
fn equality<'a, N: NodeView<'a>>(left: &Value<N>, right: &Value<N>, want_equal: bool) -> bool {
    match (left, right) {
        (Value::NodeSet(a), Value::NodeSet(b)) => {
            let b_values: Vec<String> = b.iter().map(|n| n.string_value()).collect();
            a.iter().any(|x| {
                let xv = x.string_value();
                b_values.iter().any(|yv| (xv == *yv) == want_equal)
            })
        }
        (Value::NodeSet(nodes), Value::Number(n)) | (Value::Number(n), Value::NodeSet(nodes)) => {
            nodes.iter().any(|node| {
                let v: f64 = node.string_value().trim().parse().unwrap_or(f64::NAN);
                (v == *n) == want_equal
            })
        }
        (Value::NodeSet(nodes), Value::String(s)) | (Value::String(s), Value::NodeSet(nodes)) => {
            nodes.iter().any(|node| (node.string_value() == *s) == want_equal)
        }
        (Value::NodeSet(_), Value::Boolean(b)) | (Value::Boolean(b), Value::NodeSet(_)) => {
            let set = if matches!(left, Value::NodeSet(_)) {
                left
            } else {
                right
            };
            (set.to_bool() == *b) == want_equal
        }
        _ => {
            let equal = if matches!(left, Value::Boolean(_)) || matches!(right, Value::Boolean(_)) {
                left.to_bool() == right.to_bool()
            } else if matches!(left, Value::Number(_)) || matches!(right, Value::Number(_)) {
                left.to_number() == right.to_number()
            } else {
                left.to_string() == right.to_string()
            };
            equal == want_equal
        }
    }
}

/// `<`, `<=`, `>`, `>=`. Numeric, existential over node-sets.
fn relational<'a, N: NodeView<'a>>(op: BinaryOperator, left: &Value<N>, right: &Value<N>) -> bool {
    fn cmp(op: BinaryOperator, a: f64, b: f64) -> bool {
        match op {
            BinaryOperator::LessThan => a < b,
            BinaryOperator::LessThanOrEqual => a <= b,
            BinaryOperator::GreaterThan => a > b,
            BinaryOperator::GreaterThanOrEqual => a >= b,
            _ => unreachable!("not a relational operator: {op:?}"),
        }
    }
    fn node_number<'a, N: NodeView<'a>>(node: &N) -> f64 {
        node.string_value().trim().parse().unwrap_or(f64::NAN)
    }

    match (left, right) {
        (Value::NodeSet(a), Value::NodeSet(b)) => a
            .iter()
            .any(|x| b.iter().any(|y| cmp(op, node_number(x), node_number(y)))),
        (Value::NodeSet(nodes), other) => {
            let rhs = other.to_number();
            nodes.iter().any(|n| cmp(op, node_number(n), rhs))
        }
        (other, Value::NodeSet(nodes)) => {
            let lhs = other.to_number();
            nodes.iter().any(|n| cmp(op, lhs, node_number(n)))
        }
        _ => cmp(op, left.to_number(), right.to_number()),
    }
}

/// `|`: both operands must be node-sets; the result is normalized.
fn union<'a, N: NodeView<'a>>(left: Value<N>, right: Value<N>) -> Result<Value<N>, PathError> {
    match (left, right) {
        (Value::NodeSet(mut a), Value::NodeSet(b)) => {
            a.extend(b);
            sort_document_order(&mut a);
            Ok(Value::NodeSet(a))
        }
        (l, r) => Err(PathError::Type(format!(
            "union requires node-sets, got {} | {}",
            kind_name(&l),
            kind_name(&r)
        ))),
    }
}

fn kind_name<N>(value: &Value<N>) -> &'static str {
    match value {
        Value::NodeSet(_) => "node-set",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Boolean(_) => "boolean",
    }
}
