//! The built-in functions predicate evaluation needs: positional context,
//! existence counting and the three coercion boundaries. The larger XPath
//! string/number library is deliberately out of scope.

use crate::engine::{EvaluationContext, Value};
use crate::error::PathError;
use crate::node::NodeView;

/// Dispatches a function call to its implementation.
pub fn call<'a, N: NodeView<'a>>(
    name: &str,
    args: Vec<Value<N>>,
    ctx: &EvaluationContext<'a, '_, N>,
) -> Result<Value<N>, PathError> {
    match name {
        "position" => {
            expect_arity(name, "0", args.is_empty(), args.len())?;
            Ok(Value::Number(ctx.context_position as f64))
        }
        "last" => {
            expect_arity(name, "0", args.is_empty(), args.len())?;
            Ok(Value::Number(ctx.context_size as f64))
        }
        "count" => {
            expect_arity(name, "1", args.len() == 1, args.len())?;
            match &args[0] {
                Value::NodeSet(nodes) => Ok(Value::Number(nodes.len() as f64)),
                other => Err(PathError::Type(format!(
                    "count() requires a node-set argument, got {other:?}"
                ))),
            }
        }
        "true" => {
            expect_arity(name, "0", args.is_empty(), args.len())?;
            Ok(Value::Boolean(true))
        }
        "false" => {
            expect_arity(name, "0", args.is_empty(), args.len())?;
            Ok(Value::Boolean(false))
        }
        "not" => {
            expect_arity(name, "1", args.len() == 1, args.len())?;
            Ok(Value::Boolean(!args[0].to_bool()))
        }
        "boolean" => {
            expect_arity(name, "1", args.len() == 1, args.len())?;
            Ok(Value::Boolean(args[0].to_bool()))
        }
        "number" => {
            expect_arity(name, "0 or 1", args.len() <= 1, args.len())?;
            match args.first() {
                Some(value) => Ok(Value::Number(value.to_number())),
                None => {
                    let s = ctx.context_node.string_value();
                    Ok(Value::Number(s.trim().parse().unwrap_or(f64::NAN)))
                }
            }
        }
        "string" => {
            expect_arity(name, "0 or 1", args.len() <= 1, args.len())?;
            match args.first() {
                Some(value) => Ok(Value::String(value.to_string())),
                None => Ok(Value::String(ctx.context_node.string_value())),
            }
        }
        // Node tests that the parser could mistake for calls.
        "node" | "text" | "comment" | "processing-instruction" => Err(PathError::Type(format!(
            "'{name}()' is a node test, not a function"
        ))),
        _ => Err(PathError::UnknownFunction(name.to_string())),
    }
}

fn expect_arity(
    function: &str,
    expected: &'static str,
    ok: bool,
    got: usize,
) -> Result<(), PathError> {
    if ok {
        Ok(())
    } else {
        Err(PathError::FunctionArity {
            function: function.to_string(),
            expected,
            got,
        })
    }
}
