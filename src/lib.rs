//! An XPath 1.0 location-path engine over generic read-only trees.
//!
//! The engine is written against the [`NodeView`] trait, a narrow capability
//! surface the host tree implements; it never owns, creates or mutates
//! nodes. Paths are immutable [`LocationPath`] values - built directly, or
//! through the [`parser`] module - and evaluate to node-sets that are always
//! returned in document order with duplicates removed.
//!
//! Evaluation is pure and synchronous; independent evaluations over the same
//! unmutated tree may run on separate threads without coordination.

pub mod ast;
pub mod axes;
pub mod engine;
pub mod error;
pub mod functions;
pub mod node;
pub mod operators;
pub mod parser;

pub use ast::{Axis, BinaryOperator, Expression, LocationPath, NodeTest, Step, UnaryOperator};
pub use engine::{EvaluationContext, Value, evaluate, evaluate_path};
pub use error::PathError;
pub use node::{NodeKind, NodeView, QName};
pub use node_test::matches;
pub use parser::{parse_expression, parse_location_path};
