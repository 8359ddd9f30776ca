use thiserror::Error;

/// Every failure this crate can surface.
///
/// Construction errors (`AxisTestMismatch`, `EmptyRelativePath`) are raised when a
/// `Step` or `LocationPath` value is built, never during evaluation. An axis that
/// yields nothing, a predicate that never matches or a `parent::` query at the root
/// are all ordinary empty results, not errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("axis '{axis}' cannot be paired with node test '{test}'")]
    AxisTestMismatch { axis: String, test: String },

    #[error("a relative location path must contain at least one step")]
    EmptyRelativePath,

    #[error("path parse error in '{input}': {message}")]
    Parse { input: String, message: String },

    #[error("unknown namespace prefix '{0}'")]
    UnknownPrefix(String),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("function '{function}' expects {expected} argument(s), got {got}")]
    FunctionArity {
        function: String,
        expected: &'static str,
        got: usize,
    },

    #[error("type error: {0}")]
    Type(String),

    #[error("variable '{0}' is not bound")]
    UnknownVariable(String),
}
