use thiserror::Error;

/// An error produced while evaluating an arithmetic expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An identifier resolved to neither a constant nor a function.
    #[error("Unknown Variable: {0}")]
    UnknownIdentifier(String),

    /// The expression structure is malformed.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// A function was called with the wrong number of arguments.
    #[error("wrong number of arguments for {name}: expected {expected}, found {found}")]
    Arity {
        name: String,
        expected: &'static str,
        found: usize,
    },

    /// A function was called with arguments outside its domain.
    #[error("invalid argument for {name}: {reason}")]
    Domain { name: String, reason: String },
}
