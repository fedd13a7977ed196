//! Arithmetic expression evaluation.
//!
//! Expressions are tokenized with nom and evaluated eagerly with precedence climbing;
//! no syntax tree is retained. Supported syntax, from highest to lowest precedence:
//!
//! - unary `+` / `-`
//! - `**` (power, right-associative)
//! - `*` / `/` (left-associative)
//! - `+` / `-` (left-associative)
//! - parenthesized sub-expressions, function calls `name(arg, ...)`, named constants
//!   (`pi`, `e`, `tau`), and numeric literals
//!
//! Identifiers are case-sensitive: `pi` is a constant, `PI` is an unknown variable.

mod builtins;
mod errors;
mod eval;
mod lexer;

pub use errors::EvalError;

/// Evaluate an arithmetic expression into a 64-bit float.
///
/// # Examples
///
/// ```rust
/// use fastnomicon::execute_math_expr;
///
/// assert_eq!(execute_math_expr("6/2*(1+2)").unwrap(), 9.0);
/// assert_eq!(execute_math_expr("max(10, 8, 20)").unwrap(), 20.0);
/// ```
///
/// # Errors
///
/// Returns [`EvalError::UnknownIdentifier`] for a name that is neither a constant nor
/// a function, [`EvalError::Syntax`] for malformed input, [`EvalError::Arity`] for a
/// wrong argument count, and [`EvalError::Domain`] for arguments outside a function's
/// domain (e.g. `nPr(5.5, 2)`).
pub fn execute_math_expr(input: &str) -> Result<f64, EvalError> {
    let tokens = lexer::tokenize(input)?;
    eval::evaluate(&tokens)
}
