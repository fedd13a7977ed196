//! Constant and function tables for the expression evaluator.
//!
//! Both tables are fixed at build time and matched case-sensitively. Dispatch is a
//! plain match over the name, which keeps the tables immutable and free of any
//! initialization order concerns.

use std::f64::consts;

use super::errors::EvalError;

/// Look up a named constant.
pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        "tau" => Some(consts::TAU),
        _ => None,
    }
}

/// A callable entry in the function table, tagged with its argument shape.
#[derive(Clone, Copy)]
pub(crate) enum Function {
    /// Exactly one argument (`sin`, `cos`, `tan`, `abs`).
    Unary(fn(f64) -> f64),
    /// One or more arguments, combined pairwise left-to-right (`min`, `max`).
    Fold(fn(f64, f64) -> f64),
    /// Exactly two arguments, with a restricted domain (`nPr`, `nCr`, `nMPr`).
    Binary(fn(f64, f64) -> Result<f64, String>),
}

/// Look up a named function.
pub(crate) fn function(name: &str) -> Option<Function> {
    match name {
        "sin" => Some(Function::Unary(f64::sin)),
        "cos" => Some(Function::Unary(f64::cos)),
        "tan" => Some(Function::Unary(f64::tan)),
        "abs" => Some(Function::Unary(f64::abs)),
        "min" => Some(Function::Fold(f64::min)),
        "max" => Some(Function::Fold(f64::max)),
        "nPr" => Some(Function::Binary(permutations)),
        "nCr" => Some(Function::Binary(combinations)),
        "nMPr" => Some(Function::Binary(power)),
        _ => None,
    }
}

impl Function {
    /// Apply the function to an already-evaluated argument list, checking arity.
    pub(crate) fn call(self, name: &str, args: &[f64]) -> Result<f64, EvalError> {
        let arity_error = |expected: &'static str| EvalError::Arity {
            name: name.to_string(),
            expected,
            found: args.len(),
        };

        match self {
            Self::Unary(func) => match args {
                [arg] => Ok(func(*arg)),
                _ => Err(arity_error("exactly 1")),
            },
            Self::Fold(func) => match args {
                [] => Err(arity_error("at least 1")),
                [first, rest @ ..] => Ok(rest.iter().fold(*first, |acc, &arg| func(acc, arg))),
            },
            Self::Binary(func) => match args {
                [left, right] => func(*left, *right).map_err(|reason| EvalError::Domain {
                    name: name.to_string(),
                    reason,
                }),
                _ => Err(arity_error("exactly 2")),
            },
        }
    }
}

/// Interpret a float as a counting number, rejecting negatives and fractions.
fn counting_number(value: f64) -> Result<u64, String> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(format!("expected a non-negative integer, found {}", value));
    }

    Ok(value as u64)
}

/// `nPr(n, r)` = n! / (n - r)!, the number of r-permutations of n items.
fn permutations(n: f64, r: f64) -> Result<f64, String> {
    let n = counting_number(n)?;
    let r = counting_number(r)?;

    if r > n {
        return Ok(0.0);
    }

    Ok((n - r + 1..=n).map(|k| k as f64).product())
}

/// `nCr(n, r)` = n! / (r! (n - r)!), the number of r-combinations of n items.
fn combinations(n: f64, r: f64) -> Result<f64, String> {
    let n = counting_number(n)?;
    let r = counting_number(r)?;

    if r > n {
        return Ok(0.0);
    }

    // Multiply and divide in lockstep so every intermediate value stays an
    // integer-valued float.
    let r = r.min(n - r);
    let value = (1..=r).fold(1.0, |acc, k| acc * ((n - r + k) as f64) / (k as f64));

    Ok(value)
}

/// `nMPr(n, r)` = n ** r, kept in exact agreement with the infix `**` operator.
fn power(n: f64, r: f64) -> Result<f64, String> {
    Ok(n.powf(r))
}
