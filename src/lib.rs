//! Parsers for arithmetic expressions and bilingual duration strings.
//!
//! This crate bundles two small, independent text-processing pipelines intended to be
//! embedded in a larger application:
//!
//! - **Expressions**: [`execute_math_expr`] tokenizes and evaluates a written math
//!   expression (`"6/2*(1+2)"`, `"sin(pi/2)"`, `"nCr(10,2)"`) into an [`f64`] in a
//!   single precedence-climbing pass.
//! - **Durations**: [`parse_timestring`] scans free-form English/Indonesian duration
//!   text (`"1h30s"`, `"1 jam 30 menit 500 millis"`) into an ordered list of
//!   [`TimeTuple`] values, and [`parse_timestring_as_duration`] reduces that list into
//!   a single [`std::time::Duration`].
//!
//! Both pipelines are pure functions over immutable lookup tables; they hold no state
//! and can be called freely from multiple threads.
//!
//! # Examples
//!
//! ```rust
//! use fastnomicon::{execute_math_expr, parse_timestring, TimeScale, TimeTuple};
//!
//! let value = execute_math_expr("2 ** 3 + 1").unwrap();
//! assert_eq!(value, 9.0);
//!
//! let tuples = parse_timestring("1h30s").unwrap();
//! assert_eq!(
//!     tuples,
//!     vec![
//!         TimeTuple::make(1, TimeScale::Hours),
//!         TimeTuple::make(30, TimeScale::Seconds),
//!     ],
//! );
//! ```

#![deny(clippy::all)]

pub mod math;
pub mod timestring;

pub use crate::math::{execute_math_expr, EvalError};
pub use crate::timestring::{
    parse_timestring, parse_timestring_as_duration, ParseError, ParseErrorKind, TimeScale,
    TimeTuple,
};
