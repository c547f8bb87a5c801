//! # minicalc
//!
//! minicalc is a small arithmetic expression evaluator written in Rust.
//! It parses and evaluates expressions built from numbers, the binary
//! operators `+ - * / % // **`, unary `+`/`-`, and parentheses.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::eval_expression, parser::core::parse, value::Number};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the literal, unary, and binary expression forms.
/// - Defines the binary and unary operator tags with their display forms.
pub mod ast;
/// Provides the unified error type for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression, as variants of a single `CalculatorError`
/// enum carrying a human-readable message.
///
/// # Responsibilities
/// - Defines the error variants for all failure modes.
/// - Implements message rendering and the standard error traits.
pub mod error;
/// Orchestrates the process of expression evaluation.
///
/// This module ties together the lexer, parser, evaluator, and value type to
/// provide a complete pipeline from source string to numeric result.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides checked conversions between integer and
/// floating-point types, used wherever a value crosses between the two
/// numeric representations.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32`, and `f64` without silent data
///   loss.
pub mod util;

/// Evaluates an arithmetic expression and returns the numeric result.
///
/// This function parses the provided source string into an expression tree
/// and folds it into a number. Each call is independent and stateless, so
/// evaluating the same string twice always yields the same result.
///
/// # Errors
/// Returns a [`error::CalculatorError`] if the input is empty, does not
/// conform to the arithmetic grammar, or fails during evaluation (for
/// example, division by zero).
///
/// # Examples
/// ```
/// use minicalc::{evaluate, interpreter::value::Number};
///
/// assert_eq!(evaluate("1 + 2").unwrap(), Number::Integer(3));
/// assert_eq!(evaluate("8 / 2").unwrap(), Number::Real(4.0));
/// assert_eq!(evaluate("2 ** 3 ** 2").unwrap(), Number::Integer(512));
///
/// // Unsupported syntax is rejected rather than silently coerced.
/// assert!(evaluate("1 + spam").is_err());
/// assert!(evaluate("").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<Number, error::CalculatorError> {
    let expr = parse(expression)?;
    eval_expression(&expr)
}
