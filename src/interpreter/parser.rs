/// Core parsing logic and entry point.
///
/// Contains the `parse` entry point that lexes a source string, parses a
/// single expression, and rejects trailing input.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative tiers and the
/// right-associative exponentiation tier.
pub mod binary;

/// Unary and atomic expression parsing.
///
/// Handles unary plus/minus, numeric literals, and parenthesized groupings.
pub mod unary;

/// Maximum nesting depth accepted by the parser.
///
/// Recursion depth grows with unary-operator chains and parenthesis nesting;
/// inputs deeper than this fail with `CalculatorError::NestedTooDeeply`
/// instead of exhausting the call stack.
pub const MAX_NESTING_DEPTH: usize = 200;
