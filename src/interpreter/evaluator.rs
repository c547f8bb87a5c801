/// Core evaluation logic.
///
/// Contains the recursive post-order walk that folds an expression tree into
/// a number.
pub mod core;

/// Unary operator evaluation.
///
/// Implements unary plus and arithmetic negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements addition, subtraction, multiplication, true division, floor
/// division, modulo, and exponentiation, including the integer/real
/// promotion rules for each.
pub mod binary;
