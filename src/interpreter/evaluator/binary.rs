use crate::{
    ast::BinaryOperator,
    error::{CalcResult, CalculatorError},
    interpreter::value::Number,
    util::num::i64_to_u32_checked,
};

/// Evaluates a binary operation on two numbers.
///
/// Dispatches to the operator-specific routine. Promotion follows standard
/// arithmetic rules: two integers stay integral wherever the operator allows
/// it, while true division and any real operand produce a real result.
///
/// # Errors
/// - `DivisionByZero` / `ModuloByZero` for zero divisors.
/// - `Overflow` when checked integer arithmetic wraps.
/// - `LiteralTooLarge` when an integer cannot be promoted to a real exactly.
///
/// # Example
/// ```
/// use minicalc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary_op, value::Number},
/// };
///
/// let v = eval_binary_op(BinaryOperator::Mul, &Number::Integer(3), &Number::Integer(4)).unwrap();
/// assert_eq!(v, Number::Integer(12));
///
/// // True division always produces a real.
/// let v = eval_binary_op(BinaryOperator::Div, &Number::Integer(8), &Number::Integer(2)).unwrap();
/// assert_eq!(v, Number::Real(4.0));
/// ```
pub fn eval_binary_op(op: BinaryOperator, left: &Number, right: &Number) -> CalcResult<Number> {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul => {
            eval_arithmetic(op, left, right)
        },
        BinaryOperator::Div => eval_div(left, right),
        BinaryOperator::FloorDiv => eval_floor_div(left, right),
        BinaryOperator::Mod => eval_mod(left, right),
        BinaryOperator::Pow => eval_pow(left, right),
    }
}

/// Evaluates addition, subtraction, and multiplication.
///
/// Integer operands use checked arithmetic; mixed operands are promoted to
/// real.
fn eval_arithmetic(op: BinaryOperator, left: &Number, right: &Number) -> CalcResult<Number> {
    use BinaryOperator::{Add, Mul, Sub};

    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => match op {
            Add => a.checked_add(*b),
            Sub => a.checked_sub(*b),
            Mul => a.checked_mul(*b),
            _ => unreachable!(),
        }
        .map(Number::Integer)
        .ok_or(CalculatorError::Overflow),
        _ => {
            let l = left.as_real()?;
            let r = right.as_real()?;
            Ok(Number::Real(match op {
                                Add => l + r,
                                Sub => l - r,
                                Mul => l * r,
                                _ => unreachable!(),
                            }))
        },
    }
}

/// Evaluates true division.
///
/// The result is always a real number, even for two integer operands:
/// `8 / 2` is `4.0`.
fn eval_div(left: &Number, right: &Number) -> CalcResult<Number> {
    let l = left.as_real()?;
    let r = right.as_real()?;
    if r == 0.0 {
        return Err(CalculatorError::DivisionByZero);
    }
    Ok(Number::Real(l / r))
}

/// Evaluates floor division.
///
/// Rounds toward negative infinity, so `-7 // 2` is `-4`, not `-3`. Two
/// integer operands produce an integer; otherwise the result is a real.
fn eval_floor_div(left: &Number, right: &Number) -> CalcResult<Number> {
    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => {
            if *b == 0 {
                return Err(CalculatorError::DivisionByZero);
            }
            // Rejects i64::MIN // -1 before the plain remainder below.
            let q = a.checked_div(*b).ok_or(CalculatorError::Overflow)?;
            let r = a % b;
            Ok(Number::Integer(if r != 0 && (r < 0) != (*b < 0) { q - 1 } else { q }))
        },
        _ => {
            let l = left.as_real()?;
            let r = right.as_real()?;
            if r == 0.0 {
                return Err(CalculatorError::DivisionByZero);
            }
            Ok(Number::Real((l / r).floor()))
        },
    }
}

/// Evaluates the modulo operation with floored semantics.
///
/// The result's sign follows the divisor: `-7 % 3` is `2` and `7 % -3` is
/// `-2`.
fn eval_mod(left: &Number, right: &Number) -> CalcResult<Number> {
    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => {
            if *b == 0 {
                return Err(CalculatorError::ModuloByZero);
            }
            let r = a.checked_rem(*b).ok_or(CalculatorError::Overflow)?;
            Ok(Number::Integer(if r != 0 && (r < 0) != (*b < 0) { r + b } else { r }))
        },
        _ => {
            let l = left.as_real()?;
            let r = right.as_real()?;
            if r == 0.0 {
                return Err(CalculatorError::ModuloByZero);
            }
            let m = l % r;
            Ok(Number::Real(if m != 0.0 && (m < 0.0) != (r < 0.0) { m + r } else { m }))
        },
    }
}

/// Evaluates exponentiation.
///
/// Integer base and non-negative integer exponent use checked arithmetic and
/// stay integral. A negative integer exponent promotes to real instead of
/// truncating toward zero, so `2 ** -1` is `0.5`. A zero base cannot be
/// raised to a negative power.
fn eval_pow(base: &Number, exponent: &Number) -> CalcResult<Number> {
    match (base, exponent) {
        (Number::Integer(b), Number::Integer(e)) => {
            if *e < 0 {
                if *b == 0 {
                    return Err(CalculatorError::DivisionByZero);
                }
                Ok(Number::Real(base.as_real()?.powf(exponent.as_real()?)))
            } else {
                b.checked_pow(i64_to_u32_checked(*e)?)
                 .map(Number::Integer)
                 .ok_or(CalculatorError::Overflow)
            }
        },
        _ => {
            let l = base.as_real()?;
            let r = exponent.as_real()?;
            if l == 0.0 && r < 0.0 {
                return Err(CalculatorError::DivisionByZero);
            }
            Ok(Number::Real(l.powf(r)))
        },
    }
}
