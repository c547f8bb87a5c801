use crate::{
    ast::UnaryOperator,
    error::{CalcResult, CalculatorError},
    interpreter::value::Number,
};

/// Evaluates a unary operation on a number.
///
/// `Plus` returns the operand unchanged; `Minus` negates it. Integer
/// negation is checked, so `- i64::MIN` reports overflow instead of
/// panicking.
///
/// # Example
/// ```
/// use minicalc::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary_op, value::Number},
/// };
///
/// let v = eval_unary_op(UnaryOperator::Minus, &Number::Integer(5)).unwrap();
/// assert_eq!(v, Number::Integer(-5));
///
/// let v = eval_unary_op(UnaryOperator::Plus, &Number::Real(1.5)).unwrap();
/// assert_eq!(v, Number::Real(1.5));
/// ```
pub fn eval_unary_op(op: UnaryOperator, value: &Number) -> CalcResult<Number> {
    match op {
        UnaryOperator::Plus => Ok(*value),
        UnaryOperator::Minus => match value {
            Number::Integer(n) => n.checked_neg()
                                   .map(Number::Integer)
                                   .ok_or(CalculatorError::Overflow),
            Number::Real(r) => Ok(Number::Real(-r)),
        },
    }
}
