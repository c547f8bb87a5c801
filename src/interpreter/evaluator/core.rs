use crate::{
    ast::Expr,
    error::CalcResult,
    interpreter::{
        evaluator::{binary::eval_binary_op, unary::eval_unary_op},
        value::Number,
    },
};

/// Evaluates an expression tree to a number.
///
/// The walk is recursive and post-order: children are evaluated before their
/// parent's operator is applied. Evaluation is a pure function of its input
/// with no retained state, so concurrent calls never interfere.
///
/// # Errors
/// Propagates any arithmetic error raised by an operator, such as division
/// by zero or integer overflow.
///
/// # Example
/// ```
/// use minicalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::eval_expression, value::Number},
/// };
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: Number::Integer(1), }),
///                             op:    BinaryOperator::Add,
///                             right: Box::new(Expr::Literal { value: Number::Integer(2), }), };
///
/// assert_eq!(eval_expression(&expr).unwrap(), Number::Integer(3));
/// ```
pub fn eval_expression(expr: &Expr) -> CalcResult<Number> {
    match expr {
        Expr::Literal { value } => Ok(*value),
        Expr::UnaryOp { op, expr } => {
            let operand = eval_expression(expr)?;
            eval_unary_op(*op, &operand)
        },
        Expr::BinaryOp { left, op, right } => {
            let left = eval_expression(left)?;
            let right = eval_expression(right)?;
            eval_binary_op(*op, &left, &right)
        },
    }
}
