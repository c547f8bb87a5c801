use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::{CalcResult, CalculatorError},
    interpreter::{
        lexer::Token,
        parser::{MAX_NESTING_DEPTH, binary::parse_power, core::parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` (identity) and `-` (negation). Unary
/// operators are right-associative, so `--5` parses as `-(-5)`. They bind
/// looser than `**` on their left operand: `-2 ** 2` is `-(2 ** 2)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_power`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current recursion depth, checked against the nesting limit.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> CalcResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if depth > MAX_NESTING_DEPTH {
        return Err(CalculatorError::NestedTooDeeply);
    }
    match tokens.peek() {
        Some(Token::Plus) => {
            tokens.next();
            let expr = parse_unary(tokens, depth + 1)?;
            Ok(Expr::UnaryOp { op:   UnaryOperator::Plus,
                               expr: Box::new(expr), })
        },
        Some(Token::Minus) => {
            tokens.next();
            let expr = parse_unary(tokens, depth + 1)?;
            Ok(Expr::UnaryOp { op:   UnaryOperator::Minus,
                               expr: Box::new(expr), })
        },
        _ => parse_power(tokens, depth),
    }
}

/// Parses an atomic expression.
///
/// Atoms form the base of the expression grammar and include numeric literals
/// and parenthesized expressions. Every other token is rejected here, which
/// is what keeps identifiers, function calls, and stray operators out of the
/// accepted language.
///
/// Grammar:
/// ```text
///     atom := NUMBER
///           | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an atom.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// The parsed atom or a `CalculatorError` on failure.
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> CalcResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token::Integer(..) | Token::Real(..)) => parse_literal(tokens),
        Some(Token::LParen) => parse_grouping(tokens, depth),
        Some(tok) => Err(CalculatorError::UnexpectedToken { token: format!("{tok:?}"), }),
        None => Err(CalculatorError::UnexpectedEndOfInput),
    }
}

/// Parses a numeric literal.
///
/// Grammar: `literal := INTEGER | REAL`
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> CalcResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Integer(n)) => Ok(Expr::Literal { value: (*n).into(), }),
        Some(Token::Real(r)) => Ok(Expr::Literal { value: (*r).into(), }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `CalculatorError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> CalcResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();
    let expr = parse_expression(tokens, depth + 1)?;
    match tokens.next() {
        Some(Token::RParen) => Ok(expr),
        _ => Err(CalculatorError::ExpectedClosingParen),
    }
}
