use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::CalcResult,
    interpreter::{
        lexer::Token,
        parser::unary::{parse_atom, parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> CalcResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `//`, and `%`. Each operand
/// is a unary expression, so `2 * -3` parses without parentheses.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> CalcResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::FloorDiv
                       | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses an exponentiation expression.
///
/// `**` is right-associative, so `2 ** 3 ** 2` parses as `2 ** (3 ** 2)`.
/// The right operand is a unary expression, which makes `2 ** -3` legal and
/// keeps the chain right-associative, since unary descends back into this
/// tier. The left operand is an atom: `-2 ** 2` is `-(2 ** 2)` because unary
/// minus is handled above this tier.
///
/// The rule is: `power := atom ("**" unary)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current recursion depth.
///
/// # Returns
/// An exponentiation expression tree, or the bare atom when no `**` follows.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> CalcResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let base = parse_atom(tokens, depth)?;
    if let Some(Token::DoubleStar) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens, depth)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(exponent), });
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `//`, `%`, `**`). Returns `None` for all other
/// tokens.
///
/// # Example
/// ```
/// use minicalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}
