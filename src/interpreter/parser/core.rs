use logos::Logos;

use crate::{
    ast::Expr,
    error::{CalcResult, CalculatorError},
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

/// Parses a source string into an expression tree.
///
/// This is the entry point for parsing. The input is trimmed, lexed up
/// front, parsed as a single expression starting at the lowest-precedence
/// tier, and then checked for trailing tokens.
///
/// Grammar: `expression := additive`
///
/// # Errors
/// - `EmptyExpression` if the input is empty or contains only whitespace.
/// - `UnexpectedToken` if the input contains a character or token outside the
///   arithmetic grammar.
/// - `TrailingTokens` if input remains after a complete expression.
/// - Propagates any other parse error from sub-expression parsing.
///
/// # Example
/// ```
/// use minicalc::interpreter::parser::core::parse;
///
/// assert!(parse("1 + 2 * 3").is_ok());
/// assert!(parse("1 + spam").is_err());
/// assert!(parse("(1 + 2").is_err());
/// assert!(parse("").is_err());
/// ```
pub fn parse(text: &str) -> CalcResult<Expr> {
    let stripped = text.trim();
    if stripped.is_empty() {
        return Err(CalculatorError::EmptyExpression);
    }

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(stripped);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(CalculatorError::UnexpectedToken { token: lexer.slice().to_string(), });
            },
        }
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    if let Some(tok) = iter.next() {
        return Err(CalculatorError::TrailingTokens { token: format!("{tok:?}"), });
    }

    Ok(expr)
}

/// Parses a full expression from a token stream.
///
/// Begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current recursion depth, checked against the nesting limit.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut std::iter::Peekable<I>,
                               depth: usize)
                               -> CalcResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens, depth)
}
