/// Convenience alias for results carrying a [`CalculatorError`].
pub type CalcResult<T> = Result<T, CalculatorError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing or evaluating an
/// expression.
///
/// Every failure path in the crate routes through this single type; the
/// parser and evaluator never panic on user input and never surface errors of
/// any other kind.
pub enum CalculatorError {
    /// The input was empty or contained only whitespace.
    EmptyExpression,
    /// Found a token that does not belong to the arithmetic grammar.
    UnexpectedToken {
        /// The offending token or source slice.
        token: String,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first extra token.
        token: String,
    },
    /// The expression exceeds the maximum supported nesting depth.
    NestedTooDeeply,
    /// Attempted division by zero (`/` or `//`).
    DivisionByZero,
    /// Attempted modulo by zero.
    ModuloByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// An integer was too large to be promoted to a real number exactly.
    LiteralTooLarge,
}

impl std::fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Expression cannot be empty"),

            Self::UnexpectedToken { token } => {
                write!(f, "Invalid syntax: unexpected token '{token}'.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Invalid syntax: unexpected end of input."),

            Self::ExpectedClosingParen => {
                write!(f, "Invalid syntax: expected closing parenthesis ')'.")
            },

            Self::TrailingTokens { token } => {
                write!(f, "Invalid syntax: unexpected trailing token '{token}'.")
            },

            Self::NestedTooDeeply => write!(f, "Expression is nested too deeply."),

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::ModuloByZero => write!(f, "Modulo by zero."),

            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),

            Self::LiteralTooLarge => write!(f, "Literal is too large."),
        }
    }
}

impl std::error::Error for CalculatorError {}
