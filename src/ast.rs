use crate::interpreter::value::Number;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` covers exactly three forms: numeric literals, unary operations, and
/// binary operations. Each node owns its children, so the tree is acyclic and
/// finite, and it is discarded after a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A parsed numeric constant.
    Literal {
        /// The constant value.
        value: Number,
    },
    /// A unary operation (`+x` or `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`); the result is always a real number.
    Div,
    /// Floor division (`//`); rounds toward negative infinity.
    FloorDiv,
    /// Modulo (`%`); the result's sign follows the divisor.
    Mod,
    /// Exponentiation (`**`); right-associative.
    Pow,
}

/// Represents a unary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (`+x`); the identity operation.
    Plus,
    /// Unary minus (`-x`); arithmetic negation.
    Minus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}
