/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST bottom-up, applying each operator's
/// numeric semantics. It is stateless: every call is a pure function of the
/// tree it receives.
///
/// # Responsibilities
/// - Evaluates AST nodes in post-order.
/// - Applies integer/real promotion rules per operator.
/// - Reports arithmetic errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for parsing.
///
/// The lexer reads the raw expression string and produces a stream of tokens
/// for numbers, operators, and parentheses. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Parses integer and real literals without silent overflow.
/// - Rejects any character outside the arithmetic grammar.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST respecting operator precedence, associativity, and parentheses.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, rejecting malformed or trailing input.
/// - Guards against pathologically deep nesting.
pub mod parser;
/// The value module defines the numeric type produced by evaluation.
///
/// Declares the two-variant `Number` type (integer or real) together with its
/// promotion and display rules.
///
/// # Responsibilities
/// - Defines the `Number` enum.
/// - Provides safe promotion from integer to real.
/// - Renders results the way the command line prints them.
pub mod value;
