use minicalc::{error::CalculatorError, evaluate, interpreter::value::Number};

fn assert_integer(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(Number::Integer(n)) if n == expected => {},
        other => panic!("Expected Integer({expected}), but '{src}' evaluated to {other:?}"),
    }
}

fn assert_real(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(Number::Real(r)) if (r - expected).abs() < 1e-12 => {},
        other => panic!("Expected Real({expected}), but '{src}' evaluated to {other:?}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(result) = evaluate(src) {
        panic!("'{src}' evaluated to {result:?} but was expected to fail");
    }
}

#[test]
fn basic_operations() {
    assert_integer("1 + 2", 3);
    assert_integer("5 - 7", -2);
    assert_integer("3 * 4", 12);
    assert_real("8 / 2", 4.0);
}

#[test]
fn advanced_operations() {
    assert_integer("2 ** 3", 8);
    assert_integer("7 % 3", 1);
    assert_integer("7 // 3", 2);
}

#[test]
fn parentheses_and_unary() {
    assert_integer("-(1 + 2) * 3", -9);
    assert_real("(1 + 2) / (3 + 4)", 3.0 / 7.0);
    assert_integer("+5", 5);
    assert_integer("--5", 5);
    assert_integer("((((7))))", 7);
}

#[test]
fn precedence_and_associativity() {
    assert_integer("1 + 2 * 3", 7);
    assert_integer("10 - 4 - 3", 3);
    assert_integer("100 // 10 // 2", 5);
    // `**` is right-associative: 2 ** (3 ** 2), not (2 ** 3) ** 2.
    assert_integer("2 ** 3 ** 2", 512);
    // Unary minus binds looser than `**` on its left operand.
    assert_integer("-2 ** 2", -4);
    assert_integer("(-2) ** 2", 4);
    assert_integer("2 * -3 ** 2", -18);
}

#[test]
fn floored_division_and_modulo() {
    assert_integer("-7 // 2", -4);
    assert_integer("7 // -2", -4);
    assert_integer("-7 % 3", 2);
    assert_integer("7 % -3", -2);
    assert_real("-7.0 // 2", -4.0);
    assert_real("-7.5 % 3", 1.5);
}

#[test]
fn numeric_promotion() {
    assert_real("1 + 2.5", 3.5);
    assert_real("2.0 * 3", 6.0);
    assert_real("2 ** -1", 0.5);
    assert_real("2 ** 0.5", std::f64::consts::SQRT_2);
    assert_integer("2 ** 0", 1);
    assert_real("1e3 + 1", 1001.0);
    assert_real(".5 + .5", 1.0);
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(evaluate("1 / 0"), Err(CalculatorError::DivisionByZero)));
    assert!(matches!(evaluate("1 // 0"), Err(CalculatorError::DivisionByZero)));
    assert!(matches!(evaluate("1.0 / 0.0"), Err(CalculatorError::DivisionByZero)));
    assert!(matches!(evaluate("7.0 // 0"), Err(CalculatorError::DivisionByZero)));
    assert!(matches!(evaluate("1 % 0"), Err(CalculatorError::ModuloByZero)));
    assert!(matches!(evaluate("1.5 % 0.0"), Err(CalculatorError::ModuloByZero)));
    assert!(matches!(evaluate("0 ** -1"), Err(CalculatorError::DivisionByZero)));
}

#[test]
fn integer_overflow_is_an_error() {
    assert!(matches!(evaluate("9223372036854775807 + 1"),
                     Err(CalculatorError::Overflow)));
    assert!(matches!(evaluate("2 ** 70"), Err(CalculatorError::Overflow)));
    assert!(matches!(evaluate("-9223372036854775807 - 2"),
                     Err(CalculatorError::Overflow)));
}

#[test]
fn invalid_input() {
    assert!(matches!(evaluate(""), Err(CalculatorError::EmptyExpression)));
    assert!(matches!(evaluate("   \t "), Err(CalculatorError::EmptyExpression)));
    assert_failure("1 + spam");
    assert_failure("spam");
    assert_failure("(1 + 2");
    assert_failure("1 + 2)");
    assert_failure("1 +");
    assert_failure("1 2");
    assert_failure("2 ** ** 2");
    assert_failure("1 < 2");
    assert_failure("\"text\"");
}

#[test]
fn deep_nesting_is_rejected() {
    let src = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert!(matches!(evaluate(&src), Err(CalculatorError::NestedTooDeeply)));

    // Depths below the limit still parse.
    let src = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_integer(&src, 1);
}

#[test]
fn whitespace_is_insignificant() {
    assert_integer("  1+2  ", 3);
    assert_integer("(1\t+ 2) *\n3", 9);
}

#[test]
fn evaluation_is_idempotent() {
    let first = evaluate("-(1 + 2) * 3").unwrap();
    let second = evaluate("-(1 + 2) * 3").unwrap();
    assert_eq!(first, second);

    let first = evaluate("(1 + 2) / (3 + 4)").unwrap();
    let second = evaluate("(1 + 2) / (3 + 4)").unwrap();
    assert_eq!(first, second);
}

#[test]
fn display_distinguishes_integer_and_real() {
    assert_eq!(evaluate("1 + 2").unwrap().to_string(), "3");
    assert_eq!(evaluate("8 / 2").unwrap().to_string(), "4.0");
    assert_eq!(evaluate("2 ** -1").unwrap().to_string(), "0.5");
    assert_eq!(evaluate("-(1 + 2) * 3").unwrap().to_string(), "-9");
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(evaluate("").unwrap_err().to_string(), "Expression cannot be empty");
    assert_eq!(evaluate("1 / 0").unwrap_err().to_string(), "Division by zero.");
    assert!(evaluate("1 + spam").unwrap_err()
                                .to_string()
                                .starts_with("Invalid syntax"));
    assert!(evaluate("(1 + 2").unwrap_err()
                              .to_string()
                              .contains("closing parenthesis"));
}
