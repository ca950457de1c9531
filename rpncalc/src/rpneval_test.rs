use rstest::rstest;

use crate::limits::Limits;
use crate::parser::{Operator, ShuntingParser};
use crate::rpneval::{apply, parse_literal, EvalErr, RPNEvaluator};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        assert!(($lhs - $rhs).abs() < 1.0e-10)
    };
}

fn eval(postfix: &str) -> Result<f64, EvalErr> {
    RPNEvaluator::new().eval_str(postfix)
}

#[test]
fn test_eval1() {
    let expr = ShuntingParser::parse_str("3+4*2/(1-5)^2^3").unwrap();
    fuzzy_eq!(RPNEvaluator::new().eval(&expr).unwrap(), 3.0001220703125);
}

#[test]
fn test_eval2() {
    fuzzy_eq!(eval("3 4 +").unwrap(), 7.0);
    fuzzy_eq!(eval("3 2 5 * +").unwrap(), 13.0);
    fuzzy_eq!(eval("10 4 -").unwrap(), 6.0);
    fuzzy_eq!(eval("7 2 /").unwrap(), 3.5);
    fuzzy_eq!(eval("2 10 ^").unwrap(), 1024.0);
}

#[test]
fn test_eval3() {
    // signed and fractional literals
    fuzzy_eq!(eval("-3 4 +").unwrap(), 1.0);
    fuzzy_eq!(eval("1.5 .25 *").unwrap(), 0.375);
    fuzzy_eq!(eval("-.5 2 *").unwrap(), -1.0);
    fuzzy_eq!(eval("5. 2 -").unwrap(), 3.0);
}

#[test]
fn repeated_separators() {
    fuzzy_eq!(eval("  3   4  +  ").unwrap(), 7.0);
}

#[rstest]
#[case("3 5", EvalErr::TooManyOperands(2))]
#[case("1 2 3 +", EvalErr::TooManyOperands(2))]
#[case("5 0 /", EvalErr::DivisionByZero)]
#[case("5 -0 /", EvalErr::DivisionByZero)]
#[case("5 0.0 /", EvalErr::DivisionByZero)]
#[case("3 +", EvalErr::InsufficientOperands)]
#[case("+", EvalErr::InsufficientOperands)]
#[case("", EvalErr::InsufficientOperands)]
#[case("   ", EvalErr::InsufficientOperands)]
#[case("3 4 %", EvalErr::InvalidToken(format!("%")))]
#[case("3 4 ++", EvalErr::InvalidToken(format!("++")))]
#[case("3.4.5", EvalErr::InvalidToken(format!("3.4.5")))]
#[case("1e3", EvalErr::InvalidToken(format!("1e3")))]
#[case("3 4 + x", EvalErr::InvalidToken(format!("x")))]
fn bad_eval(#[case] postfix: &str, #[case] expected: EvalErr) {
    assert_eq!(eval(postfix), Err(expected));
}

#[test]
fn first_error_aborts() {
    // division by zero is hit before the stray token
    assert_eq!(eval("1 0 / %"), Err(EvalErr::DivisionByZero));
}

#[test]
fn division_by_tiny_value_is_fine() {
    fuzzy_eq!(eval("1 0.5 /").unwrap(), 2.0);
    assert!(eval("1 0.0000001 /").unwrap() > 1.0e6);
}

#[test]
fn literals() {
    assert_eq!(parse_literal("12"), Some(12.0));
    assert_eq!(parse_literal("-12.5"), Some(-12.5));
    assert_eq!(parse_literal(".5"), Some(0.5));
    assert_eq!(parse_literal("-"), None);
    assert_eq!(parse_literal("."), None);
    assert_eq!(parse_literal("+3"), None);
    assert_eq!(parse_literal("3-"), None);
    assert_eq!(parse_literal("inf"), None);
}

#[test]
fn operators() {
    assert_eq!(apply(Operator::Add, 2.0, 3.0), Ok(5.0));
    assert_eq!(apply(Operator::Sub, 2.0, 3.0), Ok(-1.0));
    assert_eq!(apply(Operator::Mul, 2.0, 3.0), Ok(6.0));
    assert_eq!(apply(Operator::Div, 3.0, 2.0), Ok(1.5));
    assert_eq!(apply(Operator::Pow, 2.0, 3.0), Ok(8.0));
    assert_eq!(apply(Operator::Div, 3.0, 0.0), Err(EvalErr::DivisionByZero));
}

#[test]
fn token_limit() {
    let evaluator = RPNEvaluator::with_limits(Limits::unbounded().with_max_token_len(3));
    fuzzy_eq!(evaluator.eval_str("123 1 +").unwrap(), 124.0);
    assert_eq!(
        evaluator.eval_str("1234 1 +"),
        Err(EvalErr::TokenTooLong { token: format!("1234"), max: 3 })
    );
}

#[test]
fn expression_limit() {
    let evaluator = RPNEvaluator::with_limits(Limits::unbounded().with_max_expression_len(5));
    fuzzy_eq!(evaluator.eval_str("1 2 +").unwrap(), 3.0);
    assert_eq!(
        evaluator.eval_str("1 2 + "),
        Err(EvalErr::ExpressionTooLong { len: 6, max: 5 })
    );
}

#[test]
fn evaluations_are_independent() {
    let evaluator = RPNEvaluator::new();
    assert_eq!(evaluator.eval_str("1 2"), Err(EvalErr::TooManyOperands(2)));
    // nothing from the failed call is left behind
    assert_eq!(evaluator.eval_str("3 4 +"), Ok(7.0));
    assert_eq!(evaluator.eval_str("3 4 +"), Ok(7.0));
}
