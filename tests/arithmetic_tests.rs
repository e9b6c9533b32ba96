use rpncalc::errors::CalcError;
use rpncalc::evaluator::evaluate;
use rpncalc::{calculate, format_result};

#[test]
fn test_fractional_results() {
    assert_eq!(calculate("1/3").map(format_result), Ok("0.333333".to_string()));
    assert_eq!(calculate("7/2"), Ok(3.5));
}

#[test]
fn test_negative_results() {
    assert_eq!(calculate("3-10"), Ok(-7.0));
    assert_eq!(format_result(-7.0), "-7.000000");
}

#[test]
fn test_large_operands() {
    assert_eq!(calculate("1000000*1000000"), Ok(1e12));
    assert_eq!(calculate("4294967296+1"), Ok(4_294_967_297.0));
}

#[test]
fn test_leading_zeros() {
    assert_eq!(calculate("007+1"), Ok(8.0));
}

#[test]
fn test_division_by_computed_zero() {
    // Divisor is the result of an earlier operation
    assert_eq!(
        calculate("6/3-2"),
        Ok(0.0)
    );
    assert_eq!(
        evaluate("1 2 2 - /"),
        Err(CalcError::DivisionByZero { column: 9 })
    );
}

#[test]
fn test_single_operand() {
    assert_eq!(calculate("42"), Ok(42.0));
    assert_eq!(format_result(42.0), "42.000000");
}

#[test]
fn test_postfix_without_trailing_separator() {
    assert_eq!(evaluate("2 3 4 * +"), Ok(14.0));
    assert_eq!(evaluate("12 8+"), Ok(20.0));
}
