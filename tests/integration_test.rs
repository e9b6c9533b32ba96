// Integration tests for translation followed by evaluation

use rpncalc::calculate;
use rpncalc::errors::CalcError;
use rpncalc::evaluator::evaluate;
use rpncalc::memory::entry::Operator;
use rpncalc::notation::translate;

/// Translate, check the postfix form, then evaluate it
fn check(infix: &str, expected_postfix: &str, expected_value: f64) {
    let postfix = translate(infix).expect("Translation failed");
    assert_eq!(postfix.trim_end(), expected_postfix, "postfix of {:?}", infix);

    let value = evaluate(&postfix).expect("Evaluation failed");
    assert_eq!(value, expected_value, "value of {:?}", infix);
}

#[test]
fn test_precedence() {
    check("2+3*4", "2 3 4 * +", 14.0);
}

#[test]
fn test_left_associativity() {
    check("8-3-2", "8 3 - 2 -", 3.0);
}

#[test]
fn test_multi_digit_operands() {
    check("12+8", "12 8 +", 20.0);
}

#[test]
fn test_mixed_precedence() {
    check("6/3+2*5", "6 3 / 2 5 * +", 12.0);
}

#[test]
fn test_additive_chain_keeps_token_order() {
    // Same-precedence chain: operands in order, then each operator right after its right operand
    check("1+2-3+4", "1 2 + 3 - 4 +", 4.0);
    check("10-2-3-4", "10 2 - 3 - 4 -", 1.0);
}

#[test]
fn test_multiplicative_chain_left_to_right() {
    check("8/4/2", "8 4 / 2 /", 1.0);
    check("2*3/4", "2 3 * 4 /", 1.5);
}

#[test]
fn test_low_after_high_precedence() {
    check("2*3+4", "2 3 * 4 +", 10.0);
    check("2*3-4*5", "2 3 * 4 5 * -", -14.0);
}

#[test]
fn test_whitespace_tolerance() {
    assert_eq!(calculate("1 + 2"), calculate("1+2"));
    assert_eq!(translate(" 1 +\t2 ").unwrap(), "1 2 + ");
}

#[test]
fn test_invalid_character() {
    let err = calculate("3+x").unwrap_err();
    assert_eq!(err, CalcError::InvalidToken { ch: 'x', column: 3 });
    assert!(err.to_string().contains("'x'"));
}

#[test]
fn test_parentheses_are_rejected() {
    assert_eq!(
        translate("(1+2)"),
        Err(CalcError::InvalidToken { ch: '(', column: 1 })
    );
}

#[test]
fn test_decimal_point_is_rejected() {
    assert_eq!(
        translate("1.5+2"),
        Err(CalcError::InvalidToken { ch: '.', column: 2 })
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        calculate("5/0"),
        Err(CalcError::DivisionByZero { column: 5 })
    );
    // Deterministic across runs
    assert_eq!(calculate("5/0"), calculate("5/0"));
}

#[test]
fn test_zero_dividend_is_fine() {
    assert_eq!(calculate("0/5"), Ok(0.0));
}

#[test]
fn test_empty_input() {
    assert_eq!(translate(""), Ok(String::new()));
    assert_eq!(
        calculate(""),
        Err(CalcError::MalformedExpression { remaining: 0 })
    );
}

#[test]
fn test_bare_operator_fails_in_evaluation() {
    assert_eq!(translate("*"), Ok("* ".to_string()));
    assert_eq!(
        calculate("*"),
        Err(CalcError::InsufficientOperands {
            operator: Operator::Mul,
            column: 1
        })
    );
}

#[test]
fn test_dangling_operator() {
    assert!(matches!(
        calculate("1+"),
        Err(CalcError::InsufficientOperands {
            operator: Operator::Add,
            ..
        })
    ));
}

#[test]
fn test_adjacent_numbers_leave_extra_values() {
    assert_eq!(
        calculate("1 2"),
        Err(CalcError::MalformedExpression { remaining: 2 })
    );
}

#[test]
fn test_idempotent() {
    let inputs = ["2+3*4", "8-3-2", "3+x", "5/0", "", "7"];
    for input in inputs {
        assert_eq!(calculate(input), calculate(input), "input {:?}", input);
        assert_eq!(translate(input), translate(input), "input {:?}", input);
    }
}

#[test]
fn test_long_expression_has_no_fixed_buffer() {
    let infix = vec!["1"; 500].join("+");
    let postfix = translate(&infix).unwrap();
    assert!(postfix.len() > 25);
    assert_eq!(evaluate(&postfix), Ok(500.0));
}
