use lolterpreter::{
    ast::{BinaryOperator, ValueType},
    error::RuntimeError,
    interpreter::{evaluator::core::Context, value::core::Value},
    util::num::Numeric,
};

fn arithmetic(op: BinaryOperator, left: impl Into<Value>, right: impl Into<Value>) -> Value {
    Context::eval_binary(op, &left.into(), &right.into(), 1).unwrap()
}

fn cast(value: impl Into<Value>, target: ValueType) -> Result<Value, RuntimeError> {
    value.into().cast(target, 1)
}

#[test]
fn truthiness() {
    let falsy = [Value::Noob,
                 Value::Troof(false),
                 Value::Numbr(0),
                 Value::Numbar(0.0),
                 Value::from(""),
                 Value::from("FAIL"),
                 Value::from("NOOB")];
    for value in falsy {
        assert!(!value.is_truthy(), "{value:?} should be falsy");
    }

    let truthy = [Value::Troof(true),
                  Value::Numbr(-3),
                  Value::Numbar(0.1),
                  Value::from("0"),
                  Value::from("fail"),
                  Value::from("noob"),
                  Value::from(" ")];
    for value in truthy {
        assert!(value.is_truthy(), "{value:?} should be truthy");
    }
}

#[test]
fn numeric_reduction() {
    assert_eq!(Value::Troof(false).to_numeric(), Some(Numeric::Numbr(0)));
    assert_eq!(Value::from("").to_numeric(), Some(Numeric::Numbr(0)));
    assert_eq!(Value::from("-12").to_numeric(), Some(Numeric::Numbr(-12)));
    assert_eq!(Value::from("2e2").to_numeric(), Some(Numeric::Numbar(200.0)));
    assert_eq!(Value::from("12 CATS").to_numeric(), None);
}

#[test]
fn literal_words_in_yarn_reduce_like_the_literals() {
    assert_eq!(Value::from("WIN").to_numeric(), Some(Numeric::Numbr(1)));
    assert_eq!(Value::from("FAIL").to_numeric(), Some(Numeric::Numbr(0)));
    assert_eq!(Value::from("NOOB").to_numeric(), Some(Numeric::Numbr(0)));
    assert_eq!(Value::from("win").to_numeric(), None);

    assert_eq!(arithmetic(BinaryOperator::Sum, "WIN", 5), Value::Numbr(6));
    assert_eq!(arithmetic(BinaryOperator::Produkt, "FAIL", 5), Value::Numbr(0));
    assert_eq!(arithmetic(BinaryOperator::Quoshunt, 8, "NOOB"), Value::Numbr(8));
}

#[test]
fn casts_to_numbers() {
    assert_eq!(cast("42", ValueType::Numbr).unwrap(), Value::Numbr(42));
    assert_eq!(cast("4.9", ValueType::Numbr).unwrap(), Value::Numbr(4));
    assert_eq!(cast(-4.9, ValueType::Numbr).unwrap(), Value::Numbr(-4));
    assert_eq!(cast(true, ValueType::Numbr).unwrap(), Value::Numbr(1));
    assert_eq!(cast(7, ValueType::Numbar).unwrap(), Value::Numbar(7.0));
    assert_eq!(cast("", ValueType::Numbar).unwrap(), Value::Numbar(0.0));
    assert!(matches!(cast("NOPE", ValueType::Numbr), Err(RuntimeError::InvalidCast { .. })));
    assert!(matches!(cast(1e300, ValueType::Numbr), Err(RuntimeError::InvalidCast { .. })));
}

#[test]
fn casts_to_yarn_and_troof() {
    assert_eq!(cast(2.5, ValueType::Yarn).unwrap(), Value::from("2.5"));
    assert_eq!(cast(3.0, ValueType::Yarn).unwrap(), Value::from("3.0"));
    assert_eq!(cast(false, ValueType::Yarn).unwrap(), Value::from("FAIL"));
    assert_eq!(cast("", ValueType::Troof).unwrap(), Value::Troof(false));
    assert_eq!(cast(5, ValueType::Troof).unwrap(), Value::Troof(true));
}

#[test]
fn noob_casts_to_zero_values() {
    assert_eq!(cast(Value::Noob, ValueType::Numbr).unwrap(), Value::Numbr(0));
    assert_eq!(cast(Value::Noob, ValueType::Numbar).unwrap(), Value::Numbar(0.0));
    assert_eq!(cast(Value::Noob, ValueType::Troof).unwrap(), Value::Troof(false));
    assert_eq!(cast(Value::Noob, ValueType::Yarn).unwrap(), Value::from(""));
    assert_eq!(cast(42, ValueType::Noob).unwrap(), Value::Noob);
}

#[test]
fn integer_arithmetic_stays_integral() {
    assert_eq!(arithmetic(BinaryOperator::Sum, 2, 3), Value::Numbr(5));
    assert_eq!(arithmetic(BinaryOperator::Quoshunt, 7, 2), Value::Numbr(3));
    assert_eq!(arithmetic(BinaryOperator::Mod, -7, 3), Value::Numbr(-1));
    assert_eq!(arithmetic(BinaryOperator::Produkt, "4", 2), Value::Numbr(8));
    assert_eq!(arithmetic(BinaryOperator::Diff, true, Value::Noob), Value::Numbr(1));
}

#[test]
fn any_numbar_operand_makes_a_numbar() {
    assert_eq!(arithmetic(BinaryOperator::Sum, 2, 0.5), Value::Numbar(2.5));
    assert_eq!(arithmetic(BinaryOperator::Produkt, 2.0, 3), Value::Numbar(6.0));
    assert_eq!(arithmetic(BinaryOperator::Sum, 1, "0.25"), Value::Numbar(1.25));
}

#[test]
fn two_yarn_operands_truncate() {
    assert_eq!(arithmetic(BinaryOperator::Sum, "1.9", "1.9"), Value::Numbr(2));
    assert_eq!(arithmetic(BinaryOperator::Produkt, "2", "3"), Value::Numbr(6));
}

#[test]
fn non_numeric_operands_count_as_zero() {
    assert_eq!(arithmetic(BinaryOperator::Sum, "CATS", 4), Value::Numbr(4));
    assert_eq!(arithmetic(BinaryOperator::Quoshunt, 9, "DOGS"), Value::Numbr(9));
}

#[test]
fn zero_divisor_is_treated_as_one() {
    assert_eq!(arithmetic(BinaryOperator::Quoshunt, 9, 0), Value::Numbr(9));
    assert_eq!(arithmetic(BinaryOperator::Mod, 9, 0), Value::Numbr(0));
    assert_eq!(arithmetic(BinaryOperator::Quoshunt, 4.5, 0.0), Value::Numbar(4.5));
    assert_eq!(arithmetic(BinaryOperator::Quoshunt, "9", "0.5"), Value::Numbr(9));
}

#[test]
fn overflow_is_reported() {
    let result = Context::eval_binary(BinaryOperator::Produkt,
                                      &Value::Numbr(i64::MAX),
                                      &Value::Numbr(2),
                                      12);
    assert!(matches!(result, Err(RuntimeError::Overflow { line: 12 })));
}

#[test]
fn equality_is_numeric() {
    let same = |a: Value, b: Value| Context::values_equal(&a, &b, 1).unwrap();

    assert!(same(Value::Numbr(1), Value::Numbar(1.0)));
    assert!(same(Value::Troof(true), Value::from("1")));
    assert!(same(Value::Noob, Value::from("")));
    assert!(!same(Value::Numbr(1), Value::Numbr(2)));
    assert!(matches!(Context::values_equal(&Value::from("A"), &Value::Numbr(1), 3),
                     Err(RuntimeError::NonNumericComparison { line: 3, .. })));
}

#[test]
fn extremum_returns_operands_unchanged() {
    let biggr = |a: Value, b: Value| arithmetic(BinaryOperator::Biggr, a, b);
    let smallr = |a: Value, b: Value| arithmetic(BinaryOperator::Smallr, a, b);

    assert_eq!(biggr(Value::from("3"), Value::Numbar(2.5)), Value::from("3"));
    assert_eq!(smallr(Value::from("3"), Value::Numbar(2.5)), Value::Numbar(2.5));
    assert_eq!(biggr(Value::Numbr(1), Value::Troof(true)), Value::Numbr(1));
}

#[test]
fn display_forms() {
    assert_eq!(Value::Noob.to_string(), "NOOB");
    assert_eq!(Value::Troof(true).to_string(), "WIN");
    assert_eq!(Value::Numbr(-4).to_string(), "-4");
    assert_eq!(Value::Numbar(0.1).to_string(), "0.1");
    assert_eq!(Value::Numbar(10.0).to_string(), "10.0");
    assert_eq!(Value::from("HAI").to_string(), "HAI");
}
