use oop_math::{add_five, add_ten, checked_add_five, MathError, Operand, Operation};

const SAMPLES: [i64; 9] = [-1_000_000, -17, -10, -5, -1, 0, 1, 5, 999_999];

#[test]
fn test_add_five_and_add_ten_offsets() {
    for x in SAMPLES {
        assert_eq!(add_five(x), x + 5);
        assert_eq!(add_ten(x), x + 10);
    }
}

#[test]
fn test_composition_commutes() {
    for x in SAMPLES {
        assert_eq!(add_five(add_ten(x)), add_ten(add_five(x)));
    }
    for x in [-2.5_f64, 0.0, 0.125, 1e9] {
        assert_eq!(add_five(add_ten(x)), add_ten(add_five(x)));
    }
}

#[test]
fn test_zero_identities() {
    assert_eq!(add_five(0), 5);
    assert_eq!(add_ten(0), 10);
    assert_eq!(add_five(0.0_f64), 5.0);
}

#[test]
fn test_string_operand_is_rejected() {
    let err = "five".parse::<Operand>().unwrap_err();
    assert!(matches!(err, MathError::InvalidOperand { ref value } if value == "five"));
}

#[test]
fn test_runtime_operation_agrees_with_functions() {
    let five = Operation::AddFive.apply(Operand::Int(5)).unwrap();
    assert_eq!(five, Operand::Int(add_five(5)));

    let ten = Operation::AddTen.apply(Operand::Float(1.5)).unwrap();
    assert_eq!(ten, Operand::Float(add_ten(1.5)));
}

#[test]
fn test_checked_overflow_surfaces_error() {
    assert!(matches!(
        checked_add_five(i64::MAX - 4),
        Err(MathError::Overflow { .. })
    ));
    assert!(matches!(
        Operation::AddTen.apply(Operand::Int(i64::MAX)),
        Err(MathError::Overflow { .. })
    ));
}

#[test]
fn test_integer_text_past_i64_is_not_rounded() {
    for text in ["9223372036854775808", "-9223372036854775809"] {
        assert!(matches!(
            text.parse::<Operand>(),
            Err(MathError::OperandOutOfRange { .. })
        ));
    }
}
