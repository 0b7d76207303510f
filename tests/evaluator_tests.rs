// Integration tests for the step evaluator

use stepcalc::engine::{EvalError, StepEvaluator};

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

#[test]
fn test_simple_addition() {
    let mut evaluator = StepEvaluator::new();
    evaluator.add_operand(3.0);
    evaluator.add_operation(add).expect("operation after operand");
    evaluator.add_operand(4.0);

    assert_eq!(evaluator.calculate(), Some(7.0));
}

#[test]
fn test_chained_operations_fold_left_to_right() {
    let mut evaluator = StepEvaluator::new();
    evaluator.add_operand(7.0);
    evaluator.add_operation(add).unwrap();
    evaluator.add_operand(4.0);
    assert_eq!(evaluator.calculate(), Some(11.0));

    evaluator.add_operation(multiply).unwrap();
    evaluator.add_operand(2.0);

    // (7 + 4) * 2, not 7 + (4 * 2)
    assert_eq!(evaluator.calculate(), Some(22.0));
}

#[test]
fn test_no_precedence() {
    let mut evaluator = StepEvaluator::new();
    evaluator.add_operand(3.0);
    evaluator.add_operation(add).unwrap();
    evaluator.add_operand(4.0);
    evaluator.add_operation(multiply).unwrap();
    evaluator.add_operand(2.0);

    assert_eq!(evaluator.calculate(), Some(14.0));
}

#[test]
fn test_square_root_via_power() {
    let mut evaluator = StepEvaluator::new();
    evaluator.add_operand(9.0);
    evaluator.add_operation(f64::powf).unwrap();
    // The caller passes the reciprocal exponent
    evaluator.add_operand(0.5);

    assert_eq!(evaluator.calculate(), Some(3.0));
}

#[test]
fn test_single_operand_is_result() {
    let mut evaluator = StepEvaluator::new();
    evaluator.add_operand(-2.5);
    assert_eq!(evaluator.calculate(), Some(-2.5));
}

#[test]
fn test_calculate_is_idempotent() {
    let mut evaluator = StepEvaluator::new();
    evaluator.add_operand(10.0);
    evaluator.add_operation(|a, b| a / b).unwrap();
    evaluator.add_operand(4.0);

    let first = evaluator.calculate();
    let second = evaluator.calculate();
    assert_eq!(first, second);
    assert_eq!(first, Some(2.5));
}

#[test]
fn test_operation_before_operand_is_rejected() {
    let mut evaluator = StepEvaluator::new();
    let result = evaluator.add_operation(add);

    assert_eq!(result, Err(EvalError::InvalidSequence));
    assert!(evaluator.is_empty());
    assert!(!evaluator.has_pending_operation());

    // Behaves exactly like a fresh evaluator afterwards
    evaluator.add_operand(5.0);
    assert_eq!(evaluator.calculate(), Some(5.0));
}

#[test]
fn test_reset_discards_state() {
    let mut evaluator = StepEvaluator::new();
    evaluator.add_operand(1.0);
    evaluator.add_operation(add).unwrap();

    evaluator.reset();
    assert_eq!(evaluator.calculate(), None);
    assert_eq!(
        evaluator.add_operation(add),
        Err(EvalError::InvalidSequence)
    );

    evaluator.add_operand(8.0);
    assert_eq!(evaluator.calculate(), Some(8.0));
}

#[test]
fn test_exceptional_values_are_not_errors() {
    let mut evaluator = StepEvaluator::new();
    evaluator.add_operand(1.0);
    evaluator.add_operation(|a, b| a / b).unwrap();
    evaluator.add_operand(0.0);
    assert_eq!(evaluator.calculate(), Some(f64::INFINITY));

    // Infinity keeps flowing through later operations
    evaluator.add_operation(|a, b| a - b).unwrap();
    evaluator.add_operand(f64::INFINITY);
    assert!(evaluator.calculate().is_some_and(f64::is_nan));
}
