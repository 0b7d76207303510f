//! Property-based tests for the step evaluator

use proptest::prelude::*;
use stepcalc::engine::StepEvaluator;
use stepcalc::session::Operator;

// ===== Strategy definitions =====

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
        Just(Operator::Power),
    ]
}

fn operand_strategy() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6f64
}

/// A first operand followed by (operator, operand) steps
fn sequence_strategy() -> impl Strategy<Value = (f64, Vec<(Operator, f64)>)> {
    (
        operand_strategy(),
        prop::collection::vec((operator_strategy(), operand_strategy()), 0..12),
    )
}

/// Compare as bits so NaN results from the same inputs count as equal
fn same(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}

proptest! {
    /// calculate() equals the manual left-to-right fold
    #[test]
    fn prop_calculate_matches_manual_fold((first, steps) in sequence_strategy()) {
        let mut evaluator = StepEvaluator::new();
        evaluator.add_operand(first);
        for (op, operand) in &steps {
            evaluator.add_operation(op.function()).unwrap();
            evaluator.add_operand(*operand);
        }

        let expected = steps
            .iter()
            .fold(first, |acc, (op, operand)| (op.function())(acc, *operand));
        let actual = evaluator.calculate().unwrap();
        prop_assert!(same(actual, expected), "{} != {}", actual, expected);
    }

    /// calculate() twice without new input returns identical values
    #[test]
    fn prop_calculate_is_idempotent((first, steps) in sequence_strategy()) {
        let mut evaluator = StepEvaluator::new();
        evaluator.add_operand(first);
        for (op, operand) in &steps {
            evaluator.add_operation(op.function()).unwrap();
            evaluator.add_operand(*operand);
        }

        let once = evaluator.calculate().unwrap();
        let twice = evaluator.calculate().unwrap();
        prop_assert!(same(once, twice));
    }

    /// reset() then add_operand(x) yields exactly x
    #[test]
    fn prop_reset_then_operand_is_identity(
        (first, steps) in sequence_strategy(),
        x in any::<f64>(),
    ) {
        let mut evaluator = StepEvaluator::new();
        evaluator.add_operand(first);
        for (op, operand) in &steps {
            evaluator.add_operation(op.function()).unwrap();
            evaluator.add_operand(*operand);
        }

        evaluator.reset();
        evaluator.add_operand(x);
        prop_assert!(same(evaluator.calculate().unwrap(), x));
    }

    /// A rejected operation leaves a fresh evaluator fresh
    #[test]
    fn prop_rejected_operation_does_not_mutate(op in operator_strategy(), x in operand_strategy()) {
        let mut evaluator = StepEvaluator::new();
        prop_assert!(evaluator.add_operation(op.function()).is_err());
        evaluator.add_operand(x);
        prop_assert_eq!(evaluator.calculate(), Some(x));
    }
}
