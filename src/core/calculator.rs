use crate::core::{Arithmetic, Operation, Predecessor, Successor};
use crate::utils::error::{CalcError, Result};

/// Adder/subtractor over injected unary steps. Which release of the step
/// dependency is wired in is the caller's choice; the call-site contract
/// never changes.
pub struct UnaryCalculator<S: Successor, P: Predecessor> {
    succ: S,
    prev: P,
}

impl<S: Successor, P: Predecessor> UnaryCalculator<S, P> {
    pub fn new(succ: S, prev: P) -> Self {
        Self { succ, prev }
    }
}

impl<S: Successor, P: Predecessor> Arithmetic for UnaryCalculator<S, P> {
    /// Applies the successor to `lhs` exactly `rhs` times. `rhs` must be
    /// non-negative.
    fn add(&self, lhs: i64, rhs: i64) -> Result<i64> {
        if rhs < 0 {
            return Err(CalcError::InvalidArgumentError {
                operation: Operation::Add,
                rhs,
                reason: "rhs must be non-negative",
            });
        }

        let mut acc = lhs;
        for _ in 0..rhs {
            acc = self.succ.succ(acc);
        }
        Ok(acc)
    }

    /// Applies the predecessor to `lhs` exactly `|rhs|` times. `rhs` must be
    /// non-positive.
    fn sub(&self, lhs: i64, rhs: i64) -> Result<i64> {
        if rhs > 0 {
            return Err(CalcError::InvalidArgumentError {
                operation: Operation::Sub,
                rhs,
                reason: "rhs must be non-positive",
            });
        }

        let mut acc = lhs;
        for _ in 0..rhs.unsigned_abs() {
            acc = self.prev.prev(acc);
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    struct CountingStep {
        calls: Arc<AtomicU64>,
        delta: i64,
    }

    impl CountingStep {
        fn new(delta: i64) -> Self {
            Self {
                calls: Arc::new(AtomicU64::new(0)),
                delta,
            }
        }

        fn calls(&self) -> u64 {
            self.calls.load(Ordering::Relaxed)
        }
    }

    impl Successor for CountingStep {
        fn succ(&self, value: i64) -> i64 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            value + self.delta
        }
    }

    impl Predecessor for CountingStep {
        fn prev(&self, value: i64) -> i64 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            value - self.delta
        }
    }

    fn unit_calculator() -> UnaryCalculator<CountingStep, CountingStep> {
        UnaryCalculator::new(CountingStep::new(1), CountingStep::new(1))
    }

    #[test]
    fn test_add_identity_at_zero() {
        let calc = unit_calculator();
        assert_eq!(calc.add(5, 0).unwrap(), 5);
        assert_eq!(calc.add(-5, 0).unwrap(), -5);
    }

    #[test]
    fn test_sub_identity_at_zero() {
        let calc = unit_calculator();
        assert_eq!(calc.sub(5, 0).unwrap(), 5);
        assert_eq!(calc.sub(-5, 0).unwrap(), -5);
    }

    #[test]
    fn test_add_counts_up() {
        let calc = unit_calculator();
        assert_eq!(calc.add(2, 3).unwrap(), 5);
        assert_eq!(calc.add(-10, 4).unwrap(), -6);
    }

    #[test]
    fn test_sub_counts_down() {
        let calc = unit_calculator();
        assert_eq!(calc.sub(10, -4).unwrap(), 6);
        assert_eq!(calc.sub(-2, -3).unwrap(), -5);
    }

    #[test]
    fn test_add_rejects_negative_rhs() {
        let calc = unit_calculator();
        let err = calc.add(5, -1).unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidArgumentError {
                operation: Operation::Add,
                rhs: -1,
                ..
            }
        ));
    }

    #[test]
    fn test_sub_rejects_positive_rhs() {
        let calc = unit_calculator();
        let err = calc.sub(5, 1).unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidArgumentError {
                operation: Operation::Sub,
                rhs: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_add_applies_successor_exactly_rhs_times() {
        let succ = CountingStep::new(1);
        let calc = UnaryCalculator::new(succ.clone(), CountingStep::new(1));

        calc.add(0, 17).unwrap();
        assert_eq!(succ.calls(), 17);

        calc.add(100, 0).unwrap();
        assert_eq!(succ.calls(), 17);
    }

    #[test]
    fn test_sub_applies_predecessor_exactly_abs_rhs_times() {
        let prev = CountingStep::new(1);
        let calc = UnaryCalculator::new(CountingStep::new(1), prev.clone());

        calc.sub(0, -9).unwrap();
        assert_eq!(prev.calls(), 9);
    }

    #[test]
    fn test_injected_step_semantics_flow_through() {
        // A step of 2 must double the distance covered.
        let calc = UnaryCalculator::new(CountingStep::new(2), CountingStep::new(2));
        assert_eq!(calc.add(1, 5).unwrap(), 11);
        assert_eq!(calc.sub(11, -5).unwrap(), 1);
    }

    #[test]
    fn test_failed_call_applies_no_steps() {
        let succ = CountingStep::new(1);
        let prev = CountingStep::new(1);
        let calc = UnaryCalculator::new(succ.clone(), prev.clone());

        assert!(calc.add(5, -3).is_err());
        assert!(calc.sub(5, 3).is_err());
        assert_eq!(succ.calls(), 0);
        assert_eq!(prev.calls(), 0);
    }
}
