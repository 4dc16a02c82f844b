use crate::domain::model::StepVersion;
use crate::domain::ports::{Predecessor, Successor};

/// Successor from the first release line of the step package: plain unit
/// increment, wrapping at `i64::MAX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementStep;

impl Successor for IncrementStep {
    fn succ(&self, value: i64) -> i64 {
        value.wrapping_add(1)
    }
}

/// Successor from the renamed release line. The exported symbol changed
/// between releases; the unary contract did not. The only delta is
/// trace-level instrumentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementStepV2;

impl Successor for IncrementStepV2 {
    fn succ(&self, value: i64) -> i64 {
        tracing::trace!(value, "succ_v2");
        value.wrapping_add(1)
    }
}

/// Predecessor from the companion step package: unit decrement, wrapping at
/// `i64::MIN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecrementStep;

impl Predecessor for DecrementStep {
    fn prev(&self, value: i64) -> i64 {
        value.wrapping_sub(1)
    }
}

/// Resolution point: picks the successor release to wire in.
pub fn successor_for(version: StepVersion) -> Box<dyn Successor> {
    match version {
        StepVersion::V1 => Box::new(IncrementStep),
        StepVersion::V2 => Box::new(IncrementStepV2),
    }
}
