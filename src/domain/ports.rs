use crate::domain::model::{Operation, StepVersion};
use crate::utils::error::Result;

/// Unary successor supplied by the step dependency: maps an integer to
/// "one more". Implementations must be pure.
pub trait Successor: Send + Sync {
    fn succ(&self, value: i64) -> i64;
}

/// Unary predecessor supplied by the step dependency: maps an integer to
/// "one less". Implementations must be pure.
pub trait Predecessor: Send + Sync {
    fn prev(&self, value: i64) -> i64;
}

impl Successor for Box<dyn Successor> {
    fn succ(&self, value: i64) -> i64 {
        self.as_ref().succ(value)
    }
}

impl Predecessor for Box<dyn Predecessor> {
    fn prev(&self, value: i64) -> i64 {
        self.as_ref().prev(value)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn operation(&self) -> Operation;
    fn lhs(&self) -> i64;
    fn rhs(&self) -> i64;
    fn step_version(&self) -> StepVersion;
    fn max_steps(&self) -> u64;
}

/// The arithmetic surface the engine drives.
pub trait Arithmetic: Send + Sync {
    fn add(&self, lhs: i64, rhs: i64) -> Result<i64>;
    fn sub(&self, lhs: i64, rhs: i64) -> Result<i64>;
}
