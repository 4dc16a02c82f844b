pub mod calculator;
pub mod engine;

pub use crate::domain::model::{EvalOutcome, EvalRequest, Operation, StepVersion};
pub use crate::domain::ports::{Arithmetic, ConfigProvider, Predecessor, Successor};
pub use crate::utils::error::Result;
