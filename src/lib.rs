pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::steps::{successor_for, DecrementStep, IncrementStep, IncrementStepV2};
pub use core::{calculator::UnaryCalculator, engine::CalcEngine};
pub use domain::model::{EvalOutcome, EvalRequest, Operation, StepVersion};
pub use utils::error::{CalcError, Result};
