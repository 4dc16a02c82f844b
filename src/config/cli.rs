use crate::config::DEFAULT_MAX_STEPS;
use crate::core::{ConfigProvider, Operation, StepVersion};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_step_budget, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "step-calc")]
#[command(about = "A unary step calculator with swappable step dependencies")]
pub struct CliConfig {
    /// Operation to evaluate: add or sub
    pub operation: Operation,

    /// Left operand
    #[arg(allow_negative_numbers = true)]
    pub lhs: i64,

    /// Right operand: non-negative for add, non-positive for sub
    #[arg(allow_negative_numbers = true)]
    pub rhs: i64,

    /// Release of the successor dependency to wire in
    #[arg(long, default_value_t = StepVersion::V2)]
    pub step_version: StepVersion,

    /// Upper bound on unary steps a single evaluation may take
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: u64,

    #[arg(long, help = "Print the outcome as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn operation(&self) -> Operation {
        self.operation
    }

    fn lhs(&self) -> i64 {
        self.lhs
    }

    fn rhs(&self) -> i64 {
        self.rhs
    }

    fn step_version(&self) -> StepVersion {
        self.step_version
    }

    fn max_steps(&self) -> u64 {
        self.max_steps
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("max_steps", self.max_steps, 1)?;
        validate_step_budget("rhs", self.rhs, self.max_steps)?;
        Ok(())
    }
}
