use crate::config::DEFAULT_MAX_STEPS;
use crate::core::{ConfigProvider, Operation, StepVersion};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_step_budget, Validate,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub calculator: CalculatorConfig,
    pub dependency: DependencyConfig,
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub operation: Operation,
    pub lhs: i64,
    pub rhs: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyConfig {
    /// Name of the step package the successor is resolved from.
    pub package: String,
    pub step_version: StepVersion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_steps: Option<u64>,
}

impl TomlConfig {
    /// Loads and parses a configuration file. Validation is a separate step.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(raw)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn operation(&self) -> Operation {
        self.calculator.operation
    }

    fn lhs(&self) -> i64 {
        self.calculator.lhs
    }

    fn rhs(&self) -> i64 {
        self.calculator.rhs
    }

    fn step_version(&self) -> StepVersion {
        self.dependency.step_version
    }

    fn max_steps(&self) -> u64 {
        self.limits
            .as_ref()
            .and_then(|l| l.max_steps)
            .unwrap_or(DEFAULT_MAX_STEPS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("dependency.package", &self.dependency.package)?;
        validate_positive_number("limits.max_steps", self.max_steps(), 1)?;
        validate_step_budget("calculator.rhs", self.calculator.rhs, self.max_steps())?;
        Ok(())
    }
}
