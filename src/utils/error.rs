use crate::domain::model::Operation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid argument for {operation}: {reason}, got rhs = {rhs}")]
    InvalidArgumentError {
        operation: Operation,
        rhs: i64,
        reason: &'static str,
    },

    #[error("Step budget exceeded: evaluation needs {steps} steps, limit is {max_steps}")]
    StepLimitError { steps: u64, max_steps: u64 },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidArgumentError { .. } | CalcError::StepLimitError { .. } => {
                ErrorCategory::Argument
            }
            CalcError::InvalidConfigValueError { .. } | CalcError::TomlError(_) => {
                ErrorCategory::Configuration
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::InvalidArgumentError { .. } | CalcError::StepLimitError { .. } => {
                ErrorSeverity::Medium
            }
            CalcError::InvalidConfigValueError { .. } | CalcError::TomlError(_) => {
                ErrorSeverity::High
            }
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidArgumentError {
                operation, reason, ..
            } => {
                format!("The right operand is not usable for '{operation}': {reason}")
            }
            CalcError::StepLimitError { steps, max_steps } => format!(
                "This evaluation needs {steps} unary steps, more than the configured limit of {max_steps}"
            ),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{field}' is invalid: {reason}")
            }
            CalcError::TomlError(e) => format!("The configuration file is not valid TOML: {e}"),
            CalcError::IoError(e) => format!("File access failed: {e}"),
            CalcError::SerializationError(e) => format!("Could not serialize the result: {e}"),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidArgumentError { operation, .. } => match operation {
                Operation::Add => "Pass a non-negative rhs to add, or use sub for negative counts",
                Operation::Sub => "Pass a non-positive rhs to sub, or use add for positive counts",
            },
            CalcError::StepLimitError { .. } => {
                "Raise --max-steps (or [limits].max_steps) or use a smaller operand"
            }
            CalcError::InvalidConfigValueError { .. } => {
                "Check the field against the documented values and try again"
            }
            CalcError::TomlError(_) => "Fix the TOML syntax; compare with calc-config.toml",
            CalcError::IoError(_) => "Check that the path exists and is readable",
            CalcError::SerializationError(_) => "Re-run without --json and report the outcome",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
