use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Sub,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
        }
    }

    /// Infix symbol for human-readable output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "sub" => Ok(Operation::Sub),
            other => Err(CalcError::InvalidConfigValueError {
                field: "operation".to_string(),
                value: other.to_string(),
                reason: "expected one of: add, sub".to_string(),
            }),
        }
    }
}

/// Release line of the successor dependency. Both releases satisfy the same
/// unary integer-to-integer contract; only the exported symbol differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepVersion {
    V1,
    V2,
}

impl StepVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepVersion::V1 => "v1",
            StepVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for StepVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepVersion {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "v1" => Ok(StepVersion::V1),
            "v2" => Ok(StepVersion::V2),
            other => Err(CalcError::InvalidConfigValueError {
                field: "step_version".to_string(),
                value: other.to_string(),
                reason: "expected one of: v1, v2".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalRequest {
    pub operation: Operation,
    pub lhs: i64,
    pub rhs: i64,
}

impl EvalRequest {
    /// Number of unary steps this request needs: |rhs|.
    pub fn steps_needed(&self) -> u64 {
        self.rhs.unsigned_abs()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalOutcome {
    pub operation: Operation,
    pub lhs: i64,
    pub rhs: i64,
    pub result: i64,
    pub steps_applied: u64,
}

impl EvalOutcome {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_parse_and_display() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("sub".parse::<Operation>().unwrap(), Operation::Sub);
        assert_eq!(Operation::Add.to_string(), "add");
        assert!("mul".parse::<Operation>().is_err());
    }

    #[test]
    fn test_step_version_parse_and_display() {
        assert_eq!("v1".parse::<StepVersion>().unwrap(), StepVersion::V1);
        assert_eq!("v2".parse::<StepVersion>().unwrap(), StepVersion::V2);
        assert_eq!(StepVersion::V2.to_string(), "v2");
        assert!("v3".parse::<StepVersion>().is_err());
    }

    #[test]
    fn test_steps_needed_uses_magnitude() {
        let request = EvalRequest {
            operation: Operation::Sub,
            lhs: 0,
            rhs: -7,
        };
        assert_eq!(request.steps_needed(), 7);

        let request = EvalRequest {
            operation: Operation::Sub,
            lhs: 0,
            rhs: i64::MIN,
        };
        assert_eq!(request.steps_needed(), i64::MIN.unsigned_abs());
    }

    #[test]
    fn test_outcome_serializes_to_json() {
        let outcome = EvalOutcome {
            operation: Operation::Add,
            lhs: 5,
            rhs: 3,
            result: 8,
            steps_applied: 3,
        };
        let json = outcome.to_json().unwrap();
        assert!(json.contains("\"operation\": \"add\""));
        assert!(json.contains("\"result\": 8"));
    }
}
