use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// An operand of magnitude n needs n unary steps; reject it up front when it
/// cannot fit the configured budget.
pub fn validate_step_budget(field_name: &str, rhs: i64, max_steps: u64) -> Result<()> {
    let steps = rhs.unsigned_abs();
    if steps > max_steps {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: rhs.to_string(),
            reason: format!("Operand needs {} steps, limit is {}", steps, max_steps),
        });
    }
    Ok(())
}
