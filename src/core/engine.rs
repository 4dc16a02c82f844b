use crate::core::{Arithmetic, ConfigProvider, EvalOutcome, EvalRequest, Operation};
use crate::utils::error::{CalcError, Result};

pub struct CalcEngine<A: Arithmetic, C: ConfigProvider> {
    arithmetic: A,
    config: C,
}

impl<A: Arithmetic, C: ConfigProvider> CalcEngine<A, C> {
    pub fn new(arithmetic: A, config: C) -> Self {
        Self { arithmetic, config }
    }

    /// Builds the request from the configured operation and operands and
    /// evaluates it.
    pub fn run(&self) -> Result<EvalOutcome> {
        let request = EvalRequest {
            operation: self.config.operation(),
            lhs: self.config.lhs(),
            rhs: self.config.rhs(),
        };
        self.evaluate(&request)
    }

    pub fn evaluate(&self, request: &EvalRequest) -> Result<EvalOutcome> {
        let steps = request.steps_needed();
        let max_steps = self.config.max_steps();

        tracing::info!(
            "Evaluating {} with lhs = {}, rhs = {} ({} steps, version {})",
            request.operation,
            request.lhs,
            request.rhs,
            steps,
            self.config.step_version()
        );

        // Unary counting is O(|rhs|); refuse walks the budget cannot cover.
        if steps > max_steps {
            return Err(CalcError::StepLimitError { steps, max_steps });
        }

        let result = match request.operation {
            Operation::Add => self.arithmetic.add(request.lhs, request.rhs)?,
            Operation::Sub => self.arithmetic.sub(request.lhs, request.rhs)?,
        };

        tracing::debug!("Applied {} steps, result = {}", steps, result);

        Ok(EvalOutcome {
            operation: request.operation,
            lhs: request.lhs,
            rhs: request.rhs,
            result,
            steps_applied: steps,
        })
    }
}
