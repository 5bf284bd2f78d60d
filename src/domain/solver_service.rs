// Domain service interface for solving optimization problems
// Defines the contract that any solver backend must follow

use super::models::{MipProblem, Solution, SolverConfig};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver not available: {0}")]
    SolverNotAvailable(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Contract every solver backend implements. Swapping backends never touches
/// the model-building or decoding code.
///
/// `solve` blocks until the backend finishes or hits a limit from the
/// configuration. Non-optimal outcomes are reported through
/// `Solution::status`, not as errors; only malformed problems and backend
/// failures produce an `Err`.
pub trait SolverService: Send + Sync {
    /// Solve a mixed-integer problem with the given configuration
    fn solve(&self, problem: &MipProblem, config: &SolverConfig) -> Result<Solution>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &MipProblem) -> Result<()> {
        let mut errors = Vec::new();

        let num_vars = problem.num_variables();
        if problem.objective.coefficients.len() != num_vars {
            errors.push(format!(
                "Objective has {} coefficients but problem has {} variables",
                problem.objective.coefficients.len(),
                num_vars
            ));
        }

        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.num_variables() != num_vars {
                errors.push(format!(
                    "Constraint {} '{}' has {} coefficients but problem has {} variables",
                    i,
                    constraint.name,
                    constraint.num_variables(),
                    num_vars
                ));
            }
        }

        for (i, var) in problem.variables.iter().enumerate() {
            if let Some(upper) = var.upper_bound {
                if var.lower_bound > upper {
                    errors.push(format!(
                        "Variable {} '{}' has lower bound ({}) > upper bound ({})",
                        i, var.name, var.lower_bound, upper
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;

    /// Check if this solver supports mixed-integer programming
    fn supports_mip(&self) -> bool;
}
