use super::value_objects::{
    ConstraintType, OptimizationType, SolutionStatus, SolverBackend, VariableType,
};

/// Decision variable in an optimization problem
#[derive(Debug, Clone)]
pub struct Variable {
    pub variable_type: VariableType,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    pub name: String,
}

impl Variable {
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Continuous,
            lower_bound: 0.0,
            upper_bound: None,
            name: name.into(),
        }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Integer,
            lower_bound: 0.0,
            upper_bound: None,
            name: name.into(),
        }
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Binary,
            lower_bound: 0.0,
            upper_bound: Some(1.0),
            name: name.into(),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self.variable_type,
            VariableType::Integer | VariableType::Binary
        )
    }
}

/// Linear constraint over the problem's variables.
/// Coefficients form a dense row aligned to the problem's variable order.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub constraint_type: ConstraintType,
    pub coefficients: Vec<f64>,
    pub rhs: f64,
    pub name: String,
}

impl Constraint {
    pub fn new(constraint_type: ConstraintType, coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            constraint_type,
            coefficients,
            rhs,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Objective function to minimize or maximize
#[derive(Debug, Clone)]
pub struct Objective {
    pub optimization_type: OptimizationType,
    pub coefficients: Vec<f64>,
}

impl Objective {
    pub fn minimize(coefficients: Vec<f64>) -> Self {
        Self {
            optimization_type: OptimizationType::Minimize,
            coefficients,
        }
    }

    pub fn maximize(coefficients: Vec<f64>) -> Self {
        Self {
            optimization_type: OptimizationType::Maximize,
            coefficients,
        }
    }
}

/// Complete mixed-integer problem handed to a solver backend
#[derive(Debug, Clone)]
pub struct MipProblem {
    pub name: String,
    pub variables: Vec<Variable>,
    pub constraints: Vec<Constraint>,
    pub objective: Objective,
}

impl MipProblem {
    pub fn new(name: impl Into<String>, variables: Vec<Variable>, objective: Objective) -> Self {
        Self {
            name: name.into(),
            variables,
            constraints: Vec::new(),
            objective,
        }
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_integer_variables(&self) -> usize {
        self.variables.iter().filter(|v| v.is_integer()).count()
    }

    pub fn is_mixed_integer(&self) -> bool {
        self.num_integer_variables() > 0
    }
}

/// Configuration forwarded to the solver backend.
/// Built once per run and never mutated afterwards; any timeout policy lives
/// here rather than in the model-building or decoding code.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub backend: SolverBackend,
    /// Relative optimality gap the solver may stop at, in [0, 1).
    pub gap_tolerance: f64,
    /// Parallelism hint forwarded to the backend.
    pub threads: u32,
    /// Wall-clock limit in seconds, if any.
    pub time_limit: Option<f64>,
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: SolverBackend::Auto,
            gap_tolerance: 0.0,
            threads: 1,
            time_limit: None,
            verbose: false,
        }
    }
}

impl SolverConfig {
    pub fn with_backend(mut self, backend: SolverBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_gap_tolerance(mut self, gap: f64) -> Self {
        self.gap_tolerance = gap;
        self
    }

    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Solution to an optimization problem
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolutionStatus,
    pub objective_value: Option<f64>,
    /// One value per declared variable, in problem order.
    /// Empty unless `status.is_decodable()`.
    pub variable_values: Vec<f64>,
    pub message: String,
}

impl Solution {
    pub fn new(status: SolutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            objective_value: None,
            variable_values: Vec::new(),
            message: message.into(),
        }
    }

    pub fn optimal(objective_value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            objective_value: Some(objective_value),
            variable_values,
            message: "Optimal solution found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_variables_are_bounded_and_integer() {
        let v = Variable::binary("flag");
        assert!(v.is_integer());
        assert_eq!(v.lower_bound, 0.0);
        assert_eq!(v.upper_bound, Some(1.0));
    }

    #[test]
    fn problem_counts_integer_variables() {
        let vars = vec![
            Variable::binary("a"),
            Variable::continuous("b"),
            Variable::binary("c"),
        ];
        let problem = MipProblem::new("counts", vars, Objective::minimize(vec![0.0, 0.0, 0.0]));
        assert_eq!(problem.num_variables(), 3);
        assert_eq!(problem.num_integer_variables(), 2);
        assert!(problem.is_mixed_integer());
    }
}
