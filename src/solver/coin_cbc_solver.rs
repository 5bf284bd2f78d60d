// COIN-OR CBC adapter
// Translates the domain problem to the good_lp API and back

use crate::domain::{
    models::{MipProblem, Solution as DomainSolution, SolverConfig},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus},
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};
use std::time::Instant;
use tracing::debug;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &MipProblem, config: &SolverConfig) -> Result<DomainSolution> {
        self.validate(problem)?;

        let start_time = Instant::now();
        let num_vars = problem.num_variables();

        // Build variables using good_lp
        let mut vars = variables!();
        let mut lp_variables: Vec<GoodLpVariable> = Vec::new();

        for var_def in problem.variables.iter() {
            let lower = var_def.lower_bound;
            let upper = var_def.upper_bound.unwrap_or(f64::INFINITY);

            let var = if var_def.is_integer() {
                vars.add(variable().integer().min(lower).max(upper))
            } else {
                vars.add(variable().min(lower).max(upper))
            };
            lp_variables.push(var);
        }

        // Build objective expression
        let is_maximize = problem.objective.optimization_type == OptimizationType::Maximize;
        let mut obj_expr: Expression = 0.into();

        for (i, &coeff) in problem.objective.coefficients.iter().enumerate() {
            if coeff != 0.0 {
                // good_lp minimizes, so negate for maximization
                let c = if is_maximize { -coeff } else { coeff };
                obj_expr += c * lp_variables[i];
            }
        }

        // Build constraints
        let mut lp_model = vars.minimise(obj_expr).using(coin_cbc::coin_cbc);

        for constraint in &problem.constraints {
            let mut lhs: Expression = 0.into();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 {
                    lhs += coeff * lp_variables[i];
                }
            }

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    lp_model = lp_model.with(lhs.leq(constraint.rhs));
                }
                ConstraintType::Equal => {
                    lp_model = lp_model.with(lhs.eq(constraint.rhs));
                }
                ConstraintType::GreaterThanOrEqual => {
                    lp_model = lp_model.with(lhs.geq(constraint.rhs));
                }
            }
        }

        // Forward the run configuration to CBC
        lp_model.set_parameter("ratio", &config.gap_tolerance.to_string());
        lp_model.set_parameter("threads", &config.threads.to_string());
        if let Some(limit) = config.time_limit {
            lp_model.set_parameter("sec", &limit.to_string());
        }
        lp_model.set_parameter("logLevel", if config.verbose { "1" } else { "0" });

        // Solve the problem
        let solution_result = lp_model.solve();
        debug!(
            solver = "cbc",
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "solve call returned"
        );

        // Process result
        match solution_result {
            Ok(sol) => {
                // Extract variable values
                let mut variable_values = vec![0.0; num_vars];
                for (i, &var) in lp_variables.iter().enumerate() {
                    variable_values[i] = sol.value(var);
                }

                // Recompute the objective in the requested sense
                let mut actual_obj = 0.0;
                for (i, &coeff) in problem.objective.coefficients.iter().enumerate() {
                    actual_obj += coeff * variable_values[i];
                }

                let mut solution = DomainSolution::optimal(actual_obj, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution)
            }
            Err(ResolutionError::Infeasible) => Ok(DomainSolution::new(
                SolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            )),
            Err(ResolutionError::Unbounded) => Ok(DomainSolution::new(
                SolutionStatus::Unbounded,
                "Problem is unbounded: objective can be improved infinitely",
            )),
            Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
