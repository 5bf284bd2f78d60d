// HiGHS adapter
// Translates the domain problem to the HiGHS row-problem API and back

use crate::domain::{
    models::{MipProblem, Solution as DomainSolution, SolverConfig},
    solver_service::{Result, SolverService},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus},
};
use std::time::Instant;
use tracing::debug;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &MipProblem, config: &SolverConfig) -> Result<DomainSolution> {
        self.validate(problem)?;

        let start_time = Instant::now();

        // HiGHS RowProblem: add variables first, then constraint rows
        use highs::{HighsModelStatus, RowProblem, Sense};

        let mut pb = RowProblem::default();
        let mut vars = Vec::new();

        for var_def in &problem.variables {
            let lower = var_def.lower_bound;
            let upper = var_def.upper_bound.unwrap_or(f64::INFINITY);

            let obj_coeff = problem
                .objective
                .coefficients
                .get(vars.len())
                .copied()
                .unwrap_or(0.0);

            let col = if var_def.is_integer() {
                pb.add_integer_column(obj_coeff, lower..upper)
            } else {
                pb.add_column(obj_coeff, lower..upper)
            };
            vars.push(col);
        }

        for constraint in &problem.constraints {
            let mut terms = Vec::new();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 && i < vars.len() {
                    terms.push((vars[i], coeff));
                }
            }

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    pb.add_row(..=constraint.rhs, &terms);
                }
                ConstraintType::Equal => {
                    pb.add_row(constraint.rhs..=constraint.rhs, &terms);
                }
                ConstraintType::GreaterThanOrEqual => {
                    pb.add_row(constraint.rhs.., &terms);
                }
            }
        }

        let sense = if problem.objective.optimization_type == OptimizationType::Maximize {
            Sense::Maximise
        } else {
            Sense::Minimise
        };

        // Forward the run configuration to HiGHS
        let mut model = pb.optimise(sense);
        model.set_option("mip_rel_gap", config.gap_tolerance);
        model.set_option("threads", config.threads as i32);
        if let Some(limit) = config.time_limit {
            model.set_option("time_limit", limit);
        }
        model.set_option("output_flag", config.verbose);

        let solved = model.solve();
        debug!(
            solver = "highs",
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "solve call returned"
        );

        match solved.status() {
            HighsModelStatus::Optimal => {
                let solution_data = solved.get_solution();
                let variable_values = solution_data.columns().to_vec();

                let mut actual_obj = 0.0;
                for (i, &val) in variable_values.iter().enumerate() {
                    if let Some(&coeff) = problem.objective.coefficients.get(i) {
                        actual_obj += coeff * val;
                    }
                }

                let mut solution = DomainSolution::optimal(actual_obj, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution)
            }
            HighsModelStatus::Infeasible => Ok(DomainSolution::new(
                SolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            )),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                Ok(DomainSolution::new(
                    SolutionStatus::Unbounded,
                    "Problem is unbounded: objective can be improved infinitely",
                ))
            }
            status => Ok(DomainSolution::new(
                SolutionStatus::NotSolved,
                format!("HiGHS finished with status {:?}", status),
            )),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
