// Run orchestration: build the model, hand it to the solver, decode the plan.

use std::sync::Arc;

use tracing::info;

use crate::application::decoder::decode_allocation;
use crate::domain::entities::{Container, Plant, SuitabilityMatrix};
use crate::domain::models::SolverConfig;
use crate::domain::plan::AllocationPlan;
use crate::domain::solver_service::SolverService;
use crate::domain::value_objects::SolutionStatus;
use crate::error::AllocationError;
use crate::model::builder::AllocationModel;

/// Outcome of one allocation run.
///
/// Infeasibility is an expected, meaningful result and therefore data, not an
/// error. Only input-shape and invariant violations surface as
/// `AllocationError`.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationOutcome {
    /// A plan decoded from an optimal (or feasible-within-gap) solution.
    Optimal(AllocationPlan),
    /// No assignment satisfies all constraints.
    Infeasible,
    /// The solver stopped without a usable solution; the caller may retry
    /// with a looser gap or a longer time limit.
    Unresolved(SolutionStatus),
}

impl AllocationOutcome {
    pub fn plan(&self) -> Option<&AllocationPlan> {
        match self {
            AllocationOutcome::Optimal(plan) => Some(plan),
            _ => None,
        }
    }
}

/// Plans one allocation run at a time against a fixed solver backend.
///
/// Each call to `plan` builds a fresh problem instance; planners share no
/// state between runs and independent runs may proceed concurrently with
/// their own planners.
pub struct AllocationPlanner {
    solver: Arc<dyn SolverService>,
    config: SolverConfig,
}

impl AllocationPlanner {
    pub fn new(solver: Arc<dyn SolverService>, config: SolverConfig) -> Self {
        Self { solver, config }
    }

    /// Place every plant into a suitable container, minimizing the number of
    /// containers used. Blocks until the solver finishes; any time limit
    /// comes from the solver configuration.
    pub fn plan(
        &self,
        plants: &[Plant],
        containers: &[Container],
        suitability: &SuitabilityMatrix,
    ) -> Result<AllocationOutcome, AllocationError> {
        let model = AllocationModel::build(plants, containers, suitability)?;
        info!(
            solver = self.solver.name(),
            plants = plants.len(),
            containers = containers.len(),
            "solving allocation model"
        );

        let solution = self.solver.solve(model.problem(), &self.config)?;
        info!(status = %solution.status, "solve finished");

        match solution.status {
            status if status.is_decodable() => {
                let plan = decode_allocation(&solution, plants, containers, model.arena())?;
                Ok(AllocationOutcome::Optimal(plan))
            }
            SolutionStatus::Infeasible => Ok(AllocationOutcome::Infeasible),
            status => Ok(AllocationOutcome::Unresolved(status)),
        }
    }
}
