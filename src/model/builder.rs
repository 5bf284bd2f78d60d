// Allocation model: places every demanded plant in exactly one suitable
// container while minimizing the number of containers put into service.

use tracing::debug;

use crate::domain::entities::{Container, Plant, SuitabilityMatrix};
use crate::domain::models::{Constraint, MipProblem, Objective, Variable};
use crate::domain::value_objects::ConstraintType;
use crate::error::AllocationError;
use crate::model::arena::VariableArena;

/// The assembled container-allocation problem plus the index scheme needed to
/// read its solution back. Building is a pure function of the inputs; each
/// run owns a fresh instance and nothing is shared between runs.
#[derive(Debug, Clone)]
pub struct AllocationModel {
    problem: MipProblem,
    arena: VariableArena,
}

impl AllocationModel {
    /// Build the constraint system for the given plants and containers.
    ///
    /// Fails fast on a suitability matrix whose dimensions disagree with the
    /// entity lists, before any variable is created.
    pub fn build(
        plants: &[Plant],
        containers: &[Container],
        suitability: &SuitabilityMatrix,
    ) -> Result<Self, AllocationError> {
        let n = plants.len();
        let m = containers.len();
        if suitability.containers() != m || suitability.plants() != n {
            return Err(AllocationError::DimensionMismatch {
                containers: m,
                plants: n,
                matrix_rows: suitability.containers(),
                matrix_cols: suitability.plants(),
            });
        }

        let arena = VariableArena::new(m, n);
        debug!(plants = n, containers = m, columns = arena.len(), "creating decision variables");

        let mut variables = Vec::with_capacity(arena.len());
        for c in 0..m {
            for p in 0..n {
                variables.push(Variable::binary(format!("assign_c{c}_p{p}")));
            }
        }
        for c in 0..m {
            for p in 0..n {
                variables.push(Variable::continuous(format!("alloc_c{c}_p{p}")));
            }
        }
        for c in 0..m {
            variables.push(Variable::binary(format!("used_c{c}")));
        }

        // Minimize the number of containers put into service.
        let mut objective = vec![0.0; arena.len()];
        for c in 0..m {
            objective[arena.used(c)] = 1.0;
        }
        let mut problem = MipProblem::new("plant_alloc", variables, Objective::minimize(objective));

        debug!("creating constraints");

        // Each plant is placed in exactly one container.
        for p in 0..n {
            let mut row = vec![0.0; arena.len()];
            for c in 0..m {
                row[arena.assign(c, p)] = 1.0;
            }
            problem.add_constraint(
                Constraint::new(ConstraintType::Equal, row, 1.0)
                    .with_name(format!("placed_plant_{p}")),
            );
        }

        // Each plant draws its full capacity need, summed over all containers.
        // Together with the placement and capacity rows this pins the draw to
        // the single container whose assignment flag is set.
        for p in 0..n {
            let mut row = vec![0.0; arena.len()];
            for c in 0..m {
                row[arena.alloc(c, p)] = 1.0;
            }
            problem.add_constraint(
                Constraint::new(ConstraintType::Equal, row, plants[p].capacity_needed)
                    .with_name(format!("capacity_plant_{p}")),
            );
        }

        // Capacity of each container, over the continuous draws.
        for c in 0..m {
            let mut row = vec![0.0; arena.len()];
            for p in 0..n {
                row[arena.alloc(c, p)] = 1.0;
            }
            problem.add_constraint(
                Constraint::new(ConstraintType::LessThanOrEqual, row, containers[c].capacity)
                    .with_name(format!("capacity_container_{c}")),
            );
        }

        // Capacity of each container again, over the assignment flags weighted
        // by demand. Not identical to the previous family in a relaxed
        // solution; both are emitted to tighten the relaxation.
        for c in 0..m {
            let mut row = vec![0.0; arena.len()];
            for p in 0..n {
                row[arena.assign(c, p)] = plants[p].capacity_needed;
            }
            problem.add_constraint(
                Constraint::new(ConstraintType::LessThanOrEqual, row, containers[c].capacity)
                    .with_name(format!("capacity_flags_container_{c}")),
            );
        }

        // used[c] <= sum of assignments into c. One-sided on purpose: the
        // minimizing objective supplies the upward pressure, so this is only
        // sound while the objective minimizes container usage.
        for c in 0..m {
            let mut row = vec![0.0; arena.len()];
            row[arena.used(c)] = 1.0;
            for p in 0..n {
                row[arena.assign(c, p)] = -1.0;
            }
            problem.add_constraint(
                Constraint::new(ConstraintType::LessThanOrEqual, row, 0.0)
                    .with_name(format!("used_container_{c}")),
            );
        }

        // No assignment may land on an unsuitable pair. A single aggregate
        // equality over all pairs replaces m*n per-pair upper bounds.
        let mut row = vec![0.0; arena.len()];
        for c in 0..m {
            for p in 0..n {
                if !suitability.suitable(c, p) {
                    row[arena.assign(c, p)] = 1.0;
                }
            }
        }
        problem.add_constraint(
            Constraint::new(ConstraintType::Equal, row, 0.0).with_name("suitable_pairs_only"),
        );

        debug!(
            constraints = problem.constraints.len(),
            variables = problem.num_variables(),
            "allocation model built"
        );

        Ok(Self { problem, arena })
    }

    pub fn problem(&self) -> &MipProblem {
        &self.problem
    }

    pub fn arena(&self) -> &VariableArena {
        &self.arena
    }
}
