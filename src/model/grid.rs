// Grid placement mode: plants go into fixed-size cells of a single growing
// bed instead of variable-capacity containers. Kept as a secondary mode next
// to the container-allocation model.

use tracing::debug;

use crate::domain::entities::Plant;
use crate::domain::models::{Constraint, MipProblem, Objective, Solution, Variable};
use crate::domain::value_objects::ConstraintType;
use crate::error::AllocationError;

/// Decoded binary values this far above zero count as set.
/// Mirrors the allocation decoder's tolerance for relaxed solver output.
const PLACEMENT_EPS: f64 = 1e-4;

/// A growing bed divided into equal square cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GardenGrid {
    pub cells_x: usize,
    pub cells_y: usize,
}

impl GardenGrid {
    pub fn new(cells_x: usize, cells_y: usize) -> Self {
        Self { cells_x, cells_y }
    }

    /// Divide a bed of the given physical dimensions into cells.
    /// Partial cells at the borders are dropped.
    pub fn from_dimensions(length: f64, width: f64, cell_size: f64) -> Self {
        Self {
            cells_x: (length / cell_size) as usize,
            cells_y: (width / cell_size) as usize,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells_x * self.cells_y
    }
}

/// Constraint model for the grid mode.
///
/// One binary per (plant, cell) plus a continuous happiness score per plant.
/// The score is pinned to 1 by an equality row, which makes the maximizing
/// objective a feasibility check; that is the intended behavior of this mode.
#[derive(Debug, Clone)]
pub struct GridModel {
    problem: MipProblem,
    plants: usize,
    grid: GardenGrid,
}

impl GridModel {
    pub fn build(plants: &[Plant], grid: &GardenGrid) -> Self {
        let p_count = plants.len();
        let cells = grid.cell_count();
        debug!(
            plants = p_count,
            cells_x = grid.cells_x,
            cells_y = grid.cells_y,
            "creating grid decision variables"
        );

        let mut variables = Vec::with_capacity(p_count * cells + p_count);
        for i in 0..p_count {
            for x in 0..grid.cells_x {
                for y in 0..grid.cells_y {
                    variables.push(Variable::binary(format!("seed_{i}_x_{x}_y_{y}")));
                }
            }
        }
        for i in 0..p_count {
            variables.push(Variable::continuous(format!("happiness_plant_{i}")));
        }

        let width = variables.len();
        let mut objective = vec![0.0; width];
        for i in 0..p_count {
            objective[Self::happiness_column(p_count, cells, i)] = 1.0;
        }
        let mut problem = MipProblem::new("plant_grid", variables, Objective::maximize(objective));

        // All demanded seeds must be placed somewhere in the bed.
        for i in 0..p_count {
            let mut row = vec![0.0; width];
            for x in 0..grid.cells_x {
                for y in 0..grid.cells_y {
                    row[Self::place_column(grid, i, x, y)] = 1.0;
                }
            }
            problem.add_constraint(
                Constraint::new(ConstraintType::Equal, row, 1.0)
                    .with_name(format!("placed_seed_{i}")),
            );
        }

        // At most one seed per cell.
        for x in 0..grid.cells_x {
            for y in 0..grid.cells_y {
                let mut row = vec![0.0; width];
                for i in 0..p_count {
                    row[Self::place_column(grid, i, x, y)] = 1.0;
                }
                problem.add_constraint(
                    Constraint::new(ConstraintType::LessThanOrEqual, row, 1.0)
                        .with_name(format!("cell_{x}_{y}")),
                );
            }
        }

        // Happiness per plant, pinned to 1.
        for i in 0..p_count {
            let mut row = vec![0.0; width];
            row[Self::happiness_column(p_count, cells, i)] = 1.0;
            problem.add_constraint(
                Constraint::new(ConstraintType::Equal, row, 1.0)
                    .with_name(format!("happiness_plant_{i}")),
            );
        }

        Self {
            problem,
            plants: p_count,
            grid: *grid,
        }
    }

    fn place_column(grid: &GardenGrid, plant: usize, x: usize, y: usize) -> usize {
        plant * grid.cell_count() + x * grid.cells_y + y
    }

    fn happiness_column(plants: usize, cells: usize, plant: usize) -> usize {
        plants * cells + plant
    }

    pub fn problem(&self) -> &MipProblem {
        &self.problem
    }

    /// Reconstruct the output bed, row-major by `[y][x]`, with the name of the
    /// plant occupying each cell. Each plant must occupy exactly one cell.
    pub fn decode(
        &self,
        solution: &Solution,
        plants: &[Plant],
    ) -> Result<Vec<Vec<Option<String>>>, AllocationError> {
        let mut bed = vec![vec![None; self.grid.cells_x]; self.grid.cells_y];
        for (i, plant) in plants.iter().enumerate().take(self.plants) {
            let mut placed = 0usize;
            for x in 0..self.grid.cells_x {
                for y in 0..self.grid.cells_y {
                    let value = solution.variable_values[Self::place_column(&self.grid, i, x, y)];
                    if value > PLACEMENT_EPS {
                        bed[y][x] = Some(plant.name.clone());
                        placed += 1;
                    }
                }
            }
            if placed != 1 {
                return Err(AllocationError::InconsistentAssignment {
                    plant: plant.name.clone(),
                    assigned: placed,
                });
            }
        }
        Ok(bed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{OptimizationType, SolutionStatus};

    fn herbs() -> Vec<Plant> {
        vec![Plant::new("basil", 10.0, 2.0), Plant::new("mint", 10.0, 2.0)]
    }

    #[test]
    fn from_dimensions_drops_partial_cells() {
        let grid = GardenGrid::from_dimensions(100.0, 45.0, 30.0);
        assert_eq!(grid.cells_x, 3);
        assert_eq!(grid.cells_y, 1);
        assert_eq!(grid.cell_count(), 3);
    }

    #[test]
    fn build_emits_placement_cell_and_happiness_rows() {
        let grid = GardenGrid::new(2, 2);
        let model = GridModel::build(&herbs(), &grid);
        // one placement row per plant, one per cell, one happiness pin per plant
        assert_eq!(model.problem().constraints.len(), 2 + 4 + 2);
        assert_eq!(model.problem().num_variables(), 2 * 4 + 2);
        assert_eq!(
            model.problem().objective.optimization_type,
            OptimizationType::Maximize
        );
    }

    #[test]
    fn decode_reads_cell_occupancy() {
        let grid = GardenGrid::new(2, 1);
        let plants = herbs();
        let model = GridModel::build(&plants, &grid);
        // basil in cell (0,0), mint in cell (1,0), happiness pinned
        let mut values = vec![0.0; model.problem().num_variables()];
        values[0] = 1.0;
        values[3] = 0.99999;
        values[4] = 1.0;
        values[5] = 1.0;
        let solution = Solution {
            status: SolutionStatus::Optimal,
            objective_value: Some(2.0),
            variable_values: values,
            message: String::new(),
        };
        let bed = model.decode(&solution, &plants).unwrap();
        assert_eq!(bed[0][0].as_deref(), Some("basil"));
        assert_eq!(bed[0][1].as_deref(), Some("mint"));
    }

    #[test]
    fn decode_rejects_a_plant_left_out() {
        let grid = GardenGrid::new(2, 1);
        let plants = herbs();
        let model = GridModel::build(&plants, &grid);
        let mut values = vec![0.0; model.problem().num_variables()];
        values[0] = 1.0;
        let solution = Solution {
            status: SolutionStatus::Optimal,
            objective_value: Some(2.0),
            variable_values: values,
            message: String::new(),
        };
        let err = model.decode(&solution, &plants).unwrap_err();
        assert!(matches!(
            err,
            AllocationError::InconsistentAssignment { assigned: 0, .. }
        ));
    }
}
