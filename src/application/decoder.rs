// Translates solved variable values back into a per-container placement plan.

use crate::domain::entities::{Container, Plant};
use crate::domain::models::Solution;
use crate::domain::plan::{AllocationPlan, ContainerLoad, PlantPlacement};
use crate::error::AllocationError;
use crate::model::arena::VariableArena;

/// Solved assignment flags above this value count as set. Solvers report
/// binaries within an integrality tolerance of 0 or 1, never exactly; testing
/// equality with 1.0 would drop valid assignments.
pub const ASSIGNMENT_EPS: f64 = 1e-4;

/// Reconstruct the placement plan from a decodable solution.
///
/// Pure function of its inputs: decoding the same solution twice yields
/// identical plans. Containers hosting nothing are omitted. A plant whose
/// flags decode into zero or several containers is a modeling bug and is
/// reported as an error, never patched up.
pub fn decode_allocation(
    solution: &Solution,
    plants: &[Plant],
    containers: &[Container],
    arena: &VariableArena,
) -> Result<AllocationPlan, AllocationError> {
    debug_assert_eq!(solution.variable_values.len(), arena.len());

    let mut times_placed = vec![0usize; plants.len()];
    let mut loads = Vec::new();

    for (c, container) in containers.iter().enumerate() {
        let mut placements = Vec::new();
        let mut capacity_used = 0.0;
        for (p, plant) in plants.iter().enumerate() {
            if solution.variable_values[arena.assign(c, p)] > ASSIGNMENT_EPS {
                times_placed[p] += 1;
                capacity_used += plant.capacity_needed;
                placements.push(PlantPlacement {
                    plant: plant.name.clone(),
                    capacity: plant.capacity_needed,
                });
            }
        }
        if !placements.is_empty() {
            loads.push(ContainerLoad {
                container: container.name.clone(),
                capacity_limit: container.capacity,
                placements,
                capacity_used,
            });
        }
    }

    for (p, &count) in times_placed.iter().enumerate() {
        if count != 1 {
            return Err(AllocationError::InconsistentAssignment {
                plant: plants[p].name.clone(),
                assigned: count,
            });
        }
    }

    Ok(AllocationPlan { loads })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::SolutionStatus;

    fn fixture() -> (Vec<Plant>, Vec<Container>, VariableArena) {
        let plants = vec![Plant::new("basil", 10.0, 5.0), Plant::new("mint", 10.0, 3.0)];
        let containers = vec![
            Container::new("trough", 10.0, 20.0),
            Container::new("pot", 2.0, 20.0),
        ];
        let arena = VariableArena::new(2, 2);
        (plants, containers, arena)
    }

    fn solution_with_assignments(arena: &VariableArena, pairs: &[(usize, usize, f64)]) -> Solution {
        let mut values = vec![0.0; arena.len()];
        for &(c, p, v) in pairs {
            values[arena.assign(c, p)] = v;
        }
        Solution {
            status: SolutionStatus::Optimal,
            objective_value: Some(1.0),
            variable_values: values,
            message: String::new(),
        }
    }

    #[test]
    fn groups_plants_by_container() {
        let (plants, containers, arena) = fixture();
        let solution = solution_with_assignments(&arena, &[(0, 0, 1.0), (0, 1, 1.0)]);
        let plan = decode_allocation(&solution, &plants, &containers, &arena).unwrap();

        assert_eq!(plan.containers_used(), 1);
        let load = plan.load_for("trough").unwrap();
        assert_eq!(load.capacity_used, 8.0);
        assert_eq!(load.capacity_limit, 10.0);
        assert_eq!(load.placements[0].plant, "basil");
        assert_eq!(load.placements[1].plant, "mint");
    }

    #[test]
    fn tolerates_near_binary_values() {
        let (plants, containers, arena) = fixture();
        // typical branch-and-bound output: close to 1 and close to 0
        let solution =
            solution_with_assignments(&arena, &[(0, 0, 0.9999993), (0, 1, 1.0), (1, 0, 3e-7)]);
        let plan = decode_allocation(&solution, &plants, &containers, &arena).unwrap();
        assert_eq!(plan.containers_used(), 1);
        assert_eq!(plan.placement_count(), 2);
    }

    #[test]
    fn rejects_unplaced_plant() {
        let (plants, containers, arena) = fixture();
        let solution = solution_with_assignments(&arena, &[(0, 0, 1.0)]);
        let err = decode_allocation(&solution, &plants, &containers, &arena).unwrap_err();
        assert!(matches!(
            err,
            AllocationError::InconsistentAssignment { assigned: 0, .. }
        ));
    }

    #[test]
    fn rejects_doubly_placed_plant() {
        let (plants, containers, arena) = fixture();
        let solution =
            solution_with_assignments(&arena, &[(0, 0, 1.0), (1, 0, 1.0), (0, 1, 1.0)]);
        let err = decode_allocation(&solution, &plants, &containers, &arena).unwrap_err();
        match err {
            AllocationError::InconsistentAssignment { plant, assigned } => {
                assert_eq!(plant, "basil");
                assert_eq!(assigned, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decoding_twice_is_identical() {
        let (plants, containers, arena) = fixture();
        let solution = solution_with_assignments(&arena, &[(0, 0, 1.0), (1, 1, 0.0), (0, 1, 1.0)]);
        let first = decode_allocation(&solution, &plants, &containers, &arena).unwrap();
        let second = decode_allocation(&solution, &plants, &containers, &arena).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_decodes_to_empty_plan() {
        let arena = VariableArena::new(0, 0);
        let solution = Solution {
            status: SolutionStatus::Optimal,
            objective_value: Some(0.0),
            variable_values: Vec::new(),
            message: String::new(),
        };
        let plan = decode_allocation(&solution, &[], &[], &arena).unwrap();
        assert_eq!(plan.containers_used(), 0);
    }
}
