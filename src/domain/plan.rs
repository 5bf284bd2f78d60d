// The allocation plan is the terminal artifact of a run: the decoded,
// per-container grouping of plants produced from a solved model.

use std::fmt;

/// One plant placed into a container, with its capacity draw in liters.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantPlacement {
    pub plant: String,
    pub capacity: f64,
}

/// A container together with everything placed in it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerLoad {
    pub container: String,
    pub capacity_limit: f64,
    /// Placements in plant input order.
    pub placements: Vec<PlantPlacement>,
    pub capacity_used: f64,
}

/// Placement plan grouped by container. Containers that host no plant are
/// omitted; every demanded plant appears in exactly one load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AllocationPlan {
    pub loads: Vec<ContainerLoad>,
}

impl AllocationPlan {
    /// Number of containers put into service.
    pub fn containers_used(&self) -> usize {
        self.loads.len()
    }

    /// Total number of plants placed across all containers.
    pub fn placement_count(&self) -> usize {
        self.loads.iter().map(|load| load.placements.len()).sum()
    }

    /// Look up the load of a container by name, if it hosts anything.
    pub fn load_for(&self, container: &str) -> Option<&ContainerLoad> {
        self.loads.iter().find(|load| load.container == container)
    }
}

impl fmt::Display for AllocationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Allocation plan ({} containers used)", self.loads.len())?;
        for load in &self.loads {
            writeln!(
                f,
                "  {} [{:.1}/{:.1} L]",
                load.container, load.capacity_used, load.capacity_limit
            )?;
            for placement in &load.placements {
                writeln!(f, "    - {} ({:.1} L)", placement.plant, placement.capacity)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> AllocationPlan {
        AllocationPlan {
            loads: vec![ContainerLoad {
                container: "trough".to_string(),
                capacity_limit: 10.0,
                placements: vec![
                    PlantPlacement {
                        plant: "basil".to_string(),
                        capacity: 2.0,
                    },
                    PlantPlacement {
                        plant: "mint".to_string(),
                        capacity: 3.0,
                    },
                ],
                capacity_used: 5.0,
            }],
        }
    }

    #[test]
    fn counts_containers_and_placements() {
        let plan = sample_plan();
        assert_eq!(plan.containers_used(), 1);
        assert_eq!(plan.placement_count(), 2);
    }

    #[test]
    fn finds_load_by_container_name() {
        let plan = sample_plan();
        assert_eq!(plan.load_for("trough").unwrap().placements.len(), 2);
        assert!(plan.load_for("missing").is_none());
    }

    #[test]
    fn display_lists_each_placement() {
        let rendered = sample_plan().to_string();
        assert!(rendered.contains("trough [5.0/10.0 L]"));
        assert!(rendered.contains("- basil (2.0 L)"));
        assert!(rendered.contains("- mint (3.0 L)"));
    }
}
