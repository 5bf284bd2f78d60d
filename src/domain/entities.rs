// Garden entities consumed by the allocation model.
// Plants and containers are immutable once constructed; a run never mutates
// them, it only reads them while building the problem.

use crate::error::AllocationError;

/// A plant that needs to be placed in a container.
///
/// Duplicate names are allowed: two plants with the same name represent two
/// demanded units of the same variety, each placed independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    /// Variety name
    pub name: String,
    /// Depth needed to grow roots
    pub depth_needed: f64,
    /// Amount of soil necessary to have enough space and nutrients, in liters
    pub capacity_needed: f64,
}

impl Plant {
    pub fn new(name: impl Into<String>, depth_needed: f64, capacity_needed: f64) -> Self {
        Self {
            name: name.into(),
            depth_needed,
            capacity_needed,
        }
    }
}

/// A recipient filled with soil to grow plants.
///
/// As with plants, duplicate names are allowed: multiple physical units of the
/// same container type are distinct entities with independent capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub name: String,
    /// Soil capacity in liters
    pub capacity: f64,
    /// Depth/height of the container
    pub depth: f64,
}

impl Container {
    pub fn new(name: impl Into<String>, capacity: f64, depth: f64) -> Self {
        Self {
            name: name.into(),
            capacity,
            depth,
        }
    }

    /// Whether the plant can physically grow in this container.
    /// Plants with deep roots or a large footprint need a matching container.
    pub fn suits(&self, plant: &Plant) -> bool {
        plant.depth_needed <= self.depth && plant.capacity_needed <= self.capacity
    }
}

/// Dense boolean compatibility table indexed by (container, plant).
///
/// Dimensions always equal (number of containers, number of plants); there is
/// no broadcasting, and mismatched inputs are rejected before any model
/// variable is created.
#[derive(Debug, Clone, PartialEq)]
pub struct SuitabilityMatrix {
    containers: usize,
    plants: usize,
    cells: Vec<bool>,
}

impl SuitabilityMatrix {
    /// Evaluate `Container::suits` for every (container, plant) pair.
    pub fn build(containers: &[Container], plants: &[Plant]) -> Self {
        let cells = containers
            .iter()
            .flat_map(|container| plants.iter().map(|plant| container.suits(plant)))
            .collect();
        Self {
            containers: containers.len(),
            plants: plants.len(),
            cells,
        }
    }

    /// Build from precomputed rows, one row per container.
    /// Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, AllocationError> {
        let containers = rows.len();
        let plants = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != plants {
                return Err(AllocationError::RaggedMatrix {
                    row: i,
                    expected: plants,
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            containers,
            plants,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn suitable(&self, container: usize, plant: usize) -> bool {
        self.cells[container * self.plants + plant]
    }

    pub fn containers(&self) -> usize {
        self.containers
    }

    pub fn plants(&self) -> usize {
        self.plants
    }
}
