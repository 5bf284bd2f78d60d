// Expands per-variety demand quantities against the plant master data into
// the concrete plant instances the model places one by one.

use crate::domain::entities::Plant;
use crate::error::AllocationError;

/// Master-data record for one plant variety.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantVariety {
    pub name: String,
    pub depth_needed: f64,
    pub capacity_needed: f64,
}

impl PlantVariety {
    pub fn new(name: impl Into<String>, depth_needed: f64, capacity_needed: f64) -> Self {
        Self {
            name: name.into(),
            depth_needed,
            capacity_needed,
        }
    }
}

/// Requested quantity of one variety for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandLine {
    pub name: String,
    pub quantity: u32,
}

impl DemandLine {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Join demand lines to the master data and duplicate each variety by its
/// requested quantity, preserving demand order. Each duplicate is an
/// independent plant instance to the model.
pub fn expand_demand(
    demand: &[DemandLine],
    master: &[PlantVariety],
) -> Result<Vec<Plant>, AllocationError> {
    let mut plants = Vec::new();
    for line in demand {
        let variety = master
            .iter()
            .find(|variety| variety.name == line.name)
            .ok_or_else(|| AllocationError::UnknownPlant(line.name.clone()))?;
        for _ in 0..line.quantity {
            plants.push(Plant::new(
                variety.name.clone(),
                variety.depth_needed,
                variety.capacity_needed,
            ));
        }
    }
    Ok(plants)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master() -> Vec<PlantVariety> {
        vec![
            PlantVariety::new("basil", 10.0, 2.0),
            PlantVariety::new("tomato", 30.0, 20.0),
        ]
    }

    #[test]
    fn duplicates_each_variety_by_quantity() {
        let demand = vec![DemandLine::new("tomato", 2), DemandLine::new("basil", 3)];
        let plants = expand_demand(&demand, &master()).unwrap();
        let names: Vec<&str> = plants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["tomato", "tomato", "basil", "basil", "basil"]);
        assert_eq!(plants[0].capacity_needed, 20.0);
        assert_eq!(plants[2].depth_needed, 10.0);
    }

    #[test]
    fn zero_quantity_lines_expand_to_nothing() {
        let demand = vec![DemandLine::new("basil", 0)];
        assert!(expand_demand(&demand, &master()).unwrap().is_empty());
    }

    #[test]
    fn unknown_variety_is_an_error() {
        let demand = vec![DemandLine::new("cucumber", 1)];
        let err = expand_demand(&demand, &master()).unwrap_err();
        assert!(matches!(err, AllocationError::UnknownPlant(name) if name == "cucumber"));
    }
}
