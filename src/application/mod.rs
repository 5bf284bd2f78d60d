// Application module: run orchestration, demand expansion, solution decoding

pub mod decoder;
pub mod demand;
pub mod planner;

pub use decoder::{decode_allocation, ASSIGNMENT_EPS};
pub use demand::{expand_demand, DemandLine, PlantVariety};
pub use planner::{AllocationOutcome, AllocationPlanner};
