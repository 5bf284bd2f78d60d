//! Mixed-integer allocation of demanded plants to growing containers.
//!
//! Given a list of plants (each a unit of demand with a soil-capacity need),
//! a pool of containers with bounded capacity, and a suitability table saying
//! which container can physically host which plant, the crate builds an
//! integer program that places every plant in exactly one suitable container
//! while minimizing the number of containers used, solves it with a
//! pluggable MILP backend, and decodes the result into a per-container plan.
//!
//! ```no_run
//! use std::sync::Arc;
//! use plantopt::{
//!     AllocationOutcome, AllocationPlanner, Container, Plant, SolverConfig,
//!     SolverFactory, SuitabilityMatrix,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let plants = vec![Plant::new("basil", 10.0, 2.0), Plant::new("mint", 10.0, 3.0)];
//! let containers = vec![Container::new("trough", 10.0, 20.0)];
//! let suitability = SuitabilityMatrix::build(&containers, &plants);
//!
//! let planner = AllocationPlanner::new(SolverFactory::default_solver()?, SolverConfig::default());
//! match planner.plan(&plants, &containers, &suitability)? {
//!     AllocationOutcome::Optimal(plan) => print!("{plan}"),
//!     AllocationOutcome::Infeasible => println!("no valid placement exists"),
//!     AllocationOutcome::Unresolved(status) => println!("solver stopped: {status}"),
//! }
//! # Ok(())
//! # }
//! ```

// Domain layer: entities, problem model, solver contract
pub mod domain;

// Model layer: constraint system builders
pub mod model;

// Application layer: orchestration, demand expansion, decoding
pub mod application;

// Solver adapters: concrete implementations of SolverService
pub mod solver;

pub mod error;

// Re-export commonly used types
pub use domain::{
    AllocationPlan, Constraint, ConstraintType, Container, ContainerLoad, MipProblem, Objective,
    OptimizationType, Plant, PlantPlacement, Solution, SolutionStatus, SolverBackend, SolverConfig,
    SolverError, SolverService, SuitabilityMatrix, Variable, VariableType,
};

pub use application::{
    decode_allocation, expand_demand, AllocationOutcome, AllocationPlanner, DemandLine,
    PlantVariety,
};

pub use error::AllocationError;

pub use model::{AllocationModel, GardenGrid, GridModel, VariableArena};

pub use solver::SolverFactory;

#[cfg(feature = "coin-cbc")]
pub use solver::CoinCbcSolver;
#[cfg(feature = "highs")]
pub use solver::HighsSolver;
