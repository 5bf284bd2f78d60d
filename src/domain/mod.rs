// Domain module: garden entities, the MILP problem model, and the solver contract

pub mod entities;
pub mod models;
pub mod plan;
pub mod solver_service;
pub mod value_objects;

pub use entities::*;
pub use models::*;
pub use plan::*;
pub use solver_service::*;
pub use value_objects::*;
