// Constraint model builders: container allocation and the grid placement mode

pub mod arena;
pub mod builder;
pub mod grid;

pub use arena::VariableArena;
pub use builder::AllocationModel;
pub use grid::{GardenGrid, GridModel};
