// Crate-level error type for the allocation pipeline.
// Solver statuses (infeasible, not solved) are not errors; they are reported
// as data through `AllocationOutcome`.

use crate::domain::solver_service::SolverError;

#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    /// The suitability matrix does not match the container/plant lists.
    #[error(
        "suitability matrix is {matrix_rows}x{matrix_cols} but there are \
         {containers} containers and {plants} plants"
    )]
    DimensionMismatch {
        containers: usize,
        plants: usize,
        matrix_rows: usize,
        matrix_cols: usize,
    },

    /// A suitability row has the wrong number of entries.
    #[error("suitability row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A demand line names a plant that is missing from the master data.
    #[error("demand references unknown plant '{0}'")]
    UnknownPlant(String),

    /// A solved model assigned a plant to zero or several containers.
    /// This indicates a modeling bug and is never repaired during decoding.
    #[error("plant '{plant}' decoded into {assigned} containers, expected exactly one")]
    InconsistentAssignment { plant: String, assigned: usize },

    #[error(transparent)]
    Solver(#[from] SolverError),
}
