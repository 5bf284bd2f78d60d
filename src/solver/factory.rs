use crate::domain::{
    solver_service::{Result, SolverError, SolverService},
    value_objects::SolverBackend,
};
use std::sync::Arc;

#[cfg(feature = "coin-cbc")]
use crate::solver::CoinCbcSolver;
#[cfg(feature = "highs")]
use crate::solver::HighsSolver;

/// Factory for creating solver instances based on configuration
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver for a specific backend. Backends are compiled in via
    /// feature flags; asking for one that is not built is an error.
    pub fn create(backend: SolverBackend) -> Result<Arc<dyn SolverService>> {
        match backend {
            SolverBackend::Auto => Self::default_solver(),
            #[cfg(feature = "coin-cbc")]
            SolverBackend::CoinCbc => Ok(Arc::new(CoinCbcSolver::new())),
            #[cfg(feature = "highs")]
            SolverBackend::Highs => Ok(Arc::new(HighsSolver::new())),
            #[allow(unreachable_patterns)]
            other => Err(SolverError::SolverNotAvailable(format!(
                "{other} is not compiled into this build"
            ))),
        }
    }

    /// Get the default solver: HiGHS when built, CBC otherwise.
    pub fn default_solver() -> Result<Arc<dyn SolverService>> {
        #[cfg(feature = "highs")]
        {
            Ok(Arc::new(HighsSolver::new()))
        }
        #[cfg(all(feature = "coin-cbc", not(feature = "highs")))]
        {
            Ok(Arc::new(CoinCbcSolver::new()))
        }
        #[cfg(not(any(feature = "highs", feature = "coin-cbc")))]
        {
            Err(SolverError::SolverNotAvailable(
                "no solver backend was compiled in; enable the 'highs' or 'coin-cbc' feature"
                    .to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(any(feature = "highs", feature = "coin-cbc"))]
    fn auto_resolves_to_a_mip_capable_backend() {
        let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
        assert!(solver.supports_mip());
    }

    #[test]
    #[cfg(not(any(feature = "highs", feature = "coin-cbc")))]
    fn auto_without_backends_is_unavailable() {
        let err = SolverFactory::create(SolverBackend::Auto).unwrap_err();
        assert!(matches!(err, SolverError::SolverNotAvailable(_)));
    }
}
