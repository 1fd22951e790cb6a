//! Aggregate query services.

pub mod population_service;
pub mod species_service;
pub mod starship_service;

pub use population_service::PopulationService;
pub use species_service::SpeciesService;
pub use starship_service::StarshipService;

use tracing::{error, warn};

use crate::domain::aggregate::AggregateResult;
use crate::error::QueryError;

/// Folds a query outcome into its result envelope, logging failures.
fn finish<T: Default>(query: &'static str, outcome: Result<T, QueryError>) -> AggregateResult<T> {
    match outcome {
        Ok(data) => AggregateResult::success(data),
        Err(QueryError::NotFound(message)) => {
            warn!(query, reason = message, "Anchor entity not found");
            AggregateResult::from(QueryError::NotFound(message))
        }
        Err(e) => {
            error!(query, error = %e, "Aggregate query failed");
            AggregateResult::from(e)
        }
    }
}
