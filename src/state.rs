//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::pagination::PaginationWalker;
use crate::application::services::{PopulationService, SpeciesService, StarshipService};
use crate::domain::client::EntityClient;

/// Services and collaborators shared across requests.
///
/// Every service holds the same client and the same shutdown token, so
/// cancelling the token aborts all queries still in flight.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn EntityClient>,
    pub population_service: Arc<PopulationService>,
    pub species_service: Arc<SpeciesService>,
    pub starship_service: Arc<StarshipService>,
}

impl AppState {
    /// Wires the query services around `client`.
    pub fn new(client: Arc<dyn EntityClient>, page_size: u64, shutdown: CancellationToken) -> Self {
        let walker = PaginationWalker::new(page_size);

        Self {
            population_service: Arc::new(PopulationService::new(
                client.clone(),
                walker,
                shutdown.clone(),
            )),
            species_service: Arc::new(SpeciesService::new(
                client.clone(),
                walker,
                shutdown.clone(),
            )),
            starship_service: Arc::new(StarshipService::new(client.clone(), shutdown)),
            client,
        }
    }
}
