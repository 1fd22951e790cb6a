//! Species classifications appearing in episode 1.

use std::collections::HashSet;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::finish;
use crate::application::fan_out::{cancellable, fetch_related};
use crate::application::pagination::PaginationWalker;
use crate::domain::aggregate::AggregateResult;
use crate::domain::client::EntityClient;
use crate::domain::collection::Collection;
use crate::error::QueryError;

/// Episode whose species are classified.
pub const EPISODE_ONE: u32 = 1;

/// Message reported when no film carries the requested episode number.
pub const FILM_NOT_FOUND: &str = "film not found";

/// Service listing the distinct species classifications of a film.
pub struct SpeciesService<C: EntityClient + ?Sized = dyn EntityClient> {
    client: Arc<C>,
    walker: PaginationWalker,
    shutdown: CancellationToken,
}

impl<C: EntityClient + ?Sized> SpeciesService<C> {
    /// Creates a new species service.
    pub fn new(client: Arc<C>, walker: PaginationWalker, shutdown: CancellationToken) -> Self {
        Self {
            client,
            walker,
            shutdown,
        }
    }

    /// Lists the distinct classifications of the species in episode 1.
    ///
    /// # Behavior
    ///
    /// - Every species linked from the film is fetched concurrently
    /// - Species that fail to load, or have no classification, are skipped
    /// - Duplicates are removed keeping the first occurrence, so the output
    ///   follows the order of the film's species links
    ///
    /// Reports `success = false` with [`FILM_NOT_FOUND`] when no film has
    /// `episode_id == 1`. A film without species yields an empty success.
    pub async fn episode_one_species_classifications(&self) -> AggregateResult<Vec<String>> {
        let outcome = cancellable(&self.shutdown, self.classifications(EPISODE_ONE)).await;
        finish("episode_species_classifications", outcome)
    }

    async fn classifications(&self, episode_id: u32) -> Result<Vec<String>, QueryError> {
        let pages = self
            .walker
            .fetch_all_pages(Collection::Films, |page| self.client.films_page(page))
            .await?;

        let film = pages
            .into_iter()
            .flat_map(|page| page.results)
            .find(|film| film.episode_id == episode_id)
            .ok_or(QueryError::NotFound(FILM_NOT_FOUND))?;

        debug!(
            title = %film.title,
            links = film.species.len(),
            "Resolving species of film"
        );

        let species = fetch_related(Collection::Species, &film.species, |id| async move {
            self.client.species(&id).await
        })
        .await;

        let classifications =
            distinct_in_order(species.into_iter().filter_map(|s| s.classification));

        info!(
            episode_id,
            count = classifications.len(),
            "Collected species classifications"
        );

        Ok(classifications)
    }
}

/// Removes duplicates while keeping the first-seen order.
fn distinct_in_order(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
