//! Starships piloted by a named person.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use super::finish;
use crate::application::fan_out::{cancellable, fetch_related};
use crate::domain::aggregate::AggregateResult;
use crate::domain::client::EntityClient;
use crate::domain::collection::Collection;
use crate::domain::entities::Starship;
use crate::error::QueryError;

/// Name searched when the caller supplies none.
pub const DEFAULT_PERSON_NAME: &str = "Luke Skywalker";

/// Message reported when the people search has no match.
pub const PEOPLE_NOT_FOUND: &str = "people not found";

/// Service resolving the starships a person has flown.
pub struct StarshipService<C: EntityClient + ?Sized = dyn EntityClient> {
    client: Arc<C>,
    shutdown: CancellationToken,
}

impl<C: EntityClient + ?Sized> StarshipService<C> {
    /// Creates a new starship service.
    pub fn new(client: Arc<C>, shutdown: CancellationToken) -> Self {
        Self { client, shutdown }
    }

    /// Fetches the starships of the first person matching `name`.
    ///
    /// A missing or blank name searches for [`DEFAULT_PERSON_NAME`]. When the
    /// search returns several people, the first one in server order wins.
    ///
    /// Starships that fail to load are left out; the remaining ones keep the
    /// order of the person's starship links. Reports `success = false` with
    /// [`PEOPLE_NOT_FOUND`] when nobody matches.
    pub async fn starships_by_person_name(&self, name: Option<&str>) -> AggregateResult<Vec<Starship>> {
        let name = resolve_name(name);
        let outcome = cancellable(&self.shutdown, self.starships(name)).await;
        finish("starships_by_person_name", outcome)
    }

    async fn starships(&self, name: &str) -> Result<Vec<Starship>, QueryError> {
        let people = self.client.search_people(name).await?;

        let person = people
            .results
            .into_iter()
            .next()
            .ok_or(QueryError::NotFound(PEOPLE_NOT_FOUND))?;

        let starships = fetch_related(Collection::Starships, &person.starships, |id| async move {
            self.client.starship(&id).await
        })
        .await;

        info!(
            person = %person.name,
            links = person.starships.len(),
            resolved = starships.len(),
            "Resolved starships"
        );

        Ok(starships)
    }
}

fn resolve_name(name: Option<&str>) -> &str {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_PERSON_NAME,
    }
}
