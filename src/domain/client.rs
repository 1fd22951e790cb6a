//! Entity client trait: the only way the core talks to the upstream API.

use crate::domain::entities::{Film, Page, Person, Planet, Species, Starship};
use crate::error::ClientError;
use async_trait::async_trait;

/// Fetches decoded entities and pages from the Star Wars API.
///
/// Each call either returns fully decoded data or a [`ClientError`]; partial
/// data is never returned. Implementations own transport concerns such as
/// timeouts and retries.
///
/// # Implementations
///
/// - [`crate::infrastructure::swapi::HttpEntityClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityClient: Send + Sync {
    /// Fetches one page of the planet collection (1-based).
    async fn planets_page(&self, page: u32) -> Result<Page<Planet>, ClientError>;

    /// Fetches one page of the film collection (1-based).
    async fn films_page(&self, page: u32) -> Result<Page<Film>, ClientError>;

    /// Runs a server-side name search over the people collection.
    ///
    /// Matches are returned in server order.
    async fn search_people(&self, name: &str) -> Result<Page<Person>, ClientError>;

    /// Fetches a single species by identifier.
    async fn species(&self, id: &str) -> Result<Species, ClientError>;

    /// Fetches a single starship by identifier.
    async fn starship(&self, id: &str) -> Result<Starship, ClientError>;

    /// Checks whether the upstream API is reachable.
    async fn health_check(&self) -> bool;
}
