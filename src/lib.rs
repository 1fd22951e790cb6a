//! # SWAPI Aggregator
//!
//! Aggregate queries over the paginated, hypermedia-linked Star Wars API,
//! served over HTTP with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, hyperlink references, result envelope, client trait
//! - **Application Layer** ([`application`]) - Pagination walk, fan-out, query services
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client for the upstream API
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Queries
//!
//! - Total population of every planet
//! - Distinct species classifications appearing in episode 1
//! - Starships flown by a person found by name
//!
//! Every query fans out concurrently across pages or linked entities and
//! answers with `{success, message, data}`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point at a mirror
//! export SWAPI_BASE_URL="https://swapi.dev/api"
//!
//! # Start the service
//! cargo run
//!
//! # Or run a single query from the terminal
//! cargo run --bin swapi-cli -- starships --name "Han Solo"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PopulationService, SpeciesService, StarshipService};
    pub use crate::domain::aggregate::AggregateResult;
    pub use crate::domain::client::EntityClient;
    pub use crate::domain::entities::{Film, Page, Person, Planet, Species, Starship};
    pub use crate::error::{AppError, ClientError};
    pub use crate::state::AppState;
}
