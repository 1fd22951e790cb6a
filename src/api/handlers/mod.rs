//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod swapi;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use swapi::{population_handler, species_classifications_handler, starships_handler};
