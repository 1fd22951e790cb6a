//! API route configuration.

use crate::api::handlers::{
    population_handler, species_classifications_handler, starships_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Aggregate query routes, nested under `/api/swapi`.
///
/// # Endpoints
///
/// - `GET /population`              - Total population of all planets
/// - `GET /species-classifications` - Species classifications in episode 1
/// - `GET /starships`               - Starships of a person (`?person_name=`)
pub fn swapi_routes() -> Router<AppState> {
    Router::new()
        .route("/population", get(population_handler))
        .route(
            "/species-classifications",
            get(species_classifications_handler),
        )
        .route("/starships", get(starships_handler))
}
