//! Handlers for the aggregate SWAPI queries.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Serialize;
use validator::Validate;

use crate::api::dto::starships::StarshipsQuery;
use crate::domain::aggregate::{AggregateResult, FailureKind};
use crate::domain::entities::Starship;
use crate::error::AppError;
use crate::state::AppState;

/// Envelope plus the status code chosen for it.
pub type AggregateResponse<T> = (StatusCode, Json<AggregateResult<T>>);

/// Returns the total population of all planets.
///
/// # Endpoint
///
/// `GET /api/swapi/population`
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Success", "data": "1711401432500" }
/// ```
pub async fn population_handler(State(state): State<AppState>) -> AggregateResponse<String> {
    respond(state.population_service.compute_total_population().await)
}

/// Returns the distinct species classifications of episode 1.
///
/// # Endpoint
///
/// `GET /api/swapi/species-classifications`
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Success", "data": ["mammal", "artificial"] }
/// ```
///
/// When no film has episode number 1 the body carries `success: false` and
/// the message `film not found`.
pub async fn species_classifications_handler(
    State(state): State<AppState>,
) -> AggregateResponse<Vec<String>> {
    respond(
        state
            .species_service
            .episode_one_species_classifications()
            .await,
    )
}

/// Returns the starships flown by the first person matching `person_name`.
///
/// # Endpoint
///
/// `GET /api/swapi/starships?person_name=Luke%20Skywalker`
///
/// # Query Parameters
///
/// - `person_name` (optional): Name to search for (default: `Luke Skywalker`)
///
/// # Errors
///
/// Returns 400 Bad Request if `person_name` is empty, longer than 100
/// characters, or contains unexpected characters.
pub async fn starships_handler(
    State(state): State<AppState>,
    Query(params): Query<StarshipsQuery>,
) -> Result<AggregateResponse<Vec<Starship>>, AppError> {
    params.validate()?;

    let result = state
        .starship_service
        .starships_by_person_name(params.person_name.as_deref())
        .await;

    Ok(respond(result))
}

/// Chooses the status code for a query result.
///
/// | Outcome                          | Status |
/// |----------------------------------|--------|
/// | success                          | 200    |
/// | anchor entity not found          | 200    |
/// | upstream fetch failed            | 502    |
/// | cancelled by shutdown            | 503    |
///
/// A missing film or person is a normal answer and stays a 200 with
/// `success: false` in the body.
pub fn respond<T: Serialize>(result: AggregateResult<T>) -> AggregateResponse<T> {
    let status = match result.failure {
        None | Some(FailureKind::NotFound) => StatusCode::OK,
        Some(FailureKind::Upstream) => StatusCode::BAD_GATEWAY,
        Some(FailureKind::Cancelled) => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(result))
}
