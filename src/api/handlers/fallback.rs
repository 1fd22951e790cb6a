//! Fallback for unmatched routes.

use axum::extract::OriginalUri;
use serde_json::json;

use crate::error::AppError;

/// Renders unknown paths as a JSON 404.
pub async fn not_found_handler(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
