//! Error types shared across layers.
//!
//! - [`ClientError`] - failures at the [`crate::domain::client::EntityClient`] boundary
//! - [`MalformedReference`] - hyperlinks that carry no identifier
//! - [`QueryError`] - internal outcome of an aggregate query, folded into
//!   [`crate::domain::aggregate::AggregateResult`] before leaving the service
//! - [`AppError`] - web-layer failures rendered as JSON error bodies

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Errors returned by an entity client.
///
/// A client either returns fully decoded data or one of these; it never
/// returns partial data.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or body decoding failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested resource does not exist upstream.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Upstream returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A request URL could not be built from the configured base URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// A collection reported more pages than a walk will fetch.
    #[error("{collection} reports {count} items, more than {max_pages} pages")]
    TooManyPages {
        collection: &'static str,
        count: u64,
        max_pages: u32,
    },
}

impl ClientError {
    /// Returns true for failures that may succeed when retried.
    ///
    /// Client errors (4xx) and URL construction failures are permanent.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            Self::NotFound(_) | Self::Url(_) | Self::TooManyPages { .. } => false,
        }
    }
}

/// A hyperlink that does not resolve to an entity identifier.
///
/// Hyperlinks are the only foreign keys the API exposes, so a link that fails
/// to parse is a data-integrity problem rather than missing data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed reference: {link:?}")]
pub struct MalformedReference {
    pub link: String,
}

/// Reasons an aggregate query stops before producing its value.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The anchor entity of the query does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Reference(#[from] MalformedReference),

    #[error("query cancelled")]
    Cancelled,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Web-layer error rendered as `{"error": {"code", "message", "details"}}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => {
                ("validation_error", message.clone(), details.clone())
            }
            AppError::NotFound { message, details } => {
                ("not_found", message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
