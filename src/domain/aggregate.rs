//! Result envelope returned by every aggregate query.

use serde::Serialize;

use crate::error::QueryError;

/// Message carried by successful results.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Why a query produced a negative result.
///
/// Not serialized; the web layer uses it to choose a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The anchor entity (film, person) does not exist.
    NotFound,
    /// A fetch that the query cannot do without failed.
    Upstream,
    /// The query was cancelled before it completed.
    Cancelled,
}

/// Outcome of an aggregate query: `{success, message, data}`.
///
/// When `success` is false, `data` is the type's default value and `message`
/// explains why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
    #[serde(skip)]
    pub failure: Option<FailureKind>,
}

impl<T> AggregateResult<T> {
    /// Wraps a fully reduced value.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data,
            failure: None,
        }
    }
}

impl<T: Default> AggregateResult<T> {
    /// Builds a negative result with empty data.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: T::default(),
            failure: Some(kind),
        }
    }
}

impl<T: Default> From<QueryError> for AggregateResult<T> {
    fn from(err: QueryError) -> Self {
        let kind = match &err {
            QueryError::NotFound(_) => FailureKind::NotFound,
            QueryError::Cancelled => FailureKind::Cancelled,
            QueryError::Client(_) | QueryError::Reference(_) => FailureKind::Upstream,
        };

        let message = match &err {
            QueryError::Client(e) => format!("upstream request failed: {e}"),
            other => other.to_string(),
        };

        Self::failure(kind, message)
    }
}
