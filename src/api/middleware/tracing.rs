//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::http::{Request, Response, StatusCode};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, MakeSpan, OnResponse, TraceLayer};
use tracing::{Level, Span};

/// Trace layer used by the application router.
pub type HttpTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan, DefaultOnRequest, ResponseLog>;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request runs inside an `http_request` span carrying the method, the
/// path and the raw query string (the `person_name` search, for instance).
/// The span's `status` field is filled in once the response is ready, and
/// one event records the status and latency. 5xx responses (upstream
/// failure, cancelled query) are logged at `WARN`.
///
/// # Example Logs
///
/// ```text
/// INFO http_request{method=GET path=/api/swapi/starships query=person_name=Han%20Solo status=200}: response sent status=200 latency_ms=412
/// WARN http_request{method=GET path=/api/swapi/population query= status=502}: response sent status=502 latency_ms=2031
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api/swapi", swapi_routes())
///     .layer(tracing::layer());
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(ResponseLog)
}

/// Opens the `http_request` span for an incoming request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = request.uri().path(),
            query = request.uri().query().unwrap_or_default(),
            status = tracing::field::Empty,
        )
    }
}

/// Records the response status on the request span and logs it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseLog;

impl<B> OnResponse<B> for ResponseLog {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status();
        span.record("status", status.as_u16());

        let latency_ms = latency.as_millis();
        if status_level(status) == Level::WARN {
            tracing::warn!(status = status.as_u16(), latency_ms, "response sent");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "response sent");
        }
    }
}

/// Log level for a response with `status`.
fn status_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_log_at_warn() {
        assert_eq!(status_level(StatusCode::BAD_GATEWAY), Level::WARN);
        assert_eq!(status_level(StatusCode::SERVICE_UNAVAILABLE), Level::WARN);
    }

    #[test]
    fn test_other_statuses_log_at_info() {
        assert_eq!(status_level(StatusCode::OK), Level::INFO);
        assert_eq!(status_level(StatusCode::BAD_REQUEST), Level::INFO);
        assert_eq!(status_level(StatusCode::NOT_FOUND), Level::INFO);
    }

    #[test]
    fn test_response_log_accepts_disabled_span() {
        let mut make_span = RequestSpan;
        let request = Request::get("/api/swapi/starships?person_name=Leia")
            .body(())
            .unwrap();
        let span = make_span.make_span(&request);

        let response = Response::builder().status(StatusCode::OK).body(()).unwrap();
        ResponseLog.on_response(&response, Duration::from_millis(3), &span);
    }
}
