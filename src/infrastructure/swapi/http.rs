//! Status-code checks shared by every SWAPI request.

use crate::error::ClientError;

/// Checks an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **404 Not Found** → [`ClientError::NotFound`] carrying the request URL
/// - **Non-success status** → [`ClientError::Api`] with status code and
///   response body
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(resp.url().to_string()));
    }
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let resp = mock_response(404, r#"{"detail":"Not found"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn check_response_server_error_keeps_body() {
        let resp = mock_response(503, "maintenance");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ClientError::Api { status, ref message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn check_response_client_error_is_permanent() {
        let resp = mock_response(400, "bad request");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 400, .. }));
        assert!(!err.is_transient());
    }
}
