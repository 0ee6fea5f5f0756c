//! API error taxonomy.
//!
//! Errors surface to callers as an HTTP status code and a JSON body with a
//! single `detail` field. Parse failures map to fixed messages; internal
//! error text never reaches the response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use docify_core::RepoUrlError;

/// Errors surfaced by the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed repository URL
    #[error("{0}")]
    InvalidRequest(String),

    /// Repository host is not the supported forge
    #[error("only github.com repositories are supported in this demo")]
    UnsupportedHost,

    /// Unknown job identifier
    #[error("job not found")]
    NotFound,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::UnsupportedHost => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<RepoUrlError> for ApiError {
    fn from(err: RepoUrlError) -> Self {
        match err {
            RepoUrlError::UnsupportedHost => ApiError::UnsupportedHost,
            other => ApiError::InvalidRequest(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn maps_parse_errors_onto_the_taxonomy() {
        assert_eq!(
            ApiError::from(RepoUrlError::UnsupportedHost),
            ApiError::UnsupportedHost
        );
        assert_eq!(
            ApiError::from(RepoUrlError::Missing),
            ApiError::InvalidRequest("repository_url is required".to_string())
        );
    }

    #[tokio::test]
    async fn missing_url_is_a_400_with_detail() {
        let response = ApiError::from(RepoUrlError::Missing).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["detail"].as_str().unwrap().contains("required"));
    }

    #[tokio::test]
    async fn unknown_job_is_a_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unsupported_host_is_a_400() {
        let response = ApiError::UnsupportedHost.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
