//! HTTP error mapping.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moviehub_client::ClientError;
use tracing::error;

use crate::interfaces::StorageError;
use crate::validation::ValidationError;

/// Errors returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request could not be parsed.
    #[error("{0}")]
    BadRequest(String),

    /// No record with the requested id. Rendered with an empty body.
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A downstream service call failed.
    #[error(transparent)]
    Downstream(#[from] ClientError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Downstream(err) => match err {
                ClientError::Client { status, .. } => {
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST)
                }
                ClientError::Server { .. } | ClientError::InvalidUrl(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                ClientError::Transport(_) => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound => status.into_response(),
            ApiError::Storage(err) => {
                error!(error = %err, "storage operation failed");
                (status, err.to_string()).into_response()
            }
            ApiError::Downstream(err) => (status, err.message()).into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_bad_request_with_message() {
        let (status, body) = body_of(ValidationError("movieInfo.name must be present".into()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "movieInfo.name must be present");
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let (status, body) = body_of(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_storage_is_internal_error() {
        let (status, _) = body_of(StorageError::Unavailable("down".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_downstream_client_error_keeps_status() {
        let err = ClientError::Client {
            status: 404,
            message: "There is no MovieInfo available for the passed in id: abc".into(),
        };
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "There is no MovieInfo available for the passed in id: abc");
    }

    #[tokio::test]
    async fn test_downstream_server_error_is_internal_error() {
        let err = ClientError::Server {
            status: 503,
            message: "Server exception in MoviesInfoService MovieInfo Service Unavailable".into(),
        };
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            "Server exception in MoviesInfoService MovieInfo Service Unavailable"
        );
    }
}
