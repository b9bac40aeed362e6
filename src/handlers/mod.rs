//! HTTP handlers for the three services.

pub mod error;
pub mod movie_info;
pub mod movies;
pub mod review;

pub use error::ApiError;

use axum::http::StatusCode;

/// Liveness check shared by every service.
async fn health() -> StatusCode {
    StatusCode::OK
}
