//! REST API for the movies aggregate: `GET /v1/movies/:id`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use moviehub_client::Movie;

use super::error::ApiError;
use super::health;
use crate::services::MoviesService;

type AppState = Arc<MoviesService>;

/// Build the axum router (separated for testing).
pub fn router(service: Arc<MoviesService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/movies/:id", get(retrieve_movie))
        .with_state(service)
}

async fn retrieve_movie(
    State(service): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    Ok(Json(service.retrieve_movie(&movie_id).await?))
}
