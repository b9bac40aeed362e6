//! REST API for MovieInfo records.
//!
//! - `GET    /v1/movieinfos[?year=<int>]`
//! - `GET    /v1/movieinfos/:id`
//! - `POST   /v1/movieinfos`
//! - `PUT    /v1/movieinfos/:id`
//! - `DELETE /v1/movieinfos/:id`

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use moviehub_client::MovieInfo;
use serde::{de, Deserialize, Deserializer};

use super::error::ApiError;
use super::health;
use crate::services::MovieInfoService;
use crate::validation::Validate;

type AppState = Arc<MovieInfoService>;

/// Build the axum router (separated for testing).
pub fn router(service: Arc<MovieInfoService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/movieinfos", get(list).post(create))
        .route(
            "/v1/movieinfos/:id",
            get(get_by_id).put(update).delete(delete),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    year: Option<i32>,
}

/// `?year=` with no value means no filter.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

async fn list(
    State(service): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<MovieInfo>>, ApiError> {
    let Query(params) = params?;
    let records = match params.year {
        Some(year) => service.list_by_year(year).await?,
        None => service.list_all().await?,
    };
    Ok(Json(records))
}

async fn get_by_id(
    State(service): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieInfo>, ApiError> {
    service
        .get(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create(
    State(service): State<AppState>,
    body: Result<Json<MovieInfo>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieInfo>), ApiError> {
    let Json(movie_info) = body?;
    movie_info.validate()?;
    let saved = service.create(movie_info).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn update(
    State(service): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<MovieInfo>, JsonRejection>,
) -> Result<Json<MovieInfo>, ApiError> {
    let Json(replacement) = body?;
    service
        .update(&id, replacement)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn delete(
    State(service): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "movie_info_tests.rs"]
mod tests;
