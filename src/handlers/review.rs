//! REST API for reviews.
//!
//! - `GET    /v1/reviews[?movieInfoId=<id>]`
//! - `POST   /v1/reviews`
//! - `PUT    /v1/reviews/:id`
//! - `DELETE /v1/reviews/:id`

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use moviehub_client::Review;
use serde::Deserialize;

use super::error::ApiError;
use super::health;
use crate::services::ReviewService;
use crate::validation::Validate;

type AppState = Arc<ReviewService>;

/// Build the axum router (separated for testing).
pub fn router(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/reviews", get(list).post(create))
        .route("/v1/reviews/:id", put(update).delete(delete))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    movie_info_id: Option<String>,
}

async fn list(
    State(service): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let Query(params) = params?;
    let reviews = match params.movie_info_id {
        Some(movie_info_id) => service.list_by_movie_info_id(&movie_info_id).await?,
        None => service.list_all().await?,
    };
    Ok(Json(reviews))
}

async fn create(
    State(service): State<AppState>,
    body: Result<Json<Review>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let Json(review) = body?;
    review.validate()?;
    let saved = service.create(review).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn update(
    State(service): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Review>, JsonRejection>,
) -> Result<Json<Review>, ApiError> {
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
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    use super::*;
    use crate::interfaces::ReviewStore;
    use crate::storage::MemoryReviewStore;

    async fn test_app() -> (Router, Arc<MemoryReviewStore>) {
        let store = Arc::new(MemoryReviewStore::new());
        store
            .save(Review::new("1", "Awesome Movie", 9.0).with_id("abc"))
            .await
            .unwrap();
        store
            .save(Review::new("1", "Awesome Movie1", 9.0))
            .await
            .unwrap();
        store
            .save(Review::new("2", "Excellent Movie", 8.0))
            .await
            .unwrap();

        let app = router(Arc::new(ReviewService::new(store.clone())));
        (app, store)
    }

    fn request(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_list_all() {
        let (app, _) = test_app().await;

        let resp = app.oneshot(request("GET", "/v1/reviews", None)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let reviews: Vec<Review> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(reviews.len(), 3);
    }

    #[tokio::test]
    async fn test_list_by_movie_info_id() {
        let (app, _) = test_app().await;

        let resp = app
            .oneshot(request("GET", "/v1/reviews?movieInfoId=1", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let reviews: Vec<Review> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert_eq!(reviews.len(), 2);
        assert!(reviews
            .iter()
            .all(|r| r.movie_info_id.as_deref() == Some("1")));
    }

    #[tokio::test]
    async fn test_list_for_unknown_movie_is_empty() {
        let (app, _) = test_app().await;

        let resp = app
            .oneshot(request("GET", "/v1/reviews?movieInfoId=zzz", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_bytes(resp).await, b"[]");
    }

    #[tokio::test]
    async fn test_create_returns_created() {
        let (app, store) = test_app().await;

        let body = serde_json::json!({
            "movieInfoId": "1",
            "comment": "Awesome Movie",
            "rating": 9.0
        });
        let resp = app
            .oneshot(request("POST", "/v1/reviews", Some(body)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let json: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
        assert!(json["reviewId"].is_string());
        assert_eq!(json["movieInfoId"], "1");
        assert_eq!(store.stored_count().await, 4);
    }

    #[tokio::test]
    async fn test_create_invalid_is_bad_request() {
        let (app, store) = test_app().await;

        let body = serde_json::json!({
            "movieInfoId": null,
            "comment": "Awesome Movie",
            "rating": -9.0
        });
        let resp = app
            .oneshot(request("POST", "/v1/reviews", Some(body)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            String::from_utf8(body_bytes(resp).await).unwrap(),
            "rating.movieInfoId: must not be null, rating.negative : rating is negative and please pass a non-negative value"
        );
        assert_eq!(store.stored_count().await, 3);
    }

    #[tokio::test]
    async fn test_update_existing() {
        let (app, store) = test_app().await;

        let body = serde_json::json!({
            "movieInfoId": "1",
            "comment": "Not an Awesome Movie",
            "rating": 8.0
        });
        let resp = app
            .oneshot(request("PUT", "/v1/reviews/abc", Some(body)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let stored = store.find_by_id("abc").await.unwrap().unwrap();
        assert_eq!(stored.comment, "Not an Awesome Movie");
        assert_eq!(stored.rating, 8.0);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (app, _) = test_app().await;

        let body = serde_json::json!({ "movieInfoId": "1", "comment": "x", "rating": 1.0 });
        let resp = app
            .oneshot(request("PUT", "/v1/reviews/def", Some(body)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_no_content() {
        let (app, store) = test_app().await;

        let resp = app
            .oneshot(request("DELETE", "/v1/reviews/abc", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(store.stored_count().await, 2);
    }
}
