//! Movies aggregation service.
//!
//! Combines one MovieInfo with the reviews that reference it. Both come from
//! remote services; nothing is stored locally.

use std::sync::Arc;

use moviehub_client::{
    build_http_client, ClientError, Movie, MovieInfoClient, MovieInfoSource, ReviewClient,
    ReviewSource,
};
use tracing::{error, info};

use crate::config::RestClientConfig;

/// Aggregates MovieInfo and reviews into a `Movie`.
pub struct MoviesService {
    movie_infos: Arc<dyn MovieInfoSource>,
    reviews: Arc<dyn ReviewSource>,
}

impl MoviesService {
    pub fn new(movie_infos: Arc<dyn MovieInfoSource>, reviews: Arc<dyn ReviewSource>) -> Self {
        Self {
            movie_infos,
            reviews,
        }
    }

    /// Build REST clients for both downstream services over one shared
    /// connection pool.
    pub fn from_config(config: &RestClientConfig) -> Result<Self, ClientError> {
        let http = build_http_client(config.timeout())?;
        let movie_infos = MovieInfoClient::with_http_client(
            http.clone(),
            &config.movie_info_url,
            config.retry.policy(),
        )?;
        let reviews = ReviewClient::with_http_client(http, &config.reviews_url)?;

        Ok(Self::new(Arc::new(movie_infos), Arc::new(reviews)))
    }

    /// Fetch the MovieInfo, then its reviews.
    ///
    /// Reviews are only requested once the MovieInfo lookup succeeded. Any
    /// MovieInfo failure, including not found, fails the whole request.
    pub async fn retrieve_movie(&self, movie_id: &str) -> Result<Movie, ClientError> {
        let movie_info = self
            .movie_infos
            .retrieve_movie_info(movie_id)
            .await
            .inspect_err(|e| log_failure("MovieInfo", movie_id, e))?;

        let reviews = self
            .reviews
            .retrieve_reviews(movie_id)
            .await
            .inspect_err(|e| log_failure("Reviews", movie_id, e))?;

        info!(movie_id, reviews = reviews.len(), "Movie assembled");
        Ok(Movie::new(movie_info, reviews))
    }
}

fn log_failure(source: &str, movie_id: &str, err: &ClientError) {
    if err.is_server_error() {
        error!(movie_id, source, error = %err, "Downstream lookup failed");
    } else {
        info!(movie_id, source, error = %err, "Downstream lookup rejected");
    }
}
