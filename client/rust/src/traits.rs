//! Source traits consumed by the movies aggregator.
//!
//! The REST clients implement these; tests can substitute in-memory sources.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{MovieInfo, Review};

/// Lookup of a single MovieInfo by id.
#[async_trait]
pub trait MovieInfoSource: Send + Sync {
    /// Fetch the MovieInfo with the given id.
    ///
    /// A missing record is an error (`ClientError::Client` with status 404).
    async fn retrieve_movie_info(&self, movie_id: &str) -> Result<MovieInfo>;
}

/// Lookup of the reviews attached to a movie.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch all reviews referencing `movie_info_id`.
    ///
    /// A downstream 404 is reported as an empty list, not an error.
    async fn retrieve_reviews(&self, movie_info_id: &str) -> Result<Vec<Review>>;
}
