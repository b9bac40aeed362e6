//! Review CRUD service.

use std::sync::Arc;

use moviehub_client::Review;
use tracing::{debug, info};

use crate::interfaces::{Result, ReviewStore};

/// Review CRUD service.
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Review>> {
        self.store.find_all().await
    }

    pub async fn list_by_movie_info_id(&self, movie_info_id: &str) -> Result<Vec<Review>> {
        debug!(movie_info_id, "Listing reviews by MovieInfo id");
        self.store.find_by_movie_info_id(movie_info_id).await
    }

    /// Persist a new review. Any id on the input is discarded.
    pub async fn create(&self, mut review: Review) -> Result<Review> {
        review.id = None;
        let saved = self.store.save(review).await?;
        info!(id = ?saved.id, movie_info_id = ?saved.movie_info_id, "Review created");
        Ok(saved)
    }

    /// Copy comment and rating onto an existing review.
    ///
    /// Returns `None` when no review has the given id.
    pub async fn update(&self, id: &str, replacement: Review) -> Result<Option<Review>> {
        let Some(mut existing) = self.store.find_by_id(id).await? else {
            debug!(id, "Review to update not found");
            return Ok(None);
        };

        existing.apply_update(replacement);
        let saved = self.store.replace(existing).await?;
        match &saved {
            Some(_) => info!(id, "Review updated"),
            None => debug!(id, "Review removed before update"),
        }
        Ok(saved)
    }

    /// Remove a review. Succeeds when the review is absent.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete_by_id(id).await?;
        info!(id, "Review deleted");
        Ok(())
    }
}
