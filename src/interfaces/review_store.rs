//! Review storage interface.

use async_trait::async_trait;
use moviehub_client::Review;

use super::error::Result;

/// Interface for Review persistence.
///
/// Implementations:
/// - `MemoryReviewStore`: In-process records
/// - `MongoReviewStore`: MongoDB storage
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Retrieve every stored review.
    async fn find_all(&self) -> Result<Vec<Review>>;

    /// Retrieve reviews referencing the given MovieInfo id.
    async fn find_by_movie_info_id(&self, movie_info_id: &str) -> Result<Vec<Review>>;

    /// Retrieve a single review.
    ///
    /// Returns `None` if no review has this id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Review>>;

    /// Insert (when `id` is `None`) or replace a review.
    async fn save(&self, review: Review) -> Result<Review>;

    /// Replace a review that already exists.
    ///
    /// Never inserts: returns `None` when the review has no id or no stored
    /// review has it.
    async fn replace(&self, review: Review) -> Result<Option<Review>>;

    /// Remove a review. Removing an absent id is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}
