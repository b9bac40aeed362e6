//! MovieInfo storage interface.

use async_trait::async_trait;
use moviehub_client::MovieInfo;

use super::error::Result;

/// Interface for MovieInfo persistence.
///
/// Identifiers are assigned by the store on first save and never change.
///
/// Implementations:
/// - `MemoryMovieInfoStore`: In-process records
/// - `MongoMovieInfoStore`: MongoDB storage
#[async_trait]
pub trait MovieInfoStore: Send + Sync {
    /// Retrieve every stored record.
    async fn find_all(&self) -> Result<Vec<MovieInfo>>;

    /// Retrieve records whose `year` equals the given value.
    async fn find_by_year(&self, year: i32) -> Result<Vec<MovieInfo>>;

    /// Retrieve a single record.
    ///
    /// Returns `None` if no record has this id.
    async fn find_by_id(&self, id: &str) -> Result<Option<MovieInfo>>;

    /// Insert (when `id` is `None`) or replace a record.
    ///
    /// Returns the stored record with its id set.
    async fn save(&self, movie_info: MovieInfo) -> Result<MovieInfo>;

    /// Replace a record that already exists.
    ///
    /// Never inserts: returns `None` when the record has no id or no stored
    /// record has it, e.g. after a concurrent delete.
    async fn replace(&self, movie_info: MovieInfo) -> Result<Option<MovieInfo>>;

    /// Remove a record. Removing an absent id is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}
