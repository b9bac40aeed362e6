//! MovieInfo CRUD service.

use std::sync::Arc;

use moviehub_client::MovieInfo;
use tracing::{debug, info};

use crate::interfaces::{MovieInfoStore, Result};

/// MovieInfo CRUD service.
///
/// Pass-through to the MovieInfo store. Request validation happens at the
/// HTTP boundary before `create` is called.
pub struct MovieInfoService {
    store: Arc<dyn MovieInfoStore>,
}

impl MovieInfoService {
    pub fn new(store: Arc<dyn MovieInfoStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<MovieInfo>> {
        self.store.find_all().await
    }

    pub async fn list_by_year(&self, year: i32) -> Result<Vec<MovieInfo>> {
        debug!(year, "Listing MovieInfos by year");
        self.store.find_by_year(year).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<MovieInfo>> {
        self.store.find_by_id(id).await
    }

    /// Persist a new record. Any id on the input is discarded.
    pub async fn create(&self, mut movie_info: MovieInfo) -> Result<MovieInfo> {
        movie_info.id = None;
        let saved = self.store.save(movie_info).await?;
        info!(id = ?saved.id, name = %saved.name, "MovieInfo created");
        Ok(saved)
    }

    /// Replace the fields of an existing record.
    ///
    /// Returns `None` when no record has the given id.
    pub async fn update(&self, id: &str, replacement: MovieInfo) -> Result<Option<MovieInfo>> {
        let Some(mut existing) = self.store.find_by_id(id).await? else {
            debug!(id, "MovieInfo to update not found");
            return Ok(None);
        };

        existing.apply_update(replacement);
        let saved = self.store.replace(existing).await?;
        match &saved {
            Some(_) => info!(id, "MovieInfo updated"),
            None => debug!(id, "MovieInfo removed before update"),
        }
        Ok(saved)
    }

    /// Remove a record. Succeeds when the record is absent.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete_by_id(id).await?;
        info!(id, "MovieInfo deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "movie_info_tests.rs"]
mod tests;
