//! In-memory MovieInfoStore implementation.

use async_trait::async_trait;
use moviehub_client::MovieInfo;
use tokio::sync::RwLock;

use super::next_id;
use crate::interfaces::{MovieInfoStore, Result, StorageError};

/// In-memory MovieInfo store.
#[derive(Default)]
pub struct MemoryMovieInfoStore {
    records: RwLock<Vec<MovieInfo>>,
    fail: RwLock<bool>,
}

impl MemoryMovieInfoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `StorageError::Unavailable`.
    pub async fn set_fail(&self, fail: bool) {
        *self.fail.write().await = fail;
    }

    pub async fn stored_count(&self) -> usize {
        self.records.read().await.len()
    }

    async fn check(&self) -> Result<()> {
        if *self.fail.read().await {
            return Err(StorageError::Unavailable("movie info store".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MovieInfoStore for MemoryMovieInfoStore {
    async fn find_all(&self) -> Result<Vec<MovieInfo>> {
        self.check().await?;
        Ok(self.records.read().await.clone())
    }

    async fn find_by_year(&self, year: i32) -> Result<Vec<MovieInfo>> {
        self.check().await?;
        let records = self.records.read().await;
        Ok(records.iter().filter(|m| m.year == year).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MovieInfo>> {
        self.check().await?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|m| m.id.as_deref() == Some(id))
            .cloned())
    }

    async fn save(&self, mut movie_info: MovieInfo) -> Result<MovieInfo> {
        self.check().await?;
        let mut records = self.records.write().await;

        let id = match movie_info.id.clone() {
            Some(id) => id,
            None => {
                let id = next_id();
                movie_info.id = Some(id.clone());
                id
            }
        };

        match records.iter_mut().find(|m| m.id.as_deref() == Some(id.as_str())) {
            Some(existing) => *existing = movie_info.clone(),
            None => records.push(movie_info.clone()),
        }

        Ok(movie_info)
    }

    async fn replace(&self, movie_info: MovieInfo) -> Result<Option<MovieInfo>> {
        self.check().await?;
        let Some(id) = movie_info.id.as_deref() else {
            return Ok(None);
        };

        let mut records = self.records.write().await;
        match records.iter_mut().find(|m| m.id.as_deref() == Some(id)) {
            Some(existing) => {
                *existing = movie_info.clone();
                Ok(Some(movie_info))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.check().await?;
        self.records
            .write()
            .await
            .retain(|m| m.id.as_deref() != Some(id));
        Ok(())
    }
}
