//! In-memory ReviewStore implementation.

use async_trait::async_trait;
use moviehub_client::Review;
use tokio::sync::RwLock;

use super::next_id;
use crate::interfaces::{Result, ReviewStore, StorageError};

/// In-memory Review store.
#[derive(Default)]
pub struct MemoryReviewStore {
    records: RwLock<Vec<Review>>,
    fail: RwLock<bool>,
}

impl MemoryReviewStore {
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
            return Err(StorageError::Unavailable("review store".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn find_all(&self) -> Result<Vec<Review>> {
        self.check().await?;
        Ok(self.records.read().await.clone())
    }

    async fn find_by_movie_info_id(&self, movie_info_id: &str) -> Result<Vec<Review>> {
        self.check().await?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.movie_info_id.as_deref() == Some(movie_info_id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Review>> {
        self.check().await?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.id.as_deref() == Some(id))
            .cloned())
    }

    async fn save(&self, mut review: Review) -> Result<Review> {
        self.check().await?;
        let mut records = self.records.write().await;

        let id = match review.id.clone() {
            Some(id) => id,
            None => {
                let id = next_id();
                review.id = Some(id.clone());
                id
            }
        };

        match records.iter_mut().find(|r| r.id.as_deref() == Some(id.as_str())) {
            Some(existing) => *existing = review.clone(),
            None => records.push(review.clone()),
        }

        Ok(review)
    }

    async fn replace(&self, review: Review) -> Result<Option<Review>> {
        self.check().await?;
        let Some(id) = review.id.as_deref() else {
            return Ok(None);
        };

        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id.as_deref() == Some(id)) {
            Some(existing) => {
                *existing = review.clone();
                Ok(Some(review))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.check().await?;
        self.records
            .write()
            .await
            .retain(|r| r.id.as_deref() != Some(id));
        Ok(())
    }
}
