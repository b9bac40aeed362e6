//! Storage implementations.

use std::sync::Arc;

use tracing::info;
#[cfg(not(feature = "mongodb"))]
use tracing::error;

use crate::config::{StorageConfig, StorageType};
use crate::interfaces::{MovieInfoStore, ReviewStore};

pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use memory::{MemoryMovieInfoStore, MemoryReviewStore};

#[cfg(feature = "mongodb")]
pub use mongodb::{MongoMovieInfoStore, MongoReviewStore};

/// Initialize the MovieInfo store based on configuration.
pub async fn init_movie_info_store(
    config: &StorageConfig,
) -> Result<Arc<dyn MovieInfoStore>, Box<dyn std::error::Error>> {
    info!(storage = %config.storage_type, "Initializing MovieInfo storage");

    match config.storage_type {
        StorageType::Memory => Ok(Arc::new(MemoryMovieInfoStore::new())),
        #[cfg(feature = "mongodb")]
        StorageType::Mongodb => {
            let client = ::mongodb::Client::with_uri_str(&config.mongodb.uri).await?;
            let store = MongoMovieInfoStore::new(&client, &config.mongodb.database).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongodb"))]
        StorageType::Mongodb => {
            error!("MongoDB storage requested but 'mongodb' feature is not enabled");
            Err("MongoDB feature not enabled".into())
        }
    }
}

/// Initialize the Review store based on configuration.
pub async fn init_review_store(
    config: &StorageConfig,
) -> Result<Arc<dyn ReviewStore>, Box<dyn std::error::Error>> {
    info!(storage = %config.storage_type, "Initializing Review storage");

    match config.storage_type {
        StorageType::Memory => Ok(Arc::new(MemoryReviewStore::new())),
        #[cfg(feature = "mongodb")]
        StorageType::Mongodb => {
            let client = ::mongodb::Client::with_uri_str(&config.mongodb.uri).await?;
            let store = MongoReviewStore::new(&client, &config.mongodb.database).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongodb"))]
        StorageType::Mongodb => {
            error!("MongoDB storage requested but 'mongodb' feature is not enabled");
            Err("MongoDB feature not enabled".into())
        }
    }
}
