//! Abstract interfaces for moviehub components.
//!
//! These traits define the storage contracts the CRUD services run on.
//! Remote lookups used by the aggregator live in `moviehub_client::traits`.

pub mod error;
pub mod movie_info_store;
pub mod review_store;

pub use error::{Result, StorageError};
pub use movie_info_store::MovieInfoStore;
pub use review_store::ReviewStore;
