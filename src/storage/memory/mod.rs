//! In-memory storage implementations.
//!
//! Records live in insertion order behind a `tokio::sync::RwLock`.
//! Identifiers are UUID v4 strings. Used for local runs and tests.

mod movie_info_store;
mod review_store;

pub use movie_info_store::MemoryMovieInfoStore;
pub use review_store::MemoryReviewStore;

use uuid::Uuid;

fn next_id() -> String {
    Uuid::new_v4().to_string()
}
