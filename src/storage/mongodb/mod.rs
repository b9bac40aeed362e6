//! MongoDB implementations of storage interfaces.
//!
//! Documents use a string `_id`. New ids are ObjectId hex strings, but any
//! caller-supplied id is stored as-is.

mod movie_info_store;
mod review_store;

pub use movie_info_store::MongoMovieInfoStore;
pub use review_store::MongoReviewStore;

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};

use crate::interfaces::{Result, StorageError};

/// Collection names.
pub(crate) const MOVIE_INFOS_COLLECTION: &str = "movie_infos";
pub(crate) const REVIEWS_COLLECTION: &str = "reviews";

/// Generate a fresh document id.
fn next_id() -> String {
    ObjectId::new().to_hex()
}

fn get_str(doc: &Document, key: &str) -> Result<String> {
    doc.get_str(key)
        .map(str::to_string)
        .map_err(|e| StorageError::InvalidDocument(format!("{}: {}", key, e)))
}

fn get_optional_str(doc: &Document, key: &str) -> Option<String> {
    match doc.get(key) {
        Some(Bson::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Read a numeric field regardless of the BSON width it was stored with.
fn get_f64(doc: &Document, key: &str) -> Result<f64> {
    match doc.get(key) {
        Some(Bson::Double(v)) => Ok(*v),
        Some(Bson::Int32(v)) => Ok(f64::from(*v)),
        Some(Bson::Int64(v)) => Ok(*v as f64),
        other => Err(StorageError::InvalidDocument(format!(
            "{}: expected number, found {:?}",
            key, other
        ))),
    }
}
