//! moviehub - movie info, review and aggregation services
//!
//! Three small REST services sharing one library:
//! - movie-info-service: CRUD over MovieInfo records
//! - movie-review-service: CRUD over reviews
//! - movies-service: combines a MovieInfo with its reviews over HTTP

pub mod config;
pub mod handlers;
pub mod interfaces;
pub mod services;
pub mod storage;
pub mod utils;
pub mod validation;

pub use moviehub_client::{Movie, MovieInfo, Review};
