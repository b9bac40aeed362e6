//! Wire model and REST clients for the moviehub services.
//!
//! This crate holds everything a caller needs to talk to the movie-info and
//! movie-review services over HTTP: the JSON model, typed clients with
//! status classification, and the fixed-backoff retry policy.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use moviehub_client::{MovieInfoClient, MovieInfoSource, RetryPolicy};
//!
//! async fn example() -> moviehub_client::Result<()> {
//!     let client = MovieInfoClient::new(
//!         "http://localhost:8080/v1/movieinfos",
//!         Duration::from_secs(5),
//!         RetryPolicy::default(),
//!     )?;
//!     let info = client.retrieve_movie_info("abc").await?;
//!     println!("{} ({})", info.name, info.year);
//!     Ok(())
//! }
//! ```
//!
//! # Mocking for Tests
//!
//! Implement [`MovieInfoSource`] and [`ReviewSource`] to feed the aggregator
//! without a network.

pub mod client;
pub mod error;
pub mod model;
pub mod retry;
pub mod traits;

pub use client::{
    build_http_client, MovieInfoClient, ReviewClient, DEFAULT_TIMEOUT, MOVIE_INFO_ID_PARAM,
};
pub use error::{ClientError, Result};
pub use model::{Movie, MovieInfo, Review};
pub use retry::RetryPolicy;
pub use traits::{MovieInfoSource, ReviewSource};
