//! Shared storage integration tests.
//!
//! Tests the MovieInfoStore and ReviewStore interfaces against all
//! implementations. Each implementation's test binary runs these through
//! the `run_*_store_tests!` macros.

pub mod movie_info_store_tests;
pub mod review_store_tests;
