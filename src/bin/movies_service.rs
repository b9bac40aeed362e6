//! movies-service: aggregates a MovieInfo with its reviews.
//!
//! ## Architecture
//! ```text
//! [Client] -> [movies-service] -> [movie-info-service]   (retried on 5xx)
//!                             \-> [movie-review-service]
//! ```
//!
//! ## Configuration
//! - `server.movies_port` (default 8082)
//! - `rest_client.movie_info_url`, `rest_client.reviews_url`
//! - `rest_client.retry.max_retries`, `rest_client.retry.delay_ms`

use std::sync::Arc;

use tracing::{error, info};

use moviehub::config::Config;
use moviehub::handlers::movies::router;
use moviehub::services::MoviesService;
use moviehub::utils::bootstrap::{init_tracing, parse_config_path, serve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = parse_config_path();
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        movie_info_url = %config.rest_client.movie_info_url,
        reviews_url = %config.rest_client.reviews_url,
        max_retries = config.rest_client.retry.max_retries,
        "Starting movies-service"
    );

    let service = Arc::new(MoviesService::from_config(&config.rest_client)?);

    let addr = config.server.listen_addr(config.server.movies_port)?;
    serve("movies-service", router(service), addr).await
}
