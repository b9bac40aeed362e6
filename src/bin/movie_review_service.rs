//! movie-review-service: CRUD over reviews.
//!
//! ## Configuration
//! - `server.review_port` (default 8081)
//! - `storage.type`: `memory` or `mongodb`

use std::sync::Arc;

use tracing::{error, info};

use moviehub::config::Config;
use moviehub::handlers::review::router;
use moviehub::services::ReviewService;
use moviehub::storage::init_review_store;
use moviehub::utils::bootstrap::{init_tracing, parse_config_path, serve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = parse_config_path();
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Starting movie-review-service");

    let store = init_review_store(&config.storage).await?;
    let service = Arc::new(ReviewService::new(store));

    let addr = config.server.listen_addr(config.server.review_port)?;
    serve("movie-review-service", router(service), addr).await
}
