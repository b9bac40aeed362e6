//! movie-info-service: CRUD over MovieInfo records.
//!
//! ## Configuration
//! - `server.movie_info_port` (default 8080)
//! - `storage.type`: `memory` or `mongodb`

use std::sync::Arc;

use tracing::{error, info};

use moviehub::config::Config;
use moviehub::handlers::movie_info::router;
use moviehub::services::MovieInfoService;
use moviehub::storage::init_movie_info_store;
use moviehub::utils::bootstrap::{init_tracing, parse_config_path, serve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = parse_config_path();
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Starting movie-info-service");

    let store = init_movie_info_store(&config.storage).await?;
    let service = Arc::new(MovieInfoService::new(store));

    let addr = config.server.listen_addr(config.server.movie_info_port)?;
    serve("movie-info-service", router(service), addr).await
}
