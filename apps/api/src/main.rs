use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::{InMemoryItemRepository, ItemService};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // The store lives for the whole process; a restart resets it to empty
    // with the id counter back at 1.
    let repository = InMemoryItemRepository::new();
    let service = ItemService::new(repository);

    // Build router with API routes (state already applied per domain)
    let api_routes = api::routes(service);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes)?;

    // Merge the /health liveness endpoint into the app
    let app = router.merge(health_router());

    info!("Starting items API");

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
