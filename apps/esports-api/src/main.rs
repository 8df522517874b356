use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_content::{ContentService, MongoDocumentStore};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // A missing or unreachable database degrades the API instead of stopping it
    let mongo_client = match &config.mongodb {
        Some(mongodb) => {
            info!("Connecting to MongoDB at {}", mongodb.redacted_url());
            match database::mongodb::connect_from_config_with_retry(mongodb, None).await {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!(error = %e, "MongoDB unreachable, starting without a database");
                    None
                }
            }
        }
        None => {
            warn!("DATABASE_URL / DATABASE_NAME not set, starting without a database");
            None
        }
    };

    let store = match (&mongo_client, &config.mongodb) {
        (Some(client), Some(mongodb)) => {
            info!("Using MongoDB database: {}", mongodb.database());
            MongoDocumentStore::new(client.database(mongodb.database()))
        }
        _ => MongoDocumentStore::unavailable(),
    };

    // Sample data is best-effort
    match ContentService::new(store.clone()).seed_if_empty().await {
        Ok(report) if report.total() > 0 => info!(
            events = report.events,
            team_members = report.team_members,
            gallery_images = report.gallery_images,
            "Seeded sample content"
        ),
        Ok(_) => {}
        Err(e) => warn!(error = %e, "Seeding sample content failed, continuing"),
    }

    let state = AppState { config, store };
    let app = api::app(&state);

    info!("Starting Esports Committee API with graceful shutdown (30s timeout)");

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(client) = mongo_client {
                info!("Shutting down: closing MongoDB connections");
                drop(client);
                info!("MongoDB connection closed successfully");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Esports Committee API shutdown complete");
    Ok(())
}
