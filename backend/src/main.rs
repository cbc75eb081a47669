//! Homework service entry-point: loads configuration, seeds the demo
//! classroom when asked, and serves the REST endpoints.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use homework::domain::IdGenerator;
use homework::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use homework::inbound::http::health::HealthState;
use homework::outbound::memory::{InMemoryArchiveStore, InMemoryEntityStore};
use server::{ServerConfig, ServerSettings, Stores, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load server settings: {e}")))?;
    // Example data is configured through the environment only and seeds
    // unless EXAMPLE_DATA_ENABLED=false.
    let example_data = ExampleDataSettings::load_from_iter(std::env::args_os().take(1))
        .map_err(|e| std::io::Error::other(format!("failed to load example data settings: {e}")))?;

    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ids = Arc::new(IdGenerator::new(Arc::clone(&clock)));
    let stores = Stores {
        entities: Arc::new(InMemoryEntityStore::new()),
        archive: Arc::new(InMemoryArchiveStore::new()),
    };

    seed_example_data_on_startup(&example_data, Arc::clone(&stores.entities), clock, ids)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let config = ServerConfig::from(&settings);
    info!(
        bind_addr = %config.bind_addr(),
        enforce_due_dates = settings.enforce_due_dates,
        "starting homework server"
    );

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config, stores)?.await
}
