use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worry_time::adapters::http::{router, AppState};
use worry_time::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
use worry_time::application::WorryApp;
use worry_time::config::{AppConfig, StorageBackend};
use worry_time::ports::KeyValueStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.log_level.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let store: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.storage.data_dir)),
        StorageBackend::Memory => {
            tracing::warn!("in-memory storage selected, nothing will survive a restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };
    let app = WorryApp::load(store, config.worry_time.settings()?);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        data_dir = %config.storage.data_dir.display(),
        "worry time listening"
    );

    axum::serve(listener, router(AppState::new(app))).await?;
    Ok(())
}
