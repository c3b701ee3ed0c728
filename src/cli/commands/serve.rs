use anyhow::Context;
use clap::Args;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{self, AppConfig};
use crate::database::{DatabaseManager, MemoryPlanetStore, PgPlanetStore, PlanetStore};
use crate::storage::DiskPhotoStore;
use crate::AppState;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[arg(long, help = "Port to listen on (overrides PORT / PLANETS_API_PORT)")]
    pub port: Option<u16>,
}

pub async fn handle(args: ServeArgs) -> anyhow::Result<()> {
    let mut config: AppConfig = config::config().clone();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    info!("Starting Planets API in {:?} mode", config.environment);

    let mut pool = None;
    let store: Arc<dyn PlanetStore> = match config.database.url {
        Some(_) => {
            let pg = DatabaseManager::connect(&config.database)
                .await
                .context("failed to connect to database")?;
            DatabaseManager::migrate(&pg)
                .await
                .context("failed to apply migrations")?;
            info!("Using Postgres planet store");
            pool = Some(pg.clone());
            Arc::new(PgPlanetStore::new(pg))
        }
        None => {
            warn!("DATABASE_URL not set; planets are kept in memory and lost on restart");
            Arc::new(MemoryPlanetStore::new())
        }
    };

    let photos = DiskPhotoStore::open(config.uploads.dir.clone())
        .await
        .with_context(|| {
            format!("failed to prepare uploads dir {}", config.uploads.dir.display())
        })?;

    let bind_addr = config.bind_addr();
    let app = crate::app(AppState::new(store, Arc::new(photos), config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Planets API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(pool) = pool {
        DatabaseManager::close(&pool).await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
