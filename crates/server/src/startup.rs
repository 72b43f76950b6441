use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, LogFormat, StorageBackend, StorageConfig};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use service::{
    seed::seed_initial_data,
    storage::{DocumentStore, JsonDocumentStore},
    DataService,
};

use crate::{errors::StartupError, routes, state::ServerState};

/// Initialize logging via shared common utils
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => init_logging_default(),
        LogFormat::Json => init_logging_json(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the document store selected by `[storage]`.
pub async fn build_store(cfg: &StorageConfig) -> Result<Arc<dyn DocumentStore>, StartupError> {
    match cfg.backend {
        StorageBackend::Memory => {
            info!("using in-memory document store");
            Ok(JsonDocumentStore::in_memory())
        }
        StorageBackend::File => {
            info!(path = %cfg.path, "using json file document store");
            Ok(JsonDocumentStore::new(&cfg.path).await?)
        }
        #[cfg(feature = "mongo")]
        StorageBackend::Mongo => {
            let store = service::storage::MongoDocumentStore::connect(&cfg.url, &cfg.database).await?;
            Ok(store)
        }
        #[cfg(not(feature = "mongo"))]
        StorageBackend::Mongo => Err(StartupError::InvalidConfig(
            "storage.backend = \"mongo\" needs a build with the `mongo` feature".into(),
        )),
    }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(err = %e, "failed to listen for ctrl_c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Open storage, seed, then serve until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let store = build_store(&cfg.storage).await?;
    let data = DataService::new(store);

    if cfg.seed.enabled {
        // Seeding problems are reported but never keep the API from starting.
        if let Err(e) = seed_initial_data(&data).await {
            error!(err = %e, "seeding initial data failed");
        }
    }

    let app: Router = routes::build_router(ServerState::new(data), build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.storage.backend, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_needs_no_files() -> anyhow::Result<()> {
        let cfg = StorageConfig { backend: StorageBackend::Memory, ..Default::default() };
        let store = build_store(&cfg).await?;
        store.ping().await?;
        Ok(())
    }

    #[tokio::test]
    async fn file_backend_creates_its_directory() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("studio_startup_{}", std::process::id()));
        let path = dir.join("data").join("studio.json");
        let cfg = StorageConfig {
            backend: StorageBackend::File,
            path: path.to_string_lossy().into_owned(),
            ..Default::default()
        };
        let store = build_store(&cfg).await?;
        store.ping().await?;
        assert!(tokio::fs::metadata(&path).await?.is_file());
        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[test]
    fn bind_addr_from_config() -> anyhow::Result<()> {
        let cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg)?.port(), 8001);
        Ok(())
    }
}
