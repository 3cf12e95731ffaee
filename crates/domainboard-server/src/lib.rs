//! domainboard-server - REST API over a record store.
//!
//! The router is built from an [`AppState`] holding any
//! [`RecordStore`](domainboard_core::RecordStore), so tests drive it in
//! process against a memory or temp-file store while [`serve`] runs it over
//! the configured JSON file.

mod config;
mod error;
mod handlers;
mod router;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use domainboard_file::FileRecordStore;

pub use config::{DEFAULT_DATA_FILE, DEFAULT_PORT, ServerConfig};
pub use error::{ApiError, ServerError};
pub use router::{API_PATH, AppState, build_router};

/// Bind `config.bind` and serve the API until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let store = FileRecordStore::with_options(&config.data_file, config.file_options());
    let app = build_router(AppState::new(Arc::new(store)));

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;

    let local = listener.local_addr().map_err(ServerError::Serve)?;
    info!(
        addr = %local,
        data_file = %config.data_file.display(),
        read_failures = %config.read_failures,
        duplicate_ids = %config.duplicates,
        "Server is running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
