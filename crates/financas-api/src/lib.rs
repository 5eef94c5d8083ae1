//! HTTP API server for financial entries
//!
//! Routes are organized into modules:
//! - routes::entries: entry CRUD, search and status update

pub mod error;
pub mod routes;

use axum::{
    routing::{get, put},
    Router,
};
use financas_config::Config;
use financas_core::{EntryServiceRef, InMemoryEntryService, InMemoryUserService, UserServiceRef};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub entries: EntryServiceRef,
    pub users: UserServiceRef,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, entries: EntryServiceRef, users: UserServiceRef) -> Self {
        Self {
            entries,
            users,
            config,
        }
    }

    /// State backed by the in-memory services, users taken from the config
    pub fn in_memory(config: Config) -> Self {
        let users = Arc::new(InMemoryUserService::from_seed(&config.users));
        let entries = Arc::new(InMemoryEntryService::new());
        Self::new(config, entries, users)
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::entries::{
        create_entry, delete_entry, get_entry, search_entries, update_entry, update_entry_status,
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/lancamentos", get(search_entries).post(create_entry))
        .route("/api/lancamentos/:id", get(get_entry).delete(delete_entry))
        .route("/api/lancamentos/atualizar/:id", put(update_entry))
        .route("/api/lancamentos/:id/atualiza-status", put(update_entry_status))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Bind the configured address and serve until Ctrl-C
pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address();
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting minhas-financas server on http://{}", addr);
    log::info!("Entries API available at http://{}/api/lancamentos", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
