//! HTTP API for the signal-graph pipeline.
//!
//! Three endpoints shape the outer layer:
//! - `GET /api/signals` - the persisted signal batch
//! - `POST /api/refresh` - acquire, tag and persist a fresh batch
//! - `GET /api/graph` - run the core pipeline and return the scenario graph
//!
//! The server owns the collaborator lifecycle: it loads signals and the
//! ontology before invoking the core and persists after tagging. The
//! core itself stays a pure function call inside the handlers.

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use signal_graph_core::config::Config;
use signal_graph_ingest::{Acquirer, SignalStore};

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub acquirer: Arc<Acquirer>,
    pub store: Arc<SignalStore>,
}

impl AppState {
    /// Build the state from a validated configuration.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let acquirer = Acquirer::new(&config.acquire)?;
        let store = SignalStore::new(config.storage.signals_path());
        Ok(Self {
            config: Arc::new(config),
            acquirer: Arc::new(acquirer),
            store: Arc::new(store),
        })
    }
}

/// Build the API router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/signals", get(handlers::get_signals))
        .route("/api/refresh", post(handlers::post_refresh))
        .route("/api/graph", get(handlers::get_graph))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let bind_address = config.server.bind_address.clone();
    let port = config.server.port;

    let state = AppState::from_config(config)?;
    let app = router(state);

    let addr: SocketAddr = format!("{bind_address}:{port}").parse()?;
    info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
