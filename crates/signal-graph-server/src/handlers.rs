//! Request handlers for the signal-graph API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, info};

use signal_graph_core::pipeline::process;
use signal_graph_core::tagging::tag_signals;
use signal_graph_core::types::{ScenarioGraph, Signal};
use signal_graph_ingest::load_ontology;

use crate::AppState;

/// Error wrapper mapping any handler failure to a JSON 500.
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// Response payload for `POST /api/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub ok: bool,
    pub count: usize,
}

/// `GET /api/signals` - the persisted batch.
pub async fn get_signals(State(state): State<AppState>) -> Json<Vec<Signal>> {
    Json(state.store.load())
}

/// `POST /api/refresh` - acquire a fresh batch, tag it and persist it.
///
/// An empty acquisition leaves the previous batch in place, mirroring
/// the tolerant collector: a transient outage must not wipe the store.
pub async fn post_refresh(
    State(state): State<AppState>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let mut signals = state.acquirer.collect().await;
    if !signals.is_empty() {
        let concepts = load_ontology(&state.config.storage.ontology_path());
        tag_signals(&mut signals, &concepts);
        state.store.save(&signals)?;
    }
    info!(count = signals.len(), "refresh complete");
    Ok(Json(RefreshResponse {
        ok: true,
        count: signals.len(),
    }))
}

/// `GET /api/graph` - run the pipeline over the persisted batch.
pub async fn get_graph(State(state): State<AppState>) -> Result<Json<ScenarioGraph>, ApiError> {
    let mut signals = state.store.load();
    let concepts = load_ontology(&state.config.storage.ontology_path());

    let outcome = process(&mut signals, &concepts, &state.config.pipeline)?;
    Ok(Json(outcome.graph))
}
