//! HTTP surface for the Graphiti web client.
//!
//! This module exposes a compact Axum router mirroring the remote tool
//! contract 1:1:
//!
//! - `POST /api/add_memory` – Store an episode (name, body, source kind,
//!   optional group/uuid) in the remote graph.
//! - `POST /api/search_nodes` – Search entity nodes (`max_nodes` defaults
//!   to 10).
//! - `POST /api/search_facts` – Search facts, i.e. entity edges
//!   (`max_facts` defaults to 10).
//! - `POST /api/get_episodes` – Fetch the most recent episodes (`last_n`
//!   defaults to 10).
//! - `GET /api/status` – Probe the server connection.
//! - `GET /`, `/memory`, `/search`, `/episodes` – Static HTML pages.
//!
//! Every API route opens a fresh MCP session through the supplied
//! [`GraphitiApi`] implementation, answers 200 with the unwrapped JSON
//! reply, and maps any raised failure to 500 with `{"error": "<message>"}`.

use crate::client::{
    AddMemoryRequest, ClientError, EpisodeListRequest, FactSearchRequest, GraphitiApi,
    NodeSearchRequest, ServerStatus,
};
use crate::pages;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Build the HTTP router exposing the web UI and the JSON API surface.
pub fn create_router<S>(gateway: Arc<S>) -> Router
where
    S: GraphitiApi + 'static,
{
    Router::new()
        .route("/", get(pages::index))
        .route("/memory", get(pages::memory))
        .route("/search", get(pages::search))
        .route("/episodes", get(pages::episodes))
        .route("/api/add_memory", post(add_memory::<S>))
        .route("/api/search_nodes", post(search_nodes::<S>))
        .route("/api/search_facts", post(search_facts::<S>))
        .route("/api/get_episodes", post(get_episodes::<S>))
        .route("/api/status", get(server_status::<S>))
        .with_state(gateway)
}

/// Store a new episode in the remote graph.
///
/// Missing body fields fall back to the documented defaults (`source`
/// becomes `text`, strings become empty, optional identifiers stay unset
/// and are omitted from the outgoing call).
async fn add_memory<S>(
    State(gateway): State<Arc<S>>,
    Json(request): Json<AddMemoryRequest>,
) -> Result<Json<Value>, AppError>
where
    S: GraphitiApi,
{
    let result = gateway.add_memory(request).await?;
    Ok(Json(result))
}

/// Search entity nodes in the knowledge graph.
async fn search_nodes<S>(
    State(gateway): State<Arc<S>>,
    Json(request): Json<NodeSearchRequest>,
) -> Result<Json<Value>, AppError>
where
    S: GraphitiApi,
{
    let result = gateway.search_nodes(request).await?;
    Ok(Json(result))
}

/// Search facts (entity edges) in the knowledge graph.
async fn search_facts<S>(
    State(gateway): State<Arc<S>>,
    Json(request): Json<FactSearchRequest>,
) -> Result<Json<Value>, AppError>
where
    S: GraphitiApi,
{
    let result = gateway.search_facts(request).await?;
    Ok(Json(result))
}

/// Fetch the most recent episodes for a group.
async fn get_episodes<S>(
    State(gateway): State<Arc<S>>,
    Json(request): Json<EpisodeListRequest>,
) -> Result<Json<Value>, AppError>
where
    S: GraphitiApi,
{
    let result = gateway.get_episodes(request).await?;
    Ok(Json(result))
}

/// Probe the connection to the Graphiti server.
async fn server_status<S>(State(gateway): State<Arc<S>>) -> Result<Json<ServerStatus>, AppError>
where
    S: GraphitiApi,
{
    let status = gateway.get_status().await?;
    Ok(Json(status))
}

struct AppError(ClientError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<ClientError> for AppError {
    fn from(inner: ClientError) -> Self {
        Self(inner)
    }
}
