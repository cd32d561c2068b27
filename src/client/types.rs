//! Request, status, and error types for the Graphiti client.
//!
//! The request structs reproduce the server's tool contract verbatim: field
//! names match the remote parameter mappings, optional fields are omitted
//! from the wire when absent (server-side defaults apply instead of an
//! explicit null), and deserialization fills the documented web-layer
//! defaults so HTTP bodies decode directly into these types.

use crate::config::TransportKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors emitted by the Graphiti client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An operation was invoked before [`super::GraphitiClient::connect`].
    #[error("Client session not initialized")]
    NotConnected,
    /// The configured transport has no client implementation.
    #[error("Unsupported transport: {0}")]
    UnsupportedTransport(TransportKind),
    /// The HTTP client backing the SSE transport could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
    /// The SSE transport could not reach the server.
    #[error("Failed to connect to MCP server: {0}")]
    Transport(#[from] rmcp::transport::sse_client::SseTransportError<reqwest::Error>),
    /// The initialization handshake was rejected or interrupted.
    #[error("MCP handshake failed: {0}")]
    Handshake(#[from] rmcp::service::ClientInitializeError),
    /// A remote tool call failed at the transport, protocol, or server level.
    #[error("Remote tool call failed: {0}")]
    Call(#[from] rmcp::service::ServiceError),
    /// Tool arguments could not be serialized into a parameter mapping.
    #[error("Invalid tool arguments: {0}")]
    Arguments(#[from] serde_json::Error),
}

/// Content format of an episode body submitted through `add_memory`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeSource {
    /// Plain prose; the server extracts entities from free text.
    #[default]
    Text,
    /// Structured JSON payload ingested as-is.
    Json,
    /// Conversational transcript with speaker-prefixed lines.
    Message,
}

/// Arguments for the `add_memory` tool.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddMemoryRequest {
    /// Display name of the episode.
    pub name: String,
    /// Raw content of the episode.
    pub episode_body: String,
    /// Namespace to store the episode under; the server picks its default
    /// group when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Content format of `episode_body`.
    pub source: EpisodeSource,
    /// Free-form description of where the content came from.
    pub source_description: String,
    /// Caller-supplied episode identifier; server-generated when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Arguments for the `search_memory_nodes` tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSearchRequest {
    /// Natural-language search query.
    pub query: String,
    /// Maximum number of nodes to return.
    pub max_nodes: usize,
    /// Entity type filter; empty string matches every type.
    pub entity: String,
    /// Restrict the search to these group namespaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    /// Re-rank results around this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_node_uuid: Option<String>,
}

impl Default for NodeSearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            max_nodes: 10,
            entity: String::new(),
            group_ids: None,
            center_node_uuid: None,
        }
    }
}

/// Arguments for the `search_memory_facts` tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FactSearchRequest {
    /// Natural-language search query.
    pub query: String,
    /// Maximum number of facts to return.
    pub max_facts: usize,
    /// Restrict the search to these group namespaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    /// Re-rank results around this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_node_uuid: Option<String>,
}

impl Default for FactSearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            max_facts: 10,
            group_ids: None,
            center_node_uuid: None,
        }
    }
}

/// Arguments for the `get_episodes` tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeListRequest {
    /// Number of most recent episodes to fetch.
    pub last_n: usize,
    /// Namespace to read from; the server picks its default group when
    /// omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Default for EpisodeListRequest {
    fn default() -> Self {
        Self {
            last_n: 10,
            group_id: None,
        }
    }
}

/// Connection status reported by [`super::GraphitiClient::get_status`].
#[derive(Clone, Debug, Serialize)]
pub struct ServerStatus {
    /// Always `connected` once the handshake has completed.
    pub status: String,
    /// Human-readable detail about the status probe.
    pub message: String,
}

impl ServerStatus {
    /// Status after a successful resource-listing probe.
    pub(crate) fn connected() -> Self {
        Self {
            status: "connected".to_string(),
            message: "Successfully connected to MCP server".to_string(),
        }
    }

    /// Status when the session is up but the resource listing failed.
    pub(crate) fn degraded() -> Self {
        Self {
            status: "connected".to_string(),
            message: "Connected to MCP server (resource listing failed)".to_string(),
        }
    }
}
