//! Per-request session orchestration for the HTTP surface.

use crate::client::session::GraphitiClient;
use crate::client::types::{
    AddMemoryRequest, ClientError, EpisodeListRequest, FactSearchRequest, NodeSearchRequest,
    ServerStatus,
};
use crate::config::{TransportKind, get_config};
use async_trait::async_trait;
use serde_json::Value;

/// Abstraction over the remote graph operations used by external surfaces (HTTP).
#[async_trait]
pub trait GraphitiApi: Send + Sync {
    /// Store a new episode in the remote graph.
    async fn add_memory(&self, request: AddMemoryRequest) -> Result<Value, ClientError>;

    /// Search entity nodes in the knowledge graph.
    async fn search_nodes(&self, request: NodeSearchRequest) -> Result<Value, ClientError>;

    /// Search facts (entity edges) in the knowledge graph.
    async fn search_facts(&self, request: FactSearchRequest) -> Result<Value, ClientError>;

    /// Fetch the most recent episodes for a group.
    async fn get_episodes(&self, request: EpisodeListRequest) -> Result<Value, ClientError>;

    /// Probe the server connection.
    async fn get_status(&self) -> Result<ServerStatus, ClientError>;
}

/// Opens a dedicated MCP session for every operation.
///
/// This mirrors the one-shot usage pattern of the web UI: each call connects,
/// performs a single round trip, and tears the session down on the success
/// and error paths alike. There is no pooling and no reuse across calls.
pub struct GraphitiGateway {
    transport: TransportKind,
    server_url: String,
}

impl GraphitiGateway {
    /// Build a gateway from the process-wide configuration.
    pub fn new() -> Self {
        let config = get_config();
        Self::for_endpoint(config.mcp_transport, config.mcp_server_url.clone())
    }

    /// Build a gateway that targets an explicit endpoint instead of the
    /// process-wide configuration.
    pub fn for_endpoint(transport: TransportKind, server_url: impl Into<String>) -> Self {
        Self {
            transport,
            server_url: server_url.into(),
        }
    }

    async fn open(&self) -> Result<GraphitiClient, ClientError> {
        let mut client = GraphitiClient::new(self.transport, self.server_url.clone());
        client.connect().await?;
        Ok(client)
    }
}

impl Default for GraphitiGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphitiApi for GraphitiGateway {
    async fn add_memory(&self, request: AddMemoryRequest) -> Result<Value, ClientError> {
        let client = self.open().await?;
        let result = client.add_memory(request).await;
        client.close().await;
        result
    }

    async fn search_nodes(&self, request: NodeSearchRequest) -> Result<Value, ClientError> {
        let client = self.open().await?;
        let result = client.search_memory_nodes(request).await;
        client.close().await;
        result
    }

    async fn search_facts(&self, request: FactSearchRequest) -> Result<Value, ClientError> {
        let client = self.open().await?;
        let result = client.search_memory_facts(request).await;
        client.close().await;
        result
    }

    async fn get_episodes(&self, request: EpisodeListRequest) -> Result<Value, ClientError> {
        let client = self.open().await?;
        let result = client.get_episodes(request).await;
        client.close().await;
        result
    }

    async fn get_status(&self) -> Result<ServerStatus, ClientError> {
        let client = self.open().await?;
        let result = client.get_status().await;
        client.close().await;
        result
    }
}
