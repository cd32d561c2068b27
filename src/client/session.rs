//! Session wrapper for the Graphiti MCP server.

use crate::client::reply::unwrap_reply;
use crate::client::types::{
    AddMemoryRequest, ClientError, EpisodeListRequest, FactSearchRequest, NodeSearchRequest,
    ServerStatus,
};
use crate::config::{Config, TransportKind};
use rmcp::{
    model::{
        CallToolRequestParam, ClientCapabilities, ClientInfo, Implementation, JsonObject,
        PaginatedRequestParam,
    },
    service::{RoleClient, RunningService, ServiceExt},
    transport::{
        IntoTransport,
        sse_client::{SseClientConfig, SseClientTransport},
    },
};
use serde::Serialize;
use serde_json::{Value, json};

const ADD_MEMORY: &str = "add_memory";
const SEARCH_MEMORY_NODES: &str = "search_memory_nodes";
const SEARCH_MEMORY_FACTS: &str = "search_memory_facts";
const DELETE_ENTITY_EDGE: &str = "delete_entity_edge";
const DELETE_EPISODE: &str = "delete_episode";
const GET_ENTITY_EDGE: &str = "get_entity_edge";
const GET_EPISODES: &str = "get_episodes";
const CLEAR_GRAPH: &str = "clear_graph";

/// Client for a single session against a Graphiti MCP server.
///
/// The client starts disconnected; [`connect`](Self::connect) dials the
/// configured endpoint and performs the initialization handshake, and every
/// operation issues exactly one remote call against the established session.
/// [`close`](Self::close) tears the session down. There is no pooling and no
/// reconnect: one client, one session.
pub struct GraphitiClient {
    transport: TransportKind,
    server_url: String,
    session: Option<RunningService<RoleClient, ClientInfo>>,
}

impl GraphitiClient {
    /// Create a disconnected client for the given transport and server URL.
    pub fn new(transport: TransportKind, server_url: impl Into<String>) -> Self {
        Self {
            transport,
            server_url: server_url.into(),
            session: None,
        }
    }

    /// Create a disconnected client from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mcp_transport, config.mcp_server_url.clone())
    }

    /// Open the configured transport and perform the initialization handshake.
    ///
    /// Connecting an already-connected client is a no-op. The stdio transport
    /// is accepted by configuration but has no client implementation, so it
    /// is rejected here before any I/O happens.
    pub async fn connect(&mut self) -> Result<(), ClientError> {
        if self.session.is_some() {
            return Ok(());
        }

        match self.transport {
            TransportKind::Sse => {
                let http_client = reqwest::Client::builder()
                    .user_agent("graphiti-client/0.1")
                    .build()?;
                let transport = SseClientTransport::start_with_client(
                    http_client,
                    SseClientConfig {
                        sse_endpoint: self.server_url.as_str().into(),
                        ..SseClientConfig::default()
                    },
                )
                .await?;
                self.connect_with(transport).await
            }
            TransportKind::Stdio => Err(ClientError::UnsupportedTransport(self.transport)),
        }
    }

    /// Perform the initialization handshake over a caller-supplied transport.
    ///
    /// This is the seam for embedding the client in-process (or over any
    /// other transport the protocol library offers). If a session is already
    /// established the supplied transport is dropped and the existing
    /// session is kept.
    pub async fn connect_with<T, E, A>(&mut self, transport: T) -> Result<(), ClientError>
    where
        T: IntoTransport<RoleClient, E, A>,
        E: std::error::Error + Send + Sync + 'static,
    {
        if self.session.is_some() {
            tracing::debug!("Session already established; ignoring new transport");
            return Ok(());
        }

        let session = client_info().serve(transport).await?;
        if let Some(peer) = session.peer_info() {
            tracing::info!(
                server = %peer.server_info.name,
                version = %peer.server_info.version,
                "Connected to Graphiti MCP server"
            );
        }
        self.session = Some(session);
        Ok(())
    }

    /// Tear the session down, releasing the underlying transport.
    ///
    /// Close failures are logged and swallowed; the session is unusable
    /// afterwards either way.
    pub async fn close(mut self) {
        if let Some(session) = self.session.take() {
            if let Err(error) = session.cancel().await {
                tracing::warn!(error = %error, "Error closing MCP session");
            }
        }
    }

    /// Probe the server connection by listing its resources.
    ///
    /// A listing failure still reports the session as connected, with a
    /// degraded message: the handshake already proved the server reachable,
    /// and the web UI only needs liveness. The failure itself is logged.
    pub async fn get_status(&self) -> Result<ServerStatus, ClientError> {
        let session = self.session()?;
        match session
            .list_resources(Some(PaginatedRequestParam { cursor: None }))
            .await
        {
            Ok(listing) => {
                tracing::info!(resources = listing.resources.len(), "Listed server resources");
                Ok(ServerStatus::connected())
            }
            Err(error) => {
                tracing::error!(error = %error, "Resource listing failed during status probe");
                Ok(ServerStatus::degraded())
            }
        }
    }

    /// Store a new episode in the remote graph.
    pub async fn add_memory(&self, request: AddMemoryRequest) -> Result<Value, ClientError> {
        let episode = request.name.clone();
        let result = self.call(ADD_MEMORY, &request).await?;
        tracing::info!(episode = %episode, "Added memory episode");
        Ok(result)
    }

    /// Search entity nodes in the knowledge graph.
    pub async fn search_memory_nodes(
        &self,
        request: NodeSearchRequest,
    ) -> Result<Value, ClientError> {
        let result = self.call(SEARCH_MEMORY_NODES, &request).await?;
        tracing::info!("Node search completed");
        Ok(result)
    }

    /// Search facts (entity edges) in the knowledge graph.
    pub async fn search_memory_facts(
        &self,
        request: FactSearchRequest,
    ) -> Result<Value, ClientError> {
        let result = self.call(SEARCH_MEMORY_FACTS, &request).await?;
        tracing::info!("Fact search completed");
        Ok(result)
    }

    /// Delete an entity edge by its server-issued identifier.
    pub async fn delete_entity_edge(&self, uuid: &str) -> Result<Value, ClientError> {
        let result = self.call(DELETE_ENTITY_EDGE, &json!({ "uuid": uuid })).await?;
        tracing::info!(uuid, "Deleted entity edge");
        Ok(result)
    }

    /// Delete an episode by its server-issued identifier.
    pub async fn delete_episode(&self, uuid: &str) -> Result<Value, ClientError> {
        let result = self.call(DELETE_EPISODE, &json!({ "uuid": uuid })).await?;
        tracing::info!(uuid, "Deleted episode");
        Ok(result)
    }

    /// Fetch an entity edge by its server-issued identifier.
    pub async fn get_entity_edge(&self, uuid: &str) -> Result<Value, ClientError> {
        let result = self.call(GET_ENTITY_EDGE, &json!({ "uuid": uuid })).await?;
        tracing::info!(uuid, "Fetched entity edge");
        Ok(result)
    }

    /// Fetch the most recent episodes for a group.
    pub async fn get_episodes(&self, request: EpisodeListRequest) -> Result<Value, ClientError> {
        let result = self.call(GET_EPISODES, &request).await?;
        tracing::info!(last_n = request.last_n, "Fetched recent episodes");
        Ok(result)
    }

    /// Clear the entire graph: all episodes, nodes, and edges.
    pub async fn clear_graph(&self) -> Result<Value, ClientError> {
        let result = self.call(CLEAR_GRAPH, &json!({})).await?;
        tracing::info!("Cleared graph");
        Ok(result)
    }

    fn session(&self) -> Result<&RunningService<RoleClient, ClientInfo>, ClientError> {
        self.session.as_ref().ok_or(ClientError::NotConnected)
    }

    async fn call<T: Serialize>(
        &self,
        tool: &'static str,
        arguments: &T,
    ) -> Result<Value, ClientError> {
        let session = self.session()?;
        let arguments = to_arguments(arguments)?;
        match session
            .call_tool(CallToolRequestParam {
                name: tool.into(),
                arguments: Some(arguments),
            })
            .await
        {
            Ok(reply) => Ok(unwrap_reply(reply)),
            Err(error) => {
                tracing::error!(tool, error = %error, "Remote tool call failed");
                Err(ClientError::Call(error))
            }
        }
    }
}

fn client_info() -> ClientInfo {
    let mut implementation = Implementation::from_build_env();
    implementation.name = "graphiti-client".to_string();
    implementation.version = env!("CARGO_PKG_VERSION").to_string();

    ClientInfo {
        capabilities: ClientCapabilities::default(),
        client_info: implementation,
        ..ClientInfo::default()
    }
}

fn to_arguments<T: Serialize>(arguments: &T) -> Result<JsonObject, serde_json::Error> {
    use serde::ser::Error as _;

    match serde_json::to_value(arguments)? {
        Value::Object(map) => Ok(map),
        other => Err(serde_json::Error::custom(format!(
            "expected tool arguments to serialize to an object, got {other}"
        ))),
    }
}
