//! Session-level tests that run the client against an in-process MCP server.
//!
//! A fake Graphiti server speaks the real protocol over an in-memory duplex
//! pipe, so every test covers the full handshake, argument serialization, and
//! reply unwrapping path without a network dependency.

use std::sync::Arc;

use graphiti_client::client::{
    AddMemoryRequest, ClientError, EpisodeListRequest, EpisodeSource, FactSearchRequest,
    GraphitiClient, NodeSearchRequest,
};
use graphiti_client::config::{Config, TransportKind};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, Content, Implementation,
        ListResourcesResult, PaginatedRequestParam, RawResource, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer, ServiceExt},
    transport::async_rw::AsyncRwTransport,
};
use serde_json::{Value, json};
use tokio::{io::split, sync::Mutex, task::JoinHandle};

/// Minimal stand-in for the Graphiti MCP server: records every tool call and
/// answers with canned replies shaped like the real deployment's.
#[derive(Default)]
struct FakeGraphitiServer {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    fail_listing: bool,
    fail_tools: bool,
}

impl FakeGraphitiServer {
    fn new() -> Self {
        Self::default()
    }

    fn with_failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    fn with_failing_tools(mut self) -> Self {
        self.fail_tools = true;
        self
    }
}

fn canned_reply(tool: &str) -> Result<CallToolResult, McpError> {
    match tool {
        "add_memory" => Ok(CallToolResult::success(vec![Content::text(
            r#"{"message": "Episode queued for processing"}"#,
        )])),
        "search_memory_nodes" => Ok(CallToolResult::structured(json!({
            "message": "Nodes retrieved successfully",
            "nodes": [{ "name": "Budget Review", "summary": "Quarterly planning meeting" }]
        }))),
        "search_memory_facts" => Ok(CallToolResult::success(vec![Content::text(
            r#"{"message": "Facts retrieved successfully", "facts": []}"#,
        )])),
        "get_entity_edge" => Ok(CallToolResult::success(vec![Content::text(
            r#"{"uuid": "edge-1", "fact": "alice -> manages -> billing"}"#,
        )])),
        "get_episodes" => Ok(CallToolResult::success(vec![Content::text(
            r#"[{"uuid": "ep-1", "name": "Budget Review"}]"#,
        )])),
        "delete_entity_edge" => Ok(CallToolResult::success(vec![Content::text(
            "Entity edge deleted",
        )])),
        "delete_episode" => Ok(CallToolResult::success(vec![Content::text("Episode deleted")])),
        "clear_graph" => Ok(CallToolResult::success(vec![])),
        other => Err(McpError::invalid_params(
            format!("Unknown tool: {other}"),
            None,
        )),
    }
}

impl ServerHandler for FakeGraphitiServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = Implementation::from_build_env();
        implementation.name = "graphiti-fake".to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: implementation,
            ..ServerInfo::default()
        }
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        let listing = if self.fail_listing {
            Err(McpError::internal_error("resource listing unavailable", None))
        } else {
            Ok(ListResourcesResult::with_all_items(vec![
                RawResource::new("graphiti://status", "status").no_annotation(),
            ]))
        };
        std::future::ready(listing)
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            let CallToolRequestParam { name, arguments } = request;
            self.calls.lock().await.push((
                name.to_string(),
                arguments.map(Value::Object).unwrap_or(Value::Null),
            ));

            if self.fail_tools {
                return Err(McpError::internal_error("tool execution failed", None));
            }
            canned_reply(name.as_ref())
        }
    }
}

struct Harness {
    client: GraphitiClient,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    server: JoinHandle<()>,
}

impl Harness {
    async fn start(fake: FakeGraphitiServer) -> Self {
        let calls = fake.calls.clone();

        let (client_stream, server_stream) = tokio::io::duplex(16 * 1024);
        let (client_read, client_write) = split(client_stream);
        let (server_read, server_write) = split(server_stream);

        let server = tokio::spawn(async move {
            let transport = AsyncRwTransport::new_server(server_read, server_write);
            let running = fake.serve(transport).await.expect("fake server handshake");
            let _ = running.waiting().await;
        });

        let mut client = GraphitiClient::new(TransportKind::Sse, "http://localhost:8000/sse");
        let transport = AsyncRwTransport::new_client(client_read, client_write);
        client.connect_with(transport).await.expect("client handshake");

        Self {
            client,
            calls,
            server,
        }
    }

    async fn recorded(&self) -> Vec<(String, Value)> {
        self.calls.lock().await.clone()
    }

    async fn shutdown(self) {
        let Self { client, server, .. } = self;
        client.close().await;
        server.abort();
    }
}

#[tokio::test]
async fn operations_require_a_connected_session() {
    let client = GraphitiClient::new(TransportKind::Sse, "http://localhost:8000/sse");

    let results = vec![
        client.add_memory(AddMemoryRequest::default()).await,
        client
            .search_memory_nodes(NodeSearchRequest::default())
            .await,
        client
            .search_memory_facts(FactSearchRequest::default())
            .await,
        client.delete_entity_edge("edge-1").await,
        client.delete_episode("ep-1").await,
        client.get_entity_edge("edge-1").await,
        client.get_episodes(EpisodeListRequest::default()).await,
        client.clear_graph().await,
    ];
    for result in results {
        let err = result.expect_err("no session yet");
        assert!(matches!(err, ClientError::NotConnected));
        assert_eq!(err.to_string(), "Client session not initialized");
    }

    let err = client.get_status().await.expect_err("no session yet");
    assert!(matches!(err, ClientError::NotConnected));
}

#[tokio::test]
async fn stdio_transport_is_rejected_at_connect() {
    let config = Config {
        mcp_server_url: "http://localhost:8000/sse".to_string(),
        mcp_transport: TransportKind::Stdio,
    };
    let mut client = GraphitiClient::from_config(&config);

    let err = client.connect().await.expect_err("stdio is not wired up");
    assert!(matches!(
        err,
        ClientError::UnsupportedTransport(TransportKind::Stdio)
    ));
    assert_eq!(err.to_string(), "Unsupported transport: stdio");
}

#[tokio::test]
async fn connect_is_idempotent_once_a_session_exists() {
    let mut harness = Harness::start(FakeGraphitiServer::new()).await;

    harness
        .client
        .connect()
        .await
        .expect("second connect reuses the live session");

    harness.shutdown().await;
}

#[tokio::test]
async fn episode_writes_carry_only_present_fields() {
    let harness = Harness::start(FakeGraphitiServer::new()).await;

    let reply = harness
        .client
        .add_memory(AddMemoryRequest {
            name: "Standup".into(),
            episode_body: "Alice covered the rollout plan.".into(),
            source: EpisodeSource::Text,
            source_description: "meeting notes".into(),
            ..AddMemoryRequest::default()
        })
        .await
        .expect("add_memory");
    assert_eq!(reply["message"], "Episode queued for processing");

    let calls = harness.recorded().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "add_memory");
    assert_eq!(
        calls[0].1,
        json!({
            "name": "Standup",
            "episode_body": "Alice covered the rollout plan.",
            "source": "text",
            "source_description": "meeting notes"
        })
    );

    harness.shutdown().await;
}

#[tokio::test]
async fn optional_filters_reach_the_wire_when_set() {
    let harness = Harness::start(FakeGraphitiServer::new()).await;

    harness
        .client
        .search_memory_facts(FactSearchRequest {
            query: "feature requirements".into(),
            max_facts: 5,
            group_ids: Some(vec!["team-a".into()]),
            center_node_uuid: Some("node-7".into()),
        })
        .await
        .expect("search_memory_facts");

    let calls = harness.recorded().await;
    assert_eq!(calls[0].0, "search_memory_facts");
    assert_eq!(
        calls[0].1,
        json!({
            "query": "feature requirements",
            "max_facts": 5,
            "group_ids": ["team-a"],
            "center_node_uuid": "node-7"
        })
    );

    harness.shutdown().await;
}

#[tokio::test]
async fn search_defaults_match_the_documented_limits() {
    let harness = Harness::start(FakeGraphitiServer::new()).await;

    harness
        .client
        .search_memory_nodes(NodeSearchRequest {
            query: "project information".into(),
            ..NodeSearchRequest::default()
        })
        .await
        .expect("search_memory_nodes");

    let calls = harness.recorded().await;
    assert_eq!(
        calls[0].1,
        json!({ "query": "project information", "max_nodes": 10, "entity": "" })
    );

    harness.shutdown().await;
}

#[tokio::test]
async fn structured_replies_pass_through_untouched() {
    let harness = Harness::start(FakeGraphitiServer::new()).await;

    let reply = harness
        .client
        .search_memory_nodes(NodeSearchRequest {
            query: "project information".into(),
            max_nodes: 5,
            ..NodeSearchRequest::default()
        })
        .await
        .expect("search_memory_nodes");

    assert_eq!(reply["message"], "Nodes retrieved successfully");
    assert_eq!(reply["nodes"][0]["name"], "Budget Review");

    harness.shutdown().await;
}

#[tokio::test]
async fn text_replies_unwrap_into_json() {
    let harness = Harness::start(FakeGraphitiServer::new()).await;

    let edge = harness
        .client
        .get_entity_edge("edge-1")
        .await
        .expect("get_entity_edge");
    assert_eq!(edge["fact"], "alice -> manages -> billing");

    let episodes = harness
        .client
        .get_episodes(EpisodeListRequest::default())
        .await
        .expect("get_episodes");
    assert_eq!(episodes[0]["name"], "Budget Review");

    let deleted = harness
        .client
        .delete_episode("ep-1")
        .await
        .expect("delete_episode");
    assert_eq!(deleted, json!({ "message": "Episode deleted" }));

    let cleared = harness.client.clear_graph().await.expect("clear_graph");
    assert_eq!(cleared, json!({ "message": "Operation completed successfully" }));

    harness.shutdown().await;
}

#[tokio::test]
async fn uuid_operations_address_a_single_record() {
    let harness = Harness::start(FakeGraphitiServer::new()).await;

    harness
        .client
        .delete_entity_edge("edge-9")
        .await
        .expect("delete_entity_edge");

    let calls = harness.recorded().await;
    assert_eq!(calls[0].0, "delete_entity_edge");
    assert_eq!(calls[0].1, json!({ "uuid": "edge-9" }));

    harness.shutdown().await;
}

#[tokio::test]
async fn status_probe_reports_a_healthy_server() {
    let harness = Harness::start(FakeGraphitiServer::new()).await;

    let status = harness.client.get_status().await.expect("get_status");
    assert_eq!(status.status, "connected");
    assert_eq!(status.message, "Successfully connected to MCP server");

    harness.shutdown().await;
}

#[tokio::test]
async fn status_probe_degrades_when_resource_listing_fails() {
    let harness = Harness::start(FakeGraphitiServer::new().with_failing_listing()).await;

    let status = harness
        .client
        .get_status()
        .await
        .expect("listing failures degrade the status instead of erroring");
    assert_eq!(status.status, "connected");
    assert_eq!(status.message, "Connected to MCP server (resource listing failed)");

    harness.shutdown().await;
}

#[tokio::test]
async fn tool_failures_surface_as_call_errors() {
    let harness = Harness::start(FakeGraphitiServer::new().with_failing_tools()).await;

    let err = harness
        .client
        .clear_graph()
        .await
        .expect_err("tool failure propagates");
    assert!(matches!(err, ClientError::Call(_)));

    harness.shutdown().await;
}
