//! Guided walkthrough against a live Graphiti MCP server.
//!
//! Connects over the chosen transport, records a handful of sample episodes,
//! exercises both search surfaces, and prints every reply. Useful as a smoke
//! test for a fresh deployment:
//!
//! ```bash
//! cargo run --bin graphiti-demo -- --server-url http://localhost:8000/sse
//! ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use graphiti_client::client::{
    AddMemoryRequest, EpisodeListRequest, EpisodeSource, FactSearchRequest, GraphitiClient,
    NodeSearchRequest,
};
use graphiti_client::config::{self, TransportKind};
use graphiti_client::logging;

#[derive(Parser)]
#[command(name = "graphiti-demo", version, about = "Walk through the Graphiti MCP tool surface")]
struct Cli {
    /// Transport used to reach the server (`sse` or `stdio`).
    #[arg(long, env = "MCP_TRANSPORT", default_value = "sse")]
    transport: String,

    /// Endpoint of the Graphiti MCP server.
    #[arg(long, env = "MCP_SERVER_URL", default_value = config::DEFAULT_SERVER_URL)]
    server_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init_tracing();

    let transport: TransportKind = cli
        .transport
        .parse()
        .map_err(|()| anyhow!("unsupported transport '{}', expected 'sse' or 'stdio'", cli.transport))?;

    let mut client = GraphitiClient::new(transport, cli.server_url);
    client
        .connect()
        .await
        .context("failed to connect to the Graphiti MCP server")?;

    let outcome = run_walkthrough(&client).await;
    client.close().await;
    outcome
}

async fn run_walkthrough(client: &GraphitiClient) -> Result<()> {
    tracing::info!("checking server status");
    let status = client.get_status().await?;
    println!("Server status: {} ({})", status.status, status.message);

    tracing::info!("adding sample episodes");
    let reply = client
        .add_memory(AddMemoryRequest {
            name: "Project Meeting Notes".into(),
            episode_body: "Discussed the new feature requirements for the Q3 release. Team \
                           agreed on the timeline and resource allocation."
                .into(),
            source: EpisodeSource::Text,
            source_description: "meeting notes".into(),
            ..AddMemoryRequest::default()
        })
        .await?;
    println!("Added text episode: {reply}");

    let reply = client
        .add_memory(AddMemoryRequest {
            name: "Project Configuration".into(),
            episode_body: r#"{"project": "Graphiti MCP", "version": "1.0", "features": ["SSE transport", "Tool integration", "Resource access"]}"#
                .into(),
            source: EpisodeSource::Json,
            source_description: "project config".into(),
            ..AddMemoryRequest::default()
        })
        .await?;
    println!("Added JSON episode: {reply}");

    let reply = client
        .add_memory(AddMemoryRequest {
            name: "User Query".into(),
            episode_body: "user: What is the current status of the MCP implementation?\n\
                           assistant: The basic implementation is complete with all core tools."
                .into(),
            source: EpisodeSource::Message,
            source_description: "chat transcript".into(),
            ..AddMemoryRequest::default()
        })
        .await?;
    println!("Added message episode: {reply}");

    tracing::info!("searching for nodes");
    let reply = client
        .search_memory_nodes(NodeSearchRequest {
            query: "project information".into(),
            max_nodes: 5,
            ..NodeSearchRequest::default()
        })
        .await?;
    println!("Node search result: {reply}");

    tracing::info!("searching for facts");
    let reply = client
        .search_memory_facts(FactSearchRequest {
            query: "feature requirements".into(),
            max_facts: 5,
            ..FactSearchRequest::default()
        })
        .await?;
    println!("Fact search result: {reply}");

    tracing::info!("fetching recent episodes");
    let reply = client
        .get_episodes(EpisodeListRequest {
            last_n: 3,
            ..EpisodeListRequest::default()
        })
        .await?;
    println!("Recent episodes: {reply}");

    Ok(())
}
