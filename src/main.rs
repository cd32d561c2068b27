use clap::Parser;
use graphiti_client::{api, client::GraphitiGateway, config, logging};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Web interface for the Graphiti MCP client.
#[derive(Parser)]
#[command(name = "graphiti-client", version, about)]
struct Cli {
    /// Interface to bind the web server to.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind the web server to.
    #[arg(long, env = "WEB_PORT", default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    config::init_config();
    logging::init_tracing();
    let app = api::create_router(Arc::new(GraphitiGateway::new()));

    let listener = TcpListener::bind((cli.host.as_str(), cli.port))
        .await
        .expect("Failed to bind listener");
    tracing::info!(
        server_url = %config::get_config().mcp_server_url,
        "Listening on http://{}:{}",
        cli.host,
        cli.port
    );
    axum::serve(listener, app).await.unwrap();
}
