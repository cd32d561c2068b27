use serde::Deserialize;
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Default SSE endpoint of the Graphiti MCP server.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/sse";

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the Graphiti web client.
///
/// Every setting carries a default, so loading only fails on values that
/// cannot be parsed.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Endpoint of the Graphiti MCP server.
    pub mcp_server_url: String,
    /// Transport used to reach the server.
    pub mcp_transport: TransportKind,
}

/// Transports supported by the MCP session layer.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Server-Sent-Events endpoint reached over HTTP.
    #[default]
    Sse,
    /// Standard input/output. Accepted by configuration but rejected when
    /// connecting; no stdio session is implemented.
    Stdio,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            mcp_server_url: load_env_optional("MCP_SERVER_URL")
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            mcp_transport: load_env_optional("MCP_TRANSPORT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|()| ConfigError::InvalidValue("MCP_TRANSPORT".to_string()))
                })
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl std::str::FromStr for TransportKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sse" => Ok(Self::Sse),
            "stdio" => Ok(Self::Stdio),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Sse => "sse",
            Self::Stdio => "stdio",
        })
    }
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        server_url = %config.mcp_server_url,
        transport = %config.mcp_transport,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}
