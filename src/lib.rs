#![deny(missing_docs)]

//! Core library for the Graphiti MCP web client.

/// HTTP routing and REST handlers.
pub mod api;
/// Thin client for the remote Graphiti MCP server.
pub mod client;
/// Environment-driven configuration management.
pub mod config;
/// Structured logging and tracing setup.
pub mod logging;
/// Static HTML pages for the demo web UI.
pub mod pages;
