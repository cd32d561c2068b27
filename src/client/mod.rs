//! Thin client for the remote Graphiti knowledge-graph MCP server.
//!
//! The Graphiti server owns all real logic (entity extraction, graph storage,
//! search ranking); this module only opens a session, issues named tool calls,
//! and collapses each reply into a plain JSON value. The surface area
//! consists of:
//!
//! - [`GraphitiClient`]: one session over an SSE (or caller-supplied)
//!   transport, with one method per remote tool.
//! - [`GraphitiApi`] / [`GraphitiGateway`]: the per-request seam used by the
//!   HTTP layer, opening a dedicated session for every operation.
//! - Request structs mirroring the server's tool contract verbatim.
//!
//! Each call is stateless from the client's perspective: no cache, no retry,
//! no timeout, exactly one round trip per invocation.

mod gateway;
mod reply;
mod session;
mod types;

pub use gateway::{GraphitiApi, GraphitiGateway};
pub use session::GraphitiClient;
pub use types::{
    AddMemoryRequest, ClientError, EpisodeListRequest, EpisodeSource, FactSearchRequest,
    NodeSearchRequest, ServerStatus,
};
