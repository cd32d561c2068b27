//! Reply unwrapping for remote tool calls.
//!
//! Graphiti tools answer with an MCP tool result whose payload is either
//! structured content or a list of content items. Callers of this crate only
//! ever see a plain [`serde_json::Value`]; the collapse rules live here.

use rmcp::model::{CallToolResult, Content};
use serde_json::{Value, json};

/// Placeholder returned when a reply carries no content at all.
pub(crate) const SUCCESS_PLACEHOLDER: &str = "Operation completed successfully";

/// Collapse a tool reply into a plain JSON value.
///
/// - Structured content is passed through unchanged.
/// - A textual first content item is parsed as JSON; text that is not JSON
///   becomes `{"message": <text>}` verbatim.
/// - A non-textual first item is rendered into the message wrapper.
/// - An empty reply becomes `{"message": "Operation completed successfully"}`.
///
/// The server reports tool-level failures as content too, so the `is_error`
/// flag is not inspected here; protocol failures never reach this function.
pub(crate) fn unwrap_reply(reply: CallToolResult) -> Value {
    if let Some(structured) = reply.structured_content {
        return structured;
    }

    let Some(first) = reply.content.first() else {
        return json!({ "message": SUCCESS_PLACEHOLDER });
    };

    match first.as_text() {
        Some(text) => parse_text(&text.text),
        None => json!({ "message": describe_content(first) }),
    }
}

fn parse_text(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "message": text }))
}

fn describe_content(content: &Content) -> String {
    serde_json::to_string(content).unwrap_or_else(|_| "<unrenderable content item>".to_string())
}
