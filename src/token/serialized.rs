//! Serialized form of the inline token node.
//!
//! The token node serializes as a generic text-span shape extended with two
//! extra fields (`value`, `moreDetails`), so host serializers that already
//! understand plain text spans can treat the token as one plus a spread of
//! extras. Field names follow the host convention (camelCase, `type` tag).

use super::SpanMode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic text-span serialization shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedTextSpan {
    /// Text content.
    pub text: String,
    /// Style bitmask.
    pub format: u32,
    /// Inline style string.
    pub style: String,
    /// Presentation mode.
    pub mode: SpanMode,
    /// Host detail bitmask.
    pub detail: u32,
    /// Node type tag; [`TOKEN_NODE_TYPE`](crate::token::TOKEN_NODE_TYPE) for
    /// token nodes.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Serialization format version.
    pub version: u32,
}

/// A serialized inline token node: the text-span shape spread together with
/// the node's two extra fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedTokenNode {
    /// The generic text-span fields, flattened into the same object.
    #[serde(flatten)]
    pub span: SerializedTextSpan,
    /// Opaque key of the accepted suggestion.
    pub value: String,
    /// Optional structured payload; omitted when absent.
    #[serde(
        rename = "moreDetails",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub more_details: Option<Value>,
}
