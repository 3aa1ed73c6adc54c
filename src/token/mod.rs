//! Inline token node: the value inserted when a suggestion is accepted.
//!
//! The node is a plain data record (an opaque `value` key, an optional
//! structured `more_details` payload, and generic text-span presentation
//! state) plus pure serialization functions that a host-specific adapter
//! layer calls. It deliberately carries no coupling to any host node
//! hierarchy; styling and actual DOM construction are owned by the host.
//!
//! Two round-trip contracts are provided:
//!
//! * a JSON form ([`SerializedTokenNode`]) extending the generic text-span
//!   shape with the node's two extra fields, lossless in both directions;
//! * a marker-element DOM form ([`MarkerElement`]) carrying the display text
//!   and a recognizable attribute flag, reconstructing a node from the
//!   element's text content on import.

mod dom;
mod serialized;

pub use dom::{MarkerElement, TOKEN_MARKER_ATTRIBUTE};
pub use serialized::{SerializedTextSpan, SerializedTokenNode};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Type tag identifying a serialized inline token node.
pub const TOKEN_NODE_TYPE: &str = "inline-token";

/// Version of the serialized form.
pub const TOKEN_NODE_VERSION: u32 = 1;

/// Presentation mode of a text span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanMode {
    /// Ordinary editable text.
    #[default]
    Normal,
    /// Atomic span: edited and deleted as a unit.
    Token,
    /// Deleted a segment at a time.
    Segmented,
}

/// Generic text-span presentation state shared with ordinary text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSpan {
    /// Text content of the span.
    pub text: String,
    /// Style bitmask (bold, italic, ...); opaque to this crate.
    pub format: u32,
    /// Inline CSS-style string; opaque to this crate.
    pub style: String,
    /// Presentation mode.
    pub mode: SpanMode,
    /// Host detail bitmask; opaque to this crate.
    pub detail: u32,
}

/// Errors raised by the token serialization contract.
#[derive(Debug, Error)]
pub enum TokenError {
    /// JSON (de)serialization failed.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// The serialized form carries a foreign type tag.
    #[error("unexpected node type {0:?}")]
    UnexpectedType(String),

    /// The serialized form carries a version this crate does not understand.
    #[error("unsupported serialization version {0}")]
    UnsupportedVersion(u32),
}

/// An accepted suggestion, as a value object.
///
/// `value` is the opaque key of the suggestion; `more_details` an optional
/// structured payload attached on acceptance. The span's text defaults to
/// the value and may be restyled freely by the host.
///
/// # Examples
///
/// ```
/// use typeahead::token::InlineTokenNode;
/// use serde_json::json;
///
/// let node = InlineTokenNode::new("google_domain")
///     .with_details(json!({"id": "1", "name": "Google", "url": "google.com"}));
///
/// assert_eq!(node.display_text(), "{google_domain}");
///
/// let json = node.to_json_string().unwrap();
/// let restored = InlineTokenNode::from_json_string(&json).unwrap();
/// assert_eq!(restored, node);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InlineTokenNode {
    /// Opaque key of the accepted suggestion.
    pub value: String,
    /// Optional structured payload.
    pub more_details: Option<Value>,
    /// Text-span presentation state; `text` defaults to `value`.
    pub span: TextSpan,
}

impl InlineTokenNode {
    /// Create a node for `value`, with the span text defaulting to the value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let span = TextSpan {
            text: value.clone(),
            ..TextSpan::default()
        };
        Self {
            value,
            more_details: None,
            span,
        }
    }

    /// Attach a structured details payload.
    pub fn with_details(mut self, details: Value) -> Self {
        self.more_details = Some(details);
        self
    }

    /// Override the span text (normally the value itself).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.span.text = text.into();
        self
    }

    /// Bracket-wrapped display text, e.g. `{google_domain}`.
    ///
    /// Cosmetic: hosts are free to render the node differently.
    pub fn display_text(&self) -> String {
        format!("{{{}}}", self.value)
    }

    /// Convert to the serialized form, stamping type tag and version.
    pub fn to_serialized(&self) -> SerializedTokenNode {
        SerializedTokenNode {
            span: SerializedTextSpan {
                text: self.span.text.clone(),
                format: self.span.format,
                style: self.span.style.clone(),
                mode: self.span.mode,
                detail: self.span.detail,
                node_type: TOKEN_NODE_TYPE.to_string(),
                version: TOKEN_NODE_VERSION,
            },
            value: self.value.clone(),
            more_details: self.more_details.clone(),
        }
    }

    /// Reconstruct a node from its serialized form.
    ///
    /// # Errors
    ///
    /// Rejects a foreign type tag or an unknown version.
    pub fn from_serialized(serialized: SerializedTokenNode) -> Result<Self, TokenError> {
        if serialized.span.node_type != TOKEN_NODE_TYPE {
            return Err(TokenError::UnexpectedType(serialized.span.node_type));
        }
        if serialized.span.version != TOKEN_NODE_VERSION {
            return Err(TokenError::UnsupportedVersion(serialized.span.version));
        }
        Ok(Self {
            value: serialized.value,
            more_details: serialized.more_details,
            span: TextSpan {
                text: serialized.span.text,
                format: serialized.span.format,
                style: serialized.span.style,
                mode: serialized.span.mode,
                detail: serialized.span.detail,
            },
        })
    }

    /// Serialize to a JSON string.
    ///
    /// # Errors
    ///
    /// Propagates JSON serialization failures.
    pub fn to_json_string(&self) -> Result<String, TokenError> {
        Ok(serde_json::to_string(&self.to_serialized())?)
    }

    /// Deserialize from a JSON string, verifying type tag and version.
    ///
    /// # Errors
    ///
    /// Propagates JSON parse failures and rejects foreign type tags and
    /// unknown versions.
    pub fn from_json_string(json: &str) -> Result<Self, TokenError> {
        Self::from_serialized(serde_json::from_str(json)?)
    }
}
