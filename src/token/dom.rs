//! Marker-element DOM round-trip contract.
//!
//! Hosts exchange token nodes with external DOM content through a marker
//! element: export produces a `span` carrying the node's text and a
//! recognizable attribute flag; import recognizes the flag and reconstructs
//! a node from the element's text content. [`MarkerElement`] is the
//! host-independent stand-in for that element; a host adapter maps it onto
//! real DOM nodes.
//!
//! The DOM path carries less than the JSON form: only the text
//! content survives, so an imported node's value is the exported text and
//! any details payload is gone. Lossless round-trips go through
//! [`SerializedTokenNode`](super::SerializedTokenNode).

use super::InlineTokenNode;

/// Attribute flag marking an exported token element.
pub const TOKEN_MARKER_ATTRIBUTE: &str = "data-inline-token";

const MARKER_TAG: &str = "span";

/// Host-independent description of the marker element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerElement {
    /// Element tag name.
    pub tag: String,
    /// Attribute name/value pairs.
    pub attributes: Vec<(String, String)>,
    /// Text content.
    pub text: String,
}

impl MarkerElement {
    /// Create an element with the given tag and no attributes or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            text: String::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }
}

impl InlineTokenNode {
    /// Export the node as a marker element.
    pub fn export_dom(&self) -> MarkerElement {
        MarkerElement::new(MARKER_TAG)
            .with_attribute(TOKEN_MARKER_ATTRIBUTE, "true")
            .with_text(self.span.text.clone())
    }

    /// Reconstruct a node from a marker element.
    ///
    /// Returns `None` unless the element is a `span` carrying the
    /// [`TOKEN_MARKER_ATTRIBUTE`] flag and non-empty text content; the text
    /// content becomes the node's value.
    pub fn import_dom(element: &MarkerElement) -> Option<Self> {
        if element.tag != MARKER_TAG {
            return None;
        }
        if element.attribute(TOKEN_MARKER_ATTRIBUTE) != Some("true") {
            return None;
        }
        if element.text.is_empty() {
            return None;
        }
        Some(Self::new(element.text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_produces_flagged_span() {
        let element = InlineTokenNode::new("google_domain").export_dom();
        assert_eq!(element.tag, "span");
        assert_eq!(element.attribute(TOKEN_MARKER_ATTRIBUTE), Some("true"));
        assert_eq!(element.text, "google_domain");
    }

    #[test]
    fn test_export_carries_span_text_not_value() {
        let element = InlineTokenNode::new("key").with_text("shown").export_dom();
        assert_eq!(element.text, "shown");
    }

    #[test]
    fn test_import_reconstructs_from_text_content() {
        let exported = InlineTokenNode::new("google_domain").export_dom();
        let imported = InlineTokenNode::import_dom(&exported).unwrap();
        assert_eq!(imported.value, "google_domain");
        assert_eq!(imported.span.text, "google_domain");
    }

    #[test]
    fn test_import_requires_marker_attribute() {
        let element = MarkerElement::new("span").with_text("plain");
        assert!(InlineTokenNode::import_dom(&element).is_none());

        let element = MarkerElement::new("span")
            .with_attribute("data-other", "true")
            .with_text("plain");
        assert!(InlineTokenNode::import_dom(&element).is_none());
    }

    #[test]
    fn test_import_requires_span_tag() {
        let element = MarkerElement::new("div")
            .with_attribute(TOKEN_MARKER_ATTRIBUTE, "true")
            .with_text("text");
        assert!(InlineTokenNode::import_dom(&element).is_none());
    }

    #[test]
    fn test_import_requires_text_content() {
        let element = MarkerElement::new("span").with_attribute(TOKEN_MARKER_ATTRIBUTE, "true");
        assert!(InlineTokenNode::import_dom(&element).is_none());
    }
}
