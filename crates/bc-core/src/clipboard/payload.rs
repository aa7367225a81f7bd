//! Clipboard payload domain model
//!
//! A [`ClipboardPayload`] is the serialized form of a block selection: one
//! plain-text representation and one minimal-HTML representation of the
//! same logical content, derived deterministically from the selected nodes.
//!
//! The payload is pure data. Writing it to the system clipboard is a
//! separate step owned by the clipboard port; the payload itself has no
//! lifecycle beyond being computed and handed over.

use serde::{Deserialize, Serialize};

use crate::clipboard::MimeType;
use crate::keys;
use crate::node::Node;

/// Fallback tag for element nodes that declare no kind.
const DEFAULT_TAG: &str = keys::PARAGRAPH;

/// One concrete MIME-typed representation of a payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipboardItem {
    /// MIME type, e.g. "text/plain", "text/html"
    pub mime: MimeType,

    /// payload
    pub text: String,
}

/// Serialized clipboard content for a block selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ClipboardPayload {
    /// Plain-text representation: extracted node texts, empties dropped,
    /// joined with a blank line.
    pub text: String,

    /// Minimal HTML representation: one `<tag>..</tag>` per node (no
    /// filtering of empties), concatenated with no separator.
    pub html: String,
}

impl ClipboardPayload {
    /// Serialize a sequence of selected top-level nodes.
    ///
    /// Extraction is total over [`Node`], so a malformed node contributes
    /// the empty string without disturbing its neighbors.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let text = nodes
            .iter()
            .map(Node::plain_text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        let html = nodes
            .iter()
            .map(|node| {
                let tag = node.kind().unwrap_or(DEFAULT_TAG);
                format!("<{tag}>{}</{tag}>", node.plain_text())
            })
            .collect::<String>();

        Self { text, html }
    }

    /// Expose the payload as MIME-typed items, the unit a multi-format
    /// clipboard write accepts.
    pub fn items(&self) -> Vec<ClipboardItem> {
        vec![
            ClipboardItem {
                mime: MimeType::text_plain(),
                text: self.text.clone(),
            },
            ClipboardItem {
                mime: MimeType::text_html(),
                text: self.html.clone(),
            },
        ]
    }
}
