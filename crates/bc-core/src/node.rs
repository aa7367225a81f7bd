//! Document node model and responsibility boundaries
//!
//! A document is an ordered tree of nodes. Each node is either a *text*
//! node carrying a literal string, an *element* node carrying an optional
//! kind tag and an ordered sequence of children, or an *unknown* node.
//!
//! ## Design overview
//!
//! The editor surface this crate serves hands us loosely-shaped JSON
//! (Slate-style documents), so the model is deliberately total:
//!
//! - `{"text": "..."}` deserializes to [`Node::Text`]
//! - `{"type": "...", "children": [...]}` deserializes to [`Node::Element`]
//! - anything else lands in [`Node::Unknown`] and contributes nothing
//!
//! Ownership is strictly parental. A node owns its children exclusively;
//! there is no sharing and there are no cycles, so recursive extraction
//! always terminates.

use serde::{Deserialize, Serialize};

/// A single entry in the document tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Node {
    /// Leaf node holding literal text.
    Text(TextNode),

    /// Interior node holding an ordered sequence of children.
    Element(ElementNode),

    /// Malformed or unrecognized shape. Preserved verbatim so callers can
    /// round-trip documents they do not fully understand.
    Unknown(serde_json::Value),
}

/// Leaf text node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
}

/// Element node with an optional kind tag (`"p"`, `"heading"`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementNode {
    /// Declared block kind. Absent on bare containers.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextNode { text: text.into() })
    }

    /// Create an element node with a declared kind.
    pub fn element(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(ElementNode {
            kind: Some(kind.into()),
            children,
        })
    }

    /// Create an element node without a declared kind.
    pub fn container(children: Vec<Node>) -> Self {
        Node::Element(ElementNode {
            kind: None,
            children,
        })
    }

    /// Declared kind of this node, if it is an element that has one.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Node::Element(el) => el.kind.as_deref(),
            _ => None,
        }
    }

    /// Flatten this node into its textual content.
    ///
    /// Text nodes contribute their literal string. Element nodes contribute
    /// the concatenation of their children's extracted text in document
    /// order, with no separator. Unknown nodes contribute the empty string.
    ///
    /// Total over the type: never panics, defined for every tree.
    pub fn plain_text(&self) -> String {
        match self {
            Node::Text(t) => t.text.clone(),
            Node::Element(el) => el.children.iter().map(Node::plain_text).collect(),
            Node::Unknown(_) => String::new(),
        }
    }
}
