use serde::{Deserialize, Serialize};

/// MIME type naming one clipboard representation.
///
/// The serializer only ever produces `text/plain` and `text/html`;
/// adapters map anything else to a plain-text write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn text_plain() -> Self {
        Self("text/plain".into())
    }

    pub fn text_html() -> Self {
        Self("text/html".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
