//! System clipboard port - abstracts the platform clipboard.

use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::ClipboardItem;

/// System clipboard port - abstracts the platform clipboard.
///
/// Writes are asynchronous: the platform may serialize them on its own
/// thread or negotiate with a display server. Callers that must not block
/// the UI thread spawn the returned future instead of awaiting it.
#[async_trait]
pub trait SystemClipboardPort: Send + Sync {
    /// Whether the backend can write several MIME-typed representations as
    /// a single clipboard item.
    fn supports_multi_format(&self) -> bool;

    /// Write all representations as one multi-format clipboard item.
    async fn write(&self, items: Vec<ClipboardItem>) -> Result<()>;

    /// Write a plain-text-only item.
    async fn write_text(&self, text: String) -> Result<()>;
}
