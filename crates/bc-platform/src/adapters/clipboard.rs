//! System clipboard adapter over `clipboard-rs`.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use clipboard_rs::{Clipboard, ClipboardContent, ClipboardContext};
use tokio::task::spawn_blocking;

use bc_core::clipboard::ClipboardItem;
use bc_core::ports::SystemClipboardPort;

use crate::capability::{detect_clipboard_capability, ClipboardCapability};

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

fn to_platform_content(item: &ClipboardItem) -> ClipboardContent {
    match item.mime.as_str() {
        "text/html" => ClipboardContent::Html(item.text.clone()),
        _ => ClipboardContent::Text(item.text.clone()),
    }
}

/// System clipboard backed by the platform clipboard via `clipboard-rs`.
///
/// The platform API is synchronous and, on X11, may negotiate with the
/// display server; every write runs on the blocking thread pool with a
/// fresh context so no platform handle crosses threads.
pub struct SystemClipboard {
    capability: ClipboardCapability,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            capability: detect_clipboard_capability(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemClipboardPort for SystemClipboard {
    fn supports_multi_format(&self) -> bool {
        self.capability == ClipboardCapability::MultiFormat
    }

    async fn write(&self, items: Vec<ClipboardItem>) -> Result<()> {
        spawn_blocking(move || {
            let ctx = map_clipboard_err(ClipboardContext::new())?;
            let contents = items.iter().map(to_platform_content).collect();
            map_clipboard_err(ctx.set(contents))
        })
        .await?
    }

    async fn write_text(&self, text: String) -> Result<()> {
        spawn_blocking(move || {
            let ctx = map_clipboard_err(ClipboardContext::new())?;
            map_clipboard_err(ctx.set_text(text))
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_core::clipboard::MimeType;

    #[test]
    fn test_mime_to_platform_content_mapping() {
        let html = ClipboardItem {
            mime: MimeType::text_html(),
            text: "<p>x</p>".into(),
        };
        assert!(matches!(
            to_platform_content(&html),
            ClipboardContent::Html(_)
        ));

        let plain = ClipboardItem {
            mime: MimeType::text_plain(),
            text: "x".into(),
        };
        assert!(matches!(
            to_platform_content(&plain),
            ClipboardContent::Text(_)
        ));

        // Unrecognized textual MIME types degrade to plain text.
        let other = ClipboardItem {
            mime: MimeType("text/rtf".into()),
            text: "x".into(),
        };
        assert!(matches!(
            to_platform_content(&other),
            ClipboardContent::Text(_)
        ));
    }
}
