use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;

use bc_core::{
    clipboard::ClipboardPayload,
    ports::{BlockSelectionPort, SystemClipboardPort},
};

/// Copy the current block selection to the system clipboard.
///
/// Responsibilities:
/// - Query the selected top-level blocks from the editor
/// - Serialize them into a plain-text + HTML payload
/// - Write the payload as one multi-format clipboard item, degrading to
///   plain text when the platform cannot do better
///
/// The selection query and serialization run synchronously on the calling
/// (key-event) thread, so the payload reflects the selection as it stood
/// when the chord fired; only the clipboard write itself is asynchronous.
///
/// An empty selection is not an error: the clipboard is left untouched.
#[derive(Clone)]
pub struct CopySelection {
    selection: Arc<dyn BlockSelectionPort>,
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CopySelection {
    pub fn new(
        selection: Arc<dyn BlockSelectionPort>,
        clipboard: Arc<dyn SystemClipboardPort>,
    ) -> Self {
        Self {
            selection,
            clipboard,
        }
    }

    /// Returns once the selection has been serialized and the write
    /// spawned. The returned handle tracks the in-flight clipboard write;
    /// the key path never awaits it, but tests (and shutdown paths) may.
    ///
    /// Must be called from within a tokio runtime.
    pub fn execute(&self) -> Result<Option<JoinHandle<()>>> {
        let blocks = self.selection.selected_blocks()?;
        if blocks.is_empty() {
            log::debug!("copy requested with no blocks selected, nothing to do");
            return Ok(None);
        }

        let nodes: Vec<_> = blocks.into_iter().map(|block| block.node).collect();
        let payload = ClipboardPayload::from_nodes(&nodes);

        let clipboard = Arc::clone(&self.clipboard);
        let write = tokio::spawn(async move {
            write_payload(clipboard.as_ref(), payload).await;
        });

        Ok(Some(write))
    }
}

/// Write a payload to the system clipboard.
///
/// Degrades to a plain-text-only write when the backend lacks multi-format
/// support, and retries exactly once with plain text when the multi-format
/// write fails. Failures are logged, never surfaced: a copy that silently
/// carried less data beats an error dialog.
pub(crate) async fn write_payload(clipboard: &dyn SystemClipboardPort, payload: ClipboardPayload) {
    if !clipboard.supports_multi_format() {
        if let Err(err) = clipboard.write_text(payload.text).await {
            log::error!("clipboard write failed: {err:#}");
        }
        return;
    }

    if let Err(err) = clipboard.write(payload.items()).await {
        log::error!("clipboard write failed, retrying with plain text only: {err:#}");
        if let Err(err) = clipboard.write_text(payload.text).await {
            log::error!("plain-text fallback write failed: {err:#}");
        }
    }
}
