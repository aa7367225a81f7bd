use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;

use bc_core::{
    clipboard::ClipboardPayload,
    ports::{BlockSelectionPort, SystemClipboardPort},
};

use super::copy_selection::write_payload;

/// Cut the current block selection: copy it to the system clipboard, then
/// remove it from the document.
///
/// The clipboard write is fire-and-forget: it is initiated before the
/// removal request, but the two completions are deliberately unordered and
/// removal is never conditioned on the write succeeding. This matches the
/// editor's observable behavior; gating removal on the write would leave
/// blocks behind whenever the platform clipboard hiccups.
#[derive(Clone)]
pub struct CutSelection {
    selection: Arc<dyn BlockSelectionPort>,
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CutSelection {
    pub fn new(
        selection: Arc<dyn BlockSelectionPort>,
        clipboard: Arc<dyn SystemClipboardPort>,
    ) -> Self {
        Self {
            selection,
            clipboard,
        }
    }

    /// Returns once removal has been requested. The returned handle tracks
    /// the in-flight clipboard write; nothing in the cut path awaits it,
    /// but tests (and shutdown paths) may.
    ///
    /// Must be called from within a tokio runtime.
    pub fn execute(&self) -> Result<Option<JoinHandle<()>>> {
        let blocks = self.selection.selected_blocks()?;
        if blocks.is_empty() {
            log::debug!("cut requested with no blocks selected, nothing to do");
            return Ok(None);
        }

        let nodes: Vec<_> = blocks.into_iter().map(|block| block.node).collect();
        let payload = ClipboardPayload::from_nodes(&nodes);

        let clipboard = Arc::clone(&self.clipboard);
        let write = tokio::spawn(async move {
            write_payload(clipboard.as_ref(), payload).await;
        });

        self.selection.remove_selected()?;

        Ok(Some(write))
    }
}
