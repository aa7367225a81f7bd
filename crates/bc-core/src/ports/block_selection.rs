//! Block-selection port - abstracts the editor's block-selection plugin.
//!
//! The editor owns the document and the selection state; this port exposes
//! the two operations the clipboard use cases need from it.

use anyhow::Result;

use crate::selection::SelectedBlock;

/// Block-selection port - abstracts the editor's block-selection plugin.
///
/// Both operations run synchronously inside the key-event handler; the
/// document is single-writer (the editing UI thread) so there is nothing
/// to await.
pub trait BlockSelectionPort: Send + Sync {
    /// Snapshot of the currently selected top-level blocks, in document
    /// order. Produced fresh on every call.
    fn selected_blocks(&self) -> Result<Vec<SelectedBlock>>;

    /// Request removal of the currently selected blocks from the document.
    fn remove_selected(&self) -> Result<()>;
}
