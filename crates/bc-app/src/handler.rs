//! Selection-aware key handler.
//!
//! Active only while the editor is in block-selecting mode; the host is
//! responsible for not routing events here otherwise. Recognized chords
//! dispatch to the clipboard use cases or the AI-chat panel, everything
//! else falls through to the editor's default handling.

use std::sync::Arc;

use bc_core::hotkey::{Hotkey, KeyEvent};
use bc_core::ports::{AiChatPort, BlockSelectionPort, SystemClipboardPort};

use crate::use_cases::{CopySelection, CutSelection};

/// Outcome of dispatching one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDispatch {
    /// The chord was recognized. `prevent_default` tells the host whether
    /// to suppress the platform's default handling for this event.
    Handled { prevent_default: bool },

    /// Not a chord this handler owns; let the editor process it.
    Ignored,
}

/// Dispatches keyboard chords during an active block selection.
pub struct SelectingKeyHandler {
    copy: CopySelection,
    cut: CutSelection,
    ai_chat: Arc<dyn AiChatPort>,
    show_ai_chat: Hotkey,
    copy_chord: Hotkey,
    cut_chord: Hotkey,
}

impl SelectingKeyHandler {
    pub fn new(
        selection: Arc<dyn BlockSelectionPort>,
        clipboard: Arc<dyn SystemClipboardPort>,
        ai_chat: Arc<dyn AiChatPort>,
    ) -> Self {
        Self {
            copy: CopySelection::new(Arc::clone(&selection), Arc::clone(&clipboard)),
            cut: CutSelection::new(selection, clipboard),
            ai_chat,
            show_ai_chat: Hotkey::primary("j"),
            copy_chord: Hotkey::primary("c"),
            cut_chord: Hotkey::primary("x"),
        }
    }

    /// Dispatch one key event.
    ///
    /// Returns synchronously; clipboard work runs on spawned tasks so the
    /// UI thread never waits on a clipboard write. Must be called from
    /// within a tokio runtime.
    pub fn on_key_down(&self, event: &KeyEvent) -> KeyDispatch {
        if self.show_ai_chat.matches(event) {
            self.ai_chat.show();
            // Opening the panel does not need default handling suppressed.
            return KeyDispatch::Handled {
                prevent_default: false,
            };
        }

        if self.copy_chord.matches(event) {
            if let Err(err) = self.copy.execute() {
                log::error!("block copy failed: {err:#}");
            }
            return KeyDispatch::Handled {
                prevent_default: true,
            };
        }

        if self.cut_chord.matches(event) {
            if let Err(err) = self.cut.execute() {
                log::error!("block cut failed: {err:#}");
            }
            return KeyDispatch::Handled {
                prevent_default: true,
            };
        }

        KeyDispatch::Ignored
    }
}
