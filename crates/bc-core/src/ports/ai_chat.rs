//! AI-chat port - abstracts the editor's AI assistant panel.

/// AI-chat port - the one capability the selection handler needs from the
/// assistant UI.
pub trait AiChatPort: Send + Sync {
    /// Open the AI-chat panel.
    fn show(&self);
}
