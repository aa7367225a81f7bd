//! Platform capability detection for clipboard writes.
//!
//! Detects whether the platform can accept multi-format clipboard items or
//! only best-effort plain text.

/// Represents the clipboard write capability of the current platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCapability {
    /// Backend accepts one item carrying several MIME-typed representations.
    MultiFormat,
    /// Backend only takes plain text (headless Linux sessions).
    PlainTextOnly,
}

/// Detect the clipboard capability of the current platform.
///
/// # Detection Logic
///
/// - **macOS** / **Windows**: always `MultiFormat`
/// - **Linux**: multi-format negotiation needs a display server; without
///   `DISPLAY` or `WAYLAND_DISPLAY` the session degrades to `PlainTextOnly`
pub fn detect_clipboard_capability() -> ClipboardCapability {
    #[cfg(target_os = "linux")]
    {
        if std::env::var_os("DISPLAY").is_none() && std::env::var_os("WAYLAND_DISPLAY").is_none() {
            log::warn!("no display server detected, clipboard degrades to plain text only");
            return ClipboardCapability::PlainTextOnly;
        }

        ClipboardCapability::MultiFormat
    }

    #[cfg(not(target_os = "linux"))]
    {
        ClipboardCapability::MultiFormat
    }
}
