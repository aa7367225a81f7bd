//! Clipboard domain models.
mod mime;
mod payload;

pub use mime::MimeType;
pub use payload::{ClipboardItem, ClipboardPayload};
