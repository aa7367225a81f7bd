mod clipboard;

pub use clipboard::SystemClipboard;
