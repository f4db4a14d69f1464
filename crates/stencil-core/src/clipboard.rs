use arboard::Clipboard;

/// Read access to clipboard text, injectable so rendering can be fed a
/// deterministic fake in tests.
pub trait ClipboardRead: Send + Sync {
    /// Current clipboard text, or `None` when nothing is available
    fn read_text(&self) -> Option<String>;
}

/// The system clipboard. The handle is constructed per read; any platform
/// failure reads as "no text available".
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardRead for SystemClipboard {
    fn read_text(&self) -> Option<String> {
        let mut clipboard = Clipboard::new().ok()?;
        clipboard.get_text().ok()
    }
}
