use std::sync::Mutex;

use arboard::Clipboard;
use async_trait::async_trait;

use dbtune_app::ports::{ClipboardError, ClipboardWriter};

/// System clipboard through arboard.
///
/// The handle is opened on first use and kept for the life of the process;
/// on X11 and Wayland the copied text is only served while it is alive.
pub struct ArboardClipboard {
    handle: Mutex<Option<Clipboard>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardWriter for ArboardClipboard {
    async fn write(&self, content: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        if guard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            *guard = Some(clipboard);
        }

        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(content.to_string())
                .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            None => Err(ClipboardError::Unavailable(
                "clipboard handle missing".to_string(),
            )),
        }
    }
}
