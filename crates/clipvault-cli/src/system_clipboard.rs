//! System clipboard backed by `arboard`.

use std::sync::{Arc, Mutex, PoisonError};

use clipvault_core::clipboard::Clipboard;
use clipvault_core::{Error, Result};

/// Lazily opened handle to the platform clipboard.
///
/// The handle is kept for the lifetime of this value: on X11/Wayland the
/// copied text is only served while the owning handle is alive.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let handle = Arc::clone(&self.handle);
        let text = text.to_string();

        tokio::task::spawn_blocking(move || {
            let mut guard = handle.lock().unwrap_or_else(PoisonError::into_inner);
            if guard.is_none() {
                *guard = Some(
                    arboard::Clipboard::new().map_err(|error| Error::Clipboard(error.to_string()))?,
                );
            }
            let Some(clipboard) = guard.as_mut() else {
                return Err(Error::Clipboard("clipboard unavailable".to_string()));
            };
            clipboard
                .set_text(text)
                .map_err(|error| Error::Clipboard(error.to_string()))
        })
        .await
        .map_err(|error| Error::Clipboard(error.to_string()))?
    }
}
