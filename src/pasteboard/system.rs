use arboard::Clipboard;

use super::backend::{Pasteboard, PasteboardError};
#[cfg(not(target_os = "macos"))]
use super::fingerprint::ContentFingerprint;

/// The system clipboard, read through arboard
pub struct SystemPasteboard {
    clipboard: Clipboard,
    #[cfg(not(target_os = "macos"))]
    fingerprint: ContentFingerprint,
}

impl SystemPasteboard {
    pub fn new() -> Result<Self, PasteboardError> {
        let clipboard =
            Clipboard::new().map_err(|e| PasteboardError::Unavailable(e.to_string()))?;

        Ok(Self {
            clipboard,
            #[cfg(not(target_os = "macos"))]
            fingerprint: ContentFingerprint::new(),
        })
    }
}

impl Pasteboard for SystemPasteboard {
    #[cfg(target_os = "macos")]
    fn change_count(&mut self) -> Result<u64, PasteboardError> {
        super::native::change_count()
    }

    #[cfg(not(target_os = "macos"))]
    fn change_count(&mut self) -> Result<u64, PasteboardError> {
        let text = read_text(&mut self.clipboard)?;
        Ok(self.fingerprint.observe(text.as_deref()))
    }

    fn text(&mut self) -> Result<Option<String>, PasteboardError> {
        read_text(&mut self.clipboard)
    }
}

fn read_text(clipboard: &mut Clipboard) -> Result<Option<String>, PasteboardError> {
    match clipboard.get_text() {
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(PasteboardError::Read(e.to_string())),
    }
}
