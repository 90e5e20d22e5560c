use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasteboardError {
    #[error("Pasteboard unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Read(String),
}

/// Source of clipboard change events
///
/// `change_count` must grow whenever the content changes; `text` is only
/// consulted after the counter moved.
pub trait Pasteboard {
    fn change_count(&mut self) -> Result<u64, PasteboardError>;

    fn text(&mut self) -> Result<Option<String>, PasteboardError>;
}

/// One sample of the pasteboard taken after a counter change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub change_count: u64,
    pub text: Option<String>,
}
