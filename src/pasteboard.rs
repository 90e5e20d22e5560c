mod backend;
mod fingerprint;
#[cfg(target_os = "macos")]
mod native;
mod system;

pub use backend::{Pasteboard, PasteboardError, Snapshot};
pub use fingerprint::ContentFingerprint;
pub use system::SystemPasteboard;
