//! Shared test utilities for watch-urls-in-pasteboard
//!
//! This module provides a scripted pasteboard and helpers used across
//! multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

    use crate::command::CommandTemplate;
    use crate::pasteboard::{Pasteboard, PasteboardError};

    /// In-memory pasteboard whose counter and text are set by the test
    #[derive(Debug, Default)]
    pub struct ScriptedPasteboard {
        pub change_count: u64,
        pub text: Option<String>,
        pub fail_counter: bool,
        pub fail_text: bool,
        pub text_reads: usize,
    }

    impl ScriptedPasteboard {
        pub fn new(change_count: u64) -> Self {
            Self {
                change_count,
                ..Self::default()
            }
        }

        /// Simulate a copy: bump the counter and replace the text
        pub fn copy(&mut self, text: Option<&str>) {
            self.change_count += 1;
            self.text = text.map(str::to_string);
        }
    }

    impl Pasteboard for ScriptedPasteboard {
        fn change_count(&mut self) -> Result<u64, PasteboardError> {
            if self.fail_counter {
                return Err(PasteboardError::Unavailable("scripted failure".to_string()));
            }
            Ok(self.change_count)
        }

        fn text(&mut self) -> Result<Option<String>, PasteboardError> {
            self.text_reads += 1;
            if self.fail_text {
                return Err(PasteboardError::Read("scripted failure".to_string()));
            }
            Ok(self.text.clone())
        }
    }

    /// Pasteboard whose counter can be bumped from another task while the
    /// watch loop owns it
    #[derive(Debug, Clone)]
    pub struct SharedPasteboard {
        pub change_count: Arc<AtomicU64>,
        pub text_reads: Arc<AtomicUsize>,
        pub text: String,
    }

    impl SharedPasteboard {
        pub fn new(text: &str) -> Self {
            Self {
                change_count: Arc::new(AtomicU64::new(0)),
                text_reads: Arc::new(AtomicUsize::new(0)),
                text: text.to_string(),
            }
        }

        pub fn copy(&self) {
            self.change_count.fetch_add(1, Ordering::SeqCst);
        }

        pub fn reads(&self) -> usize {
            self.text_reads.load(Ordering::SeqCst)
        }
    }

    impl Pasteboard for SharedPasteboard {
        fn change_count(&mut self) -> Result<u64, PasteboardError> {
            Ok(self.change_count.load(Ordering::SeqCst))
        }

        fn text(&mut self) -> Result<Option<String>, PasteboardError> {
            self.text_reads.fetch_add(1, Ordering::SeqCst);
            Ok(Some(self.text.clone()))
        }
    }

    /// Template that prints the URL with /bin/echo
    pub fn echo_template() -> CommandTemplate {
        CommandTemplate {
            program: PathBuf::from("/bin/echo"),
            args: vec!["{}".to_string()],
        }
    }
}
