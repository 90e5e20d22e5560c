//! Synthetic change counter for platforms without a native one
//!
//! X11, Wayland and Windows clipboards expose no monotonically increasing
//! counter through arboard, so the counter is bumped whenever the hash of the
//! observed text differs from the previous observation.

#![cfg_attr(target_os = "macos", allow(dead_code))]

use std::hash::{DefaultHasher, Hash, Hasher};

#[derive(Debug, Default)]
pub struct ContentFingerprint {
    count: u64,
    last_hash: Option<u64>,
}

impl ContentFingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current content and return the resulting change counter
    pub fn observe(&mut self, text: Option<&str>) -> u64 {
        let hash = hash_text(text);

        match self.last_hash {
            Some(last) if last == hash => {}
            Some(_) => self.count += 1,
            None => {}
        }

        self.last_hash = Some(hash);
        self.count
    }
}

fn hash_text(text: Option<&str>) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
