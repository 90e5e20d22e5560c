use std::fmt;

use super::url::is_valid_url;
use crate::command::CommandTemplate;
use crate::pasteboard::{Pasteboard, PasteboardError, Snapshot};
use crate::relay::RelayJob;

/// Loop-owned watch state
#[derive(Debug)]
pub struct Watcher {
    last_change_count: u64,
    template: CommandTemplate,
}

/// What a single poll found
#[derive(Debug)]
pub enum TickOutcome {
    Unchanged,
    CounterUnavailable(PasteboardError),
    TextUnavailable {
        change_count: u64,
        error: PasteboardError,
    },
    NoText {
        change_count: u64,
    },
    NotUrl {
        change_count: u64,
    },
    Dispatch(RelayJob),
}

impl Watcher {
    pub fn new(initial_change_count: u64, template: CommandTemplate) -> Self {
        Self {
            last_change_count: initial_change_count,
            template,
        }
    }

    pub fn last_change_count(&self) -> u64 {
        self.last_change_count
    }

    /// Sample the pasteboard once
    ///
    /// Text is only read when the change counter moved since the last tick.
    pub fn poll_tick(&mut self, pasteboard: &mut dyn Pasteboard) -> TickOutcome {
        let change_count = match pasteboard.change_count() {
            Ok(count) => count,
            Err(error) => return TickOutcome::CounterUnavailable(error),
        };

        if change_count == self.last_change_count {
            return TickOutcome::Unchanged;
        }
        self.last_change_count = change_count;

        let snapshot = match pasteboard.text() {
            Ok(text) => Snapshot { change_count, text },
            Err(error) => {
                return TickOutcome::TextUnavailable {
                    change_count,
                    error,
                };
            }
        };

        self.classify(snapshot)
    }

    fn classify(&self, snapshot: Snapshot) -> TickOutcome {
        let change_count = snapshot.change_count;
        let Some(text) = snapshot.text else {
            return TickOutcome::NoText { change_count };
        };

        let url = text.trim();
        if !is_valid_url(url) {
            return TickOutcome::NotUrl { change_count };
        }

        TickOutcome::Dispatch(RelayJob::new(change_count, url.to_string(), &self.template))
    }
}

impl fmt::Display for TickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickOutcome::Unchanged => Ok(()),
            TickOutcome::CounterUnavailable(error) => {
                write!(f, "Failed to read pasteboard change count: {}", error)
            }
            TickOutcome::TextUnavailable {
                change_count,
                error,
            } => write!(
                f,
                "[{}] Failed to read pasteboard text: {}",
                change_count, error
            ),
            TickOutcome::NoText { change_count } => {
                write!(f, "[{}] Pasteboard has no text content.", change_count)
            }
            TickOutcome::NotUrl { change_count } => {
                write!(f, "[{}] Not a valid URL.", change_count)
            }
            // The job announces itself when it starts
            TickOutcome::Dispatch(_) => Ok(()),
        }
    }
}

impl TickOutcome {
    /// Line to print for this tick, if any
    pub fn message(&self) -> Option<String> {
        match self {
            TickOutcome::Unchanged | TickOutcome::Dispatch(_) => None,
            _ => Some(self.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "tick_tests.rs"]
mod tick_tests;
