//! watch-urls-in-pasteboard library
//!
//! This library exposes the pasteboard watcher and relay pieces for testing.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod pasteboard;
pub mod relay;
pub mod signals;
pub mod watcher;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use cli::CliOptions;
pub use command::CommandTemplate;
pub use config::Config;
pub use error::RelayError;
