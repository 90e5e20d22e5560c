use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pasteboard::PasteboardError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{} is not an executable file", .0.display())]
    NotExecutable(PathBuf),

    #[error("{0} not found on PATH")]
    NotFoundOnPath(String),

    #[error("Failed to spawn {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read command output: {0}")]
    Output(#[source] io::Error),

    #[error("Failed to wait for command: {0}")]
    Wait(#[source] io::Error),

    #[error("Failed to install signal handler: {0}")]
    Signal(#[source] io::Error),

    #[error(transparent)]
    Pasteboard(#[from] PasteboardError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl RelayError {
    /// Process exit code for errors that end the program
    pub fn exit_code(&self) -> i32 {
        match self {
            RelayError::NotExecutable(_) => 2,
            RelayError::NotFoundOnPath(_) => 3,
            _ => 1,
        }
    }
}
