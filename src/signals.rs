//! Signal listener
//!
//! Interrupts cancel the shared token instead of exiting from a handler; the
//! watch loop observes the token at its tick suspension point.

use tokio_util::sync::CancellationToken;

use crate::error::RelayError;

/// Install handlers and spawn the listener task
///
/// Must be called from within a tokio runtime.
#[cfg(unix)]
pub fn spawn_listener(shutdown: CancellationToken) -> Result<(), RelayError> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt()).map_err(RelayError::Signal)?;
    let mut sigwinch = signal(SignalKind::window_change()).map_err(RelayError::Signal)?;

    tokio::spawn(async move {
        loop {
            tokio::select! {
                Some(()) = sigint.recv() => {
                    log::info!("Received SIGINT, shutting down");
                    shutdown.cancel();
                    break;
                }
                Some(()) = sigwinch.recv() => {
                    // Informational only, relay windows keep their height
                    println!("\nTerminal Size Changed");
                }
                else => break,
            }
        }
    });

    Ok(())
}

#[cfg(not(unix))]
pub fn spawn_listener(shutdown: CancellationToken) -> Result<(), RelayError> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Received Ctrl+C, shutting down");
            shutdown.cancel();
        }
    });

    Ok(())
}
