use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::tick::{TickOutcome, Watcher};
use crate::cli::CliOptions;
use crate::command::CommandTemplate;
use crate::error::RelayError;
use crate::pasteboard::{Pasteboard, SystemPasteboard};
use crate::signals;

/// Watch the system pasteboard until interrupted
pub async fn run(
    options: CliOptions,
    template: CommandTemplate,
    poll_interval: Duration,
) -> Result<(), RelayError> {
    let shutdown = CancellationToken::new();
    signals::spawn_listener(shutdown.clone())?;

    let mut pasteboard = SystemPasteboard::new()?;
    watch(
        &mut pasteboard,
        template,
        options.lines_to_show,
        poll_interval,
        shutdown,
    )
    .await
}

/// Poll `pasteboard` every `poll_interval`, spawning a relay job per URL
///
/// Returns as soon as `shutdown` is cancelled; running jobs are not awaited.
pub async fn watch(
    pasteboard: &mut dyn Pasteboard,
    template: CommandTemplate,
    lines_to_show: u16,
    poll_interval: Duration,
    shutdown: CancellationToken,
) -> Result<(), RelayError> {
    let mut watcher = Watcher::new(pasteboard.change_count()?, template);

    println!("Watching pasteboard for valid URLs...");
    log::debug!(
        "Initial change count {}, polling every {:?}",
        watcher.last_change_count(),
        poll_interval
    );

    let mut ticker = tokio::time::interval_at(Instant::now() + poll_interval, poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                println!("\nBye...");
                return Ok(());
            }
            _ = ticker.tick() => {}
        }

        let outcome = watcher.poll_tick(pasteboard);
        if let Some(message) = outcome.message() {
            log::debug!("{}", message);
            println!("{}", message);
        }

        if let TickOutcome::Dispatch(job) = outcome {
            log::info!("{}Dispatching {}", job.prefix(), job.url);
            tokio::spawn(job.run(lines_to_show));
        }
    }
}
