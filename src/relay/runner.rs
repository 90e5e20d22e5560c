use std::io::Write;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use super::window::OutputWindow;
use crate::error::RelayError;

/// Run `program`, relaying its stdout through `window`, and return its exit code
///
/// Returns only after stdout has closed AND the process has terminated; a
/// child that closes stdout early is still waited for.
pub async fn run_command<W: Write>(
    program: &Path,
    args: &[String],
    window: &mut OutputWindow,
    out: &mut W,
) -> Result<i32, RelayError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|source| RelayError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

    log::debug!("Spawned {:?} (pid {:?})", program, child.id());

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| RelayError::Output(std::io::Error::other("stdout was not captured")))?;

    // Dropping the reader on a relay error closes the pipe, so wait() still finishes
    let (relayed, status) = tokio::join!(relay_lines(stdout, window, out), child.wait());
    relayed?;
    let status = status.map_err(RelayError::Wait)?;

    log::debug!("{:?} exited with {}", program, status);
    Ok(exit_code(status))
}

async fn relay_lines<R, W>(
    reader: R,
    window: &mut OutputWindow,
    out: &mut W,
) -> Result<(), RelayError>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    let mut segments = BufReader::new(reader).split(b'\n');

    while let Some(segment) = segments.next_segment().await.map_err(RelayError::Output)? {
        let line = String::from_utf8_lossy(&segment);
        let line = line.strip_suffix('\r').unwrap_or(&line).to_string();
        window.push(line, out).map_err(RelayError::Output)?;
    }

    Ok(())
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
