use std::io::{self, Write};
use std::path::PathBuf;

use super::runner::run_command;
use super::window::OutputWindow;
use crate::command::CommandTemplate;

/// One detected URL on its way to the relayed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayJob {
    pub change_count: u64,
    pub url: String,
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl RelayJob {
    pub fn new(change_count: u64, url: String, template: &CommandTemplate) -> Self {
        Self {
            change_count,
            args: template.args_for(&url),
            program: template.program.clone(),
            url,
        }
    }

    /// Correlation tag printed in front of every line this job produces
    pub fn prefix(&self) -> String {
        format!("[{}] ", self.change_count)
    }

    /// Run to completion on stdout
    pub async fn run(self, lines_to_show: u16) {
        let mut stdout = io::stdout();
        if let Err(e) = self.run_with(lines_to_show, &mut stdout).await {
            log::error!("Failed to write relay output: {}", e);
        }
    }

    /// Run the command and report its outcome to `out`
    ///
    /// Command failures are reported and swallowed; only errors writing to
    /// `out` itself are returned.
    pub async fn run_with<W: Write>(self, lines_to_show: u16, out: &mut W) -> io::Result<Option<i32>> {
        let prefix = self.prefix();
        writeln!(out, "{}{}", prefix, self.url)?;
        out.flush()?;

        log::info!("{}Running {:?} {:?}", prefix, self.program, self.args);

        let mut window = OutputWindow::new(prefix.as_str(), lines_to_show);
        match run_command(&self.program, &self.args, &mut window, out).await {
            Ok(code) => {
                writeln!(out, "{}Exit Code: {}", prefix, code)?;
                out.flush()?;
                Ok(Some(code))
            }
            Err(e) => {
                log::error!("{}Failed to run command: {}", prefix, e);
                writeln!(out, "{}Failed to run command: {}", prefix, e)?;
                out.flush()?;
                Ok(None)
            }
        }
    }
}
