//! Command-line parsing
//!
//! Everything after the first positional token (or after `--`) belongs to the
//! relayed command verbatim, so `-l 3 yt-dlp -x {}` keeps `-x` for yt-dlp.

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;

use crate::config::Config;

/// Watch the pasteboard for URLs and relay them to a command
#[derive(Parser, Debug)]
#[command(
    name = "watch-urls-in-pasteboard",
    version,
    about = "Watch the pasteboard for URLs and run a command for each one",
    after_help = "Arguments equal to {} are replaced with the detected URL."
)]
pub struct Args {
    /// Lines of command output to keep on screen [default: 5]
    #[arg(
        short = 'l',
        long = "lines-to-show",
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub lines_to_show: Option<u16>,

    /// Command to run for every URL, followed by its arguments
    #[arg(value_name = "COMMAND", required = true, trailing_var_arg = true)]
    pub command: Vec<String>,
}

/// Parsed options, immutable for the lifetime of the watch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub command: Vec<String>,
    pub lines_to_show: u16,
}

impl Args {
    /// Merge with config defaults; the command line wins
    pub fn into_options(self, config: &Config) -> CliOptions {
        let lines_to_show = self
            .lines_to_show
            .unwrap_or(config.watch.lines_to_show)
            .max(1);

        CliOptions {
            command: self.command,
            lines_to_show,
        }
    }
}

pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args)
}

/// Help and version requests exit cleanly, every other parse failure is 1
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
