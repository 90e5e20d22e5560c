//! Command resolution and URL substitution
//!
//! The relayed command is resolved to an absolute executable once at startup;
//! every dispatch only swaps `{}` arguments for the detected URL.

use std::ffi::OsStr;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::error::RelayError;

/// Argument token replaced with the URL at dispatch time
pub const URL_PLACEHOLDER: &str = "{}";

/// Resolve a command token to an absolute executable path
///
/// Tokens containing a path separator are explicit paths and must name an
/// existing, executable, non-directory file. Anything else is looked up in
/// `path_var` (colon-separated, searched in order).
pub fn resolve_command(token: &str, path_var: Option<&OsStr>) -> Result<PathBuf, RelayError> {
    if is_explicit_path(token) {
        return resolve_explicit(Path::new(token));
    }

    // Only relative PATH entries depend on the working directory
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let found = path_var
        .and_then(|paths| which::which_in(token, Some(paths), &cwd).ok())
        .ok_or_else(|| RelayError::NotFoundOnPath(token.to_string()))?;

    log::debug!("Resolved {} to {:?}", token, found);
    Ok(found)
}

fn is_explicit_path(token: &str) -> bool {
    token.contains('/') || token.contains(MAIN_SEPARATOR)
}

fn resolve_explicit(path: &Path) -> Result<PathBuf, RelayError> {
    let not_executable = || RelayError::NotExecutable(path.to_path_buf());

    let metadata = fs::metadata(path).map_err(|_| not_executable())?;
    if !metadata.is_file() || !is_executable(&metadata) {
        return Err(not_executable());
    }

    Ok(std::path::absolute(path)?)
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    true
}

/// Replace every argument equal to the placeholder with `url`
pub fn substitute_placeholder(args: &[String], url: &str) -> Vec<String> {
    args.iter()
        .map(|arg| {
            if arg == URL_PLACEHOLDER {
                url.to_string()
            } else {
                arg.clone()
            }
        })
        .collect()
}

/// Resolved program plus its argument template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CommandTemplate {
    /// Resolve `command[0]` against the process PATH
    pub fn resolve(command: &[String]) -> Result<Self, RelayError> {
        let path_var = std::env::var_os("PATH");
        Self::resolve_with_path(command, path_var.as_deref())
    }

    pub fn resolve_with_path(
        command: &[String],
        path_var: Option<&OsStr>,
    ) -> Result<Self, RelayError> {
        let (name, args) = command
            .split_first()
            .ok_or_else(|| RelayError::NotFoundOnPath(String::new()))?;

        Ok(Self {
            program: resolve_command(name, path_var)?,
            args: args.to_vec(),
        })
    }

    pub fn args_for(&self, url: &str) -> Vec<String> {
        substitute_placeholder(&self.args, url)
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
