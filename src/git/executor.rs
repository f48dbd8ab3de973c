//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::GitError;
use super::constants::{self, errors, flags, special};

/// Runs the external tool and hands back its captured stdout
///
/// A failed invocation (non-zero exit, missing executable) is an error;
/// partial output is never returned as success.
pub trait CommandRunner {
    /// Run the tool with `args` and return stdout on success
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, GitError>;

    /// The command line `run` executes for `args`, for logging
    fn command_line(&self, args: &[&str]) -> String {
        let mut line = String::from(constants::GIT_COMMAND);
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl<F> CommandRunner for F
where
    F: Fn(&[&str]) -> Result<Vec<u8>, GitError>,
{
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, GitError> {
        self(args)
    }
}

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Repository path this executor runs in, if any
    pub fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }

    /// Get the git version
    pub fn version(&self) -> Result<String, GitError> {
        let output = self.run(&[flags::VERSION])?;
        let output = String::from_utf8_lossy(&output);
        // Output format: "git version 2.43.0"
        let trimmed = output.trim();
        Ok(trimmed
            .strip_prefix(special::VERSION_PREFIX)
            .unwrap_or(trimmed)
            .to_string())
    }
}

impl CommandRunner for GitExecutor {
    /// Run a git command with the given arguments
    ///
    /// Automatically adds `--no-pager` so output is never sent to a pager.
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        // Add repository path if specified
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.arg(flags::NO_PAGER);
        cmd.args(args);

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.to_lowercase().contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed {
                exit_code,
                stdout: output.stdout,
                stderr,
            })
        }
    }

    fn command_line(&self, args: &[&str]) -> String {
        let mut line = String::from(constants::GIT_COMMAND);
        if let Some(path) = self.repo_path() {
            line.push_str(&format!(" {} {}", flags::REPO_PATH, path.display()));
        }
        line.push(' ');
        line.push_str(flags::NO_PAGER);
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
