//! git command execution layer
//!
//! This module drives the `git` executable and reshapes its plain-text
//! output into commit records.

pub mod config;
pub mod constants;
mod executor;
pub mod fields;
pub mod observer;
/// Parser module (public for integration testing)
pub mod parser;
mod repository;

pub use config::Config;
pub use executor::{CommandRunner, GitExecutor};
pub use fields::{FIELDS, FieldSpec};
pub use observer::{CommandObserver, NoopObserver, TracingObserver};
pub use repository::Git;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed {
        exit_code: i32,
        stdout: Vec<u8>,
        stderr: String,
    },

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

impl GitError {
    /// Build a `CommandFailed` with no captured output
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        GitError::CommandFailed {
            exit_code,
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }
}
