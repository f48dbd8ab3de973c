//! Invocation observers
//!
//! [`crate::git::Git`] reports every command it is about to run, and every
//! command that failed, through a [`CommandObserver`]. Events carry the full
//! command line as built by [`crate::git::CommandRunner::command_line`].

use super::GitError;

/// Receives invocation events from [`crate::git::Git`]
pub trait CommandObserver: Send + Sync {
    /// Called before an invocation, only when debug is enabled
    fn on_command(&self, command_line: &str);

    /// Called after an invocation failed
    fn on_failure(&self, command_line: &str, error: &GitError);
}

/// Logs invocations through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CommandObserver for TracingObserver {
    fn on_command(&self, command_line: &str) {
        tracing::info!(target: "gitval::git", "[git] cmd: {:?}", command_line);
    }

    fn on_failure(&self, command_line: &str, error: &GitError) {
        tracing::error!(target: "gitval::git", %error, "[git] cmd: {:?}", command_line);
    }
}

/// Discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CommandObserver for NoopObserver {
    fn on_command(&self, _command_line: &str) {}

    fn on_failure(&self, _command_line: &str, _error: &GitError) {}
}
