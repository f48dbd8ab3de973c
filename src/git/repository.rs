//! Commit queries against one repository
//!
//! [`Git`] turns range expressions into ordered commit records, assembles
//! each record from one `git log -1` query per field, and passes whitespace
//! checks, diffs and ref resolution through untouched.

use std::path::PathBuf;

use super::constants::{
    commands, errors, flags, pathspec, pretty_format, single_commit_range, special,
};
use super::executor::{CommandRunner, GitExecutor};
use super::fields::{FIELDS, HASH_PLACEHOLDER};
use super::observer::{CommandObserver, TracingObserver};
use super::parser::{parse_check_output, parse_hash_list};
use super::{Config, GitError};
use crate::model::{CheckReport, CommitEntry};

/// Query facade over a [`CommandRunner`]
///
/// Holds no state between calls besides its configuration; every result
/// reflects the repository as git sees it at call time. `Git` is `Sync`
/// whenever its runner is, so commits can be assembled from several threads.
pub struct Git<R: CommandRunner = GitExecutor> {
    runner: R,
    config: Config,
    observer: Box<dyn CommandObserver>,
}

impl Default for Git<GitExecutor> {
    fn default() -> Self {
        Self::new(GitExecutor::new())
    }
}

impl Git<GitExecutor> {
    /// Query the repository at `path` with the system `git`
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self::new(GitExecutor::with_repo_path(path))
    }
}

impl<R: CommandRunner> Git<R> {
    /// Create a facade with default configuration and tracing output
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            config: Config::default(),
            observer: Box::new(TracingObserver),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the observer that receives invocation events
    pub fn with_observer(mut self, observer: impl CommandObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Run one invocation, reporting it to the observer
    fn run(&self, args: &[&str]) -> Result<Vec<u8>, GitError> {
        if self.config.debug {
            self.observer.on_command(&self.runner.command_line(args));
        }
        self.runner
            .run(args)
            .inspect_err(|e| self.observer.on_failure(&self.runner.command_line(args), e))
    }

    /// Return the commits of a range, newest first
    ///
    /// A single commit means that commit and all its ancestors; `A..B` or
    /// `A...B` means the isolated set between the endpoints. Fails on the
    /// first commit that cannot be assembled.
    pub fn commits(&self, range: &str) -> Result<Vec<CommitEntry>, GitError> {
        let format = pretty_format(HASH_PLACEHOLDER);
        let output = self.run(&[commands::LOG, &format, range])?;

        parse_hash_list(&String::from_utf8_lossy(&output))
            .iter()
            .map(|hash| self.log_commit(hash))
            .collect()
    }

    /// Assemble every field of one commit
    ///
    /// Each field is its own `git log -1` query, trimmed of surrounding
    /// whitespace. No record is returned unless all of them succeed.
    pub fn log_commit(&self, commit: &str) -> Result<CommitEntry, GitError> {
        FIELDS
            .iter()
            .map(|field| {
                let format = pretty_format(field.placeholder);
                let output = self.run(&[commands::LOG, flags::SINGLE, &format, commit])?;
                let value = String::from_utf8_lossy(&output).trim().to_string();
                Ok::<_, GitError>((field.name, value))
            })
            .collect()
    }

    /// Run the whitespace check on the changes of a single commit
    ///
    /// Git's own exit status is the verdict: issues come back as
    /// [`GitError::CommandFailed`] with the report in `stdout`.
    pub fn check(&self, commit: &str) -> Result<Vec<u8>, GitError> {
        let range = single_commit_range(commit);
        let mut args = vec![commands::LOG, flags::CHECK, range.as_str()];

        let exclude = self
            .config
            .check_exclude
            .as_ref()
            .map(|pattern| format!("{}{}", pathspec::EXCLUDE_PREFIX, pattern));
        if let Some(ref exclude) = exclude {
            args.extend([pathspec::SEPARATOR, pathspec::ALL, exclude.as_str()]);
        }

        self.run(&args)
    }

    /// Run [`Git::check`] and parse the problems it reports
    ///
    /// Fatal git errors (unknown commit, root commit without parent) are
    /// still returned as errors.
    pub fn check_report(&self, commit: &str) -> Result<CheckReport, GitError> {
        let (raw, failed) = match self.check(commit) {
            Ok(raw) => (raw, false),
            Err(GitError::CommandFailed {
                exit_code, stdout, ..
            }) if exit_code != errors::FATAL_EXIT_CODE => (stdout, true),
            Err(e) => return Err(e),
        };

        let issues = parse_check_output(&String::from_utf8_lossy(&raw));
        Ok(CheckReport {
            raw,
            issues,
            failed,
        })
    }

    /// Return the full patch of one commit verbatim
    ///
    /// NOTE: This could be expensive for very large commits.
    pub fn show(&self, commit: &str) -> Result<Vec<u8>, GitError> {
        self.run(&[commands::SHOW, commit])
    }

    /// Resolve a ref to its commit hash
    pub fn resolve_ref(&self, name: &str) -> Result<String, GitError> {
        let output = self.run(&[commands::REV_PARSE, flags::VERIFY, name])?;
        let hash = String::from_utf8_lossy(&output).trim().to_string();
        if hash.is_empty() {
            return Err(GitError::ParseError(format!("no hash printed for {name}")));
        }
        Ok(hash)
    }

    /// Hash of `HEAD`
    pub fn head_commit(&self) -> Result<String, GitError> {
        self.resolve_ref(special::HEAD)
    }

    /// Hash of `FETCH_HEAD`
    pub fn fetch_head_commit(&self) -> Result<String, GitError> {
        self.resolve_ref(special::FETCH_HEAD)
    }
}
