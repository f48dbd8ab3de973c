//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const SHOW: &str = "show";
    pub const REV_PARSE: &str = "rev-parse";
}

/// git command flags
pub mod flags {
    /// Never page output (global flag, must precede the subcommand)
    pub const NO_PAGER: &str = "--no-pager";
    /// Run as if git was started in the given path (global flag)
    pub const REPO_PATH: &str = "-C";
    /// Prefix for a custom pretty format; the placeholder is appended
    pub const PRETTY_FORMAT: &str = "--pretty=format:";
    /// Limit log output to a single commit
    pub const SINGLE: &str = "-1";
    /// Warn about whitespace errors
    pub const CHECK: &str = "--check";
    /// Require the argument to name exactly one valid object
    pub const VERIFY: &str = "--verify";
    /// Show version
    pub const VERSION: &str = "--version";
}

/// Pathspec pieces used to narrow the whitespace check
pub mod pathspec {
    /// Separates revisions from paths
    pub const SEPARATOR: &str = "--";
    /// Match everything below the working directory
    pub const ALL: &str = ".";
    /// Magic prefix for an excluding pathspec
    pub const EXCLUDE_PREFIX: &str = ":(exclude)";
}

/// Special git values
pub mod special {
    /// The current head
    pub const HEAD: &str = "HEAD";
    /// The head most recently fetched
    pub const FETCH_HEAD: &str = "FETCH_HEAD";
    /// Version output prefix (e.g., "git version 2.43.0")
    pub const VERSION_PREFIX: &str = "git version ";
}

/// Environment variables consulted by [`crate::git::Config::from_env`]
pub mod env {
    /// Any non-empty value enables debug tracing of invocations
    pub const DEBUG: &str = "DEBUG";
    /// Pathspec pattern excluded from the whitespace check
    pub const CHECK_EXCLUDE: &str = "GIT_CHECK_EXCLUDE";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
    /// Exit status git uses for fatal errors (bad revision, bad pathspec)
    pub const FATAL_EXIT_CODE: i32 = 128;
}

/// Build the `--pretty=format:<placeholder>` argument
pub fn pretty_format(placeholder: &str) -> String {
    format!("{}{}", flags::PRETTY_FORMAT, placeholder)
}

/// Build the `<commit>^..<commit>` range covering exactly one commit
pub fn single_commit_range(commit: &str) -> String {
    format!("{commit}^..{commit}")
}
