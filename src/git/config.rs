//! Runtime configuration
//!
//! Values are resolved once, when a [`crate::git::Git`] is built. Explicit
//! values win over the environment, and the environment wins over defaults.

use super::constants::env;

/// Configuration shared by all git queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Report every invocation to the observer before running it
    pub debug: bool,

    /// Pathspec pattern excluded from the whitespace check
    pub check_exclude: Option<String>,
}

impl Config {
    /// Read `DEBUG` and `GIT_CHECK_EXCLUDE` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], against an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            debug: non_empty(env::DEBUG).is_some(),
            check_exclude: non_empty(env::CHECK_EXCLUDE),
        }
    }

    /// Force debug on or leave it as configured
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug |= debug;
        self
    }

    /// Replace the exclusion pattern when one is given
    pub fn with_check_exclude(mut self, pattern: Option<String>) -> Self {
        if let Some(pattern) = pattern.filter(|p| !p.is_empty()) {
            self.check_exclude = Some(pattern);
        }
        self
    }
}
