//! gitval - structured commit data from the git CLI
//!
//! Drives an installed `git` as a subprocess and reshapes its plain-text
//! output into commit records.
//!
//! This library provides:
//! - [`git`]: git command execution, configuration and queries
//! - [`model`]: Domain models
//!
//! ```no_run
//! use gitval::git::{Config, Git};
//!
//! let git = Git::default().with_config(Config::from_env());
//! for commit in git.commits("HEAD~3..HEAD")? {
//!     println!("{} {}", commit.commit(), commit.subject());
//! }
//! # Ok::<(), gitval::git::GitError>(())
//! ```

pub mod git;
pub mod model;
