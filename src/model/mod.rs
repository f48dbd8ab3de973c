//! Data models for gitval
//!
//! Plain records produced from git output.

mod check;
mod commit;

pub use check::{CheckReport, WhitespaceIssue};
pub use commit::CommitEntry;
