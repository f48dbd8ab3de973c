//! Whitespace check data model

/// One problem reported by `git log --check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitespaceIssue {
    /// Path relative to the repository root
    pub path: String,
    /// 1-based line number in the new version of the file
    pub line: u32,
    /// git's description, without the trailing period
    pub message: String,
}

/// Result of a whitespace check on one commit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckReport {
    /// Output exactly as git printed it
    pub raw: Vec<u8>,
    /// Problems found in `raw`
    pub issues: Vec<WhitespaceIssue>,
    /// git signalled a failure through its exit status
    pub failed: bool,
}

impl CheckReport {
    /// No problems were signalled or found
    pub fn is_clean(&self) -> bool {
        !self.failed && self.issues.is_empty()
    }
}
