//! Commit fields queried per commit
//!
//! Keys are `git log --pretty=format:` placeholders; each one is queried on
//! its own so multi-line values (body, notes) need no delimiter handling.

/// One placeholder and the record key its value is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// `--pretty=format:` placeholder, e.g. `%aE`
    pub placeholder: &'static str,
    /// Key in [`crate::model::CommitEntry`], e.g. `author_email`
    pub name: &'static str,
}

/// Placeholder for the full commit hash, used to list a range
pub const HASH_PLACEHOLDER: &str = "%H";

const fn field(placeholder: &'static str, name: &'static str) -> FieldSpec {
    FieldSpec { placeholder, name }
}

/// Every field of a [`crate::model::CommitEntry`]
pub const FIELDS: [FieldSpec; 20] = [
    field("%h", "abbreviated_commit"),
    field("%p", "abbreviated_parent"),
    field("%t", "abbreviated_tree"),
    field("%aD", "author_date"),
    field("%aE", "author_email"),
    field("%aN", "author_name"),
    field("%b", "body"),
    field("%H", "commit"),
    field("%N", "commit_notes"),
    field("%cD", "committer_date"),
    field("%cE", "committer_email"),
    field("%cN", "committer_name"),
    field("%e", "encoding"),
    field("%P", "parent"),
    field("%D", "refs"),
    field("%f", "sanitized_subject_line"),
    field("%GS", "signer"),
    field("%GK", "signer_key"),
    field("%s", "subject"),
    field("%G?", "verification_flag"),
];

/// Field names in table order
pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|f| f.name)
}

/// Find a field by its record key
pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}
