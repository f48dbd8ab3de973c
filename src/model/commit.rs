//! Commit data model

use std::collections::BTreeMap;

/// A single commit's information, keyed by field name
///
/// Always holds one value per entry of [`crate::git::FIELDS`] when built by
/// [`crate::git::Git::log_commit`]. Values are trimmed and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitEntry {
    fields: BTreeMap<String, String>,
}

impl CommitEntry {
    /// Value of a field, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Field names in name order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Full commit hash
    pub fn commit(&self) -> &str {
        self.get("commit").unwrap_or_default()
    }

    pub fn subject(&self) -> &str {
        self.get("subject").unwrap_or_default()
    }

    pub fn body(&self) -> &str {
        self.get("body").unwrap_or_default()
    }

    pub fn author_name(&self) -> &str {
        self.get("author_name").unwrap_or_default()
    }

    pub fn author_email(&self) -> &str {
        self.get("author_email").unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for CommitEntry
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
