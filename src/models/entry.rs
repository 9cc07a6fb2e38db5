use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque stable identifier for an entry. Assigned once at publish time
/// and never reused or renumbered; its string form is used verbatim in
/// fallback slugs and disambiguation suffixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<i64> for EntryId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// A published blog entry as seen by the resolver. The resolver never
/// creates or mutates entries; it only derives paths from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: Option<String>,
    pub published_at: DateTime<Utc>,
    pub comments_enabled: bool,
    pub trackbacks_enabled: bool,
}

impl Entry {
    pub fn new(id: impl Into<EntryId>, title: Option<&str>, published_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_owned),
            published_at,
            comments_enabled: true,
            trackbacks_enabled: true,
        }
    }

    /// Title text for slug and collision purposes. An empty title is
    /// treated the same as a missing one.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Turn off comments and trackbacks for this entry.
    pub fn disable_responses(&mut self) {
        self.comments_enabled = false;
        self.trackbacks_enabled = false;
    }
}
