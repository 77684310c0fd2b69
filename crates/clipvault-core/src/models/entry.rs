//! Entry model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of an entry: its creation time in Unix milliseconds, bumped
/// past the largest existing id when two entries land in the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Allocate an id strictly greater than every id in `existing`.
    #[must_use]
    pub fn next_after(existing: &[Entry]) -> Self {
        Self::next_at(chrono::Utc::now().timestamp_millis(), existing)
    }

    /// Same as [`EntryId::next_after`] with an explicit clock reading.
    #[must_use]
    pub fn next_at(now_ms: i64, existing: &[Entry]) -> Self {
        let floor = existing
            .iter()
            .map(|entry| entry.id.0)
            .max()
            .map_or(i64::MIN, |max| max.saturating_add(1));
        Self(now_ms.max(floor))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A stored snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,
    /// Stored content, never blank
    pub text: String,
    /// Labels in the order they were typed
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entry {
    #[must_use]
    pub fn new(id: EntryId, text: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id,
            text: text.into(),
            tags,
        }
    }

    /// Exact, case-sensitive tag membership
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|own| own == tag)
    }

    /// Case-insensitive substring match against the entry text.
    ///
    /// `lowered_query` must already be lowercase.
    #[must_use]
    pub fn matches_query(&self, lowered_query: &str) -> bool {
        lowered_query.is_empty() || self.text.to_lowercase().contains(lowered_query)
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
///
/// # Examples
///
/// ```
/// use clipvault_core::models::parse_tag_list;
///
/// assert_eq!(parse_tag_list("a, b ,"), vec!["a", "b"]);
/// assert!(parse_tag_list(" , ").is_empty());
/// ```
#[must_use]
pub fn parse_tag_list(tag_string: &str) -> Vec<String> {
    tag_string
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Entries written on first run when the slot is empty.
#[must_use]
pub fn seed_entries() -> Vec<Entry> {
    let seed = |id, text: &str, tags: [&str; 2]| {
        Entry::new(
            EntryId::from_raw(id),
            text,
            tags.iter().map(ToString::to_string).collect(),
        )
    };

    vec![
        seed(1, "Example text 1", ["personal", "notes"]),
        seed(2, "Sample code snippet", ["code", "work"]),
        seed(3, "Important meeting notes", ["work", "meetings"]),
    ]
}
