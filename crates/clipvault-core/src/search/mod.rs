//! Derived views over the entry list: the tag vocabulary and the filtered list.
//!
//! Both are linear scans recomputed on every render.

use std::collections::HashSet;

use crate::models::Entry;

/// Distinct tags across all entries, in first-seen order.
#[must_use]
pub fn tags_of(entries: &[Entry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .flat_map(|entry| entry.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// Entries carrying every selected tag whose text contains `query`,
/// ignoring case. An empty selection or empty query matches everything.
#[must_use]
pub fn filter<'a, T: AsRef<str>>(
    entries: &'a [Entry],
    selected_tags: &[T],
    query: &str,
) -> Vec<&'a Entry> {
    let lowered_query = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            selected_tags
                .iter()
                .all(|tag| entry.has_tag(tag.as_ref()))
        })
        .filter(|entry| entry.matches_query(&lowered_query))
        .collect()
}
