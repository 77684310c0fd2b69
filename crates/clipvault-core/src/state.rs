//! Ephemeral view-state, kept apart from the persisted entry list.
//!
//! The view talks to the store only through [`crate::search`] and the store's
//! mutation methods.

use crate::models::Entry;
use crate::notice::CopyNotice;
use crate::search::{filter, tags_of};
use crate::storage::Slot;
use crate::store::EntryStore;
use crate::Result;

/// Set of tags the user filters by, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection(Vec<String>);

impl TagSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `tag` when absent, remove it when present. Returns whether the tag
    /// is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(position) = self.0.iter().position(|selected| selected == tag) {
            self.0.remove(position);
            false
        } else {
            self.0.push(tag.to_string());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|selected| selected == tag)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for tag in iter {
            let tag = tag.into();
            if !selection.contains(&tag) {
                selection.0.push(tag);
            }
        }
        selection
    }
}

/// Everything the view holds that is not persisted.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Free-text search box
    pub search_query: String,
    /// Active tag filter
    pub selected_tags: TagSelection,
    /// Draft text for the next entry
    pub draft_text: String,
    /// Draft comma-separated tags for the next entry
    pub draft_tags: String,
    /// "Copied" notification
    pub notice: CopyNotice,
}

impl ViewState {
    #[must_use]
    pub fn new(notice: CopyNotice) -> Self {
        Self {
            notice,
            ..Self::default()
        }
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.selected_tags.toggle(tag)
    }

    /// Tag vocabulary for the sidebar.
    #[must_use]
    pub fn tag_vocabulary(&self, entries: &[Entry]) -> Vec<String> {
        tags_of(entries)
    }

    /// Entries that pass the current tag selection and search text.
    #[must_use]
    pub fn visible_entries<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        filter(entries, self.selected_tags.as_slice(), &self.search_query)
    }

    /// Add the drafted entry to `store`. Drafts are cleared only when an
    /// entry was actually created.
    pub fn submit_draft<S: Slot>(&mut self, store: &mut EntryStore<S>) -> Result<Option<Entry>> {
        let created = store.add(&self.draft_text, &self.draft_tags)?;
        if created.is_some() {
            self.draft_text.clear();
            self.draft_tags.clear();
        }
        Ok(created)
    }
}
