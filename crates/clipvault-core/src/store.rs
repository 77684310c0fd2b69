//! Entry store: the in-memory list kept in step with a persisted slot.
//!
//! The list operations (`add`, `remove`) are pure and return a new list.
//! [`EntryStore`] applies them and rewrites the slot after every change.

use serde::{Deserialize, Serialize};

use crate::models::{parse_tag_list, seed_entries, Entry, EntryId};
use crate::storage::Slot;
use crate::{Error, Result};

/// What to do when the slot holds data that is not a valid entry list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptDataPolicy {
    /// Surface the parse or decoding error and leave the slot untouched.
    #[default]
    Fail,
    /// Quarantine the unreadable value and start over from the seed entries.
    Reseed,
}

/// Read the entry list from `slot`.
///
/// An empty slot is seeded with [`seed_entries`], which are written back
/// immediately.
pub fn load<S: Slot>(slot: &S, policy: CorruptDataPolicy) -> Result<Vec<Entry>> {
    let raw = match slot.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::info!("No stored entries under '{}', writing seed entries", slot.key());
            return reseed(slot);
        }
        Err(error @ Error::InvalidEncoding { .. }) => return recover(slot, policy, error),
        Err(error) => return Err(error),
    };

    match serde_json::from_str::<Vec<Entry>>(&raw) {
        Ok(entries) => {
            tracing::debug!("Loaded {} entries from '{}'", entries.len(), slot.key());
            Ok(entries)
        }
        Err(source) => recover(
            slot,
            policy,
            Error::CorruptData {
                key: slot.key().to_string(),
                source,
            },
        ),
    }
}

fn recover<S: Slot>(slot: &S, policy: CorruptDataPolicy, error: Error) -> Result<Vec<Entry>> {
    match policy {
        CorruptDataPolicy::Fail => Err(error),
        CorruptDataPolicy::Reseed => {
            tracing::warn!("{}; reseeding", error);
            slot.quarantine()?;
            reseed(slot)
        }
    }
}

fn reseed<S: Slot>(slot: &S) -> Result<Vec<Entry>> {
    let entries = seed_entries();
    slot.write(&serde_json::to_string(&entries)?)?;
    Ok(entries)
}

/// Write the full list to `slot`.
///
/// An empty list is never written, so existing data is not clobbered before
/// it has been loaded. Returns whether a write happened.
pub fn persist<S: Slot>(slot: &S, entries: &[Entry]) -> Result<bool> {
    if entries.is_empty() {
        tracing::debug!("Skipping persist of empty entry list");
        return Ok(false);
    }

    slot.write(&serde_json::to_string(entries)?)?;
    Ok(true)
}

/// Append a new entry built from `text` and a comma-separated `tag_string`.
///
/// Blank text leaves the list unchanged.
#[must_use]
pub fn add(entries: &[Entry], text: &str, tag_string: &str) -> Vec<Entry> {
    let mut next = entries.to_vec();
    if text.trim().is_empty() {
        return next;
    }

    next.push(Entry::new(
        EntryId::next_after(entries),
        text,
        parse_tag_list(tag_string),
    ));
    next
}

/// Drop the entry with `id`; unknown ids leave the list unchanged.
#[must_use]
pub fn remove(entries: &[Entry], id: EntryId) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| entry.id != id)
        .cloned()
        .collect()
}

/// Entry list bound to the slot it is persisted in.
#[derive(Debug)]
pub struct EntryStore<S> {
    slot: S,
    entries: Vec<Entry>,
}

impl<S: Slot> EntryStore<S> {
    /// Load (or seed) entries from `slot`.
    pub fn open(slot: S, policy: CorruptDataPolicy) -> Result<Self> {
        let entries = load(&slot, policy)?;
        Ok(Self { slot, entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Add an entry and persist. Returns `None` for blank text.
    pub fn add(&mut self, text: &str, tag_string: &str) -> Result<Option<Entry>> {
        let next = add(&self.entries, text, tag_string);
        if next.len() == self.entries.len() {
            return Ok(None);
        }

        let created = next.last().cloned();
        self.replace(next)?;
        if let Some(entry) = &created {
            tracing::info!("Added entry {} with {} tag(s)", entry.id, entry.tags.len());
        }
        Ok(created)
    }

    /// Remove an entry and persist. Returns `None` when `id` is unknown.
    pub fn remove(&mut self, id: EntryId) -> Result<Option<Entry>> {
        let Some(removed) = self.get(id).cloned() else {
            return Ok(None);
        };

        let next = remove(&self.entries, id);
        self.replace(next)?;
        tracing::info!("Removed entry {}", removed.id);
        Ok(Some(removed))
    }

    fn replace(&mut self, entries: Vec<Entry>) -> Result<()> {
        self.entries = entries;
        persist(&self.slot, &self.entries)?;
        Ok(())
    }
}
