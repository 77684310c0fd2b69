//! Data models for clipvault

mod entry;

pub use entry::{parse_tag_list, seed_entries, Entry, EntryId};
