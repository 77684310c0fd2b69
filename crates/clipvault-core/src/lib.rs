//! clipvault-core - Core library for clipvault
//!
//! Entries, the persisted slot they live in, the derived tag and filter
//! views, view-state, and the clipboard copy action with its notice.

pub mod clipboard;
pub mod error;
pub mod export;
pub mod models;
pub mod notice;
pub mod search;
pub mod state;
pub mod storage;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use models::{Entry, EntryId};
pub use store::{CorruptDataPolicy, EntryStore};
