//! Persisted slot abstractions.
//!
//! The whole entry list lives in one string value under a fixed key. A slot
//! knows how to read and overwrite that value and nothing else.

mod file;

use std::sync::{Arc, Mutex, PoisonError};

use crate::Result;

pub use file::FileSlot;

/// Key under which the serialized entry list is stored.
pub const STORAGE_KEY: &str = "clipboardEntries";

/// Single-value key/value storage.
pub trait Slot {
    /// Key this slot reads and writes, used in diagnostics.
    fn key(&self) -> &str;

    /// Current value, or `None` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored value.
    fn write(&self, value: &str) -> Result<()>;

    /// Move an unreadable value out of the way so it can be inspected later.
    ///
    /// Slots without a durable backing simply drop the value on the next write.
    fn quarantine(&self) -> Result<()> {
        Ok(())
    }
}

/// In-memory slot, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    key: String,
    value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Arc::default(),
        }
    }

    /// Slot pre-filled with `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let slot = Self::new();
        *slot.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.into());
        slot
    }

    /// Current raw value without going through the trait.
    #[must_use]
    pub fn snapshot(&self) -> Option<String> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Slot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>> {
        Ok(self.snapshot())
    }

    fn write(&self, value: &str) -> Result<()> {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_string());
        Ok(())
    }
}
