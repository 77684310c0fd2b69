//! File-backed slot: one `<key>.json` file inside a storage directory.

use std::path::{Path, PathBuf};

use super::Slot;
use crate::{Error, Result};

/// Slot persisted as a JSON file on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSlot {
    key: String,
    path: PathBuf,
}

impl FileSlot {
    /// Slot for `key` under `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.as_ref().join(format!("{key}.json"));
        Self { key, path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Slot for FileSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|source| Error::InvalidEncoding {
                key: self.key.clone(),
                source,
            })
    }

    fn write(&self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Readers never observe a half-written file.
        let temp_path = self.temp_path();
        std::fs::write(&temp_path, value)?;
        std::fs::rename(&temp_path, &self.path)?;
        tracing::debug!("Wrote {} bytes to {}", value.len(), self.path.display());
        Ok(())
    }

    fn quarantine(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let timestamp = chrono::Utc::now().timestamp_millis();
        let backup_name = format!("{}.json.corrupt-{timestamp}", self.key);
        let backup_path = self.path.with_file_name(backup_name);

        std::fs::rename(&self.path, &backup_path)?;
        tracing::warn!(
            "Moved unreadable entry file from {} to {}",
            self.path.display(),
            backup_path.display()
        );
        Ok(())
    }
}
