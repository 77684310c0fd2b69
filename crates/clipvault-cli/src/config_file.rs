//! Persistent CLI configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clipvault_core::notice::DEFAULT_NOTICE_DURATION;
use clipvault_core::CorruptDataPolicy;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "clipvault";
pub const STORE_DIR_ENV: &str = "CLIPVAULT_STORE_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipvaultConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
    #[serde(default)]
    pub notice_duration_ms: Option<u64>,
    #[serde(default)]
    pub on_corrupt: CorruptDataPolicy,
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

pub fn default_store_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

fn normalize_path_option(value: Option<PathBuf>) -> Option<PathBuf> {
    let value = value?;
    clipvault_core::util::normalize_text_option(Some(value.to_string_lossy().into_owned()))
        .map(PathBuf::from)
}

impl ClipvaultConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self {
                version: default_config_version(),
                ..Self::default()
            });
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    /// Store directory: explicit flag, then environment, then config file,
    /// then the platform data directory.
    pub fn resolve_store_dir(&self, explicit: Option<PathBuf>, env_value: Option<PathBuf>) -> PathBuf {
        normalize_path_option(explicit)
            .or_else(|| normalize_path_option(env_value))
            .or_else(|| self.store_dir.clone())
            .unwrap_or_else(default_store_dir)
    }

    pub fn notice_duration(&self) -> Duration {
        self.notice_duration_ms
            .map_or(DEFAULT_NOTICE_DURATION, Duration::from_millis)
    }

    fn normalize(&mut self) {
        self.store_dir = normalize_path_option(self.store_dir.take());
        self.notice_duration_ms = self.notice_duration_ms.filter(|ms| *ms > 0);
    }
}
