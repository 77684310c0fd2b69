use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clipvault_core::storage::{FileSlot, STORAGE_KEY};
use clipvault_core::util::preview_line;
use clipvault_core::{Entry, EntryId, EntryStore};
use serde::Serialize;

use crate::config_file::{default_config_path, ClipvaultConfig, STORE_DIR_ENV};
use crate::error::CliError;

/// Resolved paths and settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub config_path: PathBuf,
    pub config: ClipvaultConfig,
    pub store_dir: PathBuf,
    pub explicit_store_dir: Option<PathBuf>,
}

impl Context {
    pub fn resolve(
        store_dir: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        let config_path = config_path.unwrap_or_else(default_config_path);
        let config = ClipvaultConfig::load_from_path(&config_path).map_err(CliError::Config)?;
        let env_store_dir = std::env::var_os(STORE_DIR_ENV).map(PathBuf::from);
        let resolved = config.resolve_store_dir(store_dir.clone(), env_store_dir);

        tracing::debug!("Using store directory {}", resolved.display());
        Ok(Self {
            config_path,
            config,
            store_dir: resolved,
            explicit_store_dir: store_dir,
        })
    }

    pub fn slot(&self) -> FileSlot {
        FileSlot::new(&self.store_dir, STORAGE_KEY)
    }

    pub fn open_store(&self) -> Result<EntryStore<FileSlot>, CliError> {
        Ok(EntryStore::open(self.slot(), self.config.on_corrupt)?)
    }
}

#[derive(Debug, Serialize)]
pub struct EntryListItem {
    pub id: i64,
    pub preview: String,
    pub text: String,
    pub tags: Vec<String>,
}

pub fn entry_to_list_item(entry: &Entry) -> EntryListItem {
    EntryListItem {
        id: entry.id.as_i64(),
        preview: preview_line(&entry.text, 80),
        text: entry.text.clone(),
        tags: entry.tags.clone(),
    }
}

pub fn format_entry_lines(entries: &[&Entry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let id = entry.id.to_string();
            let preview = preview_line(&entry.text, 40);
            let tags = render_tags(entry);

            if tags.is_empty() {
                format!("{id:<13}  {preview}")
            } else {
                format!("{id:<13}  {preview:<40}  {tags}")
            }
        })
        .collect()
}

pub fn render_tags(entry: &Entry) -> String {
    entry
        .tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn parse_entry_id(id: &str) -> Result<EntryId, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyEntryId);
    }
    trimmed
        .parse::<EntryId>()
        .map_err(|_| CliError::InvalidEntryId(trimmed.to_string()))
}

/// `content` unchanged, or `None` when it is blank.
pub fn non_blank_content(content: &str) -> Option<String> {
    if content.trim().is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

/// Text from command-line words, falling back to piped stdin.
pub fn resolve_entry_text(text_parts: &[String]) -> Result<Option<String>, CliError> {
    if let Some(text) = non_blank_content(&text_parts.join(" ")) {
        return Ok(Some(text));
    }
    read_piped_stdin()
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(non_blank_content(strip_line_ending(&buffer)))
}

/// Drop the single line terminator a pipe appends; everything else is kept.
pub fn strip_line_ending(content: &str) -> &str {
    content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(content)
}

pub fn write_output(rendered: &str, output_path: Option<&Path>) -> Result<(), CliError> {
    if let Some(path) = output_path {
        std::fs::write(path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }
    Ok(())
}
