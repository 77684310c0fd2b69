//! Entry export rendering.

use std::fmt::Write as _;

use crate::models::Entry;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render entries as pretty-printed JSON in the persisted record shape.
pub fn render_json_export(entries: &[Entry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

/// Render entries in Markdown with frontmatter blocks.
#[must_use]
pub fn render_markdown_export(entries: &[Entry]) -> String {
    let mut output = String::new();

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let _ = writeln!(output, "---");
        let _ = writeln!(output, "id: {}", entry.id);
        if entry.tags.is_empty() {
            let _ = writeln!(output, "tags: []");
        } else {
            let _ = writeln!(output, "tags:");
            for tag in &entry.tags {
                let _ = writeln!(output, "  - {tag}");
            }
        }
        let _ = writeln!(output, "---");
        let _ = writeln!(output);
        output.push_str(&entry.text);
        output.push('\n');
    }

    output
}

/// Render entries based on selected export format.
pub fn render_entries_export(entries: &[Entry], format: ExportFormat) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(entries),
        ExportFormat::Markdown => Ok(render_markdown_export(entries)),
    }
}

/// Build a deterministic default file name for exports.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("clipvault-export-{timestamp_ms}.{}", format.extension())
}
