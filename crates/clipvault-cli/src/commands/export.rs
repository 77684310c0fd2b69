use std::path::{Path, PathBuf};

use clipvault_core::export::{render_entries_export, suggested_export_file_name};

use crate::cli::ExportFormat;
use crate::commands::common::{write_output, Context};
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    ctx: &Context,
) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let rendered = render_entries_export(store.entries(), format.into())?;
    let output_path = output_path.map(|path| resolve_export_path(path, format));
    write_output(&rendered, output_path.as_deref())
}

/// A directory target gets a generated file name inside it.
pub fn resolve_export_path(path: &Path, format: ExportFormat) -> PathBuf {
    if path.is_dir() {
        let timestamp_ms = chrono::Utc::now().timestamp_millis();
        path.join(suggested_export_file_name(format.into(), timestamp_ms))
    } else {
        path.to_path_buf()
    }
}
