use clipvault_core::clipboard::{copy_text, Clipboard, CopyOutcome};
use clipvault_core::notice::{CopyNotice, COPIED_MESSAGE};

use crate::commands::common::{parse_entry_id, Context};
use crate::error::CliError;

pub async fn run_copy<C: Clipboard>(id: &str, clipboard: &C, ctx: &Context) -> Result<(), CliError> {
    let entry_id = parse_entry_id(id)?;
    let store = ctx.open_store()?;
    let entry = store
        .get(entry_id)
        .ok_or_else(|| CliError::EntryNotFound(entry_id.to_string()))?;

    let notice = CopyNotice::new(ctx.config.notice_duration());
    match copy_text(clipboard, &notice, &entry.text).await {
        CopyOutcome::Copied => {
            eprintln!("{COPIED_MESSAGE}");
            // Hold the clipboard handle while the notice is up so clipboard
            // managers can pick the text up before the process exits.
            while notice.is_visible() {
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            }
            Ok(())
        }
        CopyOutcome::Failed(reason) => Err(CliError::CopyFailed(reason)),
    }
}
