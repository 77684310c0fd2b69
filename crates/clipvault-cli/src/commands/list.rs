use clipvault_core::search::filter;

use crate::commands::common::{entry_to_list_item, format_entry_lines, Context, EntryListItem};
use crate::error::CliError;

pub fn run_list(
    tags: &[String],
    search: &str,
    as_json: bool,
    ctx: &Context,
) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let entries = filter(store.entries(), tags, search);

    if as_json {
        let json_items = entries
            .iter()
            .map(|entry| entry_to_list_item(entry))
            .collect::<Vec<EntryListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_entry_lines(&entries) {
            println!("{line}");
        }
    }

    Ok(())
}
