use crate::commands::common::{parse_entry_id, Context};
use crate::error::CliError;

pub fn run_delete(id: &str, ctx: &Context) -> Result<(), CliError> {
    let entry_id = parse_entry_id(id)?;
    let mut store = ctx.open_store()?;

    if let Some(removed) = store.remove(entry_id)? {
        println!("{}", removed.id);
    } else {
        tracing::debug!("No entry with id {entry_id}; nothing to delete");
    }
    Ok(())
}
