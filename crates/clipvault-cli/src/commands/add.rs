use crate::commands::common::{resolve_entry_text, Context};
use crate::error::CliError;

pub fn run_add(text_parts: &[String], tags: &str, ctx: &Context) -> Result<(), CliError> {
    let Some(text) = resolve_entry_text(text_parts)? else {
        tracing::debug!("Ignoring add with empty text");
        return Ok(());
    };

    let mut store = ctx.open_store()?;
    if let Some(entry) = store.add(&text, tags)? {
        println!("{}", entry.id);
    }
    Ok(())
}
