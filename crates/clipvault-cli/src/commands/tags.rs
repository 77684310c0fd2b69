use clipvault_core::search::tags_of;

use crate::commands::common::Context;
use crate::error::CliError;

pub fn run_tags(as_json: bool, ctx: &Context) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let tags = tags_of(store.entries());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
    } else {
        for tag in tags {
            println!("{tag}");
        }
    }

    Ok(())
}
