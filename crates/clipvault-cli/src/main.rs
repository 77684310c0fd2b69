//! clipvault CLI - keep tagged snippets and copy them back to the clipboard
//!
//! One-shot commands for scripting plus an interactive shell view.

mod cli;
mod commands;
mod config_file;
mod error;
mod system_clipboard;
#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::Context;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::copy::run_copy;
use crate::commands::delete::run_delete;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::shell::run_shell;
use crate::commands::tags::run_tags;
use crate::error::CliError;
use crate::system_clipboard::SystemClipboard;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clipvault=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell, output }) = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let ctx = Context::resolve(cli.store_dir, cli.config)?;

    match cli.command {
        Some(Commands::Add { text, tags }) => run_add(&text, &tags, &ctx)?,
        Some(Commands::List { tags, search, json }) => run_list(&tags, &search, json, &ctx)?,
        Some(Commands::Tags { json }) => run_tags(json, &ctx)?,
        Some(Commands::Delete { id }) => run_delete(&id, &ctx)?,
        Some(Commands::Copy { id }) => run_copy(&id, &SystemClipboard::new(), &ctx).await?,
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &ctx)?;
        }
        Some(Commands::Config { command }) => run_config(command, &ctx)?,
        Some(Commands::Shell) => run_shell(&ctx).await?,
        Some(Commands::Completions { .. }) => {}
        None => {
            // Quick add mode: clipvault "my snippet"
            if cli.text.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            } else {
                run_add(&cli.text, "", &ctx)?;
            }
        }
    }

    Ok(())
}
