use std::path::PathBuf;

use crate::cli::{ConfigCommands, CorruptPolicyArg};
use crate::commands::common::Context;
use crate::config_file::ClipvaultConfig;
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, ctx: &Context) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => run_config_show(ctx),
        ConfigCommands::Init {
            notice_ms,
            on_corrupt,
        } => run_config_init(ctx, ctx.explicit_store_dir.clone(), notice_ms, on_corrupt),
    }
}

pub fn run_config_show(ctx: &Context) -> Result<(), CliError> {
    println!("config: {}", ctx.config_path.display());
    println!("store_dir: {}", ctx.store_dir.display());
    println!("entry_file: {}", ctx.slot().path().display());
    println!(
        "notice_duration_ms: {}",
        ctx.config.notice_duration().as_millis()
    );
    println!(
        "on_corrupt: {}",
        serde_json::to_value(ctx.config.on_corrupt)?
            .as_str()
            .unwrap_or("fail")
    );
    Ok(())
}

pub fn run_config_init(
    ctx: &Context,
    store_dir: Option<PathBuf>,
    notice_ms: Option<u64>,
    on_corrupt: Option<CorruptPolicyArg>,
) -> Result<(), CliError> {
    let config = apply_config_updates(ctx.config.clone(), store_dir, notice_ms, on_corrupt);
    config
        .save_to_path(&ctx.config_path)
        .map_err(CliError::Config)?;

    tracing::info!("Saved config to {}", ctx.config_path.display());
    println!("{}", ctx.config_path.display());
    Ok(())
}

pub fn apply_config_updates(
    mut config: ClipvaultConfig,
    store_dir: Option<PathBuf>,
    notice_ms: Option<u64>,
    on_corrupt: Option<CorruptPolicyArg>,
) -> ClipvaultConfig {
    if let Some(store_dir) = store_dir {
        config.store_dir = Some(store_dir);
    }
    if let Some(notice_ms) = notice_ms {
        config.notice_duration_ms = Some(notice_ms);
    }
    if let Some(on_corrupt) = on_corrupt {
        config.on_corrupt = on_corrupt.into();
    }
    config
}
