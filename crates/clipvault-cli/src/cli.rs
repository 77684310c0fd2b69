use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clipvault_core::CorruptDataPolicy;

#[derive(Parser)]
#[command(name = "clipvault")]
#[command(about = "Keep tagged snippets and copy them back to the clipboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the entry file
    #[arg(long, global = true, value_name = "PATH")]
    pub store_dir: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quick add: clipvault "my snippet"
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a new entry
    #[command(alias = "new")]
    Add {
        /// Entry text (read from piped stdin when omitted)
        text: Vec<String>,
        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,
    },
    /// List entries, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Only entries carrying this tag (repeat to require several)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Case-insensitive text search
        #[arg(short, long, default_value = "")]
        search: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show every tag in use
    Tags {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry ID
        id: String,
    },
    /// Copy an entry's text to the system clipboard
    Copy {
        /// Entry ID
        id: String,
    },
    /// Export entries
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Inspect or write the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Interactive view: search, filter, add, delete and copy
    Shell,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl From<ExportFormat> for clipvault_core::export::ExportFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => Self::Json,
            ExportFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CorruptPolicyArg {
    /// Refuse to start and report the parse error
    Fail,
    /// Move the unreadable file aside and start from the seed entries
    Reseed,
}

impl From<CorruptPolicyArg> for CorruptDataPolicy {
    fn from(policy: CorruptPolicyArg) -> Self {
        match policy {
            CorruptPolicyArg::Fail => Self::Fail,
            CorruptPolicyArg::Reseed => Self::Reseed,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Create or update the config file (uses the global --store-dir when given)
    Init {
        /// How long the copy notice stays visible, in milliseconds
        #[arg(long, value_name = "MS")]
        notice_ms: Option<u64>,
        /// What to do when the entry file cannot be parsed
        #[arg(long, value_enum)]
        on_corrupt: Option<CorruptPolicyArg>,
    },
}
