//! Interactive view: one intent per line, full re-render after each.

use std::fmt::Write as _;
use std::io::Write as _;

use clipvault_core::clipboard::{copy_text, Clipboard};
use clipvault_core::notice::{CopyNotice, COPIED_MESSAGE};
use clipvault_core::state::ViewState;
use clipvault_core::storage::Slot;
use clipvault_core::EntryStore;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::common::{format_entry_lines, parse_entry_id, Context};
use crate::error::CliError;
use crate::system_clipboard::SystemClipboard;

pub const SHELL_HELP: &str = "\
search <text>   filter by text (no argument clears)
tag <name>      toggle a tag filter
clear           drop all tag filters
text <text>     set the draft text
tags <a,b>      set the draft tags
add             store the draft
rm <id>         delete an entry
copy <id>       copy an entry to the clipboard
help            show this help
quit            leave";

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Refresh,
    Search(String),
    ToggleTag(String),
    ClearTags,
    DraftText(String),
    DraftTags(String),
    Add,
    Remove(String),
    Copy(String),
    Help,
    Quit,
}

pub fn parse_intent(line: &str) -> Result<Intent, String> {
    let line = line.trim_start();
    // `rest` starts right after the single separator; draft text keeps it verbatim.
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let argument = rest.trim();

    let require = |intent: fn(String) -> Intent| {
        if argument.is_empty() {
            Err(format!("`{command}` needs an argument"))
        } else {
            Ok(intent(argument.to_string()))
        }
    };

    match command {
        "" => Ok(Intent::Refresh),
        "search" | "/" => Ok(Intent::Search(argument.to_string())),
        "tag" | "t" => require(Intent::ToggleTag),
        "clear" => Ok(Intent::ClearTags),
        "text" => Ok(Intent::DraftText(rest.to_string())),
        "tags" => Ok(Intent::DraftTags(argument.to_string())),
        "add" => Ok(Intent::Add),
        "rm" | "delete" => require(Intent::Remove),
        "copy" | "c" => require(Intent::Copy),
        "help" | "?" => Ok(Intent::Help),
        "quit" | "exit" | "q" => Ok(Intent::Quit),
        other => Err(format!("Unknown command `{other}` (try `help`)")),
    }
}

/// What the loop should do after an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(Option<String>),
    Quit,
}

pub struct Session<S, C> {
    store: EntryStore<S>,
    view: ViewState,
    clipboard: C,
}

impl<S: Slot, C: Clipboard> Session<S, C> {
    pub const fn new(store: EntryStore<S>, view: ViewState, clipboard: C) -> Self {
        Self {
            store,
            view,
            clipboard,
        }
    }

    pub const fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    pub async fn dispatch(&mut self, intent: Intent) -> Result<Flow, CliError> {
        let message = match intent {
            Intent::Refresh => None,
            Intent::Search(query) => {
                self.view.search_query = query;
                None
            }
            Intent::ToggleTag(tag) => {
                self.view.toggle_tag(&tag);
                None
            }
            Intent::ClearTags => {
                self.view.selected_tags.clear();
                None
            }
            Intent::DraftText(text) => {
                self.view.draft_text = text;
                None
            }
            Intent::DraftTags(tags) => {
                self.view.draft_tags = tags;
                None
            }
            Intent::Add => self
                .view
                .submit_draft(&mut self.store)?
                .map(|entry| format!("Added {}", entry.id)),
            Intent::Remove(id) => match parse_entry_id(&id) {
                Ok(entry_id) => self
                    .store
                    .remove(entry_id)?
                    .map(|entry| format!("Deleted {}", entry.id)),
                Err(error) => Some(error.to_string()),
            },
            Intent::Copy(id) => self.copy(&id).await,
            Intent::Help => Some(SHELL_HELP.to_string()),
            Intent::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(message))
    }

    async fn copy(&self, id: &str) -> Option<String> {
        let entry_id = match parse_entry_id(id) {
            Ok(entry_id) => entry_id,
            Err(error) => return Some(error.to_string()),
        };
        let Some(entry) = self.store.get(entry_id) else {
            return Some(CliError::EntryNotFound(entry_id.to_string()).to_string());
        };
        // Failures are logged by copy_text and otherwise stay silent.
        copy_text(&self.clipboard, &self.view.notice, &entry.text).await;
        None
    }

    pub fn render(&self) -> String {
        let entries = self.store.entries();
        let mut output = String::new();

        let vocabulary = self
            .view
            .tag_vocabulary(entries)
            .into_iter()
            .map(|tag| {
                if self.view.selected_tags.contains(&tag) {
                    format!("[{tag}]")
                } else {
                    tag
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(output, "Tags: {vocabulary}");

        if !self.view.search_query.is_empty() {
            let _ = writeln!(output, "Search: \"{}\"", self.view.search_query);
        }
        if !self.view.draft_text.is_empty() || !self.view.draft_tags.is_empty() {
            let _ = writeln!(
                output,
                "Draft: \"{}\" tags: \"{}\"",
                self.view.draft_text, self.view.draft_tags
            );
        }

        let visible = self.view.visible_entries(entries);
        if visible.is_empty() {
            let _ = writeln!(output, "(no entries)");
        }
        for line in format_entry_lines(&visible) {
            let _ = writeln!(output, "  {line}");
        }

        if self.view.notice.is_visible() {
            let _ = writeln!(output, "{COPIED_MESSAGE}");
        }
        output
    }
}

pub async fn run_shell(ctx: &Context) -> Result<(), CliError> {
    let store = ctx.open_store()?;
    let view = ViewState::new(CopyNotice::new(ctx.config.notice_duration()));
    let mut session = Session::new(store, view, SystemClipboard::new());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print!("{}", session.render());
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        match parse_intent(&line) {
            Ok(intent) => match session.dispatch(intent).await? {
                Flow::Quit => break,
                Flow::Continue(message) => {
                    if let Some(message) = message {
                        println!("{message}");
                    }
                }
            },
            Err(message) => println!("{message}"),
        }
        print!("{}", session.render());
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<(), CliError> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
