use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clipvault_core::clipboard::Clipboard;
use clipvault_core::models::seed_entries;
use clipvault_core::notice::{CopyNotice, COPIED_MESSAGE};
use clipvault_core::state::ViewState;
use clipvault_core::storage::{MemorySlot, Slot};
use clipvault_core::{CorruptDataPolicy, Entry, EntryId, EntryStore};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tokio::time::sleep;

use crate::cli::{CompletionShell, CorruptPolicyArg, ExportFormat};
use crate::commands::add::run_add;
use crate::commands::common::{
    format_entry_lines, non_blank_content, parse_entry_id, render_tags, strip_line_ending,
    Context,
};
use crate::commands::completions::{render_completions, run_completions};
use crate::commands::config::apply_config_updates;
use crate::commands::copy::run_copy;
use crate::commands::delete::run_delete;
use crate::commands::export::{resolve_export_path, run_export};
use crate::commands::shell::{parse_intent, Flow, Intent, Session};
use crate::config_file::ClipvaultConfig;
use crate::error::CliError;

#[derive(Clone, Default)]
struct FakeClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    reject: bool,
}

impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> clipvault_core::Result<()> {
        if self.reject {
            return Err(clipvault_core::Error::Clipboard("no display".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn test_context(tmp: &TempDir) -> Context {
    Context {
        config_path: tmp.path().join("config.json"),
        config: ClipvaultConfig::default(),
        store_dir: tmp.path().join("store"),
        explicit_store_dir: None,
    }
}

fn stored_entries(ctx: &Context) -> Vec<Entry> {
    let raw = ctx.slot().read().unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn memory_session(clipboard: FakeClipboard) -> Session<MemorySlot, FakeClipboard> {
    let store = EntryStore::open(MemorySlot::new(), CorruptDataPolicy::Fail).unwrap();
    Session::new(store, ViewState::new(CopyNotice::default()), clipboard)
}

#[test]
fn non_blank_content_keeps_text_and_rejects_blank() {
    assert_eq!(non_blank_content("  hello  "), Some("  hello  ".to_string()));
    assert_eq!(non_blank_content(" \n\t "), None);
}

#[test]
fn strip_line_ending_drops_one_terminator() {
    assert_eq!(strip_line_ending("piped\n"), "piped");
    assert_eq!(strip_line_ending("piped\r\n"), "piped");
    assert_eq!(strip_line_ending("  two\n\n"), "  two\n");
    assert_eq!(strip_line_ending("none "), "none ");
}

#[test]
fn parse_entry_id_rejects_empty_and_garbage() {
    assert!(matches!(parse_entry_id("  "), Err(CliError::EmptyEntryId)));
    assert!(matches!(
        parse_entry_id("abc"),
        Err(CliError::InvalidEntryId(ref id)) if id == "abc"
    ));
    assert_eq!(parse_entry_id(" 2 ").unwrap(), EntryId::from_raw(2));
}

#[test]
fn format_entry_lines_include_id_text_and_tags() {
    let entries = seed_entries();
    let refs = entries.iter().collect::<Vec<_>>();

    let lines = format_entry_lines(&refs);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('1'));
    assert!(lines[0].contains("Example text 1"));
    assert!(lines[0].ends_with("#personal #notes"));
}

#[test]
fn render_tags_keeps_entry_order() {
    let entry = Entry::new(
        EntryId::from_raw(1),
        "x",
        vec!["zeta".to_string(), "alpha".to_string()],
    );
    assert_eq!(render_tags(&entry), "#zeta #alpha");
}

#[test]
fn parse_intent_understands_commands() {
    assert_eq!(parse_intent("").unwrap(), Intent::Refresh);
    assert_eq!(
        parse_intent("search  Meeting notes ").unwrap(),
        Intent::Search("Meeting notes".to_string())
    );
    assert_eq!(parse_intent("search").unwrap(), Intent::Search(String::new()));
    assert_eq!(
        parse_intent("tag work").unwrap(),
        Intent::ToggleTag("work".to_string())
    );
    assert_eq!(
        parse_intent("tags a, b ,").unwrap(),
        Intent::DraftTags("a, b ,".to_string())
    );
    assert_eq!(
        parse_intent("text   indented  ").unwrap(),
        Intent::DraftText("  indented  ".to_string())
    );
    assert_eq!(parse_intent("copy 3").unwrap(), Intent::Copy("3".to_string()));
    assert_eq!(parse_intent("q").unwrap(), Intent::Quit);
}

#[test]
fn parse_intent_rejects_unknown_or_missing_arguments() {
    assert!(parse_intent("tag").is_err());
    assert!(parse_intent("rm").is_err());
    assert!(parse_intent("frobnicate").is_err());
}

#[tokio::test(start_paused = true)]
async fn shell_session_adds_filters_and_deletes() {
    let mut session = memory_session(FakeClipboard::default());

    session
        .dispatch(Intent::DraftText("hello world".to_string()))
        .await
        .unwrap();
    session
        .dispatch(Intent::DraftTags("a, b ,".to_string()))
        .await
        .unwrap();
    let flow = session.dispatch(Intent::Add).await.unwrap();
    assert!(matches!(flow, Flow::Continue(Some(ref message)) if message.starts_with("Added")));

    let created = session.store().entries().last().unwrap().clone();
    assert_eq!(created.tags, vec!["a", "b"]);
    assert!(session.view().draft_text.is_empty());

    session
        .dispatch(Intent::ToggleTag("a".to_string()))
        .await
        .unwrap();
    let rendered = session.render();
    assert!(rendered.contains("[a]"));
    assert!(rendered.contains("hello world"));
    assert!(!rendered.contains("Example text 1"));

    session
        .dispatch(Intent::Remove(created.id.to_string()))
        .await
        .unwrap();
    assert!(session.render().contains("(no entries)"));

    session.dispatch(Intent::ClearTags).await.unwrap();
    assert_eq!(session.store().entries(), seed_entries().as_slice());
}

#[tokio::test(start_paused = true)]
async fn shell_copy_shows_notice_until_it_expires() {
    let clipboard = FakeClipboard::default();
    let mut session = memory_session(clipboard.clone());

    session.dispatch(Intent::Copy("2".to_string())).await.unwrap();

    assert_eq!(
        clipboard.writes.lock().unwrap().as_slice(),
        ["Sample code snippet"]
    );
    assert!(session.render().contains(COPIED_MESSAGE));

    sleep(Duration::from_millis(2_100)).await;
    tokio::task::yield_now().await;
    assert!(!session.render().contains(COPIED_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn shell_copy_failure_stays_silent() {
    let mut session = memory_session(FakeClipboard {
        reject: true,
        ..FakeClipboard::default()
    });

    let flow = session.dispatch(Intent::Copy("1".to_string())).await.unwrap();

    assert_eq!(flow, Flow::Continue(None));
    assert!(!session.render().contains(COPIED_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn shell_reports_unknown_entry() {
    let mut session = memory_session(FakeClipboard::default());
    let flow = session.dispatch(Intent::Copy("999".to_string())).await.unwrap();
    assert_eq!(
        flow,
        Flow::Continue(Some("Entry not found for id: 999".to_string()))
    );
}

#[test]
fn add_and_delete_commands_update_entry_file() {
    let tmp = TempDir::new().unwrap();
    let ctx = test_context(&tmp);

    run_add(&["hello".to_string(), "world".to_string()], "a, b ,", &ctx).unwrap();
    let entries = stored_entries(&ctx);
    assert_eq!(entries.len(), 4);
    let created = entries.last().unwrap();
    assert_eq!(created.text, "hello world");
    assert_eq!(created.tags, vec!["a", "b"]);

    run_delete(&created.id.to_string(), &ctx).unwrap();
    assert_eq!(stored_entries(&ctx), seed_entries());

    run_delete("12345", &ctx).unwrap();
    assert_eq!(stored_entries(&ctx), seed_entries());
}

#[test]
fn add_command_stores_text_as_given() {
    let tmp = TempDir::new().unwrap();
    let ctx = test_context(&tmp);

    run_add(&["  padded  ".to_string()], "", &ctx).unwrap();

    let created = stored_entries(&ctx).pop().unwrap();
    assert_eq!(created.text, "  padded  ");
    assert!(created.tags.is_empty());
}

#[tokio::test(start_paused = true)]
async fn shell_draft_text_is_stored_verbatim() {
    let mut session = memory_session(FakeClipboard::default());

    let intent = parse_intent("text  two leading, one trailing ").unwrap();
    session.dispatch(intent).await.unwrap();
    session.dispatch(Intent::Add).await.unwrap();

    let created = session.store().entries().last().unwrap();
    assert_eq!(created.text, " two leading, one trailing ");
}

#[test]
fn undecodable_entry_file_follows_corrupt_policy() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = test_context(&tmp);
    std::fs::create_dir_all(&ctx.store_dir).unwrap();
    std::fs::write(ctx.slot().path(), [0xff, 0xfe, 0x00]).unwrap();

    let error = ctx.open_store().unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(clipvault_core::Error::InvalidEncoding { .. })
    ));

    ctx.config.on_corrupt = CorruptDataPolicy::Reseed;
    let store = ctx.open_store().unwrap();
    assert_eq!(store.entries(), seed_entries().as_slice());
    assert_eq!(stored_entries(&ctx), seed_entries());
}

#[test]
fn corrupt_entry_file_fails_unless_reseed_is_configured() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = test_context(&tmp);
    ctx.slot().write("{broken").unwrap();

    let error = ctx.open_store().unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(clipvault_core::Error::CorruptData { .. })
    ));

    ctx.config.on_corrupt = CorruptDataPolicy::Reseed;
    let store = ctx.open_store().unwrap();
    assert_eq!(store.entries(), seed_entries().as_slice());
}

#[test]
fn export_writes_requested_format() {
    let tmp = TempDir::new().unwrap();
    let ctx = test_context(&tmp);
    let json_path = tmp.path().join("out.json");
    let markdown_path = tmp.path().join("out.md");

    run_export(ExportFormat::Json, Some(&json_path), &ctx).unwrap();
    run_export(ExportFormat::Markdown, Some(&markdown_path), &ctx).unwrap();

    let exported: Vec<Entry> =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(exported, seed_entries());
    let markdown = std::fs::read_to_string(&markdown_path).unwrap();
    assert!(markdown.contains("id: 3\ntags:\n  - work\n  - meetings"));
}

#[tokio::test(start_paused = true)]
async fn copy_command_places_text_on_clipboard() {
    let tmp = TempDir::new().unwrap();
    let ctx = test_context(&tmp);
    let clipboard = FakeClipboard::default();

    run_copy("3", &clipboard, &ctx).await.unwrap();

    assert_eq!(
        clipboard.writes.lock().unwrap().as_slice(),
        ["Important meeting notes"]
    );
}

#[tokio::test(start_paused = true)]
async fn copy_command_surfaces_failures() {
    let tmp = TempDir::new().unwrap();
    let ctx = test_context(&tmp);
    let clipboard = FakeClipboard {
        reject: true,
        ..FakeClipboard::default()
    };

    let error = run_copy("3", &clipboard, &ctx).await.unwrap_err();
    assert!(matches!(error, CliError::CopyFailed(_)));

    let error = run_copy("404", &FakeClipboard::default(), &ctx)
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::EntryNotFound(_)));
}

#[test]
fn completions_write_to_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("clipvault.bash");

    run_completions(CompletionShell::Bash, Some(Path::new(&path))).unwrap();

    let script = std::fs::read_to_string(&path).unwrap();
    assert!(script.contains("clipvault"));
}

#[test]
fn apply_config_updates_only_touches_given_fields() {
    let base = ClipvaultConfig {
        version: 1,
        store_dir: Some("/keep".into()),
        notice_duration_ms: Some(1_000),
        on_corrupt: CorruptDataPolicy::Fail,
    };

    let updated = apply_config_updates(base.clone(), None, None, Some(CorruptPolicyArg::Reseed));
    assert_eq!(updated.store_dir, base.store_dir);
    assert_eq!(updated.notice_duration_ms, Some(1_000));
    assert_eq!(updated.on_corrupt, CorruptDataPolicy::Reseed);

    let updated = apply_config_updates(base, Some("/new".into()), Some(500), None);
    assert_eq!(updated.store_dir, Some("/new".into()));
    assert_eq!(updated.notice_duration(), Duration::from_millis(500));
}

#[test]
fn export_into_directory_uses_generated_name() {
    let tmp = TempDir::new().unwrap();

    let resolved = resolve_export_path(tmp.path(), ExportFormat::Markdown);
    let name = resolved.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("clipvault-export-"));
    assert!(name.ends_with(".md"));

    let explicit = tmp.path().join("mine.json");
    assert_eq!(resolve_export_path(&explicit, ExportFormat::Json), explicit);
}

#[test]
fn completions_cover_every_shell() {
    for shell in [
        CompletionShell::Bash,
        CompletionShell::Zsh,
        CompletionShell::Fish,
        CompletionShell::PowerShell,
    ] {
        let script = String::from_utf8(render_completions(shell)).unwrap();
        assert!(script.contains("clipvault"), "{shell:?}");
    }
}
