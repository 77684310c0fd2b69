//! Clipboard seam and the copy action.

use std::future::Future;

use crate::notice::CopyNotice;
use crate::Result;

/// Host clipboard that can be asked to hold a piece of text.
pub trait Clipboard {
    /// Place `text` on the clipboard. May fail (permissions, no display).
    fn write_text(&self, text: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Result of a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

impl CopyOutcome {
    #[must_use]
    pub const fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Copy `text` and show the notice on success.
///
/// Failures are logged and leave the notice untouched; no retry.
pub async fn copy_text<C: Clipboard>(clipboard: &C, notice: &CopyNotice, text: &str) -> CopyOutcome {
    match clipboard.write_text(text).await {
        Ok(()) => {
            tracing::debug!("Copied {} chars to clipboard", text.chars().count());
            notice.show();
            CopyOutcome::Copied
        }
        Err(error) => {
            tracing::error!("Failed to copy text: {error}");
            CopyOutcome::Failed(error.to_string())
        }
    }
}
