//! Transient "copied" notification with a latest-wins auto-clear timer.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long the notice stays up after a successful copy.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Text shown while the notice is visible.
pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// Visibility flag for the copy notification.
///
/// Each [`CopyNotice::show`] aborts the pending clear timer and starts a new
/// one, so only the most recent copy decides when the notice disappears.
/// Clones share state.
#[derive(Clone, Debug)]
pub struct CopyNotice {
    inner: Arc<NoticeInner>,
}

#[derive(Debug)]
struct NoticeInner {
    duration: Duration,
    visible: AtomicBool,
    generation: AtomicU64,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl Default for CopyNotice {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl CopyNotice {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            inner: Arc::new(NoticeInner {
                duration,
                visible: AtomicBool::new(false),
                generation: AtomicU64::new(0),
                timer: Mutex::new(None),
            }),
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.inner.duration
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.visible.load(Ordering::SeqCst)
    }

    /// Show the notice and (re)start the clear timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.visible.store(true, Ordering::SeqCst);

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.duration).await;
            // A newer show() may have raced past the abort below.
            if inner.generation.load(Ordering::SeqCst) == generation {
                inner.visible.store(false, Ordering::SeqCst);
                tracing::trace!("Copy notice cleared");
            }
        });

        let previous = self
            .inner
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }
}
