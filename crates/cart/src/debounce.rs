//! Debounced save scheduling.
//!
//! Every cart mutation wants the new state persisted, but rapid UI
//! interaction (repeated quantity clicks) would otherwise hammer the slot
//! with intermediate snapshots nobody needs. [`SaveDebouncer`] owns the
//! timer: each `schedule` call aborts any pending write and arms a fresh
//! one, so only the state after the last mutation inside the quiet window
//! reaches storage. The scheduler is internal to the store; consumers never
//! see it.
//!
//! `JoinHandle::abort` only cancels a task at an await point. A timer task
//! that has already finished its sleep and entered the synchronous save is
//! past its last await, so abort alone cannot stop it racing a concurrent
//! `flush`. Two pieces close that window: every save goes through one
//! writer lock, and each scheduled save carries a generation stamp that is
//! re-checked under the lock - a superseded timer write is skipped instead
//! of landing after (and over) newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use golden_fig_core::CartLine;
use tokio::task::JoinHandle;

use crate::storage::{self, CartStorage};

/// Default quiet window between the last mutation and the persistence write.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Timer-owning component that coalesces save requests.
///
/// Requires a tokio runtime; `schedule` spawns the timer task on the current
/// runtime. A pending write is cancelled when the debouncer is dropped, so a
/// torn-down store cannot race a write against its own teardown.
pub struct SaveDebouncer {
    shared: Arc<Shared>,
    window: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// State shared with in-flight timer tasks.
struct Shared {
    storage: Arc<dyn CartStorage>,
    /// All slot writes happen under this lock, one at a time.
    writer: Mutex<()>,
    /// Bumped on every schedule/cancel; a timer write whose stamp no longer
    /// matches has been superseded and must not touch the slot.
    generation: AtomicU64,
}

impl Shared {
    /// Write `lines` unless `generation` has been superseded. The check and
    /// the write happen under the writer lock, so a stale timer can never
    /// land after a newer save.
    fn save_if_current(&self, generation: u64, lines: &[CartLine]) {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::SeqCst) != generation {
            return;
        }
        storage::save(self.storage.as_ref(), lines);
    }
}

impl SaveDebouncer {
    /// Create a debouncer writing to `storage` after `window` of quiet.
    #[must_use]
    pub fn new(storage: Arc<dyn CartStorage>, window: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                storage,
                writer: Mutex::new(()),
                generation: AtomicU64::new(0),
            }),
            window,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `lines` to be written after the quiet window.
    ///
    /// Cancels and supersedes any not-yet-fired write.
    pub fn schedule(&self, lines: Vec<CartLine>) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let shared = Arc::clone(&self.shared);
        let window = self.window;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            shared.save_if_current(generation, &lines);
        }));
    }

    /// Cancel any pending write without performing it.
    ///
    /// Also invalidates a timer that is already past its sleep, so nothing
    /// scheduled before the cancel can reach the slot afterwards.
    pub fn cancel(&self) {
        self.shared.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }

    /// Cancel any pending write and persist `lines` immediately.
    ///
    /// For consumers that are about to exit and cannot wait out the window.
    /// Takes the writer lock, so an in-flight timer write finishes first and
    /// the flushed state is always what the slot ends up holding.
    pub fn flush(&self, lines: &[CartLine]) {
        self.cancel();
        let _guard = self
            .shared
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        storage::save(self.shared.storage.as_ref(), lines);
    }
}

impl Drop for SaveDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
