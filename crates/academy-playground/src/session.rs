//! One mounted playground widget.
//!
//! A session owns a [`Playground`] and at most one pending compile task. The
//! task is aborted when the template changes, the buffer is reset, or the
//! session is closed; the generation check in [`Playground::complete_compile`]
//! covers the window where a task finishes before it can be aborted.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use crate::compiler::MockCompiler;
use crate::error::PlaygroundError;
use crate::state::{Download, Playground, PlaygroundSnapshot};

/// Session state returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    #[serde(flatten)]
    pub playground: PlaygroundSnapshot,
}

/// A playground with its own compile task.
pub struct PlaygroundSession {
    id: Uuid,
    state: Arc<Mutex<Playground>>,
    compiler: MockCompiler,
    pending: Mutex<Option<JoinHandle<()>>>,
    last_access: Mutex<Instant>,
}

impl PlaygroundSession {
    /// Create a session with a fresh id.
    #[must_use]
    pub fn new(playground: Playground, compiler: MockCompiler) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: Arc::new(Mutex::new(playground)),
            compiler,
            pending: Mutex::new(None),
            last_access: Mutex::new(Instant::now()),
        }
    }

    /// Session id.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            playground: lock(&self.state).snapshot(),
        }
    }

    /// Load a template. Cancels a pending compile.
    pub fn select_template(&self, id: &str) -> Result<SessionSnapshot, PlaygroundError> {
        lock(&self.state).select_template(id)?;
        self.cancel_pending();
        Ok(self.snapshot())
    }

    /// Replace the editor buffer.
    pub fn edit_source(&self, source: impl Into<String>) -> SessionSnapshot {
        lock(&self.state).edit_source(source);
        self.snapshot()
    }

    /// Start a compile in the background.
    ///
    /// Returns false without side effects if a compile is already running.
    /// Must be called from within a tokio runtime.
    pub fn compile(&self) -> bool {
        let Some(ticket) = lock(&self.state).begin_compile() else {
            tracing::debug!(session = %self.id, "Compile already in flight");
            return false;
        };

        let state = Arc::clone(&self.state);
        let compiler = self.compiler.clone();
        let id = self.id;
        let handle = tokio::spawn(async move {
            let outcome = compiler.compile(ticket.source()).await;
            if lock(&state).complete_compile(&ticket, outcome) {
                tracing::debug!(session = %id, ?outcome, "Compile finished");
            } else {
                tracing::debug!(session = %id, "Discarded stale compile result");
            }
        });

        if let Some(previous) = lock(&self.pending).replace(handle) {
            previous.abort();
        }
        true
    }

    /// Restore the template source and clear the result. Cancels a pending compile.
    pub fn reset(&self) -> SessionSnapshot {
        lock(&self.state).reset();
        self.cancel_pending();
        self.snapshot()
    }

    /// Current buffer as a file.
    #[must_use]
    pub fn download(&self) -> Download {
        lock(&self.state).download()
    }

    /// Abort any pending compile. The session stays usable.
    pub fn close(&self) {
        self.cancel_pending();
    }

    /// Record activity for idle eviction.
    pub fn touch(&self) {
        *lock(&self.last_access) = Instant::now();
    }

    /// Time of the last recorded activity.
    #[must_use]
    pub fn last_access(&self) -> Instant {
        *lock(&self.last_access)
    }

    fn cancel_pending(&self) {
        if let Some(handle) = lock(&self.pending).take() {
            handle.abort();
        }
    }
}

impl Drop for PlaygroundSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl std::fmt::Debug for PlaygroundSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaygroundSession")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Lock a mutex, recovering the data if a holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
