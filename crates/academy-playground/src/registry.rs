//! Live playground sessions keyed by id.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use uuid::Uuid;

use crate::compiler::MockCompiler;
use crate::error::PlaygroundError;
use crate::session::{PlaygroundSession, lock};
use crate::state::Playground;

/// Session store with idle expiry and a size cap.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, Arc<PlaygroundSession>>>,
    compiler: MockCompiler,
    ttl: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    /// Create an empty registry. `max_sessions` is raised to at least one.
    #[must_use]
    pub fn new(compiler: MockCompiler, ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            compiler,
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Create a session with the given template, or the default one.
    ///
    /// Idle sessions are evicted first; if the registry is still full, the
    /// least recently used session makes room.
    pub fn create(&self, template: Option<&str>) -> Result<Arc<PlaygroundSession>, PlaygroundError> {
        let playground = match template {
            Some(id) => Playground::with_template(id)?,
            None => Playground::new(),
        };
        let session = Arc::new(PlaygroundSession::new(playground, self.compiler.clone()));

        let mut sessions = lock(&self.sessions);
        self.evict_expired_locked(&mut sessions);
        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .values()
                .min_by_key(|s| s.last_access())
                .map(|s| s.id())
            else {
                break;
            };
            if let Some(evicted) = sessions.remove(&oldest) {
                evicted.close();
                tracing::info!(session = %oldest, "Evicted playground session (limit reached)");
            }
        }
        sessions.insert(session.id(), Arc::clone(&session));
        tracing::debug!(session = %session.id(), "Created playground session");

        Ok(session)
    }

    /// Look up a session and mark it active.
    pub fn get(&self, id: Uuid) -> Result<Arc<PlaygroundSession>, PlaygroundError> {
        let session = lock(&self.sessions)
            .get(&id)
            .cloned()
            .ok_or(PlaygroundError::SessionNotFound(id))?;
        session.touch();
        Ok(session)
    }

    /// Remove a session and cancel its pending compile.
    pub fn remove(&self, id: Uuid) -> Result<(), PlaygroundError> {
        let session = lock(&self.sessions)
            .remove(&id)
            .ok_or(PlaygroundError::SessionNotFound(id))?;
        session.close();
        tracing::debug!(session = %id, "Closed playground session");
        Ok(())
    }

    /// Drop sessions idle for longer than the TTL. Returns how many were removed.
    pub fn evict_expired(&self) -> usize {
        self.evict_expired_locked(&mut lock(&self.sessions))
    }

    fn evict_expired_locked(&self, sessions: &mut HashMap<Uuid, Arc<PlaygroundSession>>) -> usize {
        let before = sessions.len();
        sessions.retain(|id, session| {
            let keep = session.last_access().elapsed() <= self.ttl;
            if !keep {
                session.close();
                tracing::info!(session = %id, "Evicted idle playground session");
            }
            keep
        });
        before - sessions.len()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    /// Whether no sessions are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::compiler::FixedRoll;
    use crate::state::CompileResult;

    fn registry(ttl: Duration, max: usize) -> SessionRegistry {
        SessionRegistry::new(
            MockCompiler::new(Duration::from_millis(1500), Arc::new(FixedRoll(false))),
            ttl,
            max,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_get_remove() {
        let registry = registry(Duration::from_secs(60), 10);
        let session = registry.create(Some("dao")).unwrap();
        assert_eq!(registry.len(), 1);

        let found = registry.get(session.id()).unwrap();
        assert_eq!(found.snapshot().playground.template, "dao");

        registry.remove(session.id()).unwrap();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.get(session.id()),
            Err(PlaygroundError::SessionNotFound(id)) if id == session.id()
        ));
        assert!(registry.remove(session.id()).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_with_unknown_template() {
        let registry = registry(Duration::from_secs(60), 10);
        assert!(matches!(
            registry.create(Some("nope")),
            Err(PlaygroundError::UnknownTemplate(_))
        ));
        assert!(registry.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_expire() {
        let registry = registry(Duration::from_secs(60), 10);
        let idle = registry.create(None).unwrap();
        let active = registry.create(None).unwrap();

        tokio::time::advance(Duration::from_secs(45)).await;
        registry.get(active.id()).unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;

        assert_eq!(registry.evict_expired(), 1);
        assert!(registry.get(idle.id()).is_err());
        assert!(registry.get(active.id()).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_limit_evicts_least_recently_used() {
        let registry = registry(Duration::from_secs(3600), 2);
        let first = registry.create(None).unwrap();
        tokio::time::advance(Duration::from_secs(1)).await;
        let second = registry.create(None).unwrap();
        tokio::time::advance(Duration::from_secs(1)).await;
        registry.get(first.id()).unwrap();

        let third = registry.create(None).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get(second.id()).is_err());
        assert!(registry.get(first.id()).is_ok());
        assert!(registry.get(third.id()).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_removed_session_compile_is_cancelled() {
        let registry = registry(Duration::from_secs(60), 10);
        let session = registry.create(None).unwrap();
        assert!(session.compile());
        registry.remove(session.id()).unwrap();

        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(session.snapshot().playground.result, CompileResult::Compiling);
    }
}
