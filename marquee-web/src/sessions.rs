//! Registry of mounted search screen sessions.
//!
//! One session per page load. Sessions that have not been touched for the
//! configured idle timeout are evicted by a background sweeper; eviction
//! shuts the session's screen actor down.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use marquee_core::CatalogProvider;
use marquee_core::config::SearchDefaults;
use marquee_core::screen::{SearchScreenHandle, spawn_search_screen};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Identifier of one mounted search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random session id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

struct SessionEntry {
    handle: SearchScreenHandle,
    last_seen: Instant,
}

/// Shared map of live search screen sessions.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
    catalog: Arc<dyn CatalogProvider>,
    defaults: SearchDefaults,
}

impl SessionRegistry {
    /// Creates an empty registry whose screens search `catalog`.
    pub fn new(catalog: Arc<dyn CatalogProvider>, defaults: SearchDefaults) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            catalog,
            defaults,
        }
    }

    /// Mounts a new search screen and registers it.
    ///
    /// The screen's initial search is already in flight when this returns.
    pub async fn mount(&self) -> (SessionId, SearchScreenHandle) {
        let id = SessionId::generate();
        let handle = spawn_search_screen(Arc::clone(&self.catalog), &self.defaults);

        self.sessions.write().await.insert(
            id,
            SessionEntry {
                handle: handle.clone(),
                last_seen: Instant::now(),
            },
        );

        tracing::debug!("Mounted search session {}", id);
        (id, handle)
    }

    /// Looks up a session and marks it as recently used.
    pub async fn get(&self, id: SessionId) -> Option<SearchScreenHandle> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.last_seen = Instant::now();
        Some(entry.handle.clone())
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// True when no session is live.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Evicts every session idle for at least `idle_timeout`.
    ///
    /// Returns how many sessions were evicted.
    pub async fn evict_idle(&self, idle_timeout: Duration) -> usize {
        let evicted: Vec<(SessionId, SearchScreenHandle)> = {
            let mut sessions = self.sessions.write().await;
            let idle: Vec<SessionId> = sessions
                .iter()
                .filter(|(_, entry)| entry.last_seen.elapsed() >= idle_timeout)
                .map(|(id, _)| *id)
                .collect();

            idle.into_iter()
                .filter_map(|id| sessions.remove(&id).map(|entry| (id, entry.handle)))
                .collect()
        };

        for (id, handle) in &evicted {
            tracing::debug!("Evicting idle search session {}", id);
            let _ = handle.shutdown().await;
        }

        evicted.len()
    }

    /// Spawns a task that evicts idle sessions every `interval`.
    pub fn spawn_sweeper(&self, interval: Duration, idle_timeout: Duration) -> JoinHandle<()> {
        let registry = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = registry.evict_idle(idle_timeout).await;
                if evicted > 0 {
                    tracing::info!("Evicted {} idle search sessions", evicted);
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use marquee_core::catalog::MockCatalog;

    use super::*;

    fn registry() -> SessionRegistry {
        SessionRegistry::new(Arc::new(MockCatalog::new(1)), SearchDefaults::default())
    }

    #[test]
    fn test_session_id_round_trips_through_text() {
        let id = SessionId::generate();
        assert_eq!(id.to_string().parse::<SessionId>().unwrap(), id);
        assert!("not-a-session".parse::<SessionId>().is_err());
    }

    #[tokio::test]
    async fn test_mount_and_lookup() {
        let registry = registry();
        let (id, _handle) = registry.mount().await;

        assert_eq!(registry.len().await, 1);
        assert!(registry.get(id).await.is_some());
        assert!(registry.get(SessionId::generate()).await.is_none());
    }

    #[tokio::test]
    async fn test_eviction_shuts_screen_down() {
        let registry = registry();
        let (id, handle) = registry.mount().await;

        assert_eq!(registry.evict_idle(Duration::ZERO).await, 1);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(!handle.is_running());
        assert!(registry.get(id).await.is_none());
    }

    #[tokio::test]
    async fn test_evict_idle_keeps_recent_sessions() {
        let registry = registry();
        registry.mount().await;
        registry.mount().await;

        assert_eq!(registry.evict_idle(Duration::from_secs(3600)).await, 0);
        assert_eq!(registry.evict_idle(Duration::ZERO).await, 2);
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_sweeper_evicts_in_background() {
        let registry = registry();
        registry.mount().await;

        let sweeper = registry.spawn_sweeper(Duration::from_millis(10), Duration::ZERO);
        tokio::time::sleep(Duration::from_millis(100)).await;
        sweeper.abort();

        assert!(registry.is_empty().await);
    }
}
