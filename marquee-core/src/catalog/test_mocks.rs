//! Mock catalog providers for testing screens without network access.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Notify, oneshot};

use super::{CatalogEntry, CatalogError, CatalogProvider, MediaKind, SearchQuery};

/// Builds `count` movie entries whose ids and titles start with `prefix`.
pub fn sample_entries(prefix: &str, count: usize) -> Vec<CatalogEntry> {
    (0..count)
        .map(|i| CatalogEntry {
            id: format!("{prefix}-{i}"),
            title: format!("{prefix} {i}"),
            year: format!("{}", 2000 + i),
            kind: MediaKind::Movie,
            poster_url: format!("https://img.example.com/{prefix}-{i}.jpg"),
        })
        .collect()
}

type Responder = dyn Fn(&SearchQuery) -> Result<Vec<CatalogEntry>, CatalogError> + Send + Sync;

/// Catalog that answers every query immediately from a closure.
///
/// Records every query it receives so tests can assert on what was requested.
#[derive(Clone)]
pub struct MockCatalog {
    responder: Arc<Responder>,
    delay: Option<Duration>,
    queries: Arc<Mutex<Vec<SearchQuery>>>,
}

impl std::fmt::Debug for MockCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockCatalog")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl MockCatalog {
    /// Creates a mock answering with `count` entries named after the query text.
    pub fn new(count: usize) -> Self {
        Self::with_responder(move |query| Ok(sample_entries(&query.text, count)))
    }

    /// Creates a mock answering every query with the given closure.
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&SearchQuery) -> Result<Vec<CatalogEntry>, CatalogError> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            delay: None,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a mock that reports no matches for every query.
    pub fn empty() -> Self {
        Self::with_responder(|_| Ok(Vec::new()))
    }

    /// Creates a mock that fails every query with the given error.
    pub fn failing(error: CatalogError) -> Self {
        Self::with_responder(move |_| Err(error.clone()))
    }

    /// Delays every answer by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queries received so far, in arrival order.
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CatalogEntry>, CatalogError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.responder)(query)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

struct PendingSearch {
    query: SearchQuery,
    responder: Option<oneshot::Sender<Result<Vec<CatalogEntry>, CatalogError>>>,
}

/// Catalog whose answers are released by the test, in any order.
///
/// Every search parks until [`GatedCatalog::respond`] is called for its
/// index, which makes out-of-order arrival of responses reproducible.
#[derive(Clone, Default)]
pub struct GatedCatalog {
    pending: Arc<Mutex<Vec<PendingSearch>>>,
    arrived: Arc<Notify>,
}

impl std::fmt::Debug for GatedCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatedCatalog")
            .field("requests", &self.request_count())
            .finish()
    }
}

impl GatedCatalog {
    /// Creates a gated catalog with no pending searches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of searches received so far.
    pub fn request_count(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or_default()
    }

    /// Queries received so far, in arrival order.
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.pending
            .lock()
            .map(|p| p.iter().map(|search| search.query.clone()).collect())
            .unwrap_or_default()
    }

    /// Waits until at least `count` searches have arrived.
    ///
    /// # Panics
    ///
    /// Panics if the searches do not arrive within five seconds.
    pub async fn wait_for_requests(&self, count: usize) {
        let wait = async {
            loop {
                let notified = self.arrived.notified();
                if self.request_count() >= count {
                    return;
                }
                notified.await;
            }
        };
        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .expect("timed out waiting for catalog requests");
    }

    /// Releases the answer for the search at `index` (arrival order).
    ///
    /// Returns false if there is no such search or it was already answered.
    pub fn respond(&self, index: usize, result: Result<Vec<CatalogEntry>, CatalogError>) -> bool {
        let responder = self
            .pending
            .lock()
            .ok()
            .and_then(|mut pending| pending.get_mut(index).and_then(|s| s.responder.take()));

        match responder {
            Some(responder) => responder.send(result).is_ok(),
            None => false,
        }
    }
}

#[async_trait]
impl CatalogProvider for GatedCatalog {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CatalogEntry>, CatalogError> {
        let (responder, receiver) = oneshot::channel();
        if let Ok(mut pending) = self.pending.lock() {
            pending.push(PendingSearch {
                query: query.clone(),
                responder: Some(responder),
            });
        }
        self.arrived.notify_waiters();

        receiver.await.unwrap_or_else(|_| {
            Err(CatalogError::Network {
                reason: "gated search dropped".to_string(),
            })
        })
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}
