//! Dashboard Engine
//!
//! Drives fetch cycles against a provider and holds the latest
//! successfully assembled snapshot. Cycles are numbered by a monotonic
//! ordinal; a cycle's result is installed only if no later-initiated
//! cycle has already installed its own, so a slow response can never
//! overwrite a newer view-model. A failed cycle leaves the previous
//! snapshot untouched.

use super::fetch::fetch_all;
use super::view::{assemble, ViewModel};
use crate::provider::{FetchError, ResourceProvider};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// One completed fetch cycle's result.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Ordinal of the cycle that produced this snapshot
    pub cycle: u64,
    /// When the cycle's collections finished fetching
    pub fetched_at: DateTime<Utc>,
    /// The derived view-model
    pub view: ViewModel,
}

/// Fetch-cycle driver and snapshot holder.
pub struct Dashboard<P: ResourceProvider> {
    provider: Arc<P>,
    latest: RwLock<Option<Arc<Snapshot>>>,
    cycle: AtomicU64,
}

impl<P: ResourceProvider> Dashboard<P> {
    /// Create an engine over the given provider. No fetch happens until
    /// the first [`refresh`](Self::refresh).
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            latest: RwLock::new(None),
            cycle: AtomicU64::new(0),
        }
    }

    /// Run one full fetch cycle and return the snapshot that is current
    /// afterwards.
    ///
    /// If a later-initiated cycle completed while this one was in
    /// flight, this cycle's result is discarded and the newer snapshot
    /// is returned instead. On failure the error propagates and
    /// [`latest`](Self::latest) keeps serving the previous snapshot.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, FetchError> {
        let cycle = self.cycle.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(cycle, "Starting fetch cycle");

        let collections = match fetch_all(self.provider.as_ref()).await {
            Ok(collections) => collections,
            Err(e) => {
                tracing::warn!(cycle, error = %e, "Fetch cycle failed, keeping previous snapshot");
                return Err(e);
            }
        };

        let snapshot = Arc::new(Snapshot {
            cycle,
            fetched_at: Utc::now(),
            view: assemble(&collections),
        });

        let mut latest = self.latest.write().await;
        match latest.as_ref() {
            Some(current) if current.cycle > cycle => {
                tracing::debug!(
                    cycle,
                    current = current.cycle,
                    "Discarding stale fetch cycle result"
                );
                Ok(Arc::clone(current))
            }
            _ => {
                tracing::info!(
                    cycle,
                    users = snapshot.view.totals.users,
                    posts = snapshot.view.totals.posts,
                    comments = snapshot.view.totals.comments,
                    todos = snapshot.view.totals.todos,
                    "Installed dashboard snapshot"
                );
                *latest = Some(Arc::clone(&snapshot));
                Ok(snapshot)
            }
        }
    }

    /// The most recent successfully installed snapshot, if any cycle
    /// has completed yet.
    pub async fn latest(&self) -> Option<Arc<Snapshot>> {
        self.latest.read().await.clone()
    }
}
